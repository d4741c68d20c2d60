//! Bistro back-office terminal console
//!
//! Pages over the in-process services of `bistro_server`: dashboard, staff,
//! menu, orders, reservations, inventory and reports, behind a local login.

pub mod app;
pub mod config;
pub mod event;
pub mod forms;
pub mod pages;
pub mod route;
pub mod session;
pub mod toast;
pub mod ui;
pub mod widgets;

pub use app::{App, run_app};
pub use config::ConsoleConfig;
pub use event::{CrudEvent, PageEvent};
pub use route::{Navigator, Route};
pub use session::Session;
