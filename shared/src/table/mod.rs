//! Generic data table
//!
//! Rendering-agnostic table model: column descriptors, free-text search over
//! serialized rows, fixed-size pagination and pager button generation. The
//! console draws a [`TableView`] with ratatui; the REST list endpoints reuse
//! the same search and paging.
//!
//! ```
//! use shared::table::{Column, DataTable, PageButton};
//! # #[derive(serde::Serialize)] struct Dish { id: i64, name: String }
//! let dishes: Vec<Dish> = (1..=23).map(|id| Dish { id, name: format!("dish {id}") }).collect();
//! let mut table = DataTable::new(vec![Column::field("Name", "name")]);
//! table.state.go_to(2);
//! let view = table.view(&dishes);
//! assert_eq!(view.buttons, vec![PageButton::Page(1), PageButton::Page(2), PageButton::Page(3)]);
//! ```

mod column;
mod filter;
mod pagination;
mod view;

pub use column::{Accessor, BadgeTone, Cell, Column};
pub use filter::{filter_rows, js_string, matches, row_fields};
pub use pagination::{PAGE_SIZE, PageButton, clamp_page, page_buttons, page_count, page_slice};
pub use view::{ClickOrigin, DataTable, EMPTY_PLACEHOLDER, TableOptions, TableState, TableView};
