//! Bistro Server - restaurant back office backend
//!
//! In-memory mock backend for the back office: seeded collections, resource
//! services with simulated latency and a REST API mirroring the service
//! operations.
//!
//! ```text
//! bistro-server/src/
//! ├── core/          # config, state, server, errors
//! ├── db/            # in-memory store, seed data, repositories
//! ├── services/      # staff, menu, read-only and dashboard services
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, clock
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-exports
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::Database;
pub use services::{CrudService, Latency};
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Load `.env`, then read the configuration and start logging
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;

    if let Some(dir) = config.log_dir.as_deref() {
        let today = chrono::Local::now().date_naive();
        match cleanup_old_logs(std::path::Path::new(dir), today) {
            Ok(0) => {}
            Ok(removed) => tracing::info!(removed, "Old log files cleaned up"),
            Err(e) => tracing::warn!("Log cleanup failed: {}", e),
        }
    }

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____  _      __
   / __ )(_)____/ /__________
  / __  / / ___/ __/ ___/ __ \
 / /_/ / (__  ) /_/ /  / /_/ /
/_____/_/____/\__/_/   \____/
        back office server
    "#
    );
}
