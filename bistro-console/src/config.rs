//! Console configuration

use std::time::Duration;

/// Console configuration
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | LOG_LEVEL | info | Log level shown in the log panel |
/// | SIMULATE_LATENCY | true | Sleep before every service call |
/// | TICK_MS | 100 | Input poll interval (ms) |
/// | API_PORT | (unset) | Also serve the REST API on this port, sharing the store |
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub log_level: String,
    pub simulate_latency: bool,
    pub tick_ms: u64,
    pub api_port: Option<u16>,
}

impl ConsoleConfig {
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            simulate_latency: std::env::var("SIMULATE_LATENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            tick_ms: std::env::var("TICK_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(100),
            api_port: std::env::var("API_PORT").ok().and_then(|p| p.parse().ok()),
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// `log` crate level matching `log_level`, Info when unknown
    pub fn log_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Server config for the embedded services
    pub fn server_config(&self) -> bistro_server::Config {
        let mut config =
            bistro_server::Config::with_overrides(self.api_port.unwrap_or(3000), self.simulate_latency);
        config.log_level = self.log_level.clone();
        config
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
