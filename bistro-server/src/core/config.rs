/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (after `.env` is loaded):
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_DIR | (unset) | Directory for daily rotating log files |
/// | SIMULATE_LATENCY | true | Sleep before every service call |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout (ms) |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 SIMULATE_LATENCY=false cargo run -p bistro-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    pub log_level: String,
    /// Log file directory; console only when unset
    pub log_dir: Option<String>,
    /// Whether services sleep to imitate a remote backend
    pub simulate_latency: bool,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            simulate_latency: std::env::var("SIMULATE_LATENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override selected values
    ///
    /// Mostly used by tests
    pub fn with_overrides(http_port: u16, simulate_latency: bool) -> Self {
        let mut config = Self::from_env();
        config.http_port = http_port;
        config.simulate_latency = simulate_latency;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides() {
        let config = Config::with_overrides(0, false);
        assert_eq!(config.http_port, 0);
        assert!(!config.simulate_latency);
    }

    #[test]
    fn test_environment_predicates() {
        let mut config = Config::with_overrides(0, false);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
        config.request_timeout_ms = 1500;
        assert_eq!(config.request_timeout().as_millis(), 1500);
    }
}
