//! Simulated backend latency

use std::time::Duration;

/// Service operation kinds, each with a fixed artificial delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn delay(&self) -> Duration {
        match self {
            Self::Fetch => Duration::from_millis(800),
            Self::Get => Duration::from_millis(400),
            Self::Create | Self::Update => Duration::from_millis(1000),
            Self::Delete => Duration::from_millis(800),
        }
    }
}

/// Sleeps for an operation's delay when enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn from_flag(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub async fn simulate(&self, op: Operation) {
        if self.enabled {
            tokio::time::sleep(op.delay()).await;
        }
    }
}
