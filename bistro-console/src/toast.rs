//! Transient notifications

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

/// Toast queue, oldest first
#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.push_at(kind, message, Instant::now());
    }

    pub fn push_at(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.items.push(Toast {
            kind,
            message: message.into(),
            created_at: now,
        });
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::error!("{}", message);
        self.push(ToastKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    /// Drop toasts older than [`TOAST_TTL`]
    pub fn expire(&mut self, now: Instant) {
        self.items
            .retain(|t| now.saturating_duration_since(t.created_at) < TOAST_TTL);
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn last(&self) -> Option<&Toast> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let mut toasts = Toasts::default();
        let start = Instant::now();
        toasts.push_at(ToastKind::Success, "old", start);
        toasts.push_at(ToastKind::Info, "new", start + Duration::from_secs(3));

        toasts.expire(start + Duration::from_secs(6));
        assert_eq!(toasts.items().len(), 1);
        assert_eq!(toasts.last().unwrap().message, "new");

        toasts.dismiss_all();
        assert!(toasts.items().is_empty());
    }
}
