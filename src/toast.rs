//! Toast notifications
//!
//! Toasts are short messages stacked in the top-right corner. Each one expires
//! on its own after the configured lifetime; the newest can also be dismissed
//! by hand. Severity only changes how a toast is drawn.

use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Danger,
}

impl ToastLevel {
    pub fn label(self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "success",
            ToastLevel::Warning => "warning",
            ToastLevel::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    pub created_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= lifetime
    }
}

/// Stack of live toasts, oldest first
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    lifetime: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: Vec::new(),
            lifetime,
        }
    }

    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.push_at(message, level, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, level: ToastLevel, created_at: Instant) {
        let message = message.into();
        tracing::debug!(level = level.label(), %message, "toast");
        self.items.push(Toast {
            message,
            level,
            created_at,
        });
    }

    /// Drop every toast whose lifetime has elapsed at `now`
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items.retain(|toast| !toast.is_expired(now, lifetime));
    }

    /// Remove the most recently shown toast
    pub fn dismiss_latest(&mut self) -> Option<Toast> {
        self.items.pop()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
