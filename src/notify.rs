//! Transient toast notifications
//!
//! The submit flow reports outcomes through the [`Notifier`] trait; the app
//! owns a [`ToastStack`] implementing it, rendered as an overlay and drained
//! on a timer by the event loop.

use std::time::{Duration, Instant};

/// How long a toast stays on screen before auto-dismissing
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Visual severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Default,
    Destructive,
}

/// Sink for user-facing notifications
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str, severity: Severity);
}

/// A single transient notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    raised_at: Instant,
}

impl Toast {
    fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
            raised_at: Instant::now(),
        }
    }

    fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.raised_at) >= TOAST_TTL
    }
}

/// Queue of live toasts, newest last
#[derive(Debug, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Drop toasts that have outlived their display interval
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.toasts.retain(|t| !t.expired_at(now));
    }

    /// Toasts currently on screen
    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for ToastStack {
    fn notify(&mut self, title: &str, description: &str, severity: Severity) {
        self.toasts.push(Toast::new(title, description, severity));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_pushes_toast() {
        let mut stack = ToastStack::default();
        assert!(stack.is_empty());
        stack.notify("Success", "answers submitted", Severity::Default);
        assert_eq!(stack.visible().len(), 1);
        assert_eq!(stack.visible()[0].title, "Success");
        assert_eq!(stack.visible()[0].description, "answers submitted");
        assert_eq!(stack.visible()[0].severity, Severity::Default);
    }

    #[test]
    fn test_toasts_stack_in_order() {
        let mut stack = ToastStack::default();
        stack.notify("Error", "first", Severity::Destructive);
        stack.notify("Error", "second", Severity::Destructive);
        let descriptions: Vec<_> = stack.visible().iter().map(|t| t.description.clone()).collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    #[test]
    fn test_tick_keeps_fresh_toasts() {
        let mut stack = ToastStack::default();
        stack.notify("Error", "still here", Severity::Destructive);
        stack.tick();
        assert_eq!(stack.visible().len(), 1);
    }

    #[test]
    fn test_expiry_is_ttl_based() {
        let toast = Toast::new("Error", "old", Severity::Destructive);
        let now = Instant::now();
        assert!(!toast.expired_at(now));
        assert!(toast.expired_at(now + TOAST_TTL));
    }
}
