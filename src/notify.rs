//! Notification sinks: where playlist operations report their outcomes.
//!
//! The core only knows the [`NotificationSink`] trait. [`LogSink`] forwards
//! to `tracing`; [`MessageLog`] also keeps a short in-memory history for
//! status lines and tests.

use std::collections::VecDeque;

/// How an outcome should be presented.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Receives user-facing outcome messages.
pub trait NotificationSink {
    fn notify(&mut self, severity: Severity, message: &str);

    fn success(&mut self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn warning(&mut self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    fn error(&mut self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

impl<S: NotificationSink + ?Sized> NotificationSink for &mut S {
    fn notify(&mut self, severity: Severity, message: &str) {
        (**self).notify(severity, message);
    }
}

fn log_notification(severity: Severity, message: &str) {
    match severity {
        Severity::Success => tracing::info!(target: "cuelist::notify", "{message}"),
        Severity::Warning => tracing::warn!(target: "cuelist::notify", "{message}"),
        Severity::Error => tracing::error!(target: "cuelist::notify", "{message}"),
    }
}

/// Sink that only emits `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&mut self, severity: Severity, message: &str) {
        log_notification(severity, message);
    }
}

/// A single reported outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

/// Bounded history of notifications, oldest first.
///
/// Every message is also logged through `tracing`.
#[derive(Debug, Clone)]
pub struct MessageLog {
    messages: VecDeque<Notification>,
    capacity: usize,
}

impl MessageLog {
    pub const DEFAULT_CAPACITY: usize = 32;

    /// Create a log keeping at most `capacity` messages (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            messages: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The most recent notification.
    pub fn latest(&self) -> Option<&Notification> {
        self.messages.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl NotificationSink for MessageLog {
    fn notify(&mut self, severity: Severity, message: &str) {
        log_notification(severity, message);

        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(Notification {
            severity,
            message: message.to_string(),
        });
    }
}
