//! Diagnostics: out-of-band messages and the per-file warning log.

use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One queued message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub severity: Severity,
    pub text: String,
}

/// Receives messages that must surface to the caller without aborting
/// parsing, such as the aggregated warning report or the "file is newer"
/// notice. A sink is injected into the reader at construction.
pub trait MessageSink: Send + Sync {
    fn message(&self, severity: Severity, text: &str);
}

/// Sink that queues messages for later inspection.
#[derive(Debug, Default)]
pub struct MessageQueue {
    messages: Mutex<Vec<Message>>,
}

impl MessageQueue {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Take all queued messages, leaving the queue empty.
    pub fn drain(&self) -> Vec<Message> {
        let mut messages = self.messages.lock().unwrap_or_else(|err| err.into_inner());
        std::mem::take(&mut *messages)
    }

    pub fn is_empty(&self) -> bool {
        let messages = self.messages.lock().unwrap_or_else(|err| err.into_inner());
        messages.is_empty()
    }
}

impl MessageSink for MessageQueue {
    fn message(&self, severity: Severity, text: &str) {
        let mut messages = self.messages.lock().unwrap_or_else(|err| err.into_inner());
        messages.push(Message {
            severity,
            text: text.to_owned(),
        });
    }
}

/// Sink that discards every message.
#[derive(Debug, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn message(&self, _severity: Severity, _text: &str) {}
}

/// One recorded reader warning, tied to the line it was raised on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub line: usize,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_queue_collects_and_drains() {
        let queue = MessageQueue::new();
        assert!(queue.is_empty());

        queue.message(Severity::Warning, "first");
        queue.message(Severity::Error, "second");

        let messages = queue.drain();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].severity, Severity::Warning);
        assert_eq!(messages[0].text, "first");
        assert_eq!(messages[1].severity, Severity::Error);
        assert!(queue.is_empty());
    }

    #[rstest::rstest]
    fn test_null_sink_discards() {
        NullSink.message(Severity::Warning, "nobody hears this");
    }
}
