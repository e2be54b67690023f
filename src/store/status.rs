// src/store/status.rs

//! Status sink trait and implementations
//!
//! The status sink is where operations report human-readable progress and
//! terminal messages. Implementations must be thread-safe: operations run
//! on worker threads.

use super::events::{EventSender, StoreEvent};
use tracing::info;

/// Receiver for user-visible status text
pub trait StatusSink: Send + Sync {
    fn message(&self, text: &str);
}

/// Logs status messages through tracing
pub struct LogStatus;

impl StatusSink for LogStatus {
    fn message(&self, text: &str) {
        info!("{text}");
    }
}

/// Posts status messages onto the store event channel
pub struct ChannelStatus {
    sender: EventSender,
}

impl ChannelStatus {
    pub fn new(sender: EventSender) -> Self {
        Self { sender }
    }
}

impl StatusSink for ChannelStatus {
    fn message(&self, text: &str) {
        // A closed channel just means nobody is listening anymore
        let _ = self.sender.send(StoreEvent::Status(text.to_string()));
    }
}

/// Discards all status messages
pub struct SilentStatus;

impl StatusSink for SilentStatus {
    fn message(&self, _text: &str) {}
}
