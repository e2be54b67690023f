// src/store/events.rs

//! Event channel between workers and the state-owning consumer
//!
//! Workers never touch store state directly: they post `StoreEvent`s onto
//! this channel and a single consuming loop applies them in arrival order.
//! Ordering across workers is unspecified; every event is an idempotent
//! keyed mutation, so last-completed wins.

use crate::catalog::AppEntry;
use crate::flatpak::{AppRow, OperationKind};

/// Everything a worker can tell the store
#[derive(Debug, Clone)]
pub enum StoreEvent {
    /// A catalog load finished; replaces the app list wholesale
    CatalogLoaded(Vec<AppEntry>),
    /// An installed-set load finished; replaces the set wholesale
    InstalledLoaded(Vec<AppRow>),
    /// An operation began; adds an in-progress label for the id
    OperationStarted { id: String, label: String },
    /// An operation ended; clears the label and optimistically flips the
    /// installed set on success
    OperationFinished {
        id: String,
        kind: OperationKind,
        success: bool,
    },
    /// The consumer should schedule a fresh installed-set load
    ReloadInstalled,
    /// Human-readable status text for the user
    Status(String),
}

pub type EventSender = flume::Sender<StoreEvent>;
pub type EventReceiver = flume::Receiver<StoreEvent>;

/// Create the worker-to-consumer event channel
pub fn channel() -> (EventSender, EventReceiver) {
    flume::unbounded()
}
