// src/store/state.rs

//! The store's mutable state and its event application
//!
//! One struct owns everything the presentation layer renders: the catalog,
//! the installed set, and the in-flight operation labels. It is mutated
//! only through [`StoreState::apply`] on the event consumer's thread, which
//! is what makes the worker side lock-free.

use super::events::StoreEvent;
use crate::catalog::AppEntry;
use crate::flatpak::OperationKind;
use std::collections::{BTreeSet, HashMap};

/// Aggregate state for one store session
#[derive(Debug, Default)]
pub struct StoreState {
    /// Current catalog, replaced wholesale on every load
    pub apps: Vec<AppEntry>,
    /// Ids of installed applications; rebuilt on load, optimistically
    /// flipped when an operation succeeds, reconciled by the next load
    pub installed: BTreeSet<String>,
    /// In-flight operation labels keyed by app id
    pub operations: HashMap<String, String>,
}

impl StoreState {
    /// Apply one event
    ///
    /// `ReloadInstalled` and `Status` carry no state; the consumer handles
    /// their side effects and applying them here is a no-op.
    pub fn apply(&mut self, event: StoreEvent) {
        match event {
            StoreEvent::CatalogLoaded(apps) => {
                self.apps = apps;
            }
            StoreEvent::InstalledLoaded(rows) => {
                self.installed = rows.into_iter().map(|row| row.id).collect();
            }
            StoreEvent::OperationStarted { id, label } => {
                self.operations.insert(id, label);
            }
            StoreEvent::OperationFinished { id, kind, success } => {
                self.operations.remove(&id);
                if success {
                    match kind {
                        OperationKind::Install => {
                            self.installed.insert(id);
                        }
                        OperationKind::Uninstall => {
                            self.installed.remove(&id);
                        }
                        _ => {}
                    }
                }
            }
            StoreEvent::ReloadInstalled | StoreEvent::Status(_) => {}
        }
    }

    pub fn is_installed(&self, app_id: &str) -> bool {
        self.installed.contains(app_id)
    }

    /// In-progress label for an app, if an operation is running
    pub fn operation_label(&self, app_id: &str) -> Option<&str> {
        self.operations.get(app_id).map(String::as_str)
    }
}
