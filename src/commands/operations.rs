// src/commands/operations.rs

//! Install/uninstall/update/run through the store event loop
//!
//! The operation runs on a worker thread; this thread owns the state and
//! drains the event channel until the worker's senders close. This is the
//! same wiring a GUI frontend would use, with println! standing in for
//! widget updates.

use anyhow::Result;
use origami::config::StoreConfig;
use origami::flatpak::{FlatpakCli, OperationKind, OperationRunner};
use origami::store::{self, ChannelStatus, StoreEvent, StoreState};
use std::sync::Arc;
use std::thread;

/// Run one package operation to completion
pub fn cmd_operation(config: &StoreConfig, kind: OperationKind, app_id: &str) -> Result<()> {
    let flatpak = FlatpakCli::new(&config.remote);

    // Prefer the installed list's display name; fall back to the id
    let name = flatpak
        .list_installed()
        .ok()
        .and_then(|rows| rows.into_iter().find(|row| row.id == app_id))
        .map(|row| row.name)
        .unwrap_or_else(|| app_id.to_string());

    let (tx, rx) = store::channel();
    let status = Arc::new(ChannelStatus::new(tx.clone()));
    let runner = OperationRunner::new(flatpak.clone(), tx, status);

    let id = app_id.to_string();
    let worker = thread::spawn(move || runner.run(kind, &id, &name));

    let mut state = StoreState::default();
    // The loop ends when the worker finishes and drops its senders
    for event in rx.iter() {
        match &event {
            StoreEvent::Status(text) => println!("{text}"),
            StoreEvent::ReloadInstalled => {
                if let Ok(rows) = flatpak.list_installed() {
                    state.apply(StoreEvent::InstalledLoaded(rows));
                }
            }
            _ => {}
        }
        state.apply(event);
    }

    worker
        .join()
        .map_err(|_| anyhow::anyhow!("operation worker panicked"))?;

    Ok(())
}
