// src/flatpak/ops.rs

//! Operation runner for install/uninstall/update/run
//!
//! Each operation runs the flatpak tool non-interactively in user scope.
//! Install streams output line by line to the status sink as it arrives;
//! uninstall and update capture output and classify success purely by exit
//! code; run is fire-and-forget.
//!
//! The lifecycle contract: an operation posts `OperationStarted` before the
//! subprocess is touched, and `OperationFinished` plus a terminal status
//! message on every exit path, including when spawning the subprocess
//! itself fails. All mutation of shared state happens on the event
//! consumer's side, never here.

use super::FlatpakCli;
use crate::error::{Error, Result};
use crate::store::events::{EventSender, StoreEvent};
use crate::store::status::StatusSink;
use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::Arc;
use tracing::{debug, warn};

/// The operations the store can perform on a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Install,
    Uninstall,
    Update,
    UpdateAll,
    Run,
}

impl OperationKind {
    /// In-progress label shown on the package card, if this operation is
    /// tracked per id (run and update-all are not)
    pub fn in_flight_label(&self, name: &str) -> Option<String> {
        match self {
            Self::Install => Some(format!("Installing {name}...")),
            Self::Uninstall => Some(format!("Uninstalling {name}...")),
            Self::Update => Some(format!("Updating {name}...")),
            Self::UpdateAll | Self::Run => None,
        }
    }

    /// Whether completion triggers an installed-set reload
    pub fn reloads_installed(&self) -> bool {
        !matches!(self, Self::Run)
    }
}

/// Executes package operations and reports their lifecycle over the event
/// channel
pub struct OperationRunner {
    cli: FlatpakCli,
    events: EventSender,
    status: Arc<dyn StatusSink>,
}

impl OperationRunner {
    pub fn new(cli: FlatpakCli, events: EventSender, status: Arc<dyn StatusSink>) -> Self {
        Self { cli, events, status }
    }

    /// Run one operation through its full lifecycle
    ///
    /// Never returns an error: failures become status text. The finished
    /// event and terminal message are emitted on every path.
    pub fn run(&self, kind: OperationKind, app_id: &str, name: &str) {
        if let Some(label) = kind.in_flight_label(name) {
            self.status.message(&label);
            self.send(StoreEvent::OperationStarted {
                id: app_id.to_string(),
                label,
            });
        } else if kind == OperationKind::UpdateAll {
            self.status.message("Updating all applications...");
        }

        let success = match self.execute(kind, app_id, name) {
            Ok(success) => success,
            Err(e) => {
                warn!("{:?} for {} failed: {}", kind, app_id, e);
                self.status.message(&spawn_error_message(kind, app_id, name, &e));
                false
            }
        };

        // Cleanup runs regardless of how execute ended
        self.send(StoreEvent::OperationFinished {
            id: app_id.to_string(),
            kind,
            success,
        });
        if kind.reloads_installed() {
            self.send(StoreEvent::ReloadInstalled);
        }
    }

    fn execute(&self, kind: OperationKind, app_id: &str, name: &str) -> Result<bool> {
        match kind {
            OperationKind::Install => self.install(app_id, name),
            OperationKind::Uninstall => self.uninstall(app_id, name),
            OperationKind::Update => self.update(app_id, name),
            OperationKind::UpdateAll => self.update_all(),
            OperationKind::Run => self.launch(app_id),
        }
    }

    /// `flatpak install --user -y <remote> <id>`, streaming each output line
    fn install(&self, app_id: &str, name: &str) -> Result<bool> {
        let mut child = Command::new(self.cli.program())
            .args(["install", "--user", "-y", self.cli.remote(), app_id])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::FlatpakError(format!("Failed to spawn install: {e}")))?;

        if let Some(stdout) = child.stdout.take() {
            for line in BufReader::new(stdout).lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(_) => break,
                };
                let line = line.trim();
                if !line.is_empty() {
                    self.status.message(&format!("Installing {name}: {line}"));
                }
            }
        }

        let status = child
            .wait()
            .map_err(|e| Error::FlatpakError(format!("Failed to wait for install: {e}")))?;

        if status.success() {
            self.status.message(&format!("Successfully installed {name}"));
            Ok(true)
        } else {
            self.status.message(&format!("Failed to install {name}"));
            Ok(false)
        }
    }

    /// `flatpak uninstall --user -y <id>`
    fn uninstall(&self, app_id: &str, name: &str) -> Result<bool> {
        let output = Command::new(self.cli.program())
            .args(["uninstall", "--user", "-y", app_id])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::FlatpakError(format!("Failed to spawn uninstall: {e}")))?;

        if output.status.success() {
            self.status.message(&format!("Successfully uninstalled {name}"));
            Ok(true)
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            self.status
                .message(&format!("Failed to uninstall {name}: {}", stderr.trim()));
            Ok(false)
        }
    }

    /// `flatpak update --user -y <id>`
    fn update(&self, app_id: &str, name: &str) -> Result<bool> {
        let output = Command::new(self.cli.program())
            .args(["update", "--user", "-y", app_id])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::FlatpakError(format!("Failed to spawn update: {e}")))?;

        if output.status.success() {
            self.status.message(&format!("Successfully updated {name}"));
            Ok(true)
        } else {
            self.status
                .message(&format!("No updates available for {name}"));
            Ok(false)
        }
    }

    /// `flatpak update --user -y`
    fn update_all(&self) -> Result<bool> {
        let output = Command::new(self.cli.program())
            .args(["update", "--user", "-y"])
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::FlatpakError(format!("Failed to spawn update: {e}")))?;

        if output.status.success() {
            self.status.message("All applications updated successfully");
            Ok(true)
        } else {
            self.status.message("Update completed with some issues");
            Ok(false)
        }
    }

    /// `flatpak run <id>`: detached launch, no wait, no capture
    fn launch(&self, app_id: &str) -> Result<bool> {
        Command::new(self.cli.program())
            .args(["run", app_id])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::FlatpakError(format!("Failed to launch: {e}")))?;

        self.status.message(&format!("Launched {app_id}"));
        Ok(true)
    }

    fn send(&self, event: StoreEvent) {
        if self.events.send(event).is_err() {
            debug!("Event channel closed, dropping event");
        }
    }
}

/// Terminal message for operations that never got past spawning
fn spawn_error_message(kind: OperationKind, app_id: &str, name: &str, e: &Error) -> String {
    match kind {
        OperationKind::Install => format!("Error installing {name}: {e}"),
        OperationKind::Uninstall => format!("Error uninstalling {name}: {e}"),
        OperationKind::Update => format!("Error updating {name}: {e}"),
        OperationKind::UpdateAll => format!("Error updating applications: {e}"),
        OperationKind::Run => format!("Error launching {app_id}: {e}"),
    }
}
