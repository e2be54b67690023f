// src/flatpak/mod.rs

//! Front door to the external flatpak tool
//!
//! Everything the store knows about installed and installable packages
//! comes from shelling out to `flatpak` and scraping its column output.
//! The binary name and remote are plain fields so tests can substitute a
//! script or a nonexistent program.

mod ops;
mod query;

pub use ops::{OperationKind, OperationRunner};
pub use query::{parse_columns, AppRow};

use crate::config::DEFAULT_REMOTE;
use crate::error::{Error, Result};
use std::process::{Command, Stdio};
use std::time::Duration;
use tracing::{debug, info, warn};
use wait_timeout::ChildExt;

/// Deadline for the `flatpak --version` probe
const VERSION_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the flatpak command-line tool
#[derive(Debug, Clone)]
pub struct FlatpakCli {
    program: String,
    remote: String,
}

impl Default for FlatpakCli {
    fn default() -> Self {
        Self::new(DEFAULT_REMOTE)
    }
}

impl FlatpakCli {
    /// Handle using the `flatpak` binary on PATH and the given remote
    pub fn new(remote: &str) -> Self {
        Self {
            program: "flatpak".to_string(),
            remote: remote.to_string(),
        }
    }

    /// Handle using an explicit program path (used by tests)
    pub fn with_program(program: &str, remote: &str) -> Self {
        Self {
            program: program.to_string(),
            remote: remote.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Probe the tool version, with a bounded wait
    ///
    /// Distinguishes "flatpak is not installed" from "flatpak is wedged" so
    /// the setup command can give accurate advice.
    pub fn version(&self) -> Result<String> {
        let mut child = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                Error::InitError(format!(
                    "Failed to run {}: {e}. Is flatpak installed?",
                    self.program
                ))
            })?;

        match child.wait_timeout(VERSION_PROBE_TIMEOUT)? {
            Some(status) => {
                let output = child.wait_with_output()?;
                if !status.success() {
                    return Err(Error::FlatpakError(format!(
                        "{} --version exited with {}",
                        self.program,
                        status.code().unwrap_or(-1)
                    )));
                }
                Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            None => {
                let _ = child.kill();
                Err(Error::TimeoutError(format!(
                    "{} --version did not finish within {} seconds",
                    self.program,
                    VERSION_PROBE_TIMEOUT.as_secs()
                )))
            }
        }
    }

    /// Names of configured remotes
    pub fn remotes(&self) -> Result<Vec<String>> {
        let output = self.run_capture(&["remotes"])?;
        Ok(output
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .map(|name| name.to_string())
            .collect())
    }

    /// Add the configured remote if it is not present yet
    ///
    /// Returns `true` when a `remote-add` was actually performed.
    pub fn ensure_remote(&self, repo_url: &str) -> Result<bool> {
        match self.remotes() {
            Ok(remotes) if remotes.iter().any(|r| r == &self.remote) => {
                debug!("Remote '{}' already configured", self.remote);
                return Ok(false);
            }
            Ok(_) => {}
            // Listing remotes failing is not fatal; try the add anyway
            Err(e) => warn!("Could not list remotes: {e}"),
        }

        info!("Adding flatpak remote '{}'", self.remote);
        self.run_capture(&[
            "remote-add",
            "--if-not-exists",
            "--user",
            &self.remote,
            repo_url,
        ])?;
        Ok(true)
    }

    /// Enumerate installed applications
    pub fn list_installed(&self) -> Result<Vec<AppRow>> {
        debug!("Querying installed flatpak applications");
        let output = self.run_capture(&[
            "list",
            "--app",
            "--columns=application,name,description",
        ])?;

        let rows = parse_columns(&output);
        debug!("Found {} installed applications", rows.len());
        Ok(rows)
    }

    /// Enumerate applications installable from the remote
    pub fn remote_ls(&self) -> Result<Vec<AppRow>> {
        debug!("Listing applications from remote '{}'", self.remote);
        let output = self.run_capture(&[
            "remote-ls",
            "--app",
            &self.remote,
            "--columns=application,name,description",
        ])?;

        Ok(parse_columns(&output))
    }

    /// Run a subcommand to completion and return stdout
    fn run_capture(&self, args: &[&str]) -> Result<String> {
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                Error::InitError(format!(
                    "Failed to run {}: {e}. Is flatpak installed?",
                    self.program
                ))
            })?;

        if !output.status.success() {
            return Err(Error::FlatpakError(format!(
                "{} {} failed: {}",
                self.program,
                args.first().unwrap_or(&""),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
