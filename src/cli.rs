// src/cli.rs

//! Command-line interface definition

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "origami")]
#[command(author, version, about = "Browse, install, and manage Flathub applications", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog
    Search {
        /// Search term matched against name, summary, and id
        term: Option<String>,
        /// Category filter (e.g. Network, Graphics); "all" disables it
        #[arg(short, long, default_value = "all")]
        category: String,
    },
    /// List installed applications
    Installed,
    /// Install an application
    Install {
        /// Application id (e.g. org.mozilla.firefox)
        app_id: String,
    },
    /// Uninstall an application
    Uninstall {
        /// Application id
        app_id: String,
    },
    /// Update one application, or all of them
    Update {
        /// Application id; omit to update everything
        app_id: Option<String>,
    },
    /// Launch an installed application
    Run {
        /// Application id
        app_id: String,
    },
    /// Check the flatpak tool and configure the remote
    Setup,
    /// Download icons (and optionally banners) into the image cache
    Prefetch {
        /// Also fetch screenshot banners
        #[arg(long)]
        banners: bool,
        /// Concurrent download workers
        #[arg(long, default_value_t = 4)]
        jobs: usize,
    },
    /// Inspect or empty the image cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show cached file count and total size
    Stats,
    /// Delete every cached image
    Clear,
}
