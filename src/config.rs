// src/config.rs

//! Storefront configuration
//!
//! Defaults point at Flathub. Every knob can be overridden through the
//! environment so tests and alternate deployments can redirect the catalog
//! API, the flatpak remote, and the cache directory without touching code.

use std::env;
use std::path::PathBuf;

/// Default catalog API base URL
pub const DEFAULT_API_BASE: &str = "https://flathub.org";

/// Default flatpak remote name
pub const DEFAULT_REMOTE: &str = "flathub";

/// Default .flatpakrepo URL for the remote
pub const DEFAULT_REMOTE_REPO: &str = "https://flathub.org/repo/flathub.flatpakrepo";

/// Maximum number of entries CLI handlers display per listing
pub const DISPLAY_CAP: usize = 50;

/// Runtime configuration for the storefront
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL for the catalog and detail APIs
    pub api_base: String,
    /// Name of the flatpak remote to install from
    pub remote: String,
    /// Repository URL used when adding the remote
    pub remote_repo: String,
    /// Directory holding cached images
    pub cache_dir: PathBuf,
}

impl StoreConfig {
    /// Build a configuration from defaults and environment overrides
    ///
    /// Recognized variables: `ORIGAMI_API_BASE`, `ORIGAMI_REMOTE`,
    /// `ORIGAMI_CACHE_DIR`.
    pub fn from_env() -> Self {
        let api_base = env::var("ORIGAMI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let remote = env::var("ORIGAMI_REMOTE").unwrap_or_else(|_| DEFAULT_REMOTE.to_string());
        let cache_dir = env::var("ORIGAMI_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_cache_dir());

        Self {
            api_base,
            remote,
            remote_repo: DEFAULT_REMOTE_REPO.to_string(),
            cache_dir,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            remote_repo: DEFAULT_REMOTE_REPO.to_string(),
            cache_dir: default_cache_dir(),
        }
    }
}

/// Per-user image cache directory (`~/.cache/origami-store`)
fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("origami-store")
}
