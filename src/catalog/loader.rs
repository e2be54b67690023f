// src/catalog/loader.rs

//! Cascading catalog loader
//!
//! Three sources, first success wins, never retried:
//!
//! 1. the structured catalog API, normalized into [`AppEntry`] records;
//! 2. `flatpak remote-ls` with categories guessed from the app id;
//! 3. a fixed seed list of well-known applications.
//!
//! The cascade trades completeness for availability: the catalog API is an
//! unversioned external dependency, and the caller must never see an empty
//! catalog.

use super::categories::guess_categories;
use super::AppEntry;
use crate::fetcher::{RawApp, StoreClient};
use crate::flatpak::FlatpakCli;
use serde_json::Value;
use tracing::{info, warn};

/// Placeholder summary for entries with no description anywhere
pub const NO_DESCRIPTION: &str = "No description available";

/// Well-known applications shown when every remote source fails
const SEED_APPS: &[(&str, &str, &str, &str)] = &[
    ("org.mozilla.firefox", "Firefox", "Web browser", "Network"),
    ("org.libreoffice.LibreOffice", "LibreOffice", "Office suite", "Office"),
    ("org.gimp.GIMP", "GIMP", "Image editor", "Graphics"),
    ("org.videolan.VLC", "VLC", "Media player", "AudioVideo"),
    ("org.blender.Blender", "Blender", "3D creation suite", "Graphics"),
    ("com.valvesoftware.Steam", "Steam", "Gaming platform", "Game"),
    ("org.telegram.desktop", "Telegram", "Messaging app", "Network"),
    ("com.spotify.Client", "Spotify", "Music streaming", "AudioVideo"),
    ("org.gnome.gedit", "Text Editor", "Simple text editor", "Utility"),
    ("org.kde.kate", "Kate", "Advanced text editor", "Development"),
];

/// Load the catalog through the cascade
pub fn load_catalog(client: &StoreClient, flatpak: &FlatpakCli) -> Vec<AppEntry> {
    match client.fetch_catalog() {
        Ok(raw) => {
            let apps: Vec<AppEntry> = raw.into_iter().map(normalize).collect();
            info!("Loaded {} applications from the catalog API", apps.len());
            apps
        }
        Err(e) => {
            warn!("Catalog API unavailable ({e}), falling back to flatpak remote-ls");
            load_via_flatpak(flatpak)
        }
    }
}

/// Normalize one raw API record into an [`AppEntry`]
///
/// Total: every record yields an entry. A missing name defaults to the id,
/// a missing summary to the description and then the placeholder, and
/// categories/screenshots to empty.
pub fn normalize(raw: RawApp) -> AppEntry {
    let id = raw.app_id().to_string();

    let name = raw
        .name
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| id.clone());

    let summary = raw
        .summary
        .filter(|s| !s.is_empty())
        .or(raw.description.filter(|d| !d.is_empty()))
        .unwrap_or_else(|| NO_DESCRIPTION.to_string());

    AppEntry {
        name,
        summary,
        categories: string_values(raw.categories),
        icon_url: raw.icon.filter(|i| !i.is_empty()),
        screenshot_urls: string_values(raw.screenshots),
        id,
    }
}

/// Keep only non-empty string values from a loosely-typed JSON array
fn string_values(values: Option<Vec<Value>>) -> Vec<String> {
    values
        .unwrap_or_default()
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) if !s.is_empty() => Some(s),
            _ => None,
        })
        .collect()
}

/// Secondary source: `flatpak remote-ls`, then the seed list
fn load_via_flatpak(flatpak: &FlatpakCli) -> Vec<AppEntry> {
    let rows = match flatpak.remote_ls() {
        Ok(rows) => rows,
        Err(e) => {
            warn!("remote-ls failed: {e}");
            Vec::new()
        }
    };

    if rows.is_empty() {
        info!("No remote listing available, using the seed catalog");
        return seed_entries();
    }

    let apps: Vec<AppEntry> = rows
        .into_iter()
        .map(|row| AppEntry {
            categories: guess_categories(&row.id),
            name: row.name,
            summary: row.description,
            icon_url: None,
            screenshot_urls: Vec::new(),
            id: row.id,
        })
        .collect();

    info!("Loaded {} applications via flatpak remote-ls", apps.len());
    apps
}

/// The fixed seed catalog
pub fn seed_entries() -> Vec<AppEntry> {
    SEED_APPS
        .iter()
        .map(|(id, name, summary, category)| AppEntry {
            id: id.to_string(),
            name: name.to_string(),
            summary: summary.to_string(),
            categories: vec![category.to_string()],
            icon_url: None,
            screenshot_urls: Vec::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_is_total_on_empty_record() {
        let entry = normalize(RawApp::default());
        assert_eq!(entry.id, "");
        assert_eq!(entry.name, "");
        assert_eq!(entry.summary, NO_DESCRIPTION);
        assert!(entry.categories.is_empty());
        assert!(entry.icon_url.is_none());
        assert!(entry.screenshot_urls.is_empty());
    }

    #[test]
    fn normalize_prefers_id_over_flatpak_app_id() {
        let raw = RawApp {
            id: Some("org.new.Id".to_string()),
            flatpak_app_id: Some("org.old.Id".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(raw).id, "org.new.Id");
    }

    #[test]
    fn normalize_falls_back_to_description() {
        let raw = RawApp {
            id: Some("x".to_string()),
            description: Some("From description".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(raw).summary, "From description");
    }

    #[test]
    fn normalize_defaults_name_to_id() {
        let raw = RawApp {
            id: Some("org.example.App".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(raw).name, "org.example.App");
    }

    #[test]
    fn non_string_json_values_are_dropped() {
        let raw = RawApp {
            id: Some("x".to_string()),
            categories: Some(vec![
                Value::String("Game".to_string()),
                Value::Number(7.into()),
                Value::String(String::new()),
            ]),
            screenshots: Some(vec![Value::Bool(true)]),
            ..Default::default()
        };
        let entry = normalize(raw);
        assert_eq!(entry.categories, vec!["Game"]);
        assert!(entry.screenshot_urls.is_empty());
    }

    #[test]
    fn seed_catalog_is_complete() {
        let seed = seed_entries();
        assert_eq!(seed.len(), 10);
        assert!(seed.iter().all(|e| !e.categories.is_empty()));
        assert!(seed.iter().any(|e| e.id == "org.videolan.VLC"));
    }
}
