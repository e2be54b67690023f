// src/fetcher/models.rs

//! Catalog API data structures
//!
//! Types for the JSON shapes returned by the catalog and detail endpoints.
//! The catalog API is an unversioned external dependency, so every field is
//! optional and both known envelope shapes (bare array and `{"apps": [...]}`)
//! are accepted.

use serde::Deserialize;
use serde_json::Value;

/// One raw catalog entry as returned by the API
///
/// Older responses carry `flatpakAppId` instead of `id`, and either
/// `summary` or `description`; normalization prefers the newer field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawApp {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "flatpakAppId")]
    pub flatpak_app_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<Value>>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub screenshots: Option<Vec<Value>>,
}

impl RawApp {
    /// Preferred application id (`id`, falling back to `flatpakAppId`)
    pub fn app_id(&self) -> &str {
        self.id
            .as_deref()
            .or(self.flatpak_app_id.as_deref())
            .unwrap_or("")
    }
}

/// Catalog index response envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogResponse {
    /// Bare JSON array of apps
    Apps(Vec<RawApp>),
    /// Object wrapping the array under an `apps` key
    Wrapped { apps: Vec<RawApp> },
}

impl CatalogResponse {
    pub fn into_apps(self) -> Vec<RawApp> {
        match self {
            Self::Apps(apps) => apps,
            Self::Wrapped { apps } => apps,
        }
    }
}

/// Per-app detail response; only the screenshot list is read
#[derive(Debug, Deserialize)]
pub struct AppDetail {
    #[serde(default)]
    pub screenshots: Vec<DetailScreenshot>,
}

/// One screenshot entry from the detail endpoint
#[derive(Debug, Deserialize)]
pub struct DetailScreenshot {
    #[serde(default, rename = "imgDesktopUrl")]
    pub img_desktop_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_array_response() {
        let body = r#"[{"id":"org.videolan.VLC","name":"VLC","summary":"Media player"}]"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        let apps = response.into_apps();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].app_id(), "org.videolan.VLC");
        assert_eq!(apps[0].summary.as_deref(), Some("Media player"));
    }

    #[test]
    fn parses_wrapped_response() {
        let body = r#"{"apps":[{"flatpakAppId":"org.gimp.GIMP","description":"Image editor"}]}"#;
        let response: CatalogResponse = serde_json::from_str(body).unwrap();
        let apps = response.into_apps();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].app_id(), "org.gimp.GIMP");
        assert!(apps[0].id.is_none());
        assert_eq!(apps[0].description.as_deref(), Some("Image editor"));
    }

    #[test]
    fn missing_fields_deserialize_to_none() {
        let app: RawApp = serde_json::from_str("{}").unwrap();
        assert_eq!(app.app_id(), "");
        assert!(app.name.is_none());
        assert!(app.categories.is_none());
        assert!(app.screenshots.is_none());
    }

    #[test]
    fn detail_screenshot_field_is_optional() {
        let body = r#"{"screenshots":[{"imgDesktopUrl":"https://x/shot.png"},{}]}"#;
        let detail: AppDetail = serde_json::from_str(body).unwrap();
        assert_eq!(detail.screenshots.len(), 2);
        assert_eq!(
            detail.screenshots[0].img_desktop_url.as_deref(),
            Some("https://x/shot.png")
        );
        assert!(detail.screenshots[1].img_desktop_url.is_none());
    }

    #[test]
    fn detail_without_screenshots_parses_empty() {
        let detail: AppDetail = serde_json::from_str("{}").unwrap();
        assert!(detail.screenshots.is_empty());
    }
}
