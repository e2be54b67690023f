// src/catalog/mod.rs

//! Application catalog: records, filtering, and the cascading loader
//!
//! A catalog load produces an ordered `Vec<AppEntry>` that is replaced
//! wholesale on refresh. `AppEntry.id` is the only stable join key across
//! the catalog, the installed set, and the operation map.

mod categories;
mod loader;

pub use categories::{guess_categories, FALLBACK_CATEGORY};
pub use loader::{load_catalog, normalize, seed_entries, NO_DESCRIPTION};

/// One application in the catalog
///
/// Immutable after normalization; every field has a defined default so no
/// raw record is ever rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    /// Stable application id (reverse-DNS), the join key everywhere
    pub id: String,
    /// Human-readable name; defaults to the id
    pub name: String,
    /// Short description; defaults to a fixed placeholder
    pub summary: String,
    /// Freedesktop-style categories; may be empty
    pub categories: Vec<String>,
    /// Icon URL if the catalog provided one
    pub icon_url: Option<String>,
    /// Screenshot URLs in catalog order
    pub screenshot_urls: Vec<String>,
}

/// Category selection for filtering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every app matches
    #[default]
    All,
    /// Only apps listing this category match; apps with no categories never do
    Named(String),
}

impl CategoryFilter {
    /// Parse the CLI/UI representation ("all" is case-insensitive)
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(s.to_string())
        }
    }

    fn matches(&self, entry: &AppEntry) -> bool {
        match self {
            Self::All => true,
            Self::Named(category) => entry.categories.iter().any(|c| c == category),
        }
    }
}

/// Filter the catalog by category and search term
///
/// The search term matches case-insensitively against name, summary, and
/// id. An empty term matches everything. Order is preserved.
pub fn filter_apps<'a>(
    apps: &'a [AppEntry],
    category: &CategoryFilter,
    search_term: &str,
) -> Vec<&'a AppEntry> {
    let term = search_term.trim().to_lowercase();

    apps.iter()
        .filter(|app| category.matches(app))
        .filter(|app| {
            if term.is_empty() {
                return true;
            }
            app.name.to_lowercase().contains(&term)
                || app.summary.to_lowercase().contains(&term)
                || app.id.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::CatalogResponse;

    fn entry(id: &str, name: &str, categories: &[&str]) -> AppEntry {
        AppEntry {
            id: id.to_string(),
            name: name.to_string(),
            summary: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            icon_url: None,
            screenshot_urls: Vec::new(),
        }
    }

    #[test]
    fn all_filter_passes_everything() {
        let apps = vec![entry("a", "A", &[]), entry("b", "B", &["Game"])];
        assert_eq!(filter_apps(&apps, &CategoryFilter::All, "").len(), 2);
    }

    #[test]
    fn named_category_requires_membership() {
        let apps = vec![
            entry("a", "A", &["Game"]),
            entry("b", "B", &["Network"]),
            entry("c", "C", &[]),
        ];
        let filtered = filter_apps(&apps, &CategoryFilter::parse("Game"), "");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "a");
    }

    #[test]
    fn app_without_categories_only_matches_all() {
        let apps = vec![entry("a", "A", &[])];
        assert!(filter_apps(&apps, &CategoryFilter::parse("Utility"), "").is_empty());
        assert_eq!(filter_apps(&apps, &CategoryFilter::All, "").len(), 1);
    }

    #[test]
    fn search_matches_name_summary_and_id() {
        let mut app = entry("org.videolan.VLC", "VLC", &[]);
        app.summary = "Media player".to_string();
        let apps = vec![app];

        for term in ["vlc", "VIDEOLAN", "media PLAYER"] {
            assert_eq!(filter_apps(&apps, &CategoryFilter::All, term).len(), 1, "{term}");
        }
        assert!(filter_apps(&apps, &CategoryFilter::All, "firefox").is_empty());
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let apps = vec![entry("z", "Z", &[]), entry("a", "A", &[])];
        let filtered = filter_apps(&apps, &CategoryFilter::All, "");
        assert_eq!(filtered[0].id, "z");
        assert_eq!(filtered[1].id, "a");
    }

    // Full path from an API response body through normalization to filtering.
    #[test]
    fn wrapped_response_normalizes_and_filters() {
        let body = r#"{"apps":[{"id":"org.videolan.VLC","name":"VLC","summary":"Media player"}]}"#;
        let raw = serde_json::from_str::<CatalogResponse>(body).unwrap().into_apps();
        let apps: Vec<AppEntry> = raw.into_iter().map(normalize).collect();

        assert_eq!(apps.len(), 1);
        assert!(apps[0].categories.is_empty());
        assert!(apps[0].screenshot_urls.is_empty());

        // No categories means it is invisible to any named category filter
        assert!(filter_apps(&apps, &CategoryFilter::parse("AudioVideo"), "").is_empty());
        assert_eq!(filter_apps(&apps, &CategoryFilter::All, "vlc").len(), 1);
    }
}
