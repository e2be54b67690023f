// src/catalog/categories.rs

//! Category guessing for entries with no catalog metadata
//!
//! The remote-ls fallback path only yields id, name, and description, so
//! categories are derived from keyword substrings of the app id. Rules are
//! ordered and the first match wins; anything unmatched lands in `Other`.

/// Fallback category for ids matching no rule
pub const FALLBACK_CATEGORY: &str = "Other";

/// Ordered keyword rules, first match wins
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["firefox", "chrome", "telegram", "discord", "thunderbird"], "Network"),
    (&["libreoffice", "writer", "calc"], "Office"),
    (&["gimp", "inkscape", "blender", "krita"], "Graphics"),
    (&["vlc", "audacity", "spotify"], "AudioVideo"),
    (&["steam", "game", "chess", "puzzle"], "Game"),
    (&["code", "atom", "eclipse", "git"], "Development"),
    (&["calculator", "archive", "file"], "Utility"),
];

/// Guess categories for an app id
///
/// Matches keywords against the lowercased id. Always returns exactly one
/// category so fallback entries are never invisible to category filters.
pub fn guess_categories(app_id: &str) -> Vec<String> {
    let id_lower = app_id.to_lowercase();

    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|kw| id_lower.contains(kw)) {
            return vec![category.to_string()];
        }
    }

    vec![FALLBACK_CATEGORY.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn firefox_resolves_to_network() {
        assert_eq!(guess_categories("org.mozilla.firefox"), vec!["Network"]);
    }

    #[test]
    fn gimp_resolves_to_graphics() {
        assert_eq!(guess_categories("org.gimp.GIMP"), vec!["Graphics"]);
    }

    #[test]
    fn unmatched_id_resolves_to_other() {
        assert_eq!(guess_categories("com.example.Unknowable"), vec!["Other"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(guess_categories("com.valvesoftware.STEAM"), vec!["Game"]);
    }

    #[test]
    fn first_rule_wins_on_overlap() {
        // "git" (Development) appears later than "chrome" (Network)
        assert_eq!(guess_categories("io.github.chrome-git"), vec!["Network"]);
    }
}
