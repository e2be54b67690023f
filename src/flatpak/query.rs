// src/flatpak/query.rs

//! Parsing for flatpak's column-formatted listings
//!
//! Both `flatpak list` and `flatpak remote-ls` are invoked with
//! `--columns=application,name,description` and emit tab-separated rows.
//! Malformed rows are skipped rather than failing the whole listing.

use crate::catalog::NO_DESCRIPTION;

/// One row of a `--columns=application,name,description` listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRow {
    pub id: String,
    /// Defaults to the id when the column is empty
    pub name: String,
    /// Defaults to a fixed placeholder when the column is missing or empty
    pub description: String,
}

/// Parse tab-separated listing output into rows
///
/// Rows need at least the application and name columns; anything shorter is
/// skipped. Empty name falls back to the id, empty description to the
/// placeholder.
pub fn parse_columns(text: &str) -> Vec<AppRow> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() < 2 {
                return None;
            }

            let id = parts[0].trim().to_string();
            if id.is_empty() {
                return None;
            }

            let name = match parts[1].trim() {
                "" => id.clone(),
                n => n.to_string(),
            };

            let description = parts
                .get(2)
                .map(|d| d.trim())
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string();

            Some(AppRow { id, name, description })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_columns() {
        let rows = parse_columns("org.gimp.GIMP\tGIMP\tImage editor\n");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "org.gimp.GIMP");
        assert_eq!(rows[0].name, "GIMP");
        assert_eq!(rows[0].description, "Image editor");
    }

    #[test]
    fn empty_name_defaults_to_id() {
        let rows = parse_columns("org.example.App\t\tSomething\n");
        assert_eq!(rows[0].name, "org.example.App");
    }

    #[test]
    fn missing_description_gets_placeholder() {
        let rows = parse_columns("org.example.App\tApp\n");
        assert_eq!(rows[0].description, NO_DESCRIPTION);

        let rows = parse_columns("org.example.App\tApp\t\n");
        assert_eq!(rows[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn short_and_blank_lines_are_skipped() {
        let text = "org.one.App\tOne\tFirst\n\nnot-tab-separated\n   \norg.two.App\tTwo\n";
        let rows = parse_columns(text);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, "org.one.App");
        assert_eq!(rows[1].id, "org.two.App");
    }
}
