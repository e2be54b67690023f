// src/commands/browse.rs

//! Catalog and installed-list commands

use super::truncate;
use anyhow::Result;
use indicatif::ProgressBar;
use origami::catalog::{filter_apps, load_catalog, CategoryFilter};
use origami::config::{StoreConfig, DISPLAY_CAP};
use origami::fetcher::StoreClient;
use origami::flatpak::FlatpakCli;
use std::collections::BTreeSet;
use std::time::Duration;

/// Search the catalog and print matching entries as text cards
pub fn cmd_search(config: &StoreConfig, term: Option<String>, category: &str) -> Result<()> {
    let client = StoreClient::new(&config.api_base)?;
    let flatpak = FlatpakCli::new(&config.remote);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading applications...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let apps = load_catalog(&client, &flatpak);
    spinner.finish_and_clear();

    // Installed markers are best-effort; a missing flatpak just omits them
    let installed: BTreeSet<String> = flatpak
        .list_installed()
        .map(|rows| rows.into_iter().map(|row| row.id).collect())
        .unwrap_or_default();

    let filter = CategoryFilter::parse(category);
    let term = term.unwrap_or_default();
    let matches = filter_apps(&apps, &filter, &term);

    if matches.is_empty() {
        println!("No applications found");
        return Ok(());
    }

    for app in matches.iter().take(DISPLAY_CAP) {
        let marker = if installed.contains(&app.id) {
            "  [installed]"
        } else {
            ""
        };
        println!("{}  ({}){}", app.name, app.id, marker);
        println!("    {}", truncate(&app.summary, 120));
        if !app.categories.is_empty() {
            println!("    categories: {}", app.categories.join(", "));
        }
    }

    if matches.len() > DISPLAY_CAP {
        println!(
            "... and {} more. Use search to narrow results.",
            matches.len() - DISPLAY_CAP
        );
    }

    Ok(())
}

/// List installed applications
pub fn cmd_installed(config: &StoreConfig) -> Result<()> {
    let flatpak = FlatpakCli::new(&config.remote);

    match flatpak.list_installed() {
        Ok(rows) if rows.is_empty() => println!("No applications installed"),
        Ok(rows) => {
            for row in rows {
                println!("{}  ({})", row.name, row.id);
                println!("    {}", truncate(&row.description, 100));
            }
        }
        // Surfaced as text, never fatal
        Err(e) => eprintln!("Error loading installed apps: {e}"),
    }

    Ok(())
}
