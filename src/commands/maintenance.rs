// src/commands/maintenance.rs

//! Setup, prefetch, and cache housekeeping commands

use anyhow::Result;
use indicatif::ProgressBar;
use origami::cache::ImageCache;
use origami::catalog::load_catalog;
use origami::config::{StoreConfig, DISPLAY_CAP};
use origami::fetcher::StoreClient;
use origami::flatpak::FlatpakCli;
use origami::store::{fetch_app_media, MediaKind};
use origami::tasks::{CancelToken, WorkerPool};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Verify the flatpak tool is usable and the remote is configured
pub fn cmd_setup(config: &StoreConfig) -> Result<()> {
    let flatpak = FlatpakCli::new(&config.remote);

    match flatpak.version() {
        Ok(version) => println!("flatpak {version}"),
        Err(e) => {
            eprintln!("Flatpak not found: {e}");
            eprintln!("Install it first:");
            eprintln!("  Ubuntu/Debian: sudo apt install flatpak");
            eprintln!("  Fedora:        sudo dnf install flatpak");
            eprintln!("  Arch:          sudo pacman -S flatpak");
            anyhow::bail!("flatpak is not available");
        }
    }

    if flatpak.ensure_remote(&config.remote_repo)? {
        println!("Added remote '{}'", config.remote);
    } else {
        println!("Remote '{}' already configured", config.remote);
    }

    Ok(())
}

/// Warm the image cache for the first page of the catalog
pub fn cmd_prefetch(config: &StoreConfig, banners: bool, jobs: usize) -> Result<()> {
    let client = Arc::new(StoreClient::new(&config.api_base)?);
    let cache = Arc::new(ImageCache::new(&config.cache_dir)?);
    let flatpak = FlatpakCli::new(&config.remote);

    let apps = load_catalog(&client, &flatpak);
    let targets: Vec<String> = apps
        .iter()
        .take(DISPLAY_CAP)
        .map(|app| app.id.clone())
        .collect();
    let total = targets.len();

    let bar = ProgressBar::new(total as u64);
    let fetched = Arc::new(AtomicUsize::new(0));
    let pool = WorkerPool::new(jobs);
    let token = CancelToken::new();

    for id in targets {
        let client = Arc::clone(&client);
        let cache = Arc::clone(&cache);
        let fetched = Arc::clone(&fetched);
        let bar = bar.clone();

        pool.spawn(token.clone(), move |token| {
            if fetch_app_media(&cache, &client, &id, MediaKind::Icon).is_some() {
                fetched.fetch_add(1, Ordering::SeqCst);
            }
            if banners && !token.is_cancelled() {
                let _ = fetch_app_media(&cache, &client, &id, MediaKind::Banner);
            }
            bar.inc(1);
        });
    }

    pool.join();
    bar.finish_and_clear();

    let stats = cache.stats()?;
    println!(
        "Fetched icons for {}/{} applications ({} files, {} KiB cached)",
        fetched.load(Ordering::SeqCst),
        total,
        stats.files,
        stats.bytes / 1024
    );

    Ok(())
}

/// Print cache file count and total size
pub fn cmd_cache_stats(config: &StoreConfig) -> Result<()> {
    let cache = ImageCache::new(&config.cache_dir)?;
    let stats = cache.stats()?;
    println!(
        "{} cached images, {:.1} MiB",
        stats.files,
        stats.bytes as f64 / (1024.0 * 1024.0)
    );
    println!("Cache directory: {}", cache.dir().display());
    Ok(())
}

/// Delete every cached image
pub fn cmd_cache_clear(config: &StoreConfig) -> Result<()> {
    let cache = ImageCache::new(&config.cache_dir)?;
    let removed = cache.clear()?;
    println!("Removed {removed} cached images");
    Ok(())
}
