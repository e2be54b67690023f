// src/cache.rs

//! Disk-backed image cache
//!
//! Content-addressed by source URL: each cached image lives in one file
//! named by the SHA-256 hex digest of its URL. A file that exists and
//! decodes is a hit; a file that exists but fails to decode is deleted and
//! treated as a miss, so corruption heals itself on the next fetch.
//!
//! There is deliberately no eviction and no cross-process locking. Two
//! concurrent fetches of the same URL may both download and overwrite the
//! same path; the bytes are determined by the URL, so last writer wins.

use crate::error::{Error, Result};
use crate::fetcher::StoreClient;
use image::DynamicImage;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Aggregate size of the cache directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub files: usize,
    pub bytes: u64,
}

/// On-disk image store keyed by source URL
pub struct ImageCache {
    dir: PathBuf,
}

impl ImageCache {
    /// Open a cache rooted at `dir`, creating the directory if absent
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            Error::InitError(format!(
                "Failed to create cache directory {}: {e}",
                dir.display()
            ))
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Cache file path for a URL: `<sha256-hex>.png` under the cache dir
    pub fn path_for(&self, url: &str) -> PathBuf {
        let digest = Sha256::digest(url.as_bytes());
        self.dir.join(format!("{}.png", hex::encode(digest)))
    }

    /// Whether a cache file exists for this URL (no decode attempted)
    pub fn contains(&self, url: &str) -> bool {
        self.path_for(url).exists()
    }

    /// Cache-only lookup: decode the stored file at `max_size`
    ///
    /// A file that fails to decode is removed so the next fetch goes back
    /// to the network.
    pub fn load(&self, url: &str, max_size: (u32, u32)) -> Option<DynamicImage> {
        let path = self.path_for(url);
        if !path.exists() {
            return None;
        }

        match decode_at(&path, max_size) {
            Ok(img) => {
                debug!("Cache hit for {}", url);
                Some(img)
            }
            Err(e) => {
                warn!("Removing corrupt cache entry for {}: {}", url, e);
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    /// Fetch an image, consulting the cache before the network
    ///
    /// Returns `None` on any network or decode failure; callers must treat
    /// a missing image as a normal outcome.
    pub fn fetch(
        &self,
        client: &StoreClient,
        url: &str,
        max_size: (u32, u32),
    ) -> Option<DynamicImage> {
        if url.is_empty() {
            return None;
        }

        if let Some(img) = self.load(url, max_size) {
            return Some(img);
        }

        let path = self.path_for(url);
        if let Err(e) = client.download_to(url, &path) {
            warn!("Image download failed for {}: {}", url, e);
            // A partial file would be mistaken for a valid entry next time
            let _ = fs::remove_file(&path);
            return None;
        }

        match decode_at(&path, max_size) {
            Ok(img) => Some(img),
            Err(e) => {
                warn!("Downloaded image failed to decode for {}: {}", url, e);
                let _ = fs::remove_file(&path);
                None
            }
        }
    }

    /// File count and total bytes currently cached
    pub fn stats(&self) -> Result<CacheStats> {
        let mut stats = CacheStats { files: 0, bytes: 0 };

        for entry in fs::read_dir(&self.dir)
            .map_err(|e| Error::IoError(format!("Failed to read cache dir: {e}")))?
        {
            let entry = entry.map_err(|e| Error::IoError(format!("Failed to read entry: {e}")))?;
            let meta = match entry.metadata() {
                Ok(m) if m.is_file() => m,
                _ => continue,
            };
            stats.files += 1;
            stats.bytes += meta.len();
        }

        Ok(stats)
    }

    /// Remove every cached file, returning how many were deleted
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;

        for entry in fs::read_dir(&self.dir)
            .map_err(|e| Error::IoError(format!("Failed to read cache dir: {e}")))?
        {
            let entry = entry.map_err(|e| Error::IoError(format!("Failed to read entry: {e}")))?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path)
                    .map_err(|e| Error::IoError(format!("Failed to remove {}: {e}", path.display())))?;
                removed += 1;
            }
        }

        debug!("Cleared {} cached images", removed);
        Ok(removed)
    }
}

/// Decode an image file, scaled down to fit `max_size` preserving aspect
fn decode_at(path: &Path, max_size: (u32, u32)) -> Result<DynamicImage> {
    let img = image::open(path)
        .map_err(|e| Error::DecodeError(format!("{}: {e}", path.display())))?;
    Ok(img.thumbnail(max_size.0, max_size.1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_is_stable_hex_digest() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ImageCache::new(dir.path()).unwrap();

        let a = cache.path_for("https://example.org/icon.png");
        let b = cache.path_for("https://example.org/icon.png");
        assert_eq!(a, b);

        let name = a.file_name().unwrap().to_str().unwrap();
        assert!(name.ends_with(".png"));
        // 64 hex chars + ".png"
        assert_eq!(name.len(), 68);
        assert!(name[..64].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_urls_map_to_different_paths() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ImageCache::new(dir.path()).unwrap();
        assert_ne!(
            cache.path_for("https://example.org/a.png"),
            cache.path_for("https://example.org/b.png")
        );
    }

    #[test]
    fn corrupt_entry_is_deleted_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ImageCache::new(dir.path()).unwrap();

        let url = "https://example.org/broken.png";
        let path = cache.path_for(url);
        fs::write(&path, b"definitely not an image").unwrap();

        assert!(cache.load(url, (64, 64)).is_none());
        assert!(!path.exists(), "corrupt entry should be removed");
    }

    #[test]
    fn load_on_empty_cache_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ImageCache::new(dir.path()).unwrap();
        assert!(cache.load("https://example.org/missing.png", (64, 64)).is_none());
        assert!(!cache.contains("https://example.org/missing.png"));
    }

    #[test]
    fn stats_and_clear_track_files() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ImageCache::new(dir.path()).unwrap();

        fs::write(cache.path_for("u1"), b"aaaa").unwrap();
        fs::write(cache.path_for("u2"), b"bbbbbb").unwrap();

        let stats = cache.stats().unwrap();
        assert_eq!(stats.files, 2);
        assert_eq!(stats.bytes, 10);

        assert_eq!(cache.clear().unwrap(), 2);
        let stats = cache.stats().unwrap();
        assert_eq!(stats, CacheStats { files: 0, bytes: 0 });
    }
}
