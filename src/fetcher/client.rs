// src/fetcher/client.rs

//! HTTP client for the store's remote endpoints
//!
//! Thin wrapper around a blocking reqwest client with per-request timeouts.
//! Catalog failures propagate so the loader can fall back; screenshot and
//! image failures degrade to empty results because callers always have a
//! non-network fallback (the icon template or no image at all).

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::models::{AppDetail, CatalogResponse, RawApp};

/// Timeout for the catalog index request (30 seconds)
pub const CATALOG_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for per-app detail requests (10 seconds)
pub const DETAIL_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for image downloads (10 seconds)
pub const IMAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Buffer size for streaming downloads (8 KB)
const STREAM_BUFFER_SIZE: usize = 8192;

/// Blocking HTTP client bound to one catalog API base URL
pub struct StoreClient {
    client: reqwest::blocking::Client,
    api_base: String,
}

impl StoreClient {
    /// Create a client for the given API base (e.g. `https://flathub.org`)
    pub fn new(api_base: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| Error::InitError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetch the full catalog index
    ///
    /// Non-2xx responses and transport errors are returned as errors; the
    /// catalog loader treats any error here as the signal to fall back.
    pub fn fetch_catalog(&self) -> Result<Vec<RawApp>> {
        let url = format!("{}/api/v2/apps", self.api_base);
        info!("Fetching catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(CATALOG_TIMEOUT)
            .send()
            .map_err(|e| Error::DownloadError(format!("Catalog request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "Catalog request returned HTTP {}",
                response.status()
            )));
        }

        let apps = response
            .json::<CatalogResponse>()
            .map_err(|e| Error::ParseError(format!("Malformed catalog response: {e}")))?
            .into_apps();

        info!("Catalog API returned {} entries", apps.len());
        Ok(apps)
    }

    /// Fetch screenshot URLs for one app from the detail endpoint
    ///
    /// Only the first screenshot is taken. Any failure yields an empty list
    /// so the caller falls back to the icon URL.
    pub fn fetch_screenshot_urls(&self, app_id: &str) -> Vec<String> {
        let url = format!("{}/api/v1/apps/{}", self.api_base, app_id);

        let response = match self.client.get(&url).timeout(DETAIL_TIMEOUT).send() {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                debug!("Detail request for {} returned HTTP {}", app_id, r.status());
                return Vec::new();
            }
            Err(e) => {
                debug!("Detail request for {} failed: {}", app_id, e);
                return Vec::new();
            }
        };

        let detail: AppDetail = match response.json() {
            Ok(d) => d,
            Err(e) => {
                debug!("Malformed detail response for {}: {}", app_id, e);
                return Vec::new();
            }
        };

        detail
            .screenshots
            .into_iter()
            .take(1)
            .filter_map(|shot| shot.img_desktop_url)
            .filter(|u| !u.is_empty())
            .collect()
    }

    /// Icon URL for an app id
    ///
    /// Pure template expansion; never performs a request.
    pub fn icon_url(&self, app_id: &str) -> String {
        format!(
            "{}/repo/appstream/x86_64/icons/128x128/{}.png",
            self.api_base, app_id
        )
    }

    /// Download a URL to a file, streaming the body in 8 KB chunks
    ///
    /// Returns the number of bytes written. The destination is written in
    /// place; concurrent writers for the same URL produce identical bytes,
    /// so last writer wins.
    pub fn download_to(&self, url: &str, dest: &Path) -> Result<u64> {
        Url::parse(url).map_err(|e| Error::DownloadError(format!("Invalid URL '{url}': {e}")))?;

        let mut response = self
            .client
            .get(url)
            .timeout(IMAGE_TIMEOUT)
            .send()
            .map_err(|e| Error::DownloadError(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(Error::DownloadError(format!(
                "HTTP {} for {url}",
                response.status()
            )));
        }

        let mut file = File::create(dest)
            .map_err(|e| Error::IoError(format!("Failed to create {}: {e}", dest.display())))?;

        let mut written: u64 = 0;
        let mut buffer = [0u8; STREAM_BUFFER_SIZE];

        loop {
            let bytes_read = response
                .read(&mut buffer)
                .map_err(|e| Error::IoError(format!("Failed to read response: {e}")))?;

            if bytes_read == 0 {
                break;
            }

            file.write_all(&buffer[..bytes_read])
                .map_err(|e| Error::IoError(format!("Failed to write data: {e}")))?;

            written += bytes_read as u64;
        }

        if written == 0 {
            warn!("Empty response body for {}", url);
        }

        debug!("Downloaded {} bytes from {}", written, url);
        Ok(written)
    }
}
