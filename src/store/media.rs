// src/store/media.rs

//! Screenshot-or-icon resolution for package cards
//!
//! Banners prefer the first screenshot from the detail endpoint and fall
//! back to the appstream icon; plain icons skip the detail lookup entirely.
//! A `None` result means the card renders without an image.

use crate::cache::ImageCache;
use crate::fetcher::StoreClient;
use image::DynamicImage;

/// Decode size for screenshot banners
const BANNER_SIZE: (u32, u32) = (400, 180);

/// Decode size for the icon used as a banner fallback
const BANNER_ICON_SIZE: (u32, u32) = (128, 128);

/// Decode size for card icons
const CARD_ICON_SIZE: (u32, u32) = (64, 64);

/// Which image a card slot wants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Wide screenshot, icon as fallback
    Banner,
    /// Small icon only
    Icon,
}

/// Fetch the best available image for an app
pub fn fetch_app_media(
    cache: &ImageCache,
    client: &StoreClient,
    app_id: &str,
    kind: MediaKind,
) -> Option<DynamicImage> {
    match kind {
        MediaKind::Banner => {
            for url in client.fetch_screenshot_urls(app_id) {
                if let Some(img) = cache.fetch(client, &url, BANNER_SIZE) {
                    return Some(img);
                }
            }
            cache.fetch(client, &client.icon_url(app_id), BANNER_ICON_SIZE)
        }
        MediaKind::Icon => cache.fetch(client, &client.icon_url(app_id), CARD_ICON_SIZE),
    }
}
