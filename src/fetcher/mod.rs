// src/fetcher/mod.rs

//! Remote catalog and image fetching
//!
//! Wraps a blocking HTTP client for the three remote surfaces the store
//! reads: the catalog index, the per-app detail endpoint, and raw image
//! URLs. Icon URLs are computed locally from a fixed template and never
//! require a request.

mod client;
mod models;

pub use client::{StoreClient, CATALOG_TIMEOUT, DETAIL_TIMEOUT, IMAGE_TIMEOUT};
pub use models::{AppDetail, CatalogResponse, DetailScreenshot, RawApp};
