// src/lib.rs

//! Origami Flathub storefront engine
//!
//! The core behind a software-store frontend: a cascading catalog loader,
//! a disk-backed image cache, an installed-set tracker, and an operation
//! runner that orchestrates the external `flatpak` tool.
//!
//! # Architecture
//!
//! - Stateless services: fetcher, cache, loader, and runner take explicit
//!   arguments and hold no session state
//! - One event channel: workers post `StoreEvent`s, a single consumer owns
//!   and mutates `StoreState`
//! - Cascading availability: the catalog API, then `flatpak remote-ls`,
//!   then a seed list, so a caller never sees an empty catalog
//! - Failures degrade, never abort: missing image, stale catalog, skipped
//!   record

pub mod cache;
pub mod catalog;
pub mod config;
mod error;
pub mod fetcher;
pub mod flatpak;
pub mod store;
pub mod tasks;

pub use cache::{CacheStats, ImageCache};
pub use catalog::{filter_apps, load_catalog, AppEntry, CategoryFilter};
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use fetcher::StoreClient;
pub use flatpak::{FlatpakCli, OperationKind, OperationRunner};
pub use store::{StoreEvent, StoreState};
