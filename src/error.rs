// src/error.rs

//! Crate-wide error type
//!
//! One flat enum with string payloads. Errors that cross a worker boundary
//! are flattened into status text before they reach the event channel, so
//! the variants here only need to carry enough context for logs and CLI
//! output.

use thiserror::Error;

/// Errors produced by the storefront core
#[derive(Debug, Error)]
pub enum Error {
    /// Component initialization failed (HTTP client, cache directory, ...)
    #[error("initialization error: {0}")]
    InitError(String),

    /// HTTP transport failure or non-2xx response
    #[error("download error: {0}")]
    DownloadError(String),

    /// Filesystem read/write failure
    #[error("I/O error: {0}")]
    IoError(String),

    /// Malformed JSON or tab-separated tool output
    #[error("parse error: {0}")]
    ParseError(String),

    /// Cached or downloaded image failed to decode
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Requested entity does not exist
    #[error("not found: {0}")]
    NotFoundError(String),

    /// The flatpak tool exited non-zero or could not be spawned
    #[error("flatpak error: {0}")]
    FlatpakError(String),

    /// An external call exceeded its deadline
    #[error("timeout: {0}")]
    TimeoutError(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::IoError(e.to_string())
    }
}
