//! Error types for bestiary

use thiserror::Error;

/// Main error type for bestiary operations
#[derive(Error, Debug)]
pub enum BestiaryError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] crate::catalog::CatalogError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] crate::remote::FetchError),

    #[error("Cache error: {0}")]
    Cache(#[from] crate::cache::CacheError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for bestiary operations
pub type Result<T> = std::result::Result<T, BestiaryError>;
