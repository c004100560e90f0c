//! Remote retrieval abstraction
//!
//! This module provides the [`Remote`] trait and implementations for
//! fetching bytes over the network, allowing the pipeline to run against
//! a real HTTP client in production and a scripted mock in tests.

pub mod http;
pub mod mock;

use thiserror::Error;

pub use http::HttpRemote;
pub use mock::MockRemote;

/// Error type for remote retrieval
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },
}

/// Result type for remote retrieval
pub type FetchResult<T> = Result<T, FetchError>;

/// Blocking byte retrieval from a remote address.
///
/// Every call blocks until the transfer completes or fails; there is no
/// background work and no timeout beyond what the underlying transport
/// enforces by default.
pub trait Remote {
    /// Fetch the body bytes at `url`.
    fn get(&self, url: &str) -> FetchResult<Vec<u8>>;
}
