// ── Core error types ──
//
// Errors surfaced by store actions and the pure conversions. Transport
// failures stay attached as `source` so callers can still inspect the HTTP
// status behind a failed fetch or create.

use thiserror::Error;

use crate::date::DateFormatError;
use crate::storage::StorageError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input errors ─────────────────────────────────────────────────
    #[error(transparent)]
    InvalidFormat(#[from] DateFormatError),

    #[error("Validation failed: {message}")]
    Validation { message: String },

    // ── Remote errors ────────────────────────────────────────────────
    #[error("Failed to fetch {collection}: {source}")]
    RemoteFetch {
        collection: &'static str,
        #[source]
        source: pantry_api::Error,
    },

    #[error("Failed to create {collection} entry: {source}")]
    RemoteCreate {
        collection: &'static str,
        #[source]
        source: pantry_api::Error,
    },

    // ── Local state ──────────────────────────────────────────────────
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CoreError {
    /// The underlying transport error for remote failures.
    pub fn api_error(&self) -> Option<&pantry_api::Error> {
        match self {
            Self::RemoteFetch { source, .. } | Self::RemoteCreate { source, .. } => Some(source),
            _ => None,
        }
    }

    /// HTTP status of a failed remote call, if the server answered.
    pub fn status(&self) -> Option<u16> {
        self.api_error().and_then(pantry_api::Error::status)
    }

    /// Returns `true` if the remote collection or entity does not exist.
    pub fn is_not_found(&self) -> bool {
        self.api_error().is_some_and(pantry_api::Error::is_not_found)
    }
}
