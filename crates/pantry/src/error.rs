//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use pantry_config::ConfigError;
use pantry_core::{ApiError, CoreError, StorageError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the API at {url}")]
    #[diagnostic(
        code(pantry::connection_failed),
        help(
            "Check your network connection and the configured base URL.\n\
             Override it with: pantry --base-url <URL> ..."
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: ApiError,
    },

    #[error("Request timed out after {seconds}s")]
    #[diagnostic(
        code(pantry::timeout),
        help("Increase timeout with --timeout or check the API's responsiveness.")
    )]
    Timeout { seconds: u64 },

    // ── Remote ───────────────────────────────────────────────────────
    #[error("{collection}: {message}")]
    #[diagnostic(
        code(pantry::not_found),
        help("Run: pantry recipes tags to see available tags")
    )]
    NotFound {
        collection: &'static str,
        message: String,
    },

    #[error("API error ({status}): {message}")]
    #[diagnostic(code(pantry::api_error))]
    Api { status: u16, message: String },

    #[error("Request to {collection} failed")]
    #[diagnostic(code(pantry::remote))]
    Remote {
        collection: &'static str,
        #[source]
        source: ApiError,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(pantry::validation))]
    Validation { field: String, reason: String },

    // ── Local state ──────────────────────────────────────────────────
    #[error("Session storage failed")]
    #[diagnostic(
        code(pantry::storage),
        help("Check permissions on the session file, or set session_file in config.toml.")
    )]
    Storage(#[source] StorageError),

    #[error(transparent)]
    #[diagnostic(
        code(pantry::config),
        help("Inspect the resolved values with: pantry config show")
    )]
    Config(#[from] ConfigError),

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(pantry::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::Json(_) => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidFormat(e) => CliError::Validation {
                field: "date".into(),
                reason: e.to_string(),
            },

            CoreError::Validation { message } => CliError::Validation {
                field: "payload".into(),
                reason: message,
            },

            CoreError::RemoteFetch { collection, source }
            | CoreError::RemoteCreate { collection, source } => from_api(collection, source),

            CoreError::Storage(e) => CliError::Storage(e),

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },
        }
    }
}

fn from_api(collection: &'static str, source: ApiError) -> CliError {
    match source {
        ApiError::Timeout { timeout_secs } => CliError::Timeout {
            seconds: timeout_secs,
        },
        ApiError::Api {
            status: 404,
            message,
        } => CliError::NotFound {
            collection,
            message,
        },
        ApiError::Api { status, message } => CliError::Api { status, message },
        ApiError::Transport(ref e) if e.status().is_none() => {
            let url = e
                .url()
                .map_or_else(|| "(unknown)".into(), ToString::to_string);
            CliError::ConnectionFailed { url, source }
        }
        other => CliError::Remote {
            collection,
            source: other,
        },
    }
}
