// ── Runtime session configuration ──
//
// Describes where the remote API lives and where session state persists.
// Never touches config files: the CLI builds a `PantryConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Public demo API the stores talk to unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Configuration for one application session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryConfig {
    /// API root (e.g., `https://dummyjson.com`).
    pub base_url: Url,
    /// Request timeout.
    pub timeout: Duration,
    /// File holding persisted session flags. `None` keeps them in memory
    /// for the lifetime of the process only.
    pub session_file: Option<PathBuf>,
}

impl PantryConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(30),
            session_file: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = Some(path.into());
        self
    }
}
