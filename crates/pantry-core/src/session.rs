// ── Login flag ──
//
// A local boolean, not an authentication mechanism: set when a registration
// is accepted by the remote API, cleared on logout, and mirrored into a
// `KeyValueStore` so it survives a restart.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use crate::storage::{KeyValueStore, StorageError};

/// Persisted key. Present with value `"true"` while logged in, absent otherwise.
pub const LOGIN_FLAG_KEY: &str = "is_user_logged_in";

pub struct LoginFlag {
    storage: Arc<dyn KeyValueStore>,
    logged_in: AtomicBool,
}

impl LoginFlag {
    /// Read the persisted flag. Any value other than `"true"` counts as
    /// logged out.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Result<Self, StorageError> {
        let logged_in = storage.get(LOGIN_FLAG_KEY)?.as_deref() == Some("true");
        Ok(Self {
            storage,
            logged_in: AtomicBool::new(logged_in),
        })
    }

    pub fn is_set(&self) -> bool {
        self.logged_in.load(Ordering::Acquire)
    }

    /// Persist first so the in-memory flag never claims more than disk.
    pub fn set(&self) -> Result<(), StorageError> {
        self.storage.set(LOGIN_FLAG_KEY, "true")?;
        self.logged_in.store(true, Ordering::Release);
        info!("user logged in");
        Ok(())
    }

    /// Remove the persisted key first; on failure the flag stays set.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(LOGIN_FLAG_KEY)?;
        self.logged_in.store(false, Ordering::Release);
        info!("user logged out");
        Ok(())
    }
}

impl std::fmt::Debug for LoginFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginFlag")
            .field("logged_in", &self.is_set())
            .finish_non_exhaustive()
    }
}
