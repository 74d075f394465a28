// ── Reactive snapshot streams ──
//
// Subscription types for consuming snapshot changes from a store.

use std::sync::Arc;

use tokio::sync::watch;

/// A subscription to one snapshot of a store.
///
/// Provides both point-in-time snapshot access and change notification via
/// `changed()`.
pub struct EntityStream<T: Clone + Send + Sync + 'static> {
    current: Arc<Vec<T>>,
    receiver: watch::Receiver<Arc<Vec<T>>>,
}

impl<T: Clone + Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Arc<Vec<T>>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// Get the snapshot captured at creation time (or at the last `changed()`).
    pub fn current(&self) -> &Arc<Vec<T>> {
        &self.current
    }

    /// Get the latest snapshot (may have changed since creation).
    pub fn latest(&self) -> Arc<Vec<T>> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next replacement, returning the new snapshot.
    /// Returns `None` if the store has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<Vec<T>>> {
        self.receiver.changed().await.ok()?;
        let snap = self.receiver.borrow_and_update().clone();
        self.current = snap.clone();
        Some(snap)
    }
}

