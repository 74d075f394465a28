// ── Sequenced snapshot slot ──
//
// A wholesale-replaced `Vec<T>` broadcast over a `watch` channel. Every
// request that may replace the snapshot draws a ticket from a monotonic
// counter first; a response is applied only if no later ticket has been
// applied already, so an older request resolving last cannot overwrite a
// newer result.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

pub(crate) struct SnapshotSlot<T: Clone + Send + Sync + 'static> {
    snapshot: watch::Sender<Arc<Vec<T>>>,
    /// Last ticket handed out.
    issued: AtomicU64,
    /// Ticket of the response currently held in `snapshot`. Only read and
    /// written inside `send_if_modified`, which holds the channel's lock.
    applied: AtomicU64,
}

impl<T: Clone + Send + Sync + 'static> SnapshotSlot<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self {
            snapshot,
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Draw the ticket for a request about to be sent.
    pub(crate) fn ticket(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Replace the snapshot with `items` unless a newer ticket already landed.
    /// Returns `true` if the snapshot was replaced.
    pub(crate) fn apply(&self, ticket: u64, items: Vec<T>) -> bool {
        self.snapshot.send_if_modified(|snap| {
            if ticket <= self.applied.load(Ordering::Acquire) {
                return false;
            }
            self.applied.store(ticket, Ordering::Release);
            *snap = Arc::new(items);
            true
        })
    }

    /// Get the current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<T>> {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<T>>> {
        self.snapshot.subscribe()
    }
}
