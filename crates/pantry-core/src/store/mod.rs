// ── Remote entity stores ──
//
// Last-write snapshots of remote collections with push-based change
// notification.

mod entity;
mod remote;
mod snapshot;

pub use entity::Entity;
pub use remote::RemoteEntityStore;
