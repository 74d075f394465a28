// ── Generic remote entity store ──
//
// One store per remote collection. Actions call the API, replace the
// relevant snapshot on success, and log-then-return on failure. Nothing here
// retries or swallows errors.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, error};
use url::Url;

use pantry_api::{ListPage, PantryClient};

use super::entity::Entity;
use super::snapshot::SnapshotSlot;
use crate::error::CoreError;
use crate::session::LoginFlag;
use crate::stream::EntityStream;

/// Holds the last-fetched state of one remote collection.
///
/// `items` is replaced by `fetch_all` and `search`, `tagged` by
/// `fetch_by_tag`, and `tags` by `fetch_tags`. All start empty. Each snapshot
/// keeps its own request order: within one snapshot, a response older than
/// the one already applied is returned to its caller but does not touch it.
///
/// A store built with [`with_login_flag`](Self::with_login_flag) marks the
/// session logged in after a successful `create`.
pub struct RemoteEntityStore<T: Entity> {
    client: Arc<PantryClient>,
    items: SnapshotSlot<T>,
    tagged: SnapshotSlot<T>,
    tags: SnapshotSlot<String>,
    last_fetched: watch::Sender<Option<DateTime<Utc>>>,
    login: Option<Arc<LoginFlag>>,
}

impl<T: Entity> RemoteEntityStore<T> {
    pub fn new(client: Arc<PantryClient>) -> Self {
        let (last_fetched, _) = watch::channel(None);
        Self {
            client,
            items: SnapshotSlot::new(),
            tagged: SnapshotSlot::new(),
            tags: SnapshotSlot::new(),
            last_fetched,
            login: None,
        }
    }

    /// Bind the session login flag, enabling `logout` and the post-create
    /// login.
    pub fn with_login_flag(mut self, login: Arc<LoginFlag>) -> Self {
        self.login = Some(login);
        self
    }

    /// Remote collection path segment (`recipes`, `users`).
    pub fn collection(&self) -> &'static str {
        T::COLLECTION
    }

    pub fn base_url(&self) -> &Url {
        self.client.base_url()
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// `GET /{collection}`; replaces the item snapshot.
    pub async fn fetch_all(&self) -> Result<ListPage<T>, CoreError> {
        let ticket = self.items.ticket();
        let page = self
            .client
            .list::<T>()
            .await
            .map_err(|e| Self::fetch_failed("fetch_all", e))?;
        self.apply_items(ticket, &page);
        Ok(page)
    }

    /// `GET /{collection}/tag/{tag}`; replaces the tagged snapshot and leaves
    /// `items` alone.
    pub async fn fetch_by_tag(&self, tag: &str) -> Result<ListPage<T>, CoreError> {
        let ticket = self.tagged.ticket();
        let page = self
            .client
            .list_by_tag::<T>(tag)
            .await
            .map_err(|e| Self::fetch_failed("fetch_by_tag", e))?;
        if self.tagged.apply(ticket, page.items.clone()) {
            debug!(collection = T::COLLECTION, tag, count = page.items.len(), "tagged snapshot replaced");
            self.touch();
        } else {
            debug!(collection = T::COLLECTION, ticket, "discarding stale tagged response");
        }
        Ok(page)
    }

    /// `GET /{collection}/tags`; replaces the tag snapshot.
    pub async fn fetch_tags(&self) -> Result<Vec<String>, CoreError> {
        let ticket = self.tags.ticket();
        let tags = self
            .client
            .tags::<T>()
            .await
            .map_err(|e| Self::fetch_failed("fetch_tags", e))?;
        if self.tags.apply(ticket, tags.clone()) {
            self.touch();
        } else {
            debug!(collection = T::COLLECTION, ticket, "discarding stale tags response");
        }
        Ok(tags)
    }

    /// `GET /{collection}/search?q=...`, or the plain listing when `query`
    /// is absent or empty. Replaces the item snapshot.
    pub async fn search(&self, query: Option<&str>) -> Result<ListPage<T>, CoreError> {
        let ticket = self.items.ticket();
        let result = match query.filter(|q| !q.is_empty()) {
            Some(q) => self.client.search::<T>(q).await,
            None => self.client.list::<T>().await,
        };
        let page = result.map_err(|e| Self::fetch_failed("search", e))?;
        self.apply_items(ticket, &page);
        Ok(page)
    }

    /// `POST /{collection}/add` and return the server's echo of the record.
    ///
    /// The payload passes through [`Entity::prepare_for_create`] first. On
    /// success the login flag, if bound, is set and persisted.
    pub async fn create(&self, mut payload: T) -> Result<T, CoreError> {
        if let Err(err) = payload.prepare_for_create() {
            error!(collection = T::COLLECTION, error = %err, "rejected create payload");
            return Err(err);
        }

        let created = self.client.add(&payload).await.map_err(|source| {
            error!(collection = T::COLLECTION, error = %source, "create failed");
            CoreError::RemoteCreate {
                collection: T::COLLECTION,
                source,
            }
        })?;

        if let Some(login) = &self.login {
            login.set().map_err(|err| {
                error!(error = %err, "failed to persist login flag");
                CoreError::from(err)
            })?;
        }
        Ok(created)
    }

    /// Clear the login flag and its persisted copy. In-flight requests are
    /// not cancelled. A no-op for stores without a login flag.
    pub fn logout(&self) -> Result<(), CoreError> {
        if let Some(login) = &self.login {
            login.clear()?;
        }
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.login.as_ref().is_some_and(|l| l.is_set())
    }

    // ── Snapshot access ──────────────────────────────────────────────

    pub fn items(&self) -> Arc<Vec<T>> {
        self.items.snapshot()
    }

    /// Result of the most recent `fetch_by_tag`.
    pub fn tagged(&self) -> Arc<Vec<T>> {
        self.tagged.snapshot()
    }

    pub fn tags(&self) -> Arc<Vec<String>> {
        self.tags.snapshot()
    }

    pub fn subscribe_items(&self) -> EntityStream<T> {
        EntityStream::new(self.items.subscribe())
    }

    pub fn subscribe_tagged(&self) -> EntityStream<T> {
        EntityStream::new(self.tagged.subscribe())
    }

    pub fn subscribe_tags(&self) -> EntityStream<String> {
        EntityStream::new(self.tags.subscribe())
    }

    /// When a snapshot was last replaced, or `None` if never.
    pub fn last_fetched(&self) -> Option<DateTime<Utc>> {
        *self.last_fetched.borrow()
    }

    // ── Private helpers ──────────────────────────────────────────────

    fn apply_items(&self, ticket: u64, page: &ListPage<T>) {
        if self.items.apply(ticket, page.items.clone()) {
            debug!(collection = T::COLLECTION, count = page.items.len(), "snapshot replaced");
            self.touch();
        } else {
            debug!(collection = T::COLLECTION, ticket, "discarding stale response");
        }
    }

    fn touch(&self) {
        self.last_fetched.send_replace(Some(Utc::now()));
    }

    fn fetch_failed(action: &'static str, source: pantry_api::Error) -> CoreError {
        error!(collection = T::COLLECTION, action, error = %source, "fetch failed");
        CoreError::RemoteFetch {
            collection: T::COLLECTION,
            source,
        }
    }
}
