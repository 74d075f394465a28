// Collection endpoints
//
// Every remote collection (`recipes`, `users`) exposes the same handful of
// routes, so the endpoints are generic over `Resource` rather than written
// out per entity.

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::PantryClient;
use crate::error::Error;
use crate::models::{ListPage, Resource};

impl PantryClient {
    /// List a collection.
    ///
    /// `GET /{collection}`
    pub async fn list<T: Resource>(&self) -> Result<ListPage<T>, Error> {
        let url = self.api_url(T::COLLECTION)?;
        debug!(collection = T::COLLECTION, "listing collection");
        let envelope: Map<String, Value> = self.get(url).await?;
        ListPage::from_envelope(envelope, T::LIST_FIELD)
    }

    /// List the entities carrying `tag`.
    ///
    /// `GET /{collection}/tag/{tag}`. The tag is placed in the path as given;
    /// the server decides what an empty or malformed tag means.
    pub async fn list_by_tag<T: Resource>(&self, tag: &str) -> Result<ListPage<T>, Error> {
        let url = self.api_url(&format!("{}/tag/{tag}", T::COLLECTION))?;
        debug!(collection = T::COLLECTION, tag, "listing by tag");
        let envelope: Map<String, Value> = self.get(url).await?;
        ListPage::from_envelope(envelope, T::LIST_FIELD)
    }

    /// List the tags known to a collection.
    ///
    /// `GET /{collection}/tags`
    pub async fn tags<T: Resource>(&self) -> Result<Vec<String>, Error> {
        let url = self.api_url(&format!("{}/tags", T::COLLECTION))?;
        debug!(collection = T::COLLECTION, "listing tags");
        self.get(url).await
    }

    /// Full-text search over a collection.
    ///
    /// `GET /{collection}/search?q={query}` with the query form-encoded.
    pub async fn search<T: Resource>(&self, query: &str) -> Result<ListPage<T>, Error> {
        let mut url = self.api_url(&format!("{}/search", T::COLLECTION))?;
        url.query_pairs_mut().append_pair("q", query);
        debug!(collection = T::COLLECTION, query, "searching");
        let envelope: Map<String, Value> = self.get(url).await?;
        ListPage::from_envelope(envelope, T::LIST_FIELD)
    }

    /// Create an entity. The server echoes the stored record.
    ///
    /// `POST /{collection}/add`
    pub async fn add<T: Resource + Serialize>(&self, payload: &T) -> Result<T, Error> {
        let url = self.api_url(&format!("{}/add", T::COLLECTION))?;
        debug!(collection = T::COLLECTION, "adding entity");
        self.post(url, payload).await
    }
}
