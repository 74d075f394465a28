// ── Fire-and-forget recipe actions ──
//
// UI glue that kicks off a store action and walks away. Failures end here:
// they are logged at `warn` and never reach the caller. Callers that need
// the outcome use the store directly.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use pantry_api::Recipe;

use crate::error::CoreError;
use crate::store::RemoteEntityStore;

#[derive(Clone)]
pub struct RecipesHandler {
    store: Arc<RemoteEntityStore<Recipe>>,
}

impl RecipesHandler {
    pub fn new(store: Arc<RemoteEntityStore<Recipe>>) -> Self {
        Self { store }
    }

    /// Refresh the recipe snapshot in the background.
    ///
    /// Must be called from within a Tokio runtime. The returned handle
    /// resolves once the action finished, successfully or not.
    pub fn get_all_recipes(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move { discard("get_all_recipes", store.fetch_all().await) })
    }

    /// Refresh the tag snapshot in the background.
    pub fn get_all_tags(&self) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move { discard("get_all_tags", store.fetch_tags().await) })
    }

    /// Replace the recipe snapshot with recipes carrying `tag`, in the
    /// background.
    pub fn get_recipes_tagged(&self, tag: impl Into<String>) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let tag = tag.into();
        debug!(%tag, "get_recipes_tagged called");
        tokio::spawn(async move {
            discard("get_recipes_tagged", store.fetch_by_tag(&tag).await);
        })
    }
}

fn discard<T>(action: &'static str, result: Result<T, CoreError>) {
    if let Err(err) = result {
        warn!(action, error = %err, "background action failed");
    }
}
