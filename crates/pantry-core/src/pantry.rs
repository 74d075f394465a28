// ── Session facade ──
//
// Owns everything with session lifetime: the HTTP client, the persisted
// login flag, and one store per remote entity. Constructed explicitly and
// handed to consumers by reference; there is no global instance.

use std::sync::Arc;

use tracing::debug;

use pantry_api::{PantryClient, Recipe, TransportConfig, User, UserRegistration};

use crate::config::PantryConfig;
use crate::error::CoreError;
use crate::handler::RecipesHandler;
use crate::session::LoginFlag;
use crate::storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use crate::store::RemoteEntityStore;

pub struct Pantry {
    config: PantryConfig,
    recipes: Arc<RemoteEntityStore<Recipe>>,
    users: Arc<RemoteEntityStore<User>>,
    registration: Arc<RemoteEntityStore<UserRegistration>>,
}

impl Pantry {
    /// Build a session from `config`.
    ///
    /// Session flags persist to `config.session_file` when set, otherwise
    /// they live in memory until the `Pantry` is dropped.
    pub fn new(config: PantryConfig) -> Result<Self, CoreError> {
        let storage: Arc<dyn KeyValueStore> = match &config.session_file {
            Some(path) => Arc::new(FileKeyValueStore::open(path)?),
            None => Arc::new(MemoryKeyValueStore::default()),
        };
        Self::with_storage(config, storage)
    }

    /// Build a session over a caller-provided key-value store.
    pub fn with_storage(
        config: PantryConfig,
        storage: Arc<dyn KeyValueStore>,
    ) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let client = PantryClient::new(config.base_url.clone(), &transport).map_err(|e| {
            CoreError::Config {
                message: e.to_string(),
            }
        })?;
        let client = Arc::new(client);
        let login = Arc::new(LoginFlag::load(storage)?);

        debug!(base_url = %config.base_url, logged_in = login.is_set(), "session created");

        Ok(Self {
            recipes: Arc::new(RemoteEntityStore::new(Arc::clone(&client))),
            users: Arc::new(RemoteEntityStore::new(Arc::clone(&client))),
            registration: Arc::new(RemoteEntityStore::new(client).with_login_flag(login)),
            config,
        })
    }

    pub fn config(&self) -> &PantryConfig {
        &self.config
    }

    pub fn recipes(&self) -> &Arc<RemoteEntityStore<Recipe>> {
        &self.recipes
    }

    pub fn users(&self) -> &Arc<RemoteEntityStore<User>> {
        &self.users
    }

    pub fn registration(&self) -> &Arc<RemoteEntityStore<UserRegistration>> {
        &self.registration
    }

    pub fn recipes_handler(&self) -> RecipesHandler {
        RecipesHandler::new(Arc::clone(&self.recipes))
    }

    pub fn is_logged_in(&self) -> bool {
        self.registration.is_logged_in()
    }
}
