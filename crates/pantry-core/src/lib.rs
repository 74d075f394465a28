//! Reactive data layer between `pantry-api` and presentation code.
//!
//! - **[`Pantry`]** — Session facade. Constructed explicitly from a
//!   [`PantryConfig`] and passed by reference to consumers; owns one shared
//!   HTTP client and the three stores below.
//!
//! - **[`RemoteEntityStore<T>`]** — Holds the last-fetched snapshot of a
//!   remote collection and exposes async actions (`fetch_all`, `fetch_by_tag`,
//!   `fetch_tags`, `search`, `create`, `logout`). Instantiated for
//!   [`Recipe`], [`User`], and [`UserRegistration`].
//!
//! - **[`EntityStream<T>`]** — Subscription handle for snapshot changes.
//!
//! - **[`RecipesHandler`]** — Fire-and-forget wrapper over the recipe store.
//!
//! - **[`normalize_date`]** / **[`parse_locale_number`]** — Pure text
//!   conversions used by presentation code and by `create`.

pub mod config;
pub mod date;
pub mod error;
pub mod handler;
pub mod locale;
pub mod pantry;
pub mod session;
pub mod storage;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{DEFAULT_BASE_URL, PantryConfig};
pub use date::{DateFormatError, normalize_date};
pub use error::CoreError;
pub use handler::RecipesHandler;
pub use locale::{LocaleNumberError, parse_locale_number};
pub use pantry::Pantry;
pub use session::{LOGIN_FLAG_KEY, LoginFlag};
pub use storage::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, StorageError};
pub use store::{Entity, RemoteEntityStore};
pub use stream::EntityStream;

// Re-export wire types at the crate root for ergonomics.
pub use pantry_api::Error as ApiError;
pub use pantry_api::{
    Address, BankDetails, Company, Coordinates, Crypto, Difficulty, Gender, Hair, ListPage,
    MonthlyIncome, Recipe, Role, User, UserRegistration,
};
