// Remote API payload types
//
// Transport DTOs mirroring the dummyjson schema. Fields use `#[serde(default)]`
// liberally: the API omits fields on partial records (search results, `add`
// echoes), and these types carry no invariants beyond the remote schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};

use crate::error::Error;

// ── Resource binding ─────────────────────────────────────────────────

/// Binds a payload type to its remote collection.
///
/// `COLLECTION` is the path segment (`/recipes`, `/users`); `LIST_FIELD` is
/// the key holding the entity array in list responses.
pub trait Resource: DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: &'static str;
    const LIST_FIELD: &'static str;
}

// ── List envelope ────────────────────────────────────────────────────

/// A list response: `{ "<field>": [...], "total": N, "skip": N, "limit": N }`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            skip: 0,
            limit: 0,
        }
    }
}

impl<T: DeserializeOwned> ListPage<T> {
    /// Decode a list envelope whose entity array sits under `field`.
    ///
    /// A missing array field is a deserialization error; missing counters
    /// default to zero.
    pub fn from_envelope(mut envelope: Map<String, Value>, field: &str) -> Result<Self, Error> {
        let raw = envelope.remove(field).ok_or_else(|| Error::Deserialization {
            message: format!("missing `{field}` array in list response"),
            body: Value::Object(envelope.clone()).to_string(),
        })?;

        let items: Vec<T> = serde_json::from_value(raw).map_err(|e| Error::Deserialization {
            message: format!("invalid `{field}` entries: {e}"),
            body: Value::Object(envelope.clone()).to_string(),
        })?;

        let counter = |key: &str| envelope.get(key).and_then(Value::as_u64).unwrap_or(0);

        Ok(Self {
            total: counter("total"),
            skip: counter("skip"),
            limit: counter("limit"),
            items,
        })
    }
}

// ── Recipe ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Recipe from `GET /recipes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: u64,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub difficulty: Difficulty,
    pub cuisine: String,
    pub calories_per_serving: u32,
    pub tags: Vec<String>,
    pub user_id: u64,
    pub image: String,
    pub rating: f64,
    pub review_count: u32,
    pub meal_type: Vec<String>,
}

impl Recipe {
    /// Prep plus cook time, saturating at `u32::MAX`.
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes.saturating_add(self.cook_time_minutes)
    }
}

impl Resource for Recipe {
    const COLLECTION: &'static str = "recipes";
    const LIST_FIELD: &'static str = "recipes";
}

// ── User ─────────────────────────────────────────────────────────────

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    #[default]
    User,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hair {
    pub color: String,
    #[serde(rename = "type")]
    pub hair_type: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub state_code: String,
    pub postal_code: String,
    pub coordinates: Coordinates,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BankDetails {
    pub card_expire: String,
    pub card_number: String,
    pub card_type: String,
    pub currency: String,
    pub iban: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    pub department: String,
    pub name: String,
    pub title: String,
    pub address: Address,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Crypto {
    pub coin: String,
    pub wallet: String,
    pub network: String,
}

/// User record from `GET /users` and `GET /users/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub maiden_name: String,
    pub age: u32,
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub birth_date: String,
    pub image: String,
    pub blood_group: String,
    pub height: f64,
    pub weight: f64,
    pub eye_color: String,
    pub hair: Hair,
    pub ip: String,
    pub address: Address,
    pub mac_address: String,
    pub university: String,
    pub bank: BankDetails,
    pub company: Company,
    pub ein: String,
    pub ssn: String,
    pub user_agent: String,
    pub crypto: Crypto,
    pub role: Role,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Resource for User {
    const COLLECTION: &'static str = "users";
    const LIST_FIELD: &'static str = "users";
}

// ── User registration ────────────────────────────────────────────────

/// Monthly income as entered: either already numeric or a locale-formatted
/// string such as `"1.234,56"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MonthlyIncome {
    Amount(f64),
    Text(String),
}

impl Default for MonthlyIncome {
    fn default() -> Self {
        Self::Amount(0.0)
    }
}

/// Pet-adoption intake form submitted through `POST /users/add`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    /// Assigned by the server on a successful `add`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub cpf: String,
    #[serde(default)]
    pub cep: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub neighborhood: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pet_type: String,
    #[serde(default)]
    pub pet_breed: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_breed: Option<String>,
    #[serde(default)]
    pub monthly_income: MonthlyIncome,
}

impl Resource for UserRegistration {
    const COLLECTION: &'static str = "users";
    const LIST_FIELD: &'static str = "users";
}
