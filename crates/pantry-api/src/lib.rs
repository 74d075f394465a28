// pantry-api: Async Rust client for the dummyjson recipe and user API

pub mod client;
pub mod collections;
pub mod error;
pub mod models;
pub mod transport;

pub use client::PantryClient;
pub use error::Error;
pub use models::{
    Address, BankDetails, Company, Coordinates, Crypto, Difficulty, Gender, Hair, ListPage,
    MonthlyIncome, Recipe, Resource, Role, User, UserRegistration,
};
pub use transport::TransportConfig;
