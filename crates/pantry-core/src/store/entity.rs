// ── Store-side entity binding ──
//
// Extends the wire-level `Resource` binding with the hook `create` runs
// before a payload leaves the process.

use serde::Serialize;

use pantry_api::{MonthlyIncome, Recipe, Resource, User, UserRegistration};

use crate::error::CoreError;
use crate::locale::parse_locale_number;

/// A remote collection entity that a `RemoteEntityStore` can hold.
pub trait Entity: Resource + Serialize + Clone {
    /// Normalize an outgoing payload. Runs before the `add` request; an error
    /// aborts the create without touching the network.
    fn prepare_for_create(&mut self) -> Result<(), CoreError> {
        Ok(())
    }
}

impl Entity for Recipe {}

impl Entity for User {}

impl Entity for UserRegistration {
    /// Converts a locale-formatted `monthlyIncome` (`"1.234,56"`) into a number.
    fn prepare_for_create(&mut self) -> Result<(), CoreError> {
        if let MonthlyIncome::Text(raw) = &self.monthly_income {
            let amount = parse_locale_number(raw).map_err(|e| CoreError::Validation {
                message: format!("monthlyIncome: {e}"),
            })?;
            self.monthly_income = MonthlyIncome::Amount(amount);
        }
        Ok(())
    }
}
