use crate::error::CartError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix printed in front of every displayed amount.
pub const CURRENCY_PREFIX: &str = "S/";

/// Formats an amount for display: currency prefix and exactly two fraction digits.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{CURRENCY_PREFIX} {rounded:.2}")
}

/// Unit price of a product in the store's single currency.
///
/// Wraps `rust_decimal::Decimal` so a price can never be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Default, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, CartError> {
        if value >= Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(CartError::ValidationError(
                "Price must not be negative".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units, saturating at the bounds of `Decimal`.
    pub fn times(&self, quantity: i64) -> Decimal {
        self.0.saturating_mul(Decimal::from(quantity))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}
