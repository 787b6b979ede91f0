use serde::{Deserialize, Serialize};
use std::fmt;

use super::JackpotError;

/// Rarity tier of a traded item, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
    Vintage,
    Godly,
    Ancient,
    Unique,
    Chroma,
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An item staked into a round. Owned by exactly one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub rarity: Rarity,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        value: f64,
        rarity: Rarity,
    ) -> Result<Self, JackpotError> {
        let item = Self {
            id: id.into(),
            name: name.into(),
            value,
            rarity,
        };
        item.validate()?;
        Ok(item)
    }

    /// Values must be finite and non-negative.
    pub fn validate(&self) -> Result<(), JackpotError> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(JackpotError::InvalidItemValue {
                item: self.id.clone(),
                value: self.value,
            });
        }
        Ok(())
    }
}
