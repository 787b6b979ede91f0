use serde::{Deserialize, Serialize};

use super::{Color, Item, JackpotError};

/// A player who staked items into a round.
///
/// `share_percent` is derived from the item values of everyone in the round
/// and is recomputed whenever the participant set changes. It is left at full
/// precision; rounding only happens at display time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub color: Color,
    pub items: Vec<Item>,
    #[serde(default)]
    pub share_percent: f64,
}

impl Participant {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: Color) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color,
            items: Vec::new(),
            share_percent: 0.0,
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Sum of the values of every item this participant contributed.
    pub fn contributed_value(&self) -> f64 {
        self.items.iter().map(|item| item.value).sum()
    }

    pub fn validate(&self) -> Result<(), JackpotError> {
        self.items.iter().try_for_each(Item::validate)
    }
}
