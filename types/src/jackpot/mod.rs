//! Jackpot round data model.

mod color;
pub mod constants;
mod error;
mod item;
mod participant;
mod record;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use constants::*;
pub use error::JackpotError;
pub use item::{Item, Rarity};
pub use participant::Participant;
pub use record::{RoundRecord, ShareRecord};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle phase of a jackpot round.
///
/// `Waiting` accepts joins and counts down the join timer, `Spinning` runs the
/// cosmetic wheel animation towards a winner that is already chosen, and
/// `Complete` exposes the committed winner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    Waiting,
    Spinning,
    Complete,
}

impl fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundPhase::Waiting => "waiting",
            RoundPhase::Spinning => "spinning",
            RoundPhase::Complete => "complete",
        };
        f.write_str(name)
    }
}
