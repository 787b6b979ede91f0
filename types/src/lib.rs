//! Common types used throughout amethyst.
//!
//! Everything in this crate is plain data: the items and participants that make
//! up a jackpot round, the colours they are drawn with, the archived record of a
//! finished round and the shared error taxonomy. Behaviour lives in
//! `amethyst-execution`.

pub mod jackpot;

pub use jackpot::constants::*;
pub use jackpot::{
    Color, Item, JackpotError, Participant, Rarity, RoundPhase, RoundRecord, ShareRecord,
};
