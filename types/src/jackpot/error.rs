use thiserror::Error;

use super::RoundPhase;

/// Misuse of the jackpot model.
///
/// Every variant is a caller error: nothing at this layer retries or recovers.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum JackpotError {
    #[error("total contributed value is zero (participants={participants})")]
    DivisionByZero { participants: usize },
    #[error("cannot {operation} while round is {state}")]
    InvalidState {
        operation: &'static str,
        state: RoundPhase,
    },
    #[error("item {item} has invalid value {value}")]
    InvalidItemValue { item: String, value: f64 },
    #[error("participant {id} already joined")]
    DuplicateParticipant { id: String },
    #[error("invalid colour {value:?} (expected #rrggbb)")]
    InvalidColor { value: String },
    #[error("layout has {segments} segments for {participants} participants")]
    LayoutMismatch { participants: usize, segments: usize },
    #[error("no animation frame is pending")]
    NoPendingFrame,
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

impl JackpotError {
    pub fn invalid_state(operation: &'static str, state: RoundPhase) -> Self {
        Self::InvalidState { operation, state }
    }
}
