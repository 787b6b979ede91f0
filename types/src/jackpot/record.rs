use serde::{Deserialize, Serialize};

/// One participant's stake as it stood when the round locked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    pub id: String,
    pub value: f64,
    pub share_percent: f64,
}

/// Archived outcome of a completed round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round_id: u64,
    pub winner_id: String,
    pub winner_share: f64,
    pub total_value: f64,
    pub total_items: usize,
    /// Uniform draw in [0, 100) that picked the winner.
    pub draw: f64,
    /// Displayed wheel angle at rest, in [0, 360).
    pub final_angle: f64,
    pub participants: Vec<ShareRecord>,
}
