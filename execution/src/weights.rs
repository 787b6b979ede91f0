//! Weight model: contributed value to percentage share.

use amethyst_types::{JackpotError, Participant};

/// Sum of every item value staked in the round.
pub fn total_value(participants: &[Participant]) -> f64 {
    participants.iter().map(Participant::contributed_value).sum()
}

/// Sum of the current `share_percent` fields.
pub fn share_sum(participants: &[Participant]) -> f64 {
    participants.iter().map(|p| p.share_percent).sum()
}

/// Assign each participant `100 * contributed / total` and return the total.
///
/// Shares keep full precision. Fails without touching any share when nothing
/// of value has been contributed.
pub fn compute_shares(participants: &mut [Participant]) -> Result<f64, JackpotError> {
    let total = total_value(participants);
    if total <= 0.0 {
        return Err(JackpotError::DivisionByZero {
            participants: participants.len(),
        });
    }
    for participant in participants.iter_mut() {
        participant.share_percent = 100.0 * participant.contributed_value() / total;
    }
    Ok(total)
}
