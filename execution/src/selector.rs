//! Weighted-random winner selection.

use amethyst_types::{JackpotError, Participant};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

use crate::layout::WheelSegment;

/// Source of uniform draws in `[0, 1)`.
///
/// Production rounds use [`RandomDraws`]; tests inject scripted sequences.
pub trait DrawSource {
    fn next_unit(&mut self) -> f64;
}

impl<T: DrawSource + ?Sized> DrawSource for &mut T {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<T: DrawSource + ?Sized> DrawSource for Box<T> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Draws backed by a real RNG.
#[derive(Clone, Debug)]
pub struct RandomDraws<R> {
    rng: R,
}

impl<R: RngCore> RandomDraws<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomDraws<ChaCha20Rng> {
    /// Reproducible stream, for replays and simulations.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }

    /// Stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha20Rng::from_entropy())
    }
}

impl<R: RngCore> DrawSource for RandomDraws<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Outcome of a draw, fixed before the wheel starts moving.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// Position of the winner in the participant list.
    pub index: usize,
    pub participant_id: String,
    /// The draw scaled to `[0, 100)`.
    pub draw: f64,
    /// Centre of the winner's segment, in degrees.
    pub mid_angle: f64,
    /// No cumulative share reached the draw; the last participant was taken.
    pub fallback: bool,
}

/// Index of the first participant whose cumulative share reaches `draw`.
///
/// When accumulated shares fall short of `draw` (floating-point shortfall),
/// the last participant wins; the flag reports that this happened. `None`
/// only for an empty list.
pub fn pick_index(participants: &[Participant], draw: f64) -> Option<(usize, bool)> {
    let mut cumulative = 0.0;
    for (index, participant) in participants.iter().enumerate() {
        cumulative += participant.share_percent;
        if draw <= cumulative {
            return Some((index, false));
        }
    }
    participants.len().checked_sub(1).map(|last| (last, true))
}

/// Draw one winner from `source` over the shares of `participants`.
///
/// `segments` must be the layout of the same participant list; a layout of
/// any other length is rejected before a draw is consumed.
pub fn draw_winner<D: DrawSource + ?Sized>(
    participants: &[Participant],
    segments: &[WheelSegment],
    source: &mut D,
) -> Result<Selection, JackpotError> {
    if participants.len() != segments.len() {
        return Err(JackpotError::LayoutMismatch {
            participants: participants.len(),
            segments: segments.len(),
        });
    }
    let draw = source.next_unit() * 100.0;
    let (index, fallback) = pick_index(participants, draw).ok_or(JackpotError::DivisionByZero {
        participants: 0,
    })?;
    Ok(Selection {
        index,
        participant_id: participants[index].id.clone(),
        draw,
        mid_angle: segments[index].mid_angle,
        fallback,
    })
}
