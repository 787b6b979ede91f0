//! Cosmetic decorations around the wheel.
//!
//! None of these touch the round. Each takes elapsed time and the current
//! phase, and any of them can be left out.

use amethyst_types::{
    RoundPhase, CELEBRATION_MS, HIGHLIGHT_HOLD_MS, HIGHLIGHT_INTERVAL_MS, POINTER_PULSE_MS,
};
use rand::{seq::SliceRandom, Rng};

use crate::layout::WheelSegment;

/// Flashes a random segment every few seconds while the round is waiting.
#[derive(Clone, Debug, Default)]
pub struct HighlightCycle {
    since_last_ms: u64,
    highlighted: Option<String>,
    hold_remaining_ms: u64,
}

impl HighlightCycle {
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        elapsed_ms: u64,
        phase: RoundPhase,
        segments: &[WheelSegment],
        rng: &mut R,
    ) -> Option<&str> {
        self.hold_remaining_ms = self.hold_remaining_ms.saturating_sub(elapsed_ms);
        if self.hold_remaining_ms == 0 {
            self.highlighted = None;
        }

        self.since_last_ms += elapsed_ms;
        if self.since_last_ms >= HIGHLIGHT_INTERVAL_MS {
            self.since_last_ms %= HIGHLIGHT_INTERVAL_MS;
            if phase == RoundPhase::Waiting {
                if let Some(segment) = segments.choose(rng) {
                    self.highlighted = Some(segment.participant_id.clone());
                    self.hold_remaining_ms = HIGHLIGHT_HOLD_MS;
                }
            }
        }
        self.highlighted()
    }
}

/// Pointer glow that toggles once a second while waiting.
#[derive(Clone, Debug, Default)]
pub struct PointerPulse {
    since_toggle_ms: u64,
    lit: bool,
}

impl PointerPulse {
    pub fn advance(&mut self, elapsed_ms: u64, phase: RoundPhase) -> bool {
        if phase != RoundPhase::Waiting {
            self.since_toggle_ms = 0;
            return self.lit;
        }
        self.since_toggle_ms += elapsed_ms;
        let toggles = self.since_toggle_ms / POINTER_PULSE_MS;
        self.since_toggle_ms %= POINTER_PULSE_MS;
        if toggles % 2 == 1 {
            self.lit = !self.lit;
        }
        self.lit
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}

/// Winner celebration shown for a few seconds after completion.
#[derive(Clone, Debug, Default)]
pub struct Celebration {
    remaining_ms: u64,
}

impl Celebration {
    pub fn start(&mut self) {
        self.remaining_ms = CELEBRATION_MS;
    }

    pub fn advance(&mut self, elapsed_ms: u64) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0
    }

    pub fn stop(&mut self) {
        self.remaining_ms = 0;
    }
}
