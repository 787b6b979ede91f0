//! Headless jackpot host.
//!
//! Plays rounds the way a screen would: the join timer counts down one
//! synthetic frame at a time, the spin is driven through a [`SpinDriver`],
//! and ambient decorations run alongside without touching the round.

use amethyst_execution::{
    draw_winner, generate_segments, Celebration, DrawSource, FrameHandle, FrameHost,
    HighlightCycle, JackpotRound, PointerPulse, SpinDriver, Tick,
};
use amethyst_types::{JackpotError, Participant, RoundRecord};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, trace};

mod config;
pub use config::{Config, ConfigError};

/// Frame host backed by a counter; every requested frame fires on the next step.
#[derive(Debug, Default)]
pub struct SyntheticFrames {
    next: u64,
    pending: Option<FrameHandle>,
    cancelled: u64,
}

impl SyntheticFrames {
    pub fn frames_requested(&self) -> u64 {
        self.next
    }

    pub fn frames_cancelled(&self) -> u64 {
        self.cancelled
    }
}

impl FrameHost for SyntheticFrames {
    fn request_frame(&mut self) -> FrameHandle {
        self.next += 1;
        let handle = FrameHandle(self.next);
        self.pending = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

/// Plays the configured number of rounds.
pub struct Simulator<D, R> {
    config: Config,
    round: Option<JackpotRound<D>>,
    /// Cosmetic randomness (highlights); never used for outcomes.
    ambient_rng: R,
    frames: SyntheticFrames,
}

impl<D: DrawSource, R: Rng> Simulator<D, R> {
    pub fn new(config: Config, draws: D, ambient_rng: R) -> Result<Self, JackpotError> {
        let round = JackpotRound::new(1, config.round, draws)?;
        Ok(Self {
            config,
            round: Some(round),
            ambient_rng,
            frames: SyntheticFrames::default(),
        })
    }

    pub fn frames(&self) -> &SyntheticFrames {
        &self.frames
    }

    /// Play every round and return their archived records.
    pub fn run(&mut self) -> Result<Vec<RoundRecord>, JackpotError> {
        let mut history = Vec::new();
        for id in 1..=self.config.rounds {
            history.push(self.play_round(id)?);
        }
        Ok(history)
    }

    fn play_round(&mut self, id: u64) -> Result<RoundRecord, JackpotError> {
        let mut round = self
            .round
            .take()
            .ok_or(JackpotError::InvalidConfig("simulator has no round"))?
            .next_round(id);
        let result = self.play(&mut round);
        // Failed rounds are handed back too, so the next run starts clean.
        self.round = Some(round);
        result
    }

    fn play(&mut self, round: &mut JackpotRound<D>) -> Result<RoundRecord, JackpotError> {
        let id = round.id();
        for participant in &self.config.participants {
            round.join(participant.clone())?;
        }
        if round.total_value() <= 0.0 {
            // An empty pot restarts the join timer forever.
            return Err(JackpotError::DivisionByZero {
                participants: round.participants().len(),
            });
        }
        info!(
            round = id,
            participants = round.participants().len(),
            items = round.total_items(),
            total_value = round.total_value(),
            "round open"
        );

        let frame_ms = self.config.frame_ms();
        let mut highlight = HighlightCycle::default();
        let mut pulse = PointerPulse::default();
        let mut celebration = Celebration::default();
        let result = {
            let mut driver = SpinDriver::new(round, &mut self.frames);

            // Waiting: tick the join timer, carrying the fractional frame time.
            let mut carry = 0.0;
            loop {
                carry += frame_ms;
                let step = carry.floor();
                carry -= step;
                let step = step as u64;
                let phase = driver.round().phase();
                if let Some(id) =
                    highlight.advance(step, phase, driver.round().segments(), &mut self.ambient_rng)
                {
                    trace!(round = driver.round().id(), segment = id, "highlight");
                }
                pulse.advance(step, phase);
                if driver.advance_timer(step)?.is_some() {
                    break;
                }
            }

            // Spinning: one tick per frame until the wheel rests.
            let mut frame = 0u64;
            loop {
                let elapsed = frame as f64 * frame_ms;
                match driver.on_frame(elapsed)? {
                    Tick::Continue { angle, progress } => {
                        trace!(round = id, angle, progress, "frame");
                        frame += 1;
                    }
                    Tick::Done { angle, winner } => {
                        celebration.start();
                        debug!(round = id, frames = frame + 1, angle, winner, "wheel at rest");
                        break;
                    }
                }
            }
            driver.round().record()
        };
        let record = result.ok_or(JackpotError::invalid_state("archive", round.phase()))?;
        info!(
            round = id,
            winner = %record.winner_id,
            share = record.winner_share,
            draw = record.draw,
            celebrating = celebration.is_active(),
            "round complete"
        );
        Ok(record)
    }
}

/// Observed against expected win frequencies for one participant.
#[derive(Clone, Debug, Serialize)]
pub struct FairnessRow {
    pub id: String,
    pub expected_percent: f64,
    pub observed_percent: f64,
    /// Deviation from the expected count in standard deviations.
    pub sigma: f64,
}

/// Run `draws` selections over the shares of `participants`.
pub fn fairness<D: DrawSource>(
    participants: &[Participant],
    source: &mut D,
    draws: usize,
) -> Result<Vec<FairnessRow>, JackpotError> {
    let mut participants = participants.to_vec();
    amethyst_execution::compute_shares(&mut participants)?;
    let segments = generate_segments(&participants, &Default::default());
    let mut counts = vec![0usize; participants.len()];
    for _ in 0..draws {
        counts[draw_winner(&participants, &segments, source)?.index] += 1;
    }

    let n = draws as f64;
    Ok(participants
        .iter()
        .zip(counts)
        .map(|(participant, count)| {
            let p = participant.share_percent / 100.0;
            let sd = (n * p * (1.0 - p)).sqrt();
            let deviation = count as f64 - n * p;
            FairnessRow {
                id: participant.id.clone(),
                expected_percent: participant.share_percent,
                observed_percent: 100.0 * count as f64 / n,
                sigma: if sd > 0.0 { deviation / sd } else { 0.0 },
            }
        })
        .collect())
}
