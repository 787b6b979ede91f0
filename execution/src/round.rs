//! Jackpot round state machine.
//!
//! A round moves through three states:
//! 1. **Waiting** - participants join and the join timer counts down
//! 2. **Spinning** - the winner is already drawn; the wheel animates towards it
//! 3. **Complete** - the animation finished and the winner is committed
//!
//! The state machine does no I/O and reads no clock. Hosts call
//! [`JackpotRound::advance_timer`] while waiting and [`JackpotRound::tick`]
//! with the time elapsed since the spin started, from whatever per-frame
//! mechanism they have.

use amethyst_types::{
    JackpotError, Participant, RoundPhase, RoundRecord, ShareRecord, JOIN_TIMER_MS,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    animator::{SpinAnimation, SpinConfig},
    layout::{generate_segments, WheelGeometry, WheelSegment},
    selector::{draw_winner, DrawSource, Selection},
    weights::compute_shares,
};

/// Configuration shared by every round of a table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Countdown before a waiting round spins on its own.
    pub join_timer_ms: u64,
    pub spin: SpinConfig,
    pub geometry: WheelGeometry,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            join_timer_ms: JOIN_TIMER_MS,
            spin: SpinConfig::default(),
            geometry: WheelGeometry::default(),
        }
    }
}

impl RoundConfig {
    pub fn validate(&self) -> Result<(), JackpotError> {
        if self.join_timer_ms == 0 {
            return Err(JackpotError::InvalidConfig("join timer must be greater than zero"));
        }
        self.spin.validate()?;
        self.geometry.validate()
    }
}

/// Round state with the data each state owns.
#[derive(Clone, Debug, PartialEq)]
pub enum RoundState {
    Waiting {
        timer_remaining_ms: u64,
    },
    Spinning {
        selection: Selection,
        animation: SpinAnimation,
        progress: f64,
    },
    Complete {
        selection: Selection,
    },
}

impl RoundState {
    pub fn phase(&self) -> RoundPhase {
        match self {
            RoundState::Waiting { .. } => RoundPhase::Waiting,
            RoundState::Spinning { .. } => RoundPhase::Spinning,
            RoundState::Complete { .. } => RoundPhase::Complete,
        }
    }
}

/// Result of advancing a spin by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tick {
    /// Keep scheduling frames.
    Continue { angle: f64, progress: f64 },
    /// The wheel is at rest and `winner` (an index into the participants) is
    /// committed. Returned once per round.
    Done { angle: f64, winner: usize },
}

/// One play of the jackpot wheel.
pub struct JackpotRound<D> {
    id: u64,
    config: RoundConfig,
    participants: Vec<Participant>,
    segments: Vec<WheelSegment>,
    total_value: f64,
    /// Unreduced; grows by several turns per spin.
    rotation_angle: f64,
    state: RoundState,
    draws: D,
}

impl<D: DrawSource> JackpotRound<D> {
    pub fn new(id: u64, config: RoundConfig, draws: D) -> Result<Self, JackpotError> {
        config.validate()?;
        Ok(Self {
            id,
            config,
            participants: Vec::new(),
            segments: Vec::new(),
            total_value: 0.0,
            rotation_angle: 0.0,
            state: RoundState::Waiting {
                timer_remaining_ms: config.join_timer_ms,
            },
            draws,
        })
    }

    /// Build the following round: same table, empty pot, wheel left where it
    /// stopped.
    pub fn next_round(self, id: u64) -> Self {
        Self {
            id,
            participants: Vec::new(),
            segments: Vec::new(),
            total_value: 0.0,
            state: RoundState::Waiting {
                timer_remaining_ms: self.config.join_timer_ms,
            },
            ..self
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    pub fn total_items(&self) -> usize {
        self.participants.iter().map(|p| p.items.len()).sum()
    }

    /// Current wheel angle, unreduced. This is what renderers should read.
    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    /// Current wheel angle in `[0, 360)`.
    pub fn displayed_angle(&self) -> f64 {
        self.rotation_angle.rem_euclid(360.0)
    }

    pub fn timer_remaining_ms(&self) -> Option<u64> {
        match self.state {
            RoundState::Waiting { timer_remaining_ms } => Some(timer_remaining_ms),
            _ => None,
        }
    }

    /// Linear spin progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        match &self.state {
            RoundState::Waiting { .. } => 0.0,
            RoundState::Spinning { progress, .. } => *progress,
            RoundState::Complete { .. } => 1.0,
        }
    }

    /// The drawn outcome, available from the moment the spin starts.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            RoundState::Spinning { selection, .. } | RoundState::Complete { selection } => {
                Some(selection)
            }
            RoundState::Waiting { .. } => None,
        }
    }

    /// The committed winner; `None` until the round is complete.
    pub fn winner(&self) -> Option<&Participant> {
        match &self.state {
            RoundState::Complete { selection } => self.participants.get(selection.index),
            _ => None,
        }
    }

    /// Add a participant to a waiting round and re-lay the wheel.
    pub fn join(&mut self, participant: Participant) -> Result<(), JackpotError> {
        self.ensure_phase(RoundPhase::Waiting, "join")?;
        if self.participants.iter().any(|p| p.id == participant.id) {
            return Err(JackpotError::DuplicateParticipant { id: participant.id });
        }
        participant.validate()?;
        debug!(
            round = self.id,
            participant = %participant.id,
            value = participant.contributed_value(),
            items = participant.items.len(),
            "participant joined"
        );
        self.participants.push(participant);
        self.relayout();
        Ok(())
    }

    /// Count the join timer down by `elapsed_ms`.
    ///
    /// When it runs out the spin starts and its selection is returned. A pot
    /// with nothing in it cannot spin, so the timer restarts instead.
    pub fn advance_timer(&mut self, elapsed_ms: u64) -> Result<Option<Selection>, JackpotError> {
        let RoundState::Waiting { timer_remaining_ms } = &mut self.state else {
            return Err(JackpotError::invalid_state("advance join timer", self.phase()));
        };
        *timer_remaining_ms = timer_remaining_ms.saturating_sub(elapsed_ms);
        if *timer_remaining_ms > 0 {
            return Ok(None);
        }
        if self.total_value <= 0.0 {
            debug!(round = self.id, "join timer expired with an empty pot; restarting");
            *timer_remaining_ms = self.config.join_timer_ms;
            return Ok(None);
        }
        self.start_spin().map(Some)
    }

    /// Lock the round, draw the winner and begin the animation.
    pub fn start_spin(&mut self) -> Result<Selection, JackpotError> {
        self.ensure_phase(RoundPhase::Waiting, "start spin")?;
        self.total_value = compute_shares(&mut self.participants)?;
        self.segments = generate_segments(&self.participants, &self.config.geometry);

        let selection = draw_winner(&self.participants, &self.segments, &mut self.draws)?;
        let animation = SpinAnimation::new(&self.config.spin, self.rotation_angle, selection.mid_angle);
        info!(
            round = self.id,
            winner = %selection.participant_id,
            draw = selection.draw,
            fallback = selection.fallback,
            start_angle = animation.start_angle,
            target_angle = animation.target_angle,
            "spin started"
        );
        self.state = RoundState::Spinning {
            selection: selection.clone(),
            animation,
            progress: 0.0,
        };
        Ok(selection)
    }

    /// Advance the animation to `elapsed_ms` since the spin started.
    pub fn tick(&mut self, elapsed_ms: f64) -> Result<Tick, JackpotError> {
        let (frame, finished) = match &mut self.state {
            RoundState::Spinning {
                selection,
                animation,
                progress,
            } => {
                let frame = animation.frame(elapsed_ms);
                *progress = frame.progress;
                (frame, frame.is_final().then(|| selection.clone()))
            }
            state => return Err(JackpotError::invalid_state("tick", state.phase())),
        };
        self.rotation_angle = frame.angle;

        let Some(selection) = finished else {
            return Ok(Tick::Continue {
                angle: frame.angle,
                progress: frame.progress,
            });
        };
        info!(
            round = self.id,
            winner = %selection.participant_id,
            angle = frame.angle,
            "spin complete"
        );
        let winner = selection.index;
        self.state = RoundState::Complete { selection };
        Ok(Tick::Done {
            angle: frame.angle,
            winner,
        })
    }

    /// Return to waiting with a fresh timer. The wheel keeps its angle so the
    /// next spin starts where this one stopped.
    pub fn reset(&mut self) -> Result<(), JackpotError> {
        if self.phase() == RoundPhase::Spinning {
            return Err(JackpotError::invalid_state("reset", RoundPhase::Spinning));
        }
        debug!(round = self.id, angle = self.rotation_angle, "round reset");
        self.state = RoundState::Waiting {
            timer_remaining_ms: self.config.join_timer_ms,
        };
        Ok(())
    }

    /// Archive a completed round.
    pub fn record(&self) -> Option<RoundRecord> {
        let RoundState::Complete { selection } = &self.state else {
            return None;
        };
        let winner = self.participants.get(selection.index)?;
        Some(RoundRecord {
            round_id: self.id,
            winner_id: winner.id.clone(),
            winner_share: winner.share_percent,
            total_value: self.total_value,
            total_items: self.total_items(),
            draw: selection.draw,
            final_angle: self.displayed_angle(),
            participants: self
                .participants
                .iter()
                .map(|p| ShareRecord {
                    id: p.id.clone(),
                    value: p.contributed_value(),
                    share_percent: p.share_percent,
                })
                .collect(),
        })
    }

    fn ensure_phase(&self, expected: RoundPhase, operation: &'static str) -> Result<(), JackpotError> {
        let phase = self.phase();
        if phase != expected {
            return Err(JackpotError::invalid_state(operation, phase));
        }
        Ok(())
    }

    fn relayout(&mut self) {
        self.total_value = match compute_shares(&mut self.participants) {
            Ok(total) => total,
            Err(err) => {
                debug!(round = self.id, %err, "pot holds no value; shares unset");
                0.0
            }
        };
        self.segments = generate_segments(&self.participants, &self.config.geometry);
    }
}
