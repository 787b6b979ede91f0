//! Amethyst jackpot execution layer.
//!
//! This crate turns a list of weighted participants into a wheel, picks a
//! weighted-random winner and animates a spin that lands the pointer on that
//! winner. Nothing here renders or sleeps: hosts feed elapsed time in and read
//! angles and segment geometry out.
//!
//! ## Pipeline
//! 1. [`weights::compute_shares`] normalises contributed value into percentages.
//! 2. [`layout::generate_segments`] projects shares onto circular sectors.
//! 3. [`selector::draw_winner`] draws the winner from an injected [`DrawSource`].
//! 4. [`animator::SpinAnimation`] interpolates the wheel towards the winner.
//!
//! [`round::JackpotRound`] ties the four together behind a
//! `Waiting -> Spinning -> Complete` state machine, and [`driver::SpinDriver`]
//! connects a round to a host's per-frame callback.
//!
//! ## Determinism requirements
//! - The winner is fixed when the spin starts; the animation never changes it.
//! - All randomness flows through a [`DrawSource`], so tests can script draws.
//!
//! ```rust,ignore
//! use amethyst_execution::{JackpotRound, RandomDraws, RoundConfig, Tick};
//!
//! let mut round = JackpotRound::new(1, RoundConfig::default(), RandomDraws::from_entropy())?;
//! round.join(alice)?;
//! round.join(bob)?;
//! let selection = round.start_spin()?;
//! let mut elapsed = 0.0;
//! while let Tick::Continue { .. } = round.tick(elapsed)? {
//!     elapsed += 16.0;
//! }
//! assert_eq!(round.winner().map(|w| &w.id), Some(&selection.participant_id));
//! ```

pub mod ambient;
pub mod animator;
pub mod driver;
pub mod layout;
pub mod round;
pub mod selector;
pub mod weights;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;


pub use ambient::{Celebration, HighlightCycle, PointerPulse};
pub use animator::{ease_out_quint, landing_angle, target_angle, Frame, SpinAnimation, SpinConfig};
pub use driver::{FrameHandle, FrameHost, SpinDriver};
pub use layout::{generate_segments, Point, WheelGeometry, WheelSegment};
pub use round::{JackpotRound, RoundConfig, RoundState, Tick};
pub use selector::{draw_winner, pick_index, DrawSource, RandomDraws, Selection};
pub use weights::{compute_shares, share_sum, total_value};
