//! Binding between a round and a host's per-frame callback.
//!
//! The host owns the frame loop (a browser's animation frame, a game loop, a
//! test harness). A [`SpinDriver`] holds at most one pending frame handle: it
//! is acquired when the spin starts and released when the spin completes or
//! the driver is torn down, whichever happens first.

use amethyst_types::JackpotError;
use tracing::{debug, warn};

use crate::{
    round::{JackpotRound, Tick},
    selector::{DrawSource, Selection},
};

/// Opaque token for a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(pub u64);

/// Per-frame scheduling provided by the host.
pub trait FrameHost {
    /// Schedule one callback for the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;
    /// Drop a scheduled callback. Cancelling a handle that already fired is a no-op.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Drives one round's spin from a host's frames.
///
/// Dropping the driver cancels any pending frame. A round torn down mid-spin
/// stays `Spinning` with its last angle and never commits a winner.
pub struct SpinDriver<'a, H: FrameHost, D: DrawSource> {
    round: &'a mut JackpotRound<D>,
    host: &'a mut H,
    pending: Option<FrameHandle>,
}

impl<'a, H: FrameHost, D: DrawSource> SpinDriver<'a, H, D> {
    pub fn new(round: &'a mut JackpotRound<D>, host: &'a mut H) -> Self {
        Self {
            round,
            host,
            pending: None,
        }
    }

    pub fn round(&self) -> &JackpotRound<D> {
        self.round
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Start the spin now and schedule its first frame.
    pub fn start(&mut self) -> Result<Selection, JackpotError> {
        let selection = self.round.start_spin()?;
        self.schedule();
        Ok(selection)
    }

    /// Count the join timer down; schedules the first frame if it expired.
    pub fn advance_timer(&mut self, elapsed_ms: u64) -> Result<Option<Selection>, JackpotError> {
        let selection = self.round.advance_timer(elapsed_ms)?;
        if selection.is_some() {
            self.schedule();
        }
        Ok(selection)
    }

    /// Frame callback: `elapsed_ms` is the time since the spin started.
    pub fn on_frame(&mut self, elapsed_ms: f64) -> Result<Tick, JackpotError> {
        // The handle that fired is spent.
        if self.pending.take().is_none() {
            return Err(JackpotError::NoPendingFrame);
        }
        let tick = self.round.tick(elapsed_ms)?;
        if let Tick::Continue { .. } = tick {
            self.schedule();
        }
        Ok(tick)
    }

    /// Cancel the pending frame, if any. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            warn!(
                round = self.round.id(),
                angle = self.round.rotation_angle(),
                handle = handle.0,
                "spin torn down before completion"
            );
            self.host.cancel_frame(handle);
        }
    }

    fn schedule(&mut self) {
        let handle = self.host.request_frame();
        debug!(round = self.round.id(), handle = handle.0, "frame requested");
        self.pending = Some(handle);
    }
}

impl<H: FrameHost, D: DrawSource> Drop for SpinDriver<'_, H, D> {
    fn drop(&mut self) {
        self.teardown();
    }
}
