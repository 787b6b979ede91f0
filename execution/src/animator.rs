//! Spin animation: where the wheel must stop and how it gets there.
//!
//! The wheel rotates clockwise by `angle` degrees. A point drawn at wheel angle
//! `a` appears at `a + angle`, so a segment centred on `mid` sits under the
//! pointer once `angle ≡ pointer - mid (mod 360)`.

use amethyst_types::{
    JackpotError, BASE_FULL_ROTATIONS, MIN_FULL_ROTATIONS, POINTER_ANGLE_DEG, SPIN_DURATION_MS,
};
use serde::{Deserialize, Serialize};

/// Timing and landing parameters for a spin.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinConfig {
    pub duration_ms: u64,
    /// Whole turns before landing. Visual only; never affects the outcome.
    pub base_rotations: u32,
    /// Angle of the fixed pointer in the wheel's frame.
    pub pointer_angle: f64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            base_rotations: BASE_FULL_ROTATIONS,
            pointer_angle: POINTER_ANGLE_DEG,
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> Result<(), JackpotError> {
        if self.duration_ms == 0 {
            return Err(JackpotError::InvalidConfig("spin duration must be greater than zero"));
        }
        if self.base_rotations < MIN_FULL_ROTATIONS {
            return Err(JackpotError::InvalidConfig("spin needs at least five full rotations"));
        }
        if !self.pointer_angle.is_finite() {
            return Err(JackpotError::InvalidConfig("pointer angle must be finite"));
        }
        Ok(())
    }
}

/// Quintic ease-out: fast start, long slow finish.
#[inline]
pub fn ease_out_quint(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(5)
}

/// Resting angle, in `[0, 360)`, that puts `mid_angle` under the pointer.
pub fn landing_angle(pointer_angle: f64, mid_angle: f64) -> f64 {
    (pointer_angle - mid_angle).rem_euclid(360.0)
}

/// Unreduced angle the spin animates to.
///
/// The smallest angle at least `base_rotations` full turns past `start` that
/// lands on `mid_angle`, so a spin never runs backwards even when `start` was
/// carried over from a previous round.
pub fn target_angle(start: f64, base_rotations: u32, pointer_angle: f64, mid_angle: f64) -> f64 {
    let minimum = start + f64::from(base_rotations) * 360.0;
    let landing = landing_angle(pointer_angle, mid_angle);
    minimum + (landing - minimum.rem_euclid(360.0)).rem_euclid(360.0)
}

/// One frame of a spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub angle: f64,
    /// Linear time progress in `[0, 1]`.
    pub progress: f64,
}

impl Frame {
    pub fn is_final(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Interpolation from `start_angle` to `target_angle` over `duration_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpinAnimation {
    pub start_angle: f64,
    pub target_angle: f64,
    pub duration_ms: u64,
}

impl SpinAnimation {
    pub fn new(config: &SpinConfig, start_angle: f64, mid_angle: f64) -> Self {
        Self {
            start_angle,
            target_angle: target_angle(
                start_angle,
                config.base_rotations,
                config.pointer_angle,
                mid_angle,
            ),
            duration_ms: config.duration_ms,
        }
    }

    /// `min(1, elapsed / duration)`; exactly 1 once the duration has passed.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if elapsed_ms >= self.duration_ms as f64 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms as f64).max(0.0)
    }

    pub fn frame(&self, elapsed_ms: f64) -> Frame {
        let progress = self.progress(elapsed_ms);
        let angle = if progress >= 1.0 {
            self.target_angle
        } else {
            let eased = ease_out_quint(progress);
            (self.start_angle + (self.target_angle - self.start_angle) * eased).min(self.target_angle)
        };
        Frame { angle, progress }
    }
}
