/// Seconds a round waits for participants before spinning on its own.
pub const JOIN_TIMER_SECS: u64 = 120;

/// Join timer in milliseconds.
pub const JOIN_TIMER_MS: u64 = JOIN_TIMER_SECS * 1_000;

/// Wall-clock length of the spin animation.
pub const SPIN_DURATION_MS: u64 = 8_000;

/// Whole turns the wheel makes before settling (purely visual).
pub const BASE_FULL_ROTATIONS: u32 = 5;

/// Fewest whole turns a spin may be configured with.
pub const MIN_FULL_ROTATIONS: u32 = 5;

/// Angle of the fixed pointer in the wheel's frame (0 = 12 o'clock, clockwise).
pub const POINTER_ANGLE_DEG: f64 = 270.0;

/// Degrees of arc per percent of share.
pub const DEGREES_PER_PERCENT: f64 = 3.6;

/// Shares of a round sum to 100 within this tolerance.
pub const SHARE_EPSILON: f64 = 1e-6;

/// Wheel drawing box: centre and radii in view-box units.
pub const WHEEL_CENTER: (f64, f64) = (50.0, 50.0);
pub const OUTER_RADIUS: f64 = 50.0;
pub const LABEL_RADIUS: f64 = 35.0;
pub const INNER_RADIUS: f64 = 20.0;

/// Ambient segment highlight cadence while waiting.
pub const HIGHLIGHT_INTERVAL_MS: u64 = 3_000;
pub const HIGHLIGHT_HOLD_MS: u64 = 1_000;

/// Pointer pulse toggle period while waiting.
pub const POINTER_PULSE_MS: u64 = 1_000;

/// How long the winner celebration stays on screen.
pub const CELEBRATION_MS: u64 = 5_000;

/// Shade offset applied to a participant colour for the gradient's far stop.
pub const GRADIENT_SHADE: i16 = -30;
