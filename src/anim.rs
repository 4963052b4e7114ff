//! Animated numeric readouts
//!
//! Every number on the dashboard converges to its target with a quartic
//! ease-out curve instead of snapping. An `AnimatedValue` owns the state of
//! one such readout and is advanced by the host loop's tick; all methods take
//! an explicit `Instant` so tests can drive a manual timeline.

use std::time::{Duration, Instant};

/// Default convergence duration for a readout
pub const DEFAULT_DURATION: Duration = Duration::from_millis(1000);

/// Quartic ease-out: fast start, slow finish.
///
/// `p` is the animation progress in `[0, 1]`.
fn ease_out_quart(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(4)
}

/// State of one animated numeric field
///
/// The displayed value starts at 0 on first use and at the last published
/// value on every re-target, so changing the target mid-flight continues
/// smoothly rather than restarting from the original start value.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    /// Value currently published for display
    displayed: f64,
    /// Value the animation started from
    start: f64,
    /// Value the animation converges to
    target: f64,
    /// When the current animation started; `None` once settled
    started_at: Option<Instant>,
    /// Total convergence duration
    duration: Duration,
}

impl AnimatedValue {
    /// Creates a settled readout at 0 with the default duration
    pub fn new() -> Self {
        Self::with_duration(DEFAULT_DURATION)
    }

    /// Creates a settled readout at 0 with a custom duration
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            displayed: 0.0,
            start: 0.0,
            target: 0.0,
            started_at: None,
            duration,
        }
    }

    /// Starts (or restarts) convergence toward `target`.
    ///
    /// The new animation begins at whatever value was last published, and the
    /// clock restarts at `now`. Setting the same target while settled is a
    /// no-op.
    pub fn set_target(&mut self, target: f64, now: Instant) {
        if self.started_at.is_none() && (target - self.displayed).abs() < f64::EPSILON {
            return;
        }
        self.start = self.displayed;
        self.target = target;
        self.started_at = Some(now);
    }

    /// Advances the animation to `now`.
    ///
    /// Returns `true` if the value is still converging and another tick is
    /// needed. Once progress reaches 1 the target is published exactly and
    /// the animation settles; no further frames run until a new target
    /// arrives.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };

        let elapsed = now.saturating_duration_since(started_at);
        let p = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        if p >= 1.0 {
            self.displayed = self.target;
            self.started_at = None;
            return false;
        }

        self.displayed = self.start + (self.target - self.start) * ease_out_quart(p);
        true
    }

    /// The value to render, rounded to the nearest integer
    pub fn displayed(&self) -> i64 {
        self.displayed.round() as i64
    }

    /// The raw (unrounded) published value
    pub fn displayed_raw(&self) -> f64 {
        self.displayed
    }

    /// The value this readout is converging to
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Whether the readout has reached its target
    pub fn is_settled(&self) -> bool {
        self.started_at.is_none()
    }
}

impl Default for AnimatedValue {
    fn default() -> Self {
        Self::new()
    }
}
