//! Procedural motion primitives.
//!
//! Every primitive is a pure function of elapsed time (and, for the
//! smoothing helpers, of explicitly stored current/target values).
//! Parameters are sanitised on construction so a tick never yields NaN.

mod descriptor;
mod float_drift;
mod orbit;
mod smoothing;
mod track;

pub use descriptor::{AnimationDescriptor, Motion};
pub use float_drift::FloatDrift;
pub use orbit::Orbit;
pub use smoothing::{scale_toward_target, smooth_follow, sanitize_factor};
pub use track::{ContinuousSpin, Oscillate, Track};

pub const TAU: f32 = std::f32::consts::TAU;

/// What one tick hands to every animated node.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds since the scene was mounted. Monotonic.
    pub elapsed: f32,
    /// Seconds since the previous tick, already clamped.
    pub delta: f32,
}

impl FrameTime {
    pub const fn new(elapsed: f32, delta: f32) -> Self {
        Self { elapsed, delta }
    }

    /// Snapshot at an absolute time with no delta, for sampling poses directly.
    pub const fn at(elapsed: f32) -> Self {
        Self::new(elapsed, 0.0)
    }
}

/// Non-finite parameters collapse to `fallback`.
#[inline]
pub(crate) fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() { value } else { fallback }
}
