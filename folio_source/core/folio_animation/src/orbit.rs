use folio_structs::Vector3;

use crate::finite_or;

/// Circular motion in the XZ plane at a constant height.
///
/// Angular position is `t * angular_speed + phase`; the point sits at
/// `(r cos θ, height, r sin θ)` relative to the node's base position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub radius: f32,
    pub angular_speed: f32,
    pub phase: f32,
    pub height: f32,
}

impl Orbit {
    pub fn new(radius: f32, angular_speed: f32) -> Self {
        let sanitized = finite_or(radius, 0.0);
        if sanitized < 0.0 {
            log::warn!("orbit radius {radius} is negative; clamping to 0");
        }
        Self {
            radius: sanitized.max(0.0),
            angular_speed: finite_or(angular_speed, 0.0),
            phase: 0.0,
            height: 0.0,
        }
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = finite_or(phase, 0.0);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = finite_or(height, 0.0);
        self
    }

    /// `count` copies of `self`, evenly spaced by `2π / count` starting at `self.phase`.
    pub fn ring(self, count: usize) -> impl Iterator<Item = Orbit> {
        let step = if count == 0 {
            0.0
        } else {
            crate::TAU / count as f32
        };
        (0..count).map(move |i| self.with_phase(self.phase + step * i as f32))
    }

    #[inline]
    pub fn angle(&self, t: f32) -> f32 {
        t * self.angular_speed + self.phase
    }

    #[inline]
    pub fn position(&self, t: f32) -> Vector3 {
        let (sin, cos) = self.angle(t).sin_cos();
        Vector3::new(self.radius * cos, self.height, self.radius * sin)
    }
}
