use folio_structs::{Transform3D, Vector3};

use crate::finite_or;

/// Idle "floating" wrapper motion: a slow bob plus a small rocking rotation.
///
/// Evaluated at `t + offset`, where `offset` is drawn once per node so that
/// siblings do not move in lockstep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatDrift {
    pub speed: f32,
    pub rotation_intensity: f32,
    pub float_intensity: f32,
    pub range: (f32, f32),
    pub offset: f32,
}

impl Default for FloatDrift {
    fn default() -> Self {
        Self {
            speed: 1.0,
            rotation_intensity: 1.0,
            float_intensity: 1.0,
            range: (-0.1, 0.1),
            offset: 0.0,
        }
    }
}

impl FloatDrift {
    pub fn new(speed: f32, rotation_intensity: f32, float_intensity: f32) -> Self {
        Self {
            speed: finite_or(speed, 0.0),
            rotation_intensity: finite_or(rotation_intensity, 0.0),
            float_intensity: finite_or(float_intensity, 0.0),
            ..Self::default()
        }
    }

    pub fn with_range(mut self, low: f32, high: f32) -> Self {
        self.range = (finite_or(low, -0.1), finite_or(high, 0.1));
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = finite_or(offset, 0.0);
        self
    }

    /// Wrapper transform at elapsed time `t`.
    pub fn sample(&self, t: f32) -> Transform3D {
        let phase = (t + self.offset) / 4.0 * self.speed;
        let (sin, cos) = phase.sin_cos();

        let rotation = Vector3::new(cos / 8.0, sin / 8.0, sin / 20.0) * self.rotation_intensity;
        let bob = map_linear(sin / 10.0, -0.1, 0.1, self.range.0, self.range.1);

        Transform3D {
            position: Vector3::new(0.0, bob * self.float_intensity, 0.0),
            rotation,
            scale: Vector3::ONE,
        }
    }

    /// Time for one full drift cycle, `None` when the drift is frozen.
    pub fn period(&self) -> Option<f32> {
        if self.speed == 0.0 {
            None
        } else {
            Some(4.0 * crate::TAU / self.speed.abs())
        }
    }
}

fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bob_stays_within_configured_range() {
        let drift = FloatDrift::new(1.6, 0.5, 1.0).with_range(-0.2, 0.2);
        for i in 0..400 {
            let y = drift.sample(i as f32 * 0.05).position.y;
            assert!((-0.2 - 1e-5..=0.2 + 1e-5).contains(&y), "y={y}");
        }
    }

    #[test]
    fn drift_repeats_after_its_period() {
        let drift = FloatDrift::new(2.0, 1.0, 0.5).with_offset(17.0);
        let period = drift.period().unwrap();
        let a = drift.sample(1.0);
        let b = drift.sample(1.0 + period);
        assert!((a.position.y - b.position.y).abs() < 1e-4);
        assert!((a.rotation.x - b.rotation.x).abs() < 1e-4);
    }

    #[test]
    fn zero_intensities_leave_identity() {
        let drift = FloatDrift::new(2.0, 0.0, 0.0);
        let t = drift.sample(3.3);
        assert_eq!(t.rotation, Vector3::ZERO);
        assert_eq!(t.position.y, 0.0);
    }

    #[test]
    fn frozen_drift_has_no_period() {
        assert_eq!(FloatDrift::new(0.0, 1.0, 1.0).period(), None);
    }
}
