use folio_structs::{Transform3D, Vector3};

use crate::{FloatDrift, Orbit, Track};

/// Which motion functions a node runs each frame, and with what parameters.
///
/// Every channel is additive on top of the node's base transform, so the
/// sampled pose depends only on `(base, t)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AnimationDescriptor {
    /// Per-axis rotation channels (x, y, z), radians.
    pub rotation: [Track; 3],
    /// Vertical offset added to the base position.
    pub bob: Track,
    /// Uniform offset added to the base scale.
    pub pulse: Track,
    /// Circular path around the base position.
    pub orbit: Option<Orbit>,
    /// Floating wrapper around the node.
    pub float: Option<FloatDrift>,
    /// Whole-group rotation rates (x, y, z), radians per second.
    pub group_spin: Vector3,
}

/// Sampled pose: the node's own transform and the wrapper it sits in.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Motion {
    pub local: Transform3D,
    pub group: Transform3D,
}

impl AnimationDescriptor {
    pub fn still() -> Self {
        Self::default()
    }

    pub fn with_rotation(mut self, x: Track, y: Track, z: Track) -> Self {
        self.rotation = [x, y, z];
        self
    }

    pub fn with_bob(mut self, bob: Track) -> Self {
        self.bob = bob;
        self
    }

    pub fn with_pulse(mut self, pulse: Track) -> Self {
        self.pulse = pulse;
        self
    }

    pub fn with_orbit(mut self, orbit: Orbit) -> Self {
        self.orbit = Some(orbit);
        self
    }

    pub fn with_float(mut self, float: FloatDrift) -> Self {
        self.float = Some(float);
        self
    }

    pub fn with_group_spin(mut self, rates: Vector3) -> Self {
        self.group_spin = if rates.is_finite() { rates } else { Vector3::ZERO };
        self
    }

    pub fn is_still(&self) -> bool {
        *self == Self::default()
    }

    pub fn sample(&self, base: &Transform3D, t: f32) -> Motion {
        let [rx, ry, rz] = &self.rotation;
        let mut local = *base;

        local.rotation = Vector3::new(
            rx.value(base.rotation.x, t),
            ry.value(base.rotation.y, t),
            rz.value(base.rotation.z, t),
        );

        if let Some(orbit) = &self.orbit {
            local.position += orbit.position(t);
        }
        local.position.y = self.bob.value(local.position.y, t);
        local.scale = base.scale + Vector3::splat(self.pulse.offset(t));

        let mut group = match &self.float {
            Some(float) => float.sample(t),
            None => Transform3D::IDENTITY,
        };
        group.rotation += self.group_spin * t;

        Motion { local, group }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn still_descriptor_returns_base() {
        let base = Transform3D::from_position(Vector3::new(2.0, 0.5, -1.0)).with_uniform_scale(1.2);
        let motion = AnimationDescriptor::still().sample(&base, 42.0);
        assert_eq!(motion.local, base);
        assert_eq!(motion.group, Transform3D::IDENTITY);
    }

    #[test]
    fn bob_oscillates_around_base_height() {
        let base = Transform3D::from_position(Vector3::new(0.0, -2.0, 0.0));
        let anim = AnimationDescriptor::still().with_bob(Track::oscillate(0.2, 0.5));
        let quarter = std::f32::consts::PI; // sin(pi * 0.5) = 1
        let y = anim.sample(&base, quarter).local.position.y;
        assert!((y - (-1.8)).abs() < 1e-5);
    }

    #[test]
    fn pulse_offsets_uniform_scale() {
        let base = Transform3D::default().with_uniform_scale(0.4);
        let anim = AnimationDescriptor::still().with_pulse(Track::oscillate(0.1, 1.0));
        let s = anim.sample(&base, std::f32::consts::FRAC_PI_2).local.scale;
        assert!((s.x - 0.5).abs() < 1e-6 && (s.z - 0.5).abs() < 1e-6);
    }

    #[test]
    fn group_spin_drives_wrapper_rotation_only() {
        let anim = AnimationDescriptor::still().with_group_spin(Vector3::new(0.01, 0.02, 0.0));
        let motion = anim.sample(&Transform3D::default(), 10.0);
        assert!((motion.group.rotation.y - 0.2).abs() < 1e-6);
        assert_eq!(motion.local.rotation, Vector3::ZERO);
    }

    #[test]
    fn non_finite_group_spin_is_dropped() {
        let anim = AnimationDescriptor::still().with_group_spin(Vector3::new(f32::NAN, 0.0, 0.0));
        assert!(anim.is_still());
    }
}
