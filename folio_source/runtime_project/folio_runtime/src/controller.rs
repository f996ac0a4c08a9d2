//! Camera strategies. Both run once per tick, after every node has updated.

use folio_animation::{FrameTime, sanitize_factor, smooth_follow};
use folio_input::PointerState;
use folio_scene::{CameraSetup, CameraStrategy};
use folio_structs::{Vector2, Vector3};

use crate::Camera3D;

pub trait CameraController {
    fn update(&mut self, camera: &mut Camera3D, pointer: &mut PointerState, time: FrameTime);

    fn name(&self) -> &'static str;
}

pub fn controller_for(setup: &CameraSetup) -> Box<dyn CameraController> {
    match setup.strategy {
        CameraStrategy::PointerFollow {
            smoothing,
            reach,
            look_at,
        } => Box::new(PointerFollow::new(smoothing, reach, look_at)),
        CameraStrategy::OrbitExplore {
            target,
            min_polar,
            max_polar,
            damping,
            auto_rotate_speed,
            rotate_speed,
        } => Box::new(
            OrbitExplore::new(target, setup.position, min_polar, max_polar)
                .with_damping(damping)
                .with_auto_rotate(auto_rotate_speed)
                .with_rotate_speed(rotate_speed),
        ),
    }
}

/// Passive parallax: the camera drifts toward `pointer * reach` in X/Y and
/// keeps its depth. No drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerFollow {
    pub smoothing: f32,
    pub reach: Vector2,
    pub look_at: Vector3,
}

impl PointerFollow {
    pub fn new(smoothing: f32, reach: Vector2, look_at: Vector3) -> Self {
        Self {
            smoothing: sanitize_factor(smoothing),
            reach,
            look_at,
        }
    }

    pub fn target(&self, current: Vector3, pointer: Vector2) -> Vector3 {
        Vector3::new(pointer.x * self.reach.x, pointer.y * self.reach.y, current.z)
    }
}

impl CameraController for PointerFollow {
    fn update(&mut self, camera: &mut Camera3D, pointer: &mut PointerState, _time: FrameTime) {
        let current = Vector3::from_glam(camera.position);
        let next = smooth_follow(current, self.target(current, pointer.ndc), self.smoothing);
        camera.position = next.to_glam();
        camera.look_at(self.look_at);
    }

    fn name(&self) -> &'static str {
        "pointer-follow"
    }
}

/// Drag-to-orbit around a target on a sphere of fixed radius.
///
/// Drags and auto-rotation feed a pending angular delta. Each tick applies
/// `damping` of it and keeps the rest, so motion coasts to a stop after the
/// drag ends. The polar angle is measured from +Y and clamped to
/// `[min_polar, max_polar]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitExplore {
    pub target: Vector3,
    pub radius: f32,
    /// Azimuth around +Y, radians; 0 looks down -Z from +Z.
    pub theta: f32,
    pub phi: f32,
    pub min_polar: f32,
    pub max_polar: f32,
    pub damping: f32,
    pub auto_rotate_speed: f32,
    pub rotate_speed: f32,
    /// Angular velocity not yet applied: (d_theta, d_phi).
    pub pending: Vector2,
}

impl OrbitExplore {
    pub fn new(target: Vector3, eye: Vector3, min_polar: f32, max_polar: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length();
        let (theta, phi) = if radius > f32::EPSILON {
            (
                offset.x.atan2(offset.z),
                (offset.y / radius).clamp(-1.0, 1.0).acos(),
            )
        } else {
            (0.0, std::f32::consts::FRAC_PI_2)
        };
        let (lo, hi) = clean_range(min_polar, max_polar);

        Self {
            target,
            radius,
            theta,
            phi: phi.clamp(lo, hi),
            min_polar: lo,
            max_polar: hi,
            damping: 0.05,
            auto_rotate_speed: 0.0,
            rotate_speed: std::f32::consts::TAU,
            pending: Vector2::ZERO,
        }
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = sanitize_factor(damping);
        self
    }

    pub fn with_auto_rotate(mut self, speed: f32) -> Self {
        self.auto_rotate_speed = if speed.is_finite() { speed } else { 0.0 };
        self
    }

    pub fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = if speed.is_finite() { speed } else { 0.0 };
        self
    }

    pub fn eye(&self) -> Vector3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + Vector3::new(
                self.radius * sin_phi * sin_theta,
                self.radius * cos_phi,
                self.radius * sin_phi * cos_theta,
            )
    }

    /// One integration step without touching a camera.
    pub fn step(&mut self, drag: Vector2, dragging: bool, delta: f32) {
        // Dragging right swings the camera left around the target.
        self.pending.x -= drag.x * self.rotate_speed;
        self.pending.y += drag.y * self.rotate_speed;
        if !dragging {
            self.pending.x -= self.auto_rotate_speed * delta;
        }

        if self.damping > 0.0 {
            self.theta += self.pending.x * self.damping;
            self.phi += self.pending.y * self.damping;
            self.pending = self.pending * (1.0 - self.damping);
        } else {
            self.theta += self.pending.x;
            self.phi += self.pending.y;
            self.pending = Vector2::ZERO;
        }
        self.phi = self.phi.clamp(self.min_polar, self.max_polar);
    }
}

impl CameraController for OrbitExplore {
    fn update(&mut self, camera: &mut Camera3D, pointer: &mut PointerState, time: FrameTime) {
        let drag = pointer.take_drag_delta();
        self.step(drag, pointer.is_dragging(), time.delta);
        camera.position = self.eye().to_glam();
        camera.look_at(self.target);
    }

    fn name(&self) -> &'static str {
        "orbit-explore"
    }
}

fn clean_range(lo: f32, hi: f32) -> (f32, f32) {
    let pi = std::f32::consts::PI;
    let lo = if lo.is_finite() { lo.clamp(0.0, pi) } else { 0.0 };
    let hi = if hi.is_finite() { hi.clamp(0.0, pi) } else { pi };
    (lo.min(hi), lo.max(hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn showcase_orbit() -> OrbitExplore {
        OrbitExplore::new(Vector3::ZERO, Vector3::new(0.0, 2.0, 8.0), PI / 4.0, PI / 1.5)
    }

    #[test]
    fn spherical_round_trip_reproduces_eye() {
        let orbit = showcase_orbit();
        assert!((orbit.eye() - Vector3::new(0.0, 2.0, 8.0)).length() < 1e-4);
    }

    #[test]
    fn polar_angle_is_clamped_under_large_drags() {
        let mut orbit = showcase_orbit().with_damping(0.0);
        orbit.step(Vector2::new(0.0, 50.0), true, 0.016);
        assert_eq!(orbit.phi, PI / 1.5);
        orbit.step(Vector2::new(0.0, -50.0), true, 0.016);
        assert_eq!(orbit.phi, PI / 4.0);
        assert!(orbit.eye().is_finite());
    }

    #[test]
    fn auto_rotate_only_when_idle() {
        let mut orbit = showcase_orbit().with_damping(0.0).with_auto_rotate(0.5);
        let theta = orbit.theta;
        orbit.step(Vector2::ZERO, true, 0.1);
        assert_eq!(orbit.theta, theta);
        orbit.step(Vector2::ZERO, false, 0.1);
        assert!((orbit.theta - (theta - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn radius_never_changes() {
        let mut orbit = showcase_orbit().with_auto_rotate(1.0);
        let radius = orbit.eye().length();
        for i in 0..120 {
            orbit.step(Vector2::new(0.01 * i as f32, -0.02), i < 60, 1.0 / 60.0);
        }
        assert!((orbit.eye().length() - radius).abs() < 1e-3);
    }

    #[test]
    fn degenerate_range_is_ordered() {
        let orbit = OrbitExplore::new(Vector3::ZERO, Vector3::new(0.0, 0.0, 5.0), 2.0, 1.0);
        assert!(orbit.min_polar <= orbit.max_polar);
        assert!(orbit.phi >= 1.0 && orbit.phi <= 2.0);
    }
}
