use std::f32::consts::PI;

use folio_animation::FrameTime;
use folio_input::PointerState;
use folio_runtime::{Camera3D, CameraController, OrbitExplore, PointerFollow};
use folio_structs::{Vector2, Vector3};

fn strictly_between(prev: f32, next: f32, target: f32) -> bool {
    (prev < next && next < target) || (target < next && next < prev)
}

#[test]
fn pointer_follow_never_overshoots() {
    let mut follow = PointerFollow::new(0.05, Vector2::new(0.5, 0.3), Vector3::ZERO);
    let mut camera = Camera3D::new(Vector3::new(0.0, 0.0, 6.0), 60.0, 1.0);
    let mut pointer = PointerState::new();

    for ndc in [Vector2::new(1.0, -1.0), Vector2::new(-0.6, 0.8), Vector2::new(0.3, 0.1)] {
        pointer.move_to(ndc);
        for frame in 0..30 {
            let prev = Vector3::from_glam(camera.position);
            let target = follow.target(prev, pointer.ndc);
            follow.update(&mut camera, &mut pointer, FrameTime::at(frame as f32 / 60.0));
            let next = Vector3::from_glam(camera.position);

            assert!(strictly_between(prev.x, next.x, target.x));
            assert!(strictly_between(prev.y, next.y, target.y));
            assert_eq!(next.z, 6.0);
        }
    }
}

#[test]
fn pointer_follow_keeps_facing_origin() {
    let mut follow = PointerFollow::new(0.05, Vector2::new(0.5, 0.3), Vector3::ZERO);
    let mut camera = Camera3D::new(Vector3::new(0.0, 0.0, 6.0), 60.0, 1.0);
    let mut pointer = PointerState::new();
    pointer.move_to(Vector2::new(1.0, 1.0));
    for _ in 0..120 {
        follow.update(&mut camera, &mut pointer, FrameTime::default());
    }
    let expected = (-camera.position).normalize();
    assert!((camera.forward() - expected).length() < 1e-5);
}

#[test]
fn orbit_clamps_polar_angle_under_drag() {
    let eye = Vector3::new(0.0, 2.0, 8.0);
    let mut orbit = OrbitExplore::new(Vector3::ZERO, eye, PI / 4.0, PI / 1.5).with_damping(0.05);
    let mut camera = Camera3D::new(eye, 60.0, 1.0);
    let mut pointer = PointerState::new();

    pointer.move_to(Vector2::new(0.0, 1.0));
    pointer.begin_drag();
    // Drag from the top edge to the bottom edge over two seconds.
    for i in 1..=120 {
        pointer.move_to(Vector2::new(0.0, 1.0 - 2.0 * i as f32 / 120.0));
        orbit.update(&mut camera, &mut pointer, FrameTime::new(0.0, 1.0 / 60.0));
        assert!(orbit.phi >= PI / 4.0 && orbit.phi <= PI / 1.5);
    }
    pointer.end_drag();

    let radius = eye.length();
    assert!((orbit.phi - PI / 4.0).abs() < 1e-6);
    assert!((camera.position.y - radius * (PI / 4.0).cos()).abs() < 1e-3);
}

#[test]
fn orbit_inertia_decays_after_release() {
    let mut orbit = OrbitExplore::new(
        Vector3::ZERO,
        Vector3::new(0.0, 2.0, 8.0),
        PI / 4.0,
        PI / 1.5,
    )
    .with_damping(0.05);

    orbit.step(Vector2::new(0.25, 0.0), true, 1.0 / 60.0);

    let released = orbit.theta;
    let mut pending = vec![orbit.pending.x];
    for _ in 0..200 {
        let before = orbit.theta;
        orbit.step(Vector2::ZERO, false, 1.0 / 60.0);
        assert!(orbit.theta <= before, "coasts in the drag direction");
        pending.push(orbit.pending.x);
    }

    assert!(pending[0] < 0.0);
    for pair in pending.windows(2) {
        assert!((pair[1] / pair[0] - 0.95).abs() < 1e-5);
    }
    assert!(orbit.theta < released);
    assert!(pending.last().unwrap().abs() < 1e-3);
}

#[test]
fn orbit_auto_rotates_when_idle() {
    let mut orbit = OrbitExplore::new(
        Vector3::ZERO,
        Vector3::new(0.0, 2.0, 8.0),
        PI / 4.0,
        PI / 1.5,
    )
    .with_damping(0.05)
    .with_auto_rotate(std::f32::consts::TAU / 60.0 * 0.5);
    let mut camera = Camera3D::new(Vector3::new(0.0, 2.0, 8.0), 60.0, 1.0);
    let mut pointer = PointerState::new();

    let start = orbit.theta;
    for _ in 0..600 {
        orbit.update(&mut camera, &mut pointer, FrameTime::new(0.0, 1.0 / 60.0));
    }
    assert!(orbit.theta < start);
    assert!((camera.position.y - 2.0).abs() < 1e-3, "height is kept while idle");
}
