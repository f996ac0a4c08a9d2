use std::f32::consts::PI;

use folio_animation::{AnimationDescriptor, FloatDrift, Orbit, TAU, Track};
use folio_ids::derive_seed;
use folio_nodes::{Geometry, InteractionProfile, Light, Look, Material, Node, ParticleField};
use folio_particle_math::{Distribution, ParticleRng, PointCloud, Seed};
use folio_structs::{Color, Vector3};

use crate::{
    CameraSetup, CameraStrategy, SceneDescriptor, SceneOptions,
    palette::{CYAN, INDIGO, PINK, SLATE, VIOLET, accent},
};

/// (position, base colour, hover colour)
const CUBES: [(Vector3, Color, Color); 4] = [
    (Vector3::new(-3.0, 0.5, -1.0), INDIGO, CYAN),
    (Vector3::new(3.0, 0.5, -1.0), PINK, VIOLET),
    (Vector3::new(0.0, 0.5, 3.0), VIOLET, PINK),
    (Vector3::new(0.0, 0.5, -4.0), CYAN, INDIGO),
];

const WOBBLE_TORI: [(Vector3, Color); 2] = [
    (Vector3::new(-2.0, 2.0, 2.0), CYAN),
    (Vector3::new(2.0, 2.0, -2.0), PINK),
];

/// Half of one turn per minute.
const AUTO_ROTATE_SPEED: f32 = TAU / 60.0 * 0.5;
const LIGHT_BEAMS: usize = 4;

pub fn build(options: &SceneOptions) -> SceneDescriptor {
    let camera = CameraSetup::new(
        CameraStrategy::OrbitExplore {
            target: Vector3::ZERO,
            min_polar: PI / 4.0,
            max_polar: PI / 1.5,
            damping: 0.05,
            auto_rotate_speed: AUTO_ROTATE_SPEED,
            rotate_speed: TAU,
        },
        Vector3::new(0.0, 2.0, 8.0),
        60.0,
    );
    let mut scene = SceneDescriptor::new(options, camera);
    let seed_for = |label: &str| Seed::from(options.seed.map(|s| derive_seed(s, label)));
    let mut rng = ParticleRng::new(seed_for("showcase/shapes"));

    scene.push(Node::light("ambient-light", Light::ambient(0.3)));
    scene.push(
        Node::light("key-light", Light::directional(Color::WHITE, 1.0))
            .at(Vector3::new(10.0, 10.0, 5.0)),
    );
    scene.push(
        Node::light("top-light", Light::point(VIOLET, 1.0)).at(Vector3::new(0.0, 5.0, 0.0)),
    );
    scene.push(
        Node::light("fill-light-cyan", Light::point(CYAN, 0.5)).at(Vector3::new(-5.0, 0.0, -5.0)),
    );
    scene.push(
        Node::light("fill-light-pink", Light::point(PINK, 0.5)).at(Vector3::new(5.0, 0.0, 5.0)),
    );

    let extras = options.shape_count.saturating_sub(CUBES.len());
    for i in 0..options.shape_count {
        let (position, base, hover) = CUBES
            .get(i)
            .copied()
            .unwrap_or_else(|| extra_cube(i, extras));
        scene.push(cube(i, position, base, hover, rng.range(0.0, 10_000.0)));
    }

    for (i, &(position, color)) in WOBBLE_TORI.iter().enumerate() {
        let material = Material::wobble(color, 0.3, 1.0).with_finish(0.2, 0.8);
        let idle = Look::of(&material);
        scene.push(
            Node::shape(
                format!("wobble-torus-{i}"),
                Geometry::Torus {
                    radius: 1.0,
                    tube: 0.4,
                    radial_segments: 16,
                    tubular_segments: 100,
                },
            )
            .at(position)
            .with_material(material)
            .with_animation(
                AnimationDescriptor::still()
                    .with_rotation(Track::spin(0.2), Track::spin(0.3), Track::Still)
                    .with_float(
                        FloatDrift::new(1.5, 1.0, 0.8).with_offset(rng.range(0.0, 10_000.0)),
                    ),
            )
            .interactive(InteractionProfile::hover_only(idle, idle.distortion(1.0, 3.0))),
        );
    }

    let crystal = Material::standard(VIOLET)
        .with_emissive(VIOLET, 0.3)
        .wireframe();
    let idle = Look::of(&crystal);
    scene.push(
        Node::shape("wireframe-crystal", Geometry::Dodecahedron { radius: 1.5 })
            .at(Vector3::new(0.0, 1.0, 0.0))
            .with_material(crystal)
            .with_animation(
                AnimationDescriptor::still()
                    .with_rotation(Track::spin(0.2), Track::spin(0.3), Track::spin(0.1))
                    .with_float(FloatDrift::new(1.0, 0.3, 0.5).with_offset(rng.range(0.0, 10_000.0))),
            )
            .interactive(InteractionProfile::hover_only(
                idle,
                idle.color(CYAN).emissive(CYAN, 0.8).scale(1.3),
            )),
    );

    scene.push(
        Node::shape(
            "platform",
            Geometry::Cylinder {
                radius_top: 4.0,
                radius_bottom: 4.5,
                height: 0.5,
                segments: 32,
            },
        )
        .at(Vector3::new(0.0, -2.0, 0.0))
        .rotated(Vector3::new(-PI / 2.0, 0.0, 0.0))
        .with_material(Material::distort(SLATE, 0.1, 1.0).with_finish(0.3, 0.7))
        .with_animation(AnimationDescriptor::still().with_bob(Track::oscillate(0.2, 0.5))),
    );

    // The sphere ring turns as a group at +0.1 rad/s about Y, which runs the
    // orbit angle backwards in the XZ convention used by `Orbit`.
    let ring = Orbit::new(3.0, -0.1).ring(options.orbiting_sphere_count);
    let spheres: Vec<Node> = ring
        .enumerate()
        .map(|(i, orbit)| {
            let height = if i % 2 == 0 { 0.3 } else { -0.3 };
            let color = accent(i);
            Node::shape(
                format!("orbiting-sphere-{i}"),
                Geometry::Sphere {
                    radius: 0.1 + rng.unit() * 0.15,
                    segments: 16,
                },
            )
            .with_material(Material::standard(color).with_emissive(color, 0.5))
            .with_animation(AnimationDescriptor::still().with_orbit(orbit.with_height(height)))
        })
        .collect();
    scene.extend(spheres);

    for i in 0..LIGHT_BEAMS {
        scene.push(
            Node::shape(
                format!("light-beam-{i}"),
                Geometry::Cone {
                    radius: 0.1,
                    height: 8.0,
                    segments: 4,
                },
            )
            .at(Vector3::new(0.0, 2.0, 0.0))
            .rotated(Vector3::new(
                0.0,
                i as f32 / LIGHT_BEAMS as f32 * TAU,
                PI / 8.0,
            ))
            .with_material(Material::standard(accent(i)).with_opacity(0.1))
            .with_animation(
                AnimationDescriptor::still().with_group_spin(Vector3::new(0.0, 0.05, 0.0)),
            ),
        );
    }

    let field = PointCloud::generate(
        Distribution::SphereShell {
            inner: 5.0,
            outer: 15.0,
        },
        options.particle_count,
        seed_for("showcase/particles"),
    );
    scene.push(
        Node::particles("particle-field", ParticleField::new(field))
            .with_material(Material::points(VIOLET, 0.03, 0.4))
            .with_animation(
                AnimationDescriptor::still().with_group_spin(Vector3::new(0.0, 0.03, 0.0)),
            ),
    );

    let stars = PointCloud::generate(
        Distribution::StarShell {
            radius: 100.0,
            depth: 50.0,
            factor: 4.0,
            saturation: 0.0,
        },
        options.star_count,
        seed_for("showcase/stars"),
    );
    scene.push(
        Node::particles("stars", ParticleField::new(stars).twinkling(0.5))
            .with_material(Material::points(Color::WHITE, 1.0, 1.0)),
    );

    let eye = scene.camera.position;
    scene.push(Node::camera_rig("camera").at(eye));
    scene
}

fn cube(i: usize, position: Vector3, base: Color, hover: Color, float_offset: f32) -> Node {
    let material = Material::distort(base, 0.3, 3.0).with_finish(0.1, 0.9);
    let idle = Look::of(&material);
    Node::shape(
        format!("interactive-cube-{i}"),
        Geometry::Cuboid {
            width: 1.0,
            height: 1.0,
            depth: 1.0,
        },
    )
    .at(position)
    .with_material(material)
    .with_animation(
        AnimationDescriptor::still()
            .with_rotation(Track::spin(0.3), Track::spin(0.6), Track::Still)
            .with_float(FloatDrift::new(2.0, 0.5, 0.5).with_offset(float_offset)),
    )
    .interactive(InteractionProfile::toggle(
        idle,
        idle.color(hover).scale(1.2),
        idle.color(hover).distortion(0.6, 3.0).scale(1.4),
    ))
}

/// Cubes past the authored four share an outer ring, evenly spaced.
fn extra_cube(i: usize, extras: usize) -> (Vector3, Color, Color) {
    let slot = i.saturating_sub(CUBES.len());
    let angle = slot as f32 * TAU / extras.max(1) as f32;
    (
        Vector3::new(5.0 * angle.cos(), 0.5, 5.0 * angle.sin()),
        accent(i),
        accent(i + 1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_nodes::{InteractionMode, NodeKind};

    fn ring_angles(scene: &SceneDescriptor) -> Vec<f32> {
        scene
            .nodes
            .iter()
            .filter_map(|n| n.animation.orbit.map(|o| o.angle(12.5)))
            .collect()
    }

    #[test]
    fn default_showcase_has_authored_layout() {
        let scene = build(&SceneOptions::showcase().with_seed(11));
        assert_eq!(scene.count_where(|n| n.name.starts_with("interactive-cube")), 4);
        assert_eq!(scene.count_where(|n| n.name.starts_with("wobble-torus")), 2);
        assert_eq!(scene.count_where(|n| n.name.starts_with("orbiting-sphere")), 8);
        assert_eq!(scene.count_where(|n| n.name.starts_with("light-beam")), 4);
        assert_eq!(scene.count_where(|n| matches!(n.kind, NodeKind::Light(_))), 5);
        assert!(scene.find("platform").is_some());
        assert!(scene.find("wireframe-crystal").is_some());
        assert_eq!(scene.interactive_count(), 4 + 2 + 1);
        assert_eq!(scene.point_count(), 200 + 2000);
    }

    #[test]
    fn cubes_toggle_and_hover_shapes_do_not() {
        let scene = build(&SceneOptions::showcase().with_seed(2));
        let cube = scene.find("interactive-cube-0").unwrap();
        let profile = cube.interaction.unwrap();
        assert_eq!(profile.mode, InteractionMode::Toggle);
        assert_eq!(
            (profile.idle.scale, profile.hovered.scale, profile.active.scale),
            (1.0, 1.2, 1.4)
        );
        assert_eq!(profile.active.distortion, 0.6);

        let torus = scene.find("wobble-torus-1").unwrap();
        let profile = torus.interaction.unwrap();
        assert_eq!(profile.mode, InteractionMode::HoverOnly);
        assert_eq!(profile.hovered.distortion, 1.0);
        assert_eq!(profile.hovered.distortion_speed, 3.0);
    }

    #[test]
    fn extra_cubes_never_overlap() {
        let mut options = SceneOptions::showcase().with_seed(4);
        options.shape_count = 20;
        let scene = build(&options);
        let cubes: Vec<Vector3> = scene
            .nodes
            .iter()
            .filter(|n| n.name.starts_with("interactive-cube"))
            .map(|n| n.base.position)
            .collect();
        assert_eq!(cubes.len(), 20);
        for (i, a) in cubes.iter().enumerate() {
            for b in &cubes[i + 1..] {
                assert!(a.distance(*b) > 1.0, "{a} and {b} collide");
            }
        }
    }

    #[test]
    fn light_beams_cycle_the_accents() {
        let scene = build(&SceneOptions::showcase().with_seed(6));
        for i in 0..LIGHT_BEAMS {
            let beam = scene.find(&format!("light-beam-{i}")).unwrap();
            assert_eq!(beam.material.color, accent(i));
            assert_eq!(beam.material.opacity, 0.1);
        }
        let platform = scene.find("platform").unwrap();
        assert_eq!((platform.material.roughness, platform.material.metalness), (0.3, 0.7));
    }

    #[test]
    fn sphere_ring_is_evenly_spaced() {
        for count in [3, 8, 13] {
            let mut options = SceneOptions::showcase().with_seed(5);
            options.orbiting_sphere_count = count;
            let angles = ring_angles(&build(&options));
            assert_eq!(angles.len(), count);
            let step = TAU / count as f32;
            for pair in angles.windows(2) {
                assert!((pair[1] - pair[0] - step).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn sphere_heights_alternate() {
        let scene = build(&SceneOptions::showcase().with_seed(5));
        let heights: Vec<f32> = scene
            .nodes
            .iter()
            .filter_map(|n| n.animation.orbit.map(|o| o.height))
            .collect();
        assert_eq!(&heights[..4], &[0.3, -0.3, 0.3, -0.3]);
    }

    #[test]
    fn same_seed_builds_same_scene() {
        let a = build(&SceneOptions::showcase().with_seed(99));
        let b = build(&SceneOptions::showcase().with_seed(99));
        assert_eq!(a.nodes, b.nodes);
        let c = build(&SceneOptions::showcase().with_seed(100));
        assert_ne!(a.nodes, c.nodes);
    }

    #[test]
    fn zero_counts_build_empty_sets() {
        let mut options = SceneOptions::showcase().with_seed(1);
        options.shape_count = 0;
        options.orbiting_sphere_count = 0;
        options.particle_count = 0;
        let scene = build(&options);
        assert_eq!(scene.count_where(|n| n.name.starts_with("interactive-cube")), 0);
        assert!(ring_angles(&scene).is_empty());
        assert_eq!(scene.point_count(), 2000);
    }
}
