use folio_animation::{AnimationDescriptor, FloatDrift, Track};
use folio_ids::derive_seed;
use folio_nodes::{Geometry, Light, Material, Node, ParticleField};
use folio_particle_math::{Distribution, ParticleRng, PointCloud, Seed};
use folio_structs::{Color, Vector2, Vector3};

use crate::{
    CameraSetup, CameraStrategy, SceneDescriptor, SceneOptions,
    palette::{CYAN, INDIGO, PINK, VIOLET, accent},
};

#[derive(Clone, Copy)]
struct FloatingShape {
    position: Vector3,
    scale: f32,
    color: Color,
    speed: f32,
    distort: f32,
}

const FLOATING_SHAPES: [FloatingShape; 4] = [
    FloatingShape {
        position: Vector3::new(2.0, 0.5, -1.0),
        scale: 1.2,
        color: INDIGO,
        speed: 0.8,
        distort: 0.4,
    },
    FloatingShape {
        position: Vector3::new(-2.5, -0.5, 0.0),
        scale: 0.8,
        color: VIOLET,
        speed: 1.2,
        distort: 0.3,
    },
    FloatingShape {
        position: Vector3::new(0.0, 1.5, -2.0),
        scale: 0.6,
        color: CYAN,
        speed: 1.0,
        distort: 0.5,
    },
    FloatingShape {
        position: Vector3::new(-1.0, -1.5, -1.0),
        scale: 0.5,
        color: PINK,
        speed: 0.9,
        distort: 0.35,
    },
];

/// (radius, speed, colour)
const ORBIT_RINGS: [(f32, f32, Color); 3] = [
    (2.5, 0.3, INDIGO),
    (3.0, 0.2, VIOLET),
    (3.5, 0.15, PINK),
];

pub fn build(options: &SceneOptions) -> SceneDescriptor {
    let camera = CameraSetup::new(
        CameraStrategy::PointerFollow {
            smoothing: 0.05,
            reach: Vector2::new(0.5, 0.3),
            look_at: Vector3::ZERO,
        },
        Vector3::new(0.0, 0.0, 6.0),
        60.0,
    );
    let mut scene = SceneDescriptor::new(options, camera);
    let seed_for = |label: &str| Seed::from(options.seed.map(|s| derive_seed(s, label)));

    scene.push(Node::light("ambient-light", Light::ambient(0.2)));
    scene.push(
        Node::light("key-light", Light::directional(Color::WHITE, 1.0))
            .at(Vector3::new(10.0, 10.0, 5.0)),
    );
    scene.push(
        Node::light("fill-light-indigo", Light::point(INDIGO, 0.5))
            .at(Vector3::new(-5.0, 5.0, -5.0)),
    );
    scene.push(
        Node::light("fill-light-pink", Light::point(PINK, 0.5)).at(Vector3::new(5.0, -5.0, 5.0)),
    );

    let mut rng = ParticleRng::new(seed_for("hero/shapes"));
    for i in 0..options.shape_count {
        let shape = match FLOATING_SHAPES.get(i) {
            Some(preset) => *preset,
            None => extra_shape(i, &mut rng),
        };
        scene.push(floating_shape(i, &shape, rng.range(0.0, 10_000.0)));
    }

    scene.push(
        Node::shape(
            "glow-sphere",
            Geometry::Sphere {
                radius: 1.0,
                segments: 32,
            },
        )
        .scaled(0.4)
        .with_material(Material::standard(VIOLET).with_emissive(VIOLET, 0.5))
        .with_animation(
            AnimationDescriptor::still()
                .with_pulse(Track::oscillate(0.1, 1.0))
                .with_float(FloatDrift::new(1.5, 0.2, 0.5).with_offset(rng.range(0.0, 10_000.0))),
        ),
    );

    scene.extend(ORBIT_RINGS.iter().enumerate().map(|(i, &(radius, speed, color))| {
        Node::shape(
            format!("orbit-ring-{i}"),
            Geometry::Torus {
                radius,
                tube: 0.02,
                radial_segments: 16,
                tubular_segments: 100,
            },
        )
        .with_material(
            Material::standard(color)
                .with_emissive(color, 0.3)
                .with_opacity(0.6),
        )
        .with_animation(AnimationDescriptor::still().with_rotation(
            Track::spin(speed * 0.5),
            Track::spin(speed),
            Track::Still,
        ))
    }));

    let dust = PointCloud::generate(
        Distribution::Cube { size: 15.0 },
        options.particle_count,
        seed_for("hero/particles"),
    );
    scene.push(
        Node::particles("dust", ParticleField::new(dust))
            .with_material(Material::points(VIOLET, 0.02, 0.6))
            .with_animation(
                AnimationDescriptor::still().with_group_spin(Vector3::new(0.01, 0.02, 0.0)),
            ),
    );

    let stars = PointCloud::generate(
        Distribution::StarShell {
            radius: 50.0,
            depth: 50.0,
            factor: 4.0,
            saturation: 0.0,
        },
        options.star_count,
        seed_for("hero/stars"),
    );
    scene.push(
        Node::particles("stars", ParticleField::new(stars).twinkling(1.0))
            .with_material(Material::points(Color::WHITE, 1.0, 1.0)),
    );

    let eye = scene.camera.position;
    scene.push(Node::camera_rig("camera").at(eye));
    scene
}

fn floating_shape(i: usize, shape: &FloatingShape, float_offset: f32) -> Node {
    Node::shape(
        format!("floating-shape-{i}"),
        Geometry::Icosahedron {
            radius: 1.0,
            detail: 4,
        },
    )
    .at(shape.position)
    .scaled(shape.scale)
    .with_material(Material::distort(shape.color, shape.distort, 2.0).with_finish(0.2, 0.8))
    .with_animation(
        AnimationDescriptor::still()
            .with_rotation(
                Track::oscillate(0.2, shape.speed),
                Track::spin(0.3 * shape.speed),
                Track::Still,
            )
            .with_float(
                FloatDrift::new(2.0 * shape.speed, 0.5, 1.0)
                    .with_range(-0.2, 0.2)
                    .with_offset(float_offset),
            ),
    )
}

/// Shapes beyond the authored four are scattered behind the glow sphere.
fn extra_shape(i: usize, rng: &mut ParticleRng) -> FloatingShape {
    FloatingShape {
        position: Vector3::new(
            rng.range(-3.0, 3.0),
            rng.range(-2.0, 2.0),
            rng.range(-3.0, -1.0),
        ),
        scale: rng.range(0.4, 0.8),
        color: accent(i),
        speed: rng.range(0.8, 1.2),
        distort: rng.range(0.3, 0.5),
    }
}
