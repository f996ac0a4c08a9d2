/// Primitive mesh shapes. Resolution parameters are fixed at build time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Icosahedron {
        radius: f32,
        detail: u32,
    },
    Sphere {
        radius: f32,
        segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    Dodecahedron {
        radius: f32,
    },
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        segments: u32,
    },
}

impl Geometry {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Icosahedron { .. } => "icosahedron",
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::Cuboid { .. } => "cuboid",
            Self::Dodecahedron { .. } => "dodecahedron",
            Self::Cylinder { .. } => "cylinder",
            Self::Cone { .. } => "cone",
        }
    }

    /// Radius of a sphere around the local origin enclosing the whole shape.
    pub fn bounding_radius(&self) -> f32 {
        let r = match *self {
            Self::Icosahedron { radius, .. }
            | Self::Sphere { radius, .. }
            | Self::Dodecahedron { radius } => radius,
            Self::Torus { radius, tube, .. } => radius + tube,
            Self::Cuboid {
                width,
                height,
                depth,
            } => 0.5 * (width * width + height * height + depth * depth).sqrt(),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => radius_top.max(radius_bottom).hypot(height * 0.5),
            Self::Cone { radius, height, .. } => radius.hypot(height * 0.5),
        };
        if r.is_finite() { r.abs() } else { 0.0 }
    }

    /// Mesh descriptor handed to the host, e.g. `builtin://torus?radius=1&tube=0.4&radial=16&tubular=100`.
    pub fn source(&self) -> String {
        let query = match *self {
            Self::Icosahedron { radius, detail } => format!("radius={radius}&detail={detail}"),
            Self::Sphere { radius, segments } => format!("radius={radius}&segments={segments}"),
            Self::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => format!(
                "radius={radius}&tube={tube}&radial={radial_segments}&tubular={tubular_segments}"
            ),
            Self::Cuboid {
                width,
                height,
                depth,
            } => format!("width={width}&height={height}&depth={depth}"),
            Self::Dodecahedron { radius } => format!("radius={radius}"),
            Self::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => format!(
                "top={radius_top}&bottom={radius_bottom}&height={height}&segments={segments}"
            ),
            Self::Cone {
                radius,
                height,
                segments,
            } => format!("radius={radius}&height={height}&segments={segments}"),
        };
        format!("builtin://{}?{}", self.name(), query)
    }
}
