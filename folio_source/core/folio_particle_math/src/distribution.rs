use folio_structs::{Color, Vector3};

use crate::{ParticleRng, Seed};

/// Shape of a generated cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Distribution {
    /// Uniform in an axis-aligned cube of edge `size`, centred on the origin.
    Cube { size: f32 },
    /// Uniform direction, radius uniform in `[inner, outer]`.
    SphereShell { inner: f32, outer: f32 },
    /// Star backdrop: radius starts at `radius + depth` and creeps inward by
    /// up to `depth / count` per star, so every star lies in `[radius, radius + depth]`.
    StarShell {
        radius: f32,
        depth: f32,
        factor: f32,
        saturation: f32,
    },
}

impl Distribution {
    /// Largest distance from the origin any generated point may have.
    pub fn bound(&self) -> f32 {
        match *self {
            Self::Cube { size } => size.abs() * 0.5 * 3f32.sqrt(),
            Self::SphereShell { inner, outer } => inner.max(outer).max(0.0),
            Self::StarShell { radius, depth, .. } => radius.max(0.0) + depth.max(0.0),
        }
    }

    fn sanitized(self) -> Self {
        let nn = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        match self {
            Self::Cube { size } => Self::Cube { size: nn(size) },
            Self::SphereShell { inner, outer } => {
                let (inner, outer) = (nn(inner), nn(outer));
                Self::SphereShell {
                    inner: inner.min(outer),
                    outer: inner.max(outer),
                }
            }
            Self::StarShell {
                radius,
                depth,
                factor,
                saturation,
            } => Self::StarShell {
                radius: nn(radius),
                depth: nn(depth),
                factor: nn(factor),
                saturation: if saturation.is_finite() {
                    saturation.clamp(0.0, 1.0)
                } else {
                    0.0
                },
            },
        }
    }
}

/// Fixed-size set of points, generated once.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    pub distribution: Distribution,
    pub positions: Vec<Vector3>,
    /// Per-point size multipliers; empty when every point shares the material size.
    pub sizes: Vec<f32>,
    /// Per-point colours; empty when every point shares the material colour.
    pub colors: Vec<Color>,
}

impl PointCloud {
    pub fn generate(distribution: Distribution, count: usize, seed: Seed) -> Self {
        let mut rng = ParticleRng::new(seed);
        Self::generate_with(distribution, count, &mut rng)
    }

    pub fn generate_with(distribution: Distribution, count: usize, rng: &mut ParticleRng) -> Self {
        let distribution = distribution.sanitized();
        let mut positions = Vec::with_capacity(count);
        let mut sizes = Vec::new();
        let mut colors = Vec::new();

        match distribution {
            Distribution::Cube { size } => {
                for _ in 0..count {
                    positions.push(Vector3::new(
                        (rng.unit() - 0.5) * size,
                        (rng.unit() - 0.5) * size,
                        (rng.unit() - 0.5) * size,
                    ));
                }
            }
            Distribution::SphereShell { inner, outer } => {
                for _ in 0..count {
                    let theta = rng.unit() * std::f32::consts::TAU;
                    let phi = (2.0 * rng.unit() - 1.0).clamp(-1.0, 1.0).acos();
                    let r = inner + rng.unit() * (outer - inner);
                    positions.push(spherical(r, phi, theta));
                }
            }
            Distribution::StarShell {
                radius,
                depth,
                factor,
                saturation,
            } => {
                sizes.reserve(count);
                colors.reserve(count);
                let increment = if count == 0 { 0.0 } else { depth / count as f32 };
                let mut r = radius + depth;
                for i in 0..count {
                    r -= increment * rng.unit();
                    let phi = (1.0 - rng.unit() * 2.0).clamp(-1.0, 1.0).acos();
                    let theta = rng.unit() * std::f32::consts::TAU;
                    positions.push(spherical(r, phi, theta));
                    colors.push(Color::from_hsl(i as f32 / count as f32, saturation, 0.9));
                    sizes.push((0.5 + 0.5 * rng.unit()) * factor);
                }
            }
        }

        Self {
            distribution,
            positions,
            sizes,
            colors,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `[x, y, z, x, y, z, ...]` buffer for upload.
    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }
}

/// Polar angle `phi` from +Y, azimuth `theta` around Y.
fn spherical(r: f32, phi: f32, theta: f32) -> Vector3 {
    let sin_phi = phi.sin();
    Vector3::new(
        r * sin_phi * theta.sin(),
        r * phi.cos(),
        r * sin_phi * theta.cos(),
    )
}
