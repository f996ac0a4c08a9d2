//! Point-cloud generation for ambient dust, surrounding fields and star shells.
//!
//! Generation runs once at scene mount. A fixed seed reproduces exact
//! positions; an entropy seed only guarantees the distribution's bounds.

mod distribution;
mod rng;

pub use distribution::{Distribution, PointCloud};
pub use rng::{ParticleRng, Seed};
