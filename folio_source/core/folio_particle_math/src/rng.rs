use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Seed {
    /// Reproducible stream.
    Fixed(u64),
    /// Fresh OS entropy on every generation.
    #[default]
    Entropy,
}

impl From<Option<u64>> for Seed {
    fn from(value: Option<u64>) -> Self {
        match value {
            Some(seed) => Self::Fixed(seed),
            None => Self::Entropy,
        }
    }
}

/// Thin wrapper so callers draw unit floats without touching `rand` directly.
pub struct ParticleRng {
    inner: StdRng,
}

impl ParticleRng {
    pub fn new(seed: Seed) -> Self {
        let inner = match seed {
            Seed::Fixed(seed) => StdRng::seed_from_u64(seed),
            Seed::Entropy => StdRng::from_entropy(),
        };
        Self { inner }
    }

    /// Uniform in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f32 {
        self.inner.gen_range(0.0f32..1.0)
    }

    /// Uniform in `[low, high)`; returns `low` for an empty range.
    #[inline]
    pub fn range(&mut self, low: f32, high: f32) -> f32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..high)
    }
}
