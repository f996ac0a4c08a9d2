use std::sync::Arc;

use folio_particle_math::PointCloud;

/// A generated cloud plus how its shader animates.
///
/// The point buffer is shared: cloning a node or a snapshot never copies positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub cloud: Arc<PointCloud>,
    /// Shader twinkle rate for star fields; the host advances `elapsed * rate`.
    pub twinkle_rate: Option<f32>,
}

impl ParticleField {
    pub fn new(cloud: PointCloud) -> Self {
        Self {
            cloud: Arc::new(cloud),
            twinkle_rate: None,
        }
    }

    pub fn twinkling(mut self, rate: f32) -> Self {
        self.twinkle_rate = Some(rate);
        self
    }

    pub fn len(&self) -> usize {
        self.cloud.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cloud.is_empty()
    }
}
