pub mod geometry;
pub mod interaction;
pub mod light;
pub mod material;
pub mod node;
pub mod particles;

pub use geometry::Geometry;
pub use interaction::{
    InteractionMachine, InteractionMode, InteractionProfile, InteractionState, Look, Transition,
};
pub use light::{Light, LightKind};
pub use material::{Material, SurfaceKind};
pub use node::{Node, NodeKind, NodePose, update};
pub use particles::ParticleField;
