use folio_ids::NodeID;
use folio_nodes::{Node, NodeKind};
use folio_structs::{Vector2, Vector3};

use crate::{SceneOptions, SceneVariant};

/// How the camera moves. Plain data; `folio_runtime` turns it into a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraStrategy {
    /// Camera eases toward `pointer * reach` and always faces `look_at`.
    PointerFollow {
        smoothing: f32,
        reach: Vector2,
        look_at: Vector3,
    },
    /// Drag-to-orbit around `target` with inertia, polar clamp and idle auto-rotation.
    OrbitExplore {
        target: Vector3,
        min_polar: f32,
        max_polar: f32,
        damping: f32,
        /// Radians per second while nobody drags.
        auto_rotate_speed: f32,
        /// Radians per viewport height of drag.
        rotate_speed: f32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSetup {
    pub strategy: CameraStrategy,
    pub position: Vector3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl CameraSetup {
    pub fn new(strategy: CameraStrategy, position: Vector3, fov_degrees: f32) -> Self {
        Self {
            strategy,
            position,
            fov_degrees,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Declarative definition of one scene mount.
///
/// Node order is the tick order. Node IDs here are local (1-based, generation 0);
/// the runtime re-keys them when the scene is mounted.
#[derive(Debug, Clone)]
pub struct SceneDescriptor {
    pub variant: SceneVariant,
    pub options: SceneOptions,
    pub nodes: Vec<Node>,
    pub camera: CameraSetup,
}

impl SceneDescriptor {
    pub fn new(options: &SceneOptions, camera: CameraSetup) -> Self {
        Self {
            variant: options.variant,
            options: options.clone(),
            nodes: Vec::new(),
            camera,
        }
    }

    pub(crate) fn push(&mut self, mut node: Node) {
        node.id = NodeID::new(self.nodes.len() as u32 + 1);
        self.nodes.push(node);
    }

    pub(crate) fn extend(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for node in nodes {
            self.push(node);
        }
    }

    pub fn find(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn count_where(&self, pred: impl Fn(&Node) -> bool) -> usize {
        self.nodes.iter().filter(|n| pred(n)).count()
    }

    pub fn interactive_count(&self) -> usize {
        self.count_where(Node::is_interactive)
    }

    /// Total generated points across all particle clouds.
    pub fn point_count(&self) -> usize {
        self.nodes
            .iter()
            .map(|n| match &n.kind {
                NodeKind::ParticleCloud(field) => field.len(),
                _ => 0,
            })
            .sum()
    }
}
