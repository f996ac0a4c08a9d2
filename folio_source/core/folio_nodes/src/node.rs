use std::borrow::Cow;

use folio_animation::{AnimationDescriptor, FrameTime, scale_toward_target};
use folio_ids::NodeID;
use folio_structs::{Mat4, Transform3D, Vec3, Vector3};

use crate::{
    Geometry, InteractionProfile, InteractionState, Light, Look, Material, ParticleField,
    Transition,
};

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Shape(Geometry),
    Light(Light),
    ParticleCloud(ParticleField),
    /// Placeholder whose transform mirrors the active camera after each tick.
    CameraRig,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Shape(_) => "shape",
            Self::Light(_) => "light",
            Self::ParticleCloud(_) => "particle-cloud",
            Self::CameraRig => "camera-rig",
        }
    }
}

/// One element of the scene graph.
///
/// `base`, `animation` and `interaction` are the fixed definition. `transform`,
/// `group` and `current_scale` are the result of the last tick; `current_scale`
/// is the only value carried from one tick into the next.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeID,
    pub name: Cow<'static, str>,
    pub kind: NodeKind,
    pub base: Transform3D,
    pub material: Material,
    pub animation: AnimationDescriptor,
    pub interaction: Option<InteractionProfile>,

    pub transform: Transform3D,
    /// Wrapper transform (floating drift, whole-group spin). World = group ∘ transform.
    pub group: Transform3D,
    pub current_scale: f32,
    pub target_scale: f32,
}

/// Output of one pure update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePose {
    pub transform: Transform3D,
    pub group: Transform3D,
    pub scale_factor: f32,
}

impl Node {
    pub fn new(name: impl Into<Cow<'static, str>>, kind: NodeKind) -> Self {
        Self {
            id: NodeID::nil(),
            name: name.into(),
            kind,
            base: Transform3D::IDENTITY,
            material: Material::default(),
            animation: AnimationDescriptor::still(),
            interaction: None,
            transform: Transform3D::IDENTITY,
            group: Transform3D::IDENTITY,
            current_scale: 1.0,
            target_scale: 1.0,
        }
    }

    pub fn shape(name: impl Into<Cow<'static, str>>, geometry: Geometry) -> Self {
        Self::new(name, NodeKind::Shape(geometry))
    }

    pub fn light(name: impl Into<Cow<'static, str>>, light: Light) -> Self {
        Self::new(name, NodeKind::Light(light))
    }

    pub fn particles(name: impl Into<Cow<'static, str>>, field: ParticleField) -> Self {
        Self::new(name, NodeKind::ParticleCloud(field))
    }

    pub fn camera_rig(name: impl Into<Cow<'static, str>>) -> Self {
        Self::new(name, NodeKind::CameraRig)
    }

    pub fn at(mut self, position: Vector3) -> Self {
        self.base.position = position;
        self.transform = self.base;
        self
    }

    pub fn rotated(mut self, rotation: Vector3) -> Self {
        self.base.rotation = rotation;
        self.transform = self.base;
        self
    }

    pub fn scaled(mut self, scale: f32) -> Self {
        self.base.scale = Vector3::splat(scale);
        self.transform = self.base;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_animation(mut self, animation: AnimationDescriptor) -> Self {
        self.animation = animation;
        self
    }

    /// Makes the node pickable. The material takes the profile's idle look.
    pub fn interactive(mut self, profile: InteractionProfile) -> Self {
        self.material = profile.idle.apply(self.material);
        self.current_scale = profile.idle.scale;
        self.target_scale = profile.idle.scale;
        self.interaction = Some(profile);
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interaction.is_some() && matches!(self.kind, NodeKind::Shape(_))
    }

    /// Target scale the node eases toward in `state`.
    pub fn target_scale_for(&self, state: InteractionState) -> f32 {
        match &self.interaction {
            Some(profile) => profile.look(state).scale,
            None => self.target_scale,
        }
    }

    /// Transition side effects: new material look and new scale target.
    pub fn apply_transition(&mut self, transition: &Transition) {
        let Some(profile) = &self.interaction else {
            return;
        };
        let look: Look = *profile.look(transition.to);
        log::debug!(
            "node {} `{}`: {:?} -> {:?} on {:?}",
            self.id,
            self.name,
            transition.from,
            transition.to,
            transition.event
        );
        self.material = look.apply(self.material);
        self.target_scale = look.scale;
    }

    /// Stores a pose produced by [`update`].
    pub fn apply(&mut self, pose: NodePose) {
        self.transform = pose.transform;
        self.group = pose.group;
        self.current_scale = pose.scale_factor;
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.group.compose(&self.transform)
    }

    pub fn world_position(&self) -> Vector3 {
        Vector3::from_glam(self.world_matrix().transform_point3(Vec3::ZERO))
    }

    /// World-space bounding sphere for picking, if the node has a mesh.
    pub fn bounding_sphere(&self) -> Option<(Vector3, f32)> {
        let NodeKind::Shape(geometry) = &self.kind else {
            return None;
        };
        let scale = self.transform.scale.max_element().abs() * self.group.scale.max_element().abs();
        Some((self.world_position(), geometry.bounding_radius() * scale))
    }
}

/// Pure per-frame update: `(node, time, interaction state) -> pose`.
///
/// The pose depends on elapsed time, the node's fixed definition, the
/// interaction state and the stored `current_scale`; nothing else.
pub fn update(node: &Node, time: FrameTime, state: InteractionState) -> NodePose {
    let motion = node.animation.sample(&node.base, time.elapsed);

    let scale_factor = match &node.interaction {
        Some(profile) => {
            scale_toward_target(node.current_scale, profile.look(state).scale, profile.smoothing)
        }
        None => node.current_scale,
    };

    let mut transform = motion.local;
    transform.scale = transform.scale * scale_factor;

    NodePose {
        transform,
        group: motion.group,
        scale_factor,
    }
}
