use ahash::AHashMap;
use folio_animation::FrameTime;
use folio_ids::{NodeID, SceneID};
use folio_input::PointerEvent;
use folio_nodes::{InteractionState, Node, Transition, update};
use folio_render_bridge::{
    Command3D, RenderBridge, RenderCommand, RenderContextError, SurfaceInfo,
};
use folio_scene::SceneVariant;
use folio_structs::{Vector2, Vector3};
use glam::EulerRot;

use crate::{
    Camera3D, Clock, FrameLoop, InteractionSystem, NodeArena, controller::CameraController,
    interaction::pick, render_3d::node_command,
};

/// One scene between mount and unmount.
pub struct MountedScene {
    pub id: SceneID,
    pub variant: SceneVariant,
    /// Tick order.
    pub order: Vec<NodeID>,
    pub clock: Clock,
    pub camera: Camera3D,
    pub interaction: InteractionSystem,
    pub(crate) controller: Box<dyn CameraController>,
    pub(crate) rig: Option<NodeID>,
    pub(crate) degraded: Option<RenderContextError>,
    pub last_frame: FrameTime,
    pub ticks: u64,
}

impl MountedScene {
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn degraded_reason(&self) -> Option<&RenderContextError> {
        self.degraded.as_ref()
    }

    pub fn camera_strategy(&self) -> &'static str {
        self.controller.name()
    }
}

/// Outgoing commands, drained by the host once per frame.
pub(crate) struct RenderState {
    pending_commands: Vec<RenderCommand>,
}

impl RenderState {
    fn new() -> Self {
        Self {
            pending_commands: Vec::new(),
        }
    }

    pub(crate) fn queue_command(&mut self, command: RenderCommand) {
        self.pending_commands.push(command);
    }

    fn drain_commands(&mut self, out: &mut Vec<RenderCommand>) {
        out.append(&mut self.pending_commands);
    }
}

pub struct Runtime {
    pub nodes: NodeArena,
    pub(crate) scenes: AHashMap<SceneID, MountedScene>,
    pub(crate) frame_loop: FrameLoop,
    pub(crate) render: RenderState,
    pub(crate) next_scene: u32,
    tick_ids: Vec<SceneID>,
}

impl Runtime {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            scenes: AHashMap::default(),
            frame_loop: FrameLoop::new(),
            render: RenderState::new(),
            next_scene: 0,
            tick_ids: Vec::new(),
        }
    }

    /// Runs one frame for every subscribed scene.
    pub fn tick(&mut self, now: f64) {
        let mut ids = std::mem::take(&mut self.tick_ids);
        ids.clear();
        self.frame_loop.append_subscribers(&mut ids);
        for id in ids.iter().copied() {
            self.tick_scene(id, now);
        }
        self.tick_ids = ids;
    }

    fn tick_scene(&mut self, id: SceneID, now: f64) {
        let Some(scene) = self.scenes.get_mut(&id) else {
            return;
        };
        let time = scene.clock.advance(now);
        scene.last_frame = time;
        scene.ticks += 1;

        self.render
            .queue_command(RenderCommand::ThreeD(Command3D::SetFrame {
                elapsed: time.elapsed,
                delta: time.delta,
            }));

        for &node_id in &scene.order {
            let state = scene.interaction.state(node_id);
            let Some(node) = self.nodes.get_mut(node_id) else {
                continue;
            };
            let pose = update(node, time, state);
            node.apply(pose);
            if let Some(command) = node_command(node, time) {
                self.render.queue_command(command);
            }
        }

        scene
            .controller
            .update(&mut scene.camera, &mut scene.interaction.pointer, time);

        if let Some(rig) = scene.rig.and_then(|rig| self.nodes.get_mut(rig)) {
            let (x, y, z) = scene.camera.rotation.to_euler(EulerRot::XYZ);
            rig.transform.position = Vector3::from_glam(scene.camera.position);
            rig.transform.rotation = Vector3::new(x, y, z);
        }

        self.render
            .queue_command(RenderCommand::ThreeD(Command3D::SetCamera {
                camera: scene.camera.to_state(),
            }));
    }

    pub fn drain_render_commands(&mut self, out: &mut Vec<RenderCommand>) {
        self.render.drain_commands(out);
    }

    /// Hands every queued command to `bridge`, in order.
    pub fn flush<B: RenderBridge + ?Sized>(&mut self, bridge: &mut B) {
        for command in self.render.pending_commands.drain(..) {
            bridge.submit(command);
        }
    }

    pub fn pending_command_count(&self) -> usize {
        self.render.pending_commands.len()
    }

    pub fn scene(&self, id: SceneID) -> Option<&MountedScene> {
        self.scenes.get(&id)
    }

    pub fn is_mounted(&self, id: SceneID) -> bool {
        self.scenes.contains_key(&id)
    }

    pub fn is_subscribed(&self, id: SceneID) -> bool {
        self.frame_loop.is_subscribed(id)
    }

    pub fn mounted_count(&self) -> usize {
        self.scenes.len()
    }

    pub fn node(&self, id: NodeID) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Nodes of `scene` in tick order.
    pub fn scene_nodes(&self, scene: SceneID) -> impl Iterator<Item = &Node> {
        self.scenes
            .get(&scene)
            .into_iter()
            .flat_map(|s| s.order.iter())
            .filter_map(|&id| self.nodes.get(id))
    }

    pub fn find_node(&self, scene: SceneID, name: &str) -> Option<NodeID> {
        self.scene_nodes(scene).find(|n| n.name == name).map(|n| n.id)
    }

    pub fn interaction_state(&self, scene: SceneID, node: NodeID) -> InteractionState {
        self.scenes
            .get(&scene)
            .map(|s| s.interaction.state(node))
            .unwrap_or_default()
    }

    /// Re-reads the camera aspect from a resized surface. A collapsed
    /// surface keeps the previous aspect.
    pub fn set_viewport(&mut self, scene: SceneID, surface: SurfaceInfo) {
        let Some(mounted) = self.scenes.get_mut(&scene) else {
            return;
        };
        if !mounted.camera.set_aspect(surface.aspect()) {
            log::warn!(
                "scene {scene}: ignoring {}x{} viewport",
                surface.width,
                surface.height
            );
        }
    }

    /// Pointer moved over the canvas: re-picks and raises enter/leave.
    pub fn pointer_moved(&mut self, scene: SceneID, ndc: Vector2) -> Vec<(NodeID, Transition)> {
        let Some(mounted) = self.scenes.get_mut(&scene) else {
            return Vec::new();
        };
        mounted.interaction.pointer.move_to(ndc);
        let ray = mounted
            .camera
            .screen_to_world_ray(mounted.interaction.pointer.ndc);
        let hit = pick(
            &ray,
            mounted.order.iter().filter_map(|&id| self.nodes.get(id)),
        );
        let transitions = mounted.interaction.hover(hit);
        self.apply_transitions(&transitions);
        transitions
    }

    pub fn pointer_left(&mut self, scene: SceneID) -> Vec<(NodeID, Transition)> {
        let Some(mounted) = self.scenes.get_mut(&scene) else {
            return Vec::new();
        };
        mounted.interaction.pointer.leave_canvas();
        let transitions = mounted.interaction.hover(None);
        self.apply_transitions(&transitions);
        transitions
    }

    pub fn pointer_down(&mut self, scene: SceneID) {
        if let Some(mounted) = self.scenes.get_mut(&scene) {
            mounted.interaction.pointer.begin_drag();
        }
    }

    pub fn pointer_up(&mut self, scene: SceneID) {
        if let Some(mounted) = self.scenes.get_mut(&scene) {
            mounted.interaction.pointer.end_drag();
        }
    }

    /// Click on the node under the pointer, if any.
    pub fn click(&mut self, scene: SceneID) -> Option<Transition> {
        let (node, transition) = self.scenes.get_mut(&scene)?.interaction.click()?;
        self.apply_transitions(&[(node, transition)]);
        Some(transition)
    }

    /// Node-scoped event from a host that does its own hit testing.
    pub fn dispatch(
        &mut self,
        scene: SceneID,
        node: NodeID,
        event: PointerEvent,
    ) -> Option<Transition> {
        let transition = self.scenes.get_mut(&scene)?.interaction.dispatch(node, event)?;
        self.apply_transitions(&[(node, transition)]);
        Some(transition)
    }

    fn apply_transitions(&mut self, transitions: &[(NodeID, Transition)]) {
        for (id, transition) in transitions {
            if let Some(node) = self.nodes.get_mut(*id) {
                node.apply_transition(transition);
            }
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new()
    }
}
