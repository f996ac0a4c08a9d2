//! Mount and teardown. Both scene variants go through the same path; the
//! descriptor is the only thing that differs.

use folio_animation::FrameTime;
use folio_ids::SceneID;
use folio_nodes::NodeKind;
use folio_render_bridge::{Command3D, RenderBridge, RenderCommand};
use folio_scene::{CameraStrategy, SceneDescriptor, SceneOptions, build_scene};

use crate::{
    Camera3D, Clock, InteractionSystem, MountedScene, Runtime, controller::controller_for,
    render_3d::resource_command,
};

impl Runtime {
    /// Builds the descriptor for `options` and mounts it.
    pub fn mount_variant<B: RenderBridge + ?Sized>(
        &mut self,
        options: &SceneOptions,
        bridge: &B,
        now: f64,
    ) -> SceneID {
        self.mount(build_scene(options), bridge, now)
    }

    /// Inserts the descriptor's nodes, starts the scene clock at `now` and
    /// subscribes the scene to the frame loop.
    ///
    /// When `bridge` has no usable surface the scene still mounts, but in a
    /// degraded state: it is never subscribed and emits no commands.
    pub fn mount<B: RenderBridge + ?Sized>(
        &mut self,
        descriptor: SceneDescriptor,
        bridge: &B,
        now: f64,
    ) -> SceneID {
        self.next_scene = self.next_scene.wrapping_add(1).max(1);
        let id = SceneID::new(self.next_scene);
        let surface = bridge.context();

        let setup = descriptor.camera;
        let aspect = surface.as_ref().map(|s| s.aspect()).unwrap_or(1.0);
        let mut camera = Camera3D::new(setup.position, setup.fov_degrees, aspect);
        camera.near = setup.near;
        camera.far = setup.far;
        camera.look_at(match setup.strategy {
            CameraStrategy::PointerFollow { look_at, .. } => look_at,
            CameraStrategy::OrbitExplore { target, .. } => target,
        });

        let mut interaction = InteractionSystem::new();
        let mut order = Vec::with_capacity(descriptor.nodes.len());
        let mut rig = None;
        for node in descriptor.nodes {
            let profile = node.interaction.filter(|_| node.is_interactive());
            let is_rig = matches!(node.kind, NodeKind::CameraRig);
            let node_id = self.nodes.insert(node);
            if let Some(profile) = profile {
                interaction.register(node_id, &profile);
            }
            if is_rig {
                rig = Some(node_id);
            }
            order.push(node_id);
        }

        let mut clock = Clock::new(descriptor.options.max_delta);
        clock.start(now);

        let degraded = match surface {
            Ok(surface) => {
                for &node_id in &order {
                    if let Some(command) = self.nodes.get(node_id).and_then(resource_command) {
                        self.render.queue_command(command);
                    }
                }
                self.frame_loop.subscribe(id);
                log::info!(
                    "mounted {} scene {id}: {} nodes on {}x{} surface",
                    descriptor.variant,
                    order.len(),
                    surface.width,
                    surface.height
                );
                None
            }
            Err(err) => {
                log::warn!(
                    "{} scene {id} mounted without rendering: {err}",
                    descriptor.variant
                );
                Some(err)
            }
        };

        self.scenes.insert(
            id,
            MountedScene {
                id,
                variant: descriptor.variant,
                order,
                clock,
                camera,
                interaction,
                controller: controller_for(&setup),
                rig,
                degraded,
                last_frame: FrameTime::default(),
                ticks: 0,
            },
        );
        id
    }

    /// Stops the scene's frame callback and drops its nodes. Returns `false`
    /// for a scene that is not mounted.
    pub fn unmount(&mut self, id: SceneID) -> bool {
        let Some(scene) = self.scenes.remove(&id) else {
            return false;
        };
        self.frame_loop.unsubscribe(id);

        for &node_id in &scene.order {
            if self.nodes.remove(node_id).is_some() && !scene.is_degraded() {
                self.render
                    .queue_command(RenderCommand::ThreeD(Command3D::RemoveNode { node: node_id }));
            }
        }
        log::info!(
            "unmounted {} scene {id} after {} ticks",
            scene.variant,
            scene.ticks
        );
        true
    }
}
