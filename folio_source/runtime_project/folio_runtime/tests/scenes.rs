use folio_ids::NodeID;
use folio_input::PointerEvent;
use folio_nodes::{InteractionState, NodeKind};
use folio_render_bridge::{
    Command3D, CommandRecorder, RenderCommand, ResourceCommand, SurfaceInfo,
};
use folio_runtime::Runtime;
use folio_scene::{MAX_PARTICLES, MAX_SHAPES, SceneOptions, build_scene};
use folio_structs::Vector2;

fn surface() -> CommandRecorder {
    CommandRecorder::new(1280, 720)
}

fn rotation_x(runtime: &Runtime, node: NodeID) -> f32 {
    runtime.node(node).expect("node is mounted").transform.rotation.x
}

#[test]
fn hero_shape_wobble_returns_after_one_period() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let scene = runtime.mount_variant(&SceneOptions::hero().with_seed(42), &bridge, 0.0);
    runtime.tick(0.0);

    let shape = runtime.find_node(scene, "floating-shape-0").unwrap();
    let start = rotation_x(&runtime, shape);

    let period = std::f64::consts::TAU / 0.8;
    let frames = 471;
    let mut quarter = None;
    for i in 1..=frames {
        let now = period * i as f64 / frames as f64;
        runtime.tick(now);
        if quarter.is_none() && now >= period / 4.0 {
            quarter = Some(rotation_x(&runtime, shape));
        }
    }

    assert!((period - 7.854).abs() < 1e-3);
    assert!(quarter.unwrap() > 0.19, "wobble should swing out mid-period");
    assert!((rotation_x(&runtime, shape) - start).abs() < 1e-4);
}

#[test]
fn cube_click_latches_active() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let scene = runtime.mount_variant(&SceneOptions::showcase().with_seed(7), &bridge, 0.0);
    runtime.tick(0.0);
    let cube = runtime.find_node(scene, "interactive-cube-0").unwrap();

    runtime.dispatch(scene, cube, PointerEvent::Enter);
    runtime.dispatch(scene, cube, PointerEvent::Click);
    assert_eq!(runtime.interaction_state(scene, cube), InteractionState::Active);
    assert_eq!(runtime.node(cube).unwrap().target_scale, 1.4);

    assert!(runtime.dispatch(scene, cube, PointerEvent::Leave).is_none());
    assert_eq!(runtime.interaction_state(scene, cube), InteractionState::Active);
    assert_eq!(runtime.node(cube).unwrap().target_scale, 1.4);

    for i in 1..=300 {
        runtime.tick(i as f64 / 60.0);
    }
    assert!((runtime.node(cube).unwrap().current_scale - 1.4).abs() < 1e-3);

    // Pointer is outside now, so the next click drops straight to idle.
    runtime.dispatch(scene, cube, PointerEvent::Click);
    assert_eq!(runtime.interaction_state(scene, cube), InteractionState::Idle);
    assert_eq!(runtime.node(cube).unwrap().target_scale, 1.0);
}

#[test]
fn picking_routes_hover_and_click_to_the_cube_under_the_pointer() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let scene = runtime.mount_variant(&SceneOptions::showcase().with_seed(3), &bridge, 0.0);
    runtime.tick(0.0);

    let cube = runtime.find_node(scene, "interactive-cube-1").unwrap();
    let center = runtime.node(cube).unwrap().world_position();
    let ndc = runtime.scene(scene).unwrap().camera.project(center).unwrap();

    let entered = runtime.pointer_moved(scene, ndc);
    assert_eq!(entered.len(), 1);
    assert_eq!(entered[0].0, cube);
    assert_eq!(runtime.interaction_state(scene, cube), InteractionState::Hovered);

    let clicked = runtime.click(scene).unwrap();
    assert_eq!(clicked.to, InteractionState::Active);

    let left = runtime.pointer_moved(scene, Vector2::new(0.99, 0.99));
    assert!(left.is_empty(), "leaving a latched cube changes nothing");
    assert_eq!(runtime.interaction_state(scene, cube), InteractionState::Active);
    assert!(runtime.click(scene).is_none(), "nothing under the pointer");
}

#[test]
fn non_interactive_nodes_are_never_picked() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let scene = runtime.mount_variant(&SceneOptions::hero().with_seed(5), &bridge, 0.0);
    runtime.tick(0.0);

    let glow = runtime.find_node(scene, "glow-sphere").unwrap();
    let ndc = runtime
        .scene(scene)
        .unwrap()
        .camera
        .project(runtime.node(glow).unwrap().world_position())
        .unwrap();
    assert!(runtime.pointer_moved(scene, ndc).is_empty());
    assert_eq!(runtime.interaction_state(scene, glow), InteractionState::Idle);
}

#[test]
fn commands_follow_mount_then_tick_order() {
    let mut runtime = Runtime::new();
    let mut bridge = surface();
    let options = SceneOptions::hero().with_seed(1);
    let shapes = 4 + 1 + 3;
    let scene = runtime.mount_variant(&options, &bridge, 0.0);

    runtime.flush(&mut bridge);
    let mount = bridge.drain();
    let meshes = mount
        .iter()
        .filter(|c| matches!(c, RenderCommand::Resource(ResourceCommand::CreateMesh { .. })))
        .count();
    let clouds: Vec<usize> = mount
        .iter()
        .filter_map(|c| match c {
            RenderCommand::Resource(ResourceCommand::CreateParticles { positions, .. }) => {
                Some(positions.len() / 3)
            }
            _ => None,
        })
        .collect();
    assert_eq!(meshes, shapes);
    assert_eq!(clouds, vec![150, 1000]);

    runtime.tick(0.5);
    runtime.flush(&mut bridge);
    let frame = bridge.drain();
    assert!(matches!(
        frame.first(),
        Some(RenderCommand::ThreeD(Command3D::SetFrame { .. }))
    ));
    assert!(matches!(
        frame.last(),
        Some(RenderCommand::ThreeD(Command3D::SetCamera { .. }))
    ));
    let lights = frame
        .iter()
        .filter(|c| matches!(c, RenderCommand::ThreeD(Command3D::UpsertLight { .. })))
        .count();
    assert_eq!(lights, 4);

    // Node commands arrive in tick order.
    let order: Vec<NodeID> = runtime.scene(scene).unwrap().order.clone();
    let upserted: Vec<NodeID> = frame
        .iter()
        .filter_map(|c| match c {
            RenderCommand::ThreeD(
                Command3D::UpsertShape { node, .. }
                | Command3D::UpsertLight { node, .. }
                | Command3D::UpsertParticles { node, .. },
            ) => Some(*node),
            _ => None,
        })
        .collect();
    let expected: Vec<NodeID> = order[..order.len() - 1].to_vec();
    assert_eq!(upserted, expected);
}

#[test]
fn ticks_after_unmount_change_nothing() {
    let mut runtime = Runtime::new();
    let mut bridge = surface();
    let scene = runtime.mount_variant(&SceneOptions::showcase().with_seed(9), &bridge, 0.0);
    for i in 0..10 {
        runtime.tick(i as f64 / 60.0);
    }
    runtime.flush(&mut bridge);
    bridge.drain();

    let nodes = runtime.scene(scene).unwrap().order.clone();
    assert!(runtime.unmount(scene));
    runtime.flush(&mut bridge);
    let teardown = bridge.drain();
    assert_eq!(teardown.len(), nodes.len());
    assert!(teardown
        .iter()
        .all(|c| matches!(c, RenderCommand::ThreeD(Command3D::RemoveNode { .. }))));

    for i in 10..100 {
        runtime.tick(i as f64 / 60.0);
    }
    assert_eq!(runtime.pending_command_count(), 0);
    assert!(nodes.iter().all(|&id| runtime.node(id).is_none()));
    assert!(!runtime.is_subscribed(scene));
    assert!(!runtime.unmount(scene));
    assert!(runtime.nodes.is_empty());
}

#[test]
fn unmounting_one_scene_leaves_the_other_running() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let hero = runtime.mount_variant(&SceneOptions::hero().with_seed(1), &bridge, 0.0);
    let showcase = runtime.mount_variant(&SceneOptions::showcase().with_seed(1), &bridge, 0.0);
    runtime.tick(0.1);
    runtime.unmount(hero);
    runtime.tick(0.2);
    runtime.tick(0.3);

    assert_eq!(runtime.mounted_count(), 1);
    let mounted = runtime.scene(showcase).unwrap();
    assert_eq!(mounted.ticks, 3);
    assert!((mounted.last_frame.elapsed - 0.3).abs() < 1e-5);
}

#[test]
fn collapsed_viewport_keeps_the_last_aspect() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let scene = runtime.mount_variant(&SceneOptions::hero().with_seed(5), &bridge, 0.0);
    let aspect = |runtime: &Runtime| runtime.scene(scene).map(|s| s.camera.aspect);
    assert_eq!(aspect(&runtime), Some(1280.0 / 720.0));

    runtime.set_viewport(scene, SurfaceInfo { width: 800, height: 800 });
    assert_eq!(aspect(&runtime), Some(1.0));
    runtime.set_viewport(scene, SurfaceInfo { width: 0, height: 600 });
    assert_eq!(aspect(&runtime), Some(1.0));

    runtime.set_viewport(scene, SurfaceInfo { width: 1920, height: 1080 });
    assert_eq!(aspect(&runtime), Some(1920.0 / 1080.0));
}

#[test]
fn remounting_never_reuses_a_scene_handle() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let first = runtime.mount_variant(&SceneOptions::hero().with_seed(3), &bridge, 0.0);
    assert!(runtime.unmount(first));
    let second = runtime.mount_variant(&SceneOptions::hero().with_seed(3), &bridge, 0.0);

    assert_ne!(first.index(), second.index());
    assert_eq!(second.generation(), 0);
    assert!(runtime.scene(first).is_none());
    assert!(runtime.scene(second).is_some());
}

#[test]
fn unsupported_surface_mounts_degraded() {
    let mut runtime = Runtime::new();
    let mut bridge = CommandRecorder::unsupported();
    let scene = runtime.mount_variant(&SceneOptions::hero().with_seed(2), &bridge, 0.0);

    let mounted = runtime.scene(scene).unwrap();
    assert!(mounted.is_degraded());
    assert!(!runtime.is_subscribed(scene));

    runtime.tick(1.0);
    runtime.flush(&mut bridge);
    assert!(bridge.is_empty());
    assert_eq!(runtime.scene(scene).unwrap().ticks, 0);

    assert!(runtime.unmount(scene));
    runtime.flush(&mut bridge);
    assert!(bridge.is_empty());
}

#[test]
fn seeded_scenes_mount_identical_clouds() {
    let a = build_scene(&SceneOptions::showcase().with_seed(77));
    let b = build_scene(&SceneOptions::showcase().with_seed(77));
    assert_eq!(a.nodes, b.nodes);
}

#[test]
fn oversized_density_mounts_at_the_ceiling() {
    let mut runtime = Runtime::new();
    let bridge = surface();
    let mut options = SceneOptions::hero().with_seed(13);
    options.particle_count = usize::MAX / 8;
    options.shape_count = usize::MAX;
    assert!(options.validate().is_err());

    let scene = runtime.mount_variant(&options, &bridge, 0.0);
    assert!(runtime.is_subscribed(scene));

    let shapes = runtime
        .scene_nodes(scene)
        .filter(|n| n.name.starts_with("floating-shape"))
        .count();
    assert_eq!(shapes, MAX_SHAPES);

    let dust = runtime.find_node(scene, "dust").expect("dust is mounted");
    let Some(NodeKind::ParticleCloud(field)) = runtime.node(dust).map(|n| &n.kind) else {
        panic!("dust should be a particle cloud");
    };
    assert_eq!(field.len(), MAX_PARTICLES);

    runtime.tick(0.5);
    assert_eq!(runtime.scene(scene).map(|s| s.ticks), Some(1));
}
