use anyhow::{Context, Result, anyhow, bail};
use folio_nodes::{Node, NodeKind};
use folio_render_bridge::CommandRecorder;
use folio_runtime::Runtime;
use folio_scene::{SceneOptions, SceneVariant, build_scene, load_scene_toml};
use std::env;
use std::path::PathBuf;

const DEFAULT_SECONDS: f64 = 10.0;
const DEFAULT_FPS: f64 = 60.0;
const SURFACE: (u32, u32) = (1280, 720);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = args.get(1).map(String::as_str) else {
        print_usage();
        std::process::exit(2);
    };

    let result = match command {
        "run" => run_command(&args),
        "inspect" => inspect_command(&args),
        _ => {
            print_usage();
            Err(anyhow!("unknown command `{command}`"))
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  folio_cli run --scene <hero|showcase> [--seconds S] [--fps F] [--seed N] [--config <path>] [--no-surface]"
    );
    eprintln!("  folio_cli inspect --scene <hero|showcase> [--seed N] [--config <path>]");
}

fn parse_flag_value(args: &[String], flag: &str) -> Option<String> {
    let idx = args.iter().position(|a| a == flag)?;
    args.get(idx + 1).cloned()
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_flag_value(args, flag)
        .map(|raw| {
            raw.parse::<T>()
                .with_context(|| format!("invalid value `{raw}` for {flag}"))
        })
        .transpose()
}

/// `--config` first, then `--scene` and `--seed` on top.
fn scene_options(args: &[String]) -> Result<SceneOptions> {
    let scene = parse_flag_value(args, "--scene")
        .map(|raw| raw.parse::<SceneVariant>())
        .transpose()?;

    let mut options = match parse_flag_value(args, "--config") {
        Some(path) => {
            let path = PathBuf::from(path);
            load_scene_toml(&path)
                .with_context(|| format!("failed to load {}", path.display()))?
        }
        None => SceneOptions::for_variant(
            scene.ok_or_else(|| anyhow!("missing --scene <hero|showcase>"))?,
        ),
    };
    if let Some(variant) = scene.filter(|v| *v != options.variant) {
        log::warn!(
            "--scene {variant} overrides `{}` from the config file",
            options.variant
        );
        options.variant = variant;
    }
    if let Some(seed) = parse_number::<u64>(args, "--seed")? {
        options.seed = Some(seed);
    }
    Ok(options)
}

fn run_command(args: &[String]) -> Result<()> {
    let options = scene_options(args)?;
    let seconds = parse_number::<f64>(args, "--seconds")?.unwrap_or(DEFAULT_SECONDS);
    let fps = parse_number::<f64>(args, "--fps")?.unwrap_or(DEFAULT_FPS);
    if !(seconds.is_finite() && seconds >= 0.0) {
        bail!("--seconds must be a non-negative number");
    }
    if !(fps.is_finite() && fps > 0.0) {
        bail!("--fps must be a positive number");
    }

    let mut bridge = if has_flag(args, "--no-surface") {
        CommandRecorder::unsupported()
    } else {
        CommandRecorder::new(SURFACE.0, SURFACE.1)
    };

    let mut runtime = Runtime::new();
    let scene = runtime.mount_variant(&options, &bridge, 0.0);

    let frames = (seconds * fps).ceil() as u64;
    let mut submitted = 0usize;
    for frame in 0..=frames {
        runtime.tick((frame as f64 / fps).min(seconds));
        runtime.flush(&mut bridge);
        submitted += bridge.drain().len();
    }

    let mounted = runtime
        .scene(scene)
        .ok_or_else(|| anyhow!("scene {scene} vanished while running"))?;
    println!(
        "{} scene {scene}: {} nodes, {} ticks, {:.3}s elapsed, {submitted} commands{}",
        mounted.variant,
        mounted.order.len(),
        mounted.ticks,
        mounted.last_frame.elapsed,
        if mounted.is_degraded() { " (degraded)" } else { "" }
    );
    println!(
        "camera [{}] at {:.3} {:.3} {:.3}",
        mounted.camera_strategy(),
        mounted.camera.position.x,
        mounted.camera.position.y,
        mounted.camera.position.z
    );
    for node in runtime.scene_nodes(scene) {
        let state = runtime.interaction_state(scene, node.id);
        println!(
            "  {:<22} {:<14} pos {}  rot {}  scale {:.3}  {:?}",
            node.name,
            node.kind.label(),
            node.world_position(),
            node.transform.rotation,
            node.current_scale,
            state
        );
    }

    runtime.unmount(scene);
    runtime.flush(&mut bridge);
    log::info!("teardown submitted {} commands", bridge.drain().len());
    Ok(())
}

fn inspect_command(args: &[String]) -> Result<()> {
    let options = scene_options(args)?;
    let descriptor = build_scene(&options);
    println!(
        "{} scene: {} nodes, {} interactive, {} points, camera at {} (fov {})",
        descriptor.variant,
        descriptor.nodes.len(),
        descriptor.interactive_count(),
        descriptor.point_count(),
        descriptor.camera.position,
        descriptor.camera.fov_degrees
    );
    for node in &descriptor.nodes {
        println!("  {:>3} {}", node.id.index(), describe(node));
    }
    Ok(())
}

fn describe(node: &Node) -> String {
    let what = match &node.kind {
        NodeKind::Shape(geometry) => geometry.name().to_string(),
        NodeKind::Light(light) => format!("{:?} light {:.2}", light.kind, light.intensity),
        NodeKind::ParticleCloud(field) => format!("{} points", field.len()),
        NodeKind::CameraRig => "camera rig".to_string(),
    };
    let motion = if node.animation.is_still() {
        "still"
    } else {
        "animated"
    };
    let interaction = match &node.interaction {
        Some(profile) => format!(" {:?}", profile.mode),
        None => String::new(),
    };
    format!(
        "{:<22} {:<24} at {}  {motion}{interaction}",
        node.name, what, node.base.position
    )
}
