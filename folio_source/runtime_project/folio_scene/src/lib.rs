//! Scene variants as data.
//!
//! A [`SceneDescriptor`] is the complete, fixed node list for one mount plus
//! the camera strategy that drives it. Both variants are built by the same
//! composer code path in `folio_runtime`; only the data here differs.

mod descriptor;
mod hero;
mod options;
mod palette;
mod showcase;

pub use descriptor::{CameraSetup, CameraStrategy, SceneDescriptor};
pub use options::{
    MAX_PARTICLES, MAX_SHAPES, SceneConfigError, SceneOptions, SceneVariant, load_scene_toml,
    parse_scene_toml,
};

/// Builds the descriptor for `options.variant`. Counts above their ceiling
/// are clamped with a warning.
pub fn build_scene(options: &SceneOptions) -> SceneDescriptor {
    let options = &options.clamped();
    let descriptor = match options.variant {
        SceneVariant::Hero => hero::build(options),
        SceneVariant::Showcase => showcase::build(options),
    };
    log::debug!(
        "built {} scene: {} nodes (seed {:?})",
        options.variant,
        descriptor.nodes.len(),
        options.seed
    );
    descriptor
}
