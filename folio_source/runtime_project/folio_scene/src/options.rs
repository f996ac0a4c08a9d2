use std::{fmt, fs, path::Path, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Upper bound for any generated point cloud.
pub const MAX_PARTICLES: usize = 100_000;
/// Upper bound for shape and ring counts.
pub const MAX_SHAPES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneVariant {
    /// Ambient backdrop, pointer-follow camera.
    #[default]
    Hero,
    /// Explorable scene, orbit camera, interactive shapes.
    Showcase,
}

impl SceneVariant {
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Showcase => "showcase",
        }
    }
}

impl fmt::Display for SceneVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneVariant {
    type Err = SceneConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(Self::Hero),
            "showcase" => Ok(Self::Showcase),
            other => Err(SceneConfigError::InvalidField(
                "scene.variant",
                format!("expected `hero` or `showcase`, got `{other}`"),
            )),
        }
    }
}

#[derive(Debug, Error)]
pub enum SceneConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    ParseToml(#[from] toml::de::Error),
    #[error("invalid field `{0}`: {1}")]
    InvalidField(&'static str, String),
}

/// Density and timing knobs for one scene mount.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub variant: SceneVariant,
    /// Fixed seed for every random draw at build time; `None` draws from entropy.
    pub seed: Option<u64>,
    pub particle_count: usize,
    pub star_count: usize,
    /// Floating shapes (hero) or interactive cubes (showcase).
    pub shape_count: usize,
    /// Showcase sphere ring; ignored by the hero.
    pub orbiting_sphere_count: usize,
    /// Largest delta a tick may report, in seconds.
    pub max_delta: f32,
}

impl SceneOptions {
    pub fn hero() -> Self {
        Self {
            variant: SceneVariant::Hero,
            seed: None,
            particle_count: 150,
            star_count: 1000,
            shape_count: 4,
            orbiting_sphere_count: 0,
            max_delta: 0.1,
        }
    }

    pub fn showcase() -> Self {
        Self {
            variant: SceneVariant::Showcase,
            seed: None,
            particle_count: 200,
            star_count: 2000,
            shape_count: 4,
            orbiting_sphere_count: 8,
            max_delta: 0.1,
        }
    }

    pub fn for_variant(variant: SceneVariant) -> Self {
        match variant {
            SceneVariant::Hero => Self::hero(),
            SceneVariant::Showcase => Self::showcase(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), SceneConfigError> {
        check_count("density.particle_count", self.particle_count, MAX_PARTICLES)?;
        check_count("density.star_count", self.star_count, MAX_PARTICLES)?;
        check_count("density.shape_count", self.shape_count, MAX_SHAPES)?;
        check_count(
            "density.orbiting_sphere_count",
            self.orbiting_sphere_count,
            MAX_SHAPES,
        )?;
        if !self.max_delta.is_finite() || self.max_delta <= 0.0 {
            return Err(SceneConfigError::InvalidField(
                "clock.max_delta",
                "must be a positive number of seconds".to_string(),
            ));
        }
        Ok(())
    }

    /// Copy with every count held to its ceiling. Builders use this so an
    /// oversized density shrinks the scene instead of failing the mount.
    pub fn clamped(&self) -> Self {
        Self {
            particle_count: clamp_count(
                "density.particle_count",
                self.particle_count,
                MAX_PARTICLES,
            ),
            star_count: clamp_count("density.star_count", self.star_count, MAX_PARTICLES),
            shape_count: clamp_count("density.shape_count", self.shape_count, MAX_SHAPES),
            orbiting_sphere_count: clamp_count(
                "density.orbiting_sphere_count",
                self.orbiting_sphere_count,
                MAX_SHAPES,
            ),
            ..self.clone()
        }
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self::hero()
    }
}

fn check_count(field: &'static str, value: usize, max: usize) -> Result<(), SceneConfigError> {
    if value > max {
        return Err(SceneConfigError::InvalidField(
            field,
            format!("{value} exceeds the limit of {max}"),
        ));
    }
    Ok(())
}

fn clamp_count(field: &'static str, value: usize, max: usize) -> usize {
    if value > max {
        log::warn!("{field} {value} exceeds the limit of {max}; clamping");
        return max;
    }
    value
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SceneDocument {
    scene: SceneTable,
    density: DensityTable,
    clock: ClockTable,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SceneTable {
    variant: Option<SceneVariant>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DensityTable {
    particle_count: Option<usize>,
    star_count: Option<usize>,
    shape_count: Option<usize>,
    orbiting_sphere_count: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ClockTable {
    max_delta: Option<f32>,
}

pub fn load_scene_toml(path: &Path) -> Result<SceneOptions, SceneConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_scene_toml(&contents)
}

/// Parses a scene document. Missing fields take the variant's defaults.
pub fn parse_scene_toml(contents: &str) -> Result<SceneOptions, SceneConfigError> {
    let doc: SceneDocument = toml::from_str(contents)?;

    let mut options = SceneOptions::for_variant(doc.scene.variant.unwrap_or_default());
    options.seed = doc.scene.seed;

    let density = doc.density;
    if let Some(v) = density.particle_count {
        options.particle_count = v;
    }
    if let Some(v) = density.star_count {
        options.star_count = v;
    }
    if let Some(v) = density.shape_count {
        options.shape_count = v;
    }
    if let Some(v) = density.orbiting_sphere_count {
        options.orbiting_sphere_count = v;
    }
    if let Some(v) = doc.clock.max_delta {
        options.max_delta = v;
    }

    options.validate()?;
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default_hero() {
        let parsed = parse_scene_toml("").expect("empty document should parse");
        assert_eq!(parsed, SceneOptions::hero());
    }

    #[test]
    fn showcase_document_overrides_density() {
        let toml = r#"
[scene]
variant = "showcase"
seed = 42

[density]
particle_count = 50
orbiting_sphere_count = 12

[clock]
max_delta = 0.05
"#;
        let parsed = parse_scene_toml(toml).expect("failed to parse scene toml");
        assert_eq!(parsed.variant, SceneVariant::Showcase);
        assert_eq!(parsed.seed, Some(42));
        assert_eq!(parsed.particle_count, 50);
        assert_eq!(parsed.star_count, 2000);
        assert_eq!(parsed.shape_count, 4);
        assert_eq!(parsed.orbiting_sphere_count, 12);
        assert!((parsed.max_delta - 0.05).abs() < 1e-6);
    }

    #[test]
    fn zero_counts_are_allowed() {
        let toml = r#"
[density]
particle_count = 0
star_count = 0
shape_count = 0
"#;
        let parsed = parse_scene_toml(toml).expect("zero counts should parse");
        assert_eq!(parsed.particle_count, 0);
        assert_eq!(parsed.shape_count, 0);
    }

    #[test]
    fn rejects_counts_above_ceiling() {
        let toml = r#"
[density]
shape_count = 65
"#;
        let err = parse_scene_toml(toml).expect_err("shape_count should be rejected");
        assert!(matches!(
            err,
            SceneConfigError::InvalidField("density.shape_count", _)
        ));
    }

    #[test]
    fn clamped_holds_counts_to_ceilings() {
        let mut options = SceneOptions::showcase().with_seed(8);
        options.particle_count = usize::MAX / 8;
        options.star_count = MAX_PARTICLES + 1;
        options.shape_count = usize::MAX;
        options.orbiting_sphere_count = 3;
        assert!(options.validate().is_err());

        let clamped = options.clamped();
        assert_eq!(clamped.particle_count, MAX_PARTICLES);
        assert_eq!(clamped.star_count, MAX_PARTICLES);
        assert_eq!(clamped.shape_count, MAX_SHAPES);
        assert_eq!(clamped.orbiting_sphere_count, 3);
        assert_eq!(clamped.seed, Some(8));
        assert!(clamped.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_max_delta() {
        let toml = r#"
[clock]
max_delta = 0.0
"#;
        let err = parse_scene_toml(toml).expect_err("max_delta should be rejected");
        assert!(matches!(err, SceneConfigError::InvalidField("clock.max_delta", _)));
    }

    #[test]
    fn rejects_unknown_variant_and_fields() {
        assert!(matches!(
            parse_scene_toml("[scene]\nvariant = \"lobby\"\n"),
            Err(SceneConfigError::ParseToml(_))
        ));
        assert!(matches!(
            parse_scene_toml("[density]\nparticles = 3\n"),
            Err(SceneConfigError::ParseToml(_))
        ));
    }

    #[test]
    fn bundled_scene_files_match_defaults() {
        let hero = parse_scene_toml(include_str!("../scenes/hero.toml")).unwrap();
        assert_eq!(hero, SceneOptions::hero());
        let showcase = parse_scene_toml(include_str!("../scenes/showcase.toml")).unwrap();
        assert_eq!(showcase, SceneOptions::showcase().with_seed(2024));
    }

    #[test]
    fn variant_from_str_is_case_insensitive() {
        assert_eq!("Showcase".parse::<SceneVariant>().unwrap(), SceneVariant::Showcase);
        assert!("lobby".parse::<SceneVariant>().is_err());
    }
}
