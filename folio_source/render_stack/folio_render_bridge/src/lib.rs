//! Command stream between the scene runtime and whatever draws it.
//!
//! The runtime never touches GPU objects. It emits `RenderCommand`s in node
//! order once per tick; the host maps each `NodeID` to a drawable it owns.

use folio_ids::NodeID;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInfo {
    pub width: u32,
    pub height: u32,
}

impl SurfaceInfo {
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderContextError {
    #[error("3D rendering is not supported by the host: {0}")]
    Unsupported(String),
    #[error("drawing surface has zero area")]
    EmptySurface,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3DState {
    pub position: [f32; 3],
    pub rotation: [f32; 4],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera3DState {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0, 1.0],
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientLight3DState {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayLight3DState {
    pub direction: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight3DState {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderKind {
    Standard,
    Distort,
    Wobble,
    Points,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialState {
    pub shader: ShaderKind,
    pub color: [f32; 4],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub distortion: f32,
    pub distortion_speed: f32,
    pub roughness: f32,
    pub metalness: f32,
    pub wireframe: bool,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResourceCommand {
    /// `source` is a `builtin://<shape>?<params>` descriptor.
    CreateMesh { node: NodeID, source: String },
    CreateParticles {
        node: NodeID,
        positions: Vec<f32>,
        sizes: Vec<f32>,
        colors: Vec<[f32; 3]>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightState {
    Ambient(AmbientLight3DState),
    Ray(RayLight3DState),
    Point(PointLight3DState),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command3D {
    /// Scene clock for shader-side animation (distortion noise, twinkle).
    SetFrame {
        elapsed: f32,
        delta: f32,
    },
    UpsertShape {
        node: NodeID,
        model: [[f32; 4]; 4],
        material: MaterialState,
    },
    UpsertLight {
        node: NodeID,
        light: LightState,
    },
    UpsertParticles {
        node: NodeID,
        model: [[f32; 4]; 4],
        material: MaterialState,
        /// Twinkle clock (`elapsed * rate`) for star fields.
        twinkle: Option<f32>,
    },
    SetCamera {
        camera: Camera3DState,
    },
    RemoveNode {
        node: NodeID,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Resource(ResourceCommand),
    ThreeD(Command3D),
}

pub trait RenderBridge {
    /// The drawing surface, or why there is none.
    fn context(&self) -> Result<SurfaceInfo, RenderContextError>;

    fn submit(&mut self, command: RenderCommand);

    fn submit_many<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = RenderCommand>,
        Self: Sized,
    {
        for command in commands {
            self.submit(command);
        }
    }
}

/// Bridge that stores every command. Used by headless runs and tests.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    surface: Option<SurfaceInfo>,
    pub commands: Vec<RenderCommand>,
}

impl CommandRecorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            surface: Some(SurfaceInfo { width, height }),
            commands: Vec::new(),
        }
    }

    /// A host without a 3D context.
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn drain(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderBridge for CommandRecorder {
    fn context(&self) -> Result<SurfaceInfo, RenderContextError> {
        match self.surface {
            Some(s) if s.width == 0 || s.height == 0 => Err(RenderContextError::EmptySurface),
            Some(s) => Ok(s),
            None => Err(RenderContextError::Unsupported(
                "no surface attached".to_string(),
            )),
        }
    }

    fn submit(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }
}

impl<B: RenderBridge + ?Sized> RenderBridge for &mut B {
    fn context(&self) -> Result<SurfaceInfo, RenderContextError> {
        (**self).context()
    }

    fn submit(&mut self, command: RenderCommand) {
        (**self).submit(command);
    }
}
