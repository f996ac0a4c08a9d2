use folio_structs::Color;

/// Which shader family the host should use for a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    #[default]
    Standard,
    /// Noise-displaced vertices; `distortion` is the displacement amount.
    Distort,
    /// Sinusoidal wobble; `distortion` is the wobble factor.
    Wobble,
    /// Point sprites.
    Points,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub surface: SurfaceKind,
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    /// Distortion amount or wobble factor depending on `surface`.
    pub distortion: f32,
    /// Rate at which the host advances the surface's own noise clock.
    pub distortion_speed: f32,
    pub opacity: f32,
    pub wireframe: bool,
    pub roughness: f32,
    pub metalness: f32,
    /// Point size for `SurfaceKind::Points`.
    pub size: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            surface: SurfaceKind::Standard,
            color: Color::WHITE,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            distortion: 0.0,
            distortion_speed: 0.0,
            opacity: 1.0,
            wireframe: false,
            roughness: 1.0,
            metalness: 0.0,
            size: 1.0,
        }
    }
}

impl Material {
    pub fn standard(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn distort(color: Color, amount: f32, speed: f32) -> Self {
        Self {
            surface: SurfaceKind::Distort,
            color,
            distortion: amount,
            distortion_speed: speed,
            ..Self::default()
        }
    }

    pub fn wobble(color: Color, factor: f32, speed: f32) -> Self {
        Self {
            surface: SurfaceKind::Wobble,
            color,
            distortion: factor,
            distortion_speed: speed,
            ..Self::default()
        }
    }

    pub fn points(color: Color, size: f32, opacity: f32) -> Self {
        Self {
            surface: SurfaceKind::Points,
            color,
            size,
            opacity,
            ..Self::default()
        }
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_finish(mut self, roughness: f32, metalness: f32) -> Self {
        self.roughness = roughness;
        self.metalness = metalness;
        self
    }

    pub fn wireframe(mut self) -> Self {
        self.wireframe = true;
        self
    }
}
