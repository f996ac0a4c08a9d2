//! Per-node hover/click state, kept apart from any render cycle.
//!
//! ```text
//! Idle ──Enter──▶ Hovered ──Leave──▶ Idle
//! Hovered ──Click──▶ Active            (toggle nodes only)
//! Active ──Click──▶ Hovered | Idle     (by pointer position)
//! Active ──Enter/Leave──▶ Active       (latched; position is remembered)
//! ```

use folio_input::PointerEvent;
use folio_structs::Color;

use crate::Material;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Hover is the only reaction; clicks are ignored.
    #[default]
    HoverOnly,
    /// Click latches `Active` until the next click.
    Toggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: InteractionState,
    pub to: InteractionState,
    pub event: PointerEvent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionMachine {
    mode: InteractionMode,
    state: InteractionState,
    pointer_inside: bool,
}

impl InteractionMachine {
    pub fn new(mode: InteractionMode) -> Self {
        Self {
            mode,
            state: InteractionState::Idle,
            pointer_inside: false,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    /// Feeds one event. Returns the transition when the state changed.
    pub fn handle(&mut self, event: PointerEvent) -> Option<Transition> {
        use InteractionState::*;
        use PointerEvent::*;

        match event {
            Enter => self.pointer_inside = true,
            Leave => self.pointer_inside = false,
            Click => {}
        }

        let next = match (self.state, event) {
            (Idle, Enter) => Hovered,
            (Hovered, Leave) => Idle,
            (Hovered, Click) if self.mode == InteractionMode::Toggle => Active,
            (Active, Click) if self.pointer_inside => Hovered,
            (Active, Click) => Idle,
            (state, _) => state,
        };

        if next == self.state {
            return None;
        }
        let transition = Transition {
            from: self.state,
            to: next,
            event,
        };
        self.state = next;
        Some(transition)
    }
}

/// Material and scale a node shows in one interaction state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Look {
    pub color: Color,
    pub emissive: Color,
    pub emissive_intensity: f32,
    pub distortion: f32,
    pub distortion_speed: f32,
    pub scale: f32,
}

impl Look {
    /// The material's own values at unit scale.
    pub fn of(material: &Material) -> Self {
        Self {
            color: material.color,
            emissive: material.emissive,
            emissive_intensity: material.emissive_intensity,
            distortion: material.distortion,
            distortion_speed: material.distortion_speed,
            scale: 1.0,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn distortion(mut self, amount: f32, speed: f32) -> Self {
        self.distortion = amount;
        self.distortion_speed = speed;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = if scale.is_finite() { scale.max(0.0) } else { 1.0 };
        self
    }

    pub fn apply(&self, material: Material) -> Material {
        Material {
            color: self.color,
            emissive: self.emissive,
            emissive_intensity: self.emissive_intensity,
            distortion: self.distortion,
            distortion_speed: self.distortion_speed,
            ..material
        }
    }
}

/// How an interactive node reacts in each state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionProfile {
    pub mode: InteractionMode,
    pub idle: Look,
    pub hovered: Look,
    pub active: Look,
    /// Per-frame factor for easing the scale toward the state's target.
    pub smoothing: f32,
}

pub const DEFAULT_SCALE_SMOOTHING: f32 = 0.1;

impl InteractionProfile {
    pub fn hover_only(idle: Look, hovered: Look) -> Self {
        Self {
            mode: InteractionMode::HoverOnly,
            idle,
            hovered,
            active: hovered,
            smoothing: DEFAULT_SCALE_SMOOTHING,
        }
    }

    pub fn toggle(idle: Look, hovered: Look, active: Look) -> Self {
        Self {
            mode: InteractionMode::Toggle,
            idle,
            hovered,
            active,
            smoothing: DEFAULT_SCALE_SMOOTHING,
        }
    }

    pub fn look(&self, state: InteractionState) -> &Look {
        match state {
            InteractionState::Idle => &self.idle,
            InteractionState::Hovered => &self.hovered,
            InteractionState::Active => &self.active,
        }
    }

    pub fn machine(&self) -> InteractionMachine {
        InteractionMachine::new(self.mode)
    }
}
