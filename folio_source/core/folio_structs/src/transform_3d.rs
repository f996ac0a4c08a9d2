use glam::{EulerRot, Mat4, Quat};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Vector3;

fn default_position() -> Vector3 {
    Vector3::ZERO
}
fn is_default_position(v: &Vector3) -> bool {
    *v == default_position()
}

fn default_rotation() -> Vector3 {
    Vector3::ZERO
}
fn is_default_rotation(v: &Vector3) -> bool {
    *v == default_rotation()
}

fn default_scale() -> Vector3 {
    Vector3::ONE
}
fn is_default_scale(v: &Vector3) -> bool {
    *v == default_scale()
}

/// Position, Euler rotation (radians, XYZ order) and scale.
#[derive(Clone, Debug, Serialize, Deserialize, Copy, PartialEq)]
pub struct Transform3D {
    #[serde(
        default = "default_position",
        skip_serializing_if = "is_default_position"
    )]
    pub position: Vector3,

    #[serde(
        default = "default_rotation",
        skip_serializing_if = "is_default_rotation"
    )]
    pub rotation: Vector3,

    #[serde(default = "default_scale", skip_serializing_if = "is_default_scale")]
    pub scale: Vector3,
}

impl fmt::Display for Transform3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Transform3D(position:{}, rotation:{}, scale:{})",
            self.position, self.rotation, self.scale
        )
    }
}

impl Transform3D {
    pub const IDENTITY: Self = Self {
        position: Vector3::ZERO,
        rotation: Vector3::ZERO,
        scale: Vector3::ONE,
    };

    pub fn new(position: Vector3, rotation: Vector3, scale: Vector3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn from_position(position: Vector3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vector3::splat(scale);
        self
    }

    pub fn is_default(&self) -> bool {
        is_default_position(&self.position)
            && is_default_rotation(&self.rotation)
            && is_default_scale(&self.scale)
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }

    /// Rotation as a quaternion (intrinsic X then Y then Z).
    pub fn quaternion(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Returns a `glam::Mat4` representing scale→rotate→translate
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale.to_glam(),
            self.quaternion(),
            self.position.to_glam(),
        )
    }

    /// World matrix of `child` placed inside `self` (child is applied in local space of self).
    #[inline]
    pub fn compose(&self, child: &Transform3D) -> Mat4 {
        if self.is_default() {
            return child.to_mat4();
        }
        self.to_mat4() * child.to_mat4()
    }
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::IDENTITY
    }
}
