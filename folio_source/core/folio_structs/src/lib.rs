pub mod color;
pub mod transform_3d;
pub mod vector2;
pub mod vector3;

pub use color::Color;
pub use transform_3d::Transform3D;
pub use vector2::Vector2;
pub use vector3::Vector3;

pub use glam::{Mat4, Quat, Vec3};
