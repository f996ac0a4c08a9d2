use glam::{Mat3, Mat4, Quat, Vec3};

use folio_render_bridge::Camera3DState;
use folio_structs::{Vector2, Vector3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    /// Distance along the ray to the first sphere hit, if any.
    ///
    /// An origin inside the sphere hits the far side.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = center - self.origin;
        let tca = oc.dot(self.direction);
        let d2 = oc.length_squared() - tca * tca;
        let r2 = radius * radius;
        if d2 > r2 {
            return None;
        }
        let thc = (r2 - d2).sqrt();
        let (t0, t1) = (tca - thc, tca + thc);
        if t1 < 0.0 {
            return None;
        }
        Some(if t0 >= 0.0 { t0 } else { t1 })
    }
}

/// Perspective camera owned by a mounted scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub rotation: Quat,
    /// Vertical field of view, in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl Camera3D {
    pub fn new(position: Vector3, fov: f32, aspect: f32) -> Self {
        Self {
            position: position.to_glam(),
            rotation: Quat::IDENTITY,
            fov,
            near: 0.1,
            far: 1000.0,
            aspect: if usable_aspect(aspect) { aspect } else { 1.0 },
        }
    }

    /// Applies `aspect` when it is a finite positive ratio. Returns false and
    /// keeps the current one otherwise.
    pub fn set_aspect(&mut self, aspect: f32) -> bool {
        if !usable_aspect(aspect) {
            return false;
        }
        self.aspect = aspect;
        true
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Turns the camera to face `target`. Leaves the rotation alone when
    /// `target` coincides with the camera position.
    pub fn look_at(&mut self, target: Vector3) {
        let forward = (target.to_glam() - self.position).normalize_or_zero();
        if forward == Vec3::ZERO {
            return;
        }
        let mut right = forward.cross(Vec3::Y);
        if right.length_squared() < 1e-8 {
            right = Vec3::X;
        }
        let right = right.normalize();
        let up = right.cross(forward);
        self.rotation = Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World ray through a pointer position in NDC (+Y up).
    pub fn screen_to_world_ray(&self, ndc: Vector2) -> Ray {
        let tan_half = (self.fov.to_radians() * 0.5).tan();
        let dir_cam =
            Vec3::new(ndc.x * tan_half * self.aspect, ndc.y * tan_half, -1.0).normalize();
        Ray {
            origin: self.position,
            direction: (self.rotation * dir_cam).normalize(),
        }
    }

    /// NDC of a world point, or `None` when it is behind the camera.
    pub fn project(&self, point: Vector3) -> Option<Vector2> {
        let clip = self.view_projection() * point.to_glam().extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vector2::new(clip.x / clip.w, clip.y / clip.w))
    }

    pub fn to_state(&self) -> Camera3DState {
        Camera3DState {
            position: self.position.to_array(),
            rotation: self.rotation.to_array(),
            fov_degrees: self.fov,
            near: self.near,
            far: self.far,
        }
    }
}

fn usable_aspect(aspect: f32) -> bool {
    aspect.is_finite() && aspect > 0.0
}
