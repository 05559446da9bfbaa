use glam::{Mat4, Vec2, Vec3};

/// A ray in world space, used for pointer picking.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

/// Perspective camera. Y-up, right-handed; view and projection are derived
/// from `pos`/`target` each frame, so re-applying the look-at is implicit.
pub struct Camera3D {
    /// Camera position in world space.
    pub pos: Vec3,
    /// Current look-at target.
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera3D {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            pos: Vec3::ZERO,
            target: Vec3::NEG_Z,
            fov_y: fov_y_deg.to_radians(),
            aspect,
            near,
            far,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    /// Combined view-projection matrix for the renderer.
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Update the aspect ratio (e.g. on window resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Unit vector from the camera toward its target.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.pos).normalize_or_zero()
    }

    /// Cast a ray from the camera through a normalized-device-coordinate
    /// pointer position (each axis in [-1, 1], +Y up).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward);

        let half_h = (self.fov_y / 2.0).tan();
        let half_w = half_h * self.aspect;

        let dir = (forward + right * (ndc.x * half_w) + up * (ndc.y * half_h)).normalize();
        Ray {
            origin: self.pos,
            dir,
        }
    }
}
