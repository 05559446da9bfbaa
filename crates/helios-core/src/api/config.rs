use glam::Vec3;

/// Configuration for the viewer, provided by the bridge at boot.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,
    /// Default camera position for the overview pose.
    pub home_pos: Vec3,
    /// Default camera look-at for the overview pose.
    pub home_look: Vec3,
    /// Number of background stars.
    pub starfield_stars: usize,
    /// Inner radius of the starfield shell.
    pub starfield_r_min: f32,
    /// Radial depth of the starfield shell.
    pub starfield_shell: f32,
    /// Seed for starfield placement (deterministic).
    pub seed: u64,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            fov_y_deg: 60.0,
            near: 0.1,
            far: 1000.0,
            home_pos: Vec3::new(0.0, 40.0, 140.0),
            home_look: Vec3::ZERO,
            starfield_stars: 800,
            starfield_r_min: 400.0,
            starfield_shell: 200.0,
            seed: 42,
        }
    }
}
