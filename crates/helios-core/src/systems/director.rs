//! Camera focus transitions.
//!
//! The director owns the camera's destination: clicking a planet flies the
//! camera to a standoff point along the planet's radial direction, the back
//! button flies it home. Transitions advance at a fixed nominal rate per
//! frame, so their duration is expressed in 60 fps frames.

use glam::Vec3;

use crate::extensions::lerp_vec3;
use crate::renderer::camera::Camera3D;

/// Standoff distance = display_size * SCALE + BASE.
pub const FOCUS_DISTANCE_SCALE: f32 = 6.0;
pub const FOCUS_DISTANCE_BASE: f32 = 12.0;
/// Transition length in seconds at the nominal 60 fps step.
pub const FOCUS_DURATION: f32 = 1.2;

const NOMINAL_STEP: f32 = 1.0 / 60.0;

#[derive(Debug, Clone, Copy)]
struct Transition {
    from_pos: Vec3,
    to_pos: Vec3,
    from_look: Vec3,
    to_look: Vec3,
    t: f32,
    duration: f32,
}

/// Drives camera position and look-at target between overview and focus.
pub struct CameraDirector {
    transition: Option<Transition>,
    /// Catalog index of the focused planet, if any.
    focused: Option<usize>,
    home_pos: Vec3,
    home_look: Vec3,
}

impl CameraDirector {
    pub fn new(home_pos: Vec3, home_look: Vec3) -> Self {
        Self {
            transition: None,
            focused: None,
            home_pos,
            home_look,
        }
    }

    /// Whether a fly-to is in progress. Clicks are ignored while true.
    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Catalog index of the focused planet, `None` in overview.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Begin flying toward a planet. Ignored while another transition runs.
    pub fn focus_on(&mut self, index: usize, world_pos: Vec3, display_size: f32, camera: &Camera3D) {
        if self.transition.is_some() {
            return;
        }

        let distance = display_size * FOCUS_DISTANCE_SCALE + FOCUS_DISTANCE_BASE;
        // Stand off along the planet's radial direction from the sun, so the
        // planet sits between camera and sun. Degenerate at the origin.
        let radial = world_pos.normalize_or_zero();
        let radial = if radial == Vec3::ZERO { Vec3::X } else { radial };
        let to_pos = world_pos + radial * distance;

        self.transition = Some(Transition {
            from_pos: camera.pos,
            to_pos,
            from_look: camera.target,
            to_look: world_pos,
            t: 0.0,
            duration: FOCUS_DURATION,
        });
        self.focused = Some(index);
    }

    /// Begin flying back to the overview position, whatever the current
    /// focus state. Ignored mid-transition.
    pub fn return_to_overview(&mut self, camera: &Camera3D) {
        if self.transition.is_some() {
            return;
        }

        self.transition = Some(Transition {
            from_pos: camera.pos,
            to_pos: self.home_pos,
            from_look: camera.target,
            to_look: self.home_look,
            t: 0.0,
            duration: FOCUS_DURATION,
        });
        self.focused = None;
    }

    /// Step the active transition one frame and write the interpolated
    /// position and look target into the camera. No-op when idle.
    pub fn advance(&mut self, camera: &mut Camera3D) {
        let Some(tr) = self.transition.as_mut() else {
            return;
        };

        tr.t += NOMINAL_STEP / tr.duration;
        let t = tr.t.min(1.0);

        camera.pos = lerp_vec3(tr.from_pos, tr.to_pos, t);
        camera.target = lerp_vec3(tr.from_look, tr.to_look, t);

        if tr.t >= 1.0 {
            self.transition = None;
        }
    }
}
