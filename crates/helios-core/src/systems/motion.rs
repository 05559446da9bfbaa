//! Orbital and rotational motion, driven by wall-clock delta time.
//!
//! Angles accumulate into the transform graph's local rotations; world
//! positions fall out of the next propagate pass.

use crate::builder::SceneHandles;
use crate::catalog;
use crate::core::graph::TransformGraph;
use crate::state::SpeedState;

/// Radians/sec of orbital revolution at a speed multiplier of 1.0.
pub const ORBIT_BASE_RATE: f32 = 0.3;
/// Radians/sec of planet self-rotation, shared by every planet.
pub const SELF_SPIN_RATE: f32 = 0.8;
/// Radians/sec of sun self-rotation.
pub const SUN_SPIN_RATE: f32 = 0.1;

/// Advance every pivot, body and sun rotation by `dt` seconds.
pub fn advance(graph: &mut TransformGraph, handles: &SceneHandles, speeds: &SpeedState, dt: f32) {
    for (i, planet) in catalog::planets().iter().enumerate() {
        let speed = speeds.get(planet.name);

        if let Some(pivot) = graph.get_local_mut(handles.pivots[i]) {
            pivot.rotation.y += dt * speed * ORBIT_BASE_RATE;
        }
        if let Some(body) = graph.get_local_mut(handles.bodies[i]) {
            body.rotation.y += dt * SELF_SPIN_RATE;
        }
    }

    if let Some(sun) = graph.get_local_mut(handles.sun) {
        sun.rotation.y += dt * SUN_SPIN_RATE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::OrreryConfig;
    use crate::assets::registry::TextureRegistry;
    use crate::builder;

    fn build() -> (crate::core::scene::Scene, TransformGraph, SceneHandles) {
        let mut registry = TextureRegistry::new();
        let (scene, graph, handles, _stars) =
            builder::build(&OrreryConfig::default(), &mut registry);
        (scene, graph, handles)
    }

    #[test]
    fn pivot_angle_scales_with_speed() {
        let (_, mut graph, handles) = build();
        let mut speeds = SpeedState::from_catalog();
        speeds.set("Mercury", 2.0);

        advance(&mut graph, &handles, &speeds, 1.0);

        let angle = graph.get_local(handles.pivots[0]).unwrap().rotation.y;
        assert!((angle - 2.0 * ORBIT_BASE_RATE).abs() < 1e-6);
    }

    #[test]
    fn zero_speed_freezes_orbit_but_not_spin() {
        let (_, mut graph, handles) = build();
        let mut speeds = SpeedState::from_catalog();
        speeds.set("Earth", 0.0);

        advance(&mut graph, &handles, &speeds, 1.0);

        let pivot = graph.get_local(handles.pivots[2]).unwrap().rotation.y;
        let body = graph.get_local(handles.bodies[2]).unwrap().rotation.y;
        assert_eq!(pivot, 0.0);
        assert!((body - SELF_SPIN_RATE).abs() < 1e-6);
    }

    #[test]
    fn sun_spins_at_its_own_rate() {
        let (_, mut graph, handles) = build();
        let speeds = SpeedState::from_catalog();

        advance(&mut graph, &handles, &speeds, 2.0);

        let sun = graph.get_local(handles.sun).unwrap().rotation.y;
        assert!((sun - 2.0 * SUN_SPIN_RATE).abs() < 1e-6);
    }

    #[test]
    fn ring_tilt_untouched_by_motion() {
        let (_, mut graph, handles) = build();
        let speeds = SpeedState::from_catalog();

        let before = graph.get_local(handles.rings[0]).unwrap().rotation.x;
        advance(&mut graph, &handles, &speeds, 1.0);
        let after = graph.get_local(handles.rings[0]).unwrap().rotation.x;
        assert_eq!(before, after);
    }
}
