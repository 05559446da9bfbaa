//! Scene construction: sun, planets, rings, orbit guides and starfield.
//!
//! Built once at boot from the catalog; the handles returned here are the
//! only way systems address specific nodes afterwards.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::types::NodeId;
use crate::assets::registry::TextureRegistry;
use crate::catalog;
use crate::components::node::{Node, Shape};
use crate::core::graph::{LocalTransform, TransformGraph};
use crate::core::scene::Scene;
use crate::rng::Rng;

/// Half-width of the flat orbit guide annulus.
pub const GUIDE_HALF_WIDTH: f32 = 0.05;
/// Guides lie in the ecliptic plane.
pub const GUIDE_TILT: f32 = FRAC_PI_2;
/// Ring inclination, matched across both ringed planets.
pub const RING_TILT: f32 = -PI / 2.2;

/// NodeIds of everything the systems need to address directly.
/// Planet vectors are in catalog order.
pub struct SceneHandles {
    pub sun: NodeId,
    /// Invisible orbit pivots at the origin, one per planet.
    pub pivots: Vec<NodeId>,
    /// Planet body spheres, children of their pivots.
    pub bodies: Vec<NodeId>,
    /// Ring nodes for the planets that have one, in catalog order.
    pub rings: Vec<NodeId>,
    /// Static orbit guide circles.
    pub guides: Vec<NodeId>,
}

/// Build the complete scene. Returns the scene, its transform hierarchy,
/// the node handles and the star positions (static, uploaded once).
pub fn build(
    config: &OrreryConfig,
    registry: &mut TextureRegistry,
) -> (Scene, TransformGraph, SceneHandles, Vec<[f32; 3]>) {
    let mut scene = Scene::new();
    let mut graph = TransformGraph::new();
    let mut next_id = 1u32;
    let mut alloc = || {
        let id = NodeId(next_id);
        next_id += 1;
        id
    };

    // Sun: a root node spinning in place.
    let sun = alloc();
    let sun_tex = registry.register(catalog::SUN_TEXTURE);
    scene.spawn(
        Node::new(sun)
            .with_tag("Sun")
            .with_shape(Shape::Sphere {
                radius: catalog::SUN_RADIUS,
            })
            .with_color(catalog::SUN_COLOR)
            .with_texture(sun_tex),
    );
    graph.register_with(sun, LocalTransform::new());

    let mut pivots = Vec::with_capacity(catalog::planets().len());
    let mut bodies = Vec::with_capacity(catalog::planets().len());
    let mut rings = Vec::new();
    let mut guides = Vec::with_capacity(catalog::planets().len());

    for planet in catalog::planets() {
        // Pivot at the origin; its Y rotation is the orbit angle.
        let pivot = alloc();
        scene.spawn(Node::new(pivot));
        graph.register_with(pivot, LocalTransform::new());
        pivots.push(pivot);

        // Body hangs off the pivot at the orbit radius.
        let body = alloc();
        let body_tex = registry.register(planet.texture);
        scene.spawn(
            Node::new(body)
                .with_tag(planet.name)
                .with_shape(Shape::Sphere {
                    radius: planet.display_size,
                })
                .with_color(planet.color)
                .with_texture(body_tex)
                .pickable(),
        );
        graph.register_with(
            body,
            LocalTransform::new().with_offset(Vec3::new(planet.orbit_radius, 0.0, 0.0)),
        );
        graph.set_parent(body, Some(pivot));
        bodies.push(body);

        // Ring shares the body's offset so it orbits with it.
        if let Some(ring) = planet.ring {
            let ring_id = alloc();
            let ring_tex = registry.register(ring.texture);
            scene.spawn(
                Node::new(ring_id)
                    .with_shape(Shape::Ring {
                        inner: ring.inner_radius,
                        outer: ring.outer_radius,
                    })
                    .with_color(planet.color)
                    .with_texture(ring_tex),
            );
            graph.register_with(
                ring_id,
                LocalTransform::new()
                    .with_offset(Vec3::new(planet.orbit_radius, 0.0, 0.0))
                    .with_rotation(Vec3::new(RING_TILT, 0.0, 0.0)),
            );
            graph.set_parent(ring_id, Some(pivot));
            rings.push(ring_id);
        }

        // Guides are static; no need to route them through the hierarchy.
        let guide = alloc();
        scene.spawn(
            Node::new(guide)
                .with_rotation(Vec3::new(GUIDE_TILT, 0.0, 0.0))
                .with_shape(Shape::OrbitGuide {
                    radius: planet.orbit_radius,
                })
                .with_color([0.35, 0.35, 0.35]),
        );
        guides.push(guide);
    }

    let starfield = build_starfield(config);

    (
        scene,
        graph,
        SceneHandles {
            sun,
            pivots,
            bodies,
            rings,
            guides,
        },
        starfield,
    )
}

/// Star positions on a thick spherical shell around the system.
/// Uniform over the sphere: phi = acos(2u - 1) avoids pole clustering.
fn build_starfield(config: &OrreryConfig) -> Vec<[f32; 3]> {
    let mut rng = Rng::new(config.seed);
    let mut stars = Vec::with_capacity(config.starfield_stars);

    for _ in 0..config.starfield_stars {
        let theta = TAU * rng.next_f32();
        let phi = (2.0 * rng.next_f32() - 1.0).acos();
        let r = config.starfield_r_min + rng.next_f32() * config.starfield_shell;

        stars.push([
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ]);
    }
    stars
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_default() -> (Scene, TransformGraph, SceneHandles, Vec<[f32; 3]>) {
        let mut registry = TextureRegistry::new();
        build(&OrreryConfig::default(), &mut registry)
    }

    #[test]
    fn handles_cover_the_catalog() {
        let (scene, graph, handles, _) = build_default();
        let n = catalog::planets().len();
        assert_eq!(handles.pivots.len(), n);
        assert_eq!(handles.bodies.len(), n);
        assert_eq!(handles.guides.len(), n);
        assert_eq!(handles.rings.len(), 2);

        // Sun + per planet: pivot, body, guide; plus two rings.
        assert_eq!(scene.len(), 1 + n * 3 + 2);
        // Guides stay out of the hierarchy.
        assert_eq!(graph.len(), 1 + n * 2 + 2);
    }

    #[test]
    fn bodies_parented_to_their_pivots() {
        let (_, graph, handles, _) = build_default();
        for (pivot, body) in handles.pivots.iter().zip(&handles.bodies) {
            assert_eq!(graph.get_parent(*body), Some(*pivot));
        }
    }

    #[test]
    fn bodies_sit_at_orbit_radius_after_propagate() {
        let (mut scene, mut graph, handles, _) = build_default();
        graph.propagate(&mut scene);

        for (i, planet) in catalog::planets().iter().enumerate() {
            let pos = scene.get(handles.bodies[i]).unwrap().pos;
            assert!(
                (pos.length() - planet.orbit_radius).abs() < 1e-4,
                "{} at {:?}",
                planet.name,
                pos
            );
        }
    }

    #[test]
    fn only_bodies_pickable() {
        let (scene, _, handles, _) = build_default();
        for node in scene.iter() {
            let should_pick = handles.bodies.contains(&node.id);
            assert_eq!(node.pickable, should_pick, "node {:?}", node.id);
        }
    }

    #[test]
    fn rings_tilted_and_riding_the_pivot() {
        let (_, graph, handles, _) = build_default();
        for ring in &handles.rings {
            let local = graph.get_local(*ring).unwrap();
            assert!((local.rotation.x - RING_TILT).abs() < 1e-6);
            assert!(graph.get_parent(*ring).is_some());
        }
    }

    #[test]
    fn starfield_fills_the_shell() {
        let config = OrreryConfig::default();
        let (_, _, _, stars) = build_default();
        assert_eq!(stars.len(), config.starfield_stars);
        for s in &stars {
            let r = (s[0] * s[0] + s[1] * s[1] + s[2] * s[2]).sqrt();
            assert!(
                r >= config.starfield_r_min - 1e-3
                    && r <= config.starfield_r_min + config.starfield_shell + 1e-3,
                "star radius {r}"
            );
        }
    }

    #[test]
    fn starfield_deterministic_per_seed() {
        let mut reg_a = TextureRegistry::new();
        let mut reg_b = TextureRegistry::new();
        let (_, _, _, a) = build(&OrreryConfig::default(), &mut reg_a);
        let (_, _, _, b) = build(&OrreryConfig::default(), &mut reg_b);
        assert_eq!(a, b);
    }

    #[test]
    fn texture_registry_has_one_slot_per_image() {
        let mut registry = TextureRegistry::new();
        let _ = build(&OrreryConfig::default(), &mut registry);
        // Sun + 8 planets + 2 ring textures, all distinct paths.
        assert_eq!(registry.len(), 11);
    }
}
