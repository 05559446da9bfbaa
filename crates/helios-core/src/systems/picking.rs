//! Pointer picking against pickable spheres.
//!
//! Analytic ray-sphere intersection rather than a projected screen-space
//! test, so picks stay exact during camera transitions.

use glam::{Vec2, Vec3};

use crate::api::types::NodeId;
use crate::components::node::Shape;
use crate::core::scene::Scene;
use crate::renderer::camera::{Camera3D, Ray};

/// A successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: NodeId,
    /// Distance along the ray to the near intersection.
    pub distance: f32,
}

/// Tracks the pointer and resolves it to scene hits.
#[derive(Debug, Default)]
pub struct Picker {
    /// Last pointer position in NDC, `None` until the pointer enters the canvas.
    ndc: Option<Vec2>,
    /// Last pointer position in client pixels, for tooltip placement.
    screen: Vec2,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pointer(&mut self, ndc: Vec2, screen: Vec2) {
        self.ndc = Some(ndc);
        self.screen = screen;
    }

    /// Client-pixel position of the last pointer event.
    pub fn screen_pos(&self) -> Vec2 {
        self.screen
    }

    /// Cast a ray through the last pointer position and return the nearest
    /// pickable sphere it hits, if any.
    pub fn pick(&self, scene: &Scene, camera: &Camera3D) -> Option<Hit> {
        let ndc = self.ndc?;
        let ray = camera.ray_from_ndc(ndc);

        let mut best: Option<Hit> = None;
        for node in scene.iter() {
            if !node.active || !node.pickable {
                continue;
            }
            let Some(Shape::Sphere { radius }) = node.shape else {
                continue;
            };
            if let Some(t) = ray_sphere(&ray, node.pos, radius) {
                if best.map(|h| t < h.distance).unwrap_or(true) {
                    best = Some(Hit {
                        id: node.id,
                        distance: t,
                    });
                }
            }
        }
        best
    }
}

/// Nearest positive intersection of a unit-direction ray with a sphere.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t = -b - sqrt_disc;
    if t > 0.0 {
        return Some(t);
    }
    let t = -b + sqrt_disc;
    if t > 0.0 {
        return Some(t);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::node::Node;

    fn camera_at_origin_looking_neg_z() -> Camera3D {
        let mut cam = Camera3D::new(60.0, 1.0, 0.1, 1000.0);
        cam.pos = Vec3::ZERO;
        cam.target = Vec3::new(0.0, 0.0, -10.0);
        cam
    }

    #[test]
    fn ray_hits_sphere_on_axis() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::NEG_Z,
        };
        let t = ray_sphere(&ray, Vec3::new(0.0, 0.0, -10.0), 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
    }

    #[test]
    fn ray_misses_offset_sphere() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::NEG_Z,
        };
        assert!(ray_sphere(&ray, Vec3::new(10.0, 0.0, -10.0), 2.0).is_none());
    }

    #[test]
    fn sphere_behind_ray_ignored() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::NEG_Z,
        };
        assert!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 10.0), 2.0).is_none());
    }

    #[test]
    fn pick_prefers_nearest_of_two() {
        let mut scene = Scene::new();
        scene.spawn(
            Node::new(NodeId(1))
                .with_pos(Vec3::new(0.0, 0.0, -20.0))
                .with_shape(Shape::Sphere { radius: 2.0 })
                .pickable(),
        );
        scene.spawn(
            Node::new(NodeId(2))
                .with_pos(Vec3::new(0.0, 0.0, -8.0))
                .with_shape(Shape::Sphere { radius: 2.0 })
                .pickable(),
        );

        let mut picker = Picker::new();
        picker.set_pointer(Vec2::ZERO, Vec2::ZERO);
        let hit = picker.pick(&scene, &camera_at_origin_looking_neg_z()).unwrap();
        assert_eq!(hit.id, NodeId(2));
    }

    #[test]
    fn unpickable_nodes_skipped() {
        let mut scene = Scene::new();
        scene.spawn(
            Node::new(NodeId(1))
                .with_pos(Vec3::new(0.0, 0.0, -8.0))
                .with_shape(Shape::Sphere { radius: 4.0 }),
        );

        let mut picker = Picker::new();
        picker.set_pointer(Vec2::ZERO, Vec2::ZERO);
        assert!(picker.pick(&scene, &camera_at_origin_looking_neg_z()).is_none());
    }

    #[test]
    fn no_pointer_no_pick() {
        let scene = Scene::new();
        let picker = Picker::new();
        assert!(picker.pick(&scene, &camera_at_origin_looking_neg_z()).is_none());
    }
}
