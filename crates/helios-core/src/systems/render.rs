//! Flattens the scene into the instance buffer the host page draws from.

use crate::assets::registry::TextureRegistry;
use crate::builder;
use crate::components::node::Shape;
use crate::core::scene::Scene;
use crate::renderer::instance::{
    RenderBuffer, RenderInstance, KIND_GUIDE, KIND_RING, KIND_SPHERE, TEX_NONE,
};

/// Rebuild the render buffer from the current scene state.
/// Inactive and shapeless nodes are skipped; textures not yet resolved on
/// the host side are sent as -1 so the fallback color is used.
pub fn build_render_buffer(scene: &Scene, registry: &TextureRegistry, buf: &mut RenderBuffer) {
    buf.clear();

    for node in scene.iter() {
        if !node.active {
            continue;
        }
        let Some(shape) = node.shape else {
            continue;
        };

        let (kind, p0, p1) = match shape {
            Shape::Sphere { radius } => (KIND_SPHERE, radius, 0.0),
            Shape::Ring { inner, outer } => (KIND_RING, inner, outer),
            // Guides draw as a thin annulus around the orbit radius.
            Shape::OrbitGuide { radius } => (
                KIND_GUIDE,
                radius - builder::GUIDE_HALF_WIDTH,
                radius + builder::GUIDE_HALF_WIDTH,
            ),
        };

        let tex = match node.texture {
            Some(id) if registry.is_ready(id) => id.0 as f32,
            _ => TEX_NONE,
        };

        buf.push(RenderInstance {
            kind,
            x: node.pos.x,
            y: node.pos.y,
            z: node.pos.z,
            rot_x: node.rotation.x,
            rot_y: node.rotation.y,
            p0,
            p1,
            tex,
            r: node.color[0],
            g: node.color[1],
            b: node.color[2],
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::NodeId;
    use crate::components::node::Node;
    use glam::Vec3;

    #[test]
    fn skips_pivots_and_inactive() {
        let mut scene = Scene::new();
        scene.spawn(Node::new(NodeId(1))); // no shape
        let mut hidden = Node::new(NodeId(2)).with_shape(Shape::Sphere { radius: 1.0 });
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Node::new(NodeId(3)).with_shape(Shape::Sphere { radius: 2.0 }));

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &TextureRegistry::new(), &mut buf);
        assert_eq!(buf.instance_count(), 1);
        assert_eq!(buf.instances[0].p0, 2.0);
    }

    #[test]
    fn unresolved_texture_sent_as_minus_one() {
        let mut registry = TextureRegistry::new();
        let id = registry.register("image/earth.jpg");

        let mut scene = Scene::new();
        scene.spawn(
            Node::new(NodeId(1))
                .with_shape(Shape::Sphere { radius: 2.7 })
                .with_texture(id),
        );

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &registry, &mut buf);
        assert_eq!(buf.instances[0].tex, TEX_NONE);

        registry.mark(id, true);
        build_render_buffer(&scene, &registry, &mut buf);
        assert_eq!(buf.instances[0].tex, 0.0);
    }

    #[test]
    fn guide_expands_to_thin_annulus() {
        let mut scene = Scene::new();
        scene.spawn(Node::new(NodeId(1)).with_shape(Shape::OrbitGuide { radius: 23.0 }));

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &TextureRegistry::new(), &mut buf);
        let inst = buf.instances[0];
        assert_eq!(inst.kind, KIND_GUIDE);
        assert!((inst.p0 - 22.95).abs() < 1e-5);
        assert!((inst.p1 - 23.05).abs() < 1e-5);
    }

    #[test]
    fn ring_carries_both_radii_and_tilt() {
        let mut scene = Scene::new();
        scene.spawn(
            Node::new(NodeId(1))
                .with_rotation(Vec3::new(-1.4, 0.0, 0.0))
                .with_shape(Shape::Ring {
                    inner: 6.2,
                    outer: 8.5,
                }),
        );

        let mut buf = RenderBuffer::new();
        build_render_buffer(&scene, &TextureRegistry::new(), &mut buf);
        let inst = buf.instances[0];
        assert_eq!(inst.kind, KIND_RING);
        assert_eq!(inst.p0, 6.2);
        assert_eq!(inst.p1, 8.5);
        assert!((inst.rot_x + 1.4).abs() < 1e-6);
    }
}
