use glam::Vec3;

use crate::api::types::NodeId;
use crate::assets::registry::TextureId;

/// Renderable geometry of a node. Nodes without a shape (orbit pivots)
/// exist only to carry children in the transform hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Solid sphere (sun, planet bodies).
    Sphere { radius: f32 },
    /// Flat annulus, rendered double-sided and semi-transparent.
    Ring { inner: f32, outer: f32 },
    /// Faint full-circle orbit guide at a fixed radius.
    OrbitGuide { radius: f32 },
}

/// Fat scene node — a single struct with optional parts.
/// Designed for simplicity over ECS purity; the whole scene is a few dozen nodes.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier.
    pub id: NodeId,
    /// Tag for finding nodes by name.
    pub tag: &'static str,
    /// Whether this node is active (inactive nodes are skipped by the renderer).
    pub active: bool,
    /// World position, written by transform propagation each frame.
    pub pos: Vec3,
    /// World rotation as Euler angles in radians (x tilt, y spin, z unused).
    pub rotation: Vec3,
    /// Geometry (None for pivots).
    pub shape: Option<Shape>,
    /// Fallback color while the texture is unresolved.
    pub color: [f32; 3],
    /// Texture slot, if any.
    pub texture: Option<TextureId>,
    /// Whether the picking ray tests this node. Only planet bodies are pickable.
    pub pickable: bool,
}

impl Node {
    /// Create a new node with the given ID at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            tag: "",
            active: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            shape: None,
            color: [1.0, 1.0, 1.0],
            texture: None,
            pickable: false,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn pickable(mut self) -> Self {
        self.pickable = true;
        self
    }
}
