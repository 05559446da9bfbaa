// core/graph.rs
//
// Transform hierarchy — tracks parent-child relationships by NodeId.
// Decoupled from Node/Scene internals: the graph owns local transforms,
// propagation writes world transforms back into the scene.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.register_with(pivot, LocalTransform::new());
//   graph.register_with(body, LocalTransform::new().with_offset(Vec3::new(r, 0.0, 0.0)));
//   graph.set_parent(body, Some(pivot));
//   graph.propagate(&mut scene);

use std::collections::HashMap;

use glam::{EulerRot, Quat, Vec3};

use crate::api::types::NodeId;
use crate::core::scene::Scene;

/// Local transform data for nodes in the hierarchy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTransform {
    /// Position relative to parent (or world if no parent).
    pub offset: Vec3,
    /// Rotation relative to parent, Euler angles in radians.
    pub rotation: Vec3,
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }
}

#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: LocalTransform,
}

/// Transform hierarchy graph — manages parent-child relationships.
///
/// Orbit pivots are roots rotated each frame; planet bodies and rings
/// hang off them at a fixed orbit-radius offset.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<NodeId, TransformNode>,
    /// Nodes with no parent (top-level).
    roots: Vec<NodeId>,
    /// Set when hierarchy or locals change, cleared after propagate.
    dirty: bool,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node with a specific local transform.
    pub fn register_with(&mut self, id: NodeId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of a node. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) {
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
            self.roots.retain(|&r| r != child);
        } else if !self.roots.contains(&child) {
            self.roots.push(child);
        }

        self.dirty = true;
    }

    /// Get the local transform for a node.
    pub fn get_local(&self, id: NodeId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the local transform mutably. Marks the graph dirty.
    pub fn get_local_mut(&mut self, id: NodeId) -> Option<&mut LocalTransform> {
        self.dirty = true;
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    /// Get the parent of a node.
    pub fn get_parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of a node.
    pub fn get_children(&self, id: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    /// Propagate transforms from roots down through the hierarchy.
    /// Updates Node.pos/rotation from parent transforms.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }

        let roots: Vec<NodeId> = self.roots.clone();
        for root in roots {
            self.propagate_recursive(root, Vec3::ZERO, Quat::IDENTITY, Vec3::ZERO, scene);
        }

        self.dirty = false;
    }

    fn propagate_recursive(
        &self,
        id: NodeId,
        parent_pos: Vec3,
        parent_rot: Quat,
        parent_euler: Vec3,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = &node.local;

        let world_pos = parent_pos + parent_rot * local.offset;
        let world_rot = parent_rot * local.quat();
        // Euler sum is exact for this scene's shallow chains (pivots rotate
        // only about Y, rings tilt only about X at the leaf).
        let world_euler = parent_euler + local.rotation;

        if let Some(n) = scene.get_mut(id) {
            n.pos = world_pos;
            n.rotation = world_euler;
        }

        let children: Vec<NodeId> = node.children.clone();
        for child in children {
            self.propagate_recursive(child, world_pos, world_rot, world_euler, scene);
        }
    }

    /// Check if the hierarchy has pending changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of nodes in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
