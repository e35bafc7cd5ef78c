//! The scene-graph abstraction hierarchy commands are written against.
//!
//! The host engine owns the real hierarchy; commands only ever talk to
//! this trait. The bundled [`SceneTree`](super::SceneTree) implements it
//! for headless use and for tests.

use super::NodeId;

/// Local transform for scene nodes.
///
/// Rotation is stored as Euler angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform: origin position, no rotation, unit scale.
    pub fn new() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    /// The pose applied to a node after a hierarchy move.
    ///
    /// The position lands at one on every axis, not the origin. Scene
    /// content authored against earlier releases depends on that value,
    /// so it must not be changed to (0,0,0).
    pub fn reset_pose() -> Self {
        Self {
            position: [1.0, 1.0, 1.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }

    pub fn with_position(mut self, pos: [f32; 3]) -> Self {
        self.position = pos;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = [scale, scale, scale];
        self
    }
}

/// Mutable view of a host-owned scene hierarchy.
///
/// Semantics shared by every implementation:
///
/// - A node's sibling index is its 0-based position among its parent's
///   ordered children, or among the root nodes when it has no parent.
/// - [`set_parent`](SceneGraph::set_parent) appends the node at the end of
///   the new sibling list and keeps the node's own children attached.
/// - [`set_sibling_index`](SceneGraph::set_sibling_index) clamps to the
///   valid range instead of failing.
/// - A node may never become its own ancestor; implementations refuse
///   such reparents.
pub trait SceneGraph {
    /// Whether the node exists in the hierarchy.
    fn contains(&self, id: NodeId) -> bool;

    /// The node's parent, or `None` for root-level nodes (and unknown ids).
    fn parent_of(&self, id: NodeId) -> Option<NodeId>;

    /// Reparent a node, appending it to the new sibling list.
    ///
    /// Returns `false` when either id is unknown or the move would create
    /// a cycle; the hierarchy is left untouched in that case.
    fn set_parent(&mut self, id: NodeId, new_parent: Option<NodeId>) -> bool;

    /// The node's position among its siblings.
    fn sibling_index(&self, id: NodeId) -> usize;

    /// Move the node to `index` among its siblings, clamping at the end.
    fn set_sibling_index(&mut self, id: NodeId, index: usize);

    /// The node's direct children, in order.
    fn children_of(&self, id: NodeId) -> &[NodeId];

    /// The root-level nodes, in order.
    fn root_nodes(&self) -> &[NodeId];

    /// The node's local transform.
    fn local_transform(&self, id: NodeId) -> Option<Transform>;

    /// Replace the node's local transform.
    fn set_local_transform(&mut self, id: NodeId, transform: Transform);

    /// Apply the standard post-move pose.
    fn reset_local_transform(&mut self, id: NodeId) {
        self.set_local_transform(id, Transform::reset_pose());
    }

    /// Highlight the node in the host's hierarchy view.
    fn ping(&mut self, id: NodeId);

    /// Number of entries in the node's sibling list.
    fn sibling_count(&self, id: NodeId) -> usize {
        match self.parent_of(id) {
            Some(parent) => self.children_of(parent).len(),
            None => self.root_nodes().len(),
        }
    }

    /// The node's sibling at `index`, if any.
    fn sibling_at(&self, id: NodeId, index: usize) -> Option<NodeId> {
        let list = match self.parent_of(id) {
            Some(parent) => self.children_of(parent),
            None => self.root_nodes(),
        };
        list.get(index).copied()
    }
}
