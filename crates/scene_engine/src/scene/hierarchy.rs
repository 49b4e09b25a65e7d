//! Node arena and transform propagation
//!
//! All nodes live in a slot-map arena and refer to each other through
//! generational [`NodeId`] handles, so a handle to a removed node resolves
//! to `None` instead of dangling. Parent/child links form a tree: a node
//! appears in its parent's child list exactly when its parent field names
//! that node, and in at most one child list at a time.

use slotmap::{new_key_type, SlotMap};
use thiserror::Error;

use crate::foundation::math::{Mat4, Quat, Vec3};
use crate::scene::Transform;

new_key_type! {
    /// Stable handle to a node in a [`SceneGraph`]
    pub struct NodeId;
}

/// Errors reported by hierarchy mutations
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// A node handle did not resolve: the node was removed or belongs to
    /// a different graph
    #[error("node handle is no longer valid")]
    InvalidNode,

    /// Attaching the node would make it its own ancestor
    #[error("attachment would create a cycle in the hierarchy")]
    CircularHierarchy,
}

/// Scene graph configuration
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Reject attachments that would create a cycle
    ///
    /// Disabling restores the unchecked behavior where cycles are caller
    /// responsibility; an update on a cyclic graph will not terminate.
    pub check_cycles: bool,

    /// Initial child-list capacity allocated per node
    pub child_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            check_cycles: true,
            child_capacity: 4,
        }
    }
}

/// A vertex in the transform hierarchy
///
/// Owns a local [`Transform`] and caches the world pose computed by the
/// most recent [`SceneGraph::update`] pass that reached it. Structural
/// fields (parent, children) are managed exclusively by the graph.
#[derive(Debug, Clone)]
pub struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    local: Transform,
    world_position: Vec3,
    world_orientation: Quat,
    world_matrix: Mat4,
}

impl Node {
    fn new(parent: Option<NodeId>, child_capacity: usize) -> Self {
        Self {
            parent,
            children: Vec::with_capacity(child_capacity),
            local: Transform::identity(),
            world_position: Vec3::zeros(),
            world_orientation: Quat::identity(),
            world_matrix: Mat4::identity(),
        }
    }

    /// Handle of the parent node, if any
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child handles in insertion order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The local transform
    pub fn local(&self) -> &Transform {
        &self.local
    }

    /// Mutable access to the local transform
    ///
    /// Mutations take effect on cached world state at the next update
    /// pass reaching this node.
    pub fn local_mut(&mut self) -> &mut Transform {
        &mut self.local
    }

    /// Matrix form of the local transform
    pub fn local_matrix(&self) -> Mat4 {
        self.local.local_matrix()
    }

    /// World-space position as of the last update reaching this node
    pub fn world_position(&self) -> Vec3 {
        self.world_position
    }

    /// World-space orientation as of the last update reaching this node
    pub fn world_orientation(&self) -> Quat {
        self.world_orientation
    }

    /// World-space matrix as of the last update reaching this node
    pub fn world_matrix(&self) -> Mat4 {
        self.world_matrix
    }
}

/// Arena-backed transform hierarchy
///
/// Holds every node of one scene and the tree structure between them.
/// The owning application mutates local transforms, then calls
/// [`update`](Self::update) on each root once per frame, before cameras
/// and renderable bindings read world state.
#[derive(Debug)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    config: SceneConfig,
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneGraph {
    /// Create an empty scene graph with default configuration
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create an empty scene graph with custom configuration
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            config,
        }
    }

    /// Create a node, optionally attached to a parent
    ///
    /// With a parent the new node is appended to that parent's child list.
    ///
    /// # Errors
    /// [`SceneError::InvalidNode`] when the parent handle is stale.
    pub fn create_node(&mut self, parent: Option<NodeId>) -> Result<NodeId, SceneError> {
        if let Some(p) = parent {
            if !self.nodes.contains_key(p) {
                return Err(SceneError::InvalidNode);
            }
        }

        let id = self
            .nodes
            .insert(Node::new(parent, self.config.child_capacity));
        if let Some(p) = parent {
            self.nodes[p].children.push(id);
        }

        log::trace!("Created node {:?} (parent: {:?})", id, parent);
        Ok(id)
    }

    /// Attach `child` to `parent`, detaching it from any current parent first
    ///
    /// The child is appended to the end of the parent's child list.
    ///
    /// # Errors
    /// [`SceneError::InvalidNode`] when either handle is stale;
    /// [`SceneError::CircularHierarchy`] when cycle checking is enabled and
    /// `child` is `parent` or one of its ancestors.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), SceneError> {
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return Err(SceneError::InvalidNode);
        }
        if self.config.check_cycles && self.is_ancestor_or_self(child, parent) {
            return Err(SceneError::CircularHierarchy);
        }

        self.detach(child);
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);

        log::trace!("Attached node {:?} to {:?}", child, parent);
        Ok(())
    }

    /// Reparent `child` under `parent`, or detach it to a root with `None`
    ///
    /// # Errors
    /// Same conditions as [`add_child`](Self::add_child).
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<(), SceneError> {
        match parent {
            Some(p) => self.add_child(p, child),
            None => {
                if !self.nodes.contains_key(child) {
                    return Err(SceneError::InvalidNode);
                }
                self.detach(child);
                Ok(())
            }
        }
    }

    /// Remove `child` from `parent`'s child list, making it a root
    ///
    /// No-op when `child` is not a child of `parent` or either handle is
    /// stale.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let Some(p) = self.nodes.get_mut(parent) else {
            return;
        };
        let Some(index) = p.children.iter().position(|&c| c == child) else {
            return;
        };

        p.children.remove(index);
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
        }
        log::trace!("Detached node {:?} from {:?}", child, parent);
    }

    /// Detach a node from its current parent, if it has one
    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.nodes.get(child).and_then(|c| c.parent) {
            self.remove_child(parent, child);
        }
    }

    /// Remove a node and its whole subtree from the graph
    ///
    /// The node is detached from its parent's child list and every handle
    /// into the subtree is invalidated. No-op on a stale handle.
    pub fn remove_node(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(node).map(|n| n.parent) else {
            return;
        };
        if let Some(p) = parent.and_then(|p| self.nodes.get_mut(p)) {
            p.children.retain(|&c| c != node);
        }

        self.remove_subtree(node);
        log::trace!("Removed node {:?} and its subtree", node);
    }

    fn remove_subtree(&mut self, node: NodeId) {
        if let Some(removed) = self.nodes.remove(node) {
            for child in removed.children {
                self.remove_subtree(child);
            }
        }
    }

    /// Recompute world poses for a node and all of its descendants
    ///
    /// Combines the node's local transform with its parent's cached world
    /// pose (identity/origin for roots), then recurses into children in
    /// child-list order. This is the only place cached world state
    /// changes; the whole subtree is recomputed unconditionally. No-op on
    /// a stale handle.
    ///
    /// The world position is derived from the direction of the local
    /// translation rotated into parent space, scaled back by its original
    /// magnitude; a zero-length translation keeps the parent position.
    pub fn update(&mut self, node: NodeId) {
        let Some(parent) = self.nodes.get(node).map(|n| n.parent) else {
            return;
        };
        let parent_pose = parent
            .and_then(|p| self.nodes.get(p))
            .map(|p| (p.world_matrix, p.world_orientation, p.world_position));

        let n = &mut self.nodes[node];
        let local_matrix = n.local.local_matrix();
        match parent_pose {
            Some((parent_matrix, parent_orientation, parent_position)) => {
                n.world_matrix = parent_matrix * local_matrix;
                n.world_orientation = parent_orientation * n.local.rotation;

                let translation = n.local.translation;
                let length = translation.magnitude();
                n.world_position = if length > 0.0 {
                    parent_position + (parent_orientation * (translation / length)) * length
                } else {
                    parent_position
                };
            }
            None => {
                n.world_matrix = local_matrix;
                n.world_orientation = n.local.rotation;
                n.world_position = n.local.translation;
            }
        }

        let child_count = self.nodes[node].children.len();
        for i in 0..child_count {
            let child = self.nodes[node].children[i];
            self.update(child);
        }
    }

    /// Update every root node in the graph
    ///
    /// Root order is unspecified; roots are independent, so it does not
    /// affect the result.
    pub fn update_all(&mut self) {
        let roots: Vec<NodeId> = self.roots().collect();
        for root in roots {
            self.update(root);
        }
    }

    /// Iterate over the handles of all parentless nodes
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| id)
    }

    /// Borrow a node by handle
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Mutably borrow a node by handle
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether the handle still resolves to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes in the graph
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// True when `candidate` is `start` or one of its ancestors
    fn is_ancestor_or_self(&self, candidate: NodeId, start: NodeId) -> bool {
        let mut current = Some(start);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent);
        }
        false
    }
}
