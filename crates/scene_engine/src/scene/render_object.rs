//! Renderable binding of a mesh resource to a scene node
//!
//! Pairs an externally-owned mesh with a node handle and an independent
//! scale. The scale is deliberately outside the hierarchy: it does not
//! propagate to children and plays no part in node invariants.

use crate::foundation::math::{Mat4, Vec3};
use crate::scene::{NodeId, SceneGraph};

/// Identifier for an externally-managed mesh resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Binding consumed by the renderer once per frame
///
/// The final matrix for a draw is the node's world matrix times the
/// binding's scale matrix (see [`world_matrix`](Self::world_matrix)).
#[derive(Debug, Clone)]
pub struct RenderObject {
    mesh: Option<MeshId>,
    node: Option<NodeId>,
    scale: Mat4,
    /// Whether this object should be drawn
    pub visible: bool,
}

impl Default for RenderObject {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderObject {
    /// Create an unbound, visible render object with unit scale
    pub fn new() -> Self {
        Self {
            mesh: None,
            node: None,
            scale: Mat4::identity(),
            visible: true,
        }
    }

    /// Builder pattern: bind a mesh resource
    pub fn with_mesh(mut self, mesh: MeshId) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Builder pattern: bind a scene node
    pub fn with_node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }

    /// Bind a mesh resource
    pub fn set_mesh(&mut self, mesh: MeshId) {
        self.mesh = Some(mesh);
    }

    /// Bind a scene node
    pub fn set_node(&mut self, node: NodeId) {
        self.node = Some(node);
    }

    /// Set a non-uniform scale, rebuilding the scale matrix
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = Mat4::new_nonuniform_scaling(&scale);
    }

    /// Set a uniform scale on all three axes
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.set_scale(Vec3::new(scale, scale, scale));
    }

    /// Bound mesh resource, if any
    pub fn mesh(&self) -> Option<MeshId> {
        self.mesh
    }

    /// Bound scene node, if any
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// The scale matrix, independent of the hierarchy
    pub fn scale_matrix(&self) -> Mat4 {
        self.scale
    }

    /// Whether the renderer should draw this object
    pub fn should_render(&self) -> bool {
        self.visible
    }

    /// Final world matrix for rendering: node world matrix times scale
    ///
    /// Uses the node's cached world pose from the last update pass; an
    /// unbound or stale node handle contributes the identity.
    pub fn world_matrix(&self, graph: &SceneGraph) -> Mat4 {
        let node_matrix = self
            .node
            .and_then(|id| graph.node(id))
            .map_or_else(Mat4::identity, |node| node.world_matrix());
        node_matrix * self.scale
    }
}
