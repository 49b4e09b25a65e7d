//! Camera derivation from a node's world pose
//!
//! A camera is a component referencing a node by handle, not a node
//! subtype: camera state stays out of the generic tree and the view
//! matrix is derived by an explicit update after the hierarchy pass.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3};
use crate::scene::{NodeId, SceneGraph};

/// Camera deriving its view matrix from a scene node
///
/// The projection matrix is independent of the hierarchy and set
/// explicitly; the view matrix is recomputed from the referenced node's
/// resolved world pose on every [`update`](Self::update). Without an
/// attached node the view matrix is the identity.
#[derive(Debug, Clone)]
pub struct Camera {
    node: Option<NodeId>,
    projection: Mat4,
    view: Mat4,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Create a detached camera with identity matrices
    pub fn new() -> Self {
        Self {
            node: None,
            projection: Mat4::identity(),
            view: Mat4::identity(),
        }
    }

    /// Create a camera attached to a node
    pub fn with_node(node: NodeId) -> Self {
        Self {
            node: Some(node),
            ..Self::new()
        }
    }

    /// Attach the camera to a node
    pub fn set_node(&mut self, node: NodeId) {
        self.node = Some(node);
    }

    /// Detach the camera; the view matrix becomes identity on next update
    pub fn clear_node(&mut self) {
        self.node = None;
    }

    /// Handle of the node this camera follows, if any
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Set a perspective projection
    ///
    /// `fov_y` is the vertical field of view in radians.
    pub fn set_perspective_projection(&mut self, fov_y: f32, aspect: f32, near: f32, far: f32) {
        self.projection = Mat4::perspective(fov_y, aspect, near, far);
        log::trace!(
            "camera perspective projection set: fov {:.3} rad, aspect {:.3}",
            fov_y,
            aspect
        );
    }

    /// Set an orthographic projection
    pub fn set_ortho_projection(
        &mut self,
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        near: f32,
        far: f32,
    ) {
        self.projection = Mat4::orthographic(left, right, top, bottom, near, far);
        log::trace!("camera orthographic projection set");
    }

    /// Recompute the view matrix from the referenced node's world pose
    ///
    /// Looks along the node's rotated local -Z axis with the rotated
    /// local +Y as up. Call after the hierarchy update pass for the
    /// frame. A detached camera (or a stale node handle) yields the
    /// identity view.
    pub fn update(&mut self, graph: &SceneGraph) {
        let Some(node) = self.node.and_then(|id| graph.node(id)) else {
            self.view = Mat4::identity();
            return;
        };

        let position = node.world_position();
        let orientation = node.world_orientation();
        let forward = orientation * Vec3::new(0.0, 0.0, -1.0);
        let up = orientation * Vec3::new(0.0, 1.0, 0.0);

        self.view = Mat4::look_at(position, position + forward, up);
    }

    /// View matrix as of the last update
    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    /// Current projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// Combined view-projection matrix, including the Vulkan coordinate
    /// transform between view and projection
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection * Mat4::vulkan_coordinate_transform() * self.view
    }
}
