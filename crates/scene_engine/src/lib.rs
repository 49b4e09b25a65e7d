//! # Scene Engine
//!
//! A scene transform hierarchy core for 3D applications.
//!
//! ## Features
//!
//! - **Transform Hierarchy**: Arena-backed tree of nodes with recursive
//!   world-pose propagation
//! - **Camera Derivation**: View and projection matrices computed from a
//!   node's resolved world pose
//! - **Renderable Bindings**: Mesh/node pairings with non-propagated scale,
//!   ready for renderer consumption
//! - **Stable Handles**: Generational node keys instead of raw references
//!
//! ## Quick Start
//!
//! ```rust
//! use scene_engine::prelude::*;
//!
//! fn main() -> Result<(), SceneError> {
//!     let mut graph = SceneGraph::new();
//!     let root = graph.create_node(None)?;
//!     let child = graph.create_node(Some(root))?;
//!
//!     graph.node_mut(child)
//!         .ok_or(SceneError::InvalidNode)?
//!         .local_mut()
//!         .set_translation(Vec3::new(2.0, 0.0, 0.0));
//!
//!     graph.update(root);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod scene;

pub use scene::{Camera, MeshId, Node, NodeId, RenderObject, SceneConfig, SceneError, SceneGraph, Transform};

/// Common imports for engine users
pub mod prelude {
    pub use crate::foundation::{
        math::{Mat4, Mat4Ext, Quat, Vec3},
        time::Timer,
    };
    pub use crate::scene::{
        Camera, MeshId, Node, NodeId, RenderObject, SceneConfig, SceneError, SceneGraph, Transform,
    };
}
