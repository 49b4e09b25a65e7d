//! Scene transform hierarchy
//!
//! Provides the tree of spatial nodes whose world-space poses are
//! recomputed by composing ancestor transforms, plus the camera and
//! renderable bindings that consume those poses.
//!
//! ## Architecture
//!
//! ```text
//! Application (mutates local transforms)
//!      ↓
//! SceneGraph::update (per root, once per frame)
//!      ↓
//! Camera / RenderObject (read world poses)
//!      ↓
//! Renderer (external)
//! ```
//!
//! The frame contract is strict but simple: finish all local-transform
//! mutations for the frame, call [`SceneGraph::update`] on every root
//! whose subtree may have changed, then read world state. World state is
//! correct only immediately after the most recent update that reached a
//! node; mutations silently stale it until the next pass. Every update
//! recomputes its whole subtree unconditionally; there is no dirty
//! tracking, which keeps recomputation cost predictable for small scenes
//! and leaves incremental invalidation as a future optimization.

mod camera;
mod hierarchy;
mod render_object;
mod transform;

pub use camera::Camera;
pub use hierarchy::{Node, NodeId, SceneConfig, SceneError, SceneGraph};
pub use render_object::{MeshId, RenderObject};
pub use transform::Transform;

#[cfg(test)]
mod tests;
