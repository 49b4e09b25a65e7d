//! Local pose for scene nodes
//!
//! A `Transform` is a node's pose relative to its parent: a translation
//! vector and a rotation quaternion. Mutating a transform never touches
//! cached world state; only [`SceneGraph::update`](crate::scene::SceneGraph::update)
//! does.

use crate::foundation::math::{Mat4, Quat, Unit, Vec3};

/// Local translation and rotation of a scene node
///
/// The rotation is stored as a unit quaternion and stays unit length
/// through every mutation: absolute setters construct from angle-axis and
/// relative rotation composes by quaternion multiplication, both of which
/// preserve normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// Translation relative to the parent node
    pub translation: Vec3,

    /// Rotation relative to the parent node
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::zeros(),
            rotation: Quat::identity(),
        }
    }
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self::default()
    }

    /// Create a transform with only a translation
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    /// Replace the translation
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
    }

    /// Add to the current translation
    pub fn translate(&mut self, offset: Vec3) {
        self.translation += offset;
    }

    /// Replace the rotation with an angle-axis rotation
    ///
    /// `angle` is in radians; `axis` need not be pre-normalized.
    pub fn set_rotation(&mut self, angle: f32, axis: Vec3) {
        self.rotation = Quat::from_axis_angle(&Unit::new_normalize(axis), angle);
    }

    /// Post-multiply the current rotation by an angle-axis rotation
    ///
    /// Composes as `rotation = rotation * angle_axis(angle, axis)`, so the
    /// new rotation is applied in the node's current local frame.
    pub fn rotate(&mut self, angle: f32, axis: Vec3) {
        self.rotation = self.rotation * Quat::from_axis_angle(&Unit::new_normalize(axis), angle);
    }

    /// Matrix form of this pose
    ///
    /// Built as rotation times translation, so the translation is applied
    /// in the pre-rotation frame. World matrices compose this with the
    /// parent's world matrix on the left.
    pub fn local_matrix(&self) -> Mat4 {
        self.rotation.to_homogeneous() * Mat4::new_translation(&self.translation)
    }
}
