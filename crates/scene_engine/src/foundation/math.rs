//! Math utilities and types
//!
//! Provides fundamental math types for 3D graphics, re-exported from
//! nalgebra under the engine's conventional aliases.
//!
//! Matrix conventions: right-handed Y-up world and view space, depth
//! mapped to [0, 1]. The Y/Z flip required by Vulkan-style NDC is kept
//! as a separate factor (see [`Mat4Ext::vulkan_coordinate_transform`])
//! so view and projection math stays in standard coordinates.

pub use nalgebra::{Matrix3, Matrix4, Quaternion, Unit, Vector3, Vector4};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with the engine's projection and view helpers
pub trait Mat4Ext {
    /// Create a perspective projection matrix
    ///
    /// `fov_y` is the vertical field of view in radians. Depth is mapped
    /// to [0, 1] with the near plane at 0.
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create an orthographic projection matrix
    ///
    /// Planes are given in view-space units; depth is mapped to [0, 1].
    fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Mat4;

    /// Create a look-at view matrix (right-handed, Y-up)
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Create the intermediate coordinate transformation for Vulkan-style
    /// NDC (flips Y and Z, leaves X untouched)
    fn vulkan_coordinate_transform() -> Mat4;

    /// Compute the normal matrix for this world matrix
    ///
    /// Transpose of the inverse of the upper 3x3, padded back to 4x4.
    /// Falls back to the untransposed upper 3x3 when the matrix is
    /// singular.
    fn normal_matrix(&self) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        let tan_half_fovy = (fov_y * 0.5).tan();

        // Standard [0, 1]-depth perspective with w = +z; no Y flip here,
        // that belongs to the Vulkan coordinate transform.
        let mut result = Mat4::zeros();
        result[(0, 0)] = 1.0 / (aspect * tan_half_fovy);
        result[(1, 1)] = 1.0 / tan_half_fovy;
        result[(2, 2)] = far / (far - near);
        result[(2, 3)] = -(near * far) / (far - near);
        result[(3, 2)] = 1.0;

        result
    }

    fn orthographic(left: f32, right: f32, top: f32, bottom: f32, near: f32, far: f32) -> Mat4 {
        let mut result = Mat4::identity();
        result[(0, 0)] = 2.0 / (right - left);
        result[(1, 1)] = 2.0 / (top - bottom);
        result[(2, 2)] = 1.0 / (far - near);
        result[(0, 3)] = -(right + left) / (right - left);
        result[(1, 3)] = -(top + bottom) / (top - bottom);
        result[(2, 3)] = -near / (far - near);

        result
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let right = forward.cross(&up).normalize();
        let camera_up = right.cross(&forward);

        let translation = Mat4::new(
            1.0, 0.0, 0.0, -eye.x,
            0.0, 1.0, 0.0, -eye.y,
            0.0, 0.0, 1.0, -eye.z,
            0.0, 0.0, 0.0, 1.0,
        );

        // Rows are the camera basis vectors; forward is negated so the
        // view looks down -Z in camera space.
        let rotation = Mat4::new(
            right.x, right.y, right.z, 0.0,
            camera_up.x, camera_up.y, camera_up.z, 0.0,
            -forward.x, -forward.y, -forward.z, 0.0,
            0.0, 0.0, 0.0, 1.0,
        );

        rotation * translation
    }

    fn vulkan_coordinate_transform() -> Mat4 {
        Mat4::new(
            1.0,  0.0,  0.0, 0.0,
            0.0, -1.0,  0.0, 0.0,
            0.0,  0.0, -1.0, 0.0,
            0.0,  0.0,  0.0, 1.0,
        )
    }

    fn normal_matrix(&self) -> Mat4 {
        let upper = self.fixed_view::<3, 3>(0, 0);
        let normal = upper
            .try_inverse()
            .unwrap_or_else(|| upper.clone_owned())
            .transpose();

        let mut result = Mat4::identity();
        for row in 0..3 {
            for col in 0..3 {
                result[(row, col)] = normal[(row, col)];
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_perspective_depth_range() {
        let proj = Mat4::perspective(constants::PI / 4.0, 16.0 / 9.0, 0.1, 100.0);

        // Near plane maps to depth 0, far plane to depth 1.
        let near = proj * Vec4::new(0.0, 0.0, 0.1, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, 100.0, 1.0);

        assert_relative_eq!(near.z / near.w, 0.0, epsilon = EPSILON);
        assert_relative_eq!(far.z / far.w, 1.0, epsilon = EPSILON);

        // w picks up +z for the perspective divide.
        assert_relative_eq!(proj[(3, 2)], 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_orthographic_maps_volume_to_ndc() {
        let proj = Mat4::orthographic(-2.0, 2.0, 1.0, -1.0, 0.0, 10.0);

        let corner = proj * Vec4::new(2.0, 1.0, 10.0, 1.0);
        assert_relative_eq!(corner.x, 1.0, epsilon = EPSILON);
        assert_relative_eq!(corner.y, 1.0, epsilon = EPSILON);
        assert_relative_eq!(corner.z, 1.0, epsilon = EPSILON);

        let center = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(center.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(center.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(center.z, 0.0, epsilon = EPSILON);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let view = Mat4::look_at(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );

        let eye = view * Vec4::new(0.0, 0.0, 3.0, 1.0);
        assert_relative_eq!(eye.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(eye.y, 0.0, epsilon = EPSILON);
        assert_relative_eq!(eye.z, 0.0, epsilon = EPSILON);

        // The target ends up in front of the camera, on -Z.
        let target = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(target.z < 0.0);
    }

    #[test]
    fn test_normal_matrix_of_rotation_is_rotation() {
        let rotation = Quat::from_axis_angle(&Vec3::y_axis(), 0.7).to_homogeneous();
        let normal = rotation.normal_matrix();

        // For a pure rotation, inverse-transpose equals the matrix itself.
        assert_relative_eq!(normal, rotation, epsilon = 1e-5);
    }
}
