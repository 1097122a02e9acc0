//! Local-to-world transform value type.
//!
//! A [`crate::mesh::Mesh`] holds a [`Transform`] by composition: geometry
//! and placement are orthogonal capabilities, so the mesh does not inherit
//! transform behavior from a scene-object base type.

use crate::math::{mat4_from_translation, mat4_translation, Mat4, Vec3};

/// A local-to-world transform, stored as a 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Mat4,
}

impl Transform {
    /// Create an identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Mat4::identity(),
        }
    }

    /// Create a transform from a 4x4 matrix.
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Get the transform matrix.
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// Replace the transform matrix.
    pub fn set_matrix(&mut self, matrix: Mat4) {
        self.matrix = matrix;
    }

    /// Reset to identity.
    pub fn set_to_identity(&mut self) {
        self.matrix = Mat4::identity();
    }

    /// Get the world-space position (translation column).
    pub fn position(&self) -> Vec3 {
        mat4_translation(&self.matrix)
    }

    /// Set the world-space position, keeping rotation and scale.
    pub fn set_position(&mut self, position: Vec3) {
        self.matrix[(0, 3)] = position.x;
        self.matrix[(1, 3)] = position.y;
        self.matrix[(2, 3)] = position.z;
    }

    /// Translate in world space.
    pub fn translate_world(&mut self, v: Vec3) {
        self.matrix = mat4_from_translation(v) * self.matrix;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
