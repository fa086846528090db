//! A 4x4 transformation matrix stored in row-major order.
//!
//! The draw traversal keeps one working transform per node: it copies the
//! parent's transform, translates into the node's render-space frame, lets
//! animations compose their contributions, and hands the finished matrix to
//! the draw commands. The matrix is `Pod` so a GPU consumer can upload it
//! byte-wise.

use bytemuck::{Pod, Zeroable};

/// A 4x4 transformation matrix in row-major order.
///
/// Translation lives in the last column (`data[3]`, `data[7]`, `data[11]`).
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Transform {
    /// Matrix data in row-major order: [row0, row1, row2, row3]
    pub data: [f32; 16],
}

impl Transform {
    /// Identity matrix (no transformation)
    pub const IDENTITY: Self = Self {
        data: [
            1.0, 0.0, 0.0, 0.0, // row 0
            0.0, 1.0, 0.0, 0.0, // row 1
            0.0, 0.0, 1.0, 0.0, // row 2
            0.0, 0.0, 0.0, 1.0, // row 3
        ],
    };

    /// Create an identity transform
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a 2D translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self::translate_xyz(x, y, 0.0)
    }

    /// Create a translation transform with a depth component
    pub fn translate_xyz(x: f32, y: f32, z: f32) -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, x, // row 0
                0.0, 1.0, 0.0, y, // row 1
                0.0, 0.0, 1.0, z, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Create a rotation transform around the Z axis (2D rotation)
    pub fn rotate(angle_radians: f32) -> Self {
        let cos = angle_radians.cos();
        let sin = angle_radians.sin();
        Self {
            data: [
                cos, -sin, 0.0, 0.0, // row 0
                sin, cos, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Create a non-uniform scale transform
    pub fn scale_xy(sx: f32, sy: f32) -> Self {
        Self {
            data: [
                sx, 0.0, 0.0, 0.0, // row 0
                0.0, sy, 0.0, 0.0, // row 1
                0.0, 0.0, 1.0, 0.0, // row 2
                0.0, 0.0, 0.0, 1.0, // row 3
            ],
        }
    }

    /// Create a uniform scale transform
    pub fn scale(s: f32) -> Self {
        Self::scale_xy(s, s)
    }

    /// Compose this transform with another: self * other.
    /// Applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Transform {
        let a = &self.data;
        let b = &other.data;

        // Row-major indexing: element at row i, col j is at index i*4 + j
        let mut result = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[i * 4 + k] * b[k * 4 + j];
                }
                result[i * 4 + j] = sum;
            }
        }

        Transform { data: result }
    }

    /// Post-multiply a translation in place: `self = self * T(x, y, z)`.
    ///
    /// The translation happens in the space this transform already maps
    /// into, which is what the traversal needs when stepping from a parent
    /// frame into a child frame. Touches only the last column.
    pub fn translate_by(&mut self, x: f32, y: f32, z: f32) {
        let d = &mut self.data;
        d[3] += d[0] * x + d[1] * y + d[2] * z;
        d[7] += d[4] * x + d[5] * y + d[6] * z;
        d[11] += d[8] * x + d[9] * y + d[10] * z;
        d[15] += d[12] * x + d[13] * y + d[14] * z;
    }

    /// Compose another transform onto this one in place: `self = self * other`.
    pub fn apply(&mut self, other: &Transform) {
        *self = self.then(other);
    }

    /// Transform a 2D point by this matrix
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        // Homogeneous coordinates: (x, y, 0, 1)
        let new_x = self.data[0] * x + self.data[1] * y + self.data[3];
        let new_y = self.data[4] * x + self.data[5] * y + self.data[7];
        (new_x, new_y)
    }

    /// The depth translation accumulated in the last column
    pub fn depth_offset(&self) -> f32 {
        self.data[11]
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
