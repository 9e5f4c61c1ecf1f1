use crate::out;
use glam::Vec4;
use std::ops::{Index, Mul};

/// 4x4 matrix stored as four lane vectors.
/// All functions assume row vectors.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, align(16))]
pub struct Matrix {
    /// Row 1 of the matrix.
    pub x: Vec4,
    /// Row 2 of the matrix.
    pub y: Vec4,
    /// Row 3 of the matrix.
    pub z: Vec4,
    /// Row 4 of the matrix.
    pub w: Vec4,
}

/// Multiplies every lane of `v` by `scale`.
#[inline(always)]
pub fn scale(v: Vec4, scale: f32) -> Vec4 {
    v * Vec4::splat(scale)
}

impl Matrix {
    #[inline(always)]
    pub const fn identity() -> Self {
        Self {
            x: Vec4::new(1.0, 0.0, 0.0, 0.0),
            y: Vec4::new(0.0, 1.0, 0.0, 0.0),
            z: Vec4::new(0.0, 0.0, 1.0, 0.0),
            w: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    #[inline(always)]
    pub const fn from_rows(rows: [Vec4; 4]) -> Self {
        Self {
            x: rows[0],
            y: rows[1],
            z: rows[2],
            w: rows[3],
        }
    }

    #[inline(always)]
    pub fn rows(&self) -> [Vec4; 4] {
        [self.x, self.y, self.z, self.w]
    }

    pub fn transpose_to(m: &Self, transposed: &mut Self) {
        transposed.x = Vec4::new(m.x.x, m.y.x, m.z.x, m.w.x);
        transposed.y = Vec4::new(m.x.y, m.y.y, m.z.y, m.w.y);
        transposed.z = Vec4::new(m.x.z, m.y.z, m.z.z, m.w.z);
        transposed.w = Vec4::new(m.x.w, m.y.w, m.z.w, m.w.w);
    }

    #[inline(always)]
    pub fn transpose(m: Self) -> Self {
        out!(Self::transpose_to(&m))
    }

    /// Transforms a vector with a transposed matrix.
    #[inline(always)]
    pub fn transform_transpose(v: &Vec4, m: &Self, result: &mut Vec4) {
        *result = Vec4::new(v.dot(m.x), v.dot(m.y), v.dot(m.z), v.dot(m.w));
    }

    /// Transforms a vector with a matrix.
    ///
    /// Each row is scaled by the matching lane of `v` and the scaled rows are summed.
    #[inline(always)]
    pub fn transform(v: &Vec4, m: &Self, result: &mut Vec4) {
        *result = scale(m.x, v.x) + scale(m.y, v.y) + scale(m.z, v.z) + scale(m.w, v.w);
    }
}

impl Default for Matrix {
    #[inline(always)]
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<usize> for Matrix {
    type Output = Vec4;

    #[inline(always)]
    fn index(&self, row: usize) -> &Vec4 {
        match row {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("row index {} out of range for a 4x4 matrix", row),
        }
    }
}

impl Mul<Matrix> for Vec4 {
    type Output = Vec4;

    #[inline(always)]
    fn mul(self, m: Matrix) -> Self::Output {
        out!(Matrix::transform(&self, &m))
    }
}
