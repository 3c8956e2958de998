use crate::math::square::{extract_minor, impl_square_ops};
use crate::math::*;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Mat33(pub [f32; 9]);

impl Mat33 {
    pub const ZERO: Mat33 = Mat33([0.0; 9]);

    pub const IDENTITY: Mat33 = Mat33([
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0,
    ]);

    pub fn identity() -> Mat33 {
        Mat33::IDENTITY
    }

    pub fn scale(s: Vec3) -> Mat33 {
        Mat33([
            s.x, 0.0, 0.0, //
            0.0, s.y, 0.0, //
            0.0, 0.0, s.z,
        ])
    }
}

// Rule of Sarrus
impl Determinant for Mat33 {
    fn determinant(&self) -> f32 {
        let [a, b, c, d, e, f, g, h, i] = self.0;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }
}

impl SquareMatrix for Mat33 {
    const DIM: usize = 3;
    type Minor = Mat22;

    fn zero() -> Mat33 {
        Mat33::ZERO
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.0[row * 3 + col]
    }

    fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.0[row * 3 + col]
    }

    fn minor(&self, row: usize, col: usize) -> Mat22 {
        extract_minor(self, row, col)
    }
}

impl_square_ops!(Mat33, Vec3, 3);
