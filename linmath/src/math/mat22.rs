use crate::math::square::impl_square_ops;
use crate::math::*;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Mat22(pub [f32; 4]);

impl Mat22 {
    pub const ZERO: Mat22 = Mat22([0.0; 4]);

    pub const IDENTITY: Mat22 = Mat22([
        1.0, 0.0, //
        0.0, 1.0, //
    ]);

    pub fn identity() -> Mat22 {
        Mat22::IDENTITY
    }

    pub fn scale(s: Vec2) -> Mat22 {
        Mat22([
            s.x, 0.0, //
            0.0, s.y, //
        ])
    }
}

impl Determinant for Mat22 {
    fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0] * m[3] - m[1] * m[2]
    }
}

impl SquareMatrix for Mat22 {
    const DIM: usize = 2;
    type Minor = f32;

    fn zero() -> Mat22 {
        Mat22::ZERO
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.0[row * 2 + col]
    }

    fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.0[row * 2 + col]
    }

    // The only element left is the diagonally opposite one.
    fn minor(&self, row: usize, col: usize) -> f32 {
        assert!(row < 2 && col < 2, "minor ({row}, {col}) out of range for a 2x2 matrix");
        self.0[(1 - row) * 2 + (1 - col)]
    }
}

impl_square_ops!(Mat22, Vec2, 2);
