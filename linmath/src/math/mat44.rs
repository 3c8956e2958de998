use crate::MathError;
use crate::math::square::{extract_minor, impl_square_ops};
use crate::math::*;
use bytemuck::{Pod, Zeroable};

/// Row-major 4x4 matrix.
///
/// Points are row vectors transformed as `p * M`, so `A * B` applies `A`
/// first and the translation lives in the bottom row.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Mat44(pub [f32; 16]);

impl Mat44 {
    pub const ZERO: Mat44 = Mat44([0.0; 16]);

    pub const IDENTITY: Mat44 = Mat44([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);

    pub fn identity() -> Mat44 {
        Mat44::IDENTITY
    }

    pub fn scale(s: Vec3) -> Mat44 {
        Mat44([
            s.x, 0.0, 0.0, 0.0, //
            0.0, s.y, 0.0, 0.0, //
            0.0, 0.0, s.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn translate(t: Vec3) -> Mat44 {
        Mat44([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            t.x, t.y, t.z, 1.0,
        ])
    }

    // +Y -> +Z
    pub fn rotate_x(degrees: f32) -> Mat44 {
        let (sin, cos) = radians(degrees).sin_cos();
        Mat44([
            1.0, 0.0, 0.0, 0.0, //
            0.0, cos, sin, 0.0, //
            0.0, -sin, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    // +Z -> +X
    pub fn rotate_y(degrees: f32) -> Mat44 {
        let (sin, cos) = radians(degrees).sin_cos();
        Mat44([
            cos, 0.0, -sin, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            sin, 0.0, cos, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    // +X -> +Y
    pub fn rotate_z(degrees: f32) -> Mat44 {
        let (sin, cos) = radians(degrees).sin_cos();
        Mat44([
            cos, sin, 0.0, 0.0, //
            -sin, cos, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Rotation by `degrees` around `axis`, which must already be normalized.
    pub fn rotate(axis: Vec3, degrees: f32) -> Mat44 {
        let (sin, cos) = radians(degrees).sin_cos();
        let t = 1.0 - cos;
        let Vec3 { x, y, z } = axis;
        Mat44([
            x * x * t + cos,
            x * y * t + z * sin,
            x * z * t - y * sin,
            0.0, //
            x * y * t - z * sin,
            y * y * t + cos,
            y * z * t + x * sin,
            0.0, //
            x * z * t + y * sin,
            y * z * t - x * sin,
            z * z * t + cos,
            0.0, //
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }

    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat44 {
        assert!(left != right, "orthographic: left == right");
        assert!(bottom != top, "orthographic: bottom == top");
        assert!(near != far, "orthographic: near == far");
        Mat44([
            2.0 / (right - left),
            0.0,
            0.0,
            0.0, //
            0.0,
            2.0 / (top - bottom),
            0.0,
            0.0, //
            0.0,
            0.0,
            -2.0 / (far - near),
            0.0, //
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            -(far + near) / (far - near),
            1.0,
        ])
    }

    // Z: [-1, 1]
    // near -> -1
    // far  -> +1
    pub fn perspective(fov_y: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat44 {
        assert!(aspect_ratio != 0.0, "perspective: zero aspect ratio");
        assert!(near != far, "perspective: near == far");
        let f = 1.0 / (fov_y / 2.0).tan();
        Mat44([
            f / aspect_ratio,
            0.0,
            0.0,
            0.0, //
            0.0,
            f,
            0.0,
            0.0, //
            0.0,
            0.0,
            -(far + near) / (far - near),
            -1.0, //
            0.0,
            0.0,
            -2.0 * far * near / (far - near),
            0.0,
        ])
    }

    /// Maps a window-space point back into world space.
    ///
    /// `viewport` is `(x, y, width, height)`; `screen.z` is the depth in
    /// `[0, 1]`. The point goes through the inverse of `view * projection`
    /// followed by the perspective divide.
    pub fn unproject(screen: Vec3, view: &Mat44, projection: &Mat44, viewport: Vec4) -> Result<Vec3, MathError> {
        let inverse = (view * projection).try_inverse().ok_or(MathError::SingularMatrix)?;

        if viewport.z == 0.0 || viewport.w == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        let ndc = Vec4::new(
            (screen.x - viewport.x) / viewport.z * 2.0 - 1.0,
            (screen.y - viewport.y) / viewport.w * 2.0 - 1.0,
            screen.z * 2.0 - 1.0,
            1.0,
        );

        let world = ndc * inverse;
        if world.w == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(world.xyz() / world.w)
    }
}

impl Determinant for Mat44 {
    fn determinant(&self) -> f32 {
        self.laplace_determinant()
    }
}

impl SquareMatrix for Mat44 {
    const DIM: usize = 4;
    type Minor = Mat33;

    fn zero() -> Mat44 {
        Mat44::ZERO
    }

    fn at(&self, row: usize, col: usize) -> f32 {
        self.0[row * 4 + col]
    }

    fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.0[row * 4 + col]
    }

    fn minor(&self, row: usize, col: usize) -> Mat33 {
        extract_minor(self, row, col)
    }
}

impl_square_ops!(Mat44, Vec4, 4);
