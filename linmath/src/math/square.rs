//! Shared skeleton of the square matrix types.
//!
//! Every `MatNN` stores its elements in a row-major `[f32; N * N]` and is
//! addressed as `(row, col)`. Minors reduce an N×N matrix to an (N-1)×(N-1)
//! one; the 2×2 case bottoms out in a plain `f32`, which is its own
//! determinant. Determinant, cofactor, adjugate and inverse are written once
//! here on top of that reduction.

use tracing::trace;

pub trait Determinant {
    fn determinant(&self) -> f32;
}

// 1x1
impl Determinant for f32 {
    fn determinant(&self) -> f32 {
        *self
    }
}

pub trait SquareMatrix: Copy + Determinant + std::ops::Div<f32, Output = Self> {
    const DIM: usize;

    /// What is left after deleting one row and one column.
    type Minor: Determinant;

    fn zero() -> Self;

    fn at(&self, row: usize, col: usize) -> f32;

    fn at_mut(&mut self, row: usize, col: usize) -> &mut f32;

    /// Deletes `row` and `col`, keeping the relative order of what remains.
    ///
    /// Panics if either index is out of range.
    fn minor(&self, row: usize, col: usize) -> Self::Minor;

    fn transpose(&self) -> Self {
        let mut result = Self::zero();
        for row in 0..Self::DIM {
            for col in 0..Self::DIM {
                *result.at_mut(row, col) = self.at(col, row);
            }
        }
        result
    }

    /// `(-1)^(row + col) * det(minor(row, col))`
    fn cofactor(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).determinant()
    }

    /// Transpose of the cofactor matrix, so that `A * adj(A) = det(A) * I`.
    fn adjugate(&self) -> Self {
        let mut result = Self::zero();
        for row in 0..Self::DIM {
            for col in 0..Self::DIM {
                *result.at_mut(row, col) = self.cofactor(col, row);
            }
        }
        result
    }

    /// Returns the inverse together with an "is invertible" flag.
    ///
    /// A matrix whose determinant is exactly zero is returned unchanged with
    /// the flag cleared; callers that ignore the flag get the original matrix
    /// back. No epsilon is applied.
    fn inverse(&self) -> (Self, bool) {
        let det = self.determinant();
        if det == 0.0 {
            trace!(dim = Self::DIM, "singular matrix, inverse falls back to the input");
            return (*self, false);
        }
        (self.adjugate() / det, true)
    }

    fn try_inverse(&self) -> Option<Self> {
        match self.inverse() {
            (inverse, true) => Some(inverse),
            _ => None,
        }
    }

    /// Laplace expansion along the first row.
    fn laplace_determinant(&self) -> f32 {
        (0..Self::DIM).map(|col| self.at(0, col) * self.cofactor(0, col)).sum()
    }
}

/// Copies everything except `row` and `col` of `m` into a smaller matrix.
pub(crate) fn extract_minor<M: SquareMatrix, S: SquareMatrix>(m: &M, row: usize, col: usize) -> S {
    assert!(
        row < M::DIM && col < M::DIM,
        "minor ({row}, {col}) out of range for a {n}x{n} matrix",
        n = M::DIM
    );
    debug_assert_eq!(S::DIM + 1, M::DIM);

    let mut result = S::zero();
    for (r, src_row) in (0..M::DIM).filter(|&i| i != row).enumerate() {
        for (c, src_col) in (0..M::DIM).filter(|&j| j != col).enumerate() {
            *result.at_mut(r, c) = m.at(src_row, src_col);
        }
    }
    result
}

/// Element-wise operators, products and indexing common to `Mat22`, `Mat33` and `Mat44`.
macro_rules! impl_square_ops {
    ($mat:ident, $vec:ident, $n:literal) => {
        impl $mat {
            pub const fn splat(value: f32) -> $mat {
                $mat([value; $n * $n])
            }

            pub fn checked_div(self, scalar: f32) -> Result<$mat, $crate::MathError> {
                if scalar == 0.0 {
                    return Err($crate::MathError::DivisionByZero);
                }
                Ok(self * (1.0 / scalar))
            }
        }

        impl std::ops::Index<(usize, usize)> for $mat {
            type Output = f32;
            fn index(&self, (row, col): (usize, usize)) -> &f32 {
                &self.0[row * $n + col]
            }
        }

        impl std::ops::IndexMut<(usize, usize)> for $mat {
            fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
                &mut self.0[row * $n + col]
            }
        }

        // -Mat
        impl std::ops::Neg for $mat {
            type Output = $mat;
            fn neg(self) -> $mat {
                $mat(self.0.map(|e| -e))
            }
        }

        // Mat + Mat
        impl std::ops::Add for $mat {
            type Output = $mat;
            fn add(mut self, other: $mat) -> $mat {
                self.0.iter_mut().zip(other.0).for_each(|(a, b)| *a += b);
                self
            }
        }

        // Mat - Mat
        impl std::ops::Sub for $mat {
            type Output = $mat;
            fn sub(mut self, other: $mat) -> $mat {
                self.0.iter_mut().zip(other.0).for_each(|(a, b)| *a -= b);
                self
            }
        }

        // Mat * f32
        impl std::ops::Mul<f32> for $mat {
            type Output = $mat;
            fn mul(self, scalar: f32) -> $mat {
                $mat(self.0.map(|e| e * scalar))
            }
        }

        // f32 * Mat
        impl std::ops::Mul<$mat> for f32 {
            type Output = $mat;
            fn mul(self, m: $mat) -> $mat {
                m * self
            }
        }

        // Mat / f32
        impl std::ops::Div<f32> for $mat {
            type Output = $mat;
            fn div(self, scalar: f32) -> $mat {
                assert!(scalar != 0.0, concat!(stringify!($mat), " divided by zero"));
                self * (1.0 / scalar)
            }
        }

        impl std::ops::AddAssign for $mat {
            fn add_assign(&mut self, other: $mat) {
                *self = *self + other;
            }
        }

        impl std::ops::SubAssign for $mat {
            fn sub_assign(&mut self, other: $mat) {
                *self = *self - other;
            }
        }

        impl std::ops::MulAssign<f32> for $mat {
            fn mul_assign(&mut self, scalar: f32) {
                *self = *self * scalar;
            }
        }

        impl std::ops::DivAssign<f32> for $mat {
            fn div_assign(&mut self, scalar: f32) {
                *self = *self / scalar;
            }
        }

        // Mat = Mat * Mat
        impl std::ops::Mul for $mat {
            type Output = $mat;
            fn mul(self, other: $mat) -> $mat {
                let mut result = [0.0f32; $n * $n];
                for row in 0..$n {
                    for col in 0..$n {
                        for k in 0..$n {
                            result[row * $n + col] += self.0[row * $n + k] * other.0[k * $n + col];
                        }
                    }
                }
                $mat(result)
            }
        }

        // Mat = &Mat * &Mat
        impl std::ops::Mul<&$mat> for &$mat {
            type Output = $mat;
            fn mul(self, other: &$mat) -> $mat {
                *self * *other
            }
        }

        impl std::ops::MulAssign for $mat {
            fn mul_assign(&mut self, other: $mat) {
                *self = *self * other;
            }
        }

        // Vec = Mat * Vec, column vector on the right
        impl std::ops::Mul<$vec> for $mat {
            type Output = $vec;
            fn mul(self, v: $vec) -> $vec {
                let mut result = $vec::ZERO;
                for row in 0..$n {
                    for col in 0..$n {
                        result[row] += self.0[row * $n + col] * v[col];
                    }
                }
                result
            }
        }

        // Vec = Vec * Mat, row vector on the left
        impl std::ops::Mul<$mat> for $vec {
            type Output = $vec;
            fn mul(self, m: $mat) -> $vec {
                let mut result = $vec::ZERO;
                for col in 0..$n {
                    for row in 0..$n {
                        result[col] += self[row] * m.0[row * $n + col];
                    }
                }
                result
            }
        }
    };
}

pub(crate) use impl_square_ops;

