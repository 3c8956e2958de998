use linmath::MathError;
use linmath::math::*;

macro_rules! assert_mat_near {
    ($left:expr, $right:expr, $tol:expr $(,)?) => {{
        let l = $left;
        let r = $right;
        let tol: f32 = $tol;
        if l.0.iter().zip(r.0.iter()).any(|(a, b)| (a - b).abs() > tol) {
            panic!("assertion failed: left != right within tol={}\n  left: {:?}\n right: {:?}", tol, l, r);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pm_ones() -> Mat44 {
        Mat44([
            1.0, 1.0, 1.0, -1.0, //
            1.0, 1.0, -1.0, 1.0, //
            1.0, -1.0, 1.0, 1.0, //
            -1.0, 1.0, 1.0, 1.0,
        ])
    }

    #[rstest]
    #[case(Mat22([5.0, 2.0, -7.0, -3.0]), -1.0)]
    #[case(Mat22([1.0, 0.0, 0.0, 1.0]), 1.0)]
    #[case(Mat22([2.0, 4.0, 1.0, 2.0]), 0.0)]
    #[case(Mat22([3.0, 8.0, 4.0, 6.0]), -14.0)]
    fn determinant_2x2(#[case] m: Mat22, #[case] expected: f32) {
        assert_eq!(m.determinant(), expected);
    }

    #[rstest]
    #[case(Mat33([1.0, 2.0, -1.0, 2.0, 1.0, 2.0, -1.0, 2.0, 1.0]), -16.0)]
    #[case(Mat33([6.0, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]), -306.0)]
    #[case(Mat33([2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 4.0]), 24.0)]
    #[case(Mat33([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]), 0.0)]
    fn determinant_3x3(#[case] m: Mat33, #[case] expected: f32) {
        assert_eq!(m.determinant(), expected);
        assert_eq!(m.laplace_determinant(), expected);
    }

    #[rstest]
    #[case(pm_ones(), -16.0)]
    #[case(Mat44::IDENTITY, 1.0)]
    #[case(Mat44::scale(Vec3::new(2.0, 3.0, 4.0)), 24.0)]
    #[case(Mat44(std::array::from_fn(|i| (i + 1) as f32)), 0.0)]
    #[case(Mat44([
        3.0, 2.0, 0.0, 1.0, //
        4.0, 0.0, 1.0, 2.0, //
        3.0, 0.0, 2.0, 1.0, //
        9.0, 2.0, 3.0, 1.0,
    ]), 24.0)]
    fn determinant_4x4(#[case] m: Mat44, #[case] expected: f32) {
        assert_eq!(m.determinant(), expected);
    }

    #[test]
    fn inverse_2x2_fixture() {
        let m = Mat22([5.0, 2.0, -7.0, -3.0]);
        let (inverse, ok) = m.inverse();
        assert!(ok);
        assert_eq!(inverse, Mat22([3.0, 2.0, -7.0, -5.0]));
        assert_eq!(m * inverse, Mat22::IDENTITY);
    }

    #[test]
    fn inverse_3x3_fixture() {
        let m = Mat33([
            1.0, 2.0, -1.0, //
            2.0, 1.0, 2.0, //
            -1.0, 2.0, 1.0,
        ]);
        let (inverse, ok) = m.inverse();
        assert!(ok);
        assert_eq!(
            inverse,
            Mat33([
                3.0 / 16.0,
                1.0 / 4.0,
                -5.0 / 16.0, //
                1.0 / 4.0,
                0.0,
                1.0 / 4.0, //
                -5.0 / 16.0,
                1.0 / 4.0,
                3.0 / 16.0,
            ])
        );
        assert_eq!(m * inverse, Mat33::IDENTITY);
        assert_eq!(inverse * m, Mat33::IDENTITY);
    }

    #[test]
    fn inverse_4x4_fixture() {
        let m = pm_ones();
        let (inverse, ok) = m.inverse();
        assert!(ok);
        assert_eq!(inverse, m * 0.25);
        assert_eq!(m * inverse, Mat44::IDENTITY);
        assert_eq!(inverse * m, Mat44::IDENTITY);
    }

    #[rstest]
    #[case(Mat44::translate(Vec3::new(1.0, -2.0, 3.0)))]
    #[case(Mat44::scale(Vec3::new(2.0, 0.5, -4.0)))]
    #[case(Mat44::rotate(Vec3::new(0.0, 0.6, 0.8), 33.0))]
    #[case(Mat44::rotate_x(30.0) * Mat44::translate(Vec3::new(0.0, 5.0, -1.0)))]
    #[case(Mat44::perspective(1.0, 16.0 / 9.0, 0.1, 100.0))]
    #[case(Mat44::orthographic(-4.0, 4.0, -3.0, 3.0, 0.5, 20.0))]
    fn inverse_4x4_roundtrip(#[case] m: Mat44) {
        let inverse = m.try_inverse().expect("invertible");
        assert_mat_near!(m * inverse, Mat44::IDENTITY, 1e-4);
    }

    #[rstest]
    #[case(Mat44::ZERO)]
    #[case(Mat44::splat(2.0))]
    #[case(Mat44::scale(Vec3::new(1.0, 0.0, 1.0)))]
    fn inverse_singular_returns_input(#[case] m: Mat44) {
        assert_eq!(m.inverse(), (m, false));
        assert_eq!(m.try_inverse(), None);
    }

    #[test]
    fn product_2x2_fixture() {
        assert_eq!(
            Mat22([8.0, 9.0, 5.0, -1.0]) * Mat22([-2.0, 3.0, 4.0, 0.0]),
            Mat22([20.0, 24.0, -14.0, 15.0])
        );
    }

    #[test]
    fn product_4x4_golden() {
        let a = Mat44(std::array::from_fn(|i| (i + 1) as f32));
        let b = Mat44(std::array::from_fn(|i| (i + 17) as f32));
        assert_eq!(
            a * b,
            Mat44([
                250.0, 260.0, 270.0, 280.0, //
                618.0, 644.0, 670.0, 696.0, //
                986.0, 1028.0, 1070.0, 1112.0, //
                1354.0, 1412.0, 1470.0, 1528.0,
            ])
        );
    }

    #[rstest]
    #[case(Vec3::new(1.0, 2.0, 3.0))]
    #[case(Vec3::new(-4.0, 0.0, 0.5))]
    fn translate_moves_origin(#[case] v: Vec3) {
        assert_eq!(Vec3::ZERO.as_point4() * Mat44::translate(v), v.as_point4());
    }

    #[rstest]
    #[case(Vec3::new(1.0, 2.0, 3.0))]
    #[case(Vec3::new(-4.0, 0.0, 0.5))]
    fn scale_stretches_unit(#[case] v: Vec3) {
        assert_eq!(Vec3::ONE.as_point4() * Mat44::scale(v), v.as_point4());
    }

    #[test]
    fn composition_applies_left_first() {
        // scale, then move: (1,0,0) -> (2,0,0) -> (2,5,0)
        let m = Mat44::scale(Vec3::splat(2.0)) * Mat44::translate(Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(Vec3::new(1.0, 0.0, 0.0).as_point4() * m, Vec4::new(2.0, 5.0, 0.0, 1.0));
    }

    #[test]
    fn unproject_reports_errors() {
        let viewport = Vec4::new(0.0, 0.0, 640.0, 480.0);
        let singular = Mat44::scale(Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(
            Mat44::unproject(Vec3::ZERO, &Mat44::IDENTITY, &singular, viewport),
            Err(MathError::SingularMatrix)
        );
        assert_eq!(
            Mat44::unproject(Vec3::ZERO, &Mat44::IDENTITY, &Mat44::IDENTITY, Vec4::new(0.0, 0.0, 640.0, 0.0)),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn checked_div_by_zero() {
        assert_eq!(Mat33::IDENTITY.checked_div(0.0), Err(MathError::DivisionByZero));
        assert_eq!(Mat44::IDENTITY.checked_div(2.0), Ok(Mat44::IDENTITY * 0.5));
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use proptest::prelude::*;

    fn small() -> impl Strategy<Value = f32> {
        (-6i8..=6).prop_map(f32::from)
    }

    fn mat33() -> impl Strategy<Value = Mat33> {
        prop::array::uniform9(small()).prop_map(Mat33)
    }

    fn mat44() -> impl Strategy<Value = Mat44> {
        prop::array::uniform16(small()).prop_map(Mat44)
    }

    fn vec4() -> impl Strategy<Value = Vec4> {
        prop::array::uniform4(small()).prop_map(|[x, y, z, w]| Vec4::new(x, y, z, w))
    }

    proptest! {
        #[test]
        fn transpose_is_an_involution(m in mat44()) {
            prop_assert_eq!(m.transpose().transpose(), m);
        }

        #[test]
        fn transpose_keeps_determinant(a in mat33(), b in mat44()) {
            prop_assert_eq!(a.transpose().determinant(), a.determinant());
            prop_assert_eq!(b.transpose().determinant(), b.determinant());
        }

        #[test]
        fn adjugate_scales_to_determinant(m in mat44()) {
            prop_assert_eq!(m * m.adjugate(), Mat44::IDENTITY * m.determinant());
        }

        #[test]
        fn repeated_row_is_singular(m in mat44(), row in 1usize..4) {
            let mut s = m;
            for col in 0..4 {
                s[(row, col)] = s[(0, col)];
            }
            prop_assert_eq!(s.determinant(), 0.0);
            prop_assert_eq!(s.inverse(), (s, false));
        }

        #[test]
        fn product_distributes_over_sum(a in mat44(), b in mat44(), v in vec4()) {
            prop_assert_eq!((a + b) * v, a * v + b * v);
            prop_assert_eq!(v * (a + b), v * a + v * b);
        }

        #[test]
        fn product_transposes_in_reverse(a in mat33(), b in mat33()) {
            prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
        }
    }
}
