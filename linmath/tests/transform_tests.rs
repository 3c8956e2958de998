use linmath::math::*;
use linmath::shape::*;

macro_rules! assert_vec4_near {
    ($left:expr, $right:expr, $tol:expr $(,)?) => {{
        let l: Vec4 = $left;
        let r: Vec4 = $right;
        let tol: f32 = $tol;
        if (0..4).any(|i| (l[i] - r[i]).abs() > tol) {
            panic!("assertion failed: left != right within tol={}\n  left: {:?}\n right: {:?}", tol, l, r);
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn quarter_turn_about_z() -> Transform {
        Transform::new(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), radians(90.0)),
            Vec3::splat(2.0),
        )
    }

    #[test]
    fn transform_matrix_fixture() {
        let mut t = quarter_turn_about_z();
        assert!(t.update());

        let expected = Mat44([
            0.0, 2.0, 0.0, 0.0, //
            -2.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 2.0, 0.0, //
            1.0, 0.0, 0.0, 1.0,
        ]);
        for (actual, expected) in t.matrix().0.iter().zip(expected.0.iter()) {
            assert!((actual - expected).abs() < 1e-5, "{:?}", t.matrix());
        }
    }

    #[rstest]
    #[case(Vec4::new(1.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 2.0, 0.0, 1.0))]
    #[case(Vec4::new(0.0, 1.0, 0.0, 1.0), Vec4::new(-1.0, 0.0, 0.0, 1.0))]
    #[case(Vec4::new(0.0, 0.0, 1.0, 1.0), Vec4::new(1.0, 0.0, 2.0, 1.0))]
    #[case(Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 0.0, 0.0, 1.0))]
    // directions ignore the translation
    #[case(Vec4::new(1.0, 0.0, 0.0, 0.0), Vec4::new(0.0, 2.0, 0.0, 0.0))]
    fn transform_maps_points(#[case] point: Vec4, #[case] expected: Vec4) {
        let mut t = quarter_turn_about_z();
        t.update();
        assert_vec4_near!(point * *t.matrix(), expected, 1e-5);
    }

    #[test]
    fn transform_matches_step_by_step() {
        let rotation = Quat::from_axis_angle(Vec3::new(0.0, 0.6, 0.8), 0.7);
        let mut t = Transform::new(Vec3::new(3.0, -1.0, 2.0), rotation, Vec3::new(1.0, 2.0, 0.5));
        t.update();

        let p = Vec3::new(0.25, -4.0, 1.5);
        let by_hand = rotation * (p * Mat33::scale(t.scale)) + t.position;
        assert_vec4_near!(p.as_point4() * *t.matrix(), by_hand.as_point4(), 1e-4);
    }

    #[test]
    fn static_transform_ignores_edits_until_released() {
        let mut t = quarter_turn_about_z();
        t.set_static(true);
        let baked = *t.matrix();

        t.position = Vec3::new(100.0, 0.0, 0.0);
        t.rotation = Quat::identity();
        assert!(!t.update());
        assert_eq!(*t.matrix(), baked);

        t.set_static(false);
        assert!(t.update());
        assert_vec4_near!(Vec4::new(1.0, 0.0, 0.0, 1.0) * *t.matrix(), Vec4::new(102.0, 0.0, 0.0, 1.0), 1e-5);
        assert!(!t.update());
    }

    #[test]
    fn transformed_circle_center() {
        let mut t = Transform::new(Vec3::new(0.0, 3.0, 0.0), Quat::identity(), Vec3::ONE);
        t.update();
        let c = Circle::from_xyz(1.0, 1.0, 1.0);
        let moved = (c.position.as_vec3().as_point4() * *t.matrix()).xyz();
        let c = Circle::new(Vec2::new(moved.x, moved.y), c.radius);
        assert!(c.contains_point(Vec2::new(1.0, 4.5)));
        assert!(!c.intersects(&Circle::from_xyz(1.0, 1.0, 1.0)));
        assert!(Rect::new(0.0, 3.0, 2.0, 2.0).contains_point(c.position));
    }
}
