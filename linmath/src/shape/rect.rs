use crate::math::*;

/// Axis-aligned rectangle anchored at its minimum corner `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect { x, y, width, height }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Overlap with non-zero area. Rectangles sharing only an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Edges are inclusive.
    pub fn contains_point(&self, point: Vec2) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

// Rect * f32
impl std::ops::Mul<f32> for Rect {
    type Output = Rect;
    fn mul(self, scalar: f32) -> Rect {
        Rect { x: self.x * scalar, y: self.y * scalar, width: self.width * scalar, height: self.height * scalar }
    }
}

// Rect / f32
impl std::ops::Div<f32> for Rect {
    type Output = Rect;
    fn div(self, scalar: f32) -> Rect {
        assert!(scalar != 0.0, "Rect divided by zero");
        self * (1.0 / scalar)
    }
}

impl std::ops::MulAssign<f32> for Rect {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::DivAssign<f32> for Rect {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}
