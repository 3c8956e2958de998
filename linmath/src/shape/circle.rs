use crate::math::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub position: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(position: Vec2, radius: f32) -> Circle {
        Circle { position, radius }
    }

    pub fn from_xyz(x: f32, y: f32, radius: f32) -> Circle {
        Circle { position: Vec2::new(x, y), radius }
    }

    /// Touching circles do not intersect.
    pub fn intersects(&self, other: &Circle) -> bool {
        self.position.distance(other.position) < self.radius + other.radius
    }

    /// Points on the boundary are inside.
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.position.distance(point) <= self.radius
    }
}

// Circle * f32
impl std::ops::Mul<f32> for Circle {
    type Output = Circle;
    fn mul(self, scalar: f32) -> Circle {
        Circle { position: self.position * scalar, radius: self.radius * scalar }
    }
}

// Circle / f32
impl std::ops::Div<f32> for Circle {
    type Output = Circle;
    fn div(self, scalar: f32) -> Circle {
        Circle { position: self.position / scalar, radius: self.radius / scalar }
    }
}
