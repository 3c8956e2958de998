use crate::MathError;
use crate::math::*;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Vec4 = Vec4::new(0.0, 0.0, 0.0, 0.0);
    pub const ONE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v, w: v }
    }

    pub fn length(self) -> f32 {
        dot(self, self).sqrt()
    }

    pub fn distance(self, other: Vec4) -> f32 {
        (self - other).length()
    }

    pub fn normalized(self) -> Result<Vec4, MathError> {
        let len = self.length();
        if len == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self / len)
    }

    /// Component of `self` along `v`.
    pub fn project_onto(self, v: Vec4) -> Result<Vec4, MathError> {
        let d = dot(v, v);
        if d == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(v * (dot(self, v) / d))
    }

    /// Component of `self` perpendicular to `v`.
    pub fn reject_from(self, v: Vec4) -> Result<Vec4, MathError> {
        Ok(self - self.project_onto(v)?)
    }

    pub fn checked_div(self, scalar: f32) -> Result<Vec4, MathError> {
        if scalar == 0.0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(self * (1.0 / scalar))
    }

    pub fn xyz(self) -> Vec3 {
        Vec3 { x: self.x, y: self.y, z: self.z }
    }
}

// a * b
impl Dot for Vec4 {
    fn dot(self, rhs: Vec4) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }
}

impl std::ops::Index<usize> for Vec4 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

impl std::ops::IndexMut<usize> for Vec4 {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 index out of range: {i}"),
        }
    }
}

// -Vec4
impl std::ops::Neg for Vec4 {
    type Output = Vec4;
    fn neg(self) -> Vec4 {
        Vec4 { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}

// Vec4 + Vec4
impl std::ops::Add for Vec4 {
    type Output = Vec4;
    fn add(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w: self.w + other.w }
    }
}

// Vec4 - Vec4
impl std::ops::Sub for Vec4 {
    type Output = Vec4;
    fn sub(self, other: Vec4) -> Vec4 {
        Vec4 { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z, w: self.w - other.w }
    }
}

// Vec4 * f32
impl std::ops::Mul<f32> for Vec4 {
    type Output = Vec4;
    fn mul(self, scalar: f32) -> Vec4 {
        Vec4 { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar, w: self.w * scalar }
    }
}

// f32 * Vec4
impl std::ops::Mul<Vec4> for f32 {
    type Output = Vec4;
    fn mul(self, vec: Vec4) -> Vec4 {
        Vec4 { x: vec.x * self, y: vec.y * self, z: vec.z * self, w: vec.w * self }
    }
}

// Vec4 / f32
impl std::ops::Div<f32> for Vec4 {
    type Output = Vec4;
    fn div(self, scalar: f32) -> Vec4 {
        assert!(scalar != 0.0, "Vec4 divided by zero");
        self * (1.0 / scalar)
    }
}

impl std::ops::AddAssign for Vec4 {
    fn add_assign(&mut self, other: Vec4) {
        *self = *self + other;
    }
}

impl std::ops::SubAssign for Vec4 {
    fn sub_assign(&mut self, other: Vec4) {
        *self = *self - other;
    }
}

impl std::ops::MulAssign<f32> for Vec4 {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::DivAssign<f32> for Vec4 {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}
