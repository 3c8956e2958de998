use crate::MathError;
use crate::math::*;
use bytemuck::{Pod, Zeroable};

/// Rotation quaternion `w + xi + yj + zk`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    pub const IDENTITY: Quat = Quat::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quat {
        Quat { x, y, z, w }
    }

    pub fn identity() -> Quat {
        Quat::IDENTITY
    }

    /// `angle` is in radians. The axis is taken as-is, pass a unit vector
    /// to get a unit quaternion.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Quat {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Quat { x: axis.x * sin, y: axis.y * sin, z: axis.z * sin, w: cos }
    }

    pub fn from_vector(v: Vec3, w: f32) -> Quat {
        Quat { x: v.x, y: v.y, z: v.z, w }
    }

    pub fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn dot(self, other: Quat) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn conjugate(self) -> Quat {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: self.w }
    }

    pub fn normalized(self) -> Result<Quat, MathError> {
        let len = self.length();
        if len == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self * (1.0 / len))
    }

    /// Conjugate scaled by the squared length; equals the conjugate for unit quaternions.
    pub fn inverse(self) -> Result<Quat, MathError> {
        let len_sq = self.dot(self);
        if len_sq == 0.0 {
            return Err(MathError::DegenerateVector);
        }
        Ok(self.conjugate() * (1.0 / len_sq))
    }

    /// Rotation axis in `xyz`, angle in radians in `w`.
    ///
    /// Expects a unit quaternion. Without a meaningful axis (the identity
    /// rotation) the axis is +X.
    pub fn axis_angle(self) -> Vec4 {
        let w = self.w.clamp(-1.0, 1.0);
        let angle = 2.0 * w.acos();
        let s = (1.0 - w * w).sqrt();
        if s == 0.0 {
            return Vec4::new(1.0, 0.0, 0.0, angle);
        }
        Vec4::new(self.x / s, self.y / s, self.z / s, angle)
    }

    /// Rotation matrix for row vectors, `v * q.matrix()` rotates like `q * v`.
    pub fn matrix(self) -> Mat44 {
        let Quat { x, y, z, w } = self;
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        Mat44([
            1.0 - 2.0 * (yy + zz),
            2.0 * (xy + wz),
            2.0 * (xz - wy),
            0.0, //
            2.0 * (xy - wz),
            1.0 - 2.0 * (xx + zz),
            2.0 * (yz + wx),
            0.0, //
            2.0 * (xz + wy),
            2.0 * (yz - wx),
            1.0 - 2.0 * (xx + yy),
            0.0, //
            0.0,
            0.0,
            0.0,
            1.0,
        ])
    }
}

impl Default for Quat {
    fn default() -> Quat {
        Quat::IDENTITY
    }
}

// Quat * Quat, Hamilton product: rhs is applied first
impl std::ops::Mul for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Quat {
        Quat {
            x: self.w * rhs.x + rhs.w * self.x + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y + rhs.w * self.y + self.z * rhs.x - self.x * rhs.z,
            z: self.w * rhs.z + rhs.w * self.z + self.x * rhs.y - self.y * rhs.x,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

// Vec3 = Quat * Vec3
impl std::ops::Mul<Vec3> for Quat {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        let tx = 2.0 * (self.y * v.z - self.z * v.y);
        let ty = 2.0 * (self.z * v.x - self.x * v.z);
        let tz = 2.0 * (self.x * v.y - self.y * v.x);

        Vec3 {
            x: v.x + self.w * tx + (self.y * tz - self.z * ty),
            y: v.y + self.w * ty + (self.z * tx - self.x * tz),
            z: v.z + self.w * tz + (self.x * ty - self.y * tx),
        }
    }
}

// Vec4 = Quat * Vec4, the result is a point (w = 1)
impl std::ops::Mul<Vec4> for Quat {
    type Output = Vec4;

    fn mul(self, v: Vec4) -> Vec4 {
        (self * v.xyz()).as_point4()
    }
}

// -Quat
impl std::ops::Neg for Quat {
    type Output = Quat;
    fn neg(self) -> Quat {
        Quat { x: -self.x, y: -self.y, z: -self.z, w: -self.w }
    }
}

// Quat + Quat
impl std::ops::Add for Quat {
    type Output = Quat;
    fn add(self, other: Quat) -> Quat {
        Quat { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z, w: self.w + other.w }
    }
}

// Quat - Quat
impl std::ops::Sub for Quat {
    type Output = Quat;
    fn sub(self, other: Quat) -> Quat {
        Quat { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z, w: self.w - other.w }
    }
}

// Quat * f32
impl std::ops::Mul<f32> for Quat {
    type Output = Quat;
    fn mul(self, scalar: f32) -> Quat {
        Quat { x: self.x * scalar, y: self.y * scalar, z: self.z * scalar, w: self.w * scalar }
    }
}

// f32 * Quat
impl std::ops::Mul<Quat> for f32 {
    type Output = Quat;
    fn mul(self, q: Quat) -> Quat {
        q * self
    }
}

// Quat / f32
impl std::ops::Div<f32> for Quat {
    type Output = Quat;
    fn div(self, scalar: f32) -> Quat {
        assert!(scalar != 0.0, "Quat divided by zero");
        self * (1.0 / scalar)
    }
}

impl std::ops::AddAssign for Quat {
    fn add_assign(&mut self, other: Quat) {
        *self = *self + other;
    }
}

impl std::ops::SubAssign for Quat {
    fn sub_assign(&mut self, other: Quat) {
        *self = *self - other;
    }
}

impl std::ops::MulAssign for Quat {
    fn mul_assign(&mut self, other: Quat) {
        *self = *self * other;
    }
}

impl std::ops::MulAssign<f32> for Quat {
    fn mul_assign(&mut self, scalar: f32) {
        *self = *self * scalar;
    }
}

impl std::ops::DivAssign<f32> for Quat {
    fn div_assign(&mut self, scalar: f32) {
        *self = *self / scalar;
    }
}
