/// Inner product shared by the vector types.
pub trait Dot: Copy {
    fn dot(self, rhs: Self) -> f32;
}

pub fn dot<V: Dot>(v1: V, v2: V) -> f32 {
    v1.dot(v2)
}

// |v|^2, no sqrt
pub fn length_squared<V: Dot>(v: V) -> f32 {
    v.dot(v)
}
