pub mod angle;
pub mod dot;
pub mod mat22;
pub mod mat33;
pub mod mat44;
pub mod quat;
pub mod square;
pub mod transform;
pub mod vec2;
pub mod vec3;
pub mod vec4;

pub use angle::*;
pub use dot::*;
pub use mat22::*;
pub use mat33::*;
pub use mat44::*;
pub use quat::*;
pub use square::*;
pub use transform::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;
