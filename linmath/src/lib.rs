pub mod error;
pub mod math;
pub mod shape;

pub use error::MathError;
