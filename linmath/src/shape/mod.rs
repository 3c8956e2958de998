pub mod circle;
pub mod rect;

pub use circle::*;
pub use rect::*;
