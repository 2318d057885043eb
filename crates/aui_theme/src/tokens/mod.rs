//! Design tokens
//!
//! - Colors, with built-in day/night fallback values
//! - Corner radius steps

mod color;
mod radius;

pub use color::*;
pub use radius::*;
