//! AUI Paint API
//!
//! The 2D drawing layer shared by the AUI design-system crates.
//!
//! # Features
//!
//! - RGBA colors with hex and packed-ARGB conversions
//! - Shape primitives (rect, rounded rect, circle)
//! - Path building with rounded-rect and circle helpers
//! - A command-recording paint context for renderers and tests

pub mod color;
pub mod context;
pub mod path;
pub mod primitives;

pub use color::{Color, ColorParseError};
pub use context::{FillStyle, PaintCommand, PaintContext};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
