//! Base widget trait

use aui_paint::{PaintContext, Size};

/// Base trait for frame-driven, custom-drawn widgets
pub trait Widget {
    /// Set the layout bounds assigned by the host
    fn set_bounds(&mut self, bounds: Size);

    /// Advance animations by `dt_ms`. Returns true if a redraw is needed.
    fn update(&mut self, dt_ms: f32) -> bool;

    /// Record this frame's drawing
    fn paint(&self, ctx: &mut PaintContext);
}
