//! AUI Widget Library
//!
//! Custom-drawn design-system surfaces.
//!
//! - [`RadiusView`]: a filled rectangle whose corner radius animates between
//!   [`RadiusStep`](aui_theme::RadiusStep)s, including the fully-round step
//! - [`ShapeMorph`]: the pure radius state machine behind it
//!
//! Widgets are driven by the host: it calls [`Widget::update`] once per
//! frame with the elapsed milliseconds and [`Widget::paint`] when a redraw
//! is due.

pub mod morph;
pub mod radius_view;
pub mod widget;

pub use morph::{MorphShape, ShapeMorph};
pub use radius_view::{RadiusView, RadiusViewConfig};
pub use widget::Widget;
