//! Radius-morphing view
//!
//! A filled rectangle whose corners animate between design-system radius
//! steps. Moving to [`RadiusStep::Full`] morphs the shape into a pill and,
//! once the transition completes, into the inscribed circle.

use aui_animation::Easing;
use aui_paint::{Color, PaintContext, Size};
use aui_theme::RadiusStep;

use crate::morph::{MorphShape, ShapeMorph};
use crate::widget::Widget;

/// RadiusView configuration
#[derive(Clone, Debug)]
pub struct RadiusViewConfig {
    /// Step shown before any request
    pub initial_radius: RadiusStep,
    /// Duration used by [`RadiusView::set_radius`]
    pub duration_ms: u32,
    /// Timing curve for every transition
    pub easing: Easing,
    /// Initial fill color
    pub color: Color,
}

impl Default for RadiusViewConfig {
    fn default() -> Self {
        Self {
            initial_radius: RadiusStep::Md,
            duration_ms: 300,
            easing: Easing::AccelerateDecelerate,
            color: Color::from_hex(0x3F51B5),
        }
    }
}

impl RadiusViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial radius step
    pub fn radius(mut self, step: RadiusStep) -> Self {
        self.initial_radius = step;
        self
    }

    /// Set the default transition duration
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the easing curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the fill color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// A rectangle with animated corner radius
#[derive(Clone, Debug)]
pub struct RadiusView {
    config: RadiusViewConfig,
    morph: ShapeMorph,
    color: Color,
    needs_redraw: bool,
}

impl RadiusView {
    pub fn new() -> Self {
        Self::with_config(RadiusViewConfig::default())
    }

    pub fn with_config(config: RadiusViewConfig) -> Self {
        Self {
            morph: ShapeMorph::new(config.initial_radius),
            color: config.color,
            config,
            needs_redraw: true,
        }
    }

    pub fn config(&self) -> &RadiusViewConfig {
        &self.config
    }

    /// Animate to `step` over the configured duration
    pub fn set_radius(&mut self, step: RadiusStep) {
        self.set_radius_with_duration(step, self.config.duration_ms);
    }

    /// Animate to `step` over `duration_ms`.
    ///
    /// Requesting the current step does nothing, even mid-transition. Any
    /// other request replaces the running transition.
    pub fn set_radius_with_duration(&mut self, step: RadiusStep, duration_ms: u32) {
        if self.morph.set_radius(step, duration_ms, self.config.easing) {
            self.invalidate();
        }
    }

    /// Jump to `step` without animating
    pub fn set_radius_immediate(&mut self, step: RadiusStep) {
        if self.morph.set_radius_immediate(step) {
            self.invalidate();
        }
    }

    /// The target step. Updated synchronously by every request.
    pub fn current_radius(&self) -> RadiusStep {
        self.morph.current()
    }

    /// Change the fill color; the shape state is untouched
    pub fn set_view_color(&mut self, color: Color) {
        if self.color != color {
            self.color = color;
            self.invalidate();
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn bounds(&self) -> Size {
        self.morph.bounds()
    }

    pub fn morph(&self) -> &ShapeMorph {
        &self.morph
    }

    pub fn shape(&self) -> Option<MorphShape> {
        self.morph.shape()
    }

    pub fn is_animating(&self) -> bool {
        self.morph.is_animating()
    }

    /// Check whether a redraw was requested and clear the flag
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn invalidate(&mut self) {
        self.needs_redraw = true;
    }
}

impl Default for RadiusView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for RadiusView {
    fn set_bounds(&mut self, bounds: Size) {
        if self.morph.set_bounds(bounds) {
            self.invalidate();
        }
    }

    fn update(&mut self, dt_ms: f32) -> bool {
        if self.morph.tick(dt_ms) {
            self.invalidate();
        }
        self.needs_redraw
    }

    fn paint(&self, ctx: &mut PaintContext) {
        if let Some(shape) = self.morph.shape() {
            ctx.fill_path(shape.to_path(), self.color);
        }
    }
}
