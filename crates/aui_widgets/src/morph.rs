//! Corner-radius morphing
//!
//! [`ShapeMorph`] owns the shape state of a radius-animated surface: the
//! current [`RadiusStep`], the radius actually drawn, and the blend factor
//! between a rounded rectangle (0.0) and the inscribed circle (1.0).
//!
//! Two kinds of transition exist:
//!
//! - **Radius**: neither endpoint is `Full`. The radius tweens from the old
//!   step's magnitude to the new one; the blend stays at 0.
//! - **Full**: one endpoint is `Full`. The blend tweens between 0 and 1 and
//!   the radius follows it, moving between the non-full step's magnitude and
//!   the inscribed-circle radius.
//!
//! At most one transition is active. A new request replaces it; a request
//! for the step already current changes nothing.

use aui_animation::{Easing, Tween};
use aui_paint::{Circle, Path, PathBuilder, Rect, RoundedRect, Size};
use aui_theme::RadiusStep;

/// Geometry to fill for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MorphShape {
    RoundedRect(RoundedRect),
    Circle(Circle),
}

impl MorphShape {
    pub fn to_path(&self) -> Path {
        match *self {
            MorphShape::RoundedRect(rect) => PathBuilder::new().rounded_rect(rect).build(),
            MorphShape::Circle(circle) => PathBuilder::new().circle(circle).build(),
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self, MorphShape::Circle(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum MorphKind {
    /// The tween value is the radius
    Radius,
    /// The tween value is the blend; radius = flat + (round - flat) * blend
    Full { flat_radius: f32, round_radius: f32 },
}

#[derive(Clone, Debug)]
struct Transition {
    from: RadiusStep,
    tween: Tween,
    kind: MorphKind,
}

/// Radius state machine for a single surface
#[derive(Clone, Debug)]
pub struct ShapeMorph {
    current: RadiusStep,
    full: bool,
    animated_radius: f32,
    blend: f32,
    bounds: Size,
    transition: Option<Transition>,
}

impl ShapeMorph {
    pub fn new(initial: RadiusStep) -> Self {
        let mut morph = Self {
            current: initial,
            full: initial.is_full(),
            animated_radius: 0.0,
            blend: 0.0,
            bounds: Size::ZERO,
            transition: None,
        };
        morph.snap_to_current();
        morph
    }

    /// The target step (the destination while a transition runs)
    pub fn current(&self) -> RadiusStep {
        self.current
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Radius driving the draw, before clamping to the bounds
    pub fn animated_radius(&self) -> f32 {
        self.animated_radius
    }

    /// 0.0 = rounded rectangle, 1.0 = circle
    pub fn blend(&self) -> f32 {
        self.blend
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Linear progress of the running transition
    pub fn progress(&self) -> Option<f32> {
        self.transition.as_ref().map(|t| t.tween.progress())
    }

    /// Step the running transition started from
    pub fn transition_origin(&self) -> Option<RadiusStep> {
        self.transition.as_ref().map(|t| t.from)
    }

    /// Radius that will actually be drawn
    pub fn rendered_radius(&self) -> f32 {
        let round = self.bounds.inscribed_radius();
        if self.blend >= 1.0 {
            round
        } else {
            self.animated_radius.clamp(0.0, round)
        }
    }

    /// Update the bounds. Returns true if the drawing changes.
    pub fn set_bounds(&mut self, bounds: Size) -> bool {
        if self.bounds == bounds {
            return false;
        }
        self.bounds = bounds;

        match self.transition.as_mut() {
            Some(Transition {
                kind: MorphKind::Full { round_radius, .. },
                ..
            }) => {
                *round_radius = bounds.inscribed_radius();
                self.apply_frame();
            }
            Some(_) => {}
            None => self.snap_to_current(),
        }
        true
    }

    /// Start a transition to `step`. Returns false when `step` is already current.
    pub fn set_radius(&mut self, step: RadiusStep, duration_ms: u32, easing: Easing) -> bool {
        if step == self.current {
            return false;
        }

        let from = self.current;
        self.cancel();
        self.current = step;
        self.full = step.is_full();

        if self.bounds.is_empty() {
            tracing::debug!(
                "ShapeMorph::set_radius - {} -> {} applied immediately (empty bounds)",
                from,
                step
            );
            self.snap_to_current();
            return true;
        }

        let (kind, mut tween) = if !from.is_full() && !step.is_full() {
            (
                MorphKind::Radius,
                Tween::new(from.value(), step.value(), duration_ms, easing),
            )
        } else {
            let entering = step.is_full();
            let flat_radius = if entering { from.value() } else { step.value() };
            let (blend_from, blend_to) = if entering { (0.0, 1.0) } else { (1.0, 0.0) };
            (
                MorphKind::Full {
                    flat_radius,
                    round_radius: self.bounds.inscribed_radius(),
                },
                Tween::new(blend_from, blend_to, duration_ms, easing),
            )
        };

        tracing::debug!(
            "ShapeMorph::set_radius - {} -> {} over {}ms ({:?})",
            from,
            step,
            duration_ms,
            kind
        );

        tween.start();
        self.transition = Some(Transition { from, tween, kind });

        if duration_ms == 0 {
            self.finish();
        } else {
            self.apply_frame();
        }
        true
    }

    /// Jump to `step` without animating, cancelling any running transition.
    /// Returns false when `step` is already current and settled.
    pub fn set_radius_immediate(&mut self, step: RadiusStep) -> bool {
        if step == self.current && self.transition.is_none() {
            return false;
        }
        self.cancel();
        self.current = step;
        self.full = step.is_full();
        self.snap_to_current();
        tracing::debug!("ShapeMorph::set_radius_immediate - {}", step);
        true
    }

    /// Advance the running transition. Returns true if the drawing changed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        transition.tween.tick(dt_ms);
        let finished = transition.tween.is_finished();
        self.apply_frame();

        tracing::trace!(
            radius = self.animated_radius,
            blend = self.blend,
            "ShapeMorph::tick"
        );

        if finished {
            self.finish();
        }
        true
    }

    /// Geometry for the current frame, or `None` with empty bounds
    pub fn shape(&self) -> Option<MorphShape> {
        if self.bounds.is_empty() {
            return None;
        }
        let rect = Rect::from_size(self.bounds);
        if self.blend >= 1.0 {
            Some(MorphShape::Circle(Circle::inscribed(rect)))
        } else {
            Some(MorphShape::RoundedRect(RoundedRect::uniform(
                rect,
                self.rendered_radius(),
            )))
        }
    }

    fn cancel(&mut self) {
        if let Some(mut transition) = self.transition.take() {
            transition.tween.cancel();
            tracing::trace!(
                "ShapeMorph - cancelled {} -> {} at {:.2}",
                transition.from,
                self.current,
                transition.tween.progress()
            );
        }
    }

    fn finish(&mut self) {
        self.transition = None;
        self.snap_to_current();
    }

    fn apply_frame(&mut self) {
        let Some(transition) = self.transition.as_ref() else {
            return;
        };
        let value = transition.tween.value();
        match transition.kind {
            MorphKind::Radius => {
                self.animated_radius = value;
                self.blend = 0.0;
            }
            MorphKind::Full {
                flat_radius,
                round_radius,
            } => {
                self.blend = value.clamp(0.0, 1.0);
                self.animated_radius = flat_radius + (round_radius - flat_radius) * self.blend;
            }
        }
    }

    fn snap_to_current(&mut self) {
        self.blend = if self.full { 1.0 } else { 0.0 };
        self.animated_radius = self.current.resolve(self.bounds);
    }
}

impl Default for ShapeMorph {
    fn default() -> Self {
        Self::new(RadiusStep::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn sized(step: RadiusStep, width: f32, height: f32) -> ShapeMorph {
        let mut morph = ShapeMorph::new(step);
        morph.set_bounds(Size::new(width, height));
        morph
    }

    #[test]
    fn test_initial_state() {
        let morph = ShapeMorph::default();
        assert_eq!(morph.current(), RadiusStep::Md);
        assert_eq!(morph.animated_radius(), 8.0);
        assert_eq!(morph.blend(), 0.0);
        assert!(!morph.is_animating());
        assert!(morph.shape().is_none());
    }

    #[test]
    fn test_radius_transition_interpolates_linearly_with_linear_easing() {
        let mut morph = sized(RadiusStep::Xs, 100.0, 60.0);
        assert!(morph.set_radius(RadiusStep::Lg, 200, Easing::Linear));

        assert_eq!(morph.animated_radius(), 4.0);
        morph.tick(100.0);
        assert!(approx(morph.animated_radius(), 7.0));
        assert_eq!(morph.blend(), 0.0);
        morph.tick(100.0);
        assert_eq!(morph.animated_radius(), 10.0);
        assert!(!morph.is_animating());
    }

    #[test]
    fn test_full_transition_blends_radius() {
        let mut morph = sized(RadiusStep::Md, 100.0, 60.0);
        morph.set_radius(RadiusStep::Full, 100, Easing::Linear);

        morph.tick(50.0);
        assert!(approx(morph.blend(), 0.5));
        assert!(approx(morph.animated_radius(), 19.0));
        assert!(!morph.shape().unwrap().is_circle());

        morph.tick(50.0);
        assert_eq!(morph.blend(), 1.0);
        assert!(morph.shape().unwrap().is_circle());
    }

    #[test]
    fn test_resize_during_full_transition_retargets_round_radius() {
        let mut morph = sized(RadiusStep::None, 100.0, 60.0);
        morph.set_radius(RadiusStep::Full, 100, Easing::Linear);
        morph.tick(50.0);
        assert!(approx(morph.animated_radius(), 15.0));

        morph.set_bounds(Size::new(100.0, 100.0));
        assert!(approx(morph.animated_radius(), 25.0));
    }

    #[test]
    fn test_resize_while_full_tracks_inscribed_radius() {
        let mut morph = ShapeMorph::new(RadiusStep::Full);
        assert_eq!(morph.blend(), 1.0);
        morph.set_bounds(Size::new(40.0, 80.0));
        assert_eq!(morph.animated_radius(), 20.0);
        assert_eq!(morph.rendered_radius(), 20.0);
    }

    #[test]
    fn test_zero_duration_snaps() {
        let mut morph = sized(RadiusStep::Md, 100.0, 60.0);
        morph.set_radius(RadiusStep::Full, 0, Easing::Linear);
        assert!(!morph.is_animating());
        assert_eq!(morph.blend(), 1.0);
        assert_eq!(morph.animated_radius(), 30.0);
    }

    #[test]
    fn test_rendered_radius_is_clamped_to_bounds() {
        let mut morph = sized(RadiusStep::FiveXl, 20.0, 100.0);
        assert_eq!(morph.animated_radius(), 28.0);
        assert_eq!(morph.rendered_radius(), 10.0);
        morph.set_radius_immediate(RadiusStep::None);
        assert_eq!(morph.rendered_radius(), 0.0);
    }

    #[test]
    fn test_immediate_same_step_settles_running_transition() {
        let mut morph = sized(RadiusStep::Md, 100.0, 60.0);
        morph.set_radius(RadiusStep::Lg, 100, Easing::Linear);
        morph.tick(50.0);

        assert!(morph.set_radius_immediate(RadiusStep::Lg));
        assert!(!morph.is_animating());
        assert_eq!(morph.animated_radius(), 10.0);
        assert!(!morph.set_radius_immediate(RadiusStep::Lg));
    }

    #[test]
    fn test_tick_without_transition_reports_no_change() {
        let mut morph = sized(RadiusStep::Md, 10.0, 10.0);
        assert!(!morph.tick(16.0));
    }
}
