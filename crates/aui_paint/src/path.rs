//! Path building and representation

use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::primitives::{Circle, RoundedRect};

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Path command
///
/// Arc angles are in radians, measured clockwise from the positive x axis
/// in y-down screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    ArcTo {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of arc segments in the path
    pub fn arc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
            .count()
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
    current: Point,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            path: Path::new(),
            current: Point::ZERO,
        }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::MoveTo(point));
        self.current = point;
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        self.path.commands.push(PathCommand::LineTo(point));
        self.current = point;
        self
    }

    pub fn arc_to(mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32) -> Self {
        self.path.commands.push(PathCommand::ArcTo {
            center: Point::new(cx, cy),
            radius,
            start_angle: start,
            end_angle: end,
        });
        self.current = Point::new(cx + radius * end.cos(), cy + radius * end.sin());
        self
    }

    /// Append a closed rounded rectangle, clockwise from the top-left edge.
    ///
    /// Each corner radius is clamped to half of the shorter side. Corners
    /// with a zero radius are drawn square; if all four are zero the result
    /// is a plain rectangle without arcs.
    pub fn rounded_rect(self, rounded: RoundedRect) -> Self {
        let rect = rounded.rect;
        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        let max = (w.min(h) / 2.0).max(0.0);
        let corners = rounded.corner_radius;
        let tl = corners.top_left.clamp(0.0, max);
        let tr = corners.top_right.clamp(0.0, max);
        let br = corners.bottom_right.clamp(0.0, max);
        let bl = corners.bottom_left.clamp(0.0, max);

        if tl <= 0.0 && tr <= 0.0 && br <= 0.0 && bl <= 0.0 {
            return self
                .move_to(x, y)
                .line_to(x + w, y)
                .line_to(x + w, y + h)
                .line_to(x, y + h)
                .close();
        }

        self.move_to(x + tl, y)
            .line_to(x + w - tr, y)
            .corner(x + w - tr, y + tr, tr, -FRAC_PI_2)
            .line_to(x + w, y + h - br)
            .corner(x + w - br, y + h - br, br, 0.0)
            .line_to(x + bl, y + h)
            .corner(x + bl, y + h - bl, bl, FRAC_PI_2)
            .line_to(x, y + tl)
            .corner(x + tl, y + tl, tl, PI)
            .close()
    }

    /// Quarter arc starting at `start`; skipped for square corners
    fn corner(self, cx: f32, cy: f32, radius: f32, start: f32) -> Self {
        if radius > 0.0 {
            self.arc_to(cx, cy, radius, start, start + FRAC_PI_2)
        } else {
            self
        }
    }

    /// Append a closed circle as a single full-sweep arc
    pub fn circle(self, circle: Circle) -> Self {
        let Circle { center, radius } = circle;
        self.move_to(center.x + radius, center.y)
            .arc_to(center.x, center.y, radius, 0.0, TAU)
            .close()
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{CornerRadius, Rect};

    #[test]
    fn test_rounded_rect_has_four_corner_arcs() {
        let path = PathBuilder::new()
            .rounded_rect(RoundedRect {
                rect: Rect::new(0.0, 0.0, 100.0, 60.0),
                corner_radius: CornerRadius::uniform(8.0),
            })
            .build();

        assert_eq!(path.arc_count(), 4);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(8.0, 0.0)));
        assert_eq!(path.commands().last(), Some(&PathCommand::Close));
    }

    #[test]
    fn test_zero_radius_rounded_rect_is_plain_rect() {
        let path = PathBuilder::new()
            .rounded_rect(RoundedRect {
                rect: Rect::new(0.0, 0.0, 10.0, 10.0),
                corner_radius: CornerRadius::uniform(0.0),
            })
            .build();

        assert_eq!(path.arc_count(), 0);
        assert_eq!(path.commands().len(), 5);
    }

    #[test]
    fn test_rounded_rect_radius_is_clamped() {
        let path = PathBuilder::new()
            .rounded_rect(RoundedRect {
                rect: Rect::new(0.0, 0.0, 100.0, 60.0),
                corner_radius: CornerRadius::uniform(9999.0),
            })
            .build();

        for command in path.commands() {
            if let PathCommand::ArcTo { radius, .. } = command {
                assert_eq!(*radius, 30.0);
            }
        }
    }

    #[test]
    fn test_rounded_rect_honors_each_corner() {
        let path = PathBuilder::new()
            .rounded_rect(RoundedRect {
                rect: Rect::new(0.0, 0.0, 100.0, 60.0),
                corner_radius: CornerRadius {
                    top_left: 0.0,
                    top_right: 4.0,
                    bottom_right: 50.0,
                    bottom_left: 0.0,
                },
            })
            .build();

        let radii: Vec<f32> = path
            .commands()
            .iter()
            .filter_map(|c| match c {
                PathCommand::ArcTo { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![4.0, 30.0]);
        assert_eq!(path.commands()[0], PathCommand::MoveTo(Point::new(0.0, 0.0)));
        assert!(path.commands().contains(&PathCommand::LineTo(Point::new(96.0, 0.0))));
    }

    #[test]
    fn test_circle_is_single_full_arc() {
        let path = PathBuilder::new()
            .circle(Circle::new(Point::new(50.0, 30.0), 30.0))
            .build();

        assert_eq!(path.arc_count(), 1);
        match path.commands()[1] {
            PathCommand::ArcTo {
                center,
                radius,
                start_angle,
                end_angle,
            } => {
                assert_eq!(center, Point::new(50.0, 30.0));
                assert_eq!(radius, 30.0);
                assert_eq!(end_angle - start_angle, TAU);
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }
}
