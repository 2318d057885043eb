//! Paint context - the recording drawing API
//!
//! Widgets paint into a [`PaintContext`]; the host renderer (or a test)
//! consumes the recorded commands.

use crate::color::Color;
use crate::path::Path;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillPath { path: Path, style: FillStyle },
}

/// The paint context used for custom drawing
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        if path.is_empty() {
            tracing::trace!("PaintContext::fill_path - skipping empty path");
            return;
        }
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{PathBuilder, Point};
    use crate::primitives::Circle;

    #[test]
    fn test_fill_path_records_command() {
        let mut ctx = PaintContext::new();
        let path = PathBuilder::new()
            .circle(Circle::new(Point::new(5.0, 5.0), 5.0))
            .build();
        ctx.fill_path(path.clone(), Color::WHITE);

        assert_eq!(
            ctx.commands(),
            &[PaintCommand::FillPath {
                path,
                style: FillStyle::Color(Color::WHITE),
            }]
        );
        assert_eq!(ctx.take_commands().len(), 1);
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_empty_path_is_not_recorded() {
        let mut ctx = PaintContext::new();
        ctx.fill_path(Path::new(), Color::BLACK);
        assert!(ctx.commands().is_empty());
    }
}
