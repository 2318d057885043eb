//! Radius Morph Demo
//!
//! Drives a `RadiusView` through a sequence of radius steps with a real
//! frame clock and logs the shape of every frame.
//!
//! - Fill color comes from a `ColorResolver` (optionally backed by a TOML
//!   color table passed as the first argument)
//! - `AUI_APPEARANCE=night` picks the starting table; every other step
//!   flips between day and night
//!
//! Run with: cargo run -p aui_widgets --example radius_morph [colors.toml]

use anyhow::{Context, Result};
use aui_animation::FrameClock;
use aui_paint::{PaintCommand, PaintContext, Size};
use aui_theme::{Appearance, ColorResolver, ColorToken, RadiusStep, TableProvider};
use aui_widgets::{MorphShape, RadiusView, RadiusViewConfig, Widget};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let appearance = match std::env::var("AUI_APPEARANCE").as_deref() {
        Ok("night") => Appearance::Night,
        _ => Appearance::Day,
    };

    let mut resolver = match std::env::args().nth(1) {
        Some(path) => {
            let provider = TableProvider::load(&path)
                .with_context(|| format!("Failed to load color table {path}"))?;
            ColorResolver::new(provider, appearance)
        }
        None => ColorResolver::fallback_only(appearance),
    };

    let mut view = RadiusView::with_config(
        RadiusViewConfig::new()
            .duration_ms(240)
            .color(resolver.resolve(ColorToken::BgBrandSolid)),
    );
    view.set_bounds(Size::new(100.0, 60.0));

    let mut clock = FrameClock::with_target_fps(60);
    let steps = [
        RadiusStep::Xs,
        RadiusStep::Lg,
        RadiusStep::Full,
        RadiusStep::Sm,
        RadiusStep::None,
    ];

    for (i, step) in steps.into_iter().enumerate() {
        tracing::info!("-> {}", step);
        view.set_radius(step);
        if i % 2 == 1 {
            resolver.set_appearance(resolver.appearance().toggled());
            view.set_view_color(resolver.resolve(ColorToken::FgBrandSecondary));
        }

        clock.reset();
        while view.is_animating() {
            std::thread::sleep(clock.frame_interval());
            let dt = clock.tick();
            if view.update(dt) && view.take_needs_redraw() {
                log_frame(&view);
            }
        }
        log_frame(&view);
    }

    Ok(())
}

fn log_frame(view: &RadiusView) {
    let mut ctx = PaintContext::new();
    view.paint(&mut ctx);

    let arcs: usize = ctx
        .commands()
        .iter()
        .map(|PaintCommand::FillPath { path, .. }| path.arc_count())
        .sum();

    let shape = match view.shape() {
        Some(MorphShape::Circle(circle)) => format!("circle r={:.1}", circle.radius),
        Some(MorphShape::RoundedRect(rect)) => {
            format!("rounded rect r={:.1}", rect.corner_radius.top_left)
        }
        None => "nothing".to_string(),
    };

    tracing::info!(
        step = %view.current_radius(),
        blend = %format!("{:.3}", view.morph().blend()),
        arcs,
        color = %format!("#{:08x}", view.color().to_argb()),
        "{shape}"
    );
}
