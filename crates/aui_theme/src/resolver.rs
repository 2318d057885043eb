//! Color token resolution
//!
//! [`ColorResolver`] is the single entry point widgets use to turn a token
//! into a color. It asks its [`ThemeProvider`] first; any failure is
//! answered from the built-in fallback table for the active appearance.

use aui_paint::Color;

use crate::error::ResolveError;
use crate::theme::Appearance;
use crate::tokens::{fallback_color, fallback_color_by_name, ColorToken};

/// Live source of theme colors (a platform resource system, a loaded
/// theme file, ...)
pub trait ThemeProvider {
    /// Color for the token named `name` under `appearance`
    fn color(&self, name: &str, appearance: Appearance) -> Result<Color, ResolveError>;
}

impl<F> ThemeProvider for F
where
    F: Fn(&str, Appearance) -> Result<Color, ResolveError>,
{
    fn color(&self, name: &str, appearance: Appearance) -> Result<Color, ResolveError> {
        self(name, appearance)
    }
}

/// Resolves color tokens, falling back to built-in values.
///
/// Resolution is total: [`resolve`](Self::resolve) and
/// [`resolve_name`](Self::resolve_name) always return a color.
pub struct ColorResolver {
    provider: Option<Box<dyn ThemeProvider + Send + Sync>>,
    appearance: Appearance,
}

impl ColorResolver {
    /// Resolver backed by `provider`
    pub fn new(
        provider: impl ThemeProvider + Send + Sync + 'static,
        appearance: Appearance,
    ) -> Self {
        tracing::debug!(
            "ColorResolver::new - provider configured, appearance {:?}",
            appearance
        );
        Self {
            provider: Some(Box::new(provider)),
            appearance,
        }
    }

    /// Resolver with no provider: every lookup uses the fallback tables
    pub fn fallback_only(appearance: Appearance) -> Self {
        tracing::debug!("ColorResolver::fallback_only - appearance {:?}", appearance);
        Self {
            provider: None,
            appearance,
        }
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.appearance != appearance {
            tracing::debug!(
                "ColorResolver::set_appearance - switching from {:?} to {:?}",
                self.appearance,
                appearance
            );
            self.appearance = appearance;
        }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Color for `token`, from the provider or the fallback table
    pub fn resolve(&self, token: ColorToken) -> Color {
        self.try_resolve_name(token.name()).unwrap_or_else(|err| {
            tracing::trace!(token = token.name(), %err, "using fallback color");
            fallback_color(token, self.appearance)
        })
    }

    /// Color for a token name; names unknown everywhere resolve to black
    pub fn resolve_name(&self, name: &str) -> Color {
        self.try_resolve_name(name).unwrap_or_else(|err| {
            tracing::trace!(token = name, %err, "using fallback color");
            fallback_color_by_name(name, self.appearance)
        })
    }

    /// Provider lookup only, without the fallback
    pub fn try_resolve(&self, token: ColorToken) -> Result<Color, ResolveError> {
        self.try_resolve_name(token.name())
    }

    fn try_resolve_name(&self, name: &str) -> Result<Color, ResolveError> {
        match &self.provider {
            Some(provider) => provider.color(name, self.appearance),
            None => Err(ResolveError::Unavailable),
        }
    }
}

impl Default for ColorResolver {
    fn default() -> Self {
        Self::fallback_only(Appearance::default())
    }
}

impl std::fmt::Debug for ColorResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorResolver")
            .field("has_provider", &self.has_provider())
            .field("appearance", &self.appearance)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing(_: &str, _: Appearance) -> Result<Color, ResolveError> {
        Err(ResolveError::Provider("resources not ready".to_string()))
    }

    #[test]
    fn test_provider_wins_when_it_answers() {
        let resolver = ColorResolver::new(
            |_: &str, _: Appearance| -> Result<Color, ResolveError> {
                Ok(Color::from_hex(0x123456))
            },
            Appearance::Day,
        );
        assert_eq!(
            resolver.resolve(ColorToken::TextPrimary),
            Color::from_hex(0x123456)
        );
    }

    #[test]
    fn test_provider_failure_uses_fallback() {
        let mut resolver = ColorResolver::new(failing, Appearance::Day);
        assert_eq!(
            resolver.resolve(ColorToken::TextPrimary),
            Color::from_hex(0x181d27)
        );

        resolver.set_appearance(Appearance::Night);
        assert_eq!(
            resolver.resolve(ColorToken::TextPrimary),
            Color::from_hex(0xf7f7f7)
        );
    }

    #[test]
    fn test_try_resolve_reports_missing_provider() {
        let resolver = ColorResolver::default();
        assert_eq!(
            resolver.try_resolve(ColorToken::BgPrimary),
            Err(ResolveError::Unavailable)
        );
    }

    #[test]
    fn test_provider_sees_active_appearance() {
        let resolver = ColorResolver::new(
            |_: &str, appearance: Appearance| -> Result<Color, ResolveError> {
                Ok(if appearance.is_night() {
                    Color::WHITE
                } else {
                    Color::BLACK
                })
            },
            Appearance::Night,
        );
        assert_eq!(resolver.resolve_name("anything"), Color::WHITE);
    }
}
