//! AUI Theme Tokens
//!
//! Design tokens for the AUI design system and a resolver that never fails.
//!
//! # Overview
//!
//! - **Color tokens**: [`ColorToken`] names every semantic color. A
//!   [`ColorResolver`] asks an injected [`ThemeProvider`] first and falls
//!   back to the built-in day/night tables when the provider cannot answer.
//! - **Appearance**: [`Appearance::Day`] or [`Appearance::Night`] selects
//!   which fallback table applies.
//! - **Radius steps**: [`RadiusStep`] is the fixed corner-radius scale,
//!   including the fully-round [`RadiusStep::Full`].
//!
//! # Quick Start
//!
//! ```rust
//! use aui_theme::{Appearance, ColorResolver, ColorToken};
//! use aui_paint::Color;
//!
//! // No provider configured: every lookup uses the fallback tables.
//! let resolver = ColorResolver::fallback_only(Appearance::Night);
//! assert_eq!(resolver.resolve(ColorToken::TextPrimary), Color::from_hex(0xf7f7f7));
//!
//! // Unknown names resolve to opaque black.
//! assert_eq!(resolver.resolve_name("no_such_token"), Color::BLACK);
//! ```
//!
//! # Providers
//!
//! A provider is the live source of theme colors. [`TableProvider`] loads
//! one from TOML:
//!
//! ```toml
//! [day]
//! text_primary = "#181d27"
//!
//! [night]
//! text_primary = "#f7f7f7"
//! ```

pub mod error;
pub mod provider;
pub mod resolver;
pub mod theme;
pub mod tokens;

pub use error::{ResolveError, ThemeError};
pub use provider::TableProvider;
pub use resolver::{ColorResolver, ThemeProvider};
pub use theme::Appearance;
pub use tokens::*;

pub use aui_paint::Color;
