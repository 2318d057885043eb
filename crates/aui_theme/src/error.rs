//! Theme error types

use aui_paint::ColorParseError;
use thiserror::Error;

/// Why a live theme lookup produced no color.
///
/// Never surfaced by [`ColorResolver::resolve`](crate::ColorResolver::resolve);
/// it only decides that the fallback table answers instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no theme provider is available")]
    Unavailable,

    #[error("theme provider has no color for token `{0}`")]
    UnknownToken(String),

    #[error("theme provider failed: {0}")]
    Provider(String),
}

/// Errors loading a color table
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read color table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse color table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color for `{token}`: {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },
}
