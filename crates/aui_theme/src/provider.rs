//! TOML-backed theme provider
//!
//! A color table file has one section per appearance:
//!
//! ```toml
//! [day]
//! text_primary = "#181d27"
//! bg_primary = "#ffffff"
//!
//! [night]
//! text_primary = "#f7f7f7"
//! bg_primary = "#131316"
//! ```
//!
//! Keys are token names. Names that are not built-in tokens are kept (a
//! theme may define extra colors) but logged, since they are often typos.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use aui_paint::Color;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::{ResolveError, ThemeError};
use crate::resolver::ThemeProvider;
use crate::theme::Appearance;
use crate::tokens::ColorToken;

/// On-disk shape of a color table
#[derive(Debug, Default, Deserialize)]
struct ColorTableFile {
    #[serde(default)]
    day: BTreeMap<String, String>,
    #[serde(default)]
    night: BTreeMap<String, String>,
}

/// Theme provider answering from in-memory day/night tables
#[derive(Debug, Clone, Default)]
pub struct TableProvider {
    day: FxHashMap<String, Color>,
    night: FxHashMap<String, Color>,
}

impl TableProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a color table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ThemeError> {
        let file: ColorTableFile = toml::from_str(content)?;
        Ok(Self {
            day: parse_table(file.day, Appearance::Day)?,
            night: parse_table(file.night, Appearance::Night)?,
        })
    }

    /// Load a color table from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let provider = Self::from_toml_str(&content)?;
        tracing::debug!(
            "TableProvider::load - {} day / {} night colors from {}",
            provider.day.len(),
            provider.night.len(),
            path.display()
        );
        Ok(provider)
    }

    /// Set one entry
    pub fn insert(&mut self, appearance: Appearance, name: impl Into<String>, color: Color) {
        self.table_mut(appearance).insert(name.into(), color);
    }

    /// Builder: set one entry
    pub fn with(mut self, appearance: Appearance, name: impl Into<String>, color: Color) -> Self {
        self.insert(appearance, name, color);
        self
    }

    pub fn len(&self, appearance: Appearance) -> usize {
        self.table(appearance).len()
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty() && self.night.is_empty()
    }

    fn table(&self, appearance: Appearance) -> &FxHashMap<String, Color> {
        match appearance {
            Appearance::Day => &self.day,
            Appearance::Night => &self.night,
        }
    }

    fn table_mut(&mut self, appearance: Appearance) -> &mut FxHashMap<String, Color> {
        match appearance {
            Appearance::Day => &mut self.day,
            Appearance::Night => &mut self.night,
        }
    }
}

fn parse_table(
    raw: BTreeMap<String, String>,
    appearance: Appearance,
) -> Result<FxHashMap<String, Color>, ThemeError> {
    let mut table = FxHashMap::default();
    for (token, value) in raw {
        let color = Color::parse_hex(&value).map_err(|source| ThemeError::InvalidColor {
            token: token.clone(),
            source,
        })?;
        if ColorToken::from_name(&token).is_none() {
            tracing::warn!(
                "color table [{}] defines `{}`, which is not a known token",
                appearance.as_str(),
                token
            );
        }
        table.insert(token, color);
    }
    Ok(table)
}

impl ThemeProvider for TableProvider {
    fn color(&self, name: &str, appearance: Appearance) -> Result<Color, ResolveError> {
        self.table(appearance)
            .get(name)
            .copied()
            .ok_or_else(|| ResolveError::UnknownToken(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r##"
[day]
text_primary = "#181d27"
bg_brand_solid = "#80d54221"

[night]
text_primary = "#f7f7f7"
"##;

    #[test]
    fn test_parses_both_sections() {
        let provider = TableProvider::from_toml_str(TABLE).unwrap();
        assert_eq!(provider.len(Appearance::Day), 2);
        assert_eq!(provider.len(Appearance::Night), 1);
        assert_eq!(
            provider.color("text_primary", Appearance::Night),
            Ok(Color::from_hex(0xf7f7f7))
        );
        assert_eq!(
            provider
                .color("bg_brand_solid", Appearance::Day)
                .map(|c| c.to_argb()),
            Ok(0x80D5_4221)
        );
    }

    #[test]
    fn test_missing_entry_is_unknown_token() {
        let provider = TableProvider::from_toml_str(TABLE).unwrap();
        assert_eq!(
            provider.color("bg_brand_solid", Appearance::Night),
            Err(ResolveError::UnknownToken("bg_brand_solid".to_string()))
        );
    }

    #[test]
    fn test_missing_sections_are_empty() {
        let provider = TableProvider::from_toml_str("").unwrap();
        assert!(provider.is_empty());
    }

    #[test]
    fn test_invalid_color_names_the_token() {
        let err = TableProvider::from_toml_str("[day]\nfocus_ring = \"red\"\n").unwrap_err();
        match err {
            ThemeError::InvalidColor { token, .. } => assert_eq!(token, "focus_ring"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = TableProvider::from_toml_str("[day\n").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_builder_inserts() {
        let provider =
            TableProvider::new().with(Appearance::Day, "focus_ring", Color::from_hex(0x00ff00));
        assert_eq!(
            provider.color("focus_ring", Appearance::Day),
            Ok(Color::from_hex(0x00ff00))
        );
        assert!(provider.color("focus_ring", Appearance::Night).is_err());
    }
}
