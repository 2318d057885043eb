use aui_theme::{
    fallback_color, Appearance, Color, ColorResolver, ColorToken, ResolveError, TableProvider,
};

/// A provider in its failure mode: the platform resources are not set up.
fn unavailable(_: &str, _: Appearance) -> Result<Color, ResolveError> {
    Err(ResolveError::Unavailable)
}

#[test]
fn documented_literals_resolve_per_appearance() {
    let cases = [
        ("text_primary", 0x181d27, 0xf7f7f7),
        ("text_brand_primary", 0x391004, 0xf7f7f7),
        ("text_inverse", 0xffffff, 0x000000),
        ("bg_primary", 0xffffff, 0x131316),
        ("bg_brand_solid", 0xd54221, 0xd54221),
        ("focus_ring_error", 0xf04438, 0xf04438),
        ("alpha_white_100", 0xffffff, 0x0c0e12),
        ("tooltip_supporting_text", 0xd5d7da, 0xcecfd2),
    ];

    let day = ColorResolver::new(unavailable, Appearance::Day);
    let night = ColorResolver::new(unavailable, Appearance::Night);

    for (name, day_hex, night_hex) in cases {
        assert_eq!(
            day.resolve_name(name),
            Color::from_hex(day_hex),
            "{name} (day)"
        );
        assert_eq!(
            night.resolve_name(name),
            Color::from_hex(night_hex),
            "{name} (night)"
        );
    }
}

#[test]
fn unrecognized_tokens_resolve_to_opaque_black() {
    for appearance in [Appearance::Day, Appearance::Night] {
        let resolver = ColorResolver::fallback_only(appearance);
        for name in ["", "text_primary_2", "TEXT_PRIMARY", "does_not_exist"] {
            let color = resolver.resolve_name(name);
            assert_eq!(color, Color::BLACK, "{name:?} ({appearance:?})");
            assert_eq!(color.to_argb(), 0xFF00_0000);
        }
    }
}

#[test]
fn every_token_has_day_and_night_entries() {
    assert_eq!(ColorToken::ALL.len(), 306);
    for &token in ColorToken::ALL {
        let day = fallback_color(token, Appearance::Day);
        let night = fallback_color(token, Appearance::Night);
        assert_eq!(day.a, 1.0, "{token:?} day is opaque");
        assert_eq!(night.a, 1.0, "{token:?} night is opaque");
    }
}

#[test]
fn resolution_is_idempotent() {
    let resolver = ColorResolver::fallback_only(Appearance::Night);
    for &token in ColorToken::ALL {
        assert_eq!(resolver.resolve(token), resolver.resolve(token));
        assert_eq!(resolver.resolve(token), resolver.resolve_name(token.name()));
    }
}

#[test]
fn partial_provider_is_backfilled_by_fallback() {
    let provider = TableProvider::from_toml_str(
        r##"
[day]
text_primary = "#000001"
"##,
    )
    .unwrap();
    let resolver = ColorResolver::new(provider, Appearance::Day);

    assert_eq!(
        resolver.resolve(ColorToken::TextPrimary),
        Color::from_hex(0x000001)
    );
    assert_eq!(
        resolver.resolve(ColorToken::TextSecondary),
        Color::from_hex(0x414651)
    );
}

#[test]
fn provider_can_define_extra_tokens() {
    let provider = TableProvider::new().with(Appearance::Night, "brand_glow", Color::WHITE);
    let resolver = ColorResolver::new(provider, Appearance::Night);

    assert_eq!(resolver.resolve_name("brand_glow"), Color::WHITE);
    assert_eq!(resolver.resolve_name("brand_shadow"), Color::BLACK);
}

#[test]
fn table_file_loads_from_disk() {
    let path = std::env::temp_dir().join(format!("aui_theme_table_{}.toml", std::process::id()));
    std::fs::write(&path, "[night]\nbg_primary = \"#010203\"\n").unwrap();

    let provider = TableProvider::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let resolver = ColorResolver::new(provider, Appearance::Night);
    assert_eq!(
        resolver.resolve(ColorToken::BgPrimary),
        Color::from_hex(0x010203)
    );
}

#[test]
fn missing_table_file_is_io_error() {
    let err = TableProvider::load("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, aui_theme::ThemeError::Io(_)));
}
