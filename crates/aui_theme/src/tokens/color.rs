//! Color tokens and their built-in day/night values
//!
//! Every token is declared once with its resource name, its day value and,
//! when it differs, its night value. Both tables therefore always cover the
//! same keys.

use std::collections::hash_map::Entry;
use std::sync::OnceLock;

use aui_paint::Color;
use rustc_hash::FxHashMap;

use crate::theme::Appearance;

/// Color returned for names that are not tokens at all
pub const UNKNOWN_TOKEN_COLOR: Color = Color::BLACK;

macro_rules! color_tokens {
    (@night $day:literal) => {
        $day
    };
    (@night $day:literal, $night:literal) => {
        $night
    };
    ($(
        $(#[$meta:meta])*
        $variant:ident => $name:literal : $day:literal $(, $night:literal)? ;
    )*) => {
        /// Semantic color token keys
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
        pub enum ColorToken {
            $($(#[$meta])* $variant,)*
        }

        impl ColorToken {
            /// Every token, in declaration order
            pub const ALL: &'static [ColorToken] = &[$(ColorToken::$variant,)*];

            /// Resource-style name, e.g. `text_primary`
            pub const fn name(self) -> &'static str {
                match self {
                    $(ColorToken::$variant => $name,)*
                }
            }

            /// Built-in day value as 0xRRGGBB
            pub const fn day_hex(self) -> u32 {
                match self {
                    $(ColorToken::$variant => $day,)*
                }
            }

            /// Built-in night value as 0xRRGGBB
            pub const fn night_hex(self) -> u32 {
                match self {
                    $(ColorToken::$variant => color_tokens!(@night $day $(, $night)?),)*
                }
            }
        }
    };
}

color_tokens! {
    // Text
    TextBrandPrimary => "text_brand_primary": 0x391004, 0xf7f7f7;
    TextBrandSecondary => "text_brand_secondary": 0xb1311d, 0xcecfd2;
    TextBrandSecondaryHover => "text_brand_secondary_hover": 0x8d291f, 0xececed;
    TextBrandTertiary => "text_brand_tertiary": 0xd54221, 0x94979c;
    TextBrandTertiaryAlt => "text_brand_tertiary_alt": 0xd54221, 0xf7f7f7;
    TextDisabled => "text_disabled": 0x717680, 0x85888e;
    TextEditorIconFg => "text_editor_icon_fg": 0xa4a7ae, 0x94979c;
    TextEditorIconFgActive => "text_editor_icon_fg_active": 0x717680, 0xffffff;
    TextErrorPrimary => "text_error_primary": 0xd92d20, 0xf97066;
    TextErrorPrimaryHover => "text_error_primary_hover": 0xb42318, 0xfda29b;
    TextInverse => "text_inverse": 0xffffff, 0x000000;
    TextPlaceholder => "text_placeholder": 0x717680, 0x85888e;
    TextPlaceholderSubtle => "text_placeholder_subtle": 0xd5d7da, 0x373a41;
    TextPrimary => "text_primary": 0x181d27, 0xf7f7f7;
    TextPrimaryOnBrand => "text_primary_on_brand": 0xffffff, 0xf7f7f7;
    TextQuaternary => "text_quaternary": 0x717680, 0x94979c;
    TextQuaternaryOnBrand => "text_quaternary_on_brand": 0xf0a881, 0x94979c;
    TextSecondary => "text_secondary": 0x414651, 0xcecfd2;
    TextSecondaryHover => "text_secondary_hover": 0x252b37, 0xececed;
    TextSecondaryOnBrand => "text_secondary_on_brand": 0xf6cbb2, 0xcecfd2;
    TextSuccessPrimary => "text_success_primary": 0x079455, 0x47cd89;
    TextTertiary => "text_tertiary": 0x535862, 0x94979c;
    TextTertiaryHover => "text_tertiary_hover": 0x414651, 0xcecfd2;
    TextTertiaryOnBrand => "text_tertiary_on_brand": 0xf6cbb2, 0x94979c;
    TextWarningPrimary => "text_warning_primary": 0xdc6803, 0xfdb022;
    TextWhite => "text_white": 0xffffff;

    // Background
    BgActive => "bg_active": 0xfafafa, 0x26272b;
    BgBrandPrimary => "bg_brand_primary": 0xfdf5ef, 0xe35728;
    BgBrandPrimaryAlt => "bg_brand_primary_alt": 0xfdf5ef, 0x1a1a1e;
    BgBrandSecondary => "bg_brand_secondary": 0xfbe7d9, 0xd54221;
    BgBrandSection => "bg_brand_section": 0x8d291f, 0x1a1a1e;
    BgBrandSectionSubtle => "bg_brand_section_subtle": 0xb1311d, 0x131316;
    BgBrandSolid => "bg_brand_solid": 0xd54221;
    BgBrandSolidHover => "bg_brand_solid_hover": 0xb1311d, 0xe35728;
    BgDisabled => "bg_disabled": 0xf5f5f5, 0x26272b;
    BgDisabledSubtle => "bg_disabled_subtle": 0xfafafa, 0x1a1a1e;
    BgErrorPrimary => "bg_error_primary": 0xfef3f2, 0x55160c;
    BgErrorSecondary => "bg_error_secondary": 0xfee4e2, 0xd92d20;
    BgErrorSolid => "bg_error_solid": 0xd92d20;
    BgOverlay => "bg_overlay": 0x0a0d12, 0x26272b;
    BgPrimary => "bg_primary": 0xffffff, 0x131316;
    BgPrimary900 => "bg_primary_900": 0x181d27, 0xfafafa;
    BgPrimaryAlt => "bg_primary_alt": 0xffffff, 0x1a1a1e;
    BgPrimaryHover => "bg_primary_hover": 0xfafafa, 0x26272b;
    BgPrimarySolid => "bg_primary_solid": 0x0a0d12, 0x1a1a1e;
    BgQuaternary => "bg_quaternary": 0xe9eaeb, 0x3f3f46;
    BgSecondary => "bg_secondary": 0xfafafa, 0x1a1a1e;
    BgSecondaryAlt => "bg_secondary_alt": 0xfafafa, 0x131316;
    BgSecondaryHover => "bg_secondary_hover": 0xf5f5f5, 0x26272b;
    BgSecondarySolid => "bg_secondary_solid": 0x535862, 0x51525c;
    BgSecondarySubtle => "bg_secondary_subtle": 0xfdfdfd, 0x1a1a1e;
    BgSuccessPrimary => "bg_success_primary": 0xecfdf3, 0x053321;
    BgSuccessSecondary => "bg_success_secondary": 0xdcfae6, 0x079455;
    BgSuccessSolid => "bg_success_solid": 0x079455;
    BgTertiary => "bg_tertiary": 0xf5f5f5, 0x26272b;
    BgWarningPrimary => "bg_warning_primary": 0xfffaeb, 0x4e1d09;
    BgWarningSecondary => "bg_warning_secondary": 0xfef0c7, 0xdc6803;
    BgWarningSolid => "bg_warning_solid": 0xdc6803;

    // Border
    BorderBrand => "border_brand": 0xe35728, 0xe97b4e;
    BorderBrandAlt => "border_brand_alt": 0xd54221, 0x373a41;
    BorderDisabled => "border_disabled": 0xd5d7da, 0x3f3f46;
    BorderDisabledSubtle => "border_disabled_subtle": 0xe9eaeb, 0x26272b;
    BorderError => "border_error": 0xf04438, 0xf97066;
    BorderErrorSubtle => "border_error_subtle": 0xfda29b, 0xf04438;
    BorderInverse => "border_inverse": 0xffffff, 0x000000;
    BorderPrimary => "border_primary": 0xd5d7da, 0x3f3f46;
    BorderPrimary900 => "border_primary_900": 0x181d27, 0xfafafa;
    BorderSecondary => "border_secondary": 0xe9eaeb, 0x26272b;
    BorderSecondaryAlt => "border_secondary_alt": 0x000000, 0x3f3f46;
    BorderTertiary => "border_tertiary": 0xf5f5f5, 0x26272b;

    // Foreground
    FgBrandPrimary => "fg_brand_primary": 0xd54221, 0xe35728;
    FgBrandPrimaryAlt => "fg_brand_primary_alt": 0xd54221, 0xcecfd2;
    FgBrandSecondary => "fg_brand_secondary": 0xe35728;
    FgBrandSecondaryAlt => "fg_brand_secondary_alt": 0xe35728, 0x61656c;
    FgBrandSecondaryHover => "fg_brand_secondary_hover": 0xd54221, 0x85888e;
    FgDisabled => "fg_disabled": 0xa4a7ae, 0x85888e;
    FgDisabledSubtle => "fg_disabled_subtle": 0xd5d7da, 0x61656c;
    FgErrorPrimary => "fg_error_primary": 0xd92d20, 0xf04438;
    FgErrorSecondary => "fg_error_secondary": 0xf04438, 0xf97066;
    FgPrimary => "fg_primary": 0x181d27, 0xffffff;
    FgQuaternary => "fg_quaternary": 0xa4a7ae, 0x61656c;
    FgQuaternaryHover => "fg_quaternary_hover": 0x717680, 0x85888e;
    FgSecondary => "fg_secondary": 0x414651, 0xcecfd2;
    FgSecondaryHover => "fg_secondary_hover": 0x252b37, 0xececed;
    FgSuccessPrimary => "fg_success_primary": 0x079455, 0x17b26a;
    FgSuccessSecondary => "fg_success_secondary": 0x17b26a, 0x47cd89;
    FgTertiary => "fg_tertiary": 0x535862, 0x94979c;
    FgTertiaryHover => "fg_tertiary_hover": 0x414651, 0xcecfd2;
    FgWarningPrimary => "fg_warning_primary": 0xdc6803, 0xf79009;
    FgWarningSecondary => "fg_warning_secondary": 0xf79009, 0xfdb022;
    FgWhite => "fg_white": 0xffffff;

    // Button
    ButtonDestructivePrimaryIcon => "button_destructive_primary_icon": 0xfda29b;
    ButtonDestructivePrimaryIconHover => "button_destructive_primary_icon_hover": 0xfecdca;
    ButtonPrimaryIcon => "button_primary_icon": 0xf0a881;
    ButtonPrimaryIconHover => "button_primary_icon_hover": 0xf6cbb2;

    // Icon
    FeaturedIconLightFgBrand => "featured_icon_light_fg_brand": 0xd54221, 0xf6cbb2;
    FeaturedIconLightFgError => "featured_icon_light_fg_error": 0xd92d20, 0xfecdca;
    FeaturedIconLightFgGray => "featured_icon_light_fg_gray": 0x717680, 0xececed;
    FeaturedIconLightFgSuccess => "featured_icon_light_fg_success": 0x079455, 0xabefc6;
    FeaturedIconLightFgWarning => "featured_icon_light_fg_warning": 0xdc6803, 0xfedf89;
    IconFgBrandOnBrand => "icon_fg_brand_on_brand": 0xf6cbb2, 0x94979c;

    // Utility
    UtilityBlue100 => "utility_blue_100": 0xd1e9ff, 0x194185;
    UtilityBlue200 => "utility_blue_200": 0xb2ddff, 0x1849a9;
    UtilityBlue300 => "utility_blue_300": 0x84caff, 0x175cd3;
    UtilityBlue400 => "utility_blue_400": 0x53b1fd, 0x1570ef;
    UtilityBlue50 => "utility_blue_50": 0xeff8ff, 0x102a56;
    UtilityBlue500 => "utility_blue_500": 0x2e90fa;
    UtilityBlue600 => "utility_blue_600": 0x1570ef, 0x53b1fd;
    UtilityBlue700 => "utility_blue_700": 0x175cd3, 0x84caff;
    UtilityBlueDark100 => "utility_blue_dark_100": 0xd1e0ff, 0x00359e;
    UtilityBlueDark200 => "utility_blue_dark_200": 0xb2ccff, 0x0040c1;
    UtilityBlueDark300 => "utility_blue_dark_300": 0x84adff, 0x004eeb;
    UtilityBlueDark400 => "utility_blue_dark_400": 0x528bff, 0x155eef;
    UtilityBlueDark50 => "utility_blue_dark_50": 0xeff4ff, 0x002266;
    UtilityBlueDark500 => "utility_blue_dark_500": 0x2970ff;
    UtilityBlueDark600 => "utility_blue_dark_600": 0x155eef, 0x528bff;
    UtilityBlueDark700 => "utility_blue_dark_700": 0x004eeb, 0x84adff;
    UtilityBlueLight100 => "utility_blue_light_100": 0xe0f2fe, 0x0b4a6f;
    UtilityBlueLight200 => "utility_blue_light_200": 0xb9e6fe, 0x065986;
    UtilityBlueLight300 => "utility_blue_light_300": 0x7cd4fd, 0x026aa2;
    UtilityBlueLight400 => "utility_blue_light_400": 0x36bffa, 0x0086c9;
    UtilityBlueLight50 => "utility_blue_light_50": 0xf0f9ff, 0x062c41;
    UtilityBlueLight500 => "utility_blue_light_500": 0x0ba5ec;
    UtilityBlueLight600 => "utility_blue_light_600": 0x0086c9, 0x36bffa;
    UtilityBlueLight700 => "utility_blue_light_700": 0x026aa2, 0x7cd4fd;
    UtilityBrand100 => "utility_brand_100": 0xfbe7d9, 0x391004;
    UtilityBrand100Alt => "utility_brand_100_alt": 0xfbe7d9, 0x22262f;
    UtilityBrand200 => "utility_brand_200": 0xf6cbb2, 0x8d291f;
    UtilityBrand200Alt => "utility_brand_200_alt": 0xf6cbb2, 0x373a41;
    UtilityBrand300 => "utility_brand_300": 0xf0a881, 0xb1311d;
    UtilityBrand300Alt => "utility_brand_300_alt": 0xf0a881, 0x373a41;
    UtilityBrand400 => "utility_brand_400": 0xe97b4e, 0xd54221;
    UtilityBrand400Alt => "utility_brand_400_alt": 0xe97b4e, 0x61656c;
    UtilityBrand50 => "utility_brand_50": 0xfdf5ef, 0x290902;
    UtilityBrand500 => "utility_brand_500": 0xe35728;
    UtilityBrand500Alt => "utility_brand_500_alt": 0xe35728, 0x85888e;
    UtilityBrand50Alt => "utility_brand_50_alt": 0xfdf5ef, 0x13161b;
    UtilityBrand600 => "utility_brand_600": 0xd54221, 0xe97b4e;
    UtilityBrand600Alt => "utility_brand_600_alt": 0xd54221, 0x94979c;
    UtilityBrand700 => "utility_brand_700": 0xb1311d, 0xf0a881;
    UtilityBrand700Alt => "utility_brand_700_alt": 0xb1311d, 0xcecfd2;
    UtilityBrand800 => "utility_brand_800": 0x8d291f, 0xf6cbb2;
    UtilityBrand800Alt => "utility_brand_800_alt": 0x8d291f, 0xececed;
    UtilityBrand900 => "utility_brand_900": 0x391004, 0xfbe7d9;
    UtilityBrand900Alt => "utility_brand_900_alt": 0x391004, 0xf0f0f1;
    UtilityError100 => "utility_error_100": 0xfee4e2, 0x7a271a;
    UtilityError200 => "utility_error_200": 0xfecdca, 0x912018;
    UtilityError300 => "utility_error_300": 0xfda29b, 0xb42318;
    UtilityError400 => "utility_error_400": 0xf97066, 0xd92d20;
    UtilityError50 => "utility_error_50": 0xfef3f2, 0x55160c;
    UtilityError500 => "utility_error_500": 0xf04438;
    UtilityError600 => "utility_error_600": 0xd92d20, 0xf97066;
    UtilityError700 => "utility_error_700": 0xb42318, 0xfda29b;
    UtilityFuchsia100 => "utility_fuchsia_100": 0xfbe8ff, 0x6f1877;
    UtilityFuchsia200 => "utility_fuchsia_200": 0xf6d0fe, 0x821890;
    UtilityFuchsia300 => "utility_fuchsia_300": 0xeeaafd, 0x9f1ab1;
    UtilityFuchsia400 => "utility_fuchsia_400": 0xe478fa, 0xba24d5;
    UtilityFuchsia50 => "utility_fuchsia_50": 0xfdf4ff, 0x47104c;
    UtilityFuchsia500 => "utility_fuchsia_500": 0xd444f1;
    UtilityFuchsia600 => "utility_fuchsia_600": 0xba24d5, 0xe478fa;
    UtilityFuchsia700 => "utility_fuchsia_700": 0x9f1ab1, 0xeeaafd;
    UtilityGray100 => "utility_gray_100": 0xf5f5f5, 0x22262f;
    UtilityGray200 => "utility_gray_200": 0xe9eaeb, 0x373a41;
    UtilityGray300 => "utility_gray_300": 0xd5d7da, 0x373a41;
    UtilityGray400 => "utility_gray_400": 0xa4a7ae, 0x61656c;
    UtilityGray50 => "utility_gray_50": 0xfafafa, 0x13161b;
    UtilityGray500 => "utility_gray_500": 0x717680, 0x85888e;
    UtilityGray600 => "utility_gray_600": 0x535862, 0x94979c;
    UtilityGray700 => "utility_gray_700": 0x414651, 0xcecfd2;
    UtilityGray800 => "utility_gray_800": 0x252b37, 0xececed;
    UtilityGray900 => "utility_gray_900": 0x181d27, 0xf0f0f1;
    UtilityGrayBlue100 => "utility_gray_blue_100": 0xeaecf5, 0x101323;
    UtilityGrayBlue200 => "utility_gray_blue_200": 0xd5d9eb, 0x293056;
    UtilityGrayBlue300 => "utility_gray_blue_300": 0xb3b8db, 0x363f72;
    UtilityGrayBlue400 => "utility_gray_blue_400": 0x717bbc, 0x3e4784;
    UtilityGrayBlue50 => "utility_gray_blue_50": 0xf8f9fc, 0x0d0f1c;
    UtilityGrayBlue500 => "utility_gray_blue_500": 0x4e5ba6;
    UtilityGrayBlue600 => "utility_gray_blue_600": 0x3e4784, 0x717bbc;
    UtilityGrayBlue700 => "utility_gray_blue_700": 0x363f72, 0xb3b8db;
    UtilityGreen100 => "utility_green_100": 0xd3f8df, 0x084c2e;
    UtilityGreen200 => "utility_green_200": 0xaaf0c4, 0x095c37;
    UtilityGreen300 => "utility_green_300": 0x73e2a3, 0x087443;
    UtilityGreen400 => "utility_green_400": 0x3ccb7f, 0x099250;
    UtilityGreen50 => "utility_green_50": 0xedfcf2, 0x052e1c;
    UtilityGreen500 => "utility_green_500": 0x16b364;
    UtilityGreen600 => "utility_green_600": 0x099250, 0x3ccb7f;
    UtilityGreen700 => "utility_green_700": 0x087443, 0x73e2a3;
    UtilityIndigo100 => "utility_indigo_100": 0xe0eaff, 0x2d3282;
    UtilityIndigo200 => "utility_indigo_200": 0xc7d7fe, 0x2d31a6;
    UtilityIndigo300 => "utility_indigo_300": 0xa4bcfd, 0x3538cd;
    UtilityIndigo400 => "utility_indigo_400": 0x8098f9, 0x444ce7;
    UtilityIndigo50 => "utility_indigo_50": 0xeef4ff, 0x1f235b;
    UtilityIndigo500 => "utility_indigo_500": 0x6172f3;
    UtilityIndigo600 => "utility_indigo_600": 0x444ce7, 0x8098f9;
    UtilityIndigo700 => "utility_indigo_700": 0x3538cd, 0xa4bcfd;
    UtilityOrange100 => "utility_orange_100": 0xfdead7, 0x772917;
    UtilityOrange200 => "utility_orange_200": 0xf9dbaf, 0x932f19;
    UtilityOrange300 => "utility_orange_300": 0xf7b27a, 0xb93815;
    UtilityOrange400 => "utility_orange_400": 0xf38744, 0xe04f16;
    UtilityOrange50 => "utility_orange_50": 0xfef6ee, 0x511c10;
    UtilityOrange500 => "utility_orange_500": 0xef6820;
    UtilityOrange600 => "utility_orange_600": 0xe04f16, 0xf38744;
    UtilityOrange700 => "utility_orange_700": 0xb93815, 0xf7b27a;
    UtilityOrangeDark100 => "utility_orange_dark_100": 0xffe6d5, 0x771a0d;
    UtilityOrangeDark200 => "utility_orange_dark_200": 0xffd6ae, 0x97180c;
    UtilityOrangeDark300 => "utility_orange_dark_300": 0xff9c66, 0xbc1b06;
    UtilityOrangeDark400 => "utility_orange_dark_400": 0xff692e, 0xe62e05;
    UtilityOrangeDark50 => "utility_orange_dark_50": 0xfff4ed, 0x57130a;
    UtilityOrangeDark500 => "utility_orange_dark_500": 0xff4405;
    UtilityOrangeDark600 => "utility_orange_dark_600": 0xe62e05, 0xff692e;
    UtilityOrangeDark700 => "utility_orange_dark_700": 0xbc1b06, 0xff9c66;
    UtilityPink100 => "utility_pink_100": 0xfce7f6, 0x851651;
    UtilityPink200 => "utility_pink_200": 0xfcceee, 0x9e165f;
    UtilityPink300 => "utility_pink_300": 0xfaa7e0, 0xc11574;
    UtilityPink400 => "utility_pink_400": 0xf670c7, 0xdd2590;
    UtilityPink50 => "utility_pink_50": 0xfdf2fa, 0x4e0d30;
    UtilityPink500 => "utility_pink_500": 0xee46bc;
    UtilityPink600 => "utility_pink_600": 0xdd2590, 0xf670c7;
    UtilityPink700 => "utility_pink_700": 0xc11574, 0xfaa7e0;
    UtilityPurple100 => "utility_purple_100": 0xebe9fe, 0x3e1c96;
    UtilityPurple200 => "utility_purple_200": 0xd9d6fe, 0x4a1fb8;
    UtilityPurple300 => "utility_purple_300": 0xbdb4fe, 0x5925dc;
    UtilityPurple400 => "utility_purple_400": 0x9b8afb, 0x6938ef;
    UtilityPurple50 => "utility_purple_50": 0xf4f3ff, 0x27115f;
    UtilityPurple500 => "utility_purple_500": 0x7a5af8;
    UtilityPurple600 => "utility_purple_600": 0x6938ef, 0x9b8afb;
    UtilityPurple700 => "utility_purple_700": 0x5925dc, 0xbdb4fe;
    UtilitySuccess100 => "utility_success_100": 0xdcfae6, 0x074d31;
    UtilitySuccess200 => "utility_success_200": 0xabefc6, 0x085d3a;
    UtilitySuccess300 => "utility_success_300": 0x75e0a7, 0x067647;
    UtilitySuccess400 => "utility_success_400": 0x47cd89, 0x079455;
    UtilitySuccess50 => "utility_success_50": 0xecfdf3, 0x053321;
    UtilitySuccess500 => "utility_success_500": 0x17b26a;
    UtilitySuccess600 => "utility_success_600": 0x079455, 0x47cd89;
    UtilitySuccess700 => "utility_success_700": 0x067647, 0x75e0a7;
    UtilityWarning100 => "utility_warning_100": 0xfef0c7, 0x7a2e0e;
    UtilityWarning200 => "utility_warning_200": 0xfedf89, 0x93370d;
    UtilityWarning300 => "utility_warning_300": 0xfec84b, 0xb54708;
    UtilityWarning400 => "utility_warning_400": 0xfdb022, 0xdc6803;
    UtilityWarning50 => "utility_warning_50": 0xfffaeb, 0x4e1d09;
    UtilityWarning500 => "utility_warning_500": 0xf79009;
    UtilityWarning600 => "utility_warning_600": 0xdc6803, 0xfdb022;
    UtilityWarning700 => "utility_warning_700": 0xb54708, 0xfec84b;
    UtilityYellow100 => "utility_yellow_100": 0xfef7c3, 0x713b12;
    UtilityYellow200 => "utility_yellow_200": 0xfeee95, 0x854a0e;
    UtilityYellow300 => "utility_yellow_300": 0xfde272, 0xa15c07;
    UtilityYellow400 => "utility_yellow_400": 0xfac515, 0xca8504;
    UtilityYellow50 => "utility_yellow_50": 0xfefbe8, 0x542c0d;
    UtilityYellow500 => "utility_yellow_500": 0xeaaa08;
    UtilityYellow600 => "utility_yellow_600": 0xca8504, 0xfac515;
    UtilityYellow700 => "utility_yellow_700": 0xa15c07, 0xfde272;

    // Other
    AlphaBlack10 => "alpha_black_10": 0x000000, 0xffffff;
    AlphaBlack100 => "alpha_black_100": 0x000000, 0xffffff;
    AlphaBlack20 => "alpha_black_20": 0x000000, 0xffffff;
    AlphaBlack30 => "alpha_black_30": 0x000000, 0xffffff;
    AlphaBlack40 => "alpha_black_40": 0x000000, 0xffffff;
    AlphaBlack50 => "alpha_black_50": 0x000000, 0xffffff;
    AlphaBlack60 => "alpha_black_60": 0x000000, 0xffffff;
    AlphaBlack70 => "alpha_black_70": 0x000000, 0xffffff;
    AlphaBlack80 => "alpha_black_80": 0x000000, 0xffffff;
    AlphaBlack90 => "alpha_black_90": 0x000000, 0xffffff;
    AlphaWhite10 => "alpha_white_10": 0xffffff, 0x0c0e12;
    AlphaWhite100 => "alpha_white_100": 0xffffff, 0x0c0e12;
    AlphaWhite20 => "alpha_white_20": 0xffffff, 0x0c0e12;
    AlphaWhite30 => "alpha_white_30": 0xffffff, 0x0c0e12;
    AlphaWhite40 => "alpha_white_40": 0xffffff, 0x0c0e12;
    AlphaWhite50 => "alpha_white_50": 0xffffff, 0x0c0e12;
    AlphaWhite60 => "alpha_white_60": 0xffffff, 0x0c0e12;
    AlphaWhite70 => "alpha_white_70": 0xffffff, 0x0c0e12;
    AlphaWhite80 => "alpha_white_80": 0xffffff, 0x0c0e12;
    AlphaWhite90 => "alpha_white_90": 0xffffff, 0x0c0e12;
    AppStoreBadgeBorder => "app_store_badge_border": 0xa3a3a3, 0xffffff;
    AvatarStylesBgNeutral => "avatar_styles_bg_neutral": 0xe5e5e5;
    FocusRing => "focus_ring": 0xe35728;
    FocusRingError => "focus_ring_error": 0xf04438;
    FooterButtonFg => "footer_button_fg": 0xf6cbb2, 0xcecfd2;
    FooterButtonFgHover => "footer_button_fg_hover": 0xffffff, 0xf0f0f1;
    ScreenMockupBorder => "screen_mockup_border": 0x181d27, 0x373a41;
    Shadow2xl01 => "shadow_2xl_01": 0x0a0d12, 0xffffff;
    Shadow2xl02 => "shadow_2xl_02": 0x0a0d12, 0xffffff;
    Shadow3xl01 => "shadow_3xl_01": 0x0a0d12, 0xffffff;
    Shadow3xl02 => "shadow_3xl_02": 0x0a0d12, 0xffffff;
    ShadowGridMd => "shadow_grid_md": 0x0a0d12, 0xffffff;
    ShadowLg01 => "shadow_lg_01": 0x0a0d12, 0xffffff;
    ShadowLg02 => "shadow_lg_02": 0x0a0d12, 0xffffff;
    ShadowLg03 => "shadow_lg_03": 0x0a0d12, 0xffffff;
    ShadowMainCentreLg => "shadow_main_centre_lg": 0x0a0d12, 0xffffff;
    ShadowMainCentreMd => "shadow_main_centre_md": 0x0a0d12, 0xffffff;
    ShadowMd01 => "shadow_md_01": 0x0a0d12, 0xffffff;
    ShadowMd02 => "shadow_md_02": 0x0a0d12, 0xffffff;
    ShadowOverlayLg => "shadow_overlay_lg": 0x0a0d12, 0xffffff;
    ShadowSkeumorphicInner => "shadow_skeumorphic_inner": 0x0a0d12, 0x0c0e12;
    ShadowSkeumorphicInnerBorder => "shadow_skeumorphic_inner_border": 0x0a0d12, 0x0c0e12;
    ShadowSm01 => "shadow_sm_01": 0x0a0d12, 0xffffff;
    ShadowSm02 => "shadow_sm_02": 0x0a0d12, 0xffffff;
    ShadowXl01 => "shadow_xl_01": 0x0a0d12, 0xffffff;
    ShadowXl02 => "shadow_xl_02": 0x0a0d12, 0xffffff;
    ShadowXl03 => "shadow_xl_03": 0x0a0d12, 0xffffff;
    ShadowXs => "shadow_xs": 0x0a0d12, 0xffffff;
    SliderHandleBg => "slider_handle_bg": 0xffffff, 0xe35728;
    SliderHandleBorder => "slider_handle_border": 0xd54221, 0x131316;
    ToggleBorder => "toggle_border": 0xd5d7da, 0xffffff;
    ToggleButtonFgDisabled => "toggle_button_fg_disabled": 0xfafafa, 0x61656c;
    ToggleSlimBorderPressed => "toggle_slim_border_pressed": 0xd54221, 0xffffff;
    ToggleSlimBorderPressedHover => "toggle_slim_border_pressed_hover": 0xb1311d, 0xffffff;
    TooltipSupportingText => "tooltip_supporting_text": 0xd5d7da, 0xcecfd2;
}

impl ColorToken {
    /// Look up a token by its resource name
    pub fn from_name(name: &str) -> Option<ColorToken> {
        static BY_NAME: OnceLock<FxHashMap<&'static str, ColorToken>> = OnceLock::new();
        BY_NAME
            .get_or_init(|| {
                let mut map = FxHashMap::default();
                for &token in ColorToken::ALL {
                    match map.entry(token.name()) {
                        Entry::Vacant(slot) => {
                            slot.insert(token);
                        }
                        Entry::Occupied(existing) => {
                            tracing::warn!(
                                "duplicate color token name `{}` ({:?} and {:?})",
                                token.name(),
                                existing.get(),
                                token
                            );
                        }
                    }
                }
                map
            })
            .get(name)
            .copied()
    }

    /// Built-in value for the given appearance, as 0xRRGGBB
    pub const fn hex(self, appearance: Appearance) -> u32 {
        match appearance {
            Appearance::Day => self.day_hex(),
            Appearance::Night => self.night_hex(),
        }
    }

    /// True when day and night share one value
    pub const fn is_appearance_invariant(self) -> bool {
        self.day_hex() == self.night_hex()
    }
}

/// Built-in color for a token. Total: every token has both values.
pub fn fallback_color(token: ColorToken, appearance: Appearance) -> Color {
    Color::from_hex(token.hex(appearance))
}

/// Built-in color for a token name; unknown names give opaque black
pub fn fallback_color_by_name(name: &str, appearance: Appearance) -> Color {
    match ColorToken::from_name(name) {
        Some(token) => fallback_color(token, appearance),
        None => UNKNOWN_TOKEN_COLOR,
    }
}
