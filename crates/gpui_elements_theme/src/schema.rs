use std::sync::{Arc, LazyLock};

use gpui::{Rgba, SharedString};
use serde::Deserialize;

use crate::{
    deserializers::de_color,
    palette::{self, ColorRamp, rgb_hex},
};

static DEFAULT_THEME: LazyLock<Arc<Theme>> = LazyLock::new(|| Arc::new(Theme::default()));

/// Colors, font families, font sizes and avatar sizes shared by every
/// component.
///
/// Every tier is a plain field, so a `Theme` can never be missing a value a
/// component asks for. Partial configuration goes through
/// [`ThemePatch`](crate::ThemePatch) or the serde defaults below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub colors: ThemeColors,
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub avatar_sizes: AvatarSizes,
}

impl Theme {
    /// The process-wide default theme. Built on first use and shared after.
    pub fn default_arc() -> Arc<Theme> {
        DEFAULT_THEME.clone()
    }
}

impl AsRef<Theme> for Theme {
    fn as_ref(&self) -> &Theme {
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    pub primary: ColorRamp,
    pub neutral: ColorRamp,
    pub danger: ColorRamp,
    pub warning: ColorRamp,
    pub success: ColorRamp,
    #[serde(deserialize_with = "de_color")]
    pub background: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub card: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub text: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub border: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub notification: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub disabled: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub black: Rgba,
    #[serde(deserialize_with = "de_color")]
    pub white: Rgba,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: palette::BLUE,
            neutral: palette::GRAY,
            danger: palette::RED,
            warning: palette::YELLOW,
            success: palette::GREEN,
            background: rgb_hex(0xF2F2F2),
            card: rgb_hex(0xFFFFFF),
            text: rgb_hex(0x1C1C1E),
            border: palette::GRAY[palette::Shade::S200],
            notification: rgb_hex(0xFF453A),
            disabled: rgb_hex(0xCCCCCC),
            black: palette::BLACK,
            white: palette::WHITE,
        }
    }
}

/// Font identifiers per weight. `None` leaves the toolkit's default font.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontFamilies {
    pub regular: Option<SharedString>,
    pub medium: Option<SharedString>,
    pub semibold: Option<SharedString>,
    pub bold: Option<SharedString>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub xs: f32,
    pub sm: f32,
    pub normal: f32,
    pub md: f32,
    pub lg: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            xs: 14.,
            sm: 16.,
            normal: 18.,
            md: 24.,
            lg: 36.,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct AvatarSizes {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub xlarge: f32,
}

impl Default for AvatarSizes {
    fn default() -> Self {
        Self {
            small: 34.,
            medium: 50.,
            large: 75.,
            xlarge: 150.,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Shade;

    #[test]
    fn test_default_theme_is_shared() {
        assert!(Arc::ptr_eq(&Theme::default_arc(), &Theme::default_arc()));
        assert_eq!(*Theme::default_arc(), Theme::default());
    }

    #[test]
    fn test_default_sizes() {
        let theme = Theme::default();
        assert_eq!(theme.font_size.sm, 16.);
        assert_eq!(theme.font_size.lg, 36.);
        assert_eq!(theme.avatar_sizes.small, 34.);
        assert_eq!(theme.avatar_sizes.xlarge, 150.);
    }

    #[test]
    fn test_default_border_follows_neutral_ramp() {
        let colors = ThemeColors::default();
        assert_eq!(colors.border, colors.neutral[Shade::S200]);
    }

    #[test]
    fn test_partial_json_fills_missing_tiers() {
        let theme: Theme = serde_json::from_str(
            r##"{
                "font_size": { "md": 30 },
                "colors": { "text": "rgb(0, 0, 0)" }
            }"##,
        )
        .unwrap();

        assert_eq!(theme.font_size.md, 30.);
        assert_eq!(theme.font_size.xs, 14.);
        assert_eq!(theme.colors.text, rgb_hex(0x000000));
        assert_eq!(theme.colors.primary, palette::BLUE);
        assert_eq!(theme.avatar_sizes, AvatarSizes::default());
    }

    #[test]
    fn test_font_families_default_to_none() {
        let theme: Theme =
            serde_json::from_str(r##"{ "font_family": { "bold": "Inter Bold" } }"##).unwrap();
        assert_eq!(theme.font_family.bold.as_deref(), Some("Inter Bold"));
        assert!(theme.font_family.regular.is_none());
    }
}
