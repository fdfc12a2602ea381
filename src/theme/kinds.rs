#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{FontWeight, SharedString};

use crate::theme::Theme;

/// Text size tiers that resolve to theme-defined values.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn resolve(&self, theme: &Theme) -> f32)]
pub enum TextSizeKind {
    #[assoc(resolve = theme.font_size.xs)]
    Xs,
    #[default]
    #[assoc(resolve = theme.font_size.sm)]
    Sm,
    #[assoc(resolve = theme.font_size.normal)]
    Normal,
    #[assoc(resolve = theme.font_size.md)]
    Md,
    #[assoc(resolve = theme.font_size.lg)]
    Lg,
}

/// A text size: either a theme tier or a fixed value in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextSize {
    Kind(TextSizeKind),
    Points(f32),
}

impl TextSize {
    pub fn resolve(&self, theme: &Theme) -> f32 {
        match self {
            TextSize::Kind(kind) => kind.resolve(theme),
            TextSize::Points(points) => *points,
        }
    }
}

impl Default for TextSize {
    fn default() -> Self {
        TextSize::Kind(TextSizeKind::default())
    }
}

impl From<TextSizeKind> for TextSize {
    fn from(kind: TextSizeKind) -> Self {
        TextSize::Kind(kind)
    }
}

impl From<f32> for TextSize {
    fn from(points: f32) -> Self {
        TextSize::Points(points)
    }
}

/// Avatar size tiers that resolve to theme-defined widths.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn resolve(&self, theme: &Theme) -> f32)]
pub enum AvatarSizeKind {
    #[default]
    #[assoc(resolve = theme.avatar_sizes.small)]
    Small,
    #[assoc(resolve = theme.avatar_sizes.medium)]
    Medium,
    #[assoc(resolve = theme.avatar_sizes.large)]
    Large,
    #[assoc(resolve = theme.avatar_sizes.xlarge)]
    Xlarge,
}

/// An avatar size: either a theme tier or a fixed width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AvatarSize {
    Kind(AvatarSizeKind),
    Points(f32),
}

impl AvatarSize {
    pub fn resolve(&self, theme: &Theme) -> f32 {
        match self {
            AvatarSize::Kind(kind) => kind.resolve(theme),
            AvatarSize::Points(points) => *points,
        }
    }
}

impl Default for AvatarSize {
    fn default() -> Self {
        AvatarSize::Kind(AvatarSizeKind::default())
    }
}

impl From<AvatarSizeKind> for AvatarSize {
    fn from(kind: AvatarSizeKind) -> Self {
        AvatarSize::Kind(kind)
    }
}

impl From<f32> for AvatarSize {
    fn from(points: f32) -> Self {
        AvatarSize::Points(points)
    }
}

/// Font weights. Each one selects a font family from the theme; when the
/// theme leaves that family unset the toolkit font is used with the
/// matching [`FontWeight`].
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[func(pub fn family(&self, theme: &Theme) -> Option<SharedString>)]
#[func(pub fn weight(&self) -> FontWeight)]
pub enum FontWeightKind {
    #[default]
    #[assoc(family = theme.font_family.regular.clone())]
    #[assoc(weight = FontWeight::NORMAL)]
    Normal,
    #[assoc(family = theme.font_family.medium.clone())]
    #[assoc(weight = FontWeight::MEDIUM)]
    Medium,
    #[assoc(family = theme.font_family.semibold.clone())]
    #[assoc(weight = FontWeight::SEMIBOLD)]
    Semibold,
    #[assoc(family = theme.font_family.bold.clone())]
    #[assoc(weight = FontWeight::BOLD)]
    Bold,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{AvatarSizes, FontFamilies, FontSizes, ThemePatch};

    #[test]
    fn test_text_size_kinds_follow_theme() {
        let theme = Theme::default();
        assert_eq!(TextSizeKind::Xs.resolve(&theme), 14.);
        assert_eq!(TextSizeKind::Sm.resolve(&theme), 16.);
        assert_eq!(TextSizeKind::Normal.resolve(&theme), 18.);
        assert_eq!(TextSizeKind::Md.resolve(&theme), 24.);
        assert_eq!(TextSizeKind::Lg.resolve(&theme), 36.);
        assert_eq!(TextSize::default().resolve(&theme), 16.);
    }

    #[test]
    fn test_numeric_sizes_bypass_theme() {
        let theme = ThemePatch::new()
            .font_size(FontSizes {
                xs: 1.,
                ..FontSizes::default()
            })
            .avatar_sizes(AvatarSizes {
                small: 1.,
                ..AvatarSizes::default()
            })
            .into_theme();

        assert_eq!(TextSize::from(22.).resolve(&theme), 22.);
        assert_eq!(AvatarSize::from(60.).resolve(&theme), 60.);
        assert_eq!(TextSize::from(TextSizeKind::Xs).resolve(&theme), 1.);
        assert_eq!(AvatarSize::default().resolve(&theme), 1.);
    }

    #[test]
    fn test_avatar_size_kinds_follow_theme() {
        let theme = Theme::default();
        assert_eq!(AvatarSizeKind::Small.resolve(&theme), 34.);
        assert_eq!(AvatarSizeKind::Medium.resolve(&theme), 50.);
        assert_eq!(AvatarSizeKind::Large.resolve(&theme), 75.);
        assert_eq!(AvatarSizeKind::Xlarge.resolve(&theme), 150.);
    }

    #[test]
    fn test_font_weight_family_lookup() {
        let theme = ThemePatch::new()
            .font_family(FontFamilies {
                bold: Some("Inter Bold".into()),
                ..FontFamilies::default()
            })
            .into_theme();

        assert_eq!(
            FontWeightKind::Bold.family(&theme),
            Some(SharedString::from("Inter Bold"))
        );
        assert_eq!(FontWeightKind::Normal.family(&theme), None);
        assert_eq!(FontWeightKind::Semibold.weight(), FontWeight::SEMIBOLD);
    }
}
