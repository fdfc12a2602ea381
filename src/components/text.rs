use gpui::{
    App, IntoElement, ParentElement, RenderOnce, Rgba, SharedString, Window, div, px,
};

use crate::{
    resolve_styles,
    style::{Style, StyledExt},
    theme::{FontWeightKind, TextSize, Theme, ThemeScope, Themed, resolve_theme},
    utils::FontScale,
};

/// Themed text.
///
/// The size is a theme tier or a number, normalized for the window width.
/// Size, font family and color are applied after the caller's style, so
/// they always win over it.
#[derive(IntoElement)]
pub struct Text {
    text: SharedString,
    size: TextSize,
    font_weight: FontWeightKind,
    color: Option<Rgba>,
    style: Style,
    theme: Option<ThemeScope>,
}

impl Text {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            size: TextSize::default(),
            font_weight: FontWeightKind::default(),
            color: None,
            style: Style::default(),
            theme: None,
        }
    }

    pub fn size(mut self, size: impl Into<TextSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn font_weight(mut self, font_weight: FontWeightKind) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Overrides the theme's text color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// The style the text is drawn with under `theme` and `scale`.
    pub(crate) fn resolved_style(&self, theme: &Theme, scale: &FontScale) -> Style {
        let font_size = scale.normalize(self.size.resolve(theme)).max(1) as f32;

        let mut props = Style::new()
            .text_size(px(font_size))
            .font_weight(self.font_weight.weight())
            .text_color(self.color.unwrap_or(theme.colors.text));
        if let Some(family) = self.font_weight.family(theme) {
            props = props.font_family(family);
        }

        resolve_styles![&self.style, props]
    }
}

impl Themed for Text {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for Text {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let style = self.resolved_style(&theme, &FontScale::from_window(window, cx));

        div().apply_style(&style).child(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        theme::{FontFamilies, TextSizeKind, ThemePatch, palette::rgb_hex},
        utils::Platform,
    };

    fn reference_scale() -> FontScale {
        FontScale::new(410., Platform::Ios)
    }

    #[test]
    fn test_default_size_and_color() {
        let theme = Theme::default();
        let style = Text::new("Hello").resolved_style(&theme, &reference_scale());

        assert_eq!(style.font_size, Some(px(16.)));
        assert_eq!(style.text_color, Some(theme.colors.text));
        assert_eq!(style.font_family, None);
    }

    #[test]
    fn test_tier_and_numeric_sizes() {
        let theme = Theme::default();
        let scale = reference_scale();

        let lg = Text::new("").size(TextSizeKind::Lg).resolved_style(&theme, &scale);
        assert_eq!(lg.font_size, Some(px(36.)));

        let numeric = Text::new("").size(20.).resolved_style(&theme, &scale);
        assert_eq!(numeric.font_size, Some(px(20.)));
    }

    #[test]
    fn test_size_is_normalized_for_screen() {
        let theme = Theme::default();
        let android = FontScale::new(360., Platform::Android);
        let style = Text::new("").resolved_style(&theme, &android);
        assert_eq!(style.font_size, Some(px(12.)));
    }

    #[test]
    fn test_size_never_collapses_to_zero() {
        let theme = Theme::default();
        let android = FontScale::new(360., Platform::Android);
        let style = Text::new("").size(2.).resolved_style(&theme, &android);
        assert_eq!(style.font_size, Some(px(1.)));
    }

    #[test]
    fn test_props_win_over_caller_style() {
        let theme = Theme::default();
        let red = rgb_hex(0xFF0000);
        let style = Text::new("")
            .color(red)
            .style(Style::new().text_color(rgb_hex(0x00FF00)).text_size(px(99.)).m(px(4.)))
            .resolved_style(&theme, &reference_scale());

        assert_eq!(style.text_color, Some(red));
        assert_eq!(style.font_size, Some(px(16.)));
        assert!(style.margin.is_some());
    }

    #[test]
    fn test_font_weight_selects_theme_family() {
        let theme = ThemePatch::new()
            .font_family(FontFamilies {
                semibold: Some("Inter SemiBold".into()),
                ..FontFamilies::default()
            })
            .into_theme();

        let style = Text::new("")
            .font_weight(FontWeightKind::Semibold)
            .resolved_style(&theme, &reference_scale());
        assert_eq!(style.font_family.as_deref(), Some("Inter SemiBold"));
    }
}
