use gpui::{
    AlignSelf, App, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce,
    SharedString, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{
    components::Text,
    extensions::pressable::{OnPressHandler, PressTracking, Pressable, use_pressed_state},
    resolve_styles,
    style::{Style, StyledExt},
    theme::{TextSize, TextSizeKind, ThemeScope, Themed, palette, resolve_theme, scope_for_children},
    utils::WindowPixelsExt,
};

const SIZE: f32 = 18.;
const MINI_SIZE: f32 = 8.;

/// A small pill holding a short value, or a dot when there is no value.
#[derive(IntoElement)]
pub struct Badge {
    id: ElementId,
    value: Option<SharedString>,
    size: TextSizeKind,
    badge_style: Style,
    text_style: Style,
    container_style: Style,
    on_press: Option<OnPressHandler>,
    theme: Option<ThemeScope>,
}

impl Badge {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: None,
            size: TextSizeKind::Normal,
            badge_style: Style::default(),
            text_style: Style::default(),
            container_style: Style::default(),
            on_press: None,
            theme: None,
        }
    }

    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Text size tier. A font size in `text_style` takes precedence.
    pub fn size(mut self, size: TextSizeKind) -> Self {
        self.size = size;
        self
    }

    pub fn badge_style(mut self, style: Style) -> Self {
        self.badge_style = style;
        self
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    pub fn is_mini(&self) -> bool {
        self.value.is_none()
    }

    fn resolved_badge_style(&self, hairline: Pixels) -> Style {
        resolve_styles![
            Style::new()
                .min_w(px(SIZE))
                .h(px(SIZE))
                .rounded(px(SIZE / 2.))
                .align_items(gpui::AlignItems::Center)
                .justify_content(gpui::JustifyContent::Center)
                .border(hairline)
                .border_color(palette::WHITE),
            self.is_mini() => Style::new()
                .p(px(0.))
                .min_w(px(MINI_SIZE))
                .h(px(MINI_SIZE))
                .rounded(px(MINI_SIZE / 2.)),
            &self.badge_style,
        ]
    }

    fn resolved_text_style(&self) -> Style {
        resolve_styles![Style::new().px(px(4.)), &self.text_style]
    }

    fn text_size(&self, text_style: &Style) -> TextSize {
        match text_style.font_size {
            Some(size) => TextSize::Points(size.to_f64() as f32),
            None => self.size.into(),
        }
    }
}

impl Pressable for Badge {
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler> {
        &mut self.on_press
    }
}

impl Themed for Badge {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for Badge {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let scope = scope_for_children(self.theme.as_ref(), &theme);
        let pressed = use_pressed_state(&self.id, window, cx);

        let badge_style = self.resolved_badge_style(window.hairline());
        let text_style = self.resolved_text_style();
        let text_size = self.text_size(&text_style);
        let text_color = text_style.text_color.unwrap_or(palette::BLACK);

        div().apply_style(&self.container_style).child(
            div()
                .id(self.id)
                .flex()
                .map(|mut this| {
                    this.style().align_self = Some(AlignSelf::Center);
                    this
                })
                .apply_style(&badge_style)
                .when_some(self.value, |this, value| {
                    this.child(
                        Text::new(value)
                            .size(text_size)
                            .color(text_color)
                            .style(text_style)
                            .theme(&scope),
                    )
                })
                .when_some(self.on_press, |this, on_press| {
                    this.cursor_pointer().track_press(pressed, on_press)
                }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::rgb_hex;

    #[test]
    fn test_badge_with_value() {
        let badge = Badge::new("badge").value("3");
        assert!(!badge.is_mini());

        let style = badge.resolved_badge_style(px(1.));
        assert_eq!(style.height, Some(px(18.).into()));
        assert_eq!(style.min_width, Some(px(18.).into()));
        assert_eq!(style.corner_radius, Some(px(9.)));
        assert_eq!(style.border_color, Some(palette::WHITE));
    }

    #[test]
    fn test_badge_without_value_is_mini() {
        let badge = Badge::new("badge");
        assert!(badge.is_mini());

        let style = badge.resolved_badge_style(px(1.));
        assert_eq!(style.height, Some(px(8.).into()));
        assert_eq!(style.corner_radius, Some(px(4.)));
        assert_eq!(style.padding.map(|padding| padding.left), Some(px(0.)));
    }

    #[test]
    fn test_badge_style_wins() {
        let style = Badge::new("badge")
            .badge_style(Style::new().bg(rgb_hex(0xFF0000)).h(px(30.)))
            .resolved_badge_style(px(1.));
        assert_eq!(style.background, Some(rgb_hex(0xFF0000)));
        assert_eq!(style.height, Some(px(30.).into()));
    }

    #[test]
    fn test_text_size_prefers_text_style() {
        let badge = Badge::new("badge").value("1").size(TextSizeKind::Lg);
        assert_eq!(badge.text_size(&badge.resolved_text_style()), TextSize::Kind(TextSizeKind::Lg));

        let badge = badge.text_style(Style::new().text_size(px(11.)));
        assert_eq!(badge.text_size(&badge.resolved_text_style()), TextSize::Points(11.));
    }
}
