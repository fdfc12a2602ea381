use gpui::{
    AlignItems, AnyElement, App, CursorStyle, ElementId, InteractiveElement, IntoElement,
    JustifyContent, ParentElement, Pixels, RenderOnce, Rgba, SharedString, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    components::{Icon, Spacer, Text},
    extensions::pressable::{OnPressHandler, PressTracking, Pressable, use_pressed_state},
    resolve_styles,
    style::{Style, StyledExt},
    theme::{
        Shade, TextSize, TextSizeKind, Theme, ThemeScope, Themed, palette, resolve_theme,
        scope_for_children,
    },
    utils::{Platform, pressed_opacity_transition},
};

const DEFAULT_PAD: f32 = 18.;
const DIVIDER_WIDTH: f32 = 1.;
const PRESSED_OPACITY: f32 = 0.2;

/// Color of right-aligned titles.
const SECONDARY_TEXT: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.54,
};

fn container_padding(platform: Platform) -> Pixels {
    match platform {
        Platform::Ios => px(14.),
        Platform::Android => px(16.),
    }
}

/// A row of content, such as an avatar, a [`ListItemContent`] column and a
/// [`ListItemChevron`], separated by `pad` pixels.
#[derive(IntoElement)]
pub struct ListItem {
    id: ElementId,
    children: SmallVec<[AnyElement; 4]>,
    pad: f32,
    top_divider: bool,
    bottom_divider: bool,
    disabled: bool,
    container_style: Style,
    disabled_style: Style,
    divider_style: Style,
    on_press: Option<OnPressHandler>,
    theme: Option<ThemeScope>,
}

impl ListItem {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            children: SmallVec::new(),
            pad: DEFAULT_PAD,
            top_divider: false,
            bottom_divider: false,
            disabled: false,
            container_style: Style::default(),
            disabled_style: Style::default(),
            divider_style: Style::default(),
            on_press: None,
            theme: None,
        }
    }

    /// Horizontal space between children.
    pub fn pad(mut self, pad: f32) -> Self {
        self.pad = pad;
        self
    }

    pub fn top_divider(mut self, top_divider: bool) -> Self {
        self.top_divider = top_divider;
        self
    }

    pub fn bottom_divider(mut self, bottom_divider: bool) -> Self {
        self.bottom_divider = bottom_divider;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    /// Applied to the container while disabled.
    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    /// Applied on top of the divider borders when either is shown.
    pub fn divider_style(mut self, style: Style) -> Self {
        self.divider_style = style;
        self
    }

    fn resolved_style(&self, theme: &Theme, platform: Platform) -> Style {
        let has_divider = self.top_divider || self.bottom_divider;
        let divider = |shown: bool| if shown { px(DIVIDER_WIDTH) } else { px(0.) };

        resolve_styles![
            Style::new()
                .p(container_padding(platform))
                .flex_row()
                .align_items(AlignItems::Center)
                .bg(palette::WHITE)
                .border_color(theme.colors.border),
            has_divider => Style::new().border_widths(gpui::Edges {
                top: divider(self.top_divider),
                bottom: divider(self.bottom_divider),
                left: px(0.),
                right: px(0.),
            }),
            has_divider => &self.divider_style,
            &self.container_style,
            self.disabled => &self.disabled_style,
        ]
    }
}

impl ParentElement for ListItem {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl Pressable for ListItem {
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler> {
        &mut self.on_press
    }
}

impl Themed for ListItem {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for ListItem {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let style = self.resolved_style(&theme, Platform::current(cx));
        let is_interactive = !self.disabled && self.on_press.is_some();

        let pressed = use_pressed_state(&self.id, window, cx);
        let is_pressed = is_interactive && *pressed.read(cx);
        let opacity =
            pressed_opacity_transition(self.id.clone(), window, cx, is_pressed, PRESSED_OPACITY);

        let count = self.children.len();
        let pad = self.pad;
        let children = self
            .children
            .into_iter()
            .enumerate()
            .flat_map(|(index, child)| {
                let spacer = (pad > 0. && index + 1 < count)
                    .then(|| Spacer::new().size(pad).horizontal(true).into_any_element());
                std::iter::once(child).chain(spacer)
            });

        div()
            .id(self.id)
            .flex()
            .apply_style(&style)
            .opacity(*opacity.evaluate(window, cx))
            .children(children)
            .when(is_interactive, |this| {
                this.cursor(CursorStyle::PointingHand)
                    .when_some(self.on_press, |this, on_press| this.track_press(pressed, on_press))
            })
    }
}

/// The main text of a list item. `right` renders it as a secondary,
/// right-hand title.
#[derive(IntoElement)]
pub struct ListItemTitle {
    text: SharedString,
    right: bool,
    size: TextSize,
    color: Option<Rgba>,
    style: Style,
    theme: Option<ThemeScope>,
}

impl ListItemTitle {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            right: false,
            size: TextSizeKind::Sm.into(),
            color: None,
            style: Style::default(),
            theme: None,
        }
    }

    pub fn right(mut self, right: bool) -> Self {
        self.right = right;
        self
    }

    pub fn size(mut self, size: impl Into<TextSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn resolved_color(&self) -> Option<Rgba> {
        self.color.or(self.right.then_some(SECONDARY_TEXT))
    }
}

impl Themed for ListItemTitle {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for ListItemTitle {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let color = self.resolved_color();

        Text::new(self.text)
            .size(self.size)
            .style(self.style)
            .when_some(color, |this, color| this.color(color))
            .theme(&scope_for_children(self.theme.as_ref(), &theme))
    }
}

/// Secondary text beneath a [`ListItemTitle`].
#[derive(IntoElement)]
pub struct ListItemSubtitle {
    text: SharedString,
    size: TextSize,
    color: Option<Rgba>,
    style: Style,
    theme: Option<ThemeScope>,
}

impl ListItemSubtitle {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            size: TextSizeKind::Xs.into(),
            color: None,
            style: Style::default(),
            theme: None,
        }
    }

    pub fn size(mut self, size: impl Into<TextSize>) -> Self {
        self.size = size.into();
        self
    }

    /// Overrides the default `neutral[400]`.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Themed for ListItemSubtitle {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for ListItemSubtitle {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let color = self.color.unwrap_or(theme.colors.neutral[Shade::S400]);

        Text::new(self.text)
            .size(self.size)
            .color(color)
            .style(self.style)
            .theme(&scope_for_children(self.theme.as_ref(), &theme))
    }
}

/// A column holding a title and subtitle. The default variant takes the
/// remaining width; `right` takes a half share and aligns to the end.
#[derive(IntoElement, Default)]
pub struct ListItemContent {
    children: SmallVec<[AnyElement; 2]>,
    right: bool,
    style: Style,
}

impl ListItemContent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn right(mut self, right: bool) -> Self {
        self.right = right;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn resolved_style(&self) -> Style {
        let base = if self.right {
            Style::new()
                .flex_grow(0.5)
                .flex_shrink(0.5)
                .align_items(AlignItems::FlexEnd)
        } else {
            Style::new().flex_1().align_items(AlignItems::FlexStart)
        };

        resolve_styles![
            base.flex_col().justify_content(JustifyContent::Center),
            &self.style,
        ]
    }
}

impl ParentElement for ListItemContent {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl RenderOnce for ListItemContent {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex()
            .apply_style(&self.resolved_style())
            .children(self.children)
    }
}

/// A trailing `chevron-right` icon.
#[derive(IntoElement)]
pub struct ListItemChevron {
    id: ElementId,
    color: Option<Rgba>,
    size: Option<Pixels>,
    style: Style,
    theme: Option<ThemeScope>,
}

impl ListItemChevron {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            color: None,
            size: None,
            style: Style::default(),
            theme: None,
        }
    }

    /// Overrides the default `neutral[400]`.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Themed for ListItemChevron {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for ListItemChevron {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let color = self.color.unwrap_or(theme.colors.neutral[Shade::S400]);

        div()
            .self_center()
            .apply_style(&self.style)
            .child(
                Icon::new(self.id, "chevron-right")
                    .color(color)
                    .when_some(self.size, |this, size| this.size(size))
                    .theme(&scope_for_children(self.theme.as_ref(), &theme)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::rgb_hex;

    #[test]
    fn test_platform_padding() {
        let theme = Theme::default();
        let item = ListItem::new("item");

        let ios = item.resolved_style(&theme, Platform::Ios);
        assert_eq!(ios.padding.map(|padding| padding.left), Some(px(14.)));

        let android = item.resolved_style(&theme, Platform::Android);
        assert_eq!(android.padding.map(|padding| padding.top), Some(px(16.)));
        assert_eq!(android.border_color, Some(theme.colors.border));
        assert!(android.border_widths.is_none());
    }

    #[test]
    fn test_both_dividers() {
        let theme = Theme::default();
        let style = ListItem::new("item")
            .top_divider(true)
            .bottom_divider(true)
            .resolved_style(&theme, Platform::Ios);

        let widths = style.border_widths.unwrap();
        assert_eq!(widths.top, px(1.));
        assert_eq!(widths.bottom, px(1.));
        assert_eq!(widths.left, px(0.));
    }

    #[test]
    fn test_divider_style_needs_a_divider() {
        let theme = Theme::default();
        let red = rgb_hex(0xFF0000);
        let item = ListItem::new("item").divider_style(Style::new().border_color(red));

        assert_eq!(
            item.resolved_style(&theme, Platform::Ios).border_color,
            Some(theme.colors.border)
        );

        let item = item.bottom_divider(true);
        assert_eq!(item.resolved_style(&theme, Platform::Ios).border_color, Some(red));
    }

    #[test]
    fn test_disabled_style_applies_last() {
        let theme = Theme::default();
        let item = ListItem::new("item")
            .container_style(Style::new().bg(rgb_hex(0x00FF00)))
            .disabled_style(Style::new().bg(rgb_hex(0xEEEEEE)));

        assert_eq!(
            item.resolved_style(&theme, Platform::Ios).background,
            Some(rgb_hex(0x00FF00))
        );

        let item = item.disabled(true);
        assert_eq!(
            item.resolved_style(&theme, Platform::Ios).background,
            Some(rgb_hex(0xEEEEEE))
        );
    }

    #[test]
    fn test_right_title_is_secondary() {
        assert_eq!(ListItemTitle::new("a").resolved_color(), None);
        assert_eq!(
            ListItemTitle::new("a").right(true).resolved_color(),
            Some(SECONDARY_TEXT)
        );
        assert_eq!(
            ListItemTitle::new("a")
                .right(true)
                .color(palette::BLACK)
                .resolved_color(),
            Some(palette::BLACK)
        );
    }

    #[test]
    fn test_content_variants() {
        let left = ListItemContent::new().resolved_style();
        assert_eq!(left.flex_grow, Some(1.));
        assert_eq!(left.align_items, Some(AlignItems::FlexStart));

        let right = ListItemContent::new().right(true).resolved_style();
        assert_eq!(right.flex_grow, Some(0.5));
        assert_eq!(right.align_items, Some(AlignItems::FlexEnd));
        assert_eq!(right.justify_content, Some(JustifyContent::Center));
    }
}
