use gpui::{
    AnyElement, App, ElementId, ImageSource, InteractiveElement, IntoElement, ParentElement,
    Pixels, RenderOnce, SharedString, Styled, TextAlign, Window, div, prelude::FluentBuilder, px,
};
use smallvec::SmallVec;

use crate::{
    ElementIdExt,
    components::{Icon, Image},
    extensions::pressable::{OnPressHandler, PressTracking, Pressable, use_pressed_state},
    icons::{IconSpec, IconType},
    resolve_styles,
    style::{Style, StyledExt},
    theme::{
        AvatarSize, Theme, ThemeScope, Themed, palette, resolve_theme, rgb_hex,
        scope_for_children,
    },
    utils::{TRANSPARENT, pressed_opacity_transition},
};

const PRESSED_OPACITY: f32 = 0.2;

/// What an avatar shows while it has no image, in precedence order.
enum AvatarPlaceholder {
    Custom(AnyElement),
    Title(SharedString),
    Icon(IconSpec),
}

/// A square (or round) picture, falling back to a title or icon.
#[derive(IntoElement)]
pub struct Avatar {
    id: ElementId,
    source: Option<ImageSource>,
    size: AvatarSize,
    rounded: bool,
    title: Option<SharedString>,
    icon: Option<IconSpec>,
    placeholder_content: Option<AnyElement>,
    container_style: Style,
    avatar_style: Style,
    overlay_container_style: Style,
    title_style: Style,
    icon_style: Style,
    placeholder_style: Style,
    children: SmallVec<[AnyElement; 1]>,
    on_press: Option<OnPressHandler>,
    theme: Option<ThemeScope>,
}

impl Avatar {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            source: None,
            size: AvatarSize::default(),
            rounded: false,
            title: None,
            icon: None,
            placeholder_content: None,
            container_style: Style::default(),
            avatar_style: Style::default(),
            overlay_container_style: Style::default(),
            title_style: Style::default(),
            icon_style: Style::default(),
            placeholder_style: Style::default(),
            children: SmallVec::new(),
            on_press: None,
            theme: None,
        }
    }

    pub fn source(mut self, source: impl Into<ImageSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// A theme size tier or a width in pixels.
    pub fn size(mut self, size: impl Into<AvatarSize>) -> Self {
        self.size = size.into();
        self
    }

    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Placeholder icon. Unset fields default to a white `account` glyph
    /// from `material-community`, half the avatar width.
    pub fn icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Replaces the title and icon placeholders.
    pub fn placeholder_content(mut self, content: impl IntoElement) -> Self {
        self.placeholder_content = Some(content.into_any_element());
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    pub fn avatar_style(mut self, style: Style) -> Self {
        self.avatar_style = style;
        self
    }

    pub fn overlay_container_style(mut self, style: Style) -> Self {
        self.overlay_container_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn icon_style(mut self, style: Style) -> Self {
        self.icon_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    fn width(&self, theme: &Theme) -> f32 {
        self.size.resolve(theme)
    }

    fn corner_radius(&self, width: f32) -> Option<Pixels> {
        self.rounded.then(|| px(width / 2.))
    }

    fn resolved_container_style(&self, width: f32) -> Style {
        resolve_styles![
            Style::new().bg(TRANSPARENT).size(px(width)),
            self.corner_radius(width).map(|radius| Style::new().rounded(radius)),
            &self.container_style,
        ]
    }

    fn resolved_overlay_style(&self, width: f32) -> Style {
        resolve_styles![
            Style::new().flex_1(),
            self.corner_radius(width)
                .map(|radius| Style::new().rounded(radius).overflow_hidden()),
            &self.overlay_container_style,
        ]
    }

    /// Without an image the placeholder background is see-through.
    fn resolved_placeholder_style(&self) -> Style {
        resolve_styles![
            &self.placeholder_style,
            self.source.is_none() => Style::new().bg(TRANSPARENT),
        ]
    }

    fn resolved_title_style(&self, width: f32) -> Style {
        resolve_styles![
            Style::new()
                .text_color(palette::WHITE)
                .text_align(TextAlign::Center)
                .text_size(px(width / 2.)),
            &self.title_style,
        ]
    }

    fn placeholder_icon(&self, width: f32) -> Option<IconSpec> {
        let defaults = IconSpec::new("account")
            .icon_type(IconType::parse("material-community"))
            .color(palette::WHITE)
            .size(px(width / 2.));
        self.icon.clone().map(|icon| icon.or(&defaults))
    }

    /// The descriptor's style, overridden by `icon_style`.
    fn resolved_icon_style(&self, spec: &IconSpec) -> Style {
        resolve_styles![&spec.style, &self.icon_style]
    }

    fn take_placeholder(&mut self, width: f32) -> Option<AvatarPlaceholder> {
        if let Some(content) = self.placeholder_content.take() {
            return Some(AvatarPlaceholder::Custom(content));
        }
        if let Some(title) = self.title.clone() {
            return Some(AvatarPlaceholder::Title(title));
        }
        self.placeholder_icon(width).map(AvatarPlaceholder::Icon)
    }
}

impl ParentElement for Avatar {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl Pressable for Avatar {
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler> {
        &mut self.on_press
    }
}

impl Themed for Avatar {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for Avatar {
    fn render(mut self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let scope = scope_for_children(self.theme.as_ref(), &theme);
        let width = self.width(&theme);

        let pressed = use_pressed_state(&self.id, window, cx);
        let is_pressed = self.on_press.is_some() && *pressed.read(cx);
        let opacity = pressed_opacity_transition(
            self.id.clone(),
            window,
            cx,
            is_pressed,
            PRESSED_OPACITY,
        );

        let placeholder = self.take_placeholder(width).map(|placeholder| match placeholder {
            AvatarPlaceholder::Custom(content) => content,
            AvatarPlaceholder::Title(title) => div()
                .apply_style(&self.resolved_title_style(width))
                .child(title)
                .into_any_element(),
            AvatarPlaceholder::Icon(spec) => Icon::from_spec(self.id.with_suffix("icon"), &spec)
                .icon_style(self.resolved_icon_style(&spec))
                .theme(&scope)
                .into_any_element(),
        });

        let overlay_style = self.resolved_overlay_style(width);
        let placeholder_style = self.resolved_placeholder_style();
        let image_style = resolve_styles![Style::new().flex_1(), &self.avatar_style];

        let picture = match self.source.take() {
            Some(source) => Image::new(self.id.with_suffix("image"), source)
                .container_style(overlay_style)
                .placeholder_style(placeholder_style)
                .style(image_style)
                .when_some(placeholder, |this, placeholder| this.placeholder(placeholder))
                .into_any_element(),
            None => div()
                .flex()
                .apply_style(&overlay_style)
                .child(
                    div()
                        .size_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(rgb_hex(0xBDBDBD))
                        .apply_style(&placeholder_style)
                        .children(placeholder),
                )
                .into_any_element(),
        };

        div()
            .id(self.id.clone())
            .flex()
            .apply_style(&self.resolved_container_style(width))
            .opacity(*opacity.evaluate(window, cx))
            .child(picture)
            .children(self.children)
            .when_some(self.on_press, |this, on_press| {
                this.cursor_pointer().track_press(pressed, on_press)
            })
    }
}

const ACCESSORY_SIZE: f32 = 10.;

/// A small round badge pinned to the bottom right corner of an
/// [`Avatar`]. Shows an image when given a source, a `mode-edit` icon
/// otherwise.
#[derive(IntoElement)]
pub struct AvatarAccessory {
    id: ElementId,
    size: f32,
    source: Option<ImageSource>,
    icon: IconSpec,
    style: Style,
    on_press: Option<OnPressHandler>,
    theme: Option<ThemeScope>,
}

impl AvatarAccessory {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            size: ACCESSORY_SIZE,
            source: None,
            icon: IconSpec::new("mode-edit").icon_type(IconType::parse("material")),
            style: Style::default(),
            on_press: None,
            theme: None,
        }
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn source(mut self, source: impl Into<ImageSource>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Replaces the default icon. Unset fields keep the `mode-edit`
    /// defaults.
    pub fn icon(mut self, icon: IconSpec) -> Self {
        self.icon = icon.or(&self.icon);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn resolved_style(&self) -> Style {
        resolve_styles![
            Style::new()
                .absolute()
                .inset(gpui::Edges {
                    top: gpui::Length::Auto,
                    left: gpui::Length::Auto,
                    bottom: px(0.).into(),
                    right: px(0.).into(),
                })
                .align_items(gpui::AlignItems::Center)
                .justify_content(gpui::JustifyContent::Center)
                .bg(rgb_hex(0xAAAAAA))
                .size(px(self.size))
                .rounded(px(self.size / 2.)),
            &self.style,
        ]
    }

    fn icon_spec(&self) -> IconSpec {
        self.icon
            .clone()
            .or(&IconSpec::default().color(palette::WHITE).size(px(self.size * 0.8)))
    }
}

impl Pressable for AvatarAccessory {
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler> {
        &mut self.on_press
    }
}

impl Themed for AvatarAccessory {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for AvatarAccessory {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let scope = scope_for_children(self.theme.as_ref(), &theme);
        let pressed = use_pressed_state(&self.id, window, cx);
        let style = self.resolved_style();
        let size = px(self.size);

        let content = match self.source.clone() {
            Some(source) => Image::new(self.id.with_suffix("image"), source)
                .style(Style::new().size(size).rounded(size / 2.))
                .into_any_element(),
            None => Icon::from_spec(self.id.with_suffix("icon"), &self.icon_spec())
                .theme(&scope)
                .into_any_element(),
        };

        div()
            .id(self.id)
            .flex()
            .shadow_sm()
            .apply_style(&style)
            .child(content)
            .when_some(self.on_press, |this, on_press| {
                this.cursor_pointer().track_press(pressed, on_press)
            })
    }
}
