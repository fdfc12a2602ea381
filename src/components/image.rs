use gpui::{
    AnyElement, App, ElementId, ImageSource, InteractiveElement, IntoElement, ObjectFit,
    ParentElement, RenderOnce, Rgba, Styled, StyledImage, Window, div, img,
    prelude::FluentBuilder,
};
use smallvec::SmallVec;

use crate::{
    extensions::pressable::{OnPressHandler, PressTracking, Pressable, use_pressed_state},
    resolve_styles,
    style::{Style, StyledExt},
    theme::rgb_hex,
};

const PLACEHOLDER_BACKGROUND: Rgba = rgb_hex(0xBDBDBD);

/// An image drawn over a placeholder.
///
/// The placeholder fills the container from the start and stays beneath the
/// image, so it shows until the image has loaded and painted over it.
/// Children are laid out with `style` (or `children_container_style`), so
/// `style` sizing also sizes the component.
#[derive(IntoElement)]
pub struct Image {
    id: ElementId,
    source: ImageSource,
    placeholder: Option<AnyElement>,
    container_style: Style,
    placeholder_style: Style,
    children_container_style: Option<Style>,
    style: Style,
    children: SmallVec<[AnyElement; 1]>,
    on_press: Option<OnPressHandler>,
}

impl Image {
    pub fn new(id: impl Into<ElementId>, source: impl Into<ImageSource>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            placeholder: None,
            container_style: Style::default(),
            placeholder_style: Style::default(),
            children_container_style: None,
            style: Style::default(),
            children: SmallVec::new(),
            on_press: None,
        }
    }

    /// Content centered in the placeholder.
    pub fn placeholder(mut self, placeholder: impl IntoElement) -> Self {
        self.placeholder = Some(placeholder.into_any_element());
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    pub fn children_container_style(mut self, style: Style) -> Self {
        self.children_container_style = Some(style);
        self
    }

    /// Style of the image. Also lays out the children unless
    /// `children_container_style` is set.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn resolved_placeholder_style(&self) -> Style {
        resolve_styles![
            Style::new()
                .bg(PLACEHOLDER_BACKGROUND)
                .align_items(gpui::AlignItems::Center)
                .justify_content(gpui::JustifyContent::Center),
            &self.placeholder_style,
        ]
    }
}

impl ParentElement for Image {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements)
    }
}

impl Pressable for Image {
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler> {
        &mut self.on_press
    }
}

impl RenderOnce for Image {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let pressed = use_pressed_state(&self.id, window, cx);
        let placeholder_style = self.resolved_placeholder_style();
        let children_style = self.children_container_style.as_ref().unwrap_or(&self.style);

        div()
            .id(self.id.clone())
            .relative()
            .overflow_hidden()
            .apply_style(&self.container_style)
            .child(
                div()
                    .absolute()
                    .inset_0()
                    .flex()
                    .apply_style(&placeholder_style)
                    .children(self.placeholder),
            )
            .child(
                img(self.source)
                    .absolute()
                    .inset_0()
                    .size_full()
                    .object_fit(ObjectFit::Cover)
                    .apply_style(&self.style),
            )
            .child(div().apply_style(children_style).children(self.children))
            .when_some(self.on_press, |this, on_press| {
                this.cursor_pointer().track_press(pressed, on_press)
            })
    }
}
