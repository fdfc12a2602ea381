use gpui::{
    AlignSelf, AnyElement, App, Edges, IntoElement, Length, ParentElement, Pixels, RenderOnce,
    Rgba, SharedString, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{
    components::Text,
    resolve_styles,
    style::{Style, StyledExt},
    theme::{Theme, ThemeScope, Themed, resolve_theme, scope_for_children},
    utils::WindowPixelsExt,
};

const INSET: f32 = 72.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerInset {
    #[default]
    Left,
    Right,
    Middle,
}

impl DividerInset {
    fn margin(self) -> Edges<Pixels> {
        let inset = px(INSET);
        match self {
            DividerInset::Left => Edges {
                left: inset,
                ..Edges::default()
            },
            DividerInset::Right => Edges {
                right: inset,
                ..Edges::default()
            },
            DividerInset::Middle => Edges {
                left: inset,
                right: inset,
                ..Edges::default()
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DividerOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// A hairline separator in the theme's border color.
#[derive(IntoElement)]
pub struct Divider {
    color: Option<Rgba>,
    inset: Option<DividerInset>,
    orientation: DividerOrientation,
    width: Option<Pixels>,
    sub_header: Option<SharedString>,
    sub_header_style: Style,
    style: Style,
    theme: Option<ThemeScope>,
}

impl Divider {
    pub fn new() -> Self {
        Self {
            color: None,
            inset: None,
            orientation: DividerOrientation::default(),
            width: None,
            sub_header: None,
            sub_header_style: Style::default(),
            style: Style::default(),
            theme: None,
        }
    }

    pub fn horizontal() -> Self {
        Self::new()
    }

    pub fn vertical() -> Self {
        Self::new().orientation(DividerOrientation::Vertical)
    }

    /// Overrides the theme's border color.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Indents the line by 72px on the given side(s).
    pub fn inset(mut self, inset: DividerInset) -> Self {
        self.inset = Some(inset);
        self
    }

    pub fn orientation(mut self, orientation: DividerOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Line thickness. Defaults to one device pixel.
    pub fn width(mut self, width: impl Into<Pixels>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Text drawn under a horizontal divider. Ignored when vertical.
    pub fn sub_header(mut self, sub_header: impl Into<SharedString>) -> Self {
        self.sub_header = Some(sub_header.into());
        self
    }

    pub fn sub_header_style(mut self, style: Style) -> Self {
        self.sub_header_style = style;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    fn line_widths(&self, width: Pixels) -> Edges<Pixels> {
        match self.orientation {
            DividerOrientation::Horizontal => Edges {
                bottom: width,
                ..Edges::default()
            },
            DividerOrientation::Vertical => Edges {
                right: width,
                ..Edges::default()
            },
        }
    }

    fn resolved_style(&self, theme: &Theme, hairline: Pixels) -> Style {
        let is_vertical = self.orientation == DividerOrientation::Vertical;

        resolve_styles![
            Style::new()
                .border_widths(self.line_widths(hairline))
                .border_color(theme.colors.border),
            &self.style,
            self.inset.map(|inset| Style::new().margin(inset.margin())),
            is_vertical => Style::new().h(Length::Auto),
            self.width.map(|width| Style::new().border_widths(self.line_widths(width))),
            self.color.map(|color| Style::new().border_color(color)),
        ]
    }

    fn resolved_sub_header_style(&self) -> Style {
        resolve_styles![
            &self.sub_header_style,
            self.inset.is_some() => Style::new().margin(DividerInset::Left.margin()),
        ]
    }
}

impl Default for Divider {
    fn default() -> Self {
        Self::new()
    }
}

impl Themed for Divider {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for Divider {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let style = self.resolved_style(&theme, window.hairline());
        let is_vertical = self.orientation == DividerOrientation::Vertical;

        let line = div().apply_style(&style).when(is_vertical, |mut this| {
            this.style().align_self = Some(AlignSelf::Stretch);
            this
        });

        match self.sub_header.clone().filter(|_| !is_vertical) {
            Some(sub_header) => {
                let scope = scope_for_children(self.theme.as_ref(), &theme);
                div()
                    .flex()
                    .flex_col()
                    .child(line)
                    .child(
                        Text::new(sub_header)
                            .style(self.resolved_sub_header_style())
                            .theme(&scope),
                    )
                    .into_any_element()
            }
            None => line.into_any_element(),
        }
    }
}
