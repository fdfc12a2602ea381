use gpui::{App, IntoElement, RenderOnce, Styled, Window, div, px};

use crate::style::{Style, StyledExt};

/// Empty space. A size of zero grows to fill the remaining space along the
/// parent's main axis.
#[derive(IntoElement, Debug, Clone, Copy, Default)]
pub struct Spacer {
    size: f32,
    horizontal: bool,
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixed extent in pixels; zero means flexible.
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Takes the fixed size as a width instead of a height.
    pub fn horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    fn resolved_style(&self) -> Style {
        if self.size == 0. {
            Style::new().flex_1()
        } else if self.horizontal {
            Style::new().w(px(self.size))
        } else {
            Style::new().h(px(self.size))
        }
    }
}

impl RenderOnce for Spacer {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div().flex_none().apply_style(&self.resolved_style())
    }
}
