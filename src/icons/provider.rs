use gpui::{AnyElement, IntoElement, Pixels, Rgba, SharedString, Styled, svg};

use crate::icons::IconVariant;

/// Everything a provider needs to draw one glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub name: SharedString,
    pub size: Pixels,
    pub color: Rgba,
    pub variant: IconVariant,
}

/// Draws glyphs of one icon set.
pub trait IconProvider: Send + Sync + 'static {
    fn render(&self, glyph: &Glyph) -> AnyElement;
}

impl<F> IconProvider for F
where
    F: Fn(&Glyph) -> AnyElement + Send + Sync + 'static,
{
    fn render(&self, glyph: &Glyph) -> AnyElement {
        (self)(glyph)
    }
}

/// Draws glyphs from SVG assets laid out as
/// `icons/<set>/[solid/|brands/]<name>.svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgIconSet {
    set: SharedString,
}

impl SvgIconSet {
    pub fn new(set: impl Into<SharedString>) -> Self {
        Self { set: set.into() }
    }

    pub fn set(&self) -> &SharedString {
        &self.set
    }

    pub fn path(&self, glyph: &Glyph) -> SharedString {
        let folder = if glyph.variant.brand {
            "brands/"
        } else if glyph.variant.solid {
            "solid/"
        } else {
            ""
        };

        format!("icons/{}/{folder}{}.svg", self.set, glyph.name).into()
    }
}

impl IconProvider for SvgIconSet {
    fn render(&self, glyph: &Glyph) -> AnyElement {
        svg()
            .path(self.path(glyph))
            .size(glyph.size)
            .min_w(glyph.size)
            .min_h(glyph.size)
            .text_color(glyph.color)
            .into_any_element()
    }
}
