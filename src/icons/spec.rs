use gpui::{Pixels, Rgba, SharedString};

use crate::{
    icons::{IconType, IconVariant},
    style::Style,
};

/// A description of an icon, used where a component draws an icon on the
/// caller's behalf (avatar placeholders, button icons, input adornments).
///
/// Unset fields take the defaults of the component drawing it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSpec {
    pub name: SharedString,
    pub icon_type: Option<IconType>,
    pub color: Option<Rgba>,
    pub size: Option<Pixels>,
    pub variant: IconVariant,
    /// Style of the glyph, applied as the drawing icon's `icon_style`.
    pub style: Option<Style>,
}

impl IconSpec {
    pub fn new(name: impl Into<SharedString>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn icon_type(mut self, icon_type: impl Into<IconType>) -> Self {
        self.icon_type = Some(icon_type.into());
        self
    }

    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn solid(mut self, solid: bool) -> Self {
        self.variant.solid = solid;
        self
    }

    pub fn brand(mut self, brand: bool) -> Self {
        self.variant.brand = brand;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Fills the fields this spec leaves unset from `defaults`. A set
    /// style replaces the default style whole.
    pub fn or(self, defaults: &IconSpec) -> IconSpec {
        IconSpec {
            name: if self.name.is_empty() {
                defaults.name.clone()
            } else {
                self.name
            },
            icon_type: self.icon_type.or_else(|| defaults.icon_type.clone()),
            color: self.color.or(defaults.color),
            size: self.size.or(defaults.size),
            variant: if self.variant.is_none() {
                defaults.variant
            } else {
                self.variant
            },
            style: self.style.or_else(|| defaults.style.clone()),
        }
    }
}

impl From<&'static str> for IconSpec {
    fn from(name: &'static str) -> Self {
        IconSpec::new(name)
    }
}

impl From<SharedString> for IconSpec {
    fn from(name: SharedString) -> Self {
        IconSpec::new(name)
    }
}
