use gpui::{
    AlignItems, Edges, FlexDirection, FontWeight, JustifyContent, Length, Overflow, Pixels,
    Position, Rgba, SharedString, TextAlign, px,
};

macro_rules! style_fields {
    ( $( $(#[$meta:meta])* $field:ident : $ty:ty ),+ $(,)? ) => {
        /// A partial style. Every field is optional; `None` means "not set
        /// by this fragment".
        ///
        /// Edge and corner groups are single values, so a fragment that
        /// sets padding replaces all four sides of any earlier padding.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct Style {
            $( $(#[$meta])* pub $field: Option<$ty>, )+
        }

        impl Style {
            /// Overwrites every field `other` sets.
            pub fn merge(&mut self, other: &Style) {
                $(
                    if let Some(value) = &other.$field {
                        self.$field = Some(value.clone());
                    }
                )+
            }

            /// Whether no field is set.
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )+
            }
        }
    };
}

style_fields! {
    flex_direction: FlexDirection,
    flex_grow: f32,
    flex_shrink: f32,
    flex_basis: Length,
    align_items: AlignItems,
    justify_content: JustifyContent,
    gap: Pixels,
    position: Position,
    /// Offsets from the parent edges, used with absolute positioning.
    inset: Edges<Length>,
    overflow: Overflow,

    width: Length,
    height: Length,
    min_width: Length,
    min_height: Length,
    max_width: Length,
    max_height: Length,
    margin: Edges<Pixels>,
    padding: Edges<Pixels>,

    background: Rgba,
    border_widths: Edges<Pixels>,
    border_color: Rgba,
    corner_radius: Pixels,
    opacity: f32,

    text_color: Rgba,
    font_size: Pixels,
    font_family: SharedString,
    font_weight: FontWeight,
    line_height: Pixels,
    text_align: TextAlign,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of `self` with every field `other` sets overwritten.
    pub fn merged(&self, other: &Style) -> Style {
        let mut style = self.clone();
        style.merge(other);
        style
    }

    pub fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.flex_direction = Some(direction);
        self
    }

    pub fn flex_row(self) -> Self {
        self.flex_direction(FlexDirection::Row)
    }

    pub fn flex_col(self) -> Self {
        self.flex_direction(FlexDirection::Column)
    }

    /// Grows and shrinks from a zero basis.
    pub fn flex_1(mut self) -> Self {
        self.flex_grow = Some(1.);
        self.flex_shrink = Some(1.);
        self.flex_basis = Some(px(0.).into());
        self
    }

    pub fn flex_grow(mut self, factor: f32) -> Self {
        self.flex_grow = Some(factor);
        self
    }

    pub fn flex_shrink(mut self, factor: f32) -> Self {
        self.flex_shrink = Some(factor);
        self
    }

    pub fn align_items(mut self, align: AlignItems) -> Self {
        self.align_items = Some(align);
        self
    }

    pub fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.justify_content = Some(justify);
        self
    }

    pub fn gap(mut self, gap: impl Into<Pixels>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn absolute(mut self) -> Self {
        self.position = Some(Position::Absolute);
        self
    }

    pub fn relative(mut self) -> Self {
        self.position = Some(Position::Relative);
        self
    }

    pub fn inset(mut self, inset: Edges<Length>) -> Self {
        self.inset = Some(inset);
        self
    }

    pub fn overflow_hidden(mut self) -> Self {
        self.overflow = Some(Overflow::Hidden);
        self
    }

    pub fn w(mut self, width: impl Into<Length>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn h(mut self, height: impl Into<Length>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn size(self, size: impl Into<Length>) -> Self {
        let size = size.into();
        self.w(size).h(size)
    }

    pub fn min_w(mut self, width: impl Into<Length>) -> Self {
        self.min_width = Some(width.into());
        self
    }

    pub fn min_h(mut self, height: impl Into<Length>) -> Self {
        self.min_height = Some(height.into());
        self
    }

    pub fn max_w(mut self, width: impl Into<Length>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    pub fn max_h(mut self, height: impl Into<Length>) -> Self {
        self.max_height = Some(height.into());
        self
    }

    pub fn margin(mut self, margin: Edges<Pixels>) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn m(self, margin: impl Into<Pixels>) -> Self {
        self.margin(Edges::all(margin.into()))
    }

    /// Vertical margin; horizontal margin is kept from this fragment.
    pub fn my(mut self, margin: impl Into<Pixels>) -> Self {
        let margin = margin.into();
        let mut edges = self.margin.take().unwrap_or_default();
        edges.top = margin;
        edges.bottom = margin;
        self.margin(edges)
    }

    pub fn padding(mut self, padding: Edges<Pixels>) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn p(self, padding: impl Into<Pixels>) -> Self {
        self.padding(Edges::all(padding.into()))
    }

    /// Horizontal padding; vertical padding is kept from this fragment.
    pub fn px(mut self, padding: impl Into<Pixels>) -> Self {
        let padding = padding.into();
        let mut edges = self.padding.take().unwrap_or_default();
        edges.left = padding;
        edges.right = padding;
        self.padding(edges)
    }

    /// Vertical padding; horizontal padding is kept from this fragment.
    pub fn py(mut self, padding: impl Into<Pixels>) -> Self {
        let padding = padding.into();
        let mut edges = self.padding.take().unwrap_or_default();
        edges.top = padding;
        edges.bottom = padding;
        self.padding(edges)
    }

    pub fn bg(mut self, color: impl Into<Rgba>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn border(mut self, width: impl Into<Pixels>) -> Self {
        self.border_widths = Some(Edges::all(width.into()));
        self
    }

    pub fn border_widths(mut self, widths: Edges<Pixels>) -> Self {
        self.border_widths = Some(widths);
        self
    }

    pub fn border_color(mut self, color: impl Into<Rgba>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    pub fn rounded(mut self, radius: impl Into<Pixels>) -> Self {
        self.corner_radius = Some(radius.into());
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn text_color(mut self, color: impl Into<Rgba>) -> Self {
        self.text_color = Some(color.into());
        self
    }

    pub fn text_size(mut self, size: impl Into<Pixels>) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn font_family(mut self, family: impl Into<SharedString>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    pub fn line_height(mut self, line_height: impl Into<Pixels>) -> Self {
        self.line_height = Some(line_height.into());
        self
    }

    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }
}
