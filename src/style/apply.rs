use gpui::{Hsla, Styled, TextAlign};

use crate::style::Style;

/// Writes a resolved [`Style`] onto any GPUI element.
///
/// Only fields the style sets are touched, so this can be called after an
/// element's own defaults.
pub trait StyledExt: Styled + Sized {
    fn apply_style(mut self, style: &Style) -> Self {
        let refinement = self.style();

        if let Some(direction) = style.flex_direction {
            refinement.flex_direction = Some(direction);
        }
        if let Some(grow) = style.flex_grow {
            refinement.flex_grow = Some(grow);
        }
        if let Some(shrink) = style.flex_shrink {
            refinement.flex_shrink = Some(shrink);
        }
        if let Some(basis) = style.flex_basis {
            refinement.flex_basis = Some(basis);
        }
        if let Some(align) = style.align_items {
            refinement.align_items = Some(align);
        }
        if let Some(justify) = style.justify_content {
            refinement.justify_content = Some(justify);
        }
        if let Some(position) = style.position {
            refinement.position = Some(position);
        }
        if let Some(inset) = &style.inset {
            refinement.inset.top = Some(inset.top);
            refinement.inset.right = Some(inset.right);
            refinement.inset.bottom = Some(inset.bottom);
            refinement.inset.left = Some(inset.left);
        }
        if let Some(overflow) = style.overflow {
            refinement.overflow.x = Some(overflow);
            refinement.overflow.y = Some(overflow);
        }
        if let Some(widths) = &style.border_widths {
            refinement.border_widths.top = Some(widths.top.into());
            refinement.border_widths.right = Some(widths.right.into());
            refinement.border_widths.bottom = Some(widths.bottom.into());
            refinement.border_widths.left = Some(widths.left.into());
        }

        let mut this = self;

        if let Some(gap) = style.gap {
            this = this.gap(gap);
        }
        if let Some(width) = style.width {
            this = this.w(width);
        }
        if let Some(height) = style.height {
            this = this.h(height);
        }
        if let Some(width) = style.min_width {
            this = this.min_w(width);
        }
        if let Some(height) = style.min_height {
            this = this.min_h(height);
        }
        if let Some(width) = style.max_width {
            this = this.max_w(width);
        }
        if let Some(height) = style.max_height {
            this = this.max_h(height);
        }
        if let Some(margin) = &style.margin {
            this = this
                .mt(margin.top)
                .mr(margin.right)
                .mb(margin.bottom)
                .ml(margin.left);
        }
        if let Some(padding) = &style.padding {
            this = this
                .pt(padding.top)
                .pr(padding.right)
                .pb(padding.bottom)
                .pl(padding.left);
        }
        if let Some(background) = style.background {
            this = this.bg(Hsla::from(background));
        }
        if let Some(color) = style.border_color {
            this = this.border_color(color);
        }
        if let Some(radius) = style.corner_radius {
            this = this.rounded(radius);
        }
        if let Some(opacity) = style.opacity {
            this = this.opacity(opacity);
        }
        if let Some(color) = style.text_color {
            this = this.text_color(color);
        }
        if let Some(size) = style.font_size {
            this = this.text_size(size);
        }
        if let Some(family) = &style.font_family {
            this = this.font_family(family.clone());
        }
        if let Some(weight) = style.font_weight {
            this = this.font_weight(weight);
        }
        if let Some(line_height) = style.line_height {
            this = this.line_height(line_height);
        }
        match style.text_align {
            Some(TextAlign::Left) => this = this.text_left(),
            Some(TextAlign::Center) => this = this.text_center(),
            Some(TextAlign::Right) => this = this.text_right(),
            None => {}
        }

        this
    }
}

impl<E: Styled> StyledExt for E {}
