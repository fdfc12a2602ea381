use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, Pixels, RenderOnce, Rgba,
    SharedString, Styled, Window, div, prelude::FluentBuilder, px,
};

use crate::{
    extensions::pressable::{OnPressHandler, PressTracking, Pressable, use_pressed_state},
    icons::{Glyph, IconRegistryExt, IconSpec, IconType, IconVariant, resolve_icon_variant},
    style::{Style, StyledExt},
    theme::{Shade, Theme, ThemeScope, Themed, resolve_theme},
};

const DEFAULT_SIZE: f32 = 24.;

/// A glyph drawn by the provider registered for its icon type.
#[derive(IntoElement)]
pub struct Icon {
    id: ElementId,
    name: SharedString,
    icon_type: IconType,
    size: Pixels,
    color: Option<Rgba>,
    variant: IconVariant,
    icon_style: Style,
    disabled: bool,
    on_press: Option<OnPressHandler>,
    theme: Option<ThemeScope>,
}

impl Icon {
    pub fn new(id: impl Into<ElementId>, name: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon_type: IconType::default(),
            size: px(DEFAULT_SIZE),
            color: None,
            variant: IconVariant::NONE,
            icon_style: Style::default(),
            disabled: false,
            on_press: None,
            theme: None,
        }
    }

    /// Builds an icon from a description. Unset fields keep the icon
    /// defaults.
    pub fn from_spec(id: impl Into<ElementId>, spec: &IconSpec) -> Self {
        let mut icon = Icon::new(id, spec.name.clone())
            .solid(spec.variant.solid)
            .brand(spec.variant.brand);
        if let Some(icon_type) = &spec.icon_type {
            icon = icon.icon_type(icon_type.clone());
        }
        if let Some(size) = spec.size {
            icon = icon.size(size);
        }
        if let Some(color) = spec.color {
            icon = icon.color(color);
        }
        if let Some(style) = &spec.style {
            icon = icon.icon_style(style.clone());
        }
        icon
    }

    pub fn icon_type(mut self, icon_type: impl Into<IconType>) -> Self {
        self.icon_type = icon_type.into();
        self
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    /// Overrides the theme's `primary[500]`.
    pub fn color(mut self, color: impl Into<Rgba>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Uses the solid glyphs. Only honoured by `font-awesome-5`.
    pub fn solid(mut self, solid: bool) -> Self {
        self.variant.solid = solid;
        self
    }

    /// Uses the brand glyphs. Only honoured by `font-awesome-5`.
    pub fn brand(mut self, brand: bool) -> Self {
        self.variant.brand = brand;
        self
    }

    /// Style of the glyph itself. Its corner radius also clips the
    /// container.
    pub fn icon_style(mut self, style: Style) -> Self {
        self.icon_style = style;
        self
    }

    /// Ignores presses. Has no effect without a press handler.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn glyph(&self, theme: &Theme) -> Glyph {
        Glyph {
            name: self.name.clone(),
            size: self.size,
            color: self
                .color
                .unwrap_or(theme.colors.primary[Shade::S500]),
            variant: resolve_icon_variant(&self.icon_type, self.variant),
        }
    }
}

impl Pressable for Icon {
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler> {
        &mut self.on_press
    }
}

impl Themed for Icon {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for Icon {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let glyph = self.glyph(&theme);
        let provider = cx.resolve_icon_provider(&self.icon_type);
        let pressed = use_pressed_state(&self.id, window, cx);

        let glyph_element = div()
            .flex()
            .items_center()
            .justify_center()
            .apply_style(&self.icon_style)
            .child(provider.render(&glyph));

        div()
            .overflow_hidden()
            .when_some(self.icon_style.corner_radius, |this, radius| {
                this.rounded(radius)
            })
            .child(
                div()
                    .id(self.id)
                    .child(glyph_element)
                    .when(!self.disabled, |this| {
                        this.when_some(self.on_press, |this, on_press| {
                            this.cursor_pointer().track_press(pressed, on_press)
                        })
                    }),
            )
    }
}


#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    struct IconTestView;

    impl gpui::Render for IconTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
            div()
                .size_full()
                .child(Icon::new("known", "star"))
                .child(Icon::new("unknown", "star").icon_type("no-such-set"))
                .child(Icon::new("pressable", "x").on_press(|_, _, _| {}))
        }
    }

    #[gpui::test]
    fn test_icons_render_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| IconTestView))
                .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
