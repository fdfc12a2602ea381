use std::time::Duration;

use gpui::{
    Animation, AnimationExt, App, CursorStyle, ElementId, FlexDirection, InteractiveElement,
    IntoElement, Overflow, ParentElement, Pixels, RenderOnce, Rgba, SharedString, Styled,
    TextAlign, Transformation, Window, div, percentage, prelude::FluentBuilder, px, svg,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    ElementIdExt,
    components::{Icon, Text},
    extensions::pressable::{OnPressHandler, PressTracking, Pressable, use_pressed_state},
    icons::{Glyph, IconSpec, IconVariant, SvgIconSet},
    resolve_styles,
    style::{Style, StyledExt},
    theme::{
        Shade, TextSize, TextSizeKind, Theme, ThemeScope, Themed, palette, resolve_theme,
        scope_for_children,
    },
    utils::{PressGuard, TRANSPARENT, WindowPixelsExt, pressed_opacity_transition},
};

const CORNER_RADIUS: f32 = 8.;
const PRESSED_OPACITY: f32 = 0.5;
const SPINNER_SIZE: f32 = 20.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    /// Filled with `primary[500]`.
    #[default]
    Solid,
    /// Text only.
    Clear,
    /// Hairline `primary[500]` border, no fill.
    Outline,
}

/// Where the icon sits relative to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconPosition {
    #[default]
    Left,
    Right,
    Top,
    Bottom,
}

impl IconPosition {
    pub fn flex_direction(self) -> FlexDirection {
        match self {
            IconPosition::Left => FlexDirection::Row,
            IconPosition::Right => FlexDirection::RowReverse,
            IconPosition::Top => FlexDirection::Column,
            IconPosition::Bottom => FlexDirection::ColumnReverse,
        }
    }
}

/// A pressable title and/or icon.
///
/// Presses go through a [`PressGuard`]: after one press fires, presses in
/// the following 300ms are dropped.
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    title: SharedString,
    button_type: ButtonType,
    size: TextSize,
    loading: bool,
    disabled: bool,
    raised: bool,
    icon: Option<IconSpec>,
    icon_position: IconPosition,
    icon_right: bool,
    icon_container_style: Style,
    title_style: Style,
    button_style: Style,
    container_style: Style,
    disabled_style: Style,
    disabled_title_style: Style,
    loading_style: Style,
    on_press: Option<OnPressHandler>,
    theme: Option<ThemeScope>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            title: SharedString::default(),
            button_type: ButtonType::default(),
            size: TextSizeKind::Normal.into(),
            loading: false,
            disabled: false,
            raised: false,
            icon: None,
            icon_position: IconPosition::default(),
            icon_right: false,
            icon_container_style: Style::default(),
            title_style: Style::default(),
            button_style: Style::default(),
            container_style: Style::default(),
            disabled_style: Style::default(),
            disabled_title_style: Style::default(),
            loading_style: Style::default(),
            on_press: None,
            theme: None,
        }
    }

    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    /// Title size. A font size in `title_style` takes precedence.
    pub fn size(mut self, size: impl Into<TextSize>) -> Self {
        self.size = size.into();
        self
    }

    /// Shows a spinner instead of the icon and title, and ignores presses.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Adds a white backing and a drop shadow. Ignored for disabled and
    /// clear buttons.
    pub fn raised(mut self, raised: bool) -> Self {
        self.raised = raised;
        self
    }

    /// The color defaults to the title color, not the plain icon default of
    /// `primary[500]`. Other unset fields take the icon defaults.
    pub fn icon(mut self, icon: IconSpec) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn icon_position(mut self, icon_position: IconPosition) -> Self {
        self.icon_position = icon_position;
        self
    }

    /// Shorthand for [`IconPosition::Right`]; wins over `icon_position`.
    pub fn icon_right(mut self, icon_right: bool) -> Self {
        self.icon_right = icon_right;
        self
    }

    pub fn icon_container_style(mut self, style: Style) -> Self {
        self.icon_container_style = style;
        self
    }

    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    pub fn button_style(mut self, style: Style) -> Self {
        self.button_style = style;
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    /// Applied to the button while disabled or loading.
    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    /// Applied to the title while disabled.
    pub fn disabled_title_style(mut self, style: Style) -> Self {
        self.disabled_title_style = style;
        self
    }

    pub fn loading_style(mut self, style: Style) -> Self {
        self.loading_style = style;
        self
    }

    fn is_inactive(&self) -> bool {
        self.loading || self.disabled
    }

    fn is_raised(&self) -> bool {
        self.raised && !self.disabled && self.button_type != ButtonType::Clear
    }

    fn effective_icon_position(&self) -> IconPosition {
        if self.icon_right {
            IconPosition::Right
        } else {
            self.icon_position
        }
    }

    fn accent(theme: &Theme) -> Rgba {
        theme.colors.primary[Shade::S500]
    }

    fn resolved_container_style(&self) -> Style {
        resolve_styles![
            Style::new().overflow_hidden().rounded(px(CORNER_RADIUS)),
            &self.container_style,
            self.is_raised() => Style {
                overflow: Some(Overflow::Visible),
                ..Style::new().bg(palette::WHITE)
            },
        ]
    }

    fn resolved_button_style(&self, theme: &Theme, hairline: Pixels) -> Style {
        let accent = Self::accent(theme);
        let inactive = self.is_inactive();
        let is_solid = self.button_type == ButtonType::Solid;
        let is_outline = self.button_type == ButtonType::Outline;

        resolve_styles![
            Style::new()
                .flex_direction(self.effective_icon_position().flex_direction())
                .justify_content(gpui::JustifyContent::Center)
                .align_items(gpui::AlignItems::Center)
                .rounded(px(CORNER_RADIUS))
                .py(px(8.))
                .px(px(10.))
                .bg(if is_solid { accent } else { TRANSPARENT })
                .border_color(accent)
                .border(if is_outline { hairline } else { px(0.) }),
            &self.button_style,
            inactive && is_solid => Style::new().bg(theme.colors.disabled),
            inactive && is_outline => Style::new().border_color(theme.colors.disabled),
            inactive => &self.disabled_style,
        ]
    }

    fn resolved_title_style(&self, theme: &Theme) -> Style {
        let color = match self.button_type {
            ButtonType::Solid => palette::WHITE,
            _ => Self::accent(theme),
        };

        resolve_styles![
            Style::new().text_color(color),
            Style::new().text_align(TextAlign::Center).py(px(1.)),
            &self.title_style,
            self.disabled => &self.disabled_title_style,
        ]
    }

    fn title_size(&self, title_style: &Style) -> TextSize {
        match title_style.font_size {
            Some(size) => TextSize::Points(size.to_f64() as f32),
            None => self.size,
        }
    }

    fn spinner_color(&self, theme: &Theme) -> Rgba {
        match self.button_type {
            ButtonType::Solid => palette::WHITE,
            _ => Self::accent(theme),
        }
    }
}

impl Pressable for Button {
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler> {
        &mut self.on_press
    }
}

impl Themed for Button {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for Button {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let scope = scope_for_children(self.theme.as_ref(), &theme);
        let is_interactive = !self.is_inactive() && self.on_press.is_some();

        let pressed = use_pressed_state(&self.id, window, cx);
        let is_pressed = is_interactive && *pressed.read(cx);
        let opacity =
            pressed_opacity_transition(self.id.clone(), window, cx, is_pressed, PRESSED_OPACITY);

        let press_guard = window.use_keyed_state(
            self.id.with_suffix("state:press_guard"),
            cx,
            |_window, _cx| PressGuard::new(),
        );

        let container_style = self.resolved_container_style();
        let mut button_style = self.resolved_button_style(&theme, window.hairline());
        let title_style = self.resolved_title_style(&theme);
        let title_size = self.title_size(&title_style);
        let title_color = title_style.text_color.unwrap_or(palette::WHITE);

        // The surface is drawn by a squircle behind the content.
        let surface_bg = button_style.background.take().unwrap_or(TRANSPARENT);
        let surface_border_color = button_style.border_color.take().unwrap_or(TRANSPARENT);
        let surface_border = button_style
            .border_widths
            .take()
            .map_or(px(0.), |widths| widths.top);
        let surface_radius = button_style
            .corner_radius
            .take()
            .unwrap_or(px(CORNER_RADIUS));

        let spinner = self.loading.then(|| {
            let glyph = Glyph {
                name: "loader".into(),
                size: px(SPINNER_SIZE),
                color: self.spinner_color(&theme),
                variant: IconVariant::NONE,
            };
            div()
                .my(px(2.))
                .apply_style(&self.loading_style)
                .child(
                    svg()
                        .path(SvgIconSet::new("feather").path(&glyph))
                        .size(glyph.size)
                        .text_color(glyph.color)
                        .with_animation(
                            self.id.with_suffix("loading"),
                            Animation::new(Duration::from_secs(1)).repeat(),
                            |svg, delta| svg.with_transformation(Transformation::rotate(percentage(delta))),
                        ),
                )
        });

        let icon = self.icon.clone().filter(|_| !self.loading).map(|icon| {
            div().apply_style(&self.icon_container_style).child(
                Icon::from_spec(
                    self.id.with_suffix("icon"),
                    &icon.or(&IconSpec::default().color(title_color)),
                )
                .theme(&scope),
            )
        });

        let title = (!self.loading && !self.title.is_empty()).then(|| {
            Text::new(self.title.clone())
                .size(title_size)
                .color(title_color)
                .style(title_style.clone())
                .theme(&scope)
        });

        div()
            .flex()
            .apply_style(&container_style)
            .when(self.is_raised(), |this| this.shadow_sm())
            .child(
                div()
                    .id(self.id.clone())
                    .relative()
                    .flex()
                    .cursor(if self.disabled {
                        CursorStyle::OperationNotAllowed
                    } else {
                        CursorStyle::PointingHand
                    })
                    .opacity(*opacity.evaluate(window, cx))
                    .apply_style(&button_style)
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(surface_radius)
                            .bg(surface_bg)
                            .border(surface_border)
                            .border_inside()
                            .border_color(surface_border_color),
                    )
                    .children(spinner)
                    .children(icon)
                    .children(title)
                    .when(is_interactive, |this| {
                        this.when_some(self.on_press, |this, on_press| {
                            this.track_press(pressed, move |event, window, cx| {
                                let fires = press_guard.update(cx, |guard, cx| guard.press(cx));
                                if fires {
                                    (on_press)(event, window, cx);
                                }
                            })
                        })
                    }),
            )
    }
}


#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::utils::PRESS_COOLDOWN;
    use gpui::{AppContext, Modifiers, TestAppContext, VisualTestContext, point};

    struct ButtonTestView;

    impl gpui::Render for ButtonTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
            div()
                .flex()
                .flex_col()
                .child(Button::new("solid").title("Solid").on_press(|_, _, _| {}))
                .child(
                    Button::new("outline")
                        .title("Outline")
                        .button_type(ButtonType::Outline)
                        .icon(IconSpec::new("check"))
                        .raised(true),
                )
                .child(Button::new("loading").title("Loading").loading(true))
        }
    }

    #[gpui::test]
    fn test_buttons_render_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ButtonTestView))
                .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    struct CounterView {
        count: Rc<Cell<usize>>,
    }

    impl gpui::Render for CounterView {
        fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
            let count = self.count.clone();
            div().size_full().child(
                Button::new("counter")
                    .title("Go")
                    .on_press(move |_, _, _| count.set(count.get() + 1)),
            )
        }
    }

    #[gpui::test]
    fn test_presses_within_cooldown_fire_once(cx: &mut TestAppContext) {
        let count = Rc::new(Cell::new(0));
        let window = cx.update(|cx| {
            let count = count.clone();
            cx.open_window(Default::default(), |_window, cx| {
                cx.new(|_cx| CounterView { count })
            })
            .unwrap()
        });

        let cx = &mut VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();

        let inside = point(px(10.), px(10.));
        cx.simulate_click(inside, Modifiers::none());
        cx.simulate_click(inside, Modifiers::none());
        cx.run_until_parked();
        assert_eq!(count.get(), 1);

        cx.executor().advance_clock(PRESS_COOLDOWN);
        cx.run_until_parked();

        cx.simulate_click(inside, Modifiers::none());
        cx.run_until_parked();
        assert_eq!(count.get(), 2);
    }
}
