use gpui::{
    AlignItems, App, ClickEvent, ElementId, Entity, FocusHandle, Focusable, Hsla,
    InteractiveElement, IntoElement, JustifyContent, ParentElement, RenderOnce, SharedString,
    Styled, Window, div, prelude::FluentBuilder, px, relative,
};
use gpui_primitives::input::{Input as PrimitiveInput, InputState};

use crate::{
    ElementIdExt,
    components::{Icon, Text},
    extensions::pressable::{OnPressHandler, Pressable},
    icons::IconSpec,
    resolve_styles,
    style::{Style, StyledExt},
    theme::{Shade, Theme, ThemeScope, Themed, resolve_theme, scope_for_children},
    utils::RgbaExt,
};

/// Character shown in place of every character of a masked value.
pub const MASK_CHAR: char = '•';

/// A labelled single-line text field with optional icons, an error state
/// and help text.
///
/// The value lives in the [`InputState`] entity the caller owns.
#[derive(IntoElement)]
pub struct TextInput {
    id: ElementId,
    base: PrimitiveInput,
    label: Option<SharedString>,
    label_style: Style,
    required: bool,
    left_icon: Option<IconSpec>,
    left_icon_container_style: Style,
    right_icon: Option<IconSpec>,
    right_icon_container_style: Style,
    on_press_right_icon: Option<OnPressHandler>,
    error: bool,
    error_style: Style,
    help: Option<SharedString>,
    help_style: Style,
    secure: bool,
    disabled: bool,
    container_style: Style,
    input_container_style: Style,
    input_style: Style,
    theme: Option<ThemeScope>,
}

impl TextInput {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        let id = id.into();
        Self {
            base: PrimitiveInput::new(id.with_suffix("input"), state).placeholder(""),
            id,
            label: None,
            label_style: Style::default(),
            required: false,
            left_icon: None,
            left_icon_container_style: Style::default(),
            right_icon: None,
            right_icon_container_style: Style::default(),
            on_press_right_icon: None,
            error: false,
            error_style: Style::default(),
            help: None,
            help_style: Style::default(),
            secure: false,
            disabled: false,
            container_style: Style::default(),
            input_container_style: Style::default(),
            input_style: Style::default(),
            theme: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// Marks the label with an asterisk.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.base = self.base.placeholder(placeholder);
        self
    }

    pub fn left_icon(mut self, icon: IconSpec) -> Self {
        self.left_icon = Some(icon);
        self
    }

    pub fn left_icon_container_style(mut self, style: Style) -> Self {
        self.left_icon_container_style = style;
        self
    }

    pub fn right_icon(mut self, icon: IconSpec) -> Self {
        self.right_icon = Some(icon);
        self
    }

    pub fn right_icon_container_style(mut self, style: Style) -> Self {
        self.right_icon_container_style = style;
        self
    }

    /// Makes the right icon pressable.
    pub fn on_press_right_icon(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_press_right_icon = Some(Box::new(handler));
        self
    }

    /// Draws the border and help text in `danger[500]`.
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Applied to the text field while in the error state.
    pub fn error_style(mut self, style: Style) -> Self {
        self.error_style = style;
        self
    }

    pub fn help(mut self, help: impl Into<SharedString>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn help_style(mut self, style: Style) -> Self {
        self.help_style = style;
        self
    }

    /// Masks every character of the displayed value. The stored value is
    /// left as typed.
    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.container_style = style;
        self
    }

    /// Style of the bordered row holding the icons and the text field.
    pub fn input_container_style(mut self, style: Style) -> Self {
        self.input_container_style = style;
        self
    }

    /// Style of the text field itself.
    pub fn input_style(mut self, style: Style) -> Self {
        self.input_style = style;
        self
    }

    pub fn read_text(&self, cx: &mut App) -> SharedString {
        self.base.read_text(cx)
    }

    pub fn get_placeholder(&self) -> &SharedString {
        self.base.get_placeholder()
    }

    pub(crate) fn has_right_icon(&self) -> bool {
        self.right_icon.is_some()
    }

    fn resolved_container_style(&self) -> Style {
        resolve_styles![
            Style::new().w(relative(1.)).flex_col(),
            &self.container_style,
        ]
    }

    fn resolved_input_container_style(&self, theme: &Theme) -> Style {
        let border_color = if self.error {
            theme.colors.danger[Shade::S500]
        } else {
            theme.colors.border
        };

        resolve_styles![
            Style::new()
                .flex_row()
                .align_items(AlignItems::Center)
                .border(px(1.))
                .rounded(px(8.))
                .h(px(40.))
                .p(px(10.))
                .my(px(5.))
                .border_color(border_color),
            &self.input_container_style,
        ]
    }

    fn resolved_input_style(&self, theme: &Theme) -> Style {
        let mut base = Style::new().flex_1().text_color(theme.colors.text);
        if let Some(family) = &theme.font_family.regular {
            base = base.font_family(family.clone());
        }

        resolve_styles![base, &self.input_style, self.error => &self.error_style]
    }

    fn icon_container_style(custom: &Style) -> Style {
        resolve_styles![
            Style::new()
                .justify_content(JustifyContent::Center)
                .align_items(AlignItems::Center)
                .padding(gpui::Edges {
                    top: px(0.),
                    right: px(4.),
                    bottom: px(0.),
                    left: px(0.),
                })
                .my(px(4.)),
            custom,
        ]
    }

    fn help_color(&self, theme: &Theme) -> gpui::Rgba {
        if self.error {
            theme.colors.danger[Shade::S500]
        } else {
            theme.colors.border
        }
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.base.focus_handle(cx)
    }
}

impl Themed for TextInput {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for TextInput {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);
        let scope = scope_for_children(self.theme.as_ref(), &theme);

        if self.disabled && self.base.focus_handle(cx).is_focused(window) {
            window.blur();
        }

        let container_style = self.resolved_container_style();
        let input_container_style = self.resolved_input_container_style(&theme);
        let input_style = self.resolved_input_style(&theme);
        let help_color = self.help_color(&theme);
        let accent = theme.colors.primary[Shade::S500];

        let label = self.label.map(|label| {
            div()
                .flex()
                .flex_row()
                .child(Text::new(label).style(self.label_style).theme(&scope))
                .when(self.required, |this| {
                    this.child(
                        Text::new(" *")
                            .color(theme.colors.danger[Shade::S500])
                            .theme(&scope),
                    )
                })
        });

        let left_icon = self.left_icon.map(|icon| {
            div()
                .flex()
                .apply_style(&Self::icon_container_style(&self.left_icon_container_style))
                .child(Icon::from_spec(self.id.with_suffix("left_icon"), &icon).theme(&scope))
        });

        let right_icon = self.right_icon.map(|icon| {
            div()
                .flex()
                .apply_style(&Self::icon_container_style(
                    &self.right_icon_container_style,
                ))
                .child(
                    Icon::from_spec(self.id.with_suffix("right_icon"), &icon)
                        .theme(&scope)
                        .when_some(self.on_press_right_icon, |this, on_press| {
                            this.on_press(on_press)
                        }),
                )
        });

        let input = self
            .base
            .apply_style(&input_style)
            .placeholder_text_color(Hsla::from(theme.colors.neutral[Shade::S300]))
            .selection_color(Hsla::from(accent.alpha(0.3)))
            .disabled(self.disabled)
            .when(self.secure, |this| this.transform_text(|_| MASK_CHAR));

        let help = self.help.map(|help| {
            Text::new(help)
                .color(help_color)
                .style(self.help_style)
                .theme(&scope)
        });

        div()
            .id(self.id)
            .flex()
            .apply_style(&container_style)
            .children(label)
            .child(
                div()
                    .flex()
                    .apply_style(&input_container_style)
                    .children(left_icon)
                    .child(input)
                    .children(right_icon),
            )
            .children(help)
    }
}


#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use super::*;
    use crate::theme::rgb_hex;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    #[gpui::test]
    fn test_resolved_styles(cx: &mut TestAppContext) {
        let state = cx.new(|cx| InputState::new(cx));

        cx.update(|_cx| {
            let theme = Theme::default();

            let input = TextInput::new("input", state.clone());
            let container = input.resolved_input_container_style(&theme);
            assert_eq!(container.border_color, Some(theme.colors.border));
            assert_eq!(container.height, Some(px(40.).into()));
            assert_eq!(container.corner_radius, Some(px(8.)));

            let input = TextInput::new("input", state.clone()).error(true);
            assert_eq!(
                input.resolved_input_container_style(&theme).border_color,
                Some(theme.colors.danger[Shade::S500])
            );
            assert_eq!(input.help_color(&theme), theme.colors.danger[Shade::S500]);

            let input = TextInput::new("input", state)
                .input_container_style(Style::new().border_color(rgb_hex(0x00FF00)));
            assert_eq!(
                input.resolved_input_container_style(&theme).border_color,
                Some(rgb_hex(0x00FF00))
            );
        });
    }

    #[gpui::test]
    fn test_error_style_only_in_error_state(cx: &mut TestAppContext) {
        let state = cx.new(|cx| InputState::new(cx));

        cx.update(|_cx| {
            let theme = Theme::default();
            let red = rgb_hex(0xFF0000);

            let input = TextInput::new("input", state.clone())
                .error_style(Style::new().text_color(red));
            assert_eq!(
                input.resolved_input_style(&theme).text_color,
                Some(theme.colors.text)
            );

            let input = input.error(true);
            assert_eq!(input.resolved_input_style(&theme).text_color, Some(red));
            assert_eq!(input.resolved_input_style(&theme).flex_grow, Some(1.));
        });
    }

    #[gpui::test]
    fn test_read_text_and_placeholder(cx: &mut TestAppContext) {
        let state = cx.new(|cx| InputState::new(cx).initial_value("hello"));

        cx.update(|cx| {
            let input = TextInput::new("input", state).placeholder("Email");
            assert_eq!(input.get_placeholder(), &SharedString::from("Email"));
            assert_eq!(input.read_text(cx), SharedString::from("hello"));
            assert!(!input.has_right_icon());
        });
    }

    struct InputTestView {
        state: Entity<InputState>,
    }

    impl gpui::Render for InputTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
            TextInput::new("email", self.state.clone())
                .label("Email")
                .required(true)
                .left_icon(IconSpec::new("mail"))
                .right_icon(IconSpec::new("x"))
                .on_press_right_icon(|_, _, _| {})
                .error(true)
                .help("Required")
                .secure(true)
        }
    }

    #[gpui::test]
    fn test_text_input_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            gpui_primitives::input::init(cx);
            cx.open_window(Default::default(), |_window, cx| {
                let state = cx.new(|cx| InputState::new(cx));
                cx.new(|_cx| InputTestView { state })
            })
            .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }
}
