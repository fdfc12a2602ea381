use gpui::{
    App, ElementId, Entity, FocusHandle, Focusable, IntoElement, RenderOnce, SharedString, Window,
    px,
};
use gpui_primitives::input::InputState;

use crate::{
    ElementIdExt,
    components::TextInput,
    icons::IconSpec,
    style::Style,
    theme::{Shade, Theme, ThemeScope, Themed, resolve_theme},
};

const TOGGLE_SIZE: f32 = 18.;

/// A [`TextInput`] that starts masked, with a right-hand eye icon that
/// toggles between showing and hiding the value.
///
/// A right icon set by the caller replaces the toggle.
#[derive(IntoElement)]
pub struct SecureTextInput {
    id: ElementId,
    input: TextInput,
    theme: Option<ThemeScope>,
}

impl SecureTextInput {
    pub fn new(id: impl Into<ElementId>, state: Entity<InputState>) -> Self {
        let id = id.into();
        Self {
            input: TextInput::new(id.clone(), state),
            id,
            theme: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.input = self.input.label(label);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.input = self.input.required(required);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.input = self.input.placeholder(placeholder);
        self
    }

    pub fn left_icon(mut self, icon: IconSpec) -> Self {
        self.input = self.input.left_icon(icon);
        self
    }

    pub fn right_icon(mut self, icon: IconSpec) -> Self {
        self.input = self.input.right_icon(icon);
        self
    }

    pub fn error(mut self, error: bool) -> Self {
        self.input = self.input.error(error);
        self
    }

    pub fn help(mut self, help: impl Into<SharedString>) -> Self {
        self.input = self.input.help(help);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.input = self.input.disabled(disabled);
        self
    }

    pub fn container_style(mut self, style: Style) -> Self {
        self.input = self.input.container_style(style);
        self
    }

    pub fn input_container_style(mut self, style: Style) -> Self {
        self.input = self.input.input_container_style(style);
        self
    }

    pub fn input_style(mut self, style: Style) -> Self {
        self.input = self.input.input_style(style);
        self
    }

    pub fn read_text(&self, cx: &mut App) -> SharedString {
        self.input.read_text(cx)
    }
}

/// The toggle shown for the current visibility: `eye` while masked,
/// `eye-off` while revealed.
pub(crate) fn visibility_toggle(hidden: bool, theme: &Theme) -> IconSpec {
    IconSpec::new(if hidden { "eye" } else { "eye-off" })
        .color(theme.colors.neutral[Shade::S400])
        .size(px(TOGGLE_SIZE))
}

impl Focusable for SecureTextInput {
    fn focus_handle(&self, cx: &App) -> FocusHandle {
        self.input.focus_handle(cx)
    }
}

impl Themed for SecureTextInput {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope> {
        &mut self.theme
    }
}

impl RenderOnce for SecureTextInput {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = resolve_theme(self.theme.as_ref(), cx);

        let hidden = window.use_keyed_state(self.id.with_suffix("state:hidden"), cx, |_window, _cx| {
            true
        });
        let is_hidden = *hidden.read(cx);

        let mut input = self.input.secure(is_hidden);
        if let Some(scope) = &self.theme {
            input = input.theme(scope);
        }

        if input.has_right_icon() {
            return input;
        }

        input
            .right_icon(visibility_toggle(is_hidden, &theme))
            .on_press_right_icon(move |_event, _window, cx| {
                hidden.update(cx, |hidden, cx| {
                    *hidden = !*hidden;
                    cx.notify();
                });
            })
    }
}


#[cfg(all(test, feature = "test-support"))]
mod render_tests {
    use super::*;
    use gpui::{AppContext, TestAppContext, VisualTestContext};

    struct SecureTestView {
        state: Entity<InputState>,
    }

    impl gpui::Render for SecureTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut gpui::Context<Self>) -> impl IntoElement {
            SecureTextInput::new("password", self.state.clone())
                .label("Password")
                .placeholder("Password")
        }
    }

    #[gpui::test]
    fn test_secure_text_input_renders_in_window(cx: &mut TestAppContext) {
        let window = cx.update(|cx| {
            gpui_primitives::input::init(cx);
            cx.open_window(Default::default(), |_window, cx| {
                let state = cx.new(|cx| InputState::new(cx).initial_value("hunter2"));
                cx.new(|_cx| SecureTestView { state })
            })
            .unwrap()
        });

        let cx = VisualTestContext::from_window(window.into(), cx);
        cx.run_until_parked();
    }

    #[gpui::test]
    fn test_read_text_is_unmasked(cx: &mut TestAppContext) {
        let state = cx.new(|cx| InputState::new(cx).initial_value("hunter2"));

        cx.update(|cx| {
            let input = SecureTextInput::new("password", state);
            assert_eq!(input.read_text(cx), SharedString::from("hunter2"));
        });
    }
}
