use gpui::{
    App, ClickEvent, ElementId, Entity, MouseButton, StatefulInteractiveElement, Window,
};

use crate::ElementIdExt;

/// Type alias for the callback run when a component is pressed.
pub type OnPressHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A trait for components that run a callback when pressed.
///
/// A component without a handler renders as a plain, non-interactive
/// container.
pub trait Pressable: Sized {
    /// Returns a mutable reference to the press handler.
    fn on_press_mut(&mut self) -> &mut Option<OnPressHandler>;

    /// Sets the handler called when the component is pressed.
    fn on_press(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        *self.on_press_mut() = Some(Box::new(handler));
        self
    }
}

/// Whether the left button is currently held down on the element `id`.
pub(crate) fn use_pressed_state(id: &ElementId, window: &mut Window, cx: &mut App) -> Entity<bool> {
    window.use_keyed_state(id.with_suffix("state:pressed"), cx, |_window, _cx| false)
}

fn set_pressed(state: &Entity<bool>, pressed: bool, cx: &mut App) {
    if *state.read(cx) == pressed {
        return;
    }
    state.update(cx, |this, _cx| *this = pressed);
    cx.notify(state.entity_id());
}

pub(crate) trait PressTracking: StatefulInteractiveElement + Sized {
    /// Keeps `pressed` in sync with the left button and runs `on_press` on
    /// click. The click does not reach pressable ancestors.
    fn track_press(
        self,
        pressed: Entity<bool>,
        on_press: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        let pressed_on_mouse_down = pressed.clone();
        let pressed_on_mouse_up_out = pressed.clone();

        self.on_mouse_down(MouseButton::Left, move |_event, window, cx| {
            window.prevent_default();
            set_pressed(&pressed_on_mouse_down, true, cx);
        })
        .on_click(move |event, window, cx| {
            window.prevent_default();
            cx.stop_propagation();

            set_pressed(&pressed, false, cx);
            (on_press)(event, window, cx);
        })
        .on_mouse_up_out(MouseButton::Left, move |_event, _window, cx| {
            // Pointer went down here but was released outside.
            set_pressed(&pressed_on_mouse_up_out, false, cx);
        })
    }
}

impl<E: StatefulInteractiveElement> PressTracking for E {}
