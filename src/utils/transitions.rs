use std::time::Duration;

use gpui::{App, ElementId, Window};
use gpui_transitions::Transition;

use crate::ElementIdExt;

/// Creates (or reuses) a keyed transition whose goal is picked by the
/// first matching branch, and retargets it when the goal changed.
///
/// ```ignore
/// let bg = conditional_transition!(id, window, cx, Duration::from_millis(250), {
///     is_pressed => pressed_color,
///     _ => color
/// });
/// ```
#[macro_export]
macro_rules! conditional_transition {
    (
        $id:expr, $window:expr, $cx:expr, $duration:expr, $($rest:tt)+
    ) => {{
        use gpui_transitions::WindowUseTransition;

        let value = $crate::conditional_transition_branches!(@condition [ $($rest)+ ]);

        let transition = $window
            .use_keyed_transition($id, $cx, $duration, |_window, _cx| value)
            .with_easing(gpui::ease_out_quint());

        let value = value.into();

        if transition.read_goal($cx) != &value {
            transition.update($cx, |this, _cx| *this = value);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

#[macro_export]
macro_rules! conditional_transition_branches {
    // Default branch wasn't last.
    (@branch_list [ _ => $value:expr, $($rest:tt)+ ]) => {{
        compile_error!("`_ => value` is only allowed on the last branch.");
    }};

    // Entry point.
    (@condition [ { $cond:expr => $value:expr, $($rest:tt)+ } ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ]) }
    }};

    (@branch_list [ $cond:expr => $value:expr, $($rest:tt)+ ]) => {{
        if $cond { $value } else { $crate::conditional_transition_branches!(@branch_list [ $($rest)+ ]) }
    }};

    // Last branch.
    (@branch_list [ _ => $value:expr ]) => {{
        $value
    }};

    // Last branch wasn't default.
    (@branch_list [ $cond:expr => $value:expr ]) => {{
        compile_error!("The last branch must be `_ => value`");
    }};

    // A plain value.
    (@condition [ $($rest:tt)+ ]) => {{
        $($rest)+
    }};
}

/// Opacity of a pressable surface: `pressed_opacity` while the pointer is
/// down on it, fully opaque otherwise.
pub fn pressed_opacity_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_pressed: bool,
    pressed_opacity: f32,
) -> Transition<f32> {
    conditional_transition!(
        base_id.into().with_suffix("state:transition:pressed"),
        window,
        cx,
        Duration::from_millis(150),
        {
            is_pressed => pressed_opacity,
            _ => 1.
        }
    )
}
