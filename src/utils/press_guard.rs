use std::time::Duration;

use gpui::Context;

/// How long a guard ignores presses after one goes through.
pub const PRESS_COOLDOWN: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PressGuardState {
    #[default]
    Idle,
    CoolingDown,
}

/// Lets one press through, then swallows presses until the cooldown
/// timer fires. Swallowed presses are dropped, not replayed.
#[derive(Debug, Default)]
pub struct PressGuard {
    state: PressGuardState,
}

impl PressGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PressGuardState {
        self.state
    }

    pub fn is_cooling_down(&self) -> bool {
        self.state == PressGuardState::CoolingDown
    }

    /// Moves to `CoolingDown`. Returns whether the press goes through.
    pub fn engage(&mut self) -> bool {
        match self.state {
            PressGuardState::Idle => {
                self.state = PressGuardState::CoolingDown;
                true
            }
            PressGuardState::CoolingDown => {
                tracing::debug!("Press swallowed during cooldown");
                false
            }
        }
    }

    pub fn release(&mut self) {
        self.state = PressGuardState::Idle;
    }

    /// Handles a press and, when it goes through, starts the cooldown
    /// timer. The timer always runs to completion.
    pub fn press(&mut self, cx: &mut Context<Self>) -> bool {
        if !self.engage() {
            return false;
        }

        cx.spawn(async move |this, cx| {
            cx.background_executor().timer(PRESS_COOLDOWN).await;
            // The guard is gone when its element left the tree.
            this.update(cx, |guard, cx| {
                guard.release();
                cx.notify();
            })
            .ok();
        })
        .detach();

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engage_and_release() {
        let mut guard = PressGuard::new();
        assert_eq!(guard.state(), PressGuardState::Idle);

        assert!(guard.engage());
        assert!(guard.is_cooling_down());
        assert!(!guard.engage());
        assert!(!guard.engage());

        guard.release();
        assert!(guard.engage());
    }
}
