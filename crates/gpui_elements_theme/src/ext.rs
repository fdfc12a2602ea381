use std::sync::Arc;

use gpui::{App, Global};

use crate::{Theme, ThemeScope};

struct GlobalTheme(Arc<Theme>);

impl Global for GlobalTheme {}

/// Extension trait for accessing and replacing the App-level default theme.
///
/// This is the theme components observe when they are built without a
/// [`ThemeScope`].
pub trait ThemeExt {
    /// Changes the default theme.
    fn set_theme<T: Into<Arc<Theme>>>(&mut self, theme: T);

    /// Gets the default theme. Falls back to the process default when no
    /// theme was set.
    fn get_theme(&self) -> Arc<Theme>;

    /// A root scope carrying the default theme.
    fn theme_scope(&self) -> ThemeScope {
        ThemeScope::new(self.get_theme())
    }
}

impl ThemeExt for App {
    fn set_theme<T: Into<Arc<Theme>>>(&mut self, theme: T) {
        self.set_global(GlobalTheme(theme.into()))
    }

    fn get_theme(&self) -> Arc<Theme> {
        self.try_global::<GlobalTheme>()
            .map_or_else(Theme::default_arc, |theme| theme.0.clone())
    }
}
