use std::sync::Arc;

use gpui::App;

use crate::theme::{Theme, ThemeExt, ThemeScope};

/// Components that can be handed an explicit theme scope.
///
/// Without a scope a component renders with the App-level theme
/// ([`ThemeExt::get_theme`]).
pub trait Themed: Sized {
    fn theme_scope_mut(&mut self) -> &mut Option<ThemeScope>;

    /// Renders this component, and everything it composes, under `scope`.
    fn theme(mut self, scope: &ThemeScope) -> Self {
        *self.theme_scope_mut() = Some(scope.clone());
        self
    }
}

/// Resolves the theme a component observes.
pub fn resolve_theme(scope: Option<&ThemeScope>, cx: &App) -> Arc<Theme> {
    match scope {
        Some(scope) => scope.current_arc(),
        None => cx.get_theme(),
    }
}

/// The scope composite components hand to their children.
pub(crate) fn scope_for_children(scope: Option<&ThemeScope>, theme: &Arc<Theme>) -> ThemeScope {
    match scope {
        Some(scope) => scope.clone(),
        None => ThemeScope::new(theme.clone()),
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{FontSizes, ThemePatch, provide_theme};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_scope_wins_over_app_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(ThemePatch::new().font_size(FontSizes {
                lg: 40.,
                ..FontSizes::default()
            }));

            assert_eq!(resolve_theme(None, cx).font_size.lg, 40.);

            let scoped = ThemePatch::new().font_size(FontSizes {
                lg: 50.,
                ..FontSizes::default()
            });
            provide_theme(scoped, |scope| {
                assert_eq!(resolve_theme(Some(scope), cx).font_size.lg, 50.);
            });
        });
    }
}
