use std::{ops::Deref, sync::Arc};

use crate::Theme;

/// The ambient theme at one point of the element tree.
///
/// A scope is handed down explicitly while elements are built: components
/// receive it through their `theme` builder and pass it on to the elements
/// they compose. Cloning is cheap, and a nested scope never affects its
/// parent or its siblings.
#[derive(Debug, Clone)]
pub struct ThemeScope {
    theme: Arc<Theme>,
}

impl ThemeScope {
    /// The scope outside any provider: the process default theme.
    pub fn root() -> Self {
        Self {
            theme: Theme::default_arc(),
        }
    }

    pub fn new(theme: impl Into<Arc<Theme>>) -> Self {
        Self {
            theme: theme.into(),
        }
    }

    pub fn current(&self) -> &Theme {
        &self.theme
    }

    pub fn current_arc(&self) -> Arc<Theme> {
        self.theme.clone()
    }

    /// Runs `subtree` with `theme` as the ambient theme. The innermost
    /// provider wins.
    pub fn provide<R>(
        &self,
        theme: impl Into<Arc<Theme>>,
        subtree: impl FnOnce(&ThemeScope) -> R,
    ) -> R {
        subtree(&ThemeScope::new(theme))
    }
}

impl Default for ThemeScope {
    fn default() -> Self {
        Self::root()
    }
}

impl Deref for ThemeScope {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.theme
    }
}

impl AsRef<Theme> for ThemeScope {
    fn as_ref(&self) -> &Theme {
        &self.theme
    }
}

/// Runs `subtree` under a scope providing `theme`.
pub fn provide_theme<R>(
    theme: impl Into<Arc<Theme>>,
    subtree: impl FnOnce(&ThemeScope) -> R,
) -> R {
    ThemeScope::root().provide(theme, subtree)
}

/// The theme a component observes: its scope if it was given one,
/// otherwise the default.
pub fn current_theme(scope: Option<&ThemeScope>) -> Arc<Theme> {
    scope.map_or_else(Theme::default_arc, ThemeScope::current_arc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AvatarSizes, FontSizes, ThemePatch};

    fn theme_with_lg(lg: f32) -> Theme {
        ThemePatch::new()
            .font_size(FontSizes {
                lg,
                ..FontSizes::default()
            })
            .into_theme()
    }

    #[test]
    fn test_no_provider_is_default() {
        assert_eq!(*current_theme(None), Theme::default());
        assert_eq!(*ThemeScope::root().current(), Theme::default());
    }

    #[test]
    fn test_provider_is_observed() {
        let observed = provide_theme(theme_with_lg(50.), |scope| scope.font_size.lg);
        assert_eq!(observed, 50.);
    }

    #[test]
    fn test_innermost_provider_wins() {
        let (outer, inner) = provide_theme(theme_with_lg(1.), |a| {
            let inner = a.provide(theme_with_lg(2.), |b| current_theme(Some(b)).font_size.lg);
            (current_theme(Some(a)).font_size.lg, inner)
        });

        assert_eq!(inner, 2.);
        assert_eq!(outer, 1.);
    }

    #[test]
    fn test_siblings_are_independent() {
        let root = ThemeScope::root();
        let left = root.provide(theme_with_lg(10.), |scope| scope.clone());
        let right = root.provide(theme_with_lg(20.), |scope| scope.clone());

        assert_eq!(left.font_size.lg, 10.);
        assert_eq!(right.font_size.lg, 20.);
        assert_eq!(root.font_size.lg, 36.);
    }

    #[test]
    fn test_partial_override_falls_back_to_default_tiers() {
        let patch = ThemePatch::new().font_size(FontSizes {
            md: 99.,
            ..FontSizes::default()
        });

        provide_theme(patch, |scope| {
            assert_eq!(scope.font_size.md, 99.);
            assert_eq!(scope.font_size.xs, FontSizes::default().xs);
            assert_eq!(scope.avatar_sizes, AvatarSizes::default());
        });
    }
}
