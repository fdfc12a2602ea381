use gpui::App;

use crate::{
    icons::IconRegistry,
    theme::{Theme, ThemeExt},
    utils::Platform,
};

/// Registers the text input key bindings and the icon registry.
pub fn init(cx: &mut App) {
    gpui_primitives::input::init(cx);
    cx.default_global::<IconRegistry>();

    tracing::debug!(platform = ?Platform::current(cx), "gpui_elements initialized");
}

/// [`init`], then makes `theme` the App-level default theme.
pub fn init_with_theme(cx: &mut App, theme: impl Into<std::sync::Arc<Theme>>) {
    init(cx);
    cx.set_theme(theme);
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::{
        icons::{IconRegistryExt, IconType},
        theme::{FontSizes, ThemePatch},
    };
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_init_installs_registry(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init(cx);
            assert!(cx.has_global::<IconRegistry>());
            // Unknown sets fall back without panicking.
            let _ = cx.resolve_icon_provider(&IconType::parse("no-such-set"));
        });
    }

    #[gpui::test]
    fn test_init_with_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init_with_theme(
                cx,
                ThemePatch::new().font_size(FontSizes {
                    xs: 10.,
                    ..FontSizes::default()
                }),
            );
            assert_eq!(cx.get_theme().font_size.xs, 10.);
        });
    }
}
