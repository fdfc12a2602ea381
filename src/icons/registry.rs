use std::sync::{Arc, LazyLock};

use gpui::{App, Global, SharedString};
use indexmap::IndexMap;

use crate::icons::{BuiltinIconType, IconProvider, IconType, SvgIconSet};

static BUILTIN_PROVIDERS: LazyLock<[Arc<dyn IconProvider>; 14]> = LazyLock::new(|| {
    BuiltinIconType::ALL
        .map(|builtin| Arc::new(SvgIconSet::new(builtin.id())) as Arc<dyn IconProvider>)
});

/// The shared provider for a built-in icon set.
pub fn builtin_provider(builtin: BuiltinIconType) -> Arc<dyn IconProvider> {
    BUILTIN_PROVIDERS[builtin as usize].clone()
}

/// Custom icon providers, keyed by icon type id.
///
/// Built-in ids are resolved before the registry is consulted, and ids
/// nobody registered fall back to the `feather` set.
#[derive(Default)]
pub struct IconRegistry {
    custom: IndexMap<SharedString, Arc<dyn IconProvider>>,
}

impl Global for IconRegistry {}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` under `id`, replacing any earlier registration.
    pub fn register(&mut self, id: impl Into<SharedString>, provider: Arc<dyn IconProvider>) {
        let id = id.into();

        if BuiltinIconType::from_id(&id).is_some() {
            tracing::warn!("Icon provider \"{id}\" is shadowed by the built-in set of that name");
        }

        if self.custom.insert(id.clone(), provider).is_some() {
            tracing::debug!("Replaced icon provider \"{id}\"");
        } else {
            tracing::debug!("Registered icon provider \"{id}\"");
        }
    }

    pub fn unregister(&mut self, id: &str) -> Option<Arc<dyn IconProvider>> {
        self.custom.shift_remove(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.custom.contains_key(id)
    }

    /// Registered custom ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &SharedString> {
        self.custom.keys()
    }

    /// Picks the provider for `icon_type`. Never fails.
    pub fn resolve(&self, icon_type: &IconType) -> Arc<dyn IconProvider> {
        match icon_type {
            IconType::Builtin(builtin) => builtin_provider(*builtin),
            IconType::Custom(id) => match self.custom.get(id) {
                Some(provider) => provider.clone(),
                None => {
                    tracing::debug!("Unknown icon type \"{id}\", falling back to feather");
                    builtin_provider(BuiltinIconType::Feather)
                }
            },
        }
    }
}

/// Extension trait for the App-wide [`IconRegistry`].
pub trait IconRegistryExt {
    fn register_icon_provider(
        &mut self,
        id: impl Into<SharedString>,
        provider: impl IconProvider,
    );

    fn resolve_icon_provider(&self, icon_type: &IconType) -> Arc<dyn IconProvider>;
}

impl IconRegistryExt for App {
    fn register_icon_provider(
        &mut self,
        id: impl Into<SharedString>,
        provider: impl IconProvider,
    ) {
        self.default_global::<IconRegistry>()
            .register(id, Arc::new(provider));
    }

    fn resolve_icon_provider(&self, icon_type: &IconType) -> Arc<dyn IconProvider> {
        match self.try_global::<IconRegistry>() {
            Some(registry) => registry.resolve(icon_type),
            None => IconRegistry::new().resolve(icon_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{AnyElement, IntoElement, div};

    use crate::icons::Glyph;

    struct Named;

    impl IconProvider for Named {
        fn render(&self, _glyph: &Glyph) -> AnyElement {
            div().into_any_element()
        }
    }

    fn feather() -> Arc<dyn IconProvider> {
        builtin_provider(BuiltinIconType::Feather)
    }

    #[test]
    fn test_builtin_providers_are_shared() {
        let a = builtin_provider(BuiltinIconType::Material);
        let b = builtin_provider(BuiltinIconType::Material);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &feather()));
    }

    #[test]
    fn test_unknown_id_falls_back_to_feather() {
        let registry = IconRegistry::new();
        let resolved = registry.resolve(&IconType::parse("unknown-id"));
        assert!(Arc::ptr_eq(&resolved, &feather()));
    }

    #[test]
    fn test_custom_registration_last_wins() {
        let mut registry = IconRegistry::new();
        let first: Arc<dyn IconProvider> = Arc::new(Named);
        let second: Arc<dyn IconProvider> = Arc::new(Named);

        registry.register("brand-x", first.clone());
        assert!(Arc::ptr_eq(
            &registry.resolve(&IconType::parse("brand-x")),
            &first
        ));

        registry.register("brand-x", second.clone());
        assert!(Arc::ptr_eq(
            &registry.resolve(&IconType::parse("brand-x")),
            &second
        ));
        assert_eq!(registry.ids().count(), 1);
    }

    #[test]
    fn test_builtin_ids_win_over_registrations() {
        let mut registry = IconRegistry::new();
        let custom: Arc<dyn IconProvider> = Arc::new(Named);
        registry.register("material", custom.clone());

        let resolved = registry.resolve(&IconType::parse("material"));
        assert!(!Arc::ptr_eq(&resolved, &custom));
        assert!(Arc::ptr_eq(
            &resolved,
            &builtin_provider(BuiltinIconType::Material)
        ));
    }

    #[test]
    fn test_unregister() {
        let mut registry = IconRegistry::new();
        registry.register("brand-x", Arc::new(Named));
        assert!(registry.contains("brand-x"));
        assert!(registry.unregister("brand-x").is_some());
        assert!(Arc::ptr_eq(
            &registry.resolve(&IconType::parse("brand-x")),
            &feather()
        ));
    }
}

#[cfg(all(test, feature = "test-support"))]
mod app_tests {
    use super::*;
    use gpui::{AnyElement, IntoElement, TestAppContext, div};

    use crate::icons::Glyph;

    #[gpui::test]
    fn test_app_registry(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let fallback = cx.resolve_icon_provider(&IconType::parse("brand-x"));
            assert!(Arc::ptr_eq(
                &fallback,
                &builtin_provider(BuiltinIconType::Feather)
            ));

            cx.register_icon_provider("brand-x", |_glyph: &Glyph| -> AnyElement {
                div().into_any_element()
            });

            let resolved = cx.resolve_icon_provider(&IconType::parse("brand-x"));
            assert!(!Arc::ptr_eq(
                &resolved,
                &builtin_provider(BuiltinIconType::Feather)
            ));
        });
    }
}
