#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use gpui::{Result, SharedString};
use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Glyphs the components draw by default, laid out the way
/// [`SvgIconSet`](crate::icons::SvgIconSet) expects.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct ElementsAssets;

impl AssetProvider for ElementsAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(ElementsAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_glyphs_are_bundled() {
        for path in [
            "icons/feather/chevron-right.svg",
            "icons/feather/eye.svg",
            "icons/feather/eye-off.svg",
            "icons/feather/loader.svg",
            "icons/material-community/account.svg",
            "icons/material/mode-edit.svg",
        ] {
            assert!(ElementsAssets.get(path).is_some(), "missing {path}");
        }
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let feather = ElementsAssets.list("icons/feather/").unwrap();
        assert!(feather.iter().all(|path| path.starts_with("icons/feather/")));
        assert!(!feather.is_empty());
    }
}
