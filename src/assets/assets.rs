use std::{borrow::Cow, fs, path::PathBuf};

use anyhow::anyhow;
use gpui::{AssetSource, Result, SharedString};
use smallvec::SmallVec;

/// An [`AssetSource`] made of ordered layers. A path is served by the
/// first layer that has it, so app assets listed before
/// [`ElementsAssets`](crate::ElementsAssets) override the bundled glyphs.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

impl<const N: usize> AssetSource for Assets<N> {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        if let Some(asset) = self.providers.iter().find_map(|provider| provider.get(path)) {
            return Ok(Some(asset));
        }

        tracing::debug!("no asset layer has \"{path}\"");
        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut listed = Vec::new();
        for provider in &self.providers {
            for entry in provider.list(path)? {
                if !listed.contains(&entry) {
                    listed.push(entry);
                }
            }
        }
        Ok(listed)
    }
}

/// One layer of an [`Assets`] source.
pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<SharedString>>;
}

/// Serves files below a directory, for icon sets shipped next to the app
/// binary instead of embedded in it.
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetProvider for DirectoryAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        fs::read(self.root.join(path)).ok().map(Cow::Owned)
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let dir = self.root.join(path);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let prefix = path.trim_end_matches('/');
        let mut entries = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let name = entry?.file_name();
            let name = name.to_string_lossy();
            entries.push(if prefix.is_empty() {
                SharedString::from(name.into_owned())
            } else {
                SharedString::from(format!("{prefix}/{name}"))
            });
        }
        entries.sort();
        Ok(entries)
    }
}
