use std::{fs, path::Path, sync::Arc};

use serde::Deserialize;

use crate::{AvatarSizes, FontFamilies, FontSizes, Theme, ThemeColors, ThemeError};

/// A partial theme supplied by the host application.
///
/// Merging is shallow per top-level key: a key that is set replaces the
/// whole section, a key that is `None` keeps the base theme's section.
/// Inside a JSON section, fields that are left out take the default
/// constants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemePatch {
    pub colors: Option<ThemeColors>,
    pub font_family: Option<FontFamilies>,
    pub font_size: Option<FontSizes>,
    pub avatar_sizes: Option<AvatarSizes>,
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn colors(mut self, colors: ThemeColors) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn font_family(mut self, font_family: FontFamilies) -> Self {
        self.font_family = Some(font_family);
        self
    }

    pub fn font_size(mut self, font_size: FontSizes) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn avatar_sizes(mut self, avatar_sizes: AvatarSizes) -> Self {
        self.avatar_sizes = Some(avatar_sizes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_none()
            && self.font_family.is_none()
            && self.font_size.is_none()
            && self.avatar_sizes.is_none()
    }

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<ThemePatch, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<ThemePatch, ThemeError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let patch = Self::from_json(json)?;
        tracing::info!("Loaded theme patch from {}", path.display());
        Ok(patch)
    }

    /// Shallow-merges this patch onto the process default theme.
    pub fn into_theme(self) -> Theme {
        Theme::default_arc().merged(self)
    }
}

impl Theme {
    /// Returns a new theme with every section set in `patch` replaced.
    /// `self` is left untouched.
    pub fn merged(&self, patch: ThemePatch) -> Theme {
        let ThemePatch {
            colors,
            font_family,
            font_size,
            avatar_sizes,
        } = patch;

        Theme {
            colors: colors.unwrap_or_else(|| self.colors.clone()),
            font_family: font_family.unwrap_or_else(|| self.font_family.clone()),
            font_size: font_size.unwrap_or(self.font_size),
            avatar_sizes: avatar_sizes.unwrap_or(self.avatar_sizes),
        }
    }
}

impl From<ThemePatch> for Theme {
    fn from(patch: ThemePatch) -> Self {
        patch.into_theme()
    }
}

impl From<ThemePatch> for Arc<Theme> {
    fn from(patch: ThemePatch) -> Self {
        Arc::new(patch.into_theme())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{self, rgb_hex};

    #[test]
    fn test_empty_patch_is_default() {
        assert!(ThemePatch::new().is_empty());
        assert_eq!(ThemePatch::new().into_theme(), Theme::default());
    }

    #[test]
    fn test_patch_keeps_unspecified_sections() {
        let theme = ThemePatch::new()
            .font_size(FontSizes {
                lg: 48.,
                ..FontSizes::default()
            })
            .into_theme();

        assert_eq!(theme.font_size.lg, 48.);
        assert_eq!(theme.avatar_sizes, AvatarSizes::default());
        assert_eq!(theme.colors, ThemeColors::default());
        assert_eq!(theme.font_family, FontFamilies::default());
    }

    #[test]
    fn test_merge_does_not_mutate_base() {
        let base = Theme::default();
        let merged = base.merged(ThemePatch::new().avatar_sizes(AvatarSizes {
            small: 10.,
            ..AvatarSizes::default()
        }));

        assert_eq!(merged.avatar_sizes.small, 10.);
        assert_eq!(base.avatar_sizes.small, 34.);
    }

    #[test]
    fn test_merge_replaces_whole_section() {
        let base = Theme::default().merged(ThemePatch::new().font_size(FontSizes {
            xs: 1.,
            sm: 2.,
            normal: 3.,
            md: 4.,
            lg: 5.,
        }));
        let next = base.merged(ThemePatch::new().font_size(FontSizes::default()));
        assert_eq!(next.font_size, FontSizes::default());
    }

    #[test]
    fn test_patch_from_json() {
        let patch = ThemePatch::from_json(
            r##"{
                "colors": { "disabled": "#000000" },
                "font_size": { "lg": 40 }
            }"##,
        )
        .unwrap();

        let theme = patch.into_theme();
        assert_eq!(theme.colors.disabled, rgb_hex(0x000000));
        assert_eq!(theme.colors.primary, palette::BLUE);
        assert_eq!(theme.font_size.lg, 40.);
        assert_eq!(theme.font_size.sm, 16.);
    }

    #[test]
    fn test_patch_from_json_rejects_unknown_keys() {
        let err = ThemePatch::from_json(r#"{ "colours": {} }"#).unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }

    #[test]
    fn test_patch_from_missing_path() {
        let err = ThemePatch::from_path("/definitely/not/here/theme.json").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
