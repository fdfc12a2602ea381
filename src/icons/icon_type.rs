#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use gpui::SharedString;

/// Icon sets bundled with the library.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[func(pub fn id(&self) -> &'static str)]
pub enum BuiltinIconType {
    #[assoc(id = "zocial")]
    Zocial,
    #[assoc(id = "octicon")]
    Octicon,
    #[assoc(id = "material")]
    Material,
    #[assoc(id = "material-community")]
    MaterialCommunity,
    #[assoc(id = "ionicon")]
    Ionicon,
    #[assoc(id = "foundation")]
    Foundation,
    #[assoc(id = "evilicon")]
    EvilIcon,
    #[assoc(id = "entypo")]
    Entypo,
    #[assoc(id = "font-awesome")]
    FontAwesome,
    #[assoc(id = "font-awesome-5")]
    FontAwesome5,
    #[assoc(id = "simple-line-icon")]
    SimpleLineIcon,
    #[assoc(id = "feather")]
    Feather,
    #[assoc(id = "ant-design")]
    AntDesign,
    #[assoc(id = "fontisto")]
    Fontisto,
}

impl BuiltinIconType {
    pub const ALL: [BuiltinIconType; 14] = [
        BuiltinIconType::Zocial,
        BuiltinIconType::Octicon,
        BuiltinIconType::Material,
        BuiltinIconType::MaterialCommunity,
        BuiltinIconType::Ionicon,
        BuiltinIconType::Foundation,
        BuiltinIconType::EvilIcon,
        BuiltinIconType::Entypo,
        BuiltinIconType::FontAwesome,
        BuiltinIconType::FontAwesome5,
        BuiltinIconType::SimpleLineIcon,
        BuiltinIconType::Feather,
        BuiltinIconType::AntDesign,
        BuiltinIconType::Fontisto,
    ];

    /// Looks up a built-in set by id. `antdesign` is accepted as an alias
    /// of `ant-design`.
    pub fn from_id(id: &str) -> Option<BuiltinIconType> {
        match id {
            "antdesign" => Some(BuiltinIconType::AntDesign),
            id => Self::ALL.into_iter().find(|kind| kind.id() == id),
        }
    }
}

/// Which icon set a glyph name belongs to.
///
/// Ids that are not built in become [`IconType::Custom`] and are looked up
/// in the [`IconRegistry`](crate::icons::IconRegistry).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconType {
    Builtin(BuiltinIconType),
    Custom(SharedString),
}

impl IconType {
    pub const FEATHER: IconType = IconType::Builtin(BuiltinIconType::Feather);

    pub fn parse(id: impl Into<SharedString>) -> IconType {
        let id = id.into();
        match BuiltinIconType::from_id(&id) {
            Some(builtin) => IconType::Builtin(builtin),
            None => IconType::Custom(id),
        }
    }

    pub fn id(&self) -> SharedString {
        match self {
            IconType::Builtin(builtin) => builtin.id().into(),
            IconType::Custom(id) => id.clone(),
        }
    }

    pub fn builtin(&self) -> Option<BuiltinIconType> {
        match self {
            IconType::Builtin(builtin) => Some(*builtin),
            IconType::Custom(_) => None,
        }
    }
}

impl Default for IconType {
    fn default() -> Self {
        IconType::FEATHER
    }
}

impl From<BuiltinIconType> for IconType {
    fn from(builtin: BuiltinIconType) -> Self {
        IconType::Builtin(builtin)
    }
}

impl From<&'static str> for IconType {
    fn from(id: &'static str) -> Self {
        IconType::parse(id)
    }
}

impl From<SharedString> for IconType {
    fn from(id: SharedString) -> Self {
        IconType::parse(id)
    }
}

impl From<String> for IconType {
    fn from(id: String) -> Self {
        IconType::parse(id)
    }
}

impl fmt::Display for IconType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}

/// Extra style flags a glyph is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct IconVariant {
    pub solid: bool,
    pub brand: bool,
}

impl IconVariant {
    pub const NONE: IconVariant = IconVariant {
        solid: false,
        brand: false,
    };

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// The variant flags an icon set honours. Only `font-awesome-5` has solid
/// and brand variants; every other set ignores them.
pub fn resolve_icon_variant(icon_type: &IconType, requested: IconVariant) -> IconVariant {
    match icon_type {
        IconType::Builtin(BuiltinIconType::FontAwesome5) => requested,
        _ => IconVariant::NONE,
    }
}
