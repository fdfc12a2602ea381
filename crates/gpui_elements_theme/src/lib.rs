//! Theme model and propagation for `gpui_elements`.
//!
//! A [`Theme`] carries color ramps, font families, font sizes and avatar
//! sizes. Hosts override parts of it with a [`ThemePatch`] and hand it to a
//! subtree through a [`ThemeScope`].

pub mod palette;
pub use palette::{ColorRamp, Shade, rgb_hex};

mod schema;
pub use schema::*;

mod patch;
pub use patch::*;

mod scope;
pub use scope::*;

mod ext;
pub use ext::*;

mod error;
pub use error::*;

mod deserializers;
pub use deserializers::parse_color;
