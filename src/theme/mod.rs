//! Theme access for components.
//!
//! The model itself lives in `gpui_elements_theme`; this module adds the
//! size and weight kinds components resolve against it, and the [`Themed`]
//! builder shared by every component.

pub use gpui_elements_theme::*;

mod kinds;
pub use kinds::*;

mod themed;
pub use themed::*;
