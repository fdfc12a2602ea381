//! Icon sets, glyph providers and the registry that picks between them.

mod icon_type;
pub use icon_type::*;

mod provider;
pub use provider::*;

mod registry;
pub use registry::*;

mod spec;
pub use spec::*;
