pub mod components;

pub mod extensions;

pub mod icons;

pub mod style;

pub mod theme;

pub mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
