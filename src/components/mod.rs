mod text;
pub use text::*;

mod icon;
pub use icon::*;

mod image;
pub use image::*;

mod spacer;
pub use spacer::*;

mod divider;
pub use divider::*;

mod badge;
pub use badge::*;

mod avatar;
pub use avatar::*;

mod button;
pub use button::*;

mod list_item;
pub use list_item::*;

mod text_input;
pub use text_input::*;

mod secure_text_input;
pub use secure_text_input::*;
