mod colors;
pub use colors::*;

mod element_id;
pub use element_id::*;

mod normalize;
pub use normalize::*;

mod pixels;
pub use pixels::*;

mod press_guard;
pub use press_guard::*;

mod transitions;
pub use transitions::*;
