use gpui::{Pixels, Window, px};

pub trait WindowPixelsExt {
    /// The thinnest line the display can draw: one device pixel.
    fn hairline(&self) -> Pixels;
}

impl WindowPixelsExt for Window {
    fn hairline(&self) -> Pixels {
        px(1. / self.scale_factor().max(1.))
    }
}
