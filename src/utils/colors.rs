use gpui::Rgba;

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

/// Fully transparent black.
pub const TRANSPARENT: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.,
};
