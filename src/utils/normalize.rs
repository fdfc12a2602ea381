use gpui::{App, Global, Window};

/// Which platform's text metrics font sizes are normalized for.
///
/// Defaults to [`Platform::native`]; an app can pin one with
/// `cx.set_global(Platform::Android)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

impl Global for Platform {}

impl Platform {
    /// Apple targets use the iOS metrics, everything else the Android ones.
    pub const fn native() -> Platform {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    pub fn current(cx: &App) -> Platform {
        cx.try_global::<Platform>()
            .copied()
            .unwrap_or_else(Platform::native)
    }

    /// The screen width font sizes are designed against.
    pub const fn reference_width(self) -> f32 {
        match self {
            Platform::Ios => 410.,
            Platform::Android => 360.,
        }
    }

    const fn size_correction(self) -> i32 {
        match self {
            Platform::Ios => 0,
            Platform::Android => -4,
        }
    }
}

/// The inputs font-size normalization depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontScale {
    pub screen_width: f32,
    pub platform: Platform,
    /// Device pixels per logical pixel.
    pub pixel_ratio: f32,
}

impl FontScale {
    pub fn new(screen_width: f32, platform: Platform) -> Self {
        Self {
            screen_width,
            platform,
            pixel_ratio: 1.,
        }
    }

    pub fn pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    /// Reads the viewport width and scale factor of `window`.
    pub fn from_window(window: &Window, cx: &App) -> Self {
        Self {
            screen_width: window.viewport_size().width.to_f64() as f32,
            platform: Platform::current(cx),
            pixel_ratio: window.scale_factor(),
        }
    }

    /// Scales `base` by the screen width, snaps it to the device pixel
    /// grid and rounds it to a whole size.
    pub fn normalize(&self, base: f32) -> i32 {
        let scaled = base * (self.screen_width / self.platform.reference_width());
        let snapped = round_to_nearest_pixel(scaled, self.pixel_ratio);
        snapped.round() as i32 + self.platform.size_correction()
    }
}

fn round_to_nearest_pixel(value: f32, pixel_ratio: f32) -> f32 {
    if pixel_ratio <= 0. {
        return value;
    }
    (value * pixel_ratio).round() / pixel_ratio
}

/// Normalizes a font size for `screen_width` on `platform`, assuming one
/// device pixel per logical pixel.
pub fn normalize_font_size(base: f32, screen_width: f32, platform: Platform) -> i32 {
    FontScale::new(screen_width, platform).normalize(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_widths_keep_base_size() {
        assert_eq!(normalize_font_size(16., 410., Platform::Ios), 16);
        assert_eq!(normalize_font_size(16., 360., Platform::Android), 12);
    }

    #[test]
    fn test_scales_with_screen_width() {
        assert_eq!(normalize_font_size(16., 820., Platform::Ios), 32);
        assert_eq!(normalize_font_size(18., 205., Platform::Ios), 9);
        assert_eq!(normalize_font_size(24., 720., Platform::Android), 44);
    }

    #[test]
    fn test_snaps_to_device_pixels_before_rounding() {
        // 14 * 400 / 410 = 13.658..., snapped to 0.5 steps on a 2x display is 13.5.
        let scale = FontScale::new(400., Platform::Ios).pixel_ratio(2.);
        assert_eq!(scale.normalize(14.), 14);

        // 10 * 369 / 410 = 9.0, unaffected by snapping.
        let scale = FontScale::new(369., Platform::Ios).pixel_ratio(3.);
        assert_eq!(scale.normalize(10.), 9);
    }

    #[test]
    fn test_zero_pixel_ratio_is_ignored() {
        let scale = FontScale::new(410., Platform::Ios).pixel_ratio(0.);
        assert_eq!(scale.normalize(18.), 18);
    }

    #[test]
    fn test_native_platform() {
        let expected = if cfg!(any(target_os = "macos", target_os = "ios")) {
            Platform::Ios
        } else {
            Platform::Android
        };
        assert_eq!(Platform::native(), expected);
    }
}
