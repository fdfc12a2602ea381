use std::ops::Index;

use gpui::Rgba;

/// Builds an opaque color from a `0xRRGGBB` value.
pub const fn rgb_hex(hex: u32) -> Rgba {
    Rgba {
        r: ((hex >> 16) & 0xFF) as f32 / 255.,
        g: ((hex >> 8) & 0xFF) as f32 / 255.,
        b: (hex & 0xFF) as f32 / 255.,
        a: 1.,
    }
}

/// The intensity steps every ramp carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
}

impl Shade {
    pub const ALL: [Shade; 10] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
    ];

    /// The numeric step, e.g. `500` for `S500`.
    pub const fn step(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
        }
    }

    pub const fn from_step(step: u16) -> Option<Shade> {
        match step {
            50 => Some(Shade::S50),
            100 => Some(Shade::S100),
            200 => Some(Shade::S200),
            300 => Some(Shade::S300),
            400 => Some(Shade::S400),
            500 => Some(Shade::S500),
            600 => Some(Shade::S600),
            700 => Some(Shade::S700),
            800 => Some(Shade::S800),
            900 => Some(Shade::S900),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A set of colors for one semantic role at the fixed [`Shade`] steps.
///
/// Ramps are immutable once built. Index with a [`Shade`] or look up a raw
/// step with [`ColorRamp::get`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRamp([Rgba; 10]);

impl ColorRamp {
    pub const fn new(colors: [Rgba; 10]) -> Self {
        Self(colors)
    }

    /// Builds a ramp from ten `0xRRGGBB` values ordered from 50 to 900.
    pub const fn from_hex(hex: [u32; 10]) -> Self {
        let mut colors = [rgb_hex(0); 10];
        let mut idx = 0;
        while idx < 10 {
            colors[idx] = rgb_hex(hex[idx]);
            idx += 1;
        }
        Self(colors)
    }

    pub const fn shade(&self, shade: Shade) -> Rgba {
        self.0[shade.index()]
    }

    /// Looks up a raw step. Steps outside 50..=900 return `None`.
    pub fn get(&self, step: u16) -> Option<Rgba> {
        Shade::from_step(step).map(|shade| self.shade(shade))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, Rgba)> + '_ {
        Shade::ALL.into_iter().map(|shade| (shade, self.shade(shade)))
    }
}

impl Index<Shade> for ColorRamp {
    type Output = Rgba;

    fn index(&self, shade: Shade) -> &Self::Output {
        &self.0[shade.index()]
    }
}

pub const BLUE: ColorRamp = ColorRamp::from_hex([
    0xEFF6FF, 0xDBEAFE, 0xBFDBFE, 0x93C5FD, 0x60A5FA, 0x3B82F6, 0x2563EB, 0x1D4ED8, 0x1E40AF,
    0x1E3A8A,
]);

pub const GRAY: ColorRamp = ColorRamp::from_hex([
    0xF9FAFB, 0xF3F4F6, 0xE5E7EB, 0xD1D5DB, 0x9CA3AF, 0x6B7280, 0x4B5563, 0x374151, 0x1F2937,
    0x111827,
]);

pub const RED: ColorRamp = ColorRamp::from_hex([
    0xFEF2F2, 0xFEE2E2, 0xFECACA, 0xFCA5A5, 0xF87171, 0xEF4444, 0xDC2626, 0xB91C1C, 0x991B1B,
    0x7F1D1D,
]);

pub const YELLOW: ColorRamp = ColorRamp::from_hex([
    0xFFFBEB, 0xFEF3C7, 0xFDE68A, 0xFCD34D, 0xFBBF24, 0xF59E0B, 0xD97706, 0xB45309, 0x92400E,
    0x78350F,
]);

pub const GREEN: ColorRamp = ColorRamp::from_hex([
    0xECFDF5, 0xD1FAE5, 0xA7F3D0, 0x6EE7B7, 0x34D399, 0x10B981, 0x059669, 0x047857, 0x065F46,
    0x064E3B,
]);

pub const WHITE: Rgba = rgb_hex(0xFFFFFF);
pub const BLACK: Rgba = rgb_hex(0x000000);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_channels() {
        let color = rgb_hex(0xFF8000);
        assert_eq!(color.r, 1.);
        assert_eq!(color.g, 128. / 255.);
        assert_eq!(color.b, 0.);
        assert_eq!(color.a, 1.);
    }

    #[test]
    fn test_shade_steps_round_trip() {
        for shade in Shade::ALL {
            assert_eq!(Shade::from_step(shade.step()), Some(shade));
        }
        assert_eq!(Shade::from_step(550), None);
    }

    #[test]
    fn test_ramp_lookup_by_step() {
        assert_eq!(BLUE.get(500), Some(rgb_hex(0x3B82F6)));
        assert_eq!(BLUE.get(500), Some(BLUE[Shade::S500]));
        assert_eq!(GRAY.get(42), None);
    }

    #[test]
    fn test_ramps_darken_towards_900() {
        for ramp in [BLUE, GRAY, RED, YELLOW, GREEN] {
            let lightness = |c: Rgba| c.r + c.g + c.b;
            assert!(lightness(ramp[Shade::S50]) > lightness(ramp[Shade::S900]));
        }
    }
}
