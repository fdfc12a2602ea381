use std::collections::BTreeMap;

use gpui::Rgba;
use serde::{Deserialize, Deserializer, de::Error};

use crate::{ColorRamp, Shade, ThemeError, palette::rgb_hex};

/// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
/// `rgba(r, g, b, a)`. Channel values in the functional forms are 0-255,
/// alpha is 0-1.
pub fn parse_color(value: &str) -> Result<Rgba, ThemeError> {
    let trimmed = value.trim();
    let invalid = || ThemeError::InvalidColor(value.to_string());

    if trimmed.starts_with('#') {
        return Rgba::try_from(trimmed).map_err(|_| invalid());
    }

    let (args, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
        (rest, true)
    } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
        (rest, false)
    } else {
        return Err(invalid());
    };

    let args = args.strip_suffix(')').ok_or_else(invalid)?;
    let parts = args
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;

    let channel = |value: f32| (value / 255.).clamp(0., 1.);

    match (has_alpha, parts.as_slice()) {
        (false, [r, g, b]) => Ok(Rgba {
            r: channel(*r),
            g: channel(*g),
            b: channel(*b),
            a: 1.,
        }),
        (true, [r, g, b, a]) => Ok(Rgba {
            r: channel(*r),
            g: channel(*g),
            b: channel(*b),
            a: (*a).clamp(0., 1.),
        }),
        _ => Err(invalid()),
    }
}

pub fn de_color<'de, D>(deserializer: D) -> Result<Rgba, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_color(&value).map_err(D::Error::custom)
}

impl<'de> Deserialize<'de> for ColorRamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let steps = BTreeMap::<u16, String>::deserialize(deserializer)?;
        let mut colors = [rgb_hex(0); 10];

        for (step, value) in &steps {
            let Some(shade) = Shade::from_step(*step) else {
                return Err(D::Error::custom(format!(
                    "unknown shade step {step}, expected one of 50, 100, ..., 900"
                )));
            };
            colors[shade as usize] = parse_color(value).map_err(D::Error::custom)?;
        }

        if let Some(missing) = Shade::ALL
            .iter()
            .find(|shade| !steps.contains_key(&shade.step()))
        {
            return Err(D::Error::custom(format!(
                "color ramp is missing shade step {}",
                missing.step()
            )));
        }

        Ok(ColorRamp::new(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Rgba, b: Rgba) -> bool {
        [a.r - b.r, a.g - b.g, a.b - b.b, a.a - b.a]
            .iter()
            .all(|delta| delta.abs() < 0.01)
    }

    #[test]
    fn test_parse_hex_colors() {
        assert!(close(parse_color("#ffffff").unwrap(), rgb_hex(0xFFFFFF)));
        assert!(close(parse_color("#ccc").unwrap(), rgb_hex(0xCCCCCC)));
        assert!(close(parse_color(" #3b82f6 ").unwrap(), rgb_hex(0x3B82F6)));
    }

    #[test]
    fn test_parse_functional_colors() {
        assert_eq!(parse_color("rgb(255, 0, 0)").unwrap(), rgb_hex(0xFF0000));

        let translucent = parse_color("rgba(0, 0, 0, 0.54)").unwrap();
        assert_eq!(translucent.r, 0.);
        assert_eq!(translucent.a, 0.54);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_color("blue"),
            Err(ThemeError::InvalidColor(value)) if value == "blue"
        ));
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("rgba(1, 2, 3)").is_err());
        assert!(parse_color("rgb(1, 2, x)").is_err());
    }

    #[test]
    fn test_ramp_requires_every_step() {
        let partial = r##"{ "50": "#000000", "100": "#111111" }"##;
        let err = serde_json::from_str::<ColorRamp>(partial).unwrap_err();
        assert!(err.to_string().contains("missing shade step 200"));
    }

    #[test]
    fn test_ramp_rejects_unknown_step() {
        let json = r##"{ "55": "#000000" }"##;
        let err = serde_json::from_str::<ColorRamp>(json).unwrap_err();
        assert!(err.to_string().contains("unknown shade step 55"));
    }

    #[test]
    fn test_ramp_from_json() {
        let json = r##"{
            "50": "#000000", "100": "#111111", "200": "#222222", "300": "#333333",
            "400": "#444444", "500": "#555555", "600": "#666666", "700": "#777777",
            "800": "#888888", "900": "#999999"
        }"##;
        let ramp = serde_json::from_str::<ColorRamp>(json).unwrap();
        assert!(close(ramp[Shade::S500], rgb_hex(0x555555)));
    }
}
