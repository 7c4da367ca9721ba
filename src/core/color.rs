use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HexParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build an opaque color from unclamped channel input
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        let clamp = |c: i32| c.clamp(0, 255) as u8;
        Self::rgb(clamp(r), clamp(g), clamp(b))
    }

    /// Parse `#rrggbb` or `rrggbb`, any case
    pub fn from_hex(hex: &str) -> Result<Self, HexParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.chars().count() != 6 {
            return Err(HexParseError::InvalidLength(digits.chars().count()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(HexParseError::InvalidDigit(bad));
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::rgb(r, g, b)),
            // All six digits were checked above
            _ => Err(HexParseError::InvalidLength(digits.len())),
        }
    }

    /// Lowercase `#rrggbb`, alpha dropped
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to macroquad Color (f32 0.0-1.0)
    pub fn to_mq_color(self) -> macroquad::color::Color {
        macroquad::color::Color::from_rgba(self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim())
    }
}

// Colors travel through config and storage as hex strings
impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Rgba::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// Hue in degrees, saturation and value in percent
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgba {
        hsv_to_rgb(self.h, self.s, self.v)
    }
}

/// Un-offset (r, g, b) for a hue at the given chroma, in 0.0-1.0
pub fn hue_sector(h: f32, c: f32) -> (f32, f32, f32) {
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    }
}

/// HSV -> RGB. h in [0, 360), s and v in [0, 100].
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgba {
    let s = s.clamp(0.0, 100.0) / 100.0;
    let v = v.clamp(0.0, 100.0) / 100.0;
    let h = h.rem_euclid(360.0);

    let c = v * s;
    let m = v - c;
    let (r, g, b) = hue_sector(h, c);

    Rgba::rgb(unit_to_u8(r + m), unit_to_u8(g + m), unit_to_u8(b + m))
}

/// RGB -> HSV, the inverse of [`hsv_to_rgb`] up to rounding.
/// Grays report hue 0; black reports saturation 0.
pub fn rgb_to_hsv(color: Rgba) -> Hsv {
    let r = color.r as f32 / 255.0;
    let g = color.g as f32 / 255.0;
    let b = color.b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv::new(h.rem_euclid(360.0), s * 100.0, max * 100.0)
}

fn unit_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Preset swatches offered next to the canvas
pub const PRESET_COLORS: [Rgba; 16] = [
    Rgba::rgb(0, 0, 0),       // black
    Rgba::rgb(255, 255, 255), // white
    Rgba::rgb(128, 128, 128), // gray
    Rgba::rgb(192, 192, 192), // silver
    Rgba::rgb(255, 0, 0),     // red
    Rgba::rgb(139, 0, 0),     // dark red
    Rgba::rgb(255, 165, 0),   // orange
    Rgba::rgb(255, 255, 0),   // yellow
    Rgba::rgb(0, 255, 0),     // lime
    Rgba::rgb(0, 128, 0),     // green
    Rgba::rgb(0, 255, 255),   // cyan
    Rgba::rgb(0, 0, 255),     // blue
    Rgba::rgb(0, 0, 128),     // navy
    Rgba::rgb(128, 0, 128),   // purple
    Rgba::rgb(255, 105, 180), // hot pink
    Rgba::rgb(165, 42, 42),   // brown
];

#[cfg(test)]
mod tests {
    use super::*;

    fn within_one(a: u8, b: u8) -> bool {
        (a as i16 - b as i16).abs() <= 1
    }

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 100.0, 100.0), Rgba::rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 100.0, 100.0), Rgba::rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 100.0, 100.0), Rgba::rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(0.0, 0.0, 100.0), Rgba::rgb(255, 255, 255));
        assert_eq!(hsv_to_rgb(200.0, 50.0, 0.0), Rgba::rgb(0, 0, 0));
    }

    #[test]
    fn secondary_hues() {
        assert_eq!(hsv_to_rgb(60.0, 100.0, 100.0), Rgba::rgb(255, 255, 0));
        assert_eq!(hsv_to_rgb(180.0, 100.0, 100.0), Rgba::rgb(0, 255, 255));
        assert_eq!(hsv_to_rgb(300.0, 100.0, 100.0), Rgba::rgb(255, 0, 255));
        assert_eq!(hsv_to_rgb(30.0, 100.0, 100.0), Rgba::rgb(255, 128, 0));
    }

    #[test]
    fn hsv_hex_round_trip_within_rounding() {
        for h in (0..360).step_by(7) {
            for s in (0..=100).step_by(10) {
                for v in (0..=100).step_by(10) {
                    let rgb = hsv_to_rgb(h as f32, s as f32, v as f32);
                    let back = Rgba::from_hex(&rgb.to_hex()).unwrap();
                    assert!(within_one(rgb.r, back.r));
                    assert!(within_one(rgb.g, back.g));
                    assert!(within_one(rgb.b, back.b));
                }
            }
        }
    }

    #[test]
    fn rgb_to_hsv_inverts_conversion() {
        for color in PRESET_COLORS.iter().copied().chain([Rgba::rgb(18, 52, 86)]) {
            let again = rgb_to_hsv(color).to_rgb();
            assert!(within_one(color.r, again.r), "{color} -> {again}");
            assert!(within_one(color.g, again.g), "{color} -> {again}");
            assert!(within_one(color.b, again.b), "{color} -> {again}");
        }
    }

    #[test]
    fn hex_is_normalized_to_lowercase() {
        for text in ["#A1b2C3", "#ffffff", "#000000", "#7F7f7F"] {
            let color = Rgba::from_hex(text).unwrap();
            assert_eq!(color.to_hex(), text.to_lowercase());
        }
    }

    #[test]
    fn hex_prefix_is_optional() {
        assert_eq!(Rgba::from_hex("ff8800"), Ok(Rgba::rgb(255, 136, 0)));
        assert_eq!(" #ff8800 ".parse::<Rgba>(), Ok(Rgba::rgb(255, 136, 0)));
    }

    #[test]
    fn malformed_hex_is_rejected() {
        assert_eq!(Rgba::from_hex("#fff"), Err(HexParseError::InvalidLength(3)));
        assert_eq!(Rgba::from_hex("#1234567"), Err(HexParseError::InvalidLength(7)));
        assert_eq!(Rgba::from_hex("#12345g"), Err(HexParseError::InvalidDigit('g')));
        assert_eq!(Rgba::from_hex("##12345"), Err(HexParseError::InvalidDigit('#')));
        assert_eq!(Rgba::from_hex("#ééé"), Err(HexParseError::InvalidLength(3)));
    }

    #[test]
    fn channels_are_clamped() {
        assert_eq!(Rgba::from_channels(-20, 300, 128), Rgba::rgb(0, 255, 128));
    }
}
