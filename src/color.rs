use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::GradientError;

/// An opaque RGB color written as `#RRGGBB`.
///
/// This is the only color representation the store accepts, so every point
/// always carries a well-formed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const BLACK: Self = Self::from_rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::from_rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Self = Self::from_rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::from_rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::from_rgb(0x00, 0x00, 0xFF);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Same hue with the given alpha, for the renderer's gradient stops
    pub fn to_skia(&self, alpha: u8) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, alpha)
    }

    pub fn to_color32(&self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for HexColor {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GradientError::InvalidColor(s.to_owned());
        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::from_rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #RGB expands each nibble: #F80 == #FF8800
            3 => {
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::from_rgb(r * 0x11, g * 0x11, b * 0x11))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_forms() {
        assert_eq!("#FF0000".parse::<HexColor>().unwrap(), HexColor::RED);
        assert_eq!("#00ff00".parse::<HexColor>().unwrap(), HexColor::GREEN);
        assert_eq!(
            "#F80".parse::<HexColor>().unwrap(),
            HexColor::from_rgb(0xFF, 0x88, 0x00)
        );
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "FF0000", "#FF00", "#GG0000", "#FF00000", "red", "#+F0000"] {
            assert!(
                matches!(bad.parse::<HexColor>(), Err(GradientError::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn formats_upper_case() {
        assert_eq!(HexColor::from_rgb(0x0a, 0xbc, 0xde).to_string(), "#0ABCDE");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let json = serde_json::to_string(&HexColor::BLUE).unwrap();
        assert_eq!(json, "\"#0000FF\"");
        let back: HexColor = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(back, HexColor::BLUE);
        assert!(serde_json::from_str::<HexColor>("\"blue\"").is_err());
    }
}
