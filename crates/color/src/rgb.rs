// Chunk: docs/chunks/native_tint - Hue rotation for natively painted highlights

//! 24-bit colors and the `hue-rotate()` filter applied to them.
//!
//! Renderers that paint through CSS attach [`HueRotation::declaration`] and
//! let the browser do the work. Terminal and GPU renderers have no filter
//! stage, so they rotate their highlight background here instead. The matrix
//! is the one the Filter Effects spec defines for `feColorMatrix` with
//! `type="hueRotate"`, so both paths produce the same tint.

use std::fmt;

use crate::hue::HueRotation;

/// A 24-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns this color with the hue filter applied.
    ///
    /// Rows of the matrix sum to one, so grays are left unchanged.
    pub fn hue_rotate(self, rotation: HueRotation) -> Rgb {
        if rotation == HueRotation::NONE {
            return self;
        }

        let (sin, cos) = rotation.radians().sin_cos();
        let m = [
            [
                0.213 + cos * 0.787 - sin * 0.213,
                0.715 - cos * 0.715 - sin * 0.715,
                0.072 - cos * 0.072 + sin * 0.928,
            ],
            [
                0.213 - cos * 0.213 + sin * 0.143,
                0.715 + cos * 0.285 + sin * 0.140,
                0.072 - cos * 0.072 - sin * 0.283,
            ],
            [
                0.213 - cos * 0.213 - sin * 0.787,
                0.715 - cos * 0.715 + sin * 0.715,
                0.072 + cos * 0.928 + sin * 0.072,
            ],
        ];

        let src = [f64::from(self.r), f64::from(self.g), f64::from(self.b)];
        let channel = |row: [f64; 3]| -> u8 {
            let v = row[0] * src[0] + row[1] * src[1] + row[2] * src[2];
            v.round().clamp(0.0, 255.0) as u8
        };

        Rgb {
            r: channel(m[0]),
            g: channel(m[1]),
            b: channel(m[2]),
        }
    }

    /// Parses `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Rgb {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
        })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hue::hue_from_digest_sum;

    /// Obsidian's default highlight background.
    const HIGHLIGHT_YELLOW: Rgb = Rgb::new(0xff, 0xf3, 0xa3);

    fn rotation(degrees: u16) -> HueRotation {
        // sum = degrees / 4 * 10 lands exactly on the requested step
        hue_from_digest_sum(i64::from(degrees / 4 * 10))
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        assert_eq!(HIGHLIGHT_YELLOW.hue_rotate(HueRotation::NONE), HIGHLIGHT_YELLOW);
    }

    #[test]
    fn test_grays_are_fixed_points() {
        let gray = Rgb::new(128, 128, 128);
        for deg in [4, 90, 180, 356] {
            assert_eq!(gray.hue_rotate(rotation(deg)), gray, "rotation {}", deg);
        }
    }

    #[test]
    fn test_rotation_changes_a_saturated_color() {
        let rotated = HIGHLIGHT_YELLOW.hue_rotate(rotation(180));
        assert_ne!(rotated, HIGHLIGHT_YELLOW);
        // Yellow rotated half way round heads towards blue
        assert!(rotated.b > rotated.r);
    }

    #[test]
    fn test_hex_roundtrip() {
        assert_eq!(Rgb::from_hex("#fff3a3"), Some(HIGHLIGHT_YELLOW));
        assert_eq!(Rgb::from_hex("fff3a3"), Some(HIGHLIGHT_YELLOW));
        assert_eq!(HIGHLIGHT_YELLOW.to_string(), "#fff3a3");
    }

    #[test]
    fn test_hex_rejects_malformed() {
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gggggg"), None);
        assert_eq!(Rgb::from_hex("#ff\u{e9}ff"), None);
    }
}
