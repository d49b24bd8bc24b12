// Chunk: docs/chunks/color_mapper - Deterministic text-to-hue mapping

//! The hue reduction and the style value it produces.

use std::fmt;

use crate::digest::DigestKind;

/// Spacing between producible hues, in degrees.
pub const HUE_STEP: u16 = 4;

/// Digest sums are folded into this many buckets before scaling.
const SUM_MODULUS: i64 = 900;

/// A hue shift in whole degrees, always in `[0, 360)` and a multiple of
/// [`HUE_STEP`].
///
/// The only way to obtain one is through the reduction, so the invariant
/// holds for every value in circulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct HueRotation {
    degrees: u16,
}

impl HueRotation {
    /// No shift at all.
    pub const NONE: HueRotation = HueRotation { degrees: 0 };

    /// The rotation in degrees.
    pub fn degrees(self) -> u16 {
        self.degrees
    }

    /// The rotation in radians, for renderers that rotate colors themselves.
    pub fn radians(self) -> f64 {
        f64::from(self.degrees).to_radians()
    }

    /// The CSS filter function, e.g. `hue-rotate(304deg)`.
    pub fn filter(self) -> String {
        self.to_string()
    }

    /// The full CSS declaration, e.g. `filter: hue-rotate(304deg)`.
    pub fn declaration(self) -> String {
        format!("filter: {}", self)
    }
}

impl fmt::Display for HueRotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hue-rotate({}deg)", self.degrees)
    }
}

/// Reduces a digest byte sum to a hue.
///
/// `|sum| % 900` lands in `[0, 900)`, truncating division by 10 gives
/// `[0, 90)`, and scaling by 4 gives `[0, 360)` in steps of 4.
pub fn hue_from_digest_sum(sum: i64) -> HueRotation {
    let bucket = sum.unsigned_abs() % SUM_MODULUS as u64;
    // bucket / 10 < 90, so the product is below 360
    let degrees = (bucket / 10) as u16 * HUE_STEP;
    HueRotation { degrees }
}

/// Maps highlighted text to its tint using the default digest.
///
/// Total over all strings, including the empty string.
pub fn color_style(text: &str) -> HueRotation {
    color_style_with(DigestKind::default(), text)
}

/// Maps highlighted text to its tint using the given digest.
pub fn color_style_with(digest: DigestKind, text: &str) -> HueRotation {
    hue_from_digest_sum(digest.byte_sum(text))
}
