// Chunk: docs/chunks/color_mapper - Deterministic text-to-hue mapping

//! hue-mark-color: Content-derived color tints for highlighted text.
//!
//! This crate maps an arbitrary string to a [`HueRotation`]: a hue shift in
//! whole degrees that is a pure function of the string's bytes. The same
//! phrase always gets the same tint, wherever and whenever it appears.
//!
//! It has no knowledge of documents, parse trees or decorations, so both the
//! live editor path and the one-shot static render pass can call it directly.
//!
//! # Example
//!
//! ```
//! use hue_mark_color::{color_style, HueRotation};
//!
//! let style = color_style("hello");
//! assert_eq!(style, color_style("hello"));
//! assert_eq!(style.degrees() % 4, 0);
//! assert!(style.degrees() < 360);
//! assert_eq!(style.declaration(), format!("filter: hue-rotate({}deg)", style.degrees()));
//! ```
//!
//! # Reduction
//!
//! The digest bytes are summed, then reduced as `|sum| % 900 / 10 * 4`. The
//! set of producible hues is exactly `{0, 4, 8, ..., 356}`. The digest itself
//! is selectable through [`DigestKind`]; the reduction is fixed.

mod digest;
mod hue;
mod rgb;

pub use digest::DigestKind;
pub use hue::{color_style, color_style_with, hue_from_digest_sum, HueRotation, HUE_STEP};
pub use rgb::Rgb;
