// Chunk: docs/chunks/hue_tinted_highlights - Content-hash tints for ==highlighted== text

//! hue-mark: Tints every `==highlighted==` phrase with a hue derived from its text.
//!
//! Identical phrases share a tint, different phrases usually differ, and the
//! tint is stable across sessions because it depends on nothing but the bytes
//! of the phrase.
//!
//! # Overview
//!
//! Two independent paths produce the same tint:
//!
//! - Live editing: [`HueMarkPlugin::open_view`] returns a
//!   [`DocumentView`] whose decoration set is rebuilt on every change.
//!
//! - Reading mode: [`HueMarkPlugin::post_process`] tints the `<mark>`
//!   elements of each rendered block in one pass.
//!
//! Settings are a JSON blob owned by the host; see [`HighlightSettings`].
//!
//! # Example
//!
//! ```
//! use hue_mark::HueMarkPlugin;
//! use hue_mark::syntax::TextChange;
//!
//! let plugin = HueMarkPlugin::from_data("{}");
//!
//! let mut view = plugin.open_view("A ==key idea== here\n");
//! view.dispatch(TextChange::insert(0, "# "));
//! let live = view.decorations().get(0).unwrap().style_attribute();
//!
//! let html = plugin.post_process("<p>A <mark>key idea</mark> here</p>");
//! assert!(html.contains(&live));
//! ```

mod plugin;
mod post_process;
mod settings;

pub use hue_mark_color as color;
pub use hue_mark_decor as decor;
pub use hue_mark_syntax as syntax;

pub use hue_mark_color::{color_style, color_style_with, DigestKind, HueRotation};
pub use hue_mark_decor::{Decoration, DecorationSet, DocumentView, TintConfig};
pub use plugin::HueMarkPlugin;
pub use post_process::{post_process_html, tint_element, tint_elements, HighlightElement, HtmlMark};
pub use settings::{HighlightSettings, SettingsError};
