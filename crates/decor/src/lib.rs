// Chunk: docs/chunks/span_decorator - Incremental highlight decorations

//! hue-mark-decor: Tinted highlight decorations for a live document.
//!
//! This crate keeps an ordered set of `(range, hue)` decorations in sync with
//! a mutable document. It does not diff or patch: each notification rebuilds
//! the whole set from the current classification, so the output always
//! reflects exactly the document it was computed from.
//!
//! # Overview
//!
//! - [`recompute`]: the core walk. Classified nodes in, [`DecorationSet`] out.
//!
//! - [`HighlightField`]: a [`StateField`] whose `create` yields the empty set
//!   and whose `update` calls [`recompute`] on the post-change state.
//!
//! - [`DecorationSetBuilder`]: the only way to build a set; it panics on
//!   out-of-order or overlapping ranges.
//!
//! - [`DocumentView`]: host glue owning the text, its Markdown tree and the
//!   current decorations.
//!
//! # Example
//!
//! ```
//! use hue_mark_decor::{DocumentView, TintConfig};
//! use hue_mark_syntax::TextChange;
//!
//! let mut view = DocumentView::new("Some ==hello== text\n", TintConfig::default());
//! assert_eq!(view.decorations().len(), 1);
//!
//! view.dispatch(TextChange::insert(12, " world"));
//! let deco = view.decorations().get(0).unwrap();
//! assert_eq!(deco.span().text(), "hello world");
//! println!("{}", deco.style_attribute()); // filter: hue-rotate(...deg)
//! ```

mod decoration;
mod field;
mod span;
mod view;

pub use decoration::{Decoration, DecorationSet, DecorationSetBuilder, DEFAULT_MARK_CLASS};
pub use field::{recompute, EditorState, HighlightField, StateField, TintConfig, Transaction};
pub use span::TextSpan;
pub use view::DocumentView;
