// Chunk: docs/chunks/markdown_highlight_tree - Markdown highlight classification

//! hue-mark-syntax: Finds the highlight spans of a Markdown document.
//!
//! This crate plays the part of the host editor's parser. It walks a
//! classified tree in document order and hands each node to whoever asked,
//! without knowing anything about colors or decorations.
//!
//! # Overview
//!
//! - [`SyntaxTree`]: anything that can be walked in preorder. Implemented by
//!   [`MarkdownTree`] and by plain slices of pre-classified [`SyntaxNode`]s.
//!
//! - [`Classifier`]: decides whether a node is tinted. [`HighlightClassifier`]
//!   accepts `==highlight==` content and optionally its delimiters.
//!
//! - [`MarkdownTree`]: tree-sitter Markdown block grammar plus an inline `==`
//!   scanner, updated incrementally with [`TextChange`]s.
//!
//! # Example
//!
//! ```
//! use hue_mark_syntax::{Classifier, HighlightClassifier, MarkdownTree, SyntaxTree};
//!
//! let tree = MarkdownTree::new("Some ==hello== text\n").unwrap();
//! let classifier = HighlightClassifier::default();
//!
//! let mut tinted = Vec::new();
//! tree.iterate(&mut |node| {
//!     if classifier.classify(node) {
//!         tinted.push(tree.source()[node.range.clone()].to_string());
//!     }
//! });
//! assert_eq!(tinted, vec!["hello"]);
//! ```

mod change;
mod inline;
mod markdown;
mod node;

pub use change::{point_at, TextChange};
pub use inline::scan_highlights;
pub use markdown::MarkdownTree;
pub use node::{Classifier, HighlightClassifier, NodeKind, SyntaxNode, SyntaxTree};
