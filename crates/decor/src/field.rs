// Chunk: docs/chunks/span_decorator - Incremental highlight decorations

//! View-scoped state with an explicit create/update lifecycle.
//!
//! The host owns one field value per open document. It calls
//! [`StateField::create`] when the view opens and [`StateField::update`] for
//! every transaction; the field never holds on to the document itself.
//!
//! [`HighlightField`] ignores its prior value entirely: every update walks the
//! current classification and rebuilds the decoration set from scratch. That
//! keeps the output a pure function of (document, classification) at the cost
//! of one full walk per change, which is cheap next to the reparse that
//! produced the classification.

use std::sync::Arc;

use hue_mark_color::{color_style_with, DigestKind};
use hue_mark_syntax::{Classifier, HighlightClassifier, SyntaxTree, TextChange};

use crate::decoration::{Decoration, DecorationSet, DecorationSetBuilder, DEFAULT_MARK_CLASS};
use crate::span::TextSpan;

/// How decorations are tinted and labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TintConfig {
    /// Digest feeding the hue reduction.
    pub digest: DigestKind,
    /// CSS class put on every mark.
    pub mark_class: String,
    /// Also tint the `==` delimiters, each with the hue of the text `==`.
    pub tint_delimiters: bool,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            digest: DigestKind::default(),
            mark_class: DEFAULT_MARK_CLASS.to_string(),
            tint_delimiters: false,
        }
    }
}

/// An immutable snapshot of a document and its classification.
#[derive(Clone, Copy)]
pub struct EditorState<'a> {
    doc: &'a str,
    tree: Option<&'a dyn SyntaxTree>,
}

impl<'a> EditorState<'a> {
    pub fn new(doc: &'a str, tree: Option<&'a dyn SyntaxTree>) -> Self {
        Self { doc, tree }
    }

    pub fn doc(&self) -> &'a str {
        self.doc
    }

    /// `None` when no parser is available for this document.
    pub fn tree(&self) -> Option<&'a dyn SyntaxTree> {
        self.tree
    }
}

/// The changes of one notification and the state they produced.
#[derive(Clone, Copy)]
pub struct Transaction<'a> {
    changes: &'a [TextChange],
    state: EditorState<'a>,
}

impl<'a> Transaction<'a> {
    pub fn new(changes: &'a [TextChange], state: EditorState<'a>) -> Self {
        Self { changes, state }
    }

    pub fn changes(&self) -> &'a [TextChange] {
        self.changes
    }

    pub fn doc_changed(&self) -> bool {
        !self.changes.is_empty()
    }

    /// State after the changes were applied.
    pub fn state(&self) -> &EditorState<'a> {
        &self.state
    }
}

/// A value derived from editor state and kept in sync by the host.
pub trait StateField {
    type Value;

    /// Initial value when a view opens.
    fn create(&self, state: &EditorState<'_>) -> Self::Value;

    /// Next value after `tr`.
    fn update(&self, value: Self::Value, tr: &Transaction<'_>) -> Self::Value;
}

/// Keeps the tinted highlight decorations of one view.
#[derive(Debug, Clone)]
pub struct HighlightField<C = HighlightClassifier> {
    classifier: C,
    config: TintConfig,
}

impl HighlightField<HighlightClassifier> {
    /// A field using the Markdown highlight classifier.
    pub fn new(config: TintConfig) -> Self {
        let classifier = HighlightClassifier::new(config.tint_delimiters);
        Self { classifier, config }
    }
}

impl Default for HighlightField<HighlightClassifier> {
    fn default() -> Self {
        Self::new(TintConfig::default())
    }
}

impl<C: Classifier> HighlightField<C> {
    /// A field using a host-supplied classifier.
    pub fn with_classifier(classifier: C, config: TintConfig) -> Self {
        Self { classifier, config }
    }

    pub fn config(&self) -> &TintConfig {
        &self.config
    }
}

impl<C: Classifier> StateField for HighlightField<C> {
    type Value = DecorationSet;

    fn create(&self, _state: &EditorState<'_>) -> DecorationSet {
        DecorationSet::none()
    }

    fn update(&self, _value: DecorationSet, tr: &Transaction<'_>) -> DecorationSet {
        let state = tr.state();
        match state.tree() {
            Some(tree) => recompute(state.doc(), tree, &self.classifier, &self.config),
            None => {
                tracing::warn!("no syntax tree for document, leaving highlights untinted");
                DecorationSet::none()
            }
        }
    }
}

/// Rebuilds the complete decoration set for `doc`.
///
/// Walks `tree` in document order and tints every node `classifier` accepts
/// with the hue of its literal text. The result carries nothing over from any
/// earlier set.
///
/// # Panics
///
/// If the tree yields a classified range that is out of bounds, not on a
/// char boundary, or out of document order.
pub fn recompute<T, C>(doc: &str, tree: &T, classifier: &C, config: &TintConfig) -> DecorationSet
where
    T: SyntaxTree + ?Sized,
    C: Classifier + ?Sized,
{
    let class: Arc<str> = Arc::from(config.mark_class.as_str());
    let mut builder = DecorationSetBuilder::new();

    tree.iterate(&mut |node| {
        if !classifier.classify(node) {
            return;
        }
        let span = TextSpan::from_doc(doc, node.range.clone());
        let style = color_style_with(config.digest, span.text());
        tracing::trace!(
            start = span.start(),
            end = span.end(),
            hue = style.degrees(),
            "tinted highlight"
        );
        builder.add(Decoration::mark(span, style, Arc::clone(&class)));
    });

    let set = builder.finish();
    tracing::debug!(decorations = set.len(), "recomputed highlight decorations");
    set
}
