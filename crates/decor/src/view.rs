// Chunk: docs/chunks/span_decorator - Live document view driving the highlight field

//! A live document view: text, parse tree and tinted decorations kept in step.
//!
//! Every notification goes through [`DocumentView::dispatch`] or
//! [`DocumentView::dispatch_all`]: the changes are applied, the Markdown tree
//! is reparsed incrementally, and the highlight field runs exactly once.
//! There is no debouncing; if the host coalesces notifications, it hands us
//! several changes in one transaction.

use hue_mark_syntax::{MarkdownTree, SyntaxTree, TextChange};

use crate::decoration::DecorationSet;
use crate::field::{EditorState, HighlightField, StateField, TintConfig, Transaction};

/// The document, with or without a parse tree.
enum Document {
    Parsed(MarkdownTree),
    /// Parsing is unavailable; the text is still tracked so the view stays
    /// usable, it just never gets tinted.
    Plain(String),
}

impl Document {
    fn open(text: &str) -> Self {
        match MarkdownTree::new(text) {
            Some(tree) => Document::Parsed(tree),
            None => {
                tracing::warn!("markdown grammar unavailable, document will not be tinted");
                Document::Plain(text.to_string())
            }
        }
    }

    fn text(&self) -> &str {
        match self {
            Document::Parsed(tree) => tree.source(),
            Document::Plain(text) => text,
        }
    }

    fn tree(&self) -> Option<&dyn SyntaxTree> {
        match self {
            Document::Parsed(tree) => Some(tree),
            Document::Plain(_) => None,
        }
    }

    fn apply(&mut self, change: &TextChange) {
        match self {
            Document::Parsed(tree) => tree.edit(change),
            Document::Plain(text) => change.apply(text),
        }
    }

    fn reset(&mut self, text: &str) {
        match self {
            Document::Parsed(tree) => tree.reset(text),
            Document::Plain(plain) => *plain = text.to_string(),
        }
    }
}

/// One open document and its highlight decorations.
///
/// Dropping the view drops its decorations; nothing else needs tearing down.
pub struct DocumentView {
    doc: Document,
    field: HighlightField,
    decorations: DecorationSet,
    /// Number of transactions dispatched so far
    transactions: u64,
}

impl DocumentView {
    /// Opens a view on `text`.
    ///
    /// The field starts empty, then the opening itself is dispatched as a
    /// change-free transaction so highlights already in the document are
    /// tinted immediately.
    pub fn new(text: &str, config: TintConfig) -> Self {
        let doc = Document::open(text);
        let field = HighlightField::new(config);
        let decorations = field.create(&EditorState::new(doc.text(), doc.tree()));

        let mut view = Self {
            doc,
            field,
            decorations,
            transactions: 0,
        };
        view.dispatch_all(&[]);
        view
    }

    /// Current document text.
    pub fn text(&self) -> &str {
        self.doc.text()
    }

    /// Decorations for the current text.
    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Number of transactions the field has processed, including the opening.
    pub fn transactions(&self) -> u64 {
        self.transactions
    }

    pub fn config(&self) -> &TintConfig {
        self.field.config()
    }

    /// Applies one change and updates the decorations.
    pub fn dispatch(&mut self, change: TextChange) {
        self.dispatch_all(std::slice::from_ref(&change));
    }

    /// Applies `changes` in order as a single transaction.
    ///
    /// Each change's offsets refer to the document as left by the changes
    /// before it. The decorations are recomputed once, after all of them.
    pub fn dispatch_all(&mut self, changes: &[TextChange]) {
        for change in changes {
            self.doc.apply(change);
        }
        self.run_transaction(changes);
    }

    /// Replaces the whole document, as when a file is reloaded from disk.
    pub fn reset(&mut self, text: &str) {
        let change = TextChange::replace(0..self.doc.text().len(), text);
        self.doc.reset(text);
        self.run_transaction(std::slice::from_ref(&change));
    }

    fn run_transaction(&mut self, changes: &[TextChange]) {
        let state = EditorState::new(self.doc.text(), self.doc.tree());
        let prior = std::mem::take(&mut self.decorations);
        self.decorations = self.field.update(prior, &Transaction::new(changes, state));
        self.transactions += 1;
        tracing::trace!(
            transaction = self.transactions,
            changes = changes.len(),
            decorations = self.decorations.len(),
            "dispatched transaction"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_mark_color::color_style;

    fn texts(view: &DocumentView) -> Vec<&str> {
        view.decorations().iter().map(|d| d.span().text()).collect()
    }

    #[test]
    fn test_open_tints_existing_highlights() {
        let view = DocumentView::new("A ==hello== world\n", TintConfig::default());
        assert_eq!(texts(&view), vec!["hello"]);
        assert_eq!(view.transactions(), 1);
    }

    #[test]
    fn test_open_plain_document() {
        let view = DocumentView::new("nothing to see\n", TintConfig::default());
        assert!(view.decorations().is_empty());
    }

    #[test]
    fn test_typing_a_highlight() {
        let mut view = DocumentView::new("word\n", TintConfig::default());
        view.dispatch(TextChange::insert(0, "=="));
        assert!(view.decorations().is_empty());

        view.dispatch(TextChange::insert(6, "=="));
        assert_eq!(view.text(), "==word==\n");
        assert_eq!(texts(&view), vec!["word"]);
        assert_eq!(view.decorations().get(0).unwrap().style(), color_style("word"));
    }

    #[test]
    fn test_each_dispatch_recomputes_once() {
        let mut view = DocumentView::new("x\n", TintConfig::default());
        view.dispatch(TextChange::insert(0, "a"));
        view.dispatch(TextChange::insert(0, "b"));
        assert_eq!(view.transactions(), 3);

        view.dispatch_all(&[TextChange::insert(0, "c"), TextChange::insert(0, "d")]);
        assert_eq!(view.transactions(), 4);
        assert_eq!(view.text(), "dcbax\n");
    }

    #[test]
    fn test_editing_highlight_text_changes_hue() {
        let mut view = DocumentView::new("==abc==\n", TintConfig::default());
        let before = view.decorations().get(0).unwrap().style();

        view.dispatch(TextChange::replace(4..5, "d"));
        let after = view.decorations().get(0).unwrap().style();

        assert_eq!(before, color_style("abc"));
        assert_eq!(after, color_style("abd"));
    }

    #[test]
    fn test_edit_elsewhere_keeps_hue_and_shifts_range() {
        let mut view = DocumentView::new("==abc==\n", TintConfig::default());
        let before = view.decorations().get(0).unwrap().clone();

        view.dispatch(TextChange::insert(0, "prefix "));
        let after = view.decorations().get(0).unwrap();

        assert_eq!(after.style(), before.style());
        assert_eq!(after.span().range(), 9..12);
    }

    #[test]
    fn test_reset_replaces_document() {
        let mut view = DocumentView::new("==a==\n", TintConfig::default());
        view.reset("==b== ==c==\n");
        assert_eq!(texts(&view), vec!["b", "c"]);
    }
}
