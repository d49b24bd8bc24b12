// Chunk: docs/chunks/markdown_highlight_tree - Node kinds and classification

//! Syntax nodes as seen by the decorator, and the classifier seam.
//!
//! The decorator does not care which parser produced a tree. It walks any
//! [`SyntaxTree`] in document order and asks a [`Classifier`] whether each
//! node should be tinted.

use std::ops::Range;

/// What a node is, as far as highlight tinting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The root of the document.
    Document,
    /// A structural block (section, paragraph, list item, quote, table, ...).
    Block,
    /// A run of inline text that may contain highlights.
    Inline,
    /// Fenced or indented code. Never scanned for highlights.
    CodeBlock,
    /// The text between a pair of `==` delimiters.
    Highlight,
    /// One `==` delimiter.
    HighlightMark,
}

impl NodeKind {
    /// Maps a node kind of the tree-sitter Markdown block grammar.
    pub fn from_block_kind(kind: &str) -> NodeKind {
        match kind {
            "document" => NodeKind::Document,
            "inline" | "pipe_table_cell" => NodeKind::Inline,
            "fenced_code_block" | "indented_code_block" => NodeKind::CodeBlock,
            _ => NodeKind::Block,
        }
    }

    /// True for the highlight content and its delimiters.
    pub fn is_highlight(self) -> bool {
        matches!(self, NodeKind::Highlight | NodeKind::HighlightMark)
    }
}

/// A node visited during a tree walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Half-open byte range in the document.
    pub range: Range<usize>,
}

impl SyntaxNode {
    pub fn new(kind: NodeKind, range: Range<usize>) -> Self {
        Self { kind, range }
    }

    pub fn start(&self) -> usize {
        self.range.start
    }

    pub fn end(&self) -> usize {
        self.range.end
    }
}

/// A classified view of the current document.
///
/// `iterate` calls `enter` once per node in preorder, so node start offsets
/// are non-decreasing across the walk.
pub trait SyntaxTree {
    fn iterate(&self, enter: &mut dyn FnMut(&SyntaxNode));
}

/// Pre-classified nodes supplied directly by a host, already in document order.
impl SyntaxTree for [SyntaxNode] {
    fn iterate(&self, enter: &mut dyn FnMut(&SyntaxNode)) {
        for node in self {
            enter(node);
        }
    }
}

impl SyntaxTree for Vec<SyntaxNode> {
    fn iterate(&self, enter: &mut dyn FnMut(&SyntaxNode)) {
        self.as_slice().iterate(enter);
    }
}

/// Decides whether a node gets tinted.
pub trait Classifier {
    fn classify(&self, node: &SyntaxNode) -> bool;
}

impl<F> Classifier for F
where
    F: Fn(&SyntaxNode) -> bool,
{
    fn classify(&self, node: &SyntaxNode) -> bool {
        self(node)
    }
}

/// Accepts highlight content, and optionally the `==` delimiters as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightClassifier {
    pub include_marks: bool,
}

impl HighlightClassifier {
    pub fn new(include_marks: bool) -> Self {
        Self { include_marks }
    }
}

impl Classifier for HighlightClassifier {
    fn classify(&self, node: &SyntaxNode) -> bool {
        match node.kind {
            NodeKind::Highlight => true,
            NodeKind::HighlightMark => self.include_marks,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_mapping() {
        assert_eq!(NodeKind::from_block_kind("document"), NodeKind::Document);
        assert_eq!(NodeKind::from_block_kind("inline"), NodeKind::Inline);
        assert_eq!(NodeKind::from_block_kind("pipe_table_cell"), NodeKind::Inline);
        assert_eq!(NodeKind::from_block_kind("fenced_code_block"), NodeKind::CodeBlock);
        assert_eq!(NodeKind::from_block_kind("indented_code_block"), NodeKind::CodeBlock);
        assert_eq!(NodeKind::from_block_kind("paragraph"), NodeKind::Block);
        assert_eq!(NodeKind::from_block_kind("section"), NodeKind::Block);
    }

    #[test]
    fn test_highlight_classifier_without_marks() {
        let classifier = HighlightClassifier::default();
        assert!(classifier.classify(&SyntaxNode::new(NodeKind::Highlight, 2..5)));
        assert!(!classifier.classify(&SyntaxNode::new(NodeKind::HighlightMark, 0..2)));
        assert!(!classifier.classify(&SyntaxNode::new(NodeKind::Inline, 0..7)));
    }

    #[test]
    fn test_highlight_classifier_with_marks() {
        let classifier = HighlightClassifier::new(true);
        assert!(classifier.classify(&SyntaxNode::new(NodeKind::HighlightMark, 0..2)));
        assert!(!classifier.classify(&SyntaxNode::new(NodeKind::CodeBlock, 0..7)));
    }

    #[test]
    fn test_closure_classifier() {
        let only_long = |node: &SyntaxNode| node.range.len() > 3;
        assert!(only_long.classify(&SyntaxNode::new(NodeKind::Block, 0..10)));
        assert!(!only_long.classify(&SyntaxNode::new(NodeKind::Block, 0..2)));
    }

    #[test]
    fn test_slice_tree_visits_in_order() {
        let nodes = vec![
            SyntaxNode::new(NodeKind::Highlight, 0..3),
            SyntaxNode::new(NodeKind::Highlight, 5..9),
        ];
        let mut starts = Vec::new();
        nodes.iterate(&mut |node| starts.push(node.start()));
        assert_eq!(starts, vec![0, 5]);
    }
}
