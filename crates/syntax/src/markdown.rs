// Chunk: docs/chunks/markdown_highlight_tree - Markdown tree with incremental reparse

//! Markdown parse tree that classifies highlight spans.
//!
//! The tree-sitter block grammar splits the document into blocks and marks
//! where inline text lives. Each `inline` node is then scanned for `==` spans,
//! and code blocks are skipped entirely. Edits are applied incrementally: the
//! old tree is edited and handed back to the parser so unchanged blocks are
//! reused.

use tree_sitter::{Language, Parser, Tree};

use crate::change::TextChange;
use crate::inline::scan_highlights;
use crate::node::{NodeKind, SyntaxNode, SyntaxTree};

/// A parsed Markdown document.
///
/// Owns the parser, the current tree and the source the tree was parsed
/// from, so the tree and the text can never drift apart.
pub struct MarkdownTree {
    /// The tree-sitter parser
    parser: Parser,
    /// The current parse tree
    tree: Tree,
    /// Source snapshot the tree describes
    source: String,
    /// Incremented on each edit
    generation: u64,
}

impl MarkdownTree {
    /// Parses `source`.
    ///
    /// Returns `None` if the grammar cannot be loaded or the parse is
    /// abandoned.
    pub fn new(source: &str) -> Option<Self> {
        let language: Language = tree_sitter_md::LANGUAGE.into();
        let mut parser = Parser::new();
        parser.set_language(&language).ok()?;

        let tree = parser.parse(source, None)?;

        Some(Self {
            parser,
            tree,
            source: source.to_string(),
            generation: 0,
        })
    }

    /// The source the current tree describes.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of edits applied since the tree was created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Applies a change to the source and reparses incrementally.
    pub fn edit(&mut self, change: &TextChange) {
        let input_edit = change.input_edit(&self.source);
        change.apply(&mut self.source);
        self.tree.edit(&input_edit);

        match self.parser.parse(&self.source, Some(&self.tree)) {
            Some(new_tree) => self.tree = new_tree,
            None => tracing::warn!(
                generation = self.generation,
                "incremental reparse abandoned, keeping edited tree"
            ),
        }

        self.generation = self.generation.wrapping_add(1);
        tracing::trace!(
            generation = self.generation,
            from = change.from,
            to = change.to,
            inserted = change.insert.len(),
            "reparsed markdown tree"
        );
    }

    /// Replaces the whole source and parses it from scratch.
    pub fn reset(&mut self, source: &str) {
        if let Some(tree) = self.parser.parse(source, None) {
            self.tree = tree;
            self.source = source.to_string();
            self.generation = self.generation.wrapping_add(1);
        } else {
            tracing::warn!("full reparse abandoned, keeping previous tree");
        }
    }

    /// Collects every node the walk visits. Mostly useful for inspection.
    pub fn nodes(&self) -> Vec<SyntaxNode> {
        let mut nodes = Vec::new();
        self.iterate(&mut |node| nodes.push(node.clone()));
        nodes
    }
}

impl SyntaxTree for MarkdownTree {
    fn iterate(&self, enter: &mut dyn FnMut(&SyntaxNode)) {
        let mut cursor = self.tree.walk();

        loop {
            let ts_node = cursor.node();
            let kind = NodeKind::from_block_kind(ts_node.kind());
            let range = ts_node.byte_range();

            enter(&SyntaxNode::new(kind, range.clone()));

            // Inline and code nodes are leaves as far as the walk is concerned
            let descend = match kind {
                NodeKind::Inline => {
                    for node in scan_highlights(&self.source, range) {
                        enter(&node);
                    }
                    false
                }
                NodeKind::CodeBlock => false,
                _ => true,
            };

            if descend && cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return;
                }
            }
        }
    }
}
