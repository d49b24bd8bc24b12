// Chunk: docs/chunks/markdown_highlight_tree - Document changes and tree-sitter edits

//! Document changes expressed in byte offsets.
//!
//! The host reports each change as a replacement of `from..to` in the
//! pre-change document. Tree-sitter additionally needs row/column points for
//! the edit, so this module derives an `InputEdit` from a change and the text
//! it applies to.

use std::ops::Range;

use tree_sitter::{InputEdit, Point};

/// A single replacement in the document: `from..to` becomes `insert`.
///
/// Offsets are bytes into the document as it was before the change and must
/// fall on char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChange {
    pub from: usize,
    pub to: usize,
    pub insert: String,
}

impl TextChange {
    /// Inserts `text` at `at`.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            from: at,
            to: at,
            insert: text.into(),
        }
    }

    /// Deletes `range`.
    pub fn delete(range: Range<usize>) -> Self {
        Self {
            from: range.start,
            to: range.end,
            insert: String::new(),
        }
    }

    /// Replaces `range` with `text`.
    pub fn replace(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            from: range.start,
            to: range.end,
            insert: text.into(),
        }
    }

    /// Byte offset where the inserted text ends after the change.
    pub fn new_end(&self) -> usize {
        self.from + self.insert.len()
    }

    /// Applies the change to `doc` in place.
    pub fn apply(&self, doc: &mut String) {
        doc.replace_range(self.from..self.to, &self.insert);
    }

    /// Builds the tree-sitter edit for this change.
    ///
    /// `old_source` is the document before the change is applied.
    pub fn input_edit(&self, old_source: &str) -> InputEdit {
        let start_position = point_at(old_source, self.from);
        InputEdit {
            start_byte: self.from,
            old_end_byte: self.to,
            new_end_byte: self.new_end(),
            start_position,
            old_end_position: point_at(old_source, self.to),
            new_end_position: advance(start_position, &self.insert),
        }
    }
}

/// Row/column of a byte offset. Columns are in bytes, as tree-sitter expects.
///
/// Offsets past the end clamp to the end of the source.
pub fn point_at(source: &str, byte_offset: usize) -> Point {
    let prefix = &source.as_bytes()[..byte_offset.min(source.len())];
    let row = prefix.iter().filter(|&&b| b == b'\n').count();
    let column = match prefix.iter().rposition(|&b| b == b'\n') {
        Some(nl) => prefix.len() - nl - 1,
        None => prefix.len(),
    };
    Point { row, column }
}

/// The point reached after writing `text` starting at `start`.
fn advance(start: Point, text: &str) -> Point {
    let bytes = text.as_bytes();
    let newlines = bytes.iter().filter(|&&b| b == b'\n').count();
    match bytes.iter().rposition(|&b| b == b'\n') {
        Some(nl) => Point {
            row: start.row + newlines,
            column: bytes.len() - nl - 1,
        },
        None => Point {
            row: start.row,
            column: start.column + bytes.len(),
        },
    }
}
