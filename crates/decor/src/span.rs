// Chunk: docs/chunks/span_decorator - Incremental highlight decorations

use std::ops::Range;

/// A highlighted stretch of the document, captured at recompute time.
///
/// Offsets are half-open bytes in document coordinates. The text is the
/// literal slice `start..end` of the document the span was taken from; spans
/// are never updated in place, the next recompute builds new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    start: usize,
    end: usize,
    text: String,
}

impl TextSpan {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// Takes the span `range` out of `doc`.
    ///
    /// Panics if `range` is out of bounds or not on char boundaries.
    pub fn from_doc(doc: &str, range: Range<usize>) -> Self {
        Self::new(range.start, range.end, &doc[range])
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
