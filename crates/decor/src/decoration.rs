// Chunk: docs/chunks/span_decorator - Incremental highlight decorations

//! Tinted mark decorations and the ordered set the renderer consumes.
//!
//! A [`DecorationSet`] can only be produced by a [`DecorationSetBuilder`],
//! which enforces ascending, non-overlapping ranges at insertion time. Because
//! of that invariant, range queries are binary searches on either end.

use std::sync::Arc;

use hue_mark_color::{HueRotation, Rgb};

use crate::span::TextSpan;

/// CSS class attached to tinted marks unless configured otherwise.
pub const DEFAULT_MARK_CLASS: &str = "cm-highlight";

/// One tinted span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    span: TextSpan,
    style: HueRotation,
    /// Shared by every decoration of one recompute
    class: Arc<str>,
}

impl Decoration {
    /// A mark decoration painting `span` with `style`.
    pub fn mark(span: TextSpan, style: HueRotation, class: Arc<str>) -> Self {
        Self { span, style, class }
    }

    pub fn span(&self) -> &TextSpan {
        &self.span
    }

    pub fn start(&self) -> usize {
        self.span.start()
    }

    pub fn end(&self) -> usize {
        self.span.end()
    }

    pub fn style(&self) -> HueRotation {
        self.style
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Inline style attribute value, e.g. `filter: hue-rotate(304deg)`.
    pub fn style_attribute(&self) -> String {
        self.style.declaration()
    }

    /// The highlight color a native renderer should paint, given the
    /// theme's untinted highlight color.
    pub fn tint(&self, base: Rgb) -> Rgb {
        base.hue_rotate(self.style)
    }
}

/// Ordered, non-overlapping decorations for one document state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecorationSet {
    decorations: Vec<Decoration>,
}

impl DecorationSet {
    /// The empty set.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Decoration> {
        self.decorations.get(index)
    }

    /// Decorations in ascending start order.
    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.decorations.iter()
    }

    /// Decorations intersecting the byte window `from..to`.
    ///
    /// A decoration touching the window only at an endpoint is included when
    /// it is empty or the window is, matching how a cursor at a boundary
    /// still "sees" the mark.
    pub fn between(&self, from: usize, to: usize) -> &[Decoration] {
        // Ends ascend too, since ranges never overlap
        let first = self.decorations.partition_point(|d| d.end() < from);
        let last = self.decorations.partition_point(|d| d.start() <= to);
        let mut slice = &self.decorations[first..last.max(first)];

        // Trim marks that only touch the window when both have extent
        if from < to {
            while let Some((head, rest)) = slice.split_first() {
                if head.end() == from && head.start() < head.end() {
                    slice = rest;
                } else {
                    break;
                }
            }
            while let Some((tail, rest)) = slice.split_last() {
                if tail.start() == to && tail.start() < tail.end() {
                    slice = rest;
                } else {
                    break;
                }
            }
        }
        slice
    }

    /// The decoration covering byte `offset`, if any.
    pub fn at(&self, offset: usize) -> Option<&Decoration> {
        let idx = self.decorations.partition_point(|d| d.end() <= offset);
        self.decorations
            .get(idx)
            .filter(|d| d.start() <= offset && offset < d.end())
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.decorations.iter()
    }
}

/// Accumulates decorations in document order.
///
/// Adding a decoration that starts before the previous one ends is a bug in
/// the caller and panics; the set is never silently reordered.
#[derive(Debug, Default)]
pub struct DecorationSetBuilder {
    decorations: Vec<Decoration>,
}

impl DecorationSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `decoration`.
    ///
    /// # Panics
    ///
    /// If its range is inverted, starts before the previous decoration's
    /// start, or overlaps the previous decoration.
    pub fn add(&mut self, decoration: Decoration) {
        assert!(
            decoration.start() <= decoration.end(),
            "decoration range {}..{} is inverted",
            decoration.start(),
            decoration.end()
        );
        if let Some(prev) = self.decorations.last() {
            assert!(
                decoration.start() >= prev.start(),
                "decorations must be added in ascending start order ({} after {})",
                decoration.start(),
                prev.start()
            );
            assert!(
                decoration.start() >= prev.end(),
                "decoration {}..{} overlaps {}..{}",
                decoration.start(),
                decoration.end(),
                prev.start(),
                prev.end()
            );
        }
        self.decorations.push(decoration);
    }

    pub fn len(&self) -> usize {
        self.decorations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decorations.is_empty()
    }

    pub fn finish(self) -> DecorationSet {
        DecorationSet {
            decorations: self.decorations,
        }
    }
}
