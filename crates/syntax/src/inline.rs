// Chunk: docs/chunks/markdown_highlight_tree - Inline `==highlight==` scanning

//! Scanner for `==highlight==` spans inside one inline node.
//!
//! The block grammar tells us where inline text lives; this module finds the
//! highlight delimiters within it. Rules:
//!
//! - a delimiter is a run of exactly two `=`,
//! - an opener must be followed by a non-whitespace character,
//! - a closer must be preceded by a non-whitespace character,
//! - code spans (matching backtick runs) are opaque,
//! - so are `$math$`, autolinks and inline HTML tags, and link destinations,
//! - a backslash escapes the character after it.
//!
//! Only ASCII bytes are ever compared, so every emitted offset lies on a char
//! boundary.

use std::ops::Range;

use crate::node::{NodeKind, SyntaxNode};

const DELIMITER_LEN: usize = 2;

/// Scans `range` of `source` and returns, for each highlight, its opening
/// mark, its content and its closing mark, in document order.
pub fn scan_highlights(source: &str, range: Range<usize>) -> Vec<SyntaxNode> {
    let bytes = source.as_bytes();
    let end = range.end.min(bytes.len());
    let mut nodes = Vec::new();
    let mut open: Option<usize> = None;
    let mut i = range.start;

    while i < end {
        match bytes[i] {
            b'\\' => i += 2,
            b'`' => i = skip_code_span(bytes, i, end),
            b'$' => i = skip_math(bytes, i, end),
            b'<' => i = skip_angle(bytes, i, end),
            b']' if bytes.get(i + 1) == Some(&b'(') && i + 1 < end => {
                i = skip_destination(bytes, i + 1, end)
            }
            b'=' => {
                let run = run_length(bytes, i, end, b'=');
                if run == DELIMITER_LEN {
                    match open {
                        None => {
                            let next = i + DELIMITER_LEN;
                            if next < end && !bytes[next].is_ascii_whitespace() {
                                open = Some(i);
                            }
                        }
                        Some(start) => {
                            if !bytes[i - 1].is_ascii_whitespace() {
                                let content = start + DELIMITER_LEN..i;
                                nodes.push(SyntaxNode::new(
                                    NodeKind::HighlightMark,
                                    start..content.start,
                                ));
                                nodes.push(SyntaxNode::new(NodeKind::Highlight, content));
                                nodes.push(SyntaxNode::new(
                                    NodeKind::HighlightMark,
                                    i..i + DELIMITER_LEN,
                                ));
                                open = None;
                            }
                        }
                    }
                }
                i += run;
            }
            _ => i += 1,
        }
    }

    nodes
}

fn run_length(bytes: &[u8], at: usize, end: usize, byte: u8) -> usize {
    bytes[at..end].iter().take_while(|&&b| b == byte).count()
}

/// Returns the offset just past the code span opening at `at`, or past the
/// backtick run itself if it is never closed.
fn skip_code_span(bytes: &[u8], at: usize, end: usize) -> usize {
    let run = run_length(bytes, at, end, b'`');
    let mut j = at + run;
    while j < end {
        if bytes[j] == b'`' {
            let close = run_length(bytes, j, end, b'`');
            if close == run {
                return j + close;
            }
            j += close;
        } else {
            j += 1;
        }
    }
    at + run
}

/// Skips `$...$` or `$$...$$` math opening at `at`.
///
/// A single `$` only opens before a non-space and only closes after a
/// non-space when not followed by a digit, so prices like `$5 and $10` stay
/// plain text.
fn skip_math(bytes: &[u8], at: usize, end: usize) -> usize {
    let run = run_length(bytes, at, end, b'$');
    let start = at + run;
    if run == 1 && (start >= end || bytes[start].is_ascii_whitespace()) {
        return start;
    }

    let mut j = start;
    while j < end {
        match bytes[j] {
            b'\\' => j += 2,
            b'$' => {
                let close = run_length(bytes, j, end, b'$');
                let after = j + close;
                let flanked = !bytes[j - 1].is_ascii_whitespace()
                    && !(after < end && bytes[after].is_ascii_digit());
                if close == run && j > start && (run > 1 || flanked) {
                    return after;
                }
                j = after;
            }
            _ => j += 1,
        }
    }
    start
}

/// Skips an autolink or inline HTML tag opening at `at`, up to its `>`.
///
/// A `<` that is not followed by a letter, `/`, `!` or `?` is plain text, as
/// is one whose `>` never comes. A `>` inside a quoted attribute value does
/// not end the tag.
fn skip_angle(bytes: &[u8], at: usize, end: usize) -> usize {
    let next = at + 1;
    let opens = next < end
        && matches!(bytes[next], b'a'..=b'z' | b'A'..=b'Z' | b'/' | b'!' | b'?');
    if !opens {
        return next;
    }

    let mut quote: Option<u8> = None;
    let mut prev = b'<';
    for (j, &b) in bytes.iter().enumerate().take(end).skip(next) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' if prev == b'=' => quote = Some(b),
                b'>' => return j + 1,
                _ => {}
            },
        }
        if !b.is_ascii_whitespace() {
            prev = b;
        }
    }
    next
}

/// Skips a link destination whose `(` is at `at`, up to the balancing `)`.
fn skip_destination(bytes: &[u8], at: usize, end: usize) -> usize {
    let mut depth = 0usize;
    let mut j = at;
    while j < end {
        match bytes[j] {
            b'\\' => {
                j += 2;
                continue;
            }
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return j + 1;
                }
            }
            _ => {}
        }
        j += 1;
    }
    at + 1
}
