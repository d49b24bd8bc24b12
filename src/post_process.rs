// Chunk: docs/chunks/static_mark_tinting - Tinting <mark> elements in rendered output

//! One-shot tinting of rendered highlights.
//!
//! Reading mode renders `==text==` as `<mark>text</mark>`. This pass runs per
//! rendered block, finds those elements and merges the tint into their inline
//! style. It keeps no state between blocks and never sees the live editor's
//! decorations; the two agree only because both call the same color mapper
//! on the same text.
//!
//! The live path tints the literal slice between the delimiters, while this
//! pass uses the element's trimmed text, as the rendered element is all it has.

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use hue_mark_color::{color_style_with, DigestKind};

/// A rendered highlight element.
pub trait HighlightElement {
    /// The element's rendered text, before trimming.
    fn text_content(&self) -> &str;

    /// Merges one CSS declaration into the element's inline style.
    fn merge_style(&mut self, declaration: &str);
}

/// Tints one element from its trimmed text.
pub fn tint_element<E: HighlightElement + ?Sized>(element: &mut E, digest: DigestKind) {
    let style = color_style_with(digest, element.text_content().trim());
    element.merge_style(&style.declaration());
}

/// Tints every element, in any order.
pub fn tint_elements<E: HighlightElement>(elements: &mut [E], digest: DigestKind) {
    for element in elements.iter_mut() {
        tint_element(element, digest);
    }
}

/// Tints every `<mark>` element in a fragment of rendered HTML.
///
/// Nested marks are tinted too, each from its own text content. Only the
/// `<mark>` start tags are rewritten; every other byte is passed through.
pub fn post_process_html(html: &str, digest: DigestKind) -> String {
    let extents = find_marks(html);
    let mut out = String::with_capacity(html.len() + extents.len() * 32);
    let mut last = 0;

    for extent in &extents {
        let attributes = &html[extent.attributes.clone()];
        let mut mark = HtmlMark::new(attributes, &html[extent.inner.clone()]);
        tint_element(&mut mark, digest);
        out.push_str(&html[last..extent.tag.start]);
        out.push_str(&mark.start_tag());
        last = extent.tag.end;
    }
    out.push_str(&html[last..]);

    tracing::trace!(bytes = html.len(), marks = extents.len(), "post-processed rendered block");
    out
}

/// Where one `<mark>` element sits in the fragment.
struct MarkExtent {
    /// The start tag
    tag: Range<usize>,
    /// Attribute text inside the start tag
    attributes: Range<usize>,
    /// Everything between the start tag and its end tag
    inner: Range<usize>,
}

/// Pairs `<mark>` start and end tags, innermost first, and returns the
/// elements ordered by start tag. A start tag that is never closed runs to
/// the end of the fragment; a stray end tag is ignored.
fn find_marks(html: &str) -> Vec<MarkExtent> {
    let mut extents = Vec::new();
    let mut open: Vec<(Range<usize>, Range<usize>)> = Vec::new();

    for caps in mark_tag_regex().captures_iter(html) {
        let Some(tag) = caps.get(0) else { continue };
        match caps.get(1) {
            Some(attributes) => open.push((tag.range(), attributes.range())),
            None => {
                if let Some((start, attributes)) = open.pop() {
                    extents.push(MarkExtent {
                        inner: start.end..tag.start(),
                        tag: start,
                        attributes,
                    });
                }
            }
        }
    }
    for (start, attributes) in open {
        extents.push(MarkExtent {
            inner: start.end..html.len(),
            tag: start,
            attributes,
        });
    }

    extents.sort_by_key(|extent| extent.tag.start);
    extents
}

/// A `<mark>` start tag (attributes in group 1) or a `</mark>` end tag.
///
/// The name must be followed by whitespace, `/` or `>`, so `<marker>` and
/// `<mark-x>` are left alone, and quoted attribute values may contain `>`.
fn mark_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?i)<mark((?:[\s/](?:[^>"']|"[^"]*"|'[^']*')*)?)>|</mark\s*>"#)
            .expect("valid regex")
    })
}

/// One attribute: name in group 1, value in group 2, 3 or 4.
fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
            .expect("valid regex")
    })
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"<(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("valid regex"))
}

fn line_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"))
}

/// A `<mark>` element parsed out of an HTML fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlMark {
    /// Raw attribute text of the start tag, including leading whitespace
    attributes: String,
    /// Decoded text content
    text: String,
}

impl HtmlMark {
    /// A mark with the given raw attribute text and inner HTML.
    pub fn new(attributes: &str, inner: &str) -> Self {
        Self {
            attributes: attributes.to_string(),
            text: text_content(inner),
        }
    }

    pub fn attributes(&self) -> &str {
        &self.attributes
    }

    /// Serializes the start tag back to HTML.
    pub fn start_tag(&self) -> String {
        format!("<mark{}>", self.attributes)
    }
}

impl HighlightElement for HtmlMark {
    fn text_content(&self) -> &str {
        &self.text
    }

    fn merge_style(&mut self, declaration: &str) {
        let style = attribute_regex()
            .captures_iter(&self.attributes)
            .find(|caps| caps[1].eq_ignore_ascii_case("style"));

        let merged = match style {
            Some(caps) => {
                let whole = caps.get(0).map_or(0..0, |m| m.range());
                let existing = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map_or("", |m| m.as_str())
                    .trim_end();
                let style = if existing.is_empty() {
                    declaration.to_string()
                } else if existing.ends_with(';') {
                    format!("{} {}", existing, declaration)
                } else {
                    format!("{}; {}", existing, declaration)
                };
                let mut attributes = self.attributes.clone();
                attributes.replace_range(whole, &format!("style=\"{}\"", style.replace('"', "'")));
                attributes
            }
            None => format!("{} style=\"{}\"", self.attributes.trim_end(), declaration),
        };
        self.attributes = merged;
    }
}

/// Text content of an HTML fragment: line breaks kept, tags dropped, common
/// entities decoded.
fn text_content(inner: &str) -> String {
    let with_breaks = line_break_regex().replace_all(inner, "\n");
    let stripped = tag_regex().replace_all(&with_breaks, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let after = &rest[amp..];
        match after.find(';').and_then(|semi| {
            decode_entity(&after[1..semi]).map(|ch| (ch, semi + 1))
        }) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &after[consumed..];
            }
            None => {
                out.push('&');
                rest = &after[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(|c: char| c == 'x' || c == 'X') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hue_mark_color::color_style;

    fn tint(text: &str) -> String {
        color_style(text).declaration()
    }

    // ==================== post_process_html ====================

    #[test]
    fn test_plain_mark() {
        let html = "<p>Some <mark>hello</mark> text</p>";
        let out = post_process_html(html, DigestKind::Md5);
        assert_eq!(
            out,
            format!("<p>Some <mark style=\"{}\">hello</mark> text</p>", tint("hello"))
        );
    }

    #[test]
    fn test_text_is_trimmed() {
        let out = post_process_html("<mark>  hello\n</mark>", DigestKind::Md5);
        assert!(out.contains(&tint("hello")), "{}", out);
    }

    #[test]
    fn test_nested_markup_uses_text_content() {
        let out = post_process_html("<mark><strong>bold</strong> move</mark>", DigestKind::Md5);
        assert!(out.contains(&tint("bold move")), "{}", out);
        assert!(out.contains("<strong>bold</strong> move"));
    }

    #[test]
    fn test_entities_are_decoded() {
        let out = post_process_html("<mark>a &amp; b &#x3C;c&#62;</mark>", DigestKind::Md5);
        assert!(out.contains(&tint("a & b <c>")), "{}", out);
    }

    #[test]
    fn test_existing_style_is_extended() {
        let out = post_process_html(
            r#"<mark class="x" style="color: red">hi</mark>"#,
            DigestKind::Md5,
        );
        assert_eq!(
            out,
            format!(r#"<mark class="x" style="color: red; {}">hi</mark>"#, tint("hi"))
        );
    }

    #[test]
    fn test_single_quoted_style() {
        let out = post_process_html("<mark style='color: red;'>hi</mark>", DigestKind::Md5);
        assert_eq!(
            out,
            format!("<mark style=\"color: red; {}\">hi</mark>", tint("hi"))
        );
    }

    #[test]
    fn test_every_mark_is_tinted_independently() {
        let out = post_process_html("<mark>abc</mark> <mark>abd</mark>", DigestKind::Md5);
        assert_eq!(
            out,
            format!(
                "<mark style=\"{}\">abc</mark> <mark style=\"{}\">abd</mark>",
                tint("abc"),
                tint("abd")
            )
        );
    }

    #[test]
    fn test_html_without_marks_is_unchanged() {
        let html = "<p>No <em>marks</em> here &amp; there</p>";
        assert_eq!(post_process_html(html, DigestKind::Md5), html);
    }

    #[test]
    fn test_other_tags_starting_with_mark_are_ignored() {
        let html = "<marker>x</marker>";
        assert_eq!(post_process_html(html, DigestKind::Md5), html);
    }

    #[test]
    fn test_nested_marks_are_each_tinted() {
        let out = post_process_html("<mark>a <mark>b</mark> c</mark>", DigestKind::Md5);
        assert_eq!(
            out,
            format!(
                "<mark style=\"{}\">a <mark style=\"{}\">b</mark> c</mark>",
                tint("a b c"),
                tint("b")
            )
        );
    }

    #[test]
    fn test_gt_inside_quoted_attribute() {
        let out = post_process_html(r#"<mark title="x>y">hi</mark>"#, DigestKind::Md5);
        assert_eq!(out, format!(r#"<mark title="x>y" style="{}">hi</mark>"#, tint("hi")));
    }

    #[test]
    fn test_custom_element_prefixed_mark_is_ignored() {
        let html = "<mark-x>hi</mark-x> <mark-x>hi</mark>";
        assert_eq!(post_process_html(html, DigestKind::Md5), html);
    }

    #[test]
    fn test_unclosed_mark_runs_to_end() {
        let out = post_process_html("<p><mark>open", DigestKind::Md5);
        assert_eq!(out, format!("<p><mark style=\"{}\">open", tint("open")));
    }

    #[test]
    fn test_uppercase_tags() {
        let out = post_process_html("<MARK>hi</MARK>", DigestKind::Md5);
        assert_eq!(out, format!("<mark style=\"{}\">hi</MARK>", tint("hi")));
    }

    #[test]
    fn test_digest_is_respected() {
        let out = post_process_html("<mark>hello</mark>", DigestKind::Sha256);
        assert!(out.contains(&color_style_with(DigestKind::Sha256, "hello").declaration()));
    }

    // ==================== elements ====================

    struct Element {
        text: String,
        styles: Vec<String>,
    }

    impl HighlightElement for Element {
        fn text_content(&self) -> &str {
            &self.text
        }

        fn merge_style(&mut self, declaration: &str) {
            self.styles.push(declaration.to_string());
        }
    }

    #[test]
    fn test_tint_elements() {
        let mut elements = vec![
            Element { text: " hello ".to_string(), styles: Vec::new() },
            Element { text: String::new(), styles: Vec::new() },
        ];
        tint_elements(&mut elements, DigestKind::Md5);

        assert_eq!(elements[0].styles, vec![tint("hello")]);
        assert_eq!(elements[1].styles, vec![tint("")]);
    }

    #[test]
    fn test_html_mark_text_content() {
        let mark = HtmlMark::new("", "one<br/>two &nbsp;");
        assert_eq!(mark.text_content(), "one\ntwo \u{a0}");
        assert_eq!(mark.start_tag(), "<mark>");
    }

    #[test]
    fn test_style_inside_another_attribute_is_not_merged() {
        let mut mark = HtmlMark::new(r#" title="style='x'""#, "hi");
        mark.merge_style("filter: none");
        assert_eq!(mark.attributes(), r#" title="style='x'" style="filter: none""#);
    }

    #[test]
    fn test_decode_leaves_unknown_entities() {
        assert_eq!(decode_entities("&bogus; & &#xZZ;"), "&bogus; & &#xZZ;");
    }
}
