// Chunk: docs/chunks/hue_tinted_highlights - Live and static tinting agree

//! Integration tests driving the plugin through both of its paths.

use hue_mark::syntax::TextChange;
use hue_mark::{color_style, color_style_with, DigestKind, HighlightSettings, HueMarkPlugin};
use proptest::prelude::*;

fn live_styles(plugin: &HueMarkPlugin, text: &str) -> Vec<String> {
    plugin
        .open_view(text)
        .decorations()
        .iter()
        .map(|d| d.style_attribute())
        .collect()
}

#[test]
fn test_live_and_static_agree() {
    let plugin = HueMarkPlugin::from_data("{}");

    let live = live_styles(&plugin, "A ==key idea== and ==other== here\n");
    let html = plugin.post_process("<p>A <mark>key idea</mark> and <mark>other</mark> here</p>");

    assert_eq!(live.len(), 2);
    for style in &live {
        assert!(html.contains(style.as_str()), "{} not in {}", style, html);
    }
}

#[test]
fn test_live_and_static_agree_with_sha256() {
    let plugin = HueMarkPlugin::from_data(r#"{"digest": "sha256"}"#);

    let live = live_styles(&plugin, "==hello==\n");
    let html = plugin.post_process("<mark>hello</mark>");

    assert_eq!(live, vec![color_style_with(DigestKind::Sha256, "hello").declaration()]);
    assert!(html.contains(live[0].as_str()));
}

#[test]
fn test_known_hue_for_hello() {
    let plugin = HueMarkPlugin::default();
    let live = live_styles(&plugin, "==hello==\n");
    assert_eq!(live, vec!["filter: hue-rotate(304deg)".to_string()]);
}

#[test]
fn test_code_is_not_tinted() {
    let plugin = HueMarkPlugin::default();
    let text = "`==inline==`\n\n```\n==fenced==\n```\n\n    ==indented==\n";
    assert!(live_styles(&plugin, text).is_empty());
}

#[test]
fn test_editing_session_recolors_phrase() {
    let plugin = HueMarkPlugin::default();
    let mut view = plugin.open_view("Read ==abc== twice\n");
    assert_eq!(view.decorations().get(0).unwrap().style(), color_style("abc"));

    view.dispatch(TextChange::replace(9..10, "d"));
    assert_eq!(view.text(), "Read ==abd== twice\n");
    assert_eq!(view.decorations().get(0).unwrap().style(), color_style("abd"));

    // The reading-mode render of the edited text gets the new hue as well
    let html = plugin.post_process("<p>Read <mark>abd</mark> twice</p>");
    assert!(html.contains(&color_style("abd").declaration()));
}

#[test]
fn test_delimiter_tinting_setting() {
    let plugin = HueMarkPlugin::from_data(r#"{"tint_delimiters": true}"#);
    let view = plugin.open_view("==hi==\n");

    let ranges: Vec<_> = view.decorations().iter().map(|d| d.span().range()).collect();
    assert_eq!(ranges, vec![0..2, 2..4, 4..6]);
    // Each mark is tinted by its own literal text
    assert_eq!(view.decorations().get(0).unwrap().style(), color_style("=="));
    assert_eq!(view.decorations().get(1).unwrap().style(), color_style("hi"));
}

fn digest() -> impl Strategy<Value = DigestKind> {
    prop_oneof![Just(DigestKind::Md5), Just(DigestKind::Sha256)]
}

proptest! {
    #[test]
    fn prop_live_and_static_agree(phrase in "[a-z]([a-z ]{0,10}[a-z])?", digest in digest()) {
        let plugin = HueMarkPlugin::new(HighlightSettings {
            digest,
            ..HighlightSettings::default()
        });
        let expected = color_style_with(digest, &phrase).declaration();

        let live = live_styles(&plugin, &format!("x =={}== y\n", phrase));
        let html = plugin.post_process(&format!("<p>x <mark>{}</mark> y</p>", phrase));

        prop_assert_eq!(live, vec![expected.clone()]);
        prop_assert_eq!(html, format!("<p>x <mark style=\"{}\">{}</mark> y</p>", expected, phrase));
    }
}
