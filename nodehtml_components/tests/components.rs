use nodehtml::{builder::Builder, bumpalo::Bump, Node, NodeKind, Render};
use nodehtml_components::{html5, input_hidden, join_attrs, Classes, Html5Props};
use pretty_assertions::assert_eq;

#[test]
fn html5_renders_a_full_document() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let page = html5(
        &bump,
        Html5Props {
            title: "Hat party",
            description: "Party hats & more",
            language: "en",
            head: vec![b.link([b.rel("stylesheet"), b.href("/style.css")])],
            body: vec![b.div([b.text("Hello")])],
            html_attrs: vec![b.class("h-full")],
        },
    );

    assert_eq!(
        page.write_to_string().unwrap(),
        concat!(
            r#"<!doctype html><html lang="en" class="h-full"><head>"#,
            r#"<meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            r#"<title>Hat party</title>"#,
            r#"<meta name="description" content="Party hats &amp; more">"#,
            r#"<link rel="stylesheet" href="/style.css">"#,
            r#"</head><body><div>Hello</div></body></html>"#,
        )
    );
}

#[test]
fn html5_skips_empty_language_and_description() {
    let bump = Bump::new();
    let page = html5(
        &bump,
        Html5Props {
            title: "Hat party",
            ..Default::default()
        },
    );

    assert_eq!(
        page.write_to_string().unwrap(),
        concat!(
            r#"<!doctype html><html><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            r#"<title>Hat party</title></head><body></body></html>"#,
        )
    );
}

#[test]
fn classes_render_sorted_included_names() {
    let bump = Bump::new();
    let classes = Classes::from_pairs(
        &bump,
        [("party-hat", true), ("boring-hat", false), ("hat", true)],
    );
    assert_eq!(classes.kind(), NodeKind::Attribute);
    assert_eq!(
        classes.write_to_string().unwrap(),
        r#" class="hat party-hat""#
    );
}

#[test]
fn classes_last_flag_wins() {
    let bump = Bump::new();
    let classes = Classes::new(&bump)
        .with("hat", true)
        .with("party", true)
        .with("hat", false);
    assert_eq!(classes.included(), vec!["party"]);
    assert_eq!(classes.to_string(), r#" class="party""#);
}

#[test]
fn classes_are_placed_in_the_opening_tag() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let div = b.div([
        b.text("hats"),
        b.component(Classes::from_pairs(&bump, [("a", true)])),
    ]);
    assert_eq!(div.write_to_string().unwrap(), r#"<div class="a">hats</div>"#);
}

#[test]
fn join_attrs_merges_first_level_attributes() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let div = b.div([join_attrs(
        &bump,
        "class",
        [
            b.id("x"),
            b.class("party"),
            b.text("hats"),
            b.group([b.class("hat"), b.class(""), b.span([b.class("inner")])]),
            b.class("\"quoted\""),
        ],
    )]);
    assert_eq!(
        div.write_to_string().unwrap(),
        r#"<div id="x" class="party hat &quot;quoted&quot;" class="">hats<span class="inner"></span></div>"#
    );
}

#[test]
fn join_attrs_without_matches_keeps_children() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let joined = join_attrs(&bump, "class", [b.id("x"), b.attr("class"), b.text("y")]);
    let Node::Group { children } = &joined else {
        panic!("Expected a group");
    };
    assert_eq!(children.len(), 3);
    assert_eq!(
        b.p([joined]).write_to_string().unwrap(),
        r#"<p id="x" class>y</p>"#
    );
}

#[test]
fn input_hidden_renders_a_void_input() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let input = input_hidden(&bump, "csrf", "t0k3n", [b.id("csrf")]);
    assert_eq!(
        input.write_to_string().unwrap(),
        r#"<input type="hidden" name="csrf" value="t0k3n" id="csrf">"#
    );
}
