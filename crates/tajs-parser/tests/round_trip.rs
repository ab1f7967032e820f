//! Property-based tests: serialization and re-parsing agree, and the parser
//! fails cleanly on arbitrary input.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use tajs_dom::{Document, ElementNode, Node, TextContent};
use tajs_parser::Parser;

fn tag_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_][a-zA-Z0-9_-]{0,6}"
}

fn attributes() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-z][a-z0-9_-]{0,5}", "[^\"]{0,8}"), 0..4)
}

fn text() -> impl Strategy<Value = String> {
    "[^<]{1,12}"
}

/// Adjacent text runs are one run once serialized, so merge them up front.
fn build(tag: String, attrs: Vec<(String, String)>, children: Vec<Node>) -> ElementNode {
    let mut el = ElementNode::new(tag);
    el.attributes = attrs.into_iter().collect();
    for child in children {
        if let (Some(Node::Text(prev)), Node::Text(next)) = (el.children.last_mut(), &child) {
            prev.content.push_str(&next.content);
            continue;
        }
        el.children.push(child);
    }
    el
}

fn element() -> impl Strategy<Value = ElementNode> {
    let leaf = (tag_name(), attributes()).prop_map(|(tag, attrs)| build(tag, attrs, Vec::new()));
    leaf.prop_recursive(4, 48, 5, |inner| {
        (
            tag_name(),
            attributes(),
            prop::collection::vec(
                prop_oneof![text().prop_map(Node::text), inner.prop_map(Node::Element)],
                0..5,
            ),
        )
            .prop_map(|(tag, attrs, children)| build(tag, attrs, children))
    })
}

fn forest() -> impl Strategy<Value = Document> {
    prop::collection::vec(element(), 1..4).prop_map(Document::new)
}

proptest! {
    #[test]
    fn reparse_of_serialization_is_structurally_equal(doc in forest()) {
        let reparsed = Parser::parse(&doc.to_string()).unwrap();
        prop_assert_eq!(reparsed, doc);
    }

    #[test]
    fn serialization_is_a_fixed_point(doc in forest()) {
        let once = doc.to_string();
        let twice = Parser::parse(&once).unwrap().to_string();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn arbitrary_input_never_panics(source in "\\PC{0,64}") {
        let _ = Parser::parse(&source);
    }

    #[test]
    fn markup_like_input_never_panics(source in "[<>/=\" a-c\n]{0,48}") {
        if let Err(err) = Parser::parse(&source) {
            prop_assert!(!err.message.is_empty());
            prop_assert!(err.line >= 1);
        }
    }

    #[test]
    fn set_text_content_appends_after_surviving_text(el in element(), content in ".{0,12}") {
        let kept: Vec<Node> = el
            .children
            .iter()
            .filter(|child| matches!(child, Node::Text(_)))
            .cloned()
            .collect();
        let kept_text: String = kept.iter().map(Node::text_content).collect();

        let mut el = el;
        el.set_text_content(content.clone());

        let mut expected = kept;
        expected.push(Node::text(content.clone()));
        prop_assert_eq!(&el.children, &expected);
        prop_assert_eq!(el.text_content(), format!("{kept_text}{content}"));
    }
}

#[test]
fn intra_tag_whitespace_is_normalized() {
    let doc = Parser::parse("<a   x=\"1\"\n\ty=\"2\"  >t</a>").unwrap();
    assert_eq!(doc.to_string(), r#"<a x="1" y="2">t</a>"#);
    assert_eq!(Parser::parse(&doc.to_string()).unwrap(), doc);
}

#[test]
fn inter_root_whitespace_is_dropped() {
    let doc = Parser::parse("<a></a>\n  <b>x</b>\n").unwrap();
    assert_eq!(doc.to_string(), "<a></a><b>x</b>");
}

#[test]
fn content_is_reproduced_verbatim() {
    let source = "<html>\n  <body>\n    <h1>This is a test!</h1>\n    <p class=\"hello-world\">Hello, World!</p>\n  </body>\n</html>";
    let doc = Parser::parse(source).unwrap();
    assert_eq!(doc.to_string(), source);
}
