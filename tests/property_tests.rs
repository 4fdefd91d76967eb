#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use zxml::{ElementNode, ElementTree, FormatConfig, Formatter, PrettyFormatter, XmlParser};

// Strategy for generating tag names
fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.-]{0,8}"
}

// Strategy for generating single-spaced, trimmed text data
fn data_strategy() -> impl Strategy<Value = String> {
    vec("[a-zA-Z0-9,.!]{1,8}", 0..4).prop_map(|words| words.join(" "))
}

// Strategy for generating element trees a few levels deep
fn node_strategy() -> impl Strategy<Value = ElementNode> {
    let leaf = (tag_strategy(), data_strategy())
        .prop_map(|(tag, data)| ElementNode::new(tag, data).unwrap());

    leaf.prop_recursive(4, 32, 5, |inner| {
        (tag_strategy(), data_strategy(), vec(inner, 0..5)).prop_map(
            |(tag, data, children)| ElementNode::with_children(tag, data, children).unwrap(),
        )
    })
}

// Attribute text appended to an opening tag
fn attributes_strategy() -> impl Strategy<Value = String> {
    vec(("[a-z]{1,5}", "[a-zA-Z0-9 ]{0,6}"), 0..3).prop_map(|attrs| {
        attrs
            .iter()
            .map(|(k, v)| format!(" {}=\"{}\"", k, v))
            .collect::<String>()
    })
}

fn render_with_attributes(node: &ElementNode, attrs: &str, out: &mut String) {
    if node.is_leaf() && node.data().is_empty() {
        out.push_str(&format!("<{}{} />", node.tag(), attrs));
        return;
    }
    out.push_str(&format!("<{}{}>{}", node.tag(), attrs, node.data()));
    for child in node.children() {
        render_with_attributes(child, attrs, out);
    }
    out.push_str(&format!("</{}  >", node.tag()));
}

proptest! {
    // Canonical rendering parses back to the same tree and the same text
    #[test]
    fn test_canonical_roundtrip(node in node_strategy()) {
        let rendered = node.to_string();
        let tree = XmlParser::new(&rendered).parse().unwrap();
        prop_assert_eq!(tree.to_string(), rendered);
        prop_assert_eq!(tree, ElementTree::new(node));
    }

    // Attributes, self-closing shorthand and padded closing tags do not change the tree
    #[test]
    fn test_attributes_and_whitespace_are_erased(
        node in node_strategy(),
        attrs in attributes_strategy()
    ) {
        let mut decorated = String::new();
        render_with_attributes(&node, &attrs, &mut decorated);
        let tree = XmlParser::new(&decorated).parse().unwrap();
        prop_assert_eq!(tree, ElementTree::new(node));
    }

    // Indented output parses back to the same tree
    #[test]
    fn test_pretty_roundtrip(node in node_strategy(), indent in 0usize..5) {
        let config = FormatConfig { indent_spaces: indent };
        let pretty = PrettyFormatter.format(&node, &config);
        let tree = XmlParser::new(&pretty).parse().unwrap();
        prop_assert_eq!(tree, ElementTree::new(node));
    }

    // Every match has the queried tag and no match contains another
    #[test]
    fn test_search_results_are_disjoint(node in node_strategy(), tag in tag_strategy()) {
        let tree = ElementTree::new(node);
        let found = tree.find_by_tag(&tag).unwrap();
        for m in &found {
            prop_assert_eq!(m.tag(), tag.as_str());
        }
        let total: usize = found.iter().map(|m| m.subtree_len()).sum();
        prop_assert!(total <= tree.root().subtree_len());
    }

    // Appending is visible at the end of the parent's rendering
    #[test]
    fn test_append_updates_rendering(node in node_strategy(), extra in node_strategy()) {
        let mut tree = ElementTree::new(node);
        let before = tree.root().to_string();
        let extra_rendered = extra.to_string();
        tree.append_child(&[], extra).unwrap();

        let tag = tree.root().tag().to_string();
        let closing = format!("</{}>", tag);
        let after = tree.to_string();
        let expected = format!(
            "{}{}{}",
            &before[..before.len() - closing.len()],
            extra_rendered,
            closing
        );
        prop_assert_eq!(after, expected);
    }

    // Arbitrary input never panics
    #[test]
    fn test_arbitrary_input_does_not_panic(input in "[<>/a-c ?=\"x]{0,64}") {
        let _ = XmlParser::new(&input).parse();
    }
}
