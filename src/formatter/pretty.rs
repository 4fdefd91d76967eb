use super::{helpers, CommonFormatter, FormatConfig, Formatter};
use crate::element::ElementNode;

/// Renders one element per line with nested elements indented.
///
/// Childless elements stay on a single line. Parsing the output yields the
/// same tree, since the whitespace it adds is trimmed from node data.
pub struct PrettyFormatter;

impl CommonFormatter for PrettyFormatter {}

impl Formatter for PrettyFormatter {
    fn format(&self, node: &ElementNode, config: &FormatConfig) -> String {
        Self::format_node(node, 0, config)
    }
}

impl PrettyFormatter {
    fn format_node(node: &ElementNode, indent: usize, config: &FormatConfig) -> String {
        let (indent_str, inner_indent) = Self::create_indentation(indent, config);
        if node.is_leaf() {
            return format!("{}{}", indent_str, helpers::format_leaf(node));
        }

        let mut lines = vec![format!("{}{}", indent_str, helpers::open_tag(node.tag()))];
        if !node.data().is_empty() {
            lines.push(format!("{}{}", inner_indent, node.data()));
        }
        lines.extend(
            node.children()
                .iter()
                .map(|child| Self::format_node(child, indent + 1, config)),
        );
        lines.push(format!("{}{}", indent_str, helpers::close_tag(node.tag())));
        lines.join("\n")
    }
}
