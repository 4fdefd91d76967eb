use super::{FormatConfig, Formatter};
use crate::element::ElementNode;

/// Renders the single-line canonical form, `<tag>data<child>...</child></tag>`.
pub struct CanonicalFormatter;

impl Formatter for CanonicalFormatter {
    fn format(&self, node: &ElementNode, _config: &FormatConfig) -> String {
        node.to_string()
    }
}
