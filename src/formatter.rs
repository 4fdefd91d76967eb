mod canonical;
mod pretty;

pub use self::{canonical::CanonicalFormatter, pretty::PrettyFormatter};
use crate::element::ElementNode;

/// Configuration options for formatting
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation
    pub indent_spaces: usize,
}

/// Default configuration for formatting
impl Default for FormatConfig {
    fn default() -> Self {
        Self { indent_spaces: 2 }
    }
}

/// Trait for formatting an element subtree as a string
pub trait Formatter {
    fn format(&self, node: &ElementNode, config: &FormatConfig) -> String;
}

/// Common formatting functionality shared between formatters
pub trait CommonFormatter {
    /// Creates indentation strings
    fn create_indentation(indent: usize, config: &FormatConfig) -> (String, String) {
        let indent_str = " ".repeat(indent * config.indent_spaces);
        let inner_indent = " ".repeat((indent + 1) * config.indent_spaces);
        (indent_str, inner_indent)
    }
}

/// Helper functions for formatting tags
pub mod helpers {
    use crate::element::ElementNode;

    pub fn open_tag(tag: &str) -> String {
        format!("<{}>", tag)
    }

    pub fn close_tag(tag: &str) -> String {
        format!("</{}>", tag)
    }

    /// `<tag>data</tag>` with no children rendered
    pub fn format_leaf(node: &ElementNode) -> String {
        format!("{}{}{}", open_tag(node.tag()), node.data(), close_tag(node.tag()))
    }
}
