//! Element tree data model
//!
//! An [`ElementNode`] owns its tag, its trimmed text and its children. An
//! [`ElementTree`] wraps the root node and offers search and mutation.

mod node;
mod tree;

pub use node::{is_valid_tag_name, ElementNode};
pub use tree::ElementTree;
