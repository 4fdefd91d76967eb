//! zxml: A lightweight parser for XML-like element documents
//!
//! This crate provides functionality to:
//! - Parse a document into a tree of tagged elements in a single pass
//! - Search the tree breadth-first by tag name
//! - Append elements to an existing tree
//! - Render trees back to canonical or indented text
//!
//! Attributes are accepted but discarded, processing instructions are skipped.
//! Comments, CDATA, entities, namespaces and DOCTYPE are not supported.
//!
//! # Examples
//! ```
//! use zxml::{parse_str, Result};
//!
//! fn example() -> Result<()> {
//!     let tree = parse_str(r#"<a id="1"><b>content</b><b/></a>"#)?;
//!     assert_eq!(tree.find_by_tag("b")?.len(), 2);
//!     assert_eq!(tree.to_string(), "<a><b>content</b><b></b></a>");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use std::path::Path;

use tracing::{debug, info, instrument};

pub mod element;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod sync;
pub mod utils;

// Re-exports
pub use element::{ElementNode, ElementTree};
pub use error::{Result, XmlError, XmlErrorKind};
pub use formatter::{CanonicalFormatter, FormatConfig, Formatter, PrettyFormatter};
pub use parser::{ParserConfig, XmlParser};
pub use sync::SharedTree;

/// Parses `content` with the default (unbounded) limits.
pub fn parse_str(content: &str) -> Result<ElementTree> {
    utils::parse_xml(content)
}

#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ElementTree> {
    debug!("Starting to parse file");

    let content = utils::read_file(&path)?;
    info!(bytes = content.len(), "File read successfully");

    let result = parse_str(&content);
    debug!("Parsing completed");
    result
}
