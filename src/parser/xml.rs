// parser/xml.rs
//! XML element parser.
//!
//! This module turns a character buffer into an [`ElementTree`] in one forward
//! pass. Nesting is tracked on an explicit stack of frames rather than on the
//! call stack, so nesting depth is limited by memory unless a
//! [`ParserConfig::max_depth`] is configured.

use std::path::Path;

use tracing::{debug, instrument, trace};

use super::config::{ParserConfig, ParsingContext};
use super::tag::Tag;
use crate::element::{ElementNode, ElementTree};
use crate::error::{Result, XmlError};
use crate::utils::read_file;

/// Parser for XML-like element documents
#[derive(Debug)]
pub struct XmlParser {
    /// Trimmed input
    input: Vec<char>,
    /// Index of the character being processed
    position: usize,
    /// Limits applied while parsing
    config: ParserConfig,
    /// Parsing context for tracking depth
    context: ParsingContext,
}

/// An element whose closing tag has not been seen yet
#[derive(Debug)]
struct Frame {
    tag: String,
    data: String,
    children: Vec<ElementNode>,
}

impl Frame {
    fn open(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            data: String::new(),
            children: Vec::new(),
        }
    }

    fn close(self) -> ElementNode {
        ElementNode::from_parts(self.tag, &self.data, self.children)
    }
}

/// Outcome of scanning to the end of the buffer
enum Scan {
    /// Every opened element was closed
    Complete,
    /// Input ended while `tag` was still open
    Pending { tag: String },
}

impl XmlParser {
    /// Creates a new parser for `input`. Surrounding whitespace is ignored.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.trim().chars().collect(),
            position: 0,
            config: ParserConfig::default(),
            context: ParsingContext::new(),
        }
    }

    /// Creates a parser over the contents of the file at `path`.
    ///
    /// Lines are joined without their terminators.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_file(path)?;
        Ok(Self::new(&content))
    }

    /// Setter method to configure the parser
    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    /// Parses the whole buffer into a tree
    /// # Returns
    /// - Ok(ElementTree) rooted at the last top-level element
    /// - Err with a parse failure if the document is malformed
    #[instrument(skip(self), fields(len = self.input.len()))]
    pub fn parse(&mut self) -> Result<ElementTree> {
        self.position = 0;
        self.context = ParsingContext::new();

        let size: usize = self.input.iter().map(|c| c.len_utf8()).sum();
        self.config.validate_input_size(size)?;
        if self.input.is_empty() {
            return Err(XmlError::parse_failure("empty input"));
        }

        debug!("starting parse");
        let mut root = None;
        let mut stack = Vec::new();

        match self.scan(&mut stack, &mut root)? {
            Scan::Pending { tag } => Err(XmlError::parse_failure(format!(
                "unmatched tag: <{}>",
                tag
            ))
            .with_position(self.position)),
            Scan::Complete => {
                let root = root.ok_or_else(|| {
                    XmlError::parse_failure("no top-level element found")
                })?;
                debug!(nodes = root.subtree_len(), "parse completed");
                Ok(ElementTree::new(root))
            }
        }
    }

    fn scan(&mut self, stack: &mut Vec<Frame>, root: &mut Option<ElementNode>) -> Result<Scan> {
        while let Some(c) = self.current_char() {
            if c != '<' {
                // Text outside the root element is dropped.
                if let Some(frame) = stack.last_mut() {
                    frame.data.push(c);
                }
                self.advance();
                continue;
            }

            let start = self.position;
            let raw = self.read_tag()?;
            let tag = Tag::classify(&raw).map_err(|e| e.with_position(start))?;
            trace!(?tag, offset = start, "tag");

            match tag {
                Tag::ProcessingInstruction => {
                    debug!(offset = start, "skipping processing instruction");
                }
                Tag::Open(name) => {
                    self.context.enter_nested(&self.config)?;
                    stack.push(Frame::open(name));
                }
                Tag::SelfClosing(name) => {
                    let node = ElementNode::from_parts(name.to_string(), "", Vec::new());
                    attach(stack, root, node, true);
                }
                Tag::Close(name) => {
                    let frame = match stack.pop() {
                        Some(frame) if frame.tag == name => frame,
                        Some(frame) => {
                            return Err(XmlError::parse_failure(format!(
                                "mismatched closing tag: expected </{}>, found </{}>",
                                frame.tag, name
                            ))
                            .with_position(start));
                        }
                        None => {
                            return Err(XmlError::parse_failure(format!(
                                "closing tag </{}> has no matching open tag",
                                name
                            ))
                            .with_position(start));
                        }
                    };
                    self.context.exit_nested();
                    attach(stack, root, frame.close(), false);
                }
            }
        }

        Ok(match stack.pop() {
            Some(frame) => Scan::Pending { tag: frame.tag },
            None => Scan::Complete,
        })
    }

    /// Reads the text between the current `<` and the next `>`, leaving the
    /// position just past the `>`.
    fn read_tag(&mut self) -> Result<String> {
        let start = self.position;
        self.advance(); // consume '<'

        let mut raw = String::new();
        while let Some(c) = self.current_char() {
            self.advance();
            if c == '>' {
                return Ok(raw);
            }
            raw.push(c);
        }

        Err(XmlError::parse_failure("unterminated tag: missing '>'").with_position(start))
    }
}

/// Hands a finished node to the innermost open frame, or offers it as root.
///
/// At document level the last element with a closing tag becomes the root. A
/// self-closing element only fills the root when nothing else has.
fn attach(
    stack: &mut [Frame],
    root: &mut Option<ElementNode>,
    node: ElementNode,
    self_closing: bool,
) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return;
    }

    match root {
        Some(existing) if self_closing => {
            debug!(
                kept = existing.tag(),
                dropped = node.tag(),
                "ignoring self-closing top-level element"
            );
        }
        Some(existing) => {
            debug!(
                replaced = existing.tag(),
                root = node.tag(),
                "later top-level element replaces root"
            );
            *root = Some(node);
        }
        None => *root = Some(node),
    }
}
