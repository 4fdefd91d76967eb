use std::fmt;

use crate::error::{Result, XmlError};

/// A single tagged element of a parsed document.
///
/// Equality is structural: two nodes are equal when their tags, trimmed data
/// and children are recursively equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementNode {
    tag: String,
    data: String,
    children: Vec<ElementNode>,
}

/// Returns true if `name` can be used as an element tag.
///
/// A tag is a non-empty token without `<`, `>`, `/` or whitespace. A leading
/// `?` is reserved for processing instructions.
pub fn is_valid_tag_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('?')
        && !name
            .chars()
            .any(|c| matches!(c, '<' | '>' | '/') || c.is_whitespace())
}

impl ElementNode {
    /// Creates a childless node. `data` is trimmed.
    pub fn new(tag: impl Into<String>, data: impl AsRef<str>) -> Result<Self> {
        Self::with_children(tag, data, Vec::new())
    }

    /// Creates a node that takes ownership of `children`.
    pub fn with_children(
        tag: impl Into<String>,
        data: impl AsRef<str>,
        children: Vec<Self>,
    ) -> Result<Self> {
        let tag = tag.into();
        if !is_valid_tag_name(&tag) {
            return Err(XmlError::invalid_argument(format!(
                "invalid tag name: {:?}",
                tag
            )));
        }
        Ok(Self::from_parts(tag, data.as_ref(), children))
    }

    /// Creates a dataless, childless node, the form a self-closing tag takes.
    pub fn empty(tag: impl Into<String>) -> Result<Self> {
        Self::new(tag, "")
    }

    // Callers have already validated the tag.
    pub(crate) fn from_parts(tag: String, data: &str, children: Vec<Self>) -> Self {
        Self {
            tag,
            data: data.trim().to_string(),
            children,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn children(&self) -> &[Self] {
        &self.children
    }

    // In-place access for the tree's search; structural changes go through append.
    pub(crate) fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut Self> {
        self.children.get_mut(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends `child` after the existing children and returns it.
    #[allow(clippy::indexing_slicing)]
    pub fn append_child(&mut self, child: Self) -> &mut Self {
        let slot = self.children.len();
        self.children.push(child);
        // push guarantees the slot exists
        &mut self.children[slot]
    }

    /// Appends every node of `children` in order and returns the appended slice.
    pub fn extend_children<I>(&mut self, children: I) -> &[Self]
    where
        I: IntoIterator<Item = Self>,
    {
        let start = self.children.len();
        self.children.extend(children);
        self.children.get(start..).unwrap_or_default()
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter());
        }
        count
    }
}

// Children are torn down iteratively so dropping a deep tree does not recurse.
impl Drop for ElementNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Canonical rendering: `<tag>data<child>...</child></tag>`.
///
/// Walks the subtree with an explicit stack, so deep trees render without
/// recursion.
impl fmt::Display for ElementNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Step<'a> {
            Open(&'a ElementNode),
            Close(&'a str),
        }

        let mut pending = vec![Step::Open(self)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Open(node) => {
                    write!(f, "<{}>{}", node.tag, node.data)?;
                    pending.push(Step::Close(&node.tag));
                    pending.extend(node.children.iter().rev().map(Step::Open));
                }
                Step::Close(tag) => write!(f, "</{}>", tag)?,
            }
        }
        Ok(())
    }
}
