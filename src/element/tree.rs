use std::collections::VecDeque;
use std::fmt;

use super::ElementNode;
use crate::error::{Result, XmlError};

/// Whole-document wrapper around a root [`ElementNode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementTree {
    root: ElementNode,
}

impl ElementTree {
    pub fn new(root: ElementNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &ElementNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ElementNode {
        &mut self.root
    }

    pub fn into_root(self) -> ElementNode {
        self.root
    }

    /// Resolves a path of child indices starting at the root. `&[]` is the root.
    pub fn node(&self, path: &[usize]) -> Option<&ElementNode> {
        path.iter()
            .try_fold(&self.root, |node, &index| node.child(index))
    }

    pub fn node_mut(&mut self, path: &[usize]) -> Option<&mut ElementNode> {
        path.iter()
            .try_fold(&mut self.root, |node, &index| node.child_mut(index))
    }

    /// Breadth-first search for the top-most nodes tagged `tag`.
    ///
    /// When the root matches, only the root is returned. Otherwise the tree is
    /// walked level by level: matching children are collected in child order and
    /// their own subtrees are not searched, non-matching children are queued for
    /// descent.
    ///
    /// An empty `tag` is rejected with InvalidArgument rather than matching
    /// nothing: no valid tag is empty, so `""` is how a missing query arrives.
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<&ElementNode>> {
        validate_query(tag)?;

        if self.root.tag() == tag {
            return Ok(vec![&self.root]);
        }

        let mut matches = Vec::new();
        let mut queue = VecDeque::from([&self.root]);
        while let Some(node) = queue.pop_front() {
            for child in node.children() {
                if child.tag() == tag {
                    matches.push(child);
                } else {
                    queue.push_back(child);
                }
            }
        }

        Ok(matches)
    }

    /// Same walk as [`find_by_tag`](Self::find_by_tag), yielding mutable handles.
    ///
    /// Matches never contain one another, so the handles are disjoint.
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Result<Vec<&mut ElementNode>> {
        validate_query(tag)?;

        if self.root.tag() == tag {
            return Ok(vec![&mut self.root]);
        }

        let mut matches = Vec::new();
        let mut queue = VecDeque::from([&mut self.root]);
        while let Some(node) = queue.pop_front() {
            for child in node.children_mut() {
                if child.tag() == tag {
                    matches.push(child);
                } else {
                    queue.push_back(child);
                }
            }
        }

        Ok(matches)
    }

    /// Appends `child` to the node at `parent` and returns the appended child.
    ///
    /// The tree is left untouched if `parent` does not resolve.
    pub fn append_child(&mut self, parent: &[usize], child: ElementNode) -> Result<&ElementNode> {
        let parent_node = self.node_mut(parent).ok_or_else(|| {
            XmlError::invalid_argument(format!("parent not found at path {:?}", parent))
        })?;
        Ok(parent_node.append_child(child))
    }
}

// "" is the absent query; a tag that is merely unknown yields an empty result.
fn validate_query(tag: &str) -> Result<()> {
    if tag.is_empty() {
        return Err(XmlError::invalid_argument("tag cannot be empty"));
    }
    Ok(())
}

impl From<ElementNode> for ElementTree {
    fn from(root: ElementNode) -> Self {
        Self::new(root)
    }
}

impl TryFrom<Option<ElementNode>> for ElementTree {
    type Error = XmlError;

    fn try_from(root: Option<ElementNode>) -> Result<Self> {
        root.map(Self::new)
            .ok_or_else(|| XmlError::invalid_argument("root cannot be empty"))
    }
}

impl fmt::Display for ElementTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
