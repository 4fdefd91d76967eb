//! Thread-shared access to an [`ElementTree`].
//!
//! A plain `ElementTree` is only mutated through `&mut`. When several threads
//! need to read and append to the same document, wrap it in a [`SharedTree`]:
//! every mutation takes the write lock.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::fmt;
use std::sync::Arc;

use crate::element::{ElementNode, ElementTree};
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct SharedTree {
    tree: Arc<RwLock<ElementTree>>,
}

impl SharedTree {
    pub fn new(tree: ElementTree) -> Self {
        Self {
            tree: Arc::new(RwLock::new(tree)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, ElementTree> {
        self.tree.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, ElementTree> {
        self.tree.write()
    }

    /// Owned copies of the nodes [`ElementTree::find_by_tag`] matches.
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<ElementNode>> {
        let tree = self.tree.read();
        let found = tree.find_by_tag(tag)?;
        Ok(found.into_iter().cloned().collect())
    }

    /// Appends `child` under the node at `parent`, holding the write lock.
    pub fn append_child(&self, parent: &[usize], child: ElementNode) -> Result<()> {
        self.tree.write().append_child(parent, child)?;
        Ok(())
    }

    pub fn snapshot(&self) -> ElementTree {
        self.tree.read().clone()
    }
}

impl From<ElementTree> for SharedTree {
    fn from(tree: ElementTree) -> Self {
        Self::new(tree)
    }
}

impl fmt::Display for SharedTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self.tree.read())
    }
}
