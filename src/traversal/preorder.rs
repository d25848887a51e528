//! Pre-order traversal: node, then left subtree, then right subtree.

use super::TreeCursor;
use crate::errors::EspalierError;
use crate::tree::{NodeIndex, SearchTree};
use tracing::trace;

/// Cursor producing the pre-order sequence of the subtree below `root`.
///
/// The frontier is a plain stack: popping a node and pushing its right child
/// before its left one makes the left subtree come out first.
pub struct PreOrderIterator<'a, T> {
    tree: &'a SearchTree<T>,
    root: Option<NodeIndex>,
    stack: Vec<NodeIndex>,
    current: Option<NodeIndex>,
}

impl<'a, T> PreOrderIterator<'a, T> {
    /// Constructor. Pass [`SearchTree::root`] to walk the whole tree, or any
    /// other handle to walk a subtree.
    pub fn new(tree: &'a SearchTree<T>, root: Option<NodeIndex>) -> Self {
        let mut stack = Vec::new();
        if let Some(index) = root {
            stack.push(index);
        }
        PreOrderIterator {
            tree,
            root,
            stack,
            current: None,
        }
    }
}

impl<'a, T> TreeCursor<'a, T> for PreOrderIterator<'a, T> {
    fn advance(&mut self) -> bool {
        let Some(index) = self.stack.pop() else {
            self.current = None;
            return false;
        };

        let node = self.tree.get(index);
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }

        self.current = Some(index);
        true
    }

    fn current(&self) -> Result<&'a T, EspalierError> {
        let index = self.current.ok_or(EspalierError::CursorUnset)?;
        Ok(self.tree.get(index).value())
    }

    fn reset(&mut self) {
        trace!("reset pre-order cursor");
        self.stack.clear();
        if let Some(index) = self.root {
            self.stack.push(index);
        }
        self.current = None;
    }
}
