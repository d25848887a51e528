//! Post-order traversal: left subtree, right subtree, node. The only
//! bidirectional cursor — stepping backward recomputes the structural
//! predecessor from parent links instead of replaying the walk.

use super::TreeCursor;
use crate::errors::EspalierError;
use crate::tree::{NodeIndex, SearchTree};
use std::collections::HashSet;
use tracing::trace;

/// Where the cursor stands in its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    /// Before the first element — freshly constructed, reset, or stepped
    /// backward past the start.
    NotStarted,
    At(NodeIndex),
    /// The forward walk ran dry.
    Exhausted,
}

/// Bidirectional cursor producing the post-order sequence of the subtree
/// below `root`.
///
/// Forward stepping peeks the stack top: a node seen for the first time has
/// its children pushed (right below left) and is remembered in the
/// visited-set; a node seen again has both subtrees fully emitted and is
/// popped as the next value. Backward stepping ([`previous`]) ignores the
/// stack and visited-set entirely and follows parent/child links to the node
/// emitted immediately before the current one.
///
/// Mixing directions is defined as follows: [`previous`] moves only the
/// cursor position and leaves the forward frontier (stack and visited-set)
/// untouched, so a later [`advance`](TreeCursor::advance) resumes the forward
/// walk exactly where it left off, regardless of intervening backward steps.
/// Once the forward walk has reported exhaustion, [`previous`] restarts from
/// the last element of the sequence, which is the walk root.
///
/// [`previous`]: PostOrderIterator::previous
pub struct PostOrderIterator<'a, T> {
    tree: &'a SearchTree<T>,
    root: Option<NodeIndex>,
    stack: Vec<NodeIndex>,
    /// Nodes whose children have already been pushed; a membership test
    /// distinguishes the first visit from the emitting second one.
    visited: HashSet<NodeIndex>,
    position: Position,
}

impl<'a, T> PostOrderIterator<'a, T> {
    /// Constructor. Pass [`SearchTree::root`] to walk the whole tree, or any
    /// other handle to walk a subtree.
    pub fn new(tree: &'a SearchTree<T>, root: Option<NodeIndex>) -> Self {
        let mut stack = Vec::new();
        if let Some(index) = root {
            stack.push(index);
        }
        PostOrderIterator {
            tree,
            root,
            stack,
            visited: HashSet::new(),
            position: Position::NotStarted,
        }
    }

    /// Steps to the node emitted immediately before the current one, using
    /// only parent/child links. Returns `false` when no predecessor exists:
    /// on a cursor that has never stepped, and when stepping back past the
    /// first element of the sequence — the position becomes unset then.
    pub fn previous(&mut self) -> bool {
        let at = match self.position {
            Position::NotStarted => return false,
            Position::Exhausted => {
                // Restart from the last element of the sequence.
                let Some(root) = self.root else { return false };
                self.position = Position::At(root);
                return true;
            }
            Position::At(index) => index,
        };

        // The node emitted just before an inner node is the root of its
        // latest-emitted subtree: the right child when present, else the
        // left one.
        let node = self.tree.get(at);
        if let Some(child) = node.right().or(node.left()) {
            self.position = Position::At(child);
            return true;
        }

        // A leaf is the first element of its own subtree; climb until an
        // edge with a left sibling subtree is crossed from the right.
        let mut at = at;
        loop {
            if self.root == Some(at) {
                // Reached the walk root from its first element.
                self.position = Position::NotStarted;
                return false;
            }
            let parent = self
                .tree
                .get(at)
                .parent()
                .expect("nodes below the walk root have parents");
            let parent_node = self.tree.get(parent);
            if parent_node.right() == Some(at) {
                if let Some(left) = parent_node.left() {
                    self.position = Position::At(left);
                    return true;
                }
            }
            at = parent;
        }
    }
}

impl<'a, T> TreeCursor<'a, T> for PostOrderIterator<'a, T> {
    fn advance(&mut self) -> bool {
        while let Some(&top) = self.stack.last() {
            if self.visited.contains(&top) {
                // Second encounter: both subtrees are emitted by now.
                self.stack.pop();
                self.position = Position::At(top);
                return true;
            }

            self.visited.insert(top);
            let node = self.tree.get(top);
            if let Some(right) = node.right() {
                self.stack.push(right);
            }
            if let Some(left) = node.left() {
                self.stack.push(left);
            }
        }

        self.position = Position::Exhausted;
        false
    }

    fn current(&self) -> Result<&'a T, EspalierError> {
        match self.position {
            Position::At(index) => Ok(self.tree.get(index).value()),
            _ => Err(EspalierError::CursorUnset),
        }
    }

    fn reset(&mut self) {
        trace!("reset post-order cursor");
        self.stack.clear();
        self.visited.clear();
        if let Some(index) = self.root {
            self.stack.push(index);
        }
        self.position = Position::NotStarted;
    }
}
