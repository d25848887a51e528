//! ## About
//!
//! This crate contains an unbalanced binary search tree whose traversals are
//! exposed as restartable, externally driven cursors rather than recursive
//! callbacks. Nodes are kept in an
//! [arena](https://en.wikipedia.org/wiki/Region-based_memory_management)
//! (a growable vector with index handles), which gives cycle-free parent
//! back-references. Those back-references are what allows the post-order
//! cursor to step *backward* through the sequence it just produced.
//!
//! All forward walks replace language recursion with an explicit stack, so a
//! traversal can be paused, resumed and reset at any point without unwinding
//! a call stack. See [`SearchTree`] to get started and [`TreeCursor`] for the
//! stepping contract shared by the three cursor kinds.
//!
//! ## Naming conventions
//! * Traits – adjectives/capabilities that indicate behavior
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms with the exception of getters and factories,
//!             which use substantives (i.e., omit a `get_` prefix) much like
//!             the standard library.

pub mod errors;
pub mod traversal;
pub mod tree;

pub use errors::EspalierError;
pub use traversal::{
    InOrderIterator, Order,
    Order::{InOrder, PostOrder, PreOrder},
    PostOrderIterator, PreOrderIterator, Traversal, TreeCursor,
};
pub use tree::{NodeIndex, SearchTree, TreeNode};
