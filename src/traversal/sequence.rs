//! Adapter turning a stateful cursor into a lazy [`Iterator`] for
//! iteration-syntax consumption.

use super::{InOrderIterator, Order, PostOrderIterator, PreOrderIterator, TreeCursor};
use crate::tree::SearchTree;

/// The closed set of cursor kinds a [`Traversal`] can dispatch over.
enum CursorKind<'a, T> {
    PreOrder(PreOrderIterator<'a, T>),
    InOrder(InOrderIterator<'a, T>),
    PostOrder(PostOrderIterator<'a, T>),
}

/// A lazy, restartable traversal sequence over a borrowed tree.
///
/// Wrapping a cursor forces a [`reset`](TreeCursor::reset), so acquiring a
/// traversal always starts from a clean walk, even when the wrapped cursor
/// has been stepped before. One wrapper holds one traversal position; obtain
/// a fresh one from the [`SearchTree`] factories to iterate again.
pub struct Traversal<'a, T> {
    cursor: CursorKind<'a, T>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(tree: &'a SearchTree<T>, order: Order) -> Self {
        match order {
            Order::PreOrder => PreOrderIterator::new(tree, tree.root()).into(),
            Order::InOrder => InOrderIterator::new(tree, tree.root()).into(),
            Order::PostOrder => PostOrderIterator::new(tree, tree.root()).into(),
        }
    }
}

impl<'a, T> From<PreOrderIterator<'a, T>> for Traversal<'a, T> {
    fn from(mut cursor: PreOrderIterator<'a, T>) -> Self {
        cursor.reset();
        Traversal {
            cursor: CursorKind::PreOrder(cursor),
        }
    }
}

impl<'a, T> From<InOrderIterator<'a, T>> for Traversal<'a, T> {
    fn from(mut cursor: InOrderIterator<'a, T>) -> Self {
        cursor.reset();
        Traversal {
            cursor: CursorKind::InOrder(cursor),
        }
    }
}

impl<'a, T> From<PostOrderIterator<'a, T>> for Traversal<'a, T> {
    fn from(mut cursor: PostOrderIterator<'a, T>) -> Self {
        cursor.reset();
        Traversal {
            cursor: CursorKind::PostOrder(cursor),
        }
    }
}

fn step<'a, T, C>(cursor: &mut C) -> Option<&'a T>
where
    C: TreeCursor<'a, T>,
{
    if !cursor.advance() {
        return None;
    }
    Some(cursor.current().expect("advance() reported a position"))
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            CursorKind::PreOrder(cursor) => step(cursor),
            CursorKind::InOrder(cursor) => step(cursor),
            CursorKind::PostOrder(cursor) => step(cursor),
        }
    }
}
