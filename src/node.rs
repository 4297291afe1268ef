//! The list's storage cell.

use crate::id::NodeId;

/// One storage cell: an element and a forward link.
///
/// Nodes only ever store a `next` link; predecessors are answered by the
/// list's index. Nodes are owned by the arena of the list that created them
/// and are never visible to callers, who see elements and `Position` handles
/// instead.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) element: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> Node<T> {
    #[inline]
    pub(crate) fn new(element: T, next: Option<NodeId>) -> Self {
        Self { element, next }
    }
}
