//! Positional list over singly linked storage.
//!
//! Nodes live in an arena owned by the list and carry only a forward link;
//! the predecessor of any node is answered in O(1) by the list's
//! [`PredIndex`]. Every mutating operation performs a bounded number of link
//! rewrites and index updates, so insertion and removal at an arbitrary
//! position cost the same whether the list holds ten elements or a million.
//!
//! # Positions
//!
//! Operations hand back [`Position`] values: opaque handles that name a
//! specific node without any traversal. A position stays valid until the
//! element it names is removed, after which it is permanently stale. Stale
//! and foreign handles are rejected uniformly with [`InvalidPosition`], and a
//! rejected call mutates nothing.
//!
//! # Example
//!
//! ```
//! use poslist::PosList;
//!
//! let mut list: PosList<u64> = PosList::new();
//!
//! let p10 = list.append(10);
//! let p20 = list.append(20);
//! list.append(30);
//!
//! // Splice in the middle without traversal
//! let p25 = list.insert_after(p20, 25).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 25, 30]);
//!
//! // O(1) removal from anywhere; the handle goes stale
//! assert_eq!(list.remove(p25), Ok(25));
//! assert!(list.get(p25).is_err());
//!
//! assert_eq!(list.remove(p10), Ok(10));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![20, 30]);
//! ```

use std::collections::HashMap;

use crate::error::InvalidPosition;
use crate::id::NodeId;
use crate::index::{Lookup, MapIndex, PredIndex};
use crate::node::Node;

/// An opaque handle to a specific element of a [`PosList`].
///
/// Equality is by referenced node, never by element value: two positions for
/// distinct nodes holding equal elements compare unequal. Positions carry no
/// ownership and are inert on their own; only the list that issued one can
/// interpret it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    id: NodeId,
}

impl Position {
    /// Wraps a raw identity key.
    ///
    /// Intended for adversarial tests that need handles no list ever issued.
    /// A forged position is rejected by every validating operation.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self {
            id: NodeId::from_raw(raw),
        }
    }

    /// Returns the identity key this handle references.
    #[inline]
    pub const fn id(self) -> NodeId {
        self.id
    }
}

/// A position-addressed list with O(1) insertion and removal everywhere.
///
/// Physically a singly linked chain: each node stores only its element and a
/// forward link. The doubly-linked performance profile comes from the
/// predecessor index `P`, which maps node identity to predecessor identity
/// and is kept consistent with the chain on every mutation.
///
/// `P` defaults to [`MapIndex`]; harnesses can substitute
/// [`CountingIndex`](crate::CountingIndex) to observe index traffic without
/// changing behavior.
///
/// # Example
///
/// ```
/// use poslist::PosList;
///
/// let mut list: PosList<&str> = PosList::new();
/// let first = list.append("a");
/// list.prepend("z");
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(first), Ok(&"a"));
/// assert_eq!(list.last(), Some(first));
/// ```
#[derive(Debug)]
pub struct PosList<T, P: PredIndex = MapIndex> {
    nodes: HashMap<NodeId, Node<T>>,
    index: P,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

impl<T> PosList<T> {
    /// Creates an empty list over the default [`MapIndex`].
    pub fn new() -> Self {
        Self::with_index(MapIndex::default())
    }
}

impl<T> Default for PosList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: PredIndex> PosList<T, P> {
    /// Creates an empty list over the given predecessor index.
    pub fn with_index(index: P) -> Self {
        Self {
            nodes: HashMap::new(),
            index,
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the position of the first element, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<Position> {
        self.head.map(|id| Position { id })
    }

    /// Returns the position of the last element, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<Position> {
        self.tail.map(|id| Position { id })
    }

    /// Returns a reference to the predecessor index.
    ///
    /// Instrumentation access point: a list over a
    /// [`CountingIndex`](crate::CountingIndex) exposes its counters here.
    #[inline]
    pub fn index(&self) -> &P {
        &self.index
    }

    /// Returns a mutable reference to the predecessor index.
    ///
    /// For instrumentation (resetting counters on a decorator). Mutating the
    /// entries themselves breaks the list's invariants; the same discipline
    /// applies as handing out `&mut` storage in slab-backed designs.
    #[inline]
    pub fn index_mut(&mut self) -> &mut P {
        &mut self.index
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Validates `pos` against the index, returning its predecessor.
    ///
    /// `Ok(None)` means `pos` is the head. Exactly one index lookup; callers
    /// that need the predecessor reuse the result instead of looking up
    /// again.
    fn validate(&self, pos: Position) -> Result<Option<NodeId>, InvalidPosition> {
        match self.index.lookup(pos.id) {
            Lookup::Absent => Err(InvalidPosition { id: pos.id }),
            Lookup::Head => Ok(None),
            Lookup::Pred(pred) => Ok(Some(pred)),
        }
    }

    // Arena accessors for ids that passed validation or came from the chain.
    // Invariant: the index key set equals the arena key set.

    fn cell(&self, id: NodeId) -> &Node<T> {
        self.nodes.get(&id).expect("id in index but not in arena")
    }

    fn cell_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes.get_mut(&id).expect("id in index but not in arena")
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `pos` is foreign or stale.
    #[inline]
    pub fn get(&self, pos: Position) -> Result<&T, InvalidPosition> {
        self.validate(pos)?;
        Ok(&self.cell(pos.id).element)
    }

    /// Returns a mutable reference to the element at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `pos` is foreign or stale.
    #[inline]
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T, InvalidPosition> {
        self.validate(pos)?;
        Ok(&mut self.cell_mut(pos.id).element)
    }

    /// Returns the position after `pos`, or `None` if `pos` is the last.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `pos` is foreign or stale.
    #[inline]
    pub fn next(&self, pos: Position) -> Result<Option<Position>, InvalidPosition> {
        self.validate(pos)?;
        Ok(self.cell(pos.id).next.map(|id| Position { id }))
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Appends an element at the end. O(1) via the tail pointer.
    pub fn append(&mut self, element: T) -> Position {
        let id = NodeId::alloc();
        self.nodes.insert(id, Node::new(element, None));

        match self.tail {
            Some(tail) => {
                self.cell_mut(tail).next = Some(id);
                self.index.set(id, Some(tail));
            }
            None => {
                self.head = Some(id);
                self.index.set(id, None);
            }
        }

        self.tail = Some(id);
        self.len += 1;
        Position { id }
    }

    /// Inserts an element at the front. O(1).
    ///
    /// The old head's index entry is repointed at the new node; the new node
    /// takes over the head marker.
    pub fn prepend(&mut self, element: T) -> Position {
        let id = NodeId::alloc();
        let old_head = self.head;
        self.nodes.insert(id, Node::new(element, old_head));

        self.index.set(id, None);
        match old_head {
            Some(head) => self.index.set(head, Some(id)),
            None => self.tail = Some(id),
        }

        self.head = Some(id);
        self.len += 1;
        Position { id }
    }

    /// Inserts an element immediately after `pos`. O(1).
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `pos` is foreign or stale; the list is
    /// unchanged on error.
    pub fn insert_after(&mut self, pos: Position, element: T) -> Result<Position, InvalidPosition> {
        self.validate(pos)?;
        let at = pos.id;

        let id = NodeId::alloc();
        let succ = self.cell(at).next;
        self.nodes.insert(id, Node::new(element, succ));
        self.cell_mut(at).next = Some(id);

        self.index.set(id, Some(at));
        match succ {
            Some(succ) => self.index.set(succ, Some(id)),
            None => self.tail = Some(id),
        }

        self.len += 1;
        Ok(Position { id })
    }

    /// Inserts an element immediately before `pos`. O(1).
    ///
    /// The predecessor comes straight from the index; this is the operation
    /// the index exists for. Inserting before the head delegates to
    /// [`prepend`](Self::prepend) so the head fix-ups live in one place.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `pos` is foreign or stale; the list is
    /// unchanged on error.
    pub fn insert_before(
        &mut self,
        pos: Position,
        element: T,
    ) -> Result<Position, InvalidPosition> {
        let Some(pred) = self.validate(pos)? else {
            return Ok(self.prepend(element));
        };
        let at = pos.id;

        let id = NodeId::alloc();
        self.nodes.insert(id, Node::new(element, Some(at)));
        self.cell_mut(pred).next = Some(id);

        self.index.set(id, Some(pred));
        self.index.set(at, Some(id));

        self.len += 1;
        Ok(Position { id })
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the element at `pos` and returns it. O(1).
    ///
    /// Deleting the node's index entry is what makes every handle still
    /// wrapping it fail validation from now on.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if `pos` is foreign or stale; the list is
    /// unchanged on error.
    pub fn remove(&mut self, pos: Position) -> Result<T, InvalidPosition> {
        let pred = self.validate(pos)?;
        let target = pos.id;

        let node = self
            .nodes
            .remove(&target)
            .expect("id in index but not in arena");
        let succ = node.next;

        // Bypass the target in the chain
        match pred {
            Some(pred) => self.cell_mut(pred).next = succ,
            None => self.head = succ,
        }
        match succ {
            Some(succ) => self.index.set(succ, pred),
            None => self.tail = pred,
        }

        self.index.remove(target);
        self.len -= 1;
        Ok(node.element)
    }

    /// Removes all elements.
    ///
    /// Drops the chain wholesale; no per-node link walking.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    ///
    /// Lazy and restartable: each call starts a fresh traversal. The list
    /// cannot be mutated while an iterator borrows it.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Returns an iterator over positions, front to back.
    ///
    /// Useful when a traversal needs handles rather than elements, e.g. to
    /// splice relative to a node found by scanning.
    #[inline]
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
        }
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Checks the structural invariants, panicking on the first violation.
    ///
    /// Verified per call:
    /// - following `next` from head reaches tail in exactly `len` steps and
    ///   the chain is acyclic;
    /// - every chain node's index entry names its chain predecessor (head
    ///   marker for the head);
    /// - index size, arena size, and `len` agree;
    /// - an empty list has no head and no tail.
    ///
    /// Walks the chain once, O(n). For test and stress harnesses.
    pub fn assert_invariants(&self) {
        assert_eq!(self.index.len(), self.len, "index size != len");
        assert_eq!(self.nodes.len(), self.len, "arena size != len");

        if self.len == 0 {
            assert!(self.head.is_none(), "empty list has a head");
            assert!(self.tail.is_none(), "empty list has a tail");
            return;
        }

        let mut steps = 0usize;
        let mut pred: Option<NodeId> = None;
        let mut current = self.head;

        while let Some(id) = current {
            steps += 1;
            // With arena size == len, more than len steps means a cycle.
            assert!(steps <= self.len, "chain has a cycle");

            let entry = match self.index.lookup(id) {
                Lookup::Absent => panic!("chain node {id} missing from index"),
                Lookup::Head => None,
                Lookup::Pred(p) => Some(p),
            };
            assert_eq!(entry, pred, "index disagrees with chain at node {id}");

            let node = self.nodes.get(&id).expect("chain node missing from arena");
            if node.next.is_none() {
                assert_eq!(self.tail, Some(id), "tail does not name the last node");
            }

            pred = Some(id);
            current = node.next;
        }

        assert_eq!(steps, self.len, "chain length != len");
    }
}

impl<'a, T, P: PredIndex> IntoIterator for &'a PosList<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements, front to back.
pub struct Iter<'a, T> {
    nodes: &'a HashMap<NodeId, Node<T>>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.nodes.get(&id).expect("chain node missing from arena");
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.element)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator over positions in the list, front to back.
pub struct Positions<'a, T> {
    nodes: &'a HashMap<NodeId, Node<T>>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<T> Iterator for Positions<'_, T> {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.nodes.get(&id).expect("chain node missing from arena");
        self.current = node.next;
        self.remaining -= 1;
        Some(Position { id })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Positions<'_, T> {}
