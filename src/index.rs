//! Predecessor index: the replacement for stored back-pointers.
//!
//! Nodes carry only a forward link, so "what precedes node X" is answered by
//! an auxiliary map from node identity to predecessor identity. The head's
//! entry is a distinguished head marker, which must stay distinguishable from
//! "not present at all": absence is how the list detects foreign and stale
//! positions.
//!
//! The index is a trait so the implementation can be swapped without changing
//! list behavior. [`MapIndex`] is the default; [`CountingIndex`] decorates
//! any index with access counters so harnesses can demonstrate that index
//! traffic per operation stays constant as the list grows.

use core::cell::Cell;
use std::collections::HashMap;

use crate::id::NodeId;

/// Result of a predecessor lookup.
///
/// The three states matter independently:
/// - [`Absent`](Lookup::Absent) means the id is not in the list at all
///   (foreign or already removed) — the validation failure signal.
/// - [`Head`](Lookup::Head) means the node is in the list and has no
///   predecessor.
/// - [`Pred`](Lookup::Pred) carries the predecessor's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// No entry for this id: the node is not a member of the list.
    Absent,
    /// The node is the head of the list.
    Head,
    /// The node's predecessor in the chain.
    Pred(NodeId),
}

/// Mapping from node identity to predecessor identity.
///
/// # Contract
///
/// The key set must equal exactly the set of nodes currently linked into the
/// owning list's chain. Entries are created when a node is linked in, updated
/// when its predecessor changes, and deleted when the node is removed. All
/// operations are O(1).
pub trait PredIndex {
    /// Looks up the entry for `id`.
    fn lookup(&self, id: NodeId) -> Lookup;

    /// Creates or replaces the entry for `id`. `None` marks the head.
    fn set(&mut self, id: NodeId, pred: Option<NodeId>);

    /// Deletes the entry for `id`. Returns `true` if one existed.
    fn remove(&mut self, id: NodeId) -> bool;

    /// Deletes all entries.
    fn clear(&mut self);

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` if the index has no entries.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// MapIndex - the default hash-backed implementation
// =============================================================================

/// Hash-map predecessor index. The default for [`PosList`](crate::PosList).
#[derive(Debug, Default)]
pub struct MapIndex {
    entries: HashMap<NodeId, Option<NodeId>>,
}

impl PredIndex for MapIndex {
    #[inline]
    fn lookup(&self, id: NodeId) -> Lookup {
        match self.entries.get(&id) {
            None => Lookup::Absent,
            Some(None) => Lookup::Head,
            Some(Some(pred)) => Lookup::Pred(*pred),
        }
    }

    #[inline]
    fn set(&mut self, id: NodeId, pred: Option<NodeId>) {
        self.entries.insert(id, pred);
    }

    #[inline]
    fn remove(&mut self, id: NodeId) -> bool {
        self.entries.remove(&id).is_some()
    }

    #[inline]
    fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// CountingIndex - instrumentation decorator
// =============================================================================

/// Access counts recorded by a [`CountingIndex`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexOps {
    /// Number of `lookup` calls.
    pub lookups: u64,
    /// Number of `set` calls.
    pub sets: u64,
    /// Number of `remove` calls.
    pub removes: u64,
}

impl IndexOps {
    /// Total accesses of any kind.
    #[inline]
    pub const fn total(&self) -> u64 {
        self.lookups + self.sets + self.removes
    }
}

/// Decorator that counts every access to an inner index.
///
/// Forwards all calls unchanged, so a list running over a counting index
/// behaves identically to one running over the inner index directly. Used by
/// the evidence harnesses: if the per-call counts stay flat while the list
/// grows, the operations are O(1) in index traffic.
///
/// # Example
///
/// ```
/// use poslist::{CountingIndex, MapIndex, PosList};
///
/// let mut list = PosList::with_index(CountingIndex::new(MapIndex::default()));
/// let pos = list.append(7u64);
///
/// list.index_mut().reset();
/// list.get(pos).unwrap();
/// assert_eq!(list.index().ops().lookups, 1);
/// ```
#[derive(Debug, Default)]
pub struct CountingIndex<I> {
    inner: I,
    // Cell because `lookup` is a shared-reference operation.
    ops: Cell<IndexOps>,
}

impl<I> CountingIndex<I> {
    /// Wraps an index, starting all counters at zero.
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            ops: Cell::new(IndexOps::default()),
        }
    }

    /// Returns the counts recorded so far.
    #[inline]
    pub fn ops(&self) -> IndexOps {
        self.ops.get()
    }

    /// Resets all counters to zero.
    #[inline]
    pub fn reset(&mut self) {
        self.ops.set(IndexOps::default());
    }

    /// Returns the counts and resets the counters in one step.
    #[inline]
    pub fn take_ops(&mut self) -> IndexOps {
        self.ops.replace(IndexOps::default())
    }

    /// Unwraps the inner index.
    pub fn into_inner(self) -> I {
        self.inner
    }

    #[inline]
    fn bump(&self, f: impl FnOnce(&mut IndexOps)) {
        let mut ops = self.ops.get();
        f(&mut ops);
        self.ops.set(ops);
    }
}

impl<I: PredIndex> PredIndex for CountingIndex<I> {
    #[inline]
    fn lookup(&self, id: NodeId) -> Lookup {
        self.bump(|ops| ops.lookups += 1);
        self.inner.lookup(id)
    }

    #[inline]
    fn set(&mut self, id: NodeId, pred: Option<NodeId>) {
        self.bump(|ops| ops.sets += 1);
        self.inner.set(id, pred);
    }

    #[inline]
    fn remove(&mut self, id: NodeId) -> bool {
        self.bump(|ops| ops.removes += 1);
        self.inner.remove(id)
    }

    #[inline]
    fn clear(&mut self) {
        self.inner.clear();
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}
