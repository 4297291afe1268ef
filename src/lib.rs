//! Positional list: O(1) access, insertion, and removal over singly linked
//! storage.
//!
//! The engineering problem: deliver doubly-linked-list performance guarantees
//! while each node stores only a forward link. The key move is an auxiliary
//! predecessor index — a map from node identity to predecessor identity —
//! kept transactionally consistent with the chain on every mutation:
//!
//! ```text
//! chain:   head ─► A ─► B ─► C ─► tail           (forward links only)
//! index:   {A: head-marker, B: A, C: B}          (answers "what precedes X")
//! ```
//!
//! Callers address elements through [`Position`] handles instead of integer
//! offsets or traversal. A position names one node for that node's entire
//! lifetime; once the node is removed the handle is permanently stale and
//! every operation rejects it with [`InvalidPosition`].
//!
//! # Identity, not addresses
//!
//! The index is keyed by [`NodeId`]: a monotonic, never-reused counter value
//! assigned at node construction. Duplicate elements stay distinguishable,
//! and a stale handle can never validate again no matter how much the list
//! churns afterwards, because no future node ever receives a retired id.
//!
//! # Quick start
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
//! assert_eq!(list.get(p20), Ok(&20));
//!
//! let p25 = list.insert_after(p20, 25).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20, 25, 30]);
//!
//! assert_eq!(list.remove(p25), Ok(25));
//! assert_eq!(list.remove(p10), Ok(10));
//! assert!(list.get(p10).is_err()); // stale handle stays rejected
//! ```
//!
//! # Operations
//!
//! | Operation | Cost | Notes |
//! |-----------|------|-------|
//! | `get`, `get_mut`, `next` | O(1) | one index lookup to validate |
//! | `append`, `prepend` | O(1) | via tail/head pointer |
//! | `insert_after`, `insert_before` | O(1) | splice plus bounded index fix-ups |
//! | `remove` | O(1) | predecessor from the index, no traversal |
//! | `clear` | O(1) link work | drops the arena wholesale |
//! | `iter`, `positions` | O(n) | lazy, restartable per call |
//!
//! # Instrumentation
//!
//! The predecessor index sits behind the [`PredIndex`] trait, so a
//! [`CountingIndex`] decorator can be slotted in to count index accesses per
//! call — the empirical O(1) witness used by the evidence tests and the
//! `perf_o1_cycles` demo. Swapping the index never changes list behavior.
//!
//! # Scope
//!
//! Single-threaded and in-memory. No interior locking: sharing a list across
//! threads requires external serialization of every call. No persistence, no
//! value ordering, no integer indexing.

#![warn(missing_docs)]

pub mod error;
pub mod id;
pub mod index;
pub mod list;
mod node;

pub use error::InvalidPosition;
pub use id::NodeId;
pub use index::{CountingIndex, IndexOps, Lookup, MapIndex, PredIndex};
pub use list::{Iter, PosList, Position, Positions};
