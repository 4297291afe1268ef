//! Identity keys for list nodes.
//!
//! Every node is assigned a [`NodeId`] from a process-wide monotonic counter
//! at construction time. Ids are never reused, even after the node is removed
//! and its storage reclaimed. This is what makes stale handles permanently
//! detectable: a removed id is simply absent from the predecessor index
//! forever, and no later insertion — in this list or any other — can
//! resurrect it.
//!
//! Keying on an explicit counter rather than a memory address also keeps the
//! index correct across arbitrary insert/remove churn, where address-based
//! identity could collide with a recycled allocation.

use core::fmt;
use core::sync::atomic::{AtomicU64, Ordering};

/// Identity of a node for the lifetime of its list.
///
/// Ids are compared by value and are unique across all lists in the process,
/// so a handle issued by one list can never accidentally validate against
/// another. They carry no ordering meaning with respect to list position; an
/// id allocated later can end up anywhere in the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

// Process-wide allocator. A u64 does not run out; overflow is not handled.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

impl NodeId {
    /// Hands out the next id. Never returns the same id twice.
    #[inline]
    pub(crate) fn alloc() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
    /// Creates an id from a raw counter value.
    ///
    /// Mainly useful for tests that need handles no list ever issued; such
    /// ids fail validation on every operation that accepts a position.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_and_unique() {
        let a = NodeId::alloc();
        let b = NodeId::alloc();
        let c = NodeId::alloc();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(a.as_u64() < b.as_u64());
        assert!(b.as_u64() < c.as_u64());
    }

    #[test]
    fn from_raw_roundtrip() {
        for raw in [0u64, 1, 42, u64::MAX] {
            assert_eq!(NodeId::from_raw(raw).as_u64(), raw);
        }
    }
}
