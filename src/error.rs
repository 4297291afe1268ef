//! Error types for position validation.

use core::fmt;

use crate::id::NodeId;

/// The supplied position does not belong to this list.
///
/// Raised by every operation that interprets a position, before any mutation
/// takes place: a failed call leaves the list untouched. Covers both foreign
/// handles (never issued by this list) and stale handles (the referenced node
/// has been removed). The two are deliberately not distinguished, since
/// telling them apart would require remembering removed ids forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition {
    /// Identity key the failed validation was performed with.
    pub id: NodeId,
}

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position {} does not belong to this list", self.id)
    }
}

impl std::error::Error for InvalidPosition {}
