//! Identifier generation port.

use crate::domain::EntryId;

/// Source of fresh, unique entry identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> EntryId;
}
