//! Random entry identifiers.

use crate::domain::EntryId;
use crate::port::outbound::IdGenerator;

/// [`IdGenerator`] backed by UUID v4.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> EntryId {
        EntryId::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_uuids() {
        let id = UuidIds.next_id();
        assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, UuidIds.next_id());
    }
}
