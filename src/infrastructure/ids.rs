//! Document id generators

use crate::domain::{DocumentId, DocumentRecord, IdGenerator};
use uuid::Uuid;

/// Monotonic decimal ids
#[derive(Debug, Clone)]
pub struct CounterIds {
    next: u64,
}

impl CounterIds {
    pub fn new(start: u64) -> Self {
        CounterIds { next: start }
    }

    /// Continue after the highest numeric id in `documents`.
    /// Non-numeric ids are ignored.
    pub fn starting_after(documents: &[DocumentRecord]) -> Self {
        let highest = documents
            .iter()
            .filter_map(|doc| doc.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        CounterIds::new(highest.saturating_add(1))
    }
}

impl IdGenerator for CounterIds {
    fn next_id(&mut self) -> DocumentId {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        DocumentId::new(id.to_string())
    }
}

/// Random UUID v4 ids in 32-character lowercase hex form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> DocumentId {
        DocumentId::new(Uuid::new_v4().simple().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed_documents;

    #[test]
    fn test_counter_is_monotonic() {
        let mut ids = CounterIds::new(7);
        assert_eq!(ids.next_id().as_str(), "7");
        assert_eq!(ids.next_id().as_str(), "8");
        assert_eq!(ids.next_id().as_str(), "9");
    }

    #[test]
    fn test_counter_starts_after_seed() {
        let mut ids = CounterIds::starting_after(&seed_documents());
        assert_eq!(ids.next_id().as_str(), "5");
    }

    #[test]
    fn test_counter_starting_after_empty() {
        let mut ids = CounterIds::starting_after(&[]);
        assert_eq!(ids.next_id().as_str(), "1");
    }

    #[test]
    fn test_uuid_ids_are_canonical() {
        let mut ids = UuidIds;
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 32);
        assert!(a
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
