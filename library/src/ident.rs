use uuid::Uuid;

use crate::error::TimelineError;

/// Source of segment identifiers. Injected into the mutating operations so
/// hosts can substitute a deterministic provider in tests.
///
/// Identifiers are 128-bit values; on the wire they render in uuid "simple"
/// form (32 hex chars, no separators). A provider that cannot produce a value
/// must return `TimelineError::IdentityGeneration` — the enclosing operation
/// then fails without touching the timeline.
pub trait IdProvider {
    fn mint(&mut self) -> Result<Uuid, TimelineError>;
}

/// Production provider: uniform random v4 uuids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn mint(&mut self) -> Result<Uuid, TimelineError> {
        Ok(Uuid::new_v4())
    }
}

/// Deterministic provider for tests: counts up from zero.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIds {
    fn mint(&mut self) -> Result<Uuid, TimelineError> {
        let id = Uuid::from_u128(self.next);
        self.next += 1;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_pairwise_distinct() {
        let mut ids = RandomIds;
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(ids.mint().unwrap()));
        }
    }

    #[test]
    fn test_sequential_ids_are_predictable() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.mint().unwrap(), Uuid::from_u128(0));
        assert_eq!(ids.mint().unwrap(), Uuid::from_u128(1));
        assert_eq!(ids.mint().unwrap(), Uuid::from_u128(2));
    }
}
