//! Grudge memory: who fired a blank at whom.
//!
//! Keyed by victim, not by shooter: `grudges_of(x)` answers "who has wronged
//! x", which is the question the retaliation cascade asks. Entries are
//! inserted idempotently and never removed during a session - a grudge held
//! by an eliminated actor is simply never consulted again.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::ActorId;

/// Per-victim sets of actors who have fired a blank at them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GrudgeMemory {
    held: FxHashMap<ActorId, ImHashSet<ActorId>>,
}

impl GrudgeMemory {
    /// Create an empty memory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `shooter` fired a blank at `victim`.
    ///
    /// Idempotent: recording the same pair twice leaves one entry.
    pub fn record_blank(&mut self, victim: ActorId, shooter: ActorId) {
        self.held.entry(victim).or_default().insert(shooter);
    }

    /// Whether `victim` holds a grudge against `shooter`.
    #[must_use]
    pub fn holds(&self, victim: ActorId, shooter: ActorId) -> bool {
        self.held
            .get(&victim)
            .is_some_and(|set| set.contains(&shooter))
    }

    /// The set of actors `victim` holds grudges against, if any.
    #[must_use]
    pub fn grudges_of(&self, victim: ActorId) -> Option<&ImHashSet<ActorId>> {
        self.held.get(&victim)
    }

    /// Total number of victims with at least one grudge.
    #[must_use]
    pub fn victim_count(&self) -> usize {
        self.held.len()
    }

    /// Whether no grudges have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_query() {
        let mut memory = GrudgeMemory::new();
        assert!(memory.is_empty());

        memory.record_blank(ActorId::new(2), ActorId::new(0));

        assert!(memory.holds(ActorId::new(2), ActorId::new(0)));
        assert!(!memory.holds(ActorId::new(0), ActorId::new(2)));
        assert_eq!(memory.victim_count(), 1);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut memory = GrudgeMemory::new();

        memory.record_blank(ActorId::new(3), ActorId::new(1));
        memory.record_blank(ActorId::new(3), ActorId::new(1));

        assert_eq!(memory.grudges_of(ActorId::new(3)).unwrap().len(), 1);
    }

    #[test]
    fn test_keyed_by_victim() {
        let mut memory = GrudgeMemory::new();

        memory.record_blank(ActorId::new(2), ActorId::new(0));
        memory.record_blank(ActorId::new(2), ActorId::new(1));
        memory.record_blank(ActorId::new(4), ActorId::new(0));

        assert_eq!(memory.grudges_of(ActorId::new(2)).unwrap().len(), 2);
        assert_eq!(memory.grudges_of(ActorId::new(4)).unwrap().len(), 1);
        assert!(memory.grudges_of(ActorId::new(0)).is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut memory = GrudgeMemory::new();
        memory.record_blank(ActorId::new(1), ActorId::new(0));
        memory.record_blank(ActorId::new(1), ActorId::new(3));
        memory.record_blank(ActorId::new(2), ActorId::new(1));

        let json = serde_json::to_string(&memory).unwrap();
        let deserialized: GrudgeMemory = serde_json::from_str(&json).unwrap();

        assert_eq!(memory, deserialized);
    }
}
