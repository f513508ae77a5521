//! Allocation gate.
//!
//! The invariant-enforcing boundary between suggestions and committed
//! allocations. Every commit re-reads the store's current allocation
//! list immediately before writing — never a cached candidate list —
//! so state drift between suggestion generation and acceptance is
//! caught here. The store's own uniqueness constraint remains the
//! authoritative check behind this one.

use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::Allocation;
use crate::store::{StoreError, TimetableStore};
use crate::suggest::{Candidate, MatchEntry};

/// Outcome of one entry in a batch commit.
#[derive(Debug, Clone)]
pub enum CommitOutcome {
    /// The allocation was created.
    Committed(Allocation),
    /// The matcher produced no slot for this unit.
    NoSuggestion,
    /// The slot was occupied at commit time.
    SlotOccupied,
    /// The store failed for this entry.
    Failed(String),
}

/// Per-entry result of a batch commit.
#[derive(Debug, Clone)]
pub struct BatchEntryResult {
    /// The unit the entry was for.
    pub unit_id: String,
    /// The slot the entry proposed, if any.
    pub slot_id: Option<String>,
    /// What happened.
    pub outcome: CommitOutcome,
}

impl BatchEntryResult {
    /// Whether this entry resulted in a committed allocation.
    pub fn is_committed(&self) -> bool {
        matches!(self.outcome, CommitOutcome::Committed(_))
    }
}

/// Clash-checking commit boundary over a [`TimetableStore`].
pub struct AllocationGate<'a, S: TimetableStore> {
    store: &'a S,
}

impl<'a, S: TimetableStore> AllocationGate<'a, S> {
    /// Creates a gate over the given store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Commits a unit to a slot if the slot is free right now.
    ///
    /// Reads a fresh allocation snapshot first; on a clash the store is
    /// never called and no state changes.
    pub fn commit(&self, unit_id: &str, slot_id: &str) -> EngineResult<Allocation> {
        let allocations = self.store.list_allocations()?;
        if allocations.iter().any(|a| a.slot_id == slot_id) {
            warn!(%unit_id, %slot_id, "clash at commit time; refusing allocation");
            return Err(EngineError::Clash {
                slot_id: slot_id.to_string(),
            });
        }

        let allocation = self.store.create_allocation(unit_id, slot_id)?;
        debug!(%unit_id, %slot_id, allocation = %allocation.id, "allocation committed");
        Ok(allocation)
    }

    /// Commits the rank-0 candidate of a ranking ("apply top suggestion").
    ///
    /// Returns `Ok(None)` when the ranking is empty.
    pub fn commit_top(
        &self,
        unit_id: &str,
        ranking: &[Candidate],
    ) -> EngineResult<Option<Allocation>> {
        match ranking.first() {
            Some(top) => self.commit(unit_id, &top.slot.id).map(Some),
            None => Ok(None),
        }
    }

    /// Commits a whole matcher batch, strictly in its output order.
    ///
    /// Occupancy is re-validated per entry, not once for the batch, so
    /// earlier entries claiming a slot make later colliding entries
    /// fail cleanly. Failures never abort the batch; the full list of
    /// per-entry outcomes is returned.
    pub fn commit_all(&self, entries: &[MatchEntry]) -> Vec<BatchEntryResult> {
        entries
            .iter()
            .map(|entry| {
                let slot_id = entry.slot.as_ref().map(|s| s.id.clone());
                let outcome = match &entry.slot {
                    None => CommitOutcome::NoSuggestion,
                    Some(slot) => match self.commit(&entry.unit.id, &slot.id) {
                        Ok(allocation) => CommitOutcome::Committed(allocation),
                        Err(EngineError::Clash { .. })
                        | Err(EngineError::Store(StoreError::SlotOccupied(_))) => {
                            CommitOutcome::SlotOccupied
                        }
                        Err(other) => CommitOutcome::Failed(other.to_string()),
                    },
                };
                BatchEntryResult {
                    unit_id: entry.unit.id.clone(),
                    slot_id,
                    outcome,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, Slot, Unit};
    use crate::store::MemoryStore;
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn store() -> MemoryStore {
        MemoryStore::new(
            vec![Unit::new("u1"), Unit::new("u2"), Unit::new("u3")],
            vec![
                Slot::new("s1", Day::Mon, t(9), t(10)),
                Slot::new("s2", Day::Tue, t(9), t(10)),
            ],
        )
    }

    fn entry(unit_id: &str, slot: Option<Slot>) -> MatchEntry {
        MatchEntry {
            unit: Unit::new(unit_id),
            slot,
            score: 1.0,
        }
    }

    #[test]
    fn test_commit_success() {
        let store = store();
        let gate = AllocationGate::new(&store);

        let alloc = gate.commit("u1", "s1").unwrap();
        assert_eq!(alloc.unit_id, "u1");
        assert_eq!(store.list_allocations().unwrap().len(), 1);
    }

    #[test]
    fn test_commit_clash_leaves_state_unchanged() {
        let store = store();
        let gate = AllocationGate::new(&store);
        gate.commit("u1", "s1").unwrap();

        let err = gate.commit("u2", "s1").unwrap_err();
        assert!(matches!(err, EngineError::Clash { slot_id } if slot_id == "s1"));
        assert_eq!(store.list_allocations().unwrap().len(), 1);
    }

    #[test]
    fn test_commit_sees_writes_behind_its_back() {
        // An allocation created directly on the store, after any
        // suggestions were computed, must still be seen by the gate.
        let store = store();
        store.create_allocation("u1", "s1").unwrap();

        let gate = AllocationGate::new(&store);
        assert!(matches!(
            gate.commit("u2", "s1").unwrap_err(),
            EngineError::Clash { .. }
        ));
    }

    #[test]
    fn test_no_two_allocations_share_a_slot() {
        let store = store();
        let gate = AllocationGate::new(&store);
        gate.commit("u1", "s1").unwrap();
        gate.commit("u2", "s2").unwrap();
        let _ = gate.commit("u3", "s1");
        let _ = gate.commit("u3", "s2");

        let allocations = store.list_allocations().unwrap();
        let mut slot_ids: Vec<&str> = allocations.iter().map(|a| a.slot_id.as_str()).collect();
        slot_ids.sort_unstable();
        slot_ids.dedup();
        assert_eq!(slot_ids.len(), allocations.len());
    }

    #[test]
    fn test_commit_top() {
        let store = store();
        let gate = AllocationGate::new(&store);
        let ranking = vec![
            Candidate {
                slot: Slot::new("s2", Day::Tue, t(9), t(10)),
                score: 5.0,
            },
            Candidate {
                slot: Slot::new("s1", Day::Mon, t(9), t(10)),
                score: 3.0,
            },
        ];

        let alloc = gate.commit_top("u1", &ranking).unwrap().unwrap();
        assert_eq!(alloc.slot_id, "s2");
    }

    #[test]
    fn test_commit_top_empty_is_noop() {
        let store = store();
        let gate = AllocationGate::new(&store);
        assert!(gate.commit_top("u1", &[]).unwrap().is_none());
        assert!(store.list_allocations().unwrap().is_empty());
    }

    #[test]
    fn test_commit_all_continues_past_failures() {
        let store = store();
        let gate = AllocationGate::new(&store);

        // Second entry collides with the first (matcher fallback case),
        // third has no suggestion, fourth is fine.
        let entries = vec![
            entry("u1", Some(Slot::new("s1", Day::Mon, t(9), t(10)))),
            entry("u2", Some(Slot::new("s1", Day::Mon, t(9), t(10)))),
            entry("u3", None),
            entry("u2", Some(Slot::new("s2", Day::Tue, t(9), t(10)))),
        ];

        let results = gate.commit_all(&entries);
        assert_eq!(results.len(), 4);
        assert!(results[0].is_committed());
        assert!(matches!(results[1].outcome, CommitOutcome::SlotOccupied));
        assert!(matches!(results[2].outcome, CommitOutcome::NoSuggestion));
        assert!(results[3].is_committed());

        assert_eq!(store.list_allocations().unwrap().len(), 2);
    }

    #[test]
    fn test_commit_all_reports_store_failures() {
        let store = store();
        let gate = AllocationGate::new(&store);

        // Unknown slot id: the pre-check passes (nothing occupies it)
        // but the store's write fails, and that failure is recorded
        // rather than raised.
        let entries = vec![entry("u1", Some(Slot::new("ghost", Day::Mon, t(9), t(10))))];
        let results = gate.commit_all(&entries);
        assert!(matches!(results[0].outcome, CommitOutcome::Failed(_)));
    }
}
