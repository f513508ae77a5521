//! Store boundary.
//!
//! The engine reads snapshots of units, slots, and allocations from an
//! external store and proposes writes to it; it never owns that state.
//! The store is the authoritative enforcer of the one-allocation-per-
//! slot invariant — the gate's pre-check is a fast-fail, the store's
//! constraint is the second line of defense.
//!
//! [`MemoryStore`] is a thread-safe reference implementation used by
//! the gate tests; hosts backed by real persistence implement
//! [`TimetableStore`] themselves. The trait is synchronous; hosts with
//! async I/O can block inside their implementation.

use std::sync::Mutex;

use thiserror::Error;

use crate::models::{Allocation, Slot, Unit};

/// Errors from the external store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store's own uniqueness constraint rejected the write.
    #[error("slot {0} is already allocated")]
    SlotOccupied(String),

    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Backend failure (storage, network, lock poisoning).
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Durable store holding units, slots, and allocations.
///
/// Implementations must enforce slot uniqueness in `create_allocation`
/// even when the caller's pre-check was bypassed.
pub trait TimetableStore {
    /// Lists all units.
    fn list_units(&self) -> StoreResult<Vec<Unit>>;

    /// Lists all slots.
    fn list_slots(&self) -> StoreResult<Vec<Slot>>;

    /// Lists all allocations.
    fn list_allocations(&self) -> StoreResult<Vec<Allocation>>;

    /// Creates an allocation binding `unit_id` to `slot_id`.
    ///
    /// Fails with [`StoreError::SlotOccupied`] when the slot is already
    /// referenced by an allocation.
    fn create_allocation(&self, unit_id: &str, slot_id: &str) -> StoreResult<Allocation>;

    /// Deletes an allocation by id.
    fn delete_allocation(&self, allocation_id: &str) -> StoreResult<()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    allocations: Vec<Allocation>,
    next_id: u64,
}

/// In-memory store with the same invariants as a real backend.
///
/// Units and slots are fixed at construction (the engine never mutates
/// them); allocations live behind a mutex.
#[derive(Debug)]
pub struct MemoryStore {
    units: Vec<Unit>,
    slots: Vec<Slot>,
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    /// Creates a store over the given fixed units and slots.
    pub fn new(units: Vec<Unit>, slots: Vec<Slot>) -> Self {
        Self {
            units,
            slots,
            state: Mutex::new(MemoryState::default()),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".into()))
    }
}

impl TimetableStore for MemoryStore {
    fn list_units(&self) -> StoreResult<Vec<Unit>> {
        Ok(self.units.clone())
    }

    fn list_slots(&self) -> StoreResult<Vec<Slot>> {
        Ok(self.slots.clone())
    }

    fn list_allocations(&self) -> StoreResult<Vec<Allocation>> {
        Ok(self.lock()?.allocations.clone())
    }

    fn create_allocation(&self, unit_id: &str, slot_id: &str) -> StoreResult<Allocation> {
        if !self.units.iter().any(|u| u.id == unit_id) {
            return Err(StoreError::NotFound {
                kind: "unit",
                id: unit_id.to_string(),
            });
        }
        if !self.slots.iter().any(|s| s.id == slot_id) {
            return Err(StoreError::NotFound {
                kind: "slot",
                id: slot_id.to_string(),
            });
        }

        let mut state = self.lock()?;
        if state.allocations.iter().any(|a| a.slot_id == slot_id) {
            return Err(StoreError::SlotOccupied(slot_id.to_string()));
        }

        state.next_id += 1;
        let allocation = Allocation::new(format!("a{}", state.next_id), unit_id, slot_id);
        state.allocations.push(allocation.clone());
        Ok(allocation)
    }

    fn delete_allocation(&self, allocation_id: &str) -> StoreResult<()> {
        let mut state = self.lock()?;
        let before = state.allocations.len();
        state.allocations.retain(|a| a.id != allocation_id);
        if state.allocations.len() == before {
            return Err(StoreError::NotFound {
                kind: "allocation",
                id: allocation_id.to_string(),
            });
        }
        Ok(())
    }
}
