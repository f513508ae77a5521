//! Engine error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by engine queries and the allocation gate.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Single-unit scope was requested without a target unit.
    #[error("no unit selected for single-unit suggestions")]
    NoUnitSelected,

    /// Global scope was requested but every unit is already allocated.
    #[error("no unallocated units available for whole-timetable suggestions")]
    NoUnallocatedUnits,

    /// The slot was occupied at commit time.
    #[error("slot {slot_id} is already occupied")]
    Clash { slot_id: String },

    /// The external store failed; propagated verbatim, never retried.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
