//! Allocation model.
//!
//! An allocation is a committed binding of one unit to one slot.
//! Invariant (system-wide, enforced by the store and re-checked by the
//! allocation gate): at most one allocation references a given slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A committed unit-to-slot binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Unique allocation identifier.
    pub id: String,
    /// The allocated unit.
    pub unit_id: String,
    /// The occupied slot.
    pub slot_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Allocation {
    /// Creates a new allocation stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        unit_id: impl Into<String>,
        slot_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            unit_id: unit_id.into(),
            slot_id: slot_id.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_new() {
        let alloc = Allocation::new("a1", "u1", "s1");
        assert_eq!(alloc.id, "a1");
        assert_eq!(alloc.unit_id, "u1");
        assert_eq!(alloc.slot_id, "s1");
        assert!(alloc.created_at <= Utc::now());
    }
}
