//! Snapshot integrity checks.
//!
//! Verifies the structural integrity of a store snapshot before it is
//! fed to the suggestion engine. Detects:
//! - Duplicate unit/slot/allocation IDs and duplicate unit codes
//! - Two slots sharing the same day and time range
//! - Slots whose end time is not after their start time
//! - Allocations referencing unknown units or slots
//! - Two allocations occupying the same slot
//!
//! A well-behaved store never produces these, but the engine takes
//! snapshots from any `TimetableStore` implementation.

use std::collections::{HashMap, HashSet};

use crate::models::{Allocation, Slot, Unit};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// Two units share the same short code.
    DuplicateUnitCode,
    /// Two slots share the same day and time range.
    DuplicateSlotTime,
    /// A slot's end time is not after its start time.
    InvalidTimeRange,
    /// An allocation references a unit that doesn't exist.
    UnknownUnit,
    /// An allocation references a slot that doesn't exist.
    UnknownSlot,
    /// Two allocations reference the same slot.
    SlotDoubleBooked,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a store snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(
    units: &[Unit],
    slots: &[Slot],
    allocations: &[Allocation],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut unit_ids = HashSet::new();
    let mut unit_codes = HashSet::new();
    for unit in units {
        if !unit_ids.insert(unit.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate unit ID: {}", unit.id),
            ));
        }
        if !unit.code.is_empty() && !unit_codes.insert(unit.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateUnitCode,
                format!("Duplicate unit code: {}", unit.code),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    let mut slot_times = HashSet::new();
    for slot in slots {
        if !slot_ids.insert(slot.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot ID: {}", slot.id),
            ));
        }
        if !slot_times.insert((slot.day, slot.start_time, slot.end_time)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSlotTime,
                format!(
                    "Duplicate slot time: {} {}-{}",
                    slot.day, slot.start_time, slot.end_time
                ),
            ));
        }
        if slot.end_time <= slot.start_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Slot '{}' ends at or before it starts ({}-{})",
                    slot.id, slot.start_time, slot.end_time
                ),
            ));
        }
    }

    let mut allocation_ids = HashSet::new();
    let mut occupied_slots: HashMap<&str, &str> = HashMap::new();
    for allocation in allocations {
        if !allocation_ids.insert(allocation.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate allocation ID: {}", allocation.id),
            ));
        }
        if !unit_ids.contains(allocation.unit_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownUnit,
                format!(
                    "Allocation '{}' references unknown unit '{}'",
                    allocation.id, allocation.unit_id
                ),
            ));
        }
        if !slot_ids.contains(allocation.slot_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownSlot,
                format!(
                    "Allocation '{}' references unknown slot '{}'",
                    allocation.id, allocation.slot_id
                ),
            ));
        }
        if let Some(other) = occupied_slots.insert(allocation.slot_id.as_str(), allocation.id.as_str())
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotDoubleBooked,
                format!(
                    "Slot '{}' is referenced by allocations '{}' and '{}'",
                    allocation.slot_id, other, allocation.id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
