//! Unit (course) model.
//!
//! A unit is the thing being placed on the timetable: a course, class,
//! or recurring task. From the engine's viewpoint units are immutable —
//! the external store owns their lifecycle.

use serde::{Deserialize, Serialize};

/// A unit to be allocated to weekly slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique unit identifier.
    pub id: String,
    /// Short code (e.g., "CS101"). Unique per store.
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// Enrollment capacity. Zero = unbounded.
    pub capacity: u32,
}

impl Unit {
    /// Creates a new unit with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: String::new(),
            name: String::new(),
            capacity: 0,
        }
    }

    /// Sets the short code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the enrollment capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}
