//! Score context for rule evaluation.

use std::collections::HashMap;

use crate::models::{Allocation, Day, Slot, SuggestionRequest};

/// Distance reported when no day is occupied yet.
///
/// Deliberately one past the largest real distance (6) so an empty
/// timetable is neutral for every day.
pub const EMPTY_TIMETABLE_DISTANCE: u32 = 7;

/// Immutable allocation-state derivatives passed to scoring rules.
///
/// Built once per suggestion pass from a snapshot of the store's
/// allocation list; never cached across passes. Allocations whose slot
/// id is unknown contribute nothing (validation reports them).
#[derive(Debug, Clone, Default)]
pub struct ScoreContext {
    /// Allocation count per day, indexed by `Day::index()`.
    day_load: [u32; 7],
    /// Days holding at least one allocation.
    occupied_days: [bool; 7],
    /// Days the caller wants to load onto.
    prefer_days: [bool; 7],
    /// Days the caller wants kept free.
    avoid_days: [bool; 7],
}

impl ScoreContext {
    /// Builds a context from an allocation snapshot and a request.
    pub fn build(slots: &[Slot], allocations: &[Allocation], request: &SuggestionRequest) -> Self {
        let day_of: HashMap<&str, Day> = slots.iter().map(|s| (s.id.as_str(), s.day)).collect();

        let mut context = Self::default();
        for allocation in allocations {
            if let Some(&day) = day_of.get(allocation.slot_id.as_str()) {
                context.day_load[day.index()] += 1;
                context.occupied_days[day.index()] = true;
            }
        }
        for &day in &request.prefer_days {
            context.prefer_days[day.index()] = true;
        }
        for &day in &request.avoid_days {
            context.avoid_days[day.index()] = true;
        }
        context
    }

    /// Creates an empty context (no allocations, no day preferences).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Marks one allocation on `day`.
    pub fn with_allocation_on(mut self, day: Day) -> Self {
        self.day_load[day.index()] += 1;
        self.occupied_days[day.index()] = true;
        self
    }

    /// Marks a preferred day.
    pub fn with_prefer(mut self, day: Day) -> Self {
        self.prefer_days[day.index()] = true;
        self
    }

    /// Marks an avoided day.
    pub fn with_avoid(mut self, day: Day) -> Self {
        self.avoid_days[day.index()] = true;
        self
    }

    /// Number of allocations on `day`.
    #[inline]
    pub fn day_load(&self, day: Day) -> u32 {
        self.day_load[day.index()]
    }

    /// Whether `day` holds at least one allocation.
    #[inline]
    pub fn is_occupied(&self, day: Day) -> bool {
        self.occupied_days[day.index()]
    }

    /// Whether `day` is in the request's preferred set.
    #[inline]
    pub fn is_preferred(&self, day: Day) -> bool {
        self.prefer_days[day.index()]
    }

    /// Whether `day` is in the request's avoided set.
    #[inline]
    pub fn is_avoided(&self, day: Day) -> bool {
        self.avoid_days[day.index()]
    }

    /// Minimum ordinal distance from `day` to any occupied day.
    ///
    /// Returns [`EMPTY_TIMETABLE_DISTANCE`] when nothing is occupied.
    pub fn min_day_distance(&self, day: Day) -> u32 {
        Day::ALL
            .iter()
            .filter(|d| self.occupied_days[d.index()])
            .map(|&d| day.distance(d))
            .min()
            .unwrap_or(EMPTY_TIMETABLE_DISTANCE)
    }
}
