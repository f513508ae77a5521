//! Suggestion request model.
//!
//! A suggestion request is an explicit, immutable input bundle passed
//! into every engine query: mode, scope, prefer/avoid day sets, and the
//! target unit when the scope is single-unit. Requests are transient —
//! built by the caller, discarded after one suggestion pass.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Day;

/// Heuristic used to score candidate slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionMode {
    /// Group allocations onto as few days as possible.
    FewDays,
    /// Spread allocations as far apart across the week as possible.
    Spread,
    /// Balance grouping against spreading.
    Mixed,
    /// Load onto explicitly preferred days.
    LoadSpecific,
    /// No positive preference; keep the avoided days out.
    AvoidSpecific,
}

/// Whether a suggestion pass targets one unit or the whole timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionScope {
    /// Rank slots for a single selected unit.
    Unit,
    /// Match every currently-unallocated unit at once.
    Global,
}

/// Input bundle for one suggestion computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Scoring heuristic.
    pub mode: SuggestionMode,
    /// Single-unit or whole-timetable.
    pub scope: SuggestionScope,
    /// Target unit. Required when `scope` is [`SuggestionScope::Unit`].
    pub unit_id: Option<String>,
    /// Days to load onto (only [`SuggestionMode::LoadSpecific`] reads these).
    pub prefer_days: BTreeSet<Day>,
    /// Days excluded from the candidate pool and penalized in scoring.
    pub avoid_days: BTreeSet<Day>,
}

impl SuggestionRequest {
    /// Creates a request with empty day sets and no target unit.
    pub fn new(mode: SuggestionMode, scope: SuggestionScope) -> Self {
        Self {
            mode,
            scope,
            unit_id: None,
            prefer_days: BTreeSet::new(),
            avoid_days: BTreeSet::new(),
        }
    }

    /// Sets the target unit.
    pub fn with_unit(mut self, unit_id: impl Into<String>) -> Self {
        self.unit_id = Some(unit_id.into());
        self
    }

    /// Adds a preferred day.
    pub fn with_prefer_day(mut self, day: Day) -> Self {
        self.prefer_days.insert(day);
        self
    }

    /// Adds an avoided day.
    pub fn with_avoid_day(mut self, day: Day) -> Self {
        self.avoid_days.insert(day);
        self
    }
}
