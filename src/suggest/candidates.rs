//! Candidate builder.
//!
//! Filters the slot pool down to slots eligible for suggestion and
//! scores them. Two filters apply: avoided days are removed outright,
//! and occupied slots (any slot referenced by an existing allocation,
//! system-wide) are removed. The avoided-day scoring penalty stays in
//! the rule set even though the filter already removes those slots;
//! it covers any comparison set where they re-enter consideration.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::{Allocation, Slot, SuggestionRequest};
use crate::scoring::{RuleSet, ScoreContext};

/// A scored, uncommitted slot proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    /// The proposed slot.
    pub slot: Slot,
    /// Desirability score. Higher = better.
    pub score: f64,
}

/// Builds the scored candidate list for one suggestion pass.
///
/// Returns candidates sorted by score descending. Ties keep the input
/// slot order (the sort is stable), so output is deterministic for a
/// given snapshot.
pub fn build_candidates(
    slots: &[Slot],
    allocations: &[Allocation],
    request: &SuggestionRequest,
) -> Vec<Candidate> {
    let context = ScoreContext::build(slots, allocations, request);
    let rules = RuleSet::for_mode(request.mode);
    let occupied: HashSet<&str> = allocations.iter().map(|a| a.slot_id.as_str()).collect();

    let mut candidates: Vec<Candidate> = slots
        .iter()
        .filter(|slot| !request.avoid_days.contains(&slot.day))
        .filter(|slot| !occupied.contains(slot.id.as_str()))
        .map(|slot| Candidate {
            score: rules.score(slot, &context),
            slot: slot.clone(),
        })
        .collect();

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}
