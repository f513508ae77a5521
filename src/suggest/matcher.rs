//! Global-scope greedy matcher.
//!
//! # Algorithm
//!
//! 1. One candidate list per unallocated unit.
//! 2. Units ordered by ascending candidate count (most constrained
//!    first), stable within equal counts.
//! 3. Walk the ordered units; each claims its best slot not yet claimed
//!    in this pass.
//! 4. When every candidate of a unit is already claimed, the unit falls
//!    back to its own top candidate regardless of claim status, so every
//!    unit gets some suggestion. The resulting list can therefore carry
//!    an internal collision; the allocation gate's per-entry re-check is
//!    what keeps a double booking from being committed.
//! 5. A unit with no candidates at all gets no slot and score 0.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::ranker::round_score;
use super::Candidate;
use crate::models::{Slot, Unit};

/// One unit's slice of a global suggestion batch.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEntry {
    /// The unit this entry suggests for.
    pub unit: Unit,
    /// Suggested slot. `None` when the unit had no candidates.
    pub slot: Option<Slot>,
    /// Rounded score of the suggested slot, 0 when there is none.
    pub score: f64,
}

/// A unit paired with its candidate list, pre-assignment.
#[derive(Debug, Clone)]
pub(crate) struct UnitCandidates {
    pub unit: Unit,
    pub candidates: Vec<Candidate>,
}

/// Assigns slots across units, most constrained first.
///
/// Output order is the most-constrained-first walk order, not input
/// order.
pub(crate) fn greedy_assign(mut entries: Vec<UnitCandidates>) -> Vec<MatchEntry> {
    // Stable sort: units with equally many options keep input order.
    entries.sort_by_key(|entry| entry.candidates.len());

    let mut claimed: HashSet<String> = HashSet::new();
    let mut results = Vec::with_capacity(entries.len());

    for entry in entries {
        let unclaimed = entry
            .candidates
            .iter()
            .position(|c| !claimed.contains(c.slot.id.as_str()));

        let pick = match unclaimed {
            Some(i) => Some(i),
            None if !entry.candidates.is_empty() => {
                // Permissive fallback: reuse the unit's own top candidate
                // even though an earlier unit already claimed it.
                let top = &entry.candidates[0];
                warn!(
                    unit = %entry.unit.id,
                    slot = %top.slot.id,
                    "all candidates claimed in this pass; suggesting contested top candidate"
                );
                Some(0)
            }
            None => None,
        };

        match pick {
            Some(i) => {
                let candidate = &entry.candidates[i];
                claimed.insert(candidate.slot.id.clone());
                let slot = candidate.slot.clone();
                let score = round_score(candidate.score);
                debug!(unit = %entry.unit.id, slot = %slot.id, score, "slot assigned");
                results.push(MatchEntry {
                    unit: entry.unit,
                    slot: Some(slot),
                    score,
                });
            }
            None => {
                debug!(unit = %entry.unit.id, "no candidates; entry left unassigned");
                results.push(MatchEntry {
                    unit: entry.unit,
                    slot: None,
                    score: 0.0,
                });
            }
        }
    }

    results
}
