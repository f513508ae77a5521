//! Suggestion engine: candidate building, single-unit ranking, and
//! whole-timetable matching.
//!
//! All queries are pure functions over an immutable snapshot passed in
//! by the caller (units, slots, allocations). The engine never caches
//! state across calls; callers should re-read a fresh snapshot per
//! suggestion pass so occupancy is never stale. Results are advisory —
//! committing a suggestion goes through the allocation gate, which
//! re-checks occupancy at commit time.
//!
//! # Algorithm
//!
//! Single scope: build candidates, keep the top N (default 8).
//! Global scope: one candidate list per unallocated unit, resolved most
//! constrained first; see [`matcher`](self) module docs for the claim
//! walk and its deliberate fallback collision.

mod candidates;
mod matcher;
mod ranker;

pub use candidates::{build_candidates, Candidate};
pub use matcher::MatchEntry;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Allocation, Slot, SuggestionRequest, Unit};
use matcher::UnitCandidates;

/// Heuristic slot suggestion engine.
///
/// # Example
///
/// ```
/// use timetable_engine::models::{Day, Slot, SuggestionMode, SuggestionRequest, SuggestionScope, Unit};
/// use timetable_engine::suggest::SuggestionEngine;
/// use chrono::NaiveTime;
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let units = vec![Unit::new("u1").with_code("CS101"), Unit::new("u2").with_code("MA201")];
/// let slots = vec![
///     Slot::new("s1", Day::Mon, t(9), t(10)),
///     Slot::new("s2", Day::Tue, t(9), t(10)),
///     Slot::new("s3", Day::Wed, t(13), t(14)),
/// ];
/// let request = SuggestionRequest::new(SuggestionMode::FewDays, SuggestionScope::Global);
///
/// let engine = SuggestionEngine::new();
/// let matches = engine.match_globally(&request, &units, &slots, &[]).unwrap();
/// assert_eq!(matches.len(), 2);
/// assert!(matches.iter().all(|m| m.slot.is_some()));
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    top_n: usize,
}

impl SuggestionEngine {
    /// Creates an engine returning up to 8 ranked candidates.
    pub fn new() -> Self {
        Self { top_n: 8 }
    }

    /// Sets the ranked-list cap.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Ranks candidate slots for a single unit.
    ///
    /// Returns the top `top_n` candidates by score, each with its score
    /// rounded to one decimal place (half up). Fails with
    /// [`EngineError::NoUnitSelected`] when the request carries no
    /// target unit.
    ///
    /// Idempotent for an unchanged snapshot; the ranking is advisory
    /// and occupancy is re-checked when a suggestion is committed.
    pub fn rank_for_unit(
        &self,
        request: &SuggestionRequest,
        slots: &[Slot],
        allocations: &[Allocation],
    ) -> EngineResult<Vec<Candidate>> {
        let unit_id = request.unit_id.as_deref().ok_or(EngineError::NoUnitSelected)?;

        let candidates = build_candidates(slots, allocations, request);
        debug!(
            unit = %unit_id,
            mode = ?request.mode,
            candidates = candidates.len(),
            "ranked single-unit suggestions"
        );
        Ok(ranker::rank(candidates, self.top_n))
    }

    /// Matches every currently-unallocated unit to a suggested slot.
    ///
    /// One entry per unallocated unit, in most-constrained-first order.
    /// Fails with [`EngineError::NoUnallocatedUnits`] when every unit
    /// already holds an allocation.
    pub fn match_globally(
        &self,
        request: &SuggestionRequest,
        units: &[Unit],
        slots: &[Slot],
        allocations: &[Allocation],
    ) -> EngineResult<Vec<MatchEntry>> {
        let allocated: HashSet<&str> = allocations.iter().map(|a| a.unit_id.as_str()).collect();
        let unallocated: Vec<&Unit> = units
            .iter()
            .filter(|u| !allocated.contains(u.id.as_str()))
            .collect();
        if unallocated.is_empty() {
            return Err(EngineError::NoUnallocatedUnits);
        }

        debug!(
            units = unallocated.len(),
            mode = ?request.mode,
            "building whole-timetable suggestions"
        );

        // Filtering and scoring do not depend on which unit is asking,
        // so each unit sees the same pool for this pass.
        let entries: Vec<UnitCandidates> = unallocated
            .into_iter()
            .map(|u| UnitCandidates {
                unit: u.clone(),
                candidates: build_candidates(slots, allocations, request),
            })
            .collect();

        Ok(matcher::greedy_assign(entries))
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, SuggestionMode, SuggestionScope};
    use chrono::NaiveTime;

    fn slot(id: &str, day: Day, hour: u32) -> Slot {
        Slot::new(
            id,
            day,
            NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_rank_requires_unit() {
        let engine = SuggestionEngine::new();
        let request = SuggestionRequest::new(SuggestionMode::FewDays, SuggestionScope::Unit);

        let err = engine.rank_for_unit(&request, &[], &[]).unwrap_err();
        assert!(matches!(err, EngineError::NoUnitSelected));
    }

    #[test]
    fn test_rank_spread_prefers_distant_day() {
        // Mon 09:00 already allocated; candidates Mon/Thu/Tue 09:00.
        // Thu is the farthest from Monday and must rank first.
        let slots = vec![
            slot("mon", Day::Mon, 9),
            slot("thu", Day::Thu, 9),
            slot("tue", Day::Tue, 9),
        ];
        let allocations = vec![Allocation::new("a1", "unit-a", "mon")];
        let request = SuggestionRequest::new(SuggestionMode::Spread, SuggestionScope::Unit)
            .with_unit("unit-b");

        let engine = SuggestionEngine::new();
        let ranked = engine.rank_for_unit(&request, &slots, &allocations).unwrap();

        assert_eq!(ranked[0].slot.id, "thu");
        // dist 3 * 3 - load 0 - 0.1 * |12 - 9| = 8.7
        assert_eq!(ranked[0].score, 8.7);
    }

    #[test]
    fn test_rank_idempotent() {
        let slots = vec![slot("s1", Day::Mon, 9), slot("s2", Day::Wed, 13)];
        let allocations = vec![Allocation::new("a1", "u9", "s1")];
        let request = SuggestionRequest::new(SuggestionMode::Mixed, SuggestionScope::Unit)
            .with_unit("u1");
        let engine = SuggestionEngine::new();

        let first = engine.rank_for_unit(&request, &slots, &allocations).unwrap();
        let second = engine.rank_for_unit(&request, &slots, &allocations).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rank_caps_at_top_n() {
        let slots: Vec<Slot> = (0..12)
            .map(|i| slot(&format!("s{i}"), Day::ALL[i % 7], 9))
            .collect();
        let request = SuggestionRequest::new(SuggestionMode::FewDays, SuggestionScope::Unit)
            .with_unit("u1");

        let engine = SuggestionEngine::new();
        let ranked = engine.rank_for_unit(&request, &slots, &[]).unwrap();
        assert_eq!(ranked.len(), 8);

        let ranked3 = SuggestionEngine::new()
            .with_top_n(3)
            .rank_for_unit(&request, &slots, &[])
            .unwrap();
        assert_eq!(ranked3.len(), 3);
    }

    #[test]
    fn test_global_two_units_three_slots() {
        // Empty state, few-days mode: both units must get distinct,
        // non-null slots.
        let units = vec![Unit::new("u1"), Unit::new("u2")];
        let slots = vec![
            slot("mon", Day::Mon, 9),
            slot("tue", Day::Tue, 9),
            slot("wed", Day::Wed, 13),
        ];
        let request = SuggestionRequest::new(SuggestionMode::FewDays, SuggestionScope::Global);

        let engine = SuggestionEngine::new();
        let matches = engine.match_globally(&request, &units, &slots, &[]).unwrap();

        assert_eq!(matches.len(), 2);
        assert!(matches.iter().all(|m| m.slot.is_some()));
        let first = matches[0].slot.as_ref().unwrap().id.clone();
        let second = matches[1].slot.as_ref().unwrap().id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn test_global_skips_allocated_units() {
        let units = vec![Unit::new("done"), Unit::new("pending")];
        let slots = vec![slot("s1", Day::Mon, 9), slot("s2", Day::Tue, 9)];
        let allocations = vec![Allocation::new("a1", "done", "s1")];
        let request = SuggestionRequest::new(SuggestionMode::FewDays, SuggestionScope::Global);

        let engine = SuggestionEngine::new();
        let matches = engine
            .match_globally(&request, &units, &slots, &allocations)
            .unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].unit.id, "pending");
    }

    #[test]
    fn test_global_errors_when_nothing_unallocated() {
        let units = vec![Unit::new("u1")];
        let slots = vec![slot("s1", Day::Mon, 9)];
        let allocations = vec![Allocation::new("a1", "u1", "s1")];
        let request = SuggestionRequest::new(SuggestionMode::Spread, SuggestionScope::Global);

        let engine = SuggestionEngine::new();
        let err = engine
            .match_globally(&request, &units, &slots, &allocations)
            .unwrap_err();
        assert!(matches!(err, EngineError::NoUnallocatedUnits));
    }

    #[test]
    fn test_global_fallback_collision_surfaces() {
        // Two unallocated units, one free slot: the second entry must
        // still carry the contested slot (fallback rule), leaving the
        // collision for the gate to reject.
        let units = vec![Unit::new("u1"), Unit::new("u2")];
        let slots = vec![slot("only", Day::Mon, 9)];
        let request = SuggestionRequest::new(SuggestionMode::FewDays, SuggestionScope::Global);

        let engine = SuggestionEngine::new();
        let matches = engine.match_globally(&request, &units, &slots, &[]).unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].slot.as_ref().unwrap().id, "only");
        assert_eq!(matches[1].slot.as_ref().unwrap().id, "only");
    }
}
