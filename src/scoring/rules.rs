//! Built-in scoring rules.
//!
//! # Categories
//!
//! - **Mode rules**: `FewDays`, `Spread`, `Mixed`, `LoadSpecific` — exactly
//!   one applies per suggestion pass, selected by the request mode. The
//!   avoid-specific mode has no positive rule of its own.
//! - **Universal rules**: `AvoidDayPenalty`, `MiddayBias` — applied in
//!   every mode.
//!
//! # Score Convention
//! Higher score = more desirable slot. Scores are unclamped and may be
//! negative.

use chrono::Timelike;

use super::{RuleScore, ScoreContext, ScoringRule};
use crate::models::Slot;

// ======================== Mode rules ========================

/// Fewest-days grouping.
///
/// Rewards slots on days that already carry allocations, pulling new
/// allocations onto the days already in use:
/// `day_load * 2 + 10 if the day is occupied`.
#[derive(Debug, Clone, Copy)]
pub struct FewDays;

impl ScoringRule for FewDays {
    fn name(&self) -> &'static str {
        "FEW_DAYS"
    }

    fn evaluate(&self, slot: &Slot, context: &ScoreContext) -> RuleScore {
        let occupied_bonus = if context.is_occupied(slot.day) { 10.0 } else { 0.0 };
        f64::from(context.day_load(slot.day)) * 2.0 + occupied_bonus
    }

    fn description(&self) -> &'static str {
        "Group allocations onto as few days as possible"
    }
}

/// Maximum spread.
///
/// Rewards days far from every occupied day and penalizes already
/// loaded days: `min_day_distance * 3 - day_load`.
#[derive(Debug, Clone, Copy)]
pub struct Spread;

impl ScoringRule for Spread {
    fn name(&self) -> &'static str {
        "SPREAD"
    }

    fn evaluate(&self, slot: &Slot, context: &ScoreContext) -> RuleScore {
        f64::from(context.min_day_distance(slot.day)) * 3.0
            - f64::from(context.day_load(slot.day))
    }

    fn description(&self) -> &'static str {
        "Spread allocations as far apart as possible"
    }
}

/// Balance of grouping and spreading.
///
/// `6 if the day is occupied + min_day_distance`.
#[derive(Debug, Clone, Copy)]
pub struct Mixed;

impl ScoringRule for Mixed {
    fn name(&self) -> &'static str {
        "MIXED"
    }

    fn evaluate(&self, slot: &Slot, context: &ScoreContext) -> RuleScore {
        let occupied_bonus = if context.is_occupied(slot.day) { 6.0 } else { 0.0 };
        occupied_bonus + f64::from(context.min_day_distance(slot.day))
    }

    fn description(&self) -> &'static str {
        "Balance grouping against spreading"
    }
}

/// Explicit day preference.
///
/// `+30` on preferred days, `-50` on avoided days. The avoided-day term
/// here is in addition to the universal [`AvoidDayPenalty`].
#[derive(Debug, Clone, Copy)]
pub struct LoadSpecific;

impl ScoringRule for LoadSpecific {
    fn name(&self) -> &'static str {
        "LOAD_SPECIFIC"
    }

    fn evaluate(&self, slot: &Slot, context: &ScoreContext) -> RuleScore {
        let prefer = if context.is_preferred(slot.day) { 30.0 } else { 0.0 };
        let avoid = if context.is_avoided(slot.day) { 50.0 } else { 0.0 };
        prefer - avoid
    }

    fn description(&self) -> &'static str {
        "Load onto explicitly preferred days"
    }
}

// ======================== Universal rules ========================

/// Hard-soft avoided-day penalty.
///
/// `-1000` on avoided days: large enough to dominate every other term
/// without being an outright exclusion. The candidate builder also
/// pre-filters avoided days; this rule matters for any comparison set
/// where avoided-day slots re-enter consideration.
#[derive(Debug, Clone, Copy)]
pub struct AvoidDayPenalty;

impl ScoringRule for AvoidDayPenalty {
    fn name(&self) -> &'static str {
        "AVOID_DAY"
    }

    fn evaluate(&self, slot: &Slot, context: &ScoreContext) -> RuleScore {
        if context.is_avoided(slot.day) {
            -1000.0
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Dominant penalty on avoided days"
    }
}

/// Mild bias toward mid-day slots.
///
/// `-0.1 * |12 - start hour|`, so a 12:00 slot loses nothing and an
/// 08:00 or 16:00 slot loses 0.4.
#[derive(Debug, Clone, Copy)]
pub struct MiddayBias;

impl ScoringRule for MiddayBias {
    fn name(&self) -> &'static str {
        "MIDDAY_BIAS"
    }

    fn evaluate(&self, slot: &Slot, _context: &ScoreContext) -> RuleScore {
        -0.1 * (12.0 - f64::from(slot.start_time.hour())).abs()
    }

    fn description(&self) -> &'static str {
        "Mild preference for mid-day start times"
    }
}
