//! Slot scoring rules and rule sets.
//!
//! Desirability of a candidate slot is the sum of an ordered list of
//! named, pure scoring rules evaluated against an immutable
//! [`ScoreContext`]. Each suggestion mode contributes one mode rule;
//! two universal rules (avoided-day penalty, mid-day bias) apply in
//! every mode.
//!
//! # Usage
//!
//! ```
//! use timetable_engine::models::{Day, Slot, SuggestionMode, SuggestionRequest, SuggestionScope};
//! use timetable_engine::scoring::{RuleSet, ScoreContext};
//! use chrono::NaiveTime;
//!
//! let slot = Slot::new(
//!     "s1",
//!     Day::Wed,
//!     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
//! );
//! let request = SuggestionRequest::new(SuggestionMode::Spread, SuggestionScope::Global);
//! let context = ScoreContext::build(&[slot.clone()], &[], &request);
//!
//! let rules = RuleSet::for_mode(request.mode);
//! // Empty timetable: neutral distance 7 * 3, no load, no bias at noon.
//! assert_eq!(rules.score(&slot, &context), 21.0);
//! ```

mod context;
pub mod rules;

pub use context::{ScoreContext, EMPTY_TIMETABLE_DISTANCE};

use std::fmt::Debug;
use std::sync::Arc;

use crate::models::{Slot, SuggestionMode};

/// Score contributed by one rule.
///
/// Higher = more desirable. Unclamped; may be negative.
pub type RuleScore = f64;

/// A named, pure scoring rule.
///
/// # Score Convention
/// **Higher score = more desirable slot.** Rules add their term to the
/// slot's total; they must be deterministic given identical inputs and
/// free of side effects.
pub trait ScoringRule: Send + Sync + Debug {
    /// Rule name (e.g., "SPREAD", "MIDDAY_BIAS").
    fn name(&self) -> &'static str;

    /// Evaluates this rule's term for a slot in the given context.
    fn evaluate(&self, slot: &Slot, context: &ScoreContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// An ordered list of scoring rules summed into a slot score.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn ScoringRule>>,
}

impl RuleSet {
    /// Creates an empty rule set (every slot scores 0).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule.
    pub fn with_rule<R: ScoringRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Builds the rule set for a suggestion mode.
    ///
    /// The mode rule (none for [`SuggestionMode::AvoidSpecific`]) is
    /// followed by the universal avoided-day penalty and mid-day bias.
    pub fn for_mode(mode: SuggestionMode) -> Self {
        let set = match mode {
            SuggestionMode::FewDays => Self::new().with_rule(rules::FewDays),
            SuggestionMode::Spread => Self::new().with_rule(rules::Spread),
            SuggestionMode::Mixed => Self::new().with_rule(rules::Mixed),
            SuggestionMode::LoadSpecific => Self::new().with_rule(rules::LoadSpecific),
            SuggestionMode::AvoidSpecific => Self::new(),
        };
        set.with_rule(rules::AvoidDayPenalty)
            .with_rule(rules::MiddayBias)
    }

    /// Sums all rule terms for a slot.
    pub fn score(&self, slot: &Slot, context: &ScoreContext) -> RuleScore {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(slot, context))
            .sum()
    }

    /// Evaluates a slot and returns each rule's term separately.
    pub fn evaluate(&self, slot: &Slot, context: &ScoreContext) -> Vec<RuleScore> {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(slot, context))
            .collect()
    }

    /// Number of rules in this set.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether this set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
