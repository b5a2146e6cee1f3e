//! Core traits for the dish pipeline.
//!
//! Two seams are defined here: `Filter`, which removes dishes before any
//! scoring happens, and `ScoringRule`, one independent scoring signal.

use anyhow::Result;
use menu_data::Dish;
use preferences::EffectiveProfile;

/// Core trait for filtering dishes ahead of scoring.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<Dish> and return a filtered Vec,
///   preserving the relative order of survivors
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of dishes.
    fn apply(&self, dishes: Vec<Dish>, profile: &EffectiveProfile) -> Result<Vec<Dish>>;
}

/// The contribution of one rule to one dish's score.
///
/// `reasons` carries one human-readable line per matched profile term;
/// `delta` is the signed score contribution. A rule that did not fire
/// returns zero delta and no reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub delta: i32,
    pub reasons: Vec<String>,
}

impl RuleOutcome {
    /// Outcome of a rule that did not fire.
    pub fn none() -> Self {
        Self {
            delta: 0,
            reasons: Vec::new(),
        }
    }
}

/// One independent scoring signal.
///
/// Rules are evaluated in a fixed order and must not share state: the
/// scorer folds their outcomes into the final score and reasoning list, so
/// each rule stays independently unit-testable.
pub trait ScoringRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Evaluate this rule for a single dish against the effective profile.
    fn evaluate(&self, dish: &Dish, profile: &EffectiveProfile) -> RuleOutcome;
}
