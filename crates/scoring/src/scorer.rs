//! The dish scorer: fold independent rule outcomes into a scored dish.

use crate::matching::MatchFields;
use crate::rules::{AllergenRule, FavoriteIngredientsRule, HatedIngredientsRule, RestrictionRule};
use crate::traits::ScoringRule;
use menu_data::Dish;
use preferences::EffectiveProfile;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// Fallback reasoning line when no rule fired.
pub const GOOD_GENERAL_CHOICE: &str = "Good general choice";

/// A dish with its signed score and the reasoning behind it.
///
/// `reasoning` is non-empty by construction: every scored dish carries at
/// least the fallback line. Serializes as the flattened dish plus the two
/// derived fields, matching the recommendation response shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDish {
    #[serde(flatten)]
    pub dish: Dish,
    pub score: i32,
    pub reasoning: Vec<String>,
}

/// Scores one dish at a time against an effective profile.
///
/// Holds the rule set in its fixed evaluation order (favorites, hated,
/// allergens, restrictions). Each scoring call folds the rule outcomes
/// into a fresh `ScoredDish`; no state is shared between calls or dishes.
pub struct DishScorer {
    rules: Vec<Box<dyn ScoringRule>>,
}

impl DishScorer {
    /// Create a scorer with the standard rule set.
    pub fn new(fields: MatchFields) -> Self {
        Self {
            rules: vec![
                Box::new(FavoriteIngredientsRule::new(fields)),
                Box::new(HatedIngredientsRule),
                Box::new(AllergenRule),
                Box::new(RestrictionRule::new(fields)),
            ],
        }
    }

    /// Score a single dish.
    pub fn score(&self, dish: Dish, profile: &EffectiveProfile) -> ScoredDish {
        let mut score = 0;
        let mut reasoning = Vec::new();

        for rule in &self.rules {
            let outcome = rule.evaluate(&dish, profile);
            if !outcome.reasons.is_empty() {
                debug!(
                    rule = rule.name(),
                    dish = %dish.name,
                    delta = outcome.delta,
                    "Rule fired"
                );
            }
            score += outcome.delta;
            reasoning.extend(outcome.reasons);
        }

        if reasoning.is_empty() {
            reasoning.push(GOOD_GENERAL_CHOICE.to_string());
        }

        ScoredDish {
            dish,
            score,
            reasoning,
        }
    }

    /// Score a whole menu in parallel, preserving input order.
    pub fn score_menu(&self, dishes: Vec<Dish>, profile: &EffectiveProfile) -> Vec<ScoredDish> {
        dishes
            .into_par_iter()
            .map(|dish| self.score(dish, profile))
            .collect()
    }
}

impl Default for DishScorer {
    fn default() -> Self {
        Self::new(MatchFields::default())
    }
}
