//! Hated ingredient penalty.

use crate::matching::matched_terms;
use crate::rules::HATED_PENALTY;
use crate::traits::{RuleOutcome, ScoringRule};
use menu_data::Dish;
use preferences::EffectiveProfile;

/// −5 per distinct hated term found in the dish's ingredients.
///
/// Unlike favorites and restrictions, this rule never scans tags.
pub struct HatedIngredientsRule;

impl ScoringRule for HatedIngredientsRule {
    fn name(&self) -> &str {
        "HatedIngredientsRule"
    }

    fn evaluate(&self, dish: &Dish, profile: &EffectiveProfile) -> RuleOutcome {
        let haystacks: Vec<&str> = dish.ingredients.iter().map(String::as_str).collect();
        let matches = matched_terms(&profile.hated_ingredients, &haystacks);
        if matches.is_empty() {
            return RuleOutcome::none();
        }

        RuleOutcome {
            delta: matches.len() as i32 * HATED_PENALTY,
            reasons: matches
                .iter()
                .map(|term| format!("Contains ingredient you dislike: {term}"))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(ingredients: &[&str], tags: &[&str]) -> Dish {
        Dish {
            name: "Test Dish".to_string(),
            description: String::new(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            probable_ingredients: Vec::new(),
            category: "main".to_string(),
            calories: 400,
            allergens: Vec::new(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn single_match_scores_minus_five() {
        let profile = EffectiveProfile {
            hated_ingredients: vec!["olives".to_string()],
            ..EffectiveProfile::default()
        };

        let outcome = HatedIngredientsRule.evaluate(&dish(&["olives", "feta"], &[]), &profile);
        assert_eq!(outcome.delta, -5);
        assert_eq!(outcome.reasons, vec!["Contains ingredient you dislike: olives"]);
    }

    #[test]
    fn tags_are_never_scanned() {
        let profile = EffectiveProfile {
            hated_ingredients: vec!["cilantro".to_string()],
            ..EffectiveProfile::default()
        };

        let outcome = HatedIngredientsRule.evaluate(&dish(&["rice"], &["cilantro"]), &profile);
        assert_eq!(outcome, RuleOutcome::none());
    }
}
