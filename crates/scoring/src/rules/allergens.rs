//! Allergen penalty.

use crate::matching::matched_terms;
use crate::rules::ALLERGEN_PENALTY;
use crate::traits::{RuleOutcome, ScoringRule};
use menu_data::Dish;
use preferences::EffectiveProfile;

/// −10 per distinct allergy matched against the dish's declared allergens.
///
/// Allergens are an explicitly declared set on the dish record; this rule
/// never falls back to scanning ingredients. The reasoning line carries a
/// warning marker so callers can surface it prominently.
pub struct AllergenRule;

impl ScoringRule for AllergenRule {
    fn name(&self) -> &str {
        "AllergenRule"
    }

    fn evaluate(&self, dish: &Dish, profile: &EffectiveProfile) -> RuleOutcome {
        let haystacks: Vec<&str> = dish.allergens.iter().map(String::as_str).collect();
        let matches = matched_terms(&profile.allergies, &haystacks);
        if matches.is_empty() {
            return RuleOutcome::none();
        }

        RuleOutcome {
            delta: matches.len() as i32 * ALLERGEN_PENALTY,
            reasons: matches
                .iter()
                .map(|term| format!("⚠️ Contains allergen: {term}"))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(ingredients: &[&str], allergens: &[&str]) -> Dish {
        Dish {
            name: "Test Dish".to_string(),
            description: String::new(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            probable_ingredients: Vec::new(),
            category: "main".to_string(),
            calories: 400,
            allergens: allergens.iter().map(|s| s.to_string()).collect(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn single_match_scores_minus_ten() {
        let profile = EffectiveProfile {
            allergies: vec!["nuts".to_string()],
            ..EffectiveProfile::default()
        };

        let outcome = AllergenRule.evaluate(&dish(&["pasta"], &["nuts"]), &profile);
        assert_eq!(outcome.delta, -10);
        assert_eq!(outcome.reasons, vec!["⚠️ Contains allergen: nuts"]);
    }

    #[test]
    fn ingredients_are_not_consulted() {
        let profile = EffectiveProfile {
            allergies: vec!["peanuts".to_string()],
            ..EffectiveProfile::default()
        };

        // Peanuts listed as an ingredient but not declared as an allergen:
        // the rule only trusts the declared set.
        let outcome = AllergenRule.evaluate(&dish(&["peanuts"], &[]), &profile);
        assert_eq!(outcome, RuleOutcome::none());
    }

    #[test]
    fn allergy_term_is_needle_in_declared_allergen() {
        let profile = EffectiveProfile {
            allergies: vec!["nut".to_string()],
            ..EffectiveProfile::default()
        };

        let outcome = AllergenRule.evaluate(&dish(&[], &["tree nuts"]), &profile);
        assert_eq!(outcome.delta, -10);
    }
}
