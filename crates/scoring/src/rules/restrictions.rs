//! Dietary restriction penalty.

use crate::matching::{MatchFields, matched_terms};
use crate::rules::RESTRICTION_PENALTY;
use crate::traits::{RuleOutcome, ScoringRule};
use menu_data::Dish;
use preferences::EffectiveProfile;

/// −10 per distinct restriction term found in the dish.
///
/// Scans ingredients, or ingredients plus tags, depending on the
/// configured [`MatchFields`]. The penalty constant is crate-local and
/// explicit; every scoring call gets the same value.
pub struct RestrictionRule {
    fields: MatchFields,
}

impl RestrictionRule {
    pub fn new(fields: MatchFields) -> Self {
        Self { fields }
    }
}

impl ScoringRule for RestrictionRule {
    fn name(&self) -> &str {
        "RestrictionRule"
    }

    fn evaluate(&self, dish: &Dish, profile: &EffectiveProfile) -> RuleOutcome {
        let haystacks = self.fields.dish_terms(dish);
        let matches = matched_terms(&profile.restrictions, &haystacks);
        if matches.is_empty() {
            return RuleOutcome::none();
        }

        RuleOutcome {
            delta: matches.len() as i32 * RESTRICTION_PENALTY,
            reasons: matches
                .iter()
                .map(|term| format!("May conflict with restriction: {term}"))
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

    fn profile(restrictions: &[&str]) -> EffectiveProfile {
        EffectiveProfile {
            restrictions: restrictions.iter().map(|s| s.to_string()).collect(),
            ..EffectiveProfile::default()
        }
    }

    #[test]
    fn single_match_scores_minus_ten() {
        let rule = RestrictionRule::new(MatchFields::IngredientsAndTags);
        let outcome = rule.evaluate(&dish(&["pork belly"], &[]), &profile(&["pork"]));

        assert_eq!(outcome.delta, -10);
        assert_eq!(outcome.reasons, vec!["May conflict with restriction: pork"]);
    }

    #[test]
    fn tag_match_depends_on_field_set() {
        let fried = dish(&["potato"], &["fried"]);

        let with_tags = RestrictionRule::new(MatchFields::IngredientsAndTags);
        assert_eq!(with_tags.evaluate(&fried, &profile(&["fried"])).delta, -10);

        let without_tags = RestrictionRule::new(MatchFields::IngredientsOnly);
        assert_eq!(without_tags.evaluate(&fried, &profile(&["fried"])), RuleOutcome::none());
    }

    #[test]
    fn distinct_terms_accumulate() {
        let rule = RestrictionRule::new(MatchFields::IngredientsAndTags);
        let outcome = rule.evaluate(
            &dish(&["beef", "bacon"], &["spicy"]),
            &profile(&["beef", "bacon", "spicy"]),
        );

        assert_eq!(outcome.delta, -30);
        assert_eq!(outcome.reasons.len(), 3);
    }
}
