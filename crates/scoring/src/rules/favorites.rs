//! Favorite ingredient bonus.

use crate::matching::{MatchFields, matched_terms};
use crate::rules::FAVORITE_BONUS;
use crate::traits::{RuleOutcome, ScoringRule};
use menu_data::Dish;
use preferences::EffectiveProfile;

/// +3 per distinct favorite term found in the dish.
///
/// Scans ingredients, or ingredients plus tags, depending on the
/// configured [`MatchFields`].
pub struct FavoriteIngredientsRule {
    fields: MatchFields,
}

impl FavoriteIngredientsRule {
    pub fn new(fields: MatchFields) -> Self {
        Self { fields }
    }
}

impl ScoringRule for FavoriteIngredientsRule {
    fn name(&self) -> &str {
        "FavoriteIngredientsRule"
    }

    fn evaluate(&self, dish: &Dish, profile: &EffectiveProfile) -> RuleOutcome {
        let haystacks = self.fields.dish_terms(dish);
        let matches = matched_terms(&profile.favorite_ingredients, &haystacks);
        if matches.is_empty() {
            return RuleOutcome::none();
        }

        RuleOutcome {
            delta: matches.len() as i32 * FAVORITE_BONUS,
            reasons: matches
                .iter()
                .map(|term| format!("Contains your favorite: {term}"))
                .collect(),
        }
    }
}
