//! Building the scorer-facing view of a stored profile.
//!
//! The stored `Profile` is what the diner edited; the `EffectiveProfile`
//! is what the scorer actually matches against. Construction gathers
//! everything once up front:
//! - collections are deduplicated case-insensitively, preserving first
//!   occurrence order (reasoning output order depends on term order, so it
//!   must be deterministic);
//! - recognized goals append their implied favorite and restriction terms;
//! - restriction terms naming a known ingredient category are widened into
//!   the category's specific members. Favorites are not widened.

use crate::categories::category_members;
use crate::goals::DietaryGoal;
use menu_data::Profile;
use std::collections::HashSet;
use tracing::debug;

/// The normalized, goal-expanded profile the scoring engine consumes.
///
/// All lists are ordered and deduplicated; terms keep the casing the diner
/// (or the goal table) wrote, since they are echoed back in reasoning text.
/// Matching lowercases at comparison time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveProfile {
    pub allergies: Vec<String>,
    pub restrictions: Vec<String>,
    pub hated_ingredients: Vec<String>,
    pub favorite_ingredients: Vec<String>,
    pub excluded_categories: Vec<String>,
}

/// Ordered, case-insensitive set used while assembling term lists.
#[derive(Default)]
struct TermList {
    terms: Vec<String>,
    seen: HashSet<String>,
}

impl TermList {
    fn push(&mut self, term: &str) {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.seen.insert(trimmed.to_lowercase()) {
            self.terms.push(trimmed.to_string());
        }
    }

    fn extend<'a>(&mut self, terms: impl IntoIterator<Item = &'a str>) {
        for term in terms {
            self.push(term);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.terms
    }
}

/// Build the effective profile for one scoring request.
///
/// Pure function of the stored profile; absent collections are already
/// empty by the time serde is done, and unknown goal strings are ignored.
pub fn build_effective_profile(profile: &Profile) -> EffectiveProfile {
    let goals: Vec<DietaryGoal> = profile
        .goals
        .iter()
        .filter_map(|g| DietaryGoal::parse(g))
        .collect();

    let mut favorites = TermList::default();
    favorites.extend(profile.favorite_ingredients.iter().map(String::as_str));
    for goal in &goals {
        favorites.extend(goal.implied_favorites().iter().copied());
    }

    let mut restrictions = TermList::default();
    restrictions.extend(profile.restrictions.iter().map(String::as_str));
    for goal in &goals {
        restrictions.extend(goal.implied_restrictions().iter().copied());
    }
    let restrictions = expand_restriction_categories(restrictions);

    let mut allergies = TermList::default();
    allergies.extend(profile.allergies.iter().map(String::as_str));

    let mut hated = TermList::default();
    hated.extend(profile.hated_ingredients.iter().map(String::as_str));

    let mut excluded = TermList::default();
    excluded.extend(profile.excluded_categories.iter().map(String::as_str));

    let effective = EffectiveProfile {
        allergies: allergies.into_vec(),
        restrictions: restrictions.into_vec(),
        hated_ingredients: hated.into_vec(),
        favorite_ingredients: favorites.into_vec(),
        excluded_categories: excluded.into_vec(),
    };

    debug!(
        favorites = effective.favorite_ingredients.len(),
        restrictions = effective.restrictions.len(),
        allergies = effective.allergies.len(),
        goals = goals.len(),
        "Built effective profile"
    );

    effective
}

/// Widen restriction terms that name an ingredient category.
///
/// The category term itself is kept (it may still substring-match, e.g.
/// "meat" in "meatballs"), followed by its specific members.
fn expand_restriction_categories(restrictions: TermList) -> TermList {
    let mut expanded = TermList::default();
    for term in restrictions.into_vec() {
        let members = category_members(&term);
        expanded.push(&term);
        if let Some(members) = members {
            expanded.extend(members.iter().copied());
        }
    }
    expanded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_builds_empty_effective_profile() {
        let effective = build_effective_profile(&Profile::default());
        assert_eq!(effective, EffectiveProfile::default());
    }

    #[test]
    fn copies_collections_in_order() {
        let profile = Profile {
            favorite_ingredients: vec!["chicken".into(), "rice".into()],
            hated_ingredients: vec!["olives".into()],
            allergies: vec!["nuts".into()],
            excluded_categories: vec!["dessert".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        assert_eq!(effective.favorite_ingredients, vec!["chicken", "rice"]);
        assert_eq!(effective.hated_ingredients, vec!["olives"]);
        assert_eq!(effective.allergies, vec!["nuts"]);
        assert_eq!(effective.excluded_categories, vec!["dessert"]);
    }

    #[test]
    fn dedup_is_case_insensitive_and_keeps_first() {
        let profile = Profile {
            favorite_ingredients: vec!["Chicken".into(), "chicken".into(), "rice".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        assert_eq!(effective.favorite_ingredients, vec!["Chicken", "rice"]);
    }

    #[test]
    fn blank_terms_are_dropped() {
        let profile = Profile {
            restrictions: vec!["  ".into(), "pork".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        assert_eq!(effective.restrictions, vec!["pork"]);
    }

    #[test]
    fn goals_append_implied_terms() {
        let profile = Profile {
            favorite_ingredients: vec!["chicken".into()],
            goals: vec!["high-protein".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        // Diner's own favorites come first, goal-implied terms after;
        // "chicken" is not duplicated.
        assert_eq!(
            effective.favorite_ingredients,
            vec!["chicken", "eggs", "oats", "yogurt"]
        );
    }

    #[test]
    fn unknown_goals_are_ignored() {
        let profile = Profile {
            goals: vec!["paleo".into(), "vegan".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        // Only the vegan goal contributed terms.
        assert!(effective.favorite_ingredients.contains(&"tofu".to_string()));
    }

    #[test]
    fn restriction_categories_are_widened() {
        let profile = Profile {
            restrictions: vec!["red meat".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        assert_eq!(effective.restrictions[0], "red meat");
        assert!(effective.restrictions.contains(&"beef".to_string()));
        assert!(effective.restrictions.contains(&"pork".to_string()));
        assert!(!effective.restrictions.contains(&"chicken".to_string()));
    }

    #[test]
    fn vegan_goal_restricts_specific_animal_products() {
        let profile = Profile {
            goals: vec!["vegan".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        assert!(effective.restrictions.contains(&"animal products".to_string()));
        assert!(effective.restrictions.contains(&"beef".to_string()));
        assert!(effective.restrictions.contains(&"cheese".to_string()));
    }

    #[test]
    fn favorites_are_not_category_widened() {
        let profile = Profile {
            favorite_ingredients: vec!["seafood".into()],
            ..Profile::default()
        };

        let effective = build_effective_profile(&profile);
        assert_eq!(effective.favorite_ingredients, vec!["seafood"]);
    }
}
