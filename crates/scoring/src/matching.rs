//! Case-insensitive substring matching between profile and dish terms.
//!
//! The profile term is the needle, the dish term is the haystack: profile
//! "egg" matches dish ingredient "eggs" or "egg yolk", but not the other
//! way around. This is a deliberate, simple heuristic — no tokenizing, no
//! stemming, no fuzzy matching — so scoring stays reproducible.

use menu_data::Dish;

/// Which dish fields the favorite and restriction rules scan.
///
/// The matching rule changed over time: originally only `ingredients`,
/// later `ingredients` plus `tags` (so a restriction like "fried" catches a
/// dish tagged "fried" with no fried ingredient listed). Both variants are
/// supported; `IngredientsAndTags` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchFields {
    IngredientsOnly,
    #[default]
    IngredientsAndTags,
}

impl MatchFields {
    /// The haystack terms of a dish under this field set.
    pub fn dish_terms<'a>(&self, dish: &'a Dish) -> Vec<&'a str> {
        let ingredients = dish.ingredients.iter().map(String::as_str);
        match self {
            MatchFields::IngredientsOnly => ingredients.collect(),
            MatchFields::IngredientsAndTags => {
                ingredients.chain(dish.tags.iter().map(String::as_str)).collect()
            }
        }
    }
}

/// Collect the profile terms that match at least one dish term.
///
/// Each profile term is returned at most once, in profile order, no matter
/// how many dish terms contain it — duplicate hits never multiply a score.
pub fn matched_terms<'a>(profile_terms: &'a [String], dish_terms: &[&str]) -> Vec<&'a str> {
    let haystacks: Vec<String> = dish_terms.iter().map(|t| t.to_lowercase()).collect();

    profile_terms
        .iter()
        .filter(|term| {
            let needle = term.to_lowercase();
            haystacks.iter().any(|haystack| haystack.contains(&needle))
        })
        .map(String::as_str)
        .collect()
}
