//! Core domain types for menu recommendation.
//!
//! This module defines the two records the whole engine operates on:
//! the diner's stored preference `Profile` and the parsed menu `Dish`.
//! Both arrive as JSON from outside collaborators (profile store, menu
//! parser), so the serde shapes here are the external contract.

use serde::{Deserialize, Serialize};

// =============================================================================
// Profile
// =============================================================================

/// A diner's stored food preferences and restrictions.
///
/// Every collection is optional in the stored JSON blob; a missing field
/// deserializes to an empty list. The scorer relies on that normalization
/// and never has to handle absent collections itself.
///
/// Field names in JSON are camelCase (`hatedIngredients`, ...) to match the
/// profile store's record format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    /// Absolute exclusion signals, matched against a dish's declared allergens.
    pub allergies: Vec<String>,
    /// Broader dietary/ingredient exclusions, matched against ingredients.
    pub restrictions: Vec<String>,
    /// Soft negative preference.
    pub hated_ingredients: Vec<String>,
    /// Soft positive preference.
    pub favorite_ingredients: Vec<String>,
    /// Named dietary goals ("vegan", "high-protein", ...). Expanded into
    /// implied favorites/restrictions upstream of scoring; the scorer never
    /// sees goal strings directly.
    pub goals: Vec<String>,
    /// Dish categories to drop entirely before scoring.
    pub excluded_categories: Vec<String>,
}

impl Profile {
    /// True when every collection is empty. Scoring such a profile yields
    /// score 0 and the "Good general choice" line for every dish.
    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty()
            && self.restrictions.is_empty()
            && self.hated_ingredients.is_empty()
            && self.favorite_ingredients.is_empty()
            && self.goals.is_empty()
            && self.excluded_categories.is_empty()
    }
}

// =============================================================================
// Dish
// =============================================================================

/// One menu item, as produced by the menu parser collaborator.
///
/// `name`, `ingredients`, `category`, `calories`, `allergens` and `tags` are
/// required in the input JSON; `description` and `probable_ingredients`
/// default to empty. `probable_ingredients` is display-only and must
/// round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Core ingredients, used for preference matching.
    pub ingredients: Vec<String>,
    /// Auxiliary guesses from the parser; not used in scoring.
    #[serde(default)]
    pub probable_ingredients: Vec<String>,
    /// Free-form category string (starter, main, dessert, beverage, side,
    /// other, ...). Kept as a string: exclusion is case-insensitive string
    /// matching over an open vocabulary.
    pub category: String,
    pub calories: u32,
    /// Declared allergen markers. Distinct from `ingredients` — allergy
    /// matching only ever looks here.
    pub allergens: Vec<String>,
    /// Cooking method and dietary markers ("spicy", "vegan", "fried", ...).
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_missing_fields_default_to_empty() {
        let profile: Profile = serde_json::from_str(r#"{"allergies":["nuts"]}"#).unwrap();

        assert_eq!(profile.allergies, vec!["nuts"]);
        assert!(profile.restrictions.is_empty());
        assert!(profile.hated_ingredients.is_empty());
        assert!(profile.favorite_ingredients.is_empty());
        assert!(profile.goals.is_empty());
        assert!(profile.excluded_categories.is_empty());
    }

    #[test]
    fn profile_uses_camel_case_keys() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "favoriteIngredients": ["chicken"],
                "hatedIngredients": ["olives"],
                "excludedCategories": ["dessert"]
            }"#,
        )
        .unwrap();

        assert_eq!(profile.favorite_ingredients, vec!["chicken"]);
        assert_eq!(profile.hated_ingredients, vec!["olives"]);
        assert_eq!(profile.excluded_categories, vec!["dessert"]);

        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("favoriteIngredients"));
        assert!(json.contains("excludedCategories"));
    }

    #[test]
    fn empty_object_is_empty_profile() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert!(profile.is_empty());
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn dish_requires_core_fields() {
        // Missing `ingredients` must fail the record, not silently default.
        let result: Result<Dish, _> = serde_json::from_str(
            r#"{"name":"Soup","category":"starter","calories":200,"allergens":[],"tags":[]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn dish_optional_fields_default() {
        let dish: Dish = serde_json::from_str(
            r#"{
                "name": "Soup",
                "ingredients": ["tomato"],
                "category": "starter",
                "calories": 200,
                "allergens": [],
                "tags": []
            }"#,
        )
        .unwrap();

        assert_eq!(dish.description, "");
        assert!(dish.probable_ingredients.is_empty());
    }

    #[test]
    fn probable_ingredients_round_trip() {
        let dish: Dish = serde_json::from_str(
            r#"{
                "name": "Pad Thai",
                "description": "Stir-fried noodles",
                "ingredients": ["rice noodles", "egg", "peanuts"],
                "probable_ingredients": ["fish sauce", "tamarind"],
                "category": "main",
                "calories": 650,
                "allergens": ["peanuts", "eggs"],
                "tags": ["spicy"]
            }"#,
        )
        .unwrap();

        let json = serde_json::to_string(&dish).unwrap();
        let back: Dish = serde_json::from_str(&json).unwrap();
        assert_eq!(back.probable_ingredients, vec!["fish sauce", "tamarind"]);
        assert_eq!(back, dish);
    }
}
