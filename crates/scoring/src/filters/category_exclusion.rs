//! Filter to drop dishes in categories the diner excluded.
//!
//! Runs before scoring, so an excluded dessert never appears in results no
//! matter how favorably it would otherwise score.

use crate::traits::Filter;
use anyhow::Result;
use menu_data::Dish;
use preferences::EffectiveProfile;
use std::collections::HashSet;

/// Removes dishes whose category matches an excluded category.
///
/// ## Algorithm
/// Case-insensitive exact match between `dish.category` and any entry in
/// the profile's excluded categories. Survivor order is preserved; an empty
/// exclusion list is the identity.
pub struct CategoryExclusionFilter;

impl Filter for CategoryExclusionFilter {
    fn name(&self) -> &str {
        "CategoryExclusionFilter"
    }

    fn apply(&self, dishes: Vec<Dish>, profile: &EffectiveProfile) -> Result<Vec<Dish>> {
        if profile.excluded_categories.is_empty() {
            return Ok(dishes);
        }

        let excluded: HashSet<String> = profile
            .excluded_categories
            .iter()
            .map(|category| category.to_lowercase())
            .collect();

        let filtered = dishes
            .into_iter()
            .filter(|dish| !excluded.contains(&dish.category.to_lowercase()))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(name: &str, category: &str) -> Dish {
        Dish {
            name: name.to_string(),
            description: String::new(),
            ingredients: vec!["rice".to_string()],
            probable_ingredients: Vec::new(),
            category: category.to_string(),
            calories: 400,
            allergens: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn excluded_category_is_dropped() {
        let profile = EffectiveProfile {
            excluded_categories: vec!["dessert".to_string()],
            ..EffectiveProfile::default()
        };

        let dishes = vec![
            dish("Tiramisu", "dessert"),
            dish("Risotto", "main"),
            dish("Panna Cotta", "Dessert"),
        ];

        let filter = CategoryExclusionFilter;
        let filtered = filter.apply(dishes, &profile).unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Risotto");
    }

    #[test]
    fn match_is_case_insensitive_both_ways() {
        let profile = EffectiveProfile {
            excluded_categories: vec!["DESSERT".to_string()],
            ..EffectiveProfile::default()
        };

        let filtered = CategoryExclusionFilter
            .apply(vec![dish("Tiramisu", "dessert")], &profile)
            .unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn match_is_exact_not_substring() {
        let profile = EffectiveProfile {
            excluded_categories: vec!["main".to_string()],
            ..EffectiveProfile::default()
        };

        // "main course" is not the excluded category "main".
        let filtered = CategoryExclusionFilter
            .apply(vec![dish("Steak", "main course")], &profile)
            .unwrap();
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn empty_exclusions_is_identity() {
        let profile = EffectiveProfile::default();
        let dishes = vec![dish("A", "main"), dish("B", "dessert")];

        let filtered = CategoryExclusionFilter.apply(dishes.clone(), &profile).unwrap();
        assert_eq!(filtered, dishes);
    }

    #[test]
    fn survivor_order_is_preserved() {
        let profile = EffectiveProfile {
            excluded_categories: vec!["beverage".to_string()],
            ..EffectiveProfile::default()
        };

        let dishes = vec![
            dish("A", "main"),
            dish("B", "beverage"),
            dish("C", "starter"),
            dish("D", "main"),
        ];

        let filtered = CategoryExclusionFilter.apply(dishes, &profile).unwrap();
        let names: Vec<&str> = filtered.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C", "D"]);
    }
}
