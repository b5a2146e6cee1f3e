//! # Preferences Crate
//!
//! Turns a stored diner [`Profile`](menu_data::Profile) into the
//! [`EffectiveProfile`] the scoring engine matches against.
//!
//! ## Components
//!
//! ### Effective profile builder
//! Gathers everything once up front: defaults, case-insensitive dedup,
//! goal expansion and restriction category widening. The scorer never
//! re-derives any of this per dish.
//!
//! ### Goal table
//! Fixed mapping from the dietary goal vocabulary (healthy, vegan, keto,
//! ...) to implied favorite/restriction terms.
//!
//! ### Ingredient categories
//! "red meat" → beef, pork, lamb, ... so category-level restrictions catch
//! specific menu ingredients under substring matching.
//!
//! ### Presets
//! Built-in profiles (child, vegan, sensitive-eater, ...) usable in place
//! of a stored profile file.
//!
//! ## Example Usage
//!
//! ```ignore
//! use preferences::build_effective_profile;
//!
//! let profile = menu_data::load_profile(path)?;
//! let effective = build_effective_profile(&profile);
//! ```

// Public modules
pub mod categories;
pub mod effective;
pub mod goals;
pub mod presets;

// Re-export commonly used types
pub use categories::{INGREDIENT_CATEGORIES, category_members};
pub use effective::{EffectiveProfile, build_effective_profile};
pub use goals::DietaryGoal;
pub use presets::{PRESET_NAMES, preset};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_expands_through_effective_profile() {
        let profile = preset("vegan").unwrap();
        let effective = build_effective_profile(&profile);

        // Stored restrictions stay in front, goal-derived expansion follows.
        assert_eq!(effective.restrictions[0], "pork");
        assert!(effective.restrictions.contains(&"cheese".to_string()));
        assert!(effective.favorite_ingredients.contains(&"tofu".to_string()));
    }
}
