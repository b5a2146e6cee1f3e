//! Built-in preset profiles.
//!
//! Ready-made starting points for common diner types, selectable by name
//! from the CLI instead of a stored profile file.

use menu_data::Profile;

/// Names of the built-in presets, in display order.
pub const PRESET_NAMES: &[&str] = &[
    "child",
    "balanced-adult",
    "fitness-enthusiast",
    "vegetarian",
    "vegan",
    "sensitive-eater",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Look up a preset profile by its kebab-case name, case-insensitively.
pub fn preset(name: &str) -> Option<Profile> {
    let profile = match name.to_lowercase().as_str() {
        "child" => Profile {
            allergies: strings(&["nuts"]),
            restrictions: strings(&["spicy", "alcohol"]),
            favorite_ingredients: strings(&["pasta", "chicken", "cheese"]),
            goals: strings(&["healthy"]),
            ..Profile::default()
        },
        "balanced-adult" => Profile {
            favorite_ingredients: strings(&["chicken", "rice", "vegetables"]),
            goals: strings(&["healthy"]),
            ..Profile::default()
        },
        "fitness-enthusiast" => Profile {
            restrictions: strings(&["alcohol"]),
            favorite_ingredients: strings(&["eggs", "chicken", "oats", "yogurt"]),
            goals: strings(&["high-protein", "low-carb", "healthy"]),
            ..Profile::default()
        },
        "vegetarian" => Profile {
            restrictions: strings(&["pork", "beef", "fish"]),
            favorite_ingredients: strings(&["tofu", "lentils", "spinach", "mushrooms"]),
            goals: strings(&["vegetarian", "healthy"]),
            ..Profile::default()
        },
        "vegan" => Profile {
            restrictions: strings(&["pork", "beef", "fish", "eggs", "dairy"]),
            favorite_ingredients: strings(&["tofu", "beans", "quinoa", "avocado"]),
            goals: strings(&["vegan", "healthy"]),
            ..Profile::default()
        },
        "sensitive-eater" => Profile {
            allergies: strings(&["gluten", "dairy"]),
            restrictions: strings(&["spicy", "alcohol"]),
            favorite_ingredients: strings(&["rice", "chicken", "carrots"]),
            goals: strings(&["healthy", "low-calorie"]),
            ..Profile::default()
        },
        _ => return None,
    };
    Some(profile)
}
