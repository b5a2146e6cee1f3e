//! Ingredient category table and expansion.
//!
//! Diners state restrictions at category level ("no red meat", "no
//! seafood") while parsed dishes list specific ingredients ("beef",
//! "shrimp"). Substring matching alone cannot bridge that gap — "red meat"
//! is not a substring of "beef" — so restriction terms that name a known
//! category are expanded into the category's specific ingredients before
//! scoring.

/// Known ingredient categories and their specific members.
///
/// Lookup is case-insensitive on the category name.
pub const INGREDIENT_CATEGORIES: &[(&str, &[&str])] = &[
    // Meat categories
    (
        "meat",
        &["chicken", "turkey", "duck", "goose", "beef", "pork", "lamb", "veal", "venison"],
    ),
    ("poultry", &["chicken", "turkey", "duck", "goose", "quail"]),
    ("red meat", &["beef", "pork", "lamb", "veal", "venison"]),
    // Seafood categories
    (
        "seafood",
        &[
            "salmon", "tuna", "cod", "halibut", "trout", "shrimp", "crab", "lobster", "oysters",
            "mussels", "clams", "scallops",
        ],
    ),
    (
        "fish",
        &["salmon", "tuna", "cod", "halibut", "trout", "bass", "tilapia", "sardines", "mackerel"],
    ),
    (
        "shellfish",
        &["shrimp", "crab", "lobster", "oysters", "mussels", "clams", "scallops"],
    ),
    // Dairy
    (
        "dairy",
        &[
            "milk",
            "cheese",
            "yogurt",
            "butter",
            "cream",
            "ice cream",
            "sour cream",
            "greek yogurt",
            "cottage cheese",
        ],
    ),
    // Animal products (specific ingredients only)
    (
        "animal products",
        &[
            "chicken", "turkey", "beef", "pork", "lamb", "salmon", "tuna", "shrimp", "crab",
            "eggs", "milk", "cheese", "yogurt", "butter", "honey",
        ],
    ),
    // Nuts and seeds
    (
        "nuts",
        &["peanuts", "almonds", "walnuts", "cashews", "pecans", "pistachios", "hazelnuts", "macadamia nuts"],
    ),
    (
        "seeds",
        &["sunflower seeds", "pumpkin seeds", "chia seeds", "flax seeds", "sesame seeds"],
    ),
    // Grains
    (
        "grains",
        &["wheat", "rice", "oats", "barley", "quinoa", "corn", "pasta", "bread"],
    ),
    (
        "whole grains",
        &["brown rice", "quinoa", "oats", "whole wheat", "barley", "bulgur"],
    ),
    // Vegetables
    (
        "vegetables",
        &[
            "leafy greens", "broccoli", "carrots", "tomatoes", "peppers", "onions", "garlic",
            "spinach", "kale", "lettuce",
        ],
    ),
    (
        "leafy greens",
        &["spinach", "kale", "lettuce", "arugula", "swiss chard", "collard greens"],
    ),
    // Fruits
    ("fruits", &["apples", "bananas", "oranges", "berries", "grapes", "melons"]),
    ("berries", &["strawberries", "blueberries", "raspberries", "blackberries"]),
    // Legumes
    (
        "legumes",
        &["beans", "lentils", "chickpeas", "peas", "soybeans", "tofu", "tempeh"],
    ),
];

/// Look up the specific ingredients of a category name, case-insensitively.
pub fn category_members(name: &str) -> Option<&'static [&'static str]> {
    let lower = name.to_lowercase();
    INGREDIENT_CATEGORIES
        .iter()
        .find(|(category, _)| *category == lower)
        .map(|(_, members)| *members)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(category_members("Red Meat").is_some());
        assert!(category_members("SEAFOOD").is_some());
        assert!(category_members("beef").is_none());
    }

    #[test]
    fn red_meat_contains_beef() {
        let members = category_members("red meat").unwrap();
        assert!(members.contains(&"beef"));
        assert!(!members.contains(&"chicken"));
    }
}
