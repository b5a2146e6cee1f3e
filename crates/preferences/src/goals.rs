//! Dietary goal vocabulary and the goal → ingredient lookup table.
//!
//! Goals influence scoring only indirectly: each recognized goal implies a
//! fixed set of favorite terms and restriction terms that are appended to
//! the effective profile before scoring runs. The scorer itself never
//! special-cases goal strings.

/// The fixed dietary goal vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DietaryGoal {
    Healthy,
    LowCalorie,
    Budget,
    HighProtein,
    Vegetarian,
    Vegan,
    LowCarb,
    Keto,
}

impl DietaryGoal {
    /// Parse a stored goal identifier. Unknown strings return `None` and
    /// are ignored by profile expansion.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "healthy" => Some(Self::Healthy),
            "low-calorie" => Some(Self::LowCalorie),
            "budget" => Some(Self::Budget),
            "high-protein" => Some(Self::HighProtein),
            "vegetarian" => Some(Self::Vegetarian),
            "vegan" => Some(Self::Vegan),
            "low-carb" => Some(Self::LowCarb),
            "keto" => Some(Self::Keto),
            _ => None,
        }
    }

    /// The stored identifier for this goal.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::LowCalorie => "low-calorie",
            Self::Budget => "budget",
            Self::HighProtein => "high-protein",
            Self::Vegetarian => "vegetarian",
            Self::Vegan => "vegan",
            Self::LowCarb => "low-carb",
            Self::Keto => "keto",
        }
    }

    /// Specific ingredient terms this goal favors.
    pub fn implied_favorites(&self) -> &'static [&'static str] {
        match self {
            Self::Healthy => &["vegetables", "salad"],
            Self::LowCalorie => &["salad"],
            // Price is not part of the dish record, so budget has no
            // ingredient-level signal.
            Self::Budget => &[],
            Self::HighProtein => &["eggs", "chicken", "oats", "yogurt"],
            Self::Vegetarian => &["tofu", "lentils", "spinach", "mushrooms"],
            Self::Vegan => &["tofu", "beans", "quinoa", "avocado"],
            Self::LowCarb => &[],
            Self::Keto => &["avocado", "eggs", "cheese"],
        }
    }

    /// Ingredient or category terms this goal restricts. Category terms
    /// ("meat", "animal products") are widened later by restriction
    /// expansion.
    pub fn implied_restrictions(&self) -> &'static [&'static str] {
        match self {
            Self::Healthy => &["fried"],
            Self::LowCalorie => &["fried", "cream"],
            Self::Budget => &[],
            Self::HighProtein => &[],
            Self::Vegetarian => &["meat", "poultry", "fish", "seafood"],
            Self::Vegan => &["animal products"],
            Self::LowCarb => &["pasta", "bread", "rice", "sugar"],
            Self::Keto => &["grains", "sugar"],
        }
    }
}
