//! Scoring rule implementations.
//!
//! Each rule is one independent signal; the scorer evaluates them in a
//! fixed order (favorites, hated, allergens, restrictions) so the reasoning
//! text is deterministic and reproducible.

pub mod allergens;
pub mod favorites;
pub mod hated;
pub mod restrictions;

// Re-export for convenience
pub use allergens::AllergenRule;
pub use favorites::FavoriteIngredientsRule;
pub use hated::HatedIngredientsRule;
pub use restrictions::RestrictionRule;

/// Score contribution per distinct matched favorite term.
pub const FAVORITE_BONUS: i32 = 3;
/// Score contribution per distinct matched hated term.
pub const HATED_PENALTY: i32 = -5;
/// Score contribution per distinct matched allergy term.
pub const ALLERGEN_PENALTY: i32 = -10;
/// Score contribution per distinct matched restriction term.
pub const RESTRICTION_PENALTY: i32 = -10;
