//! Filter implementations for the dish pipeline.

pub mod category_exclusion;

// Re-export for convenience
pub use category_exclusion::CategoryExclusionFilter;
