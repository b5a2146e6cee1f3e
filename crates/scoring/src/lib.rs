//! Scoring pipeline for menu dishes.
//!
//! This crate provides:
//! - Filter trait and CategoryExclusionFilter for pre-scoring removal
//! - FilterPipeline for composing filters
//! - ScoringRule trait and the four standard rules
//! - DishScorer folding rule outcomes into scored dishes
//! - rank() for stable ordering and truncation
//!
//! ## Architecture
//! The pipeline processes a menu in stages:
//! 1. Filters remove dishes the profile excludes outright (category exclusion)
//! 2. DishScorer evaluates each remaining dish against the effective profile
//! 3. rank() sorts descending by score and keeps the top N
//!
//! Everything here is pure computation over in-memory data: deterministic
//! for identical inputs, no I/O, no shared mutable state.
//!
//! ## Example Usage
//! ```ignore
//! use scoring::{CategoryExclusionFilter, DishScorer, FilterPipeline, rank, DEFAULT_LIMIT};
//!
//! let pipeline = FilterPipeline::new().add_filter(CategoryExclusionFilter);
//! let remaining = pipeline.apply(menu, &profile)?;
//!
//! let scorer = DishScorer::default();
//! let scored = scorer.score_menu(remaining, &profile);
//! let top = rank(scored, DEFAULT_LIMIT);
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod matching;
pub mod ranker;
pub mod rules;
pub mod scorer;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use filters::CategoryExclusionFilter;
pub use matching::MatchFields;
pub use ranker::{DEFAULT_LIMIT, rank};
pub use scorer::{DishScorer, GOOD_GENERAL_CHOICE, ScoredDish};
pub use traits::{Filter, RuleOutcome, ScoringRule};
