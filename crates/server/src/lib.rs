//! Server crate for the MenuMatch recommendation engine.
//!
//! This crate contains the orchestrator that coordinates filtering,
//! scoring, ranking and image enrichment, plus the enricher itself.

pub mod enricher;
pub mod orchestrator;

pub use enricher::{DEFAULT_LOOKUP_TIMEOUT, Enricher, RecommendedDish};
pub use orchestrator::MenuRecommender;
