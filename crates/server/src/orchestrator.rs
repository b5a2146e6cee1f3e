//! # Recommendation Orchestrator
//!
//! This module coordinates the entire recommendation pipeline:
//! 1. Validate the parsed menu batch
//! 2. Build the effective profile (defaults, goal expansion)
//! 3. Apply filters (category exclusion)
//! 4. Score every remaining dish
//! 5. Rank and select top N
//! 6. Enrich the top N with images (optional)

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::enricher::{Enricher, RecommendedDish};
use image_client::ImageLookupClient;
use menu_data::{Dish, Profile, validate_menu};
use preferences::build_effective_profile;
use scoring::{CategoryExclusionFilter, DishScorer, FilterPipeline, MatchFields, rank};

/// Main orchestrator that coordinates the recommendation pipeline.
///
/// Holds no per-request state: every call to [`recommend`] operates on the
/// inputs it is given and produces fresh derived values.
///
/// [`recommend`]: MenuRecommender::recommend
#[derive(Clone)]
pub struct MenuRecommender {
    filter_pipeline: Arc<FilterPipeline>,
    scorer: Arc<DishScorer>,
    enricher: Option<Enricher>,
}

impl MenuRecommender {
    /// Create a recommender with no image enrichment.
    ///
    /// Results carry `image_url: None, image_error: false` for every dish.
    pub fn new() -> Self {
        Self::with_match_fields(MatchFields::default())
    }

    /// Create a recommender with an explicit match field set (no enrichment).
    pub fn with_match_fields(fields: MatchFields) -> Self {
        let filter_pipeline = Arc::new(FilterPipeline::new().add_filter(CategoryExclusionFilter));
        Self {
            filter_pipeline,
            scorer: Arc::new(DishScorer::new(fields)),
            enricher: None,
        }
    }

    /// Create a recommender connected to the image lookup service.
    ///
    /// # Arguments
    /// * `addr` - Address of the image gRPC service (e.g., "http://localhost:50061")
    pub async fn with_image_service(addr: impl Into<String>) -> Result<Self> {
        let client = ImageLookupClient::connect(addr).await?;
        Ok(Self::new().with_enricher(Enricher::new(client)))
    }

    /// Attach a pre-built enricher (used by tests and custom setups).
    pub fn with_enricher(mut self, enricher: Enricher) -> Self {
        self.enricher = Some(enricher);
        self
    }

    /// Main entry point: recommend dishes from a menu for a profile.
    ///
    /// # Arguments
    /// * `profile` - The diner's stored preference profile
    /// * `menu` - Parsed dish records from the menu parser collaborator
    /// * `limit` - Number of recommendations to return (e.g., 3)
    ///
    /// # Returns
    /// At most `limit` recommendations sorted by score (highest first),
    /// each with reasoning and, when enrichment is on, an image outcome.
    /// An empty menu — or one fully removed by filtering — yields an empty
    /// list, not an error.
    pub async fn recommend(
        &self,
        profile: &Profile,
        menu: Vec<Dish>,
        limit: usize,
    ) -> Result<Vec<RecommendedDish>> {
        let start_time = Instant::now();

        // Reject malformed batches outright; no partial scoring.
        validate_menu(&menu).context("Invalid menu")?;
        info!("Validated menu with {} dishes", menu.len());

        let effective = build_effective_profile(profile);
        info!(
            "Built effective profile ({} favorites, {} restrictions, {} allergies)",
            effective.favorite_ingredients.len(),
            effective.restrictions.len(),
            effective.allergies.len()
        );

        let remaining = self
            .filter_pipeline
            .apply(menu, &effective)
            .context("Failed to apply filters")?;
        info!("Applied filters, dishes remaining: {}", remaining.len());

        let scored = self.scorer.score_menu(remaining, &effective);
        info!("Scored {} dishes", scored.len());

        let top = rank(scored, limit);
        info!("Selected top {} dishes", top.len());

        let recommendations = match &self.enricher {
            Some(enricher) => enricher.enrich_all(top).await,
            None => top.into_iter().map(RecommendedDish::without_image).collect(),
        };

        let elapsed = start_time.elapsed();
        info!(
            "Produced {} recommendations in {:.2?}",
            recommendations.len(),
            elapsed
        );
        Ok(recommendations)
    }
}

impl Default for MenuRecommender {
    fn default() -> Self {
        Self::new()
    }
}
