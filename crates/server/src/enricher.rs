//! Image enrichment for the top-ranked dishes.
//!
//! Enrichment runs after ranking and never affects it: lookups for the
//! top-N dishes are issued as independent tasks, each with its own bounded
//! timeout, and the results are joined settle-all. One slow or failing
//! lookup degrades that one dish to `image_url: None` and leaves its
//! siblings alone.

use image_client::ImageLookupClient;
use menu_data::Dish;
use scoring::ScoredDish;
use serde::Serialize;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Default per-lookup timeout. A tunable, not a contract.
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(10);

/// Final recommendation returned to the caller.
///
/// Serializes as the flattened dish plus score, reasoning and the image
/// fields (camelCase, matching the recommendation response format).
/// `image_error` is true only for genuine lookup failures; a dish whose
/// image simply does not exist yet has `image_url: None, image_error:
/// false` so callers can tell "still loading" from "failed".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendedDish {
    #[serde(flatten)]
    pub dish: Dish,
    pub score: i32,
    pub reasoning: Vec<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(rename = "imageError")]
    pub image_error: bool,
}

impl RecommendedDish {
    fn from_scored(scored: ScoredDish, image_url: Option<String>, image_error: bool) -> Self {
        Self {
            dish: scored.dish,
            score: scored.score,
            reasoning: scored.reasoning,
            image_url,
            image_error,
        }
    }

    /// A recommendation with no image attached and no error — used when
    /// enrichment is disabled entirely.
    pub fn without_image(scored: ScoredDish) -> Self {
        Self::from_scored(scored, None, false)
    }
}

/// Attaches images to ranked dishes via the image lookup collaborator.
#[derive(Clone)]
pub struct Enricher {
    client: ImageLookupClient,
    lookup_timeout: Duration,
}

impl Enricher {
    pub fn new(client: ImageLookupClient) -> Self {
        Self {
            client,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Configure the per-lookup timeout (default: 10s)
    pub fn with_lookup_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    /// Enrich all dishes concurrently, preserving order.
    ///
    /// Fire-and-collect: one task per dish, joined settle-all. A task that
    /// fails or panics degrades only its own dish.
    pub async fn enrich_all(&self, scored: Vec<ScoredDish>) -> Vec<RecommendedDish> {
        let mut handles = Vec::with_capacity(scored.len());
        for entry in &scored {
            let client = self.client.clone();
            let entry = entry.clone();
            let lookup_timeout = self.lookup_timeout;
            handles.push(tokio::spawn(enrich_one(client, entry, lookup_timeout)));
        }

        let mut enriched = Vec::with_capacity(scored.len());
        for (handle, original) in handles.into_iter().zip(scored) {
            match handle.await {
                Ok(dish) => enriched.push(dish),
                Err(e) => {
                    warn!("Enrichment task for {:?} panicked: {}", original.dish.name, e);
                    enriched.push(RecommendedDish::from_scored(original, None, true));
                }
            }
        }
        enriched
    }
}

/// Look up one dish's image and map the outcome onto the result fields.
async fn enrich_one(
    mut client: ImageLookupClient,
    scored: ScoredDish,
    lookup_timeout: Duration,
) -> RecommendedDish {
    let lookup = timeout(
        lookup_timeout,
        client.lookup_image(&scored.dish.name, &scored.dish.description),
    )
    .await;

    match lookup {
        Ok(Ok(Some(url))) => {
            debug!("Image attached for {:?}", scored.dish.name);
            RecommendedDish::from_scored(scored, Some(url), false)
        }
        // No image yet: legitimate miss, not an error.
        Ok(Ok(None)) => {
            debug!("No image yet for {:?}", scored.dish.name);
            RecommendedDish::from_scored(scored, None, false)
        }
        Ok(Err(e)) => {
            warn!("Image lookup failed for {:?}: {}", scored.dish.name, e);
            RecommendedDish::from_scored(scored, None, true)
        }
        Err(_) => {
            warn!(
                "Image lookup timed out for {:?} after {:?}",
                scored.dish.name, lookup_timeout
            );
            RecommendedDish::from_scored(scored, None, true)
        }
    }
}
