//! Simple test harness for the recommendation orchestrator.
//!
//! Loads a profile and a parsed menu from `data/` and prints the top
//! recommendations end-to-end. Point IMAGE_SERVICE_ADDR at a running image
//! lookup service to exercise enrichment.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use menu_data::{load_menu, load_profile};
use server::MenuRecommender;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,scoring=debug,preferences=debug")
        .init();

    info!("Starting MenuMatch server test harness");

    info!("Loading profile and menu...");
    let profile = load_profile(Path::new("data/profile.json"))?;
    let menu = load_menu(Path::new("data/menu.json"))?;
    info!("Loaded {} dishes", menu.len());

    let recommender = match std::env::var("IMAGE_SERVICE_ADDR") {
        Ok(addr) => {
            info!("Connecting to image service at {}", addr);
            MenuRecommender::with_image_service(addr).await?
        }
        Err(_) => MenuRecommender::new(),
    };

    let limit = 3;
    info!("Getting recommendations (limit: {})", limit);
    let recommendations = recommender.recommend(&profile, menu, limit).await?;

    info!("Received {} recommendations:", recommendations.len());
    for (i, rec) in recommendations.iter().enumerate() {
        info!(
            "{}. {} [{}] - Score: {}",
            i + 1,
            rec.dish.name,
            rec.dish.category,
            rec.score
        );
        for line in &rec.reasoning {
            info!("   {}", line);
        }
        if let Some(url) = &rec.image_url {
            info!("   Image: {}", url);
        }
    }

    Ok(())
}
