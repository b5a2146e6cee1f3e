//! gRPC client for the dish image lookup/generation service.
//!
//! The collaborator keeps a cache of illustrative dish images keyed by
//! exact (name, description) and generates on miss. This crate wraps the
//! generated gRPC client and keeps two outcomes distinct for callers:
//! - `Ok(None)` — the service answered but has no image yet (legitimate
//!   cache miss, not an error)
//! - `Err(...)` — connection or lookup genuinely failed

use anyhow::{Context, Result};
use thiserror::Error;
use tonic::transport::Channel;
use tracing::{debug, error, info};

// Include the generated protobuf code
pub mod dish_images {
    tonic::include_proto!("dish_images");
}

use dish_images::{LookupRequest, image_lookup_client::ImageLookupClient as GrpcImageLookupClient};

/// Errors that can occur when interacting with the image service
#[derive(Error, Debug)]
pub enum ImageClientError {
    #[error("Failed to connect to image service: {0}")]
    ConnectionError(String),

    #[error("Image lookup failed: {0}")]
    LookupError(String),
}

/// Client for the image lookup service.
///
/// Cheap to clone: clones share the underlying channel, so each enrichment
/// task can own its own handle.
#[derive(Clone)]
pub struct ImageLookupClient {
    client: GrpcImageLookupClient<Channel>,
    service_addr: String,
}

impl ImageLookupClient {
    /// Connect to the image lookup service.
    ///
    /// # Arguments
    /// * `addr` - Address of the gRPC service (e.g., "http://localhost:50061")
    pub async fn connect(addr: impl Into<String>) -> Result<Self> {
        let addr = addr.into();
        info!("Connecting to image service at {}", addr);

        let channel = Channel::from_shared(addr.clone())
            .context("Creating channel from address")?
            .connect()
            .await
            .context("Connecting to image service")?;

        let client = GrpcImageLookupClient::new(channel);
        Ok(ImageLookupClient {
            client,
            service_addr: addr,
        })
    }

    /// Look up the image for one dish.
    ///
    /// Returns `Ok(Some(url))` on a hit, `Ok(None)` when the service has no
    /// image for this dish yet, and `Err` on a transport or status failure.
    pub async fn lookup_image(
        &mut self,
        dish_name: &str,
        dish_description: &str,
    ) -> std::result::Result<Option<String>, ImageClientError> {
        debug!("Looking up image for dish {:?}", dish_name);

        let request = tonic::Request::new(LookupRequest {
            dish_name: dish_name.to_string(),
            dish_description: dish_description.to_string(),
        });

        let response = self.client.lookup_image(request).await.map_err(|e| {
            error!("gRPC error while looking up dish image: {}", e);
            ImageClientError::LookupError(e.to_string())
        })?;

        let response = response.into_inner();
        if response.image_url.is_some() {
            debug!(
                "Image found for dish {:?} (cached: {})",
                dish_name, response.cached
            );
        }
        Ok(response.image_url)
    }

    /// Get the address of the image service this client is connected to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }
}
