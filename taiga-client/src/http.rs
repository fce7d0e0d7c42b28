//! HTTP client for the catalog endpoint
//!
//! One call per page load: `GET /api/products`. A non-success status or
//! transport failure is surfaced as a [`ClientError`]; there is no retry.

use reqwest::Client;
use tracing::{info, warn};

use taiga_core::CatalogItem;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for fetching the product catalog
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new catalog client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch and normalize the product list
    pub async fn fetch_products(&self) -> ClientResult<Vec<CatalogItem>> {
        let url = format!("{}/api/products", self.base_url);
        let response = self.client.get(&url).send().await.inspect_err(|err| {
            warn!(%err, %url, "catalog request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), %url, "catalog request rejected");
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }

        let items: Vec<CatalogItem> = response
            .json()
            .await
            .map_err(|err| ClientError::InvalidResponse(err.to_string()))?;
        let items: Vec<CatalogItem> = items.into_iter().map(CatalogItem::normalize).collect();

        info!(count = items.len(), "catalog fetched");
        Ok(items)
    }
}
