//! Bazaar service

use std::collections::HashMap;
use std::sync::Arc;

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::{BazaarProduct, BazaarResponse};

/// Cache key of the product map
pub const BAZAAR_PRODUCTS_KEY: &str = "bazaar:products";

#[derive(Debug, Clone)]
pub struct Bazaar {
    client: Client,
}

impl Bazaar {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Current bazaar snapshot (uncached)
    pub async fn snapshot(&self) -> ApiResult<BazaarResponse> {
        self.client.get("skyblock/bazaar", false).await
    }

    /// Every product keyed by product id (cached)
    pub async fn products(&self) -> ApiResult<Arc<HashMap<String, BazaarProduct>>> {
        self.client
            .cached(BAZAAR_PRODUCTS_KEY, move || async move {
                Ok(self.snapshot().await?.products)
            })
            .await
    }

    /// A single product, `None` if the id is unknown
    pub async fn product(&self, product_id: &str) -> ApiResult<Option<BazaarProduct>> {
        Ok(self.products().await?.get(product_id).cloned())
    }
}
