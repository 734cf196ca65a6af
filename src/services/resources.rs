//! Static game resources

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::{CollectionsResponse, ItemsResponse, SkillsResponse};

#[derive(Debug, Clone)]
pub struct Resources {
    client: Client,
}

impl Resources {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn collections(&self) -> ApiResult<CollectionsResponse> {
        self.client.get("resources/skyblock/collections", false).await
    }

    pub async fn items(&self) -> ApiResult<ItemsResponse> {
        self.client.get("resources/skyblock/items", false).await
    }

    pub async fn skills(&self) -> ApiResult<SkillsResponse> {
        self.client.get("resources/skyblock/skills", false).await
    }
}
