//! Elections, bingo, news and fire sales

use crate::client::Client;
use crate::error::ApiResult;
use crate::models::{BingoEventResponse, ElectionResponse, FireSale, FireSalesResponse, NewsItem, NewsResponse};

#[derive(Debug, Clone)]
pub struct Misc {
    client: Client,
}

impl Misc {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Current mayor and the running election
    pub async fn election(&self) -> ApiResult<ElectionResponse> {
        self.client.get("resources/skyblock/election", false).await
    }

    /// Current bingo event and its goals
    pub async fn bingo_event(&self) -> ApiResult<BingoEventResponse> {
        self.client.get("resources/skyblock/bingo", false).await
    }

    /// Latest SkyBlock news (requires an API key)
    pub async fn news(&self) -> ApiResult<Vec<NewsItem>> {
        let response: NewsResponse = self.client.get("skyblock/news", true).await?;
        Ok(response.items)
    }

    /// Active or upcoming fire sales
    pub async fn fire_sales(&self) -> ApiResult<Vec<FireSale>> {
        let response: FireSalesResponse = self.client.get("skyblock/firesales", false).await?;
        Ok(response.sales)
    }
}
