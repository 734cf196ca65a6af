//! Auction house service
//!
//! Raw endpoints plus the aggregation layer: [`Auctions::all`] walks every
//! page of `skyblock/auctions` through the batched collector and caches the
//! merged set; every query helper filters that cached set client-side.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::client::Client;
use crate::collector::{self, Collected, Page};
use crate::error::ApiResult;
use crate::filter::{self, AuctionFilter};
use crate::models::{
    ActiveAuctionsResponse, Auction, AuctionsResponse, EndedAuction, EndedAuctionsResponse,
};
use crate::transport::with_query;

/// Cache key of the merged auction set
pub const ALL_AUCTIONS_KEY: &str = "auctions:all";

#[derive(Debug, Clone)]
pub struct Auctions {
    client: Client,
}

impl Auctions {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// One page of active auctions, most recently updated first
    pub async fn page(&self, page: u32) -> ApiResult<Page<Auction>> {
        let path = with_query("skyblock/auctions", &[("page", &page.to_string())]);
        let response: ActiveAuctionsResponse = self.client.get(&path, false).await?;
        Ok(response.into())
    }

    /// Auction by its UUID (requires an API key)
    pub async fn by_uuid(&self, uuid: &str) -> ApiResult<Vec<Auction>> {
        self.lookup("uuid", uuid).await
    }

    /// Auctions of a player (requires an API key)
    pub async fn by_player(&self, player_uuid: &str) -> ApiResult<Vec<Auction>> {
        self.lookup("player", player_uuid).await
    }

    /// Auctions of a profile (requires an API key)
    pub async fn by_profile(&self, profile_id: &str) -> ApiResult<Vec<Auction>> {
        self.lookup("profile", profile_id).await
    }

    async fn lookup(&self, param: &str, value: &str) -> ApiResult<Vec<Auction>> {
        let path = with_query("skyblock/auction", &[(param, value)]);
        let response: AuctionsResponse = self.client.get(&path, true).await?;
        Ok(response.auctions)
    }

    /// Auctions that ended in the last 60 seconds
    pub async fn recently_ended(&self) -> ApiResult<Vec<EndedAuction>> {
        let response: EndedAuctionsResponse =
            self.client.get("skyblock/auctions_ended", false).await?;
        Ok(response.auctions)
    }

    /// Walk every listing page, bypassing the cache
    pub async fn collect(&self) -> ApiResult<Collected<Auction>> {
        let config = self.client.config();
        collector::collect(
            |page| {
                let this = self.clone();
                async move { this.page(page).await }
            },
            config.batch_size,
            config.page_failure_policy,
        )
        .await
    }

    /// Every active auction (cached)
    pub async fn all(&self) -> ApiResult<Arc<Vec<Auction>>> {
        self.client
            .cached(ALL_AUCTIONS_KEY, move || async move {
                Ok(self.collect().await?.records)
            })
            .await
    }

    /// Active auctions matching `criteria`
    pub async fn get(&self, criteria: &AuctionFilter) -> ApiResult<Vec<Auction>> {
        let all = self.all().await?;
        let matched = filter::filter(&all, criteria);
        debug!(total = all.len(), matched = matched.len(), "filtered auctions");
        Ok(matched)
    }

    /// Auctions whose item name contains `query`, ignoring case
    pub async fn search(&self, query: &str) -> ApiResult<Vec<Auction>> {
        self.get(&AuctionFilter::new().item_name(query)).await
    }

    /// Auctions listed by a player
    pub async fn by_auctioneer(&self, player_uuid: &str) -> ApiResult<Vec<Auction>> {
        self.get(&AuctionFilter::new().auctioneer(player_uuid)).await
    }

    /// An active auction by UUID, from the cached set
    pub async fn find(&self, uuid: &str) -> ApiResult<Option<Auction>> {
        let all = self.all().await?;
        Ok(all.iter().find(|a| a.uuid == uuid).cloned())
    }

    /// Cheapest matching auction, `None` when nothing matches
    pub async fn lowest_price(&self, criteria: &AuctionFilter) -> ApiResult<Option<Auction>> {
        let all = self.all().await?;
        Ok(filter::lowest_price(filter::matching(&all, criteria)).cloned())
    }

    /// Mean `starting_bid` of matching auctions, `0.0` when nothing matches
    pub async fn average_price(&self, criteria: &AuctionFilter) -> ApiResult<f64> {
        let all = self.all().await?;
        Ok(filter::average_price(filter::matching(&all, criteria)))
    }

    /// Lowest price per filter, keyed by [`AuctionFilter::label`].
    ///
    /// Filters without a match map to `0.0`. All filters are evaluated
    /// against one snapshot; duplicate labels keep the last filter's price.
    pub async fn lowest_prices(&self, criteria: &[AuctionFilter]) -> ApiResult<HashMap<String, f64>> {
        let all = self.all().await?;
        Ok(criteria
            .iter()
            .map(|f| {
                let price = filter::lowest_price(filter::matching(&all, f))
                    .map_or(0.0, |a| a.starting_bid);
                (f.label(), price)
            })
            .collect())
    }

    /// Forget the cached auction set
    pub fn reset_cache(&self) {
        self.client.cache().remove(ALL_AUCTIONS_KEY);
    }

    /// Drop the cached set and collect a fresh one
    pub async fn refresh(&self) -> ApiResult<Arc<Vec<Auction>>> {
        self.reset_cache();
        self.all().await
    }
}
