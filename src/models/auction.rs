//! Auction house records

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Item rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tier {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Divine,
    Special,
    VerySpecial,
    Superior,
    Ultimate,
    /// A tier this client does not know about yet
    #[serde(other)]
    Unknown,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Common => "COMMON",
            Tier::Uncommon => "UNCOMMON",
            Tier::Rare => "RARE",
            Tier::Epic => "EPIC",
            Tier::Legendary => "LEGENDARY",
            Tier::Mythic => "MYTHIC",
            Tier::Divine => "DIVINE",
            Tier::Special => "SPECIAL",
            Tier::VerySpecial => "VERY_SPECIAL",
            Tier::Superior => "SUPERIOR",
            Tier::Ultimate => "ULTIMATE",
            Tier::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bid placed on an auction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub auction_id: String,
    pub bidder: String,
    pub profile_id: String,
    pub amount: f64,
    pub timestamp: i64,
}

/// An active auction listing
///
/// Known fields are typed; anything else the API sends is kept verbatim in
/// `extra_fields`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Auction {
    /// Unique auction identifier
    pub uuid: String,
    /// Player UUID of the seller
    pub auctioneer: String,
    /// Profile UUID of the seller
    pub profile_id: String,
    #[serde(default)]
    pub coop: Vec<String>,
    /// Start time in epoch milliseconds
    #[serde(default)]
    pub start: i64,
    /// End time in epoch milliseconds
    #[serde(default)]
    pub end: i64,
    pub item_name: String,
    #[serde(default)]
    pub item_lore: String,
    /// Free-form item description text (not the attribute bag)
    #[serde(default)]
    pub extra: String,
    pub category: String,
    pub tier: Tier,
    /// Starting bid, or the fixed price for BIN auctions
    pub starting_bid: f64,
    #[serde(default)]
    pub item_bytes: Option<Value>,
    #[serde(default)]
    pub claimed: bool,
    #[serde(default)]
    pub claimed_bidders: Vec<Value>,
    #[serde(default)]
    pub highest_bid_amount: f64,
    #[serde(default)]
    pub last_updated: i64,
    /// Buy-it-now; absent on regular bidding auctions
    #[serde(default)]
    pub bin: bool,
    #[serde(default)]
    pub bids: Vec<Bid>,
    #[serde(default)]
    pub item_uuid: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

impl Auction {
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.start)
    }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.end)
    }
}

/// An auction that ended in the last minute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndedAuction {
    pub auction_id: String,
    pub seller: String,
    pub seller_profile: String,
    pub buyer: String,
    #[serde(default)]
    pub buyer_profile: Option<String>,
    pub timestamp: i64,
    pub price: f64,
    #[serde(default)]
    pub bin: bool,
    #[serde(default)]
    pub item_bytes: Option<Value>,
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

/// One page of `skyblock/auctions`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveAuctionsResponse {
    pub success: bool,
    #[serde(default)]
    pub page: u32,
    pub total_pages: u32,
    #[serde(default)]
    pub total_auctions: u64,
    #[serde(default)]
    pub last_updated: i64,
    pub auctions: Vec<Auction>,
}

/// Response of `skyblock/auction`
#[derive(Debug, Clone, Deserialize)]
pub struct AuctionsResponse {
    pub success: bool,
    #[serde(default)]
    pub auctions: Vec<Auction>,
}

/// Response of `skyblock/auctions_ended`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndedAuctionsResponse {
    pub success: bool,
    #[serde(default)]
    pub last_updated: i64,
    pub auctions: Vec<EndedAuction>,
}
