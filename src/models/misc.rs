//! Elections, bingo events, news and fire sales

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perk {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub perks: Vec<Perk>,
    #[serde(default)]
    pub votes: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Election {
    pub year: u32,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Minister {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub perk: Option<Perk>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mayor {
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub perks: Vec<Perk>,
    #[serde(default)]
    pub minister: Option<Minister>,
    #[serde(default)]
    pub election: Option<Election>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoGoal {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tiers: Vec<u64>,
    #[serde(default)]
    pub progress: u64,
    #[serde(default)]
    pub lore: Option<String>,
    #[serde(default)]
    pub full_lore: Vec<String>,
    #[serde(default)]
    pub required_amount: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub item: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireSale {
    pub item_id: String,
    pub start: i64,
    pub end: i64,
    pub amount: u64,
    pub price: f64,
}

/// Response of `resources/skyblock/election`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElectionResponse {
    pub success: bool,
    #[serde(default)]
    pub last_updated: i64,
    pub mayor: Option<Mayor>,
    pub current: Option<Election>,
}

/// Response of `resources/skyblock/bingo`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BingoEventResponse {
    pub success: bool,
    #[serde(default)]
    pub last_updated: i64,
    pub id: u32,
    pub name: String,
    pub start: i64,
    pub end: i64,
    #[serde(default)]
    pub modifier: String,
    #[serde(default)]
    pub goals: Vec<BingoGoal>,
}

/// Response of `skyblock/news`
#[derive(Debug, Clone, Deserialize)]
pub struct NewsResponse {
    pub success: bool,
    #[serde(default)]
    pub items: Vec<NewsItem>,
}

/// Response of `skyblock/firesales`
#[derive(Debug, Clone, Deserialize)]
pub struct FireSalesResponse {
    pub success: bool,
    #[serde(default)]
    pub sales: Vec<FireSale>,
}
