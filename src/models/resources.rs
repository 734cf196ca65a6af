//! Static game resources: collections, items and skills

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::auction::Tier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionTier {
    pub tier: u32,
    pub amount_required: u64,
    #[serde(default)]
    pub unlocks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionItem {
    pub name: String,
    pub max_tiers: u32,
    #[serde(default)]
    pub tiers: Vec<CollectionTier>,
}

/// A collection category (farming, mining, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionCategory {
    pub name: String,
    #[serde(default)]
    pub items: HashMap<String, CollectionItem>,
}

/// An item definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub material: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tier: Option<Tier>,
    #[serde(default)]
    pub npc_sell_price: Option<f64>,
    #[serde(flatten)]
    pub extra_fields: HashMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillLevel {
    pub level: u32,
    pub total_exp_required: f64,
    #[serde(default)]
    pub unlocks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub max_level: u32,
    #[serde(default)]
    pub levels: Vec<SkillLevel>,
}

/// Response of `resources/skyblock/collections`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsResponse {
    pub success: bool,
    #[serde(default)]
    pub last_updated: i64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub collections: HashMap<String, CollectionCategory>,
}

/// Response of `resources/skyblock/items`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse {
    pub success: bool,
    #[serde(default)]
    pub last_updated: i64,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Response of `resources/skyblock/skills`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsResponse {
    pub success: bool,
    #[serde(default)]
    pub last_updated: i64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub skills: HashMap<String, Skill>,
}
