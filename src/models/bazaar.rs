//! Bazaar products

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One aggregated order level in a buy or sell summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub amount: u64,
    pub price_per_unit: f64,
    pub orders: u64,
}

/// Computed live state of a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStatus {
    pub product_id: String,
    pub sell_price: f64,
    pub sell_volume: u64,
    pub sell_moving_week: u64,
    pub sell_orders: u64,
    pub buy_price: f64,
    pub buy_volume: u64,
    pub buy_moving_week: u64,
    pub buy_orders: u64,
}

/// A bazaar product with its top orders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BazaarProduct {
    pub product_id: String,
    #[serde(default)]
    pub sell_summary: Vec<OrderSummary>,
    #[serde(default)]
    pub buy_summary: Vec<OrderSummary>,
    pub quick_status: QuickStatus,
}

/// Response of `skyblock/bazaar`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BazaarResponse {
    pub success: bool,
    #[serde(default)]
    pub last_updated: i64,
    #[serde(default)]
    pub products: HashMap<String, BazaarProduct>,
}
