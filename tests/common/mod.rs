//! Shared fixtures for integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use skyblock_toolkit::{Client, ClientConfig};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn auction_json(uuid: &str, name: &str, tier: &str, price: u64, bin: bool) -> Value {
    json!({
        "uuid": uuid,
        "auctioneer": format!("seller-{uuid}"),
        "profile_id": format!("profile-{uuid}"),
        "coop": [],
        "start": 1_700_000_000_000i64,
        "end": 1_700_000_300_000i64,
        "item_name": name,
        "item_lore": "",
        "extra": name,
        "category": "weapon",
        "tier": tier,
        "starting_bid": price,
        "item_bytes": "H4sI",
        "claimed": false,
        "claimed_bidders": [],
        "highest_bid_amount": 0,
        "last_updated": 1_700_000_000_000i64,
        "bin": bin,
        "bids": [],
        "item_uuid": format!("item-{uuid}")
    })
}

pub fn page_json(page: u32, total_pages: u32, auctions: Vec<Value>) -> Value {
    json!({
        "success": true,
        "page": page,
        "totalPages": total_pages,
        "totalAuctions": 1000,
        "lastUpdated": 1_700_000_000_000i64,
        "auctions": auctions
    })
}

/// Mounts one listing page answering exactly `expected` times.
pub async fn mount_page(server: &MockServer, page: u32, body: Value, expected: u64) {
    Mock::given(method("GET"))
        .and(path("/skyblock/auctions"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected)
        .mount(server)
        .await;
}

pub async fn mount_failing_page(server: &MockServer, page: u32, status: u16) {
    Mock::given(method("GET"))
        .and(path("/skyblock/auctions"))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(server.uri())
}

pub fn client_for(server: &MockServer) -> Client {
    Client::new(config_for(server)).expect("valid config")
}
