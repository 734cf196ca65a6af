//! Client-side auction filtering and price aggregates
//!
//! An [`AuctionFilter`] is a sparse set of predicates: `None` fields impose no
//! constraint, present fields are ANDed. Filtering is a single pass over the
//! input that preserves order.

use serde::{Deserialize, Serialize};

use crate::models::{Auction, Tier};

/// Predicates over [`Auction`] records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuctionFilter {
    /// Exact auction UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auction_uuid: Option<String>,
    /// Exact seller player UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auctioneer: Option<String>,
    /// Exact seller profile UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<String>,
    /// Exact item UUID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_uuid: Option<String>,
    /// Case-insensitive substring of the item name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    /// Exact category (`weapon`, `armor`, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    /// Inclusive lower bound on `starting_bid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Inclusive upper bound on `starting_bid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Required value of the BIN flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin: Option<bool>,
}

impl AuctionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auction_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.auction_uuid = Some(uuid.into());
        self
    }

    pub fn auctioneer(mut self, uuid: impl Into<String>) -> Self {
        self.auctioneer = Some(uuid.into());
        self
    }

    pub fn profile_id(mut self, uuid: impl Into<String>) -> Self {
        self.profile_id = Some(uuid.into());
        self
    }

    pub fn item_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.item_uuid = Some(uuid.into());
        self
    }

    pub fn item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = Some(name.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn bin(mut self, bin: bool) -> Self {
        self.bin = Some(bin);
        self
    }

    /// Whether no predicate is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `auction` satisfies every present predicate
    pub fn matches(&self, auction: &Auction) -> bool {
        self.matches_with(auction, self.item_name.as_deref().map(str::to_lowercase).as_deref())
    }

    /// `needle` is the pre-lowercased `item_name` so batch filtering lowercases it once.
    fn matches_with(&self, auction: &Auction, needle: Option<&str>) -> bool {
        fn eq(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |e| e == actual)
        }

        eq(&self.auction_uuid, &auction.uuid)
            && eq(&self.auctioneer, &auction.auctioneer)
            && eq(&self.profile_id, &auction.profile_id)
            && self
                .item_uuid
                .as_deref()
                .map_or(true, |e| auction.item_uuid.as_deref() == Some(e))
            && needle.map_or(true, |n| auction.item_name.to_lowercase().contains(n))
            && eq(&self.category, &auction.category)
            && self.tier.map_or(true, |t| auction.tier == t)
            && self.min_price.map_or(true, |min| auction.starting_bid >= min)
            && self.max_price.map_or(true, |max| auction.starting_bid <= max)
            && self.bin.map_or(true, |bin| auction.bin == bin)
    }

    /// Order-independent identifier of the present predicates.
    ///
    /// Two filters with the same predicates always produce the same key and
    /// filters that differ in any field never do.
    pub fn canonical_key(&self) -> String {
        // `-0.0 == 0.0` but they serialize differently.
        let normalized = Self {
            min_price: self.min_price.map(|p| p + 0.0),
            max_price: self.max_price.map(|p| p + 0.0),
            ..self.clone()
        };
        // Struct fields serialize in declaration order and absent ones are skipped.
        serde_json::to_string(&normalized).unwrap_or_default()
    }

    /// Key used for this filter in batched price lookups
    pub fn label(&self) -> String {
        self.item_name
            .clone()
            .or_else(|| self.item_uuid.clone())
            .unwrap_or_else(|| self.canonical_key())
    }
}

/// Borrowing iterator over the records matching `criteria`, in input order
pub fn matching<'a>(
    records: &'a [Auction],
    criteria: &'a AuctionFilter,
) -> impl Iterator<Item = &'a Auction> + 'a {
    let needle = criteria.item_name.as_deref().map(str::to_lowercase);
    records
        .iter()
        .filter(move |a| criteria.matches_with(a, needle.as_deref()))
}

/// Records matching every present predicate, in input order
pub fn filter(records: &[Auction], criteria: &AuctionFilter) -> Vec<Auction> {
    if criteria.is_empty() {
        return records.to_vec();
    }
    matching(records, criteria).cloned().collect()
}

/// The cheapest record, or `None` for empty input. Ties keep the earliest.
pub fn lowest_price<'a, I>(records: I) -> Option<&'a Auction>
where
    I: IntoIterator<Item = &'a Auction>,
{
    records.into_iter().fold(None, |best, auction| match best {
        Some(b) if b.starting_bid <= auction.starting_bid => Some(b),
        _ => Some(auction),
    })
}

/// Arithmetic mean of `starting_bid`, or `0.0` for empty input
pub fn average_price<'a, I>(records: I) -> f64
where
    I: IntoIterator<Item = &'a Auction>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), a| (sum + a.starting_bid, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn auction(uuid: &str, name: &str, tier: Tier, price: f64, bin: bool) -> Auction {
        Auction {
            uuid: uuid.to_string(),
            auctioneer: format!("seller-{uuid}"),
            profile_id: format!("profile-{uuid}"),
            coop: Vec::new(),
            start: 0,
            end: 0,
            item_name: name.to_string(),
            item_lore: String::new(),
            extra: String::new(),
            category: "weapon".to_string(),
            tier,
            starting_bid: price,
            item_bytes: None,
            claimed: false,
            claimed_bidders: Vec::new(),
            highest_bid_amount: 0.0,
            last_updated: 0,
            bin,
            bids: Vec::new(),
            item_uuid: Some(format!("item-{uuid}")),
            extra_fields: HashMap::new(),
        }
    }

    fn sample() -> Vec<Auction> {
        vec![
            auction("a", "Aspect of the End", Tier::Rare, 300_000.0, true),
            auction("b", "Hyperion", Tier::Legendary, 900_000_000.0, true),
            auction("c", "Aspect of the Void", Tier::Epic, 1_200_000.0, false),
            auction("d", "[Lvl 100] Ender Dragon", Tier::Legendary, 450_000_000.0, true),
            auction("e", "aspect of the end", Tier::Rare, 250_000.0, false),
        ]
    }

    fn uuids(records: &[Auction]) -> Vec<&str> {
        records.iter().map(|a| a.uuid.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let records = sample();
        assert_eq!(filter(&records, &AuctionFilter::new()), records);
        assert!(filter(&[], &AuctionFilter::new()).is_empty());
    }

    #[test]
    fn test_name_is_case_insensitive_substring() {
        let result = filter(&sample(), &AuctionFilter::new().item_name("ASPECT OF THE"));
        assert_eq!(uuids(&result), vec!["a", "c", "e"]);
    }

    #[test]
    fn test_exact_fields() {
        let records = sample();
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().auction_uuid("b"))),
            vec!["b"]
        );
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().auctioneer("seller-c"))),
            vec!["c"]
        );
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().profile_id("profile-d"))),
            vec!["d"]
        );
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().item_uuid("item-e"))),
            vec!["e"]
        );
        assert!(filter(&records, &AuctionFilter::new().category("armor")).is_empty());
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().tier(Tier::Legendary))),
            vec!["b", "d"]
        );
    }

    #[test]
    fn test_item_uuid_does_not_match_missing_uuid() {
        let mut records = sample();
        records[0].item_uuid = None;
        assert!(filter(&records, &AuctionFilter::new().item_uuid("item-a")).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive_and_independent() {
        let records = sample();
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().min_price(450_000_000.0))),
            vec!["b", "d"]
        );
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().max_price(300_000.0))),
            vec!["a", "e"]
        );
        assert_eq!(
            uuids(&filter(
                &records,
                &AuctionFilter::new().min_price(300_000.0).max_price(1_200_000.0)
            )),
            vec!["a", "c"]
        );
        // A zero bound is still a constraint.
        assert_eq!(filter(&records, &AuctionFilter::new().min_price(0.0)).len(), 5);
        assert!(filter(&records, &AuctionFilter::new().max_price(0.0)).is_empty());
    }

    #[test]
    fn test_bin_is_boolean_equality() {
        let records = sample();
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().bin(true))),
            vec!["a", "b", "d"]
        );
        assert_eq!(
            uuids(&filter(&records, &AuctionFilter::new().bin(false))),
            vec!["c", "e"]
        );
    }

    #[test]
    fn test_predicates_are_anded() {
        let criteria = AuctionFilter::new()
            .item_name("aspect of the end")
            .bin(true)
            .tier(Tier::Rare);
        assert_eq!(uuids(&filter(&sample(), &criteria)), vec!["a"]);
    }

    #[test]
    fn test_filter_agrees_with_matches() {
        let records = sample();
        let criteria = AuctionFilter::new().item_name("end").min_price(260_000.0);
        let expected: Vec<Auction> = records.iter().filter(|a| criteria.matches(a)).cloned().collect();
        assert_eq!(filter(&records, &criteria), expected);
        assert_eq!(uuids(&expected), vec!["a", "d"]);
    }

    #[test]
    fn test_matching_borrows_in_order() {
        let records = sample();
        let criteria = AuctionFilter::new().tier(Tier::Legendary);
        let found: Vec<&str> = matching(&records, &criteria).map(|a| a.uuid.as_str()).collect();
        assert_eq!(found, vec!["b", "d"]);
    }

    #[test]
    fn test_lowest_price() {
        let records = sample();
        assert_eq!(lowest_price(&records).map(|a| a.uuid.as_str()), Some("e"));
        assert!(lowest_price(&[]).is_none());
    }

    #[test]
    fn test_lowest_price_tie_keeps_first() {
        let records = vec![
            auction("x", "Stone", Tier::Common, 5.0, true),
            auction("y", "Stone", Tier::Common, 5.0, true),
        ];
        assert_eq!(lowest_price(&records).map(|a| a.uuid.as_str()), Some("x"));
    }

    #[test]
    fn test_average_price() {
        let records = vec![
            auction("x", "Stone", Tier::Common, 10.0, true),
            auction("y", "Stone", Tier::Common, 20.0, true),
            auction("z", "Stone", Tier::Common, 60.0, true),
        ];
        assert!((average_price(&records) - 30.0).abs() < f64::EPSILON);
        assert_eq!(average_price(&[]), 0.0);
    }

    #[test]
    fn test_canonical_key_is_independent_of_construction_order() {
        let a = AuctionFilter::new().tier(Tier::Epic).item_name("Hyperion").bin(true);
        let b = AuctionFilter::new().bin(true).item_name("Hyperion").tier(Tier::Epic);
        assert_eq!(a.canonical_key(), b.canonical_key());
        assert_ne!(
            a.canonical_key(),
            AuctionFilter::new().item_name("Hyperion").canonical_key()
        );
        assert_eq!(AuctionFilter::new().canonical_key(), "{}");
    }

    #[test]
    fn test_canonical_key_distinguishes_fields_with_same_value() {
        let by_seller = AuctionFilter::new().auctioneer("abc");
        let by_profile = AuctionFilter::new().profile_id("abc");
        assert_ne!(by_seller.canonical_key(), by_profile.canonical_key());
    }

    #[test]
    fn test_canonical_key_treats_signed_zero_bounds_alike() {
        let positive = AuctionFilter::new().min_price(0.0).max_price(0.0);
        let negative = AuctionFilter::new().min_price(-0.0).max_price(-0.0);
        assert_eq!(positive, negative);
        assert_eq!(positive.canonical_key(), negative.canonical_key());
    }

    #[test]
    fn test_label_prefers_name_then_item_uuid() {
        assert_eq!(AuctionFilter::new().item_name("Hyperion").item_uuid("u").label(), "Hyperion");
        assert_eq!(AuctionFilter::new().item_uuid("u").label(), "u");
        let fallback = AuctionFilter::new().tier(Tier::Rare);
        assert_eq!(fallback.label(), fallback.canonical_key());
    }
}
