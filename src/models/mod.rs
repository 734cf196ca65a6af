//! Typed shapes of SkyBlock API responses
//!
//! Fields the client queries are strongly typed. Records whose upstream shape
//! is open-ended keep unrecognised fields in an `extra_fields` map instead of
//! rejecting them.

pub mod auction;
pub mod bazaar;
pub mod misc;
pub mod profile;
pub mod resources;

pub use auction::{
    ActiveAuctionsResponse, Auction, AuctionsResponse, Bid, EndedAuction, EndedAuctionsResponse,
    Tier,
};
pub use bazaar::{BazaarProduct, BazaarResponse, OrderSummary, QuickStatus};
pub use misc::{
    BingoEventResponse, BingoGoal, Election, ElectionResponse, FireSale, FireSalesResponse, Mayor,
    NewsItem, NewsResponse,
};
pub use profile::{
    BingoParticipation, BingoResponse, Garden, GardenResponse, MuseumMember, MuseumResponse,
    Profile, ProfileResponse, ProfilesResponse,
};
pub use resources::{
    CollectionCategory, CollectionsResponse, Item, ItemsResponse, Skill, SkillsResponse,
};
