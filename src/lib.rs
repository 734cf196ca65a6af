//! SkyBlock Toolkit
//!
//! Typed async client for the Hypixel SkyBlock API. Besides one method per
//! endpoint it aggregates the paginated auction house into a single cached
//! collection that can be filtered and priced client-side.
//!
//! ```rust,no_run
//! use skyblock_toolkit::{AuctionFilter, Client, ClientConfig};
//!
//! # async fn example() -> Result<(), skyblock_toolkit::ApiError> {
//! let client = Client::new(ClientConfig::from_env())?;
//! let cheapest = client
//!     .auctions()
//!     .lowest_price(&AuctionFilter::new().item_name("Hyperion").bin(true))
//!     .await?;
//! if let Some(auction) = cheapest {
//!     println!("{} for {}", auction.item_name, auction.starting_bid);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod client;
pub mod collector;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod services;
pub mod transport;

pub use client::Client;
pub use collector::{Collected, Page, PageFailurePolicy};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use filter::AuctionFilter;
pub use models::{Auction, Tier};
pub use transport::{HttpTransport, Transport};
