//! Per-domain API services
//!
//! Each service is a cheap handle over a shared [`crate::Client`] and groups
//! the raw endpoints of one resource domain with its cached helpers.

mod auctions;
mod bazaar;
mod misc;
mod profiles;
mod resources;

pub use auctions::{Auctions, ALL_AUCTIONS_KEY};
pub use bazaar::{Bazaar, BAZAAR_PRODUCTS_KEY};
pub use misc::Misc;
pub use profiles::Profiles;
pub use resources::Resources;
