//! Batched pagination over listing endpoints
//!
//! Page 0 is fetched on its own to learn `total_pages`. The remaining pages
//! are fetched in consecutive batches of `batch_size`; each batch runs
//! concurrently and must settle completely before the next one starts.
//! Records are appended in page-index order, never in completion order.

use std::future::Future;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{info, warn};

use crate::error::ApiResult;
use crate::models::{ActiveAuctionsResponse, Auction};

/// How a failed page (other than page 0) is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageFailurePolicy {
    /// Log the failure and treat the page as empty
    #[default]
    Lenient,
    /// Fail the whole collection
    Strict,
}

/// One page of a listing endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    pub total_pages: u32,
    pub total_records: u64,
    /// Epoch milliseconds of the upstream snapshot
    pub last_updated: i64,
    pub records: Vec<T>,
}

impl<T> Page<T> {
    pub fn last_updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.last_updated)
    }
}

impl From<ActiveAuctionsResponse> for Page<Auction> {
    fn from(response: ActiveAuctionsResponse) -> Self {
        Self {
            page: response.page,
            total_pages: response.total_pages,
            total_records: response.total_auctions,
            last_updated: response.last_updated,
            records: response.auctions,
        }
    }
}

/// Outcome of a full collection
#[derive(Debug, Clone, PartialEq)]
pub struct Collected<T> {
    /// All records, ordered by page index then upstream order
    pub records: Vec<T>,
    /// `total_pages` as reported by page 0
    pub total_pages: u32,
    /// `last_updated` as reported by page 0
    pub last_updated: i64,
    /// Pages replaced by an empty page under [`PageFailurePolicy::Lenient`]
    pub failed_pages: Vec<u32>,
}

/// Fetch every page through `fetch_page` and merge them in page order.
///
/// A failure on page 0 always propagates. `batch_size` is clamped to at
/// least 1.
pub async fn collect<T, F, Fut>(
    fetch_page: F,
    batch_size: usize,
    policy: PageFailurePolicy,
) -> ApiResult<Collected<T>>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = ApiResult<Page<T>>>,
{
    let first = fetch_page(0).await?;
    let total_pages = first.total_pages;
    let mut collected = Collected {
        records: first.records,
        total_pages,
        last_updated: first.last_updated,
        failed_pages: Vec::new(),
    };

    if total_pages <= 1 {
        return Ok(collected);
    }

    let batch_size = u32::try_from(batch_size.max(1)).unwrap_or(u32::MAX);
    for start in (1..total_pages).step_by(batch_size as usize) {
        let batch = start..start.saturating_add(batch_size).min(total_pages);
        // join_all yields results in input order, which is page order.
        let results = join_all(batch.clone().map(&fetch_page)).await;

        let mut first_error = None;
        for (page, result) in batch.zip(results) {
            match result {
                Ok(fetched) => collected.records.extend(fetched.records),
                Err(err) => match policy {
                    PageFailurePolicy::Lenient => {
                        warn!(page, error = %err, "page fetch failed, substituting empty page");
                        collected.failed_pages.push(page);
                    }
                    PageFailurePolicy::Strict => {
                        first_error.get_or_insert(err);
                    }
                },
            }
        }

        if let Some(err) = first_error {
            return Err(err);
        }
    }

    info!(
        pages = total_pages,
        records = collected.records.len(),
        failed = collected.failed_pages.len(),
        "collection complete"
    );
    Ok(collected)
}
