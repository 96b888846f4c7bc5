//! Bucket classifier.
//!
//! Partitions active work items into the buckets of one view type. Each
//! dimension lives in its own submodule and receives only active items;
//! buckets come back in the view's display order.

mod business;
mod energy;
mod horizon;
mod stream;
mod urgency;

use chrono::{DateTime, Utc};
use tracing::debug;

use gtdmap_models::WorkItem;

use crate::bucket::{BucketViewData, ViewMetadata};
use crate::error::Result;
use crate::registry::ViewTypeId;

pub use energy::infer_energy;
pub use urgency::URGENT_WINDOW_HOURS;

/// Classifies items along the view named by `view_type_id`, as of now.
///
/// # Errors
///
/// Returns `BucketError::UnknownViewType` if the id is not registered.
pub fn classify(view_type_id: &str, items: &[WorkItem]) -> Result<BucketViewData> {
    let view: ViewTypeId = view_type_id.parse()?;
    Ok(classify_at(view, items, Utc::now()))
}

/// Classifies items along `view` relative to `now`.
///
/// Output depends only on the arguments; `now` is also recorded as the
/// generation time.
pub fn classify_at(view: ViewTypeId, items: &[WorkItem], now: DateTime<Utc>) -> BucketViewData {
    let (active, inactive): (Vec<&WorkItem>, Vec<&WorkItem>) =
        items.iter().partition(|item| item.is_active());

    let buckets = match view {
        ViewTypeId::Urgency => urgency::classify(&active, now),
        ViewTypeId::Energy => energy::classify(&active),
        ViewTypeId::Horizon => horizon::classify(&active),
        ViewTypeId::Business => business::classify(&active),
        ViewTypeId::Stream => stream::classify(&active),
    };

    debug_assert_eq!(
        buckets.iter().map(|b| b.count).sum::<usize>(),
        active.len(),
        "buckets must partition the active items"
    );

    debug!(
        view = %view,
        active = active.len(),
        excluded = inactive.len(),
        buckets = buckets.len(),
        "classified work items"
    );

    BucketViewData {
        buckets,
        metadata: ViewMetadata {
            generated_at: now,
            view_type: view,
            total_items: active.len(),
            excluded_items: inactive.len(),
        },
    }
}
