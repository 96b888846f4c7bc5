//! Horizon view: one bucket per GTD altitude.

use std::collections::BTreeMap;

use gtdmap_models::{ItemId, WorkItem};

use crate::bucket::{BucketGroup, BucketMetadata, ReviewFrequency};
use crate::registry::HORIZON_BUCKETS;

const BEYOND_ICON: &str = "🛰️";
const BEYOND_COLOR: &str = "#6B7280";

fn metadata(level: u8) -> BucketMetadata {
    BucketMetadata::Horizon {
        horizon_level: level,
        review_frequency: ReviewFrequency::for_level(level),
    }
}

/// Levels 0-5 always get a bucket; higher levels present in the data are
/// appended in ascending order.
pub(super) fn classify(items: &[&WorkItem]) -> Vec<BucketGroup> {
    let mut levels: BTreeMap<u8, Vec<ItemId>> = (0..HORIZON_BUCKETS.len() as u8)
        .map(|level| (level, Vec::new()))
        .collect();

    for item in items {
        levels
            .entry(item.horizon_level)
            .or_default()
            .push(item.id.clone());
    }

    levels
        .into_iter()
        .map(|(level, ids)| match HORIZON_BUCKETS.get(level as usize) {
            Some(definition) => BucketGroup::from_definition(definition, ids, metadata(level)),
            None => BucketGroup {
                id: format!("horizon-{}", level),
                name: format!("{}0,000ft", level),
                description: format!("Horizon level {}", level),
                icon: BEYOND_ICON.to_string(),
                color: BEYOND_COLOR.to_string(),
                count: ids.len(),
                item_ids: ids,
                metadata: metadata(level),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(items: &[WorkItem]) -> Vec<BucketGroup> {
        let refs: Vec<&WorkItem> = items.iter().collect();
        classify(&refs)
    }

    #[test]
    fn test_canonical_levels_always_present() {
        let buckets = run(&[]);
        let ids: Vec<_> = buckets.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["horizon-0", "horizon-1", "horizon-2", "horizon-3", "horizon-4", "horizon-5"]
        );
    }

    #[test]
    fn test_groups_by_level() {
        let items = vec![
            WorkItem::builder("a").horizon(0).build(),
            WorkItem::builder("b").horizon(0).build(),
            WorkItem::builder("c").horizon(2).build(),
        ];
        let buckets = run(&items);
        assert_eq!(buckets[0].count, 2);
        assert_eq!(buckets[1].count, 0);
        assert_eq!(buckets[2].count, 1);
    }

    #[test]
    fn test_levels_above_five_get_their_own_bucket() {
        let items = vec![
            WorkItem::builder("far").horizon(9).build(),
            WorkItem::builder("farther").horizon(7).build(),
        ];
        let buckets = run(&items);
        assert_eq!(buckets.len(), 8);
        assert_eq!(buckets[6].id, "horizon-7");
        assert_eq!(buckets[6].name, "70,000ft");
        assert_eq!(buckets[7].id, "horizon-9");
        assert_eq!(buckets[7].count, 1);
    }

    #[test]
    fn test_metadata_records_level() {
        let buckets = run(&[]);
        assert_eq!(
            buckets[3].metadata,
            BucketMetadata::Horizon {
                horizon_level: 3,
                review_frequency: ReviewFrequency::Quarterly,
            }
        );
    }
}
