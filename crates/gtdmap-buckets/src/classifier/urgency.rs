//! Urgency view: overdue, due soon, important, normal.

use chrono::{DateTime, Duration, Utc};

use gtdmap_models::{ItemId, WorkItem};

use crate::bucket::{BucketGroup, BucketMetadata, UrgencyLevel};
use crate::registry::URGENCY_BUCKETS;

/// Items due within this many hours count as urgent.
pub const URGENT_WINDOW_HOURS: i64 = 48;

/// One row of the urgency rule table. Rows are tried in order and the
/// first match wins, so an overdue high-priority item is never `important`.
struct UrgencyRule {
    level: UrgencyLevel,
    matches: fn(&WorkItem, DateTime<Utc>) -> bool,
}

/// Parallel to `URGENCY_BUCKETS`.
const RULES: [UrgencyRule; 4] = [
    UrgencyRule {
        level: UrgencyLevel::Critical,
        matches: is_overdue,
    },
    UrgencyRule {
        level: UrgencyLevel::High,
        matches: is_due_soon,
    },
    UrgencyRule {
        level: UrgencyLevel::Medium,
        matches: is_important,
    },
    UrgencyRule {
        level: UrgencyLevel::Low,
        matches: always,
    },
];

fn is_overdue(item: &WorkItem, now: DateTime<Utc>) -> bool {
    item.due_date.is_some_and(|due| due < now)
}

fn is_due_soon(item: &WorkItem, now: DateTime<Utc>) -> bool {
    let horizon = now + Duration::hours(URGENT_WINDOW_HOURS);
    item.due_date.is_some_and(|due| due >= now && due <= horizon)
}

fn is_important(item: &WorkItem, _now: DateTime<Utc>) -> bool {
    item.priority.is_elevated()
}

fn always(_item: &WorkItem, _now: DateTime<Utc>) -> bool {
    true
}

pub(super) fn classify(items: &[&WorkItem], now: DateTime<Utc>) -> Vec<BucketGroup> {
    let mut groups: [Vec<ItemId>; 4] = Default::default();

    for item in items {
        if let Some(slot) = RULES.iter().position(|rule| (rule.matches)(item, now)) {
            groups[slot].push(item.id.clone());
        }
    }

    URGENCY_BUCKETS
        .iter()
        .zip(RULES.iter())
        .zip(groups)
        .enumerate()
        .map(|(i, ((definition, rule), ids))| {
            BucketGroup::from_definition(
                definition,
                ids,
                BucketMetadata::Urgency {
                    urgency_level: rule.level,
                    rank: i as u8 + 1,
                },
            )
        })
        .collect()
}
