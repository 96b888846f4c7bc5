//! Cross-bucket statistics for a classification.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::bucket::{BucketGroup, BucketMetadata, BucketViewData};
use crate::error::Result;
use crate::recommend::{recommended_action, Recommendation};
use crate::registry::{ViewTypeId, UNASSIGNED_STREAM_BUCKET, UNGROUPED_BUCKET};

/// Weights applied to overdue, urgent and important counts in the urgency score.
pub const URGENCY_WEIGHTS: (usize, usize, usize) = (3, 2, 1);

/// Size and spread of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketTotals {
    pub total_items: usize,
    pub bucket_count: usize,
    pub non_empty_buckets: usize,
    pub average_per_non_empty_bucket: usize,
}

/// Derived indicators, one variant per dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewMetrics {
    #[serde(rename_all = "camelCase")]
    Urgency {
        /// Overdue plus urgent items.
        needs_attention: usize,
        /// Weighted pressure, 0-100.
        urgency_score: u8,
    },
    #[serde(rename_all = "camelCase")]
    Energy {
        high_energy: usize,
        /// Share of low-energy items, in percent.
        energy_balance: u8,
    },
    #[serde(rename_all = "camelCase")]
    Horizon {
        active_levels: usize,
        operational_items: usize,
        strategic_items: usize,
        /// Operational over strategic items; absent when nothing is strategic.
        operational_ratio: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    Business {
        /// Companies and projects with items. Like `active_streams`, the
        /// catch-all bucket is not a group.
        active_groups: usize,
        /// Share of the largest bucket, ungrouped included, in percent.
        concentration: u8,
    },
    #[serde(rename_all = "camelCase")]
    Stream {
        active_streams: usize,
        mean_efficiency: f64,
    },
}

/// Statistics for one classification, plus an optional recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketStats {
    pub view_type: ViewTypeId,
    pub totals: BucketTotals,
    pub metrics: ViewMetrics,
    pub recommendation: Option<Recommendation>,
}

/// Sum of bucket counts.
pub fn total_items(buckets: &[BucketGroup]) -> usize {
    buckets.iter().map(|b| b.count).sum()
}

/// Buckets holding at least one item, in display order.
pub fn non_empty_buckets(buckets: &[BucketGroup]) -> Vec<&BucketGroup> {
    buckets.iter().filter(|b| !b.is_empty()).collect()
}

/// Average items per non-empty bucket, rounded; 0 when every bucket is empty.
pub fn average_per_non_empty_bucket(buckets: &[BucketGroup]) -> usize {
    let non_empty = non_empty_buckets(buckets).len();
    if non_empty == 0 {
        return 0;
    }
    (total_items(buckets) as f64 / non_empty as f64).round() as usize
}

/// `round(100 * part / whole)`, clamped to 100. Zero when `whole` is zero.
fn percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round().min(100.0) as u8
}

fn count_of(buckets: &[BucketGroup], id: &str) -> usize {
    buckets
        .iter()
        .find(|b| b.id == id)
        .map(|b| b.count)
        .unwrap_or(0)
}

/// Computes the dimension-specific indicators for `view`.
pub fn view_specific_metrics(view: ViewTypeId, buckets: &[BucketGroup]) -> ViewMetrics {
    let total = total_items(buckets);

    match view {
        ViewTypeId::Urgency => {
            let overdue = count_of(buckets, "overdue");
            let urgent = count_of(buckets, "urgent");
            let important = count_of(buckets, "important");
            let (w_overdue, w_urgent, w_important) = URGENCY_WEIGHTS;
            let weighted = w_overdue * overdue + w_urgent * urgent + w_important * important;

            ViewMetrics::Urgency {
                needs_attention: overdue + urgent,
                urgency_score: percent(weighted, total),
            }
        }
        ViewTypeId::Energy => ViewMetrics::Energy {
            high_energy: count_of(buckets, "high-energy"),
            energy_balance: percent(count_of(buckets, "low-energy"), total),
        },
        ViewTypeId::Horizon => {
            let mut active_levels = 0;
            let mut operational_items = 0;
            let mut strategic_items = 0;

            for bucket in buckets {
                let BucketMetadata::Horizon { horizon_level, .. } = bucket.metadata else {
                    continue;
                };
                if bucket.count > 0 {
                    active_levels += 1;
                }
                if horizon_level <= 1 {
                    operational_items += bucket.count;
                } else {
                    strategic_items += bucket.count;
                }
            }

            let operational_ratio = (strategic_items > 0)
                .then(|| operational_items as f64 / strategic_items as f64);

            ViewMetrics::Horizon {
                active_levels,
                operational_items,
                strategic_items,
                operational_ratio,
            }
        }
        ViewTypeId::Business => {
            let largest = buckets.iter().map(|b| b.count).max().unwrap_or(0);
            let active_groups = buckets
                .iter()
                .filter(|b| b.count > 0 && b.id != UNGROUPED_BUCKET.id)
                .count();
            ViewMetrics::Business {
                active_groups,
                concentration: percent(largest, total),
            }
        }
        ViewTypeId::Stream => {
            let active_streams = buckets
                .iter()
                .filter(|b| b.count > 0 && b.id != UNASSIGNED_STREAM_BUCKET.id)
                .count();

            let efficiencies: Vec<f64> = buckets
                .iter()
                .filter(|b| b.count > 0)
                .filter_map(|b| match b.metadata {
                    BucketMetadata::Stream { efficiency, .. } => efficiency,
                    _ => None,
                })
                .collect();

            let mean_efficiency = if efficiencies.is_empty() {
                0.0
            } else {
                efficiencies.iter().sum::<f64>() / efficiencies.len() as f64
            };

            ViewMetrics::Stream {
                active_streams,
                mean_efficiency,
            }
        }
    }
}

/// Aggregates `data` under the view named by `view_type_id`.
pub fn aggregate(
    data: &BucketViewData,
    view_type_id: &str,
    selected: Option<&BucketGroup>,
) -> Result<BucketStats> {
    let view = view_type_id.parse::<ViewTypeId>()?;
    Ok(aggregate_for(data, view, selected))
}

/// Aggregates `data` under `view`.
pub fn aggregate_for(
    data: &BucketViewData,
    view: ViewTypeId,
    selected: Option<&BucketGroup>,
) -> BucketStats {
    if data.view_type() != view {
        warn!(
            requested = %view,
            classified = %data.view_type(),
            "Aggregating buckets under a different view type"
        );
    }

    let buckets = &data.buckets;
    let totals = BucketTotals {
        total_items: total_items(buckets),
        bucket_count: buckets.len(),
        non_empty_buckets: non_empty_buckets(buckets).len(),
        average_per_non_empty_bucket: average_per_non_empty_bucket(buckets),
    };

    BucketStats {
        view_type: view,
        totals,
        metrics: view_specific_metrics(view, buckets),
        recommendation: selected.map(|bucket| recommended_action(view, bucket)),
    }
}

/// Aggregates `data`, recommending for the bucket with id `bucket_id`.
///
/// A bucket id that is not part of `data` yields no recommendation.
pub fn aggregate_selected(
    data: &BucketViewData,
    view_type_id: &str,
    bucket_id: &str,
) -> Result<BucketStats> {
    aggregate(data, view_type_id, data.bucket(bucket_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_at;
    use chrono::{Duration, TimeZone, Utc};
    use gtdmap_models::{ItemId, Priority, StreamRef, WorkItem};

    fn stream_bucket(id: &str, count: usize, efficiency: Option<f64>) -> BucketGroup {
        BucketGroup {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            count,
            item_ids: (0..count).map(|i| ItemId::from(format!("{}-{}", id, i))).collect(),
            metadata: BucketMetadata::Stream {
                stream_id: None,
                gtd_role: None,
                efficiency,
            },
        }
    }

    fn urgency_scenario() -> BucketViewData {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut items = Vec::new();
        for i in 0..2 {
            items.push(
                WorkItem::builder(format!("overdue {}", i))
                    .due(now - Duration::days(1))
                    .build(),
            );
        }
        for i in 0..3 {
            items.push(
                WorkItem::builder(format!("urgent {}", i))
                    .due(now + Duration::hours(24))
                    .build(),
            );
        }
        items.push(
            WorkItem::builder("important")
                .due(now + Duration::days(10))
                .priority(Priority::High)
                .build(),
        );
        for i in 0..4 {
            items.push(WorkItem::builder(format!("normal {}", i)).build());
        }
        classify_at(ViewTypeId::Urgency, &items, now)
    }

    #[test]
    fn test_urgency_score_is_clamped() {
        let data = urgency_scenario();
        let stats = aggregate(&data, "urgency", None).unwrap();

        assert_eq!(stats.totals.total_items, 10);
        assert_eq!(
            stats.metrics,
            ViewMetrics::Urgency {
                needs_attention: 5,
                urgency_score: 100,
            }
        );
        assert!(stats.recommendation.is_none());
    }

    #[test]
    fn test_average_per_non_empty_bucket() {
        let buckets = vec![
            stream_bucket("stream-a", 5, Some(40.0)),
            stream_bucket("stream-b", 0, Some(90.0)),
            stream_bucket("stream-c", 2, None),
        ];
        assert_eq!(total_items(&buckets), 7);
        assert_eq!(non_empty_buckets(&buckets).len(), 2);
        assert_eq!(average_per_non_empty_bucket(&buckets), 4);
    }

    #[test]
    fn test_empty_buckets_are_guarded() {
        let buckets = vec![stream_bucket("stream-a", 0, None)];
        assert_eq!(average_per_non_empty_bucket(&buckets), 0);
        assert_eq!(average_per_non_empty_bucket(&[]), 0);
        assert_eq!(
            view_specific_metrics(ViewTypeId::Urgency, &[]),
            ViewMetrics::Urgency {
                needs_attention: 0,
                urgency_score: 0,
            }
        );
        assert_eq!(
            view_specific_metrics(ViewTypeId::Business, &[]),
            ViewMetrics::Business {
                active_groups: 0,
                concentration: 0,
            }
        );
    }

    #[test]
    fn test_non_empty_buckets_keep_order() {
        let buckets = vec![
            stream_bucket("stream-c", 1, None),
            stream_bucket("stream-a", 0, None),
            stream_bucket("stream-b", 3, None),
        ];
        let ids: Vec<_> = non_empty_buckets(&buckets).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["stream-c", "stream-b"]);
    }

    #[test]
    fn test_stream_metrics() {
        let buckets = vec![
            stream_bucket("stream-a", 5, Some(40.0)),
            stream_bucket("stream-b", 0, Some(90.0)),
            stream_bucket("stream-c", 2, Some(20.0)),
            stream_bucket("stream-unassigned", 3, None),
        ];
        assert_eq!(
            view_specific_metrics(ViewTypeId::Stream, &buckets),
            ViewMetrics::Stream {
                active_streams: 2,
                mean_efficiency: 30.0,
            }
        );
    }

    #[test]
    fn test_business_metrics() {
        use gtdmap_models::{CompanyRef, ProjectRef};

        let acme = CompanyRef::new("c-1", "Acme");
        let items = vec![
            WorkItem::builder("a").company(acme.clone()).build(),
            WorkItem::builder("b").company(acme.clone()).build(),
            WorkItem::builder("c").company(acme).build(),
            WorkItem::builder("d").project(ProjectRef::new("p-1", "Rollout")).build(),
            WorkItem::builder("e").build(),
            WorkItem::builder("f").build(),
        ];
        let data = classify_at(ViewTypeId::Business, &items, Utc::now());
        assert_eq!(
            aggregate_for(&data, ViewTypeId::Business, None).metrics,
            ViewMetrics::Business {
                active_groups: 2,
                concentration: 50,
            }
        );
    }

    #[test]
    fn test_ungrouped_is_not_a_business_group() {
        let acme = gtdmap_models::CompanyRef::new("c-1", "Acme");
        let items = vec![
            WorkItem::builder("a").company(acme.clone()).build(),
            WorkItem::builder("b").company(acme.clone()).build(),
            WorkItem::builder("c").company(acme).build(),
            WorkItem::builder("loose").build(),
        ];
        let data = classify_at(ViewTypeId::Business, &items, Utc::now());
        assert_eq!(
            aggregate_for(&data, ViewTypeId::Business, None).metrics,
            ViewMetrics::Business {
                active_groups: 1,
                concentration: 75,
            }
        );

        // Only ungrouped items: no groups, but the bucket still dominates.
        let loose = vec![WorkItem::new("x"), WorkItem::new("y")];
        let data = classify_at(ViewTypeId::Business, &loose, Utc::now());
        assert_eq!(
            aggregate_for(&data, ViewTypeId::Business, None).metrics,
            ViewMetrics::Business {
                active_groups: 0,
                concentration: 100,
            }
        );
    }

    #[test]
    fn test_horizon_metrics() {
        let items = vec![
            WorkItem::builder("a").horizon(0).build(),
            WorkItem::builder("b").horizon(1).build(),
            WorkItem::builder("c").horizon(1).build(),
            WorkItem::builder("d").horizon(3).build(),
        ];
        let data = classify_at(ViewTypeId::Horizon, &items, Utc::now());

        match aggregate_for(&data, ViewTypeId::Horizon, None).metrics {
            ViewMetrics::Horizon {
                active_levels,
                operational_items,
                strategic_items,
                operational_ratio,
            } => {
                assert_eq!(active_levels, 3);
                assert_eq!(operational_items, 3);
                assert_eq!(strategic_items, 1);
                assert_eq!(operational_ratio, Some(3.0));
            }
            other => panic!("unexpected metrics: {:?}", other),
        }
    }

    #[test]
    fn test_horizon_ratio_absent_without_strategic_items() {
        let items = vec![WorkItem::builder("a").horizon(0).build()];
        let data = classify_at(ViewTypeId::Horizon, &items, Utc::now());

        let ViewMetrics::Horizon {
            operational_ratio, ..
        } = aggregate_for(&data, ViewTypeId::Horizon, None).metrics
        else {
            panic!("expected horizon metrics");
        };
        assert_eq!(operational_ratio, None);
    }

    #[test]
    fn test_energy_metrics() {
        let items = vec![
            WorkItem::builder("a").energy(gtdmap_models::EnergyLevel::High).build(),
            WorkItem::builder("b").energy(gtdmap_models::EnergyLevel::Low).build(),
            WorkItem::builder("c").energy(gtdmap_models::EnergyLevel::Low).build(),
            WorkItem::builder("d").energy(gtdmap_models::EnergyLevel::Medium).build(),
        ];
        let data = classify_at(ViewTypeId::Energy, &items, Utc::now());
        assert_eq!(
            aggregate_for(&data, ViewTypeId::Energy, None).metrics,
            ViewMetrics::Energy {
                high_energy: 1,
                energy_balance: 50,
            }
        );
    }

    #[test]
    fn test_aggregate_selected_recommends() {
        let data = urgency_scenario();
        let stats = aggregate_selected(&data, "urgency", "overdue").unwrap();
        let rec = stats.recommendation.unwrap();
        assert_eq!(rec.bucket_id, "overdue");
        assert!(rec.action.contains("immediately"));

        let stats = aggregate_selected(&data, "urgency", "no-such-bucket").unwrap();
        assert!(stats.recommendation.is_none());
    }

    #[test]
    fn test_aggregate_unknown_view() {
        let data = urgency_scenario();
        assert!(aggregate(&data, "not-a-real-view", None).is_err());
    }

    #[test]
    fn test_aggregate_under_other_view() {
        let data = urgency_scenario();
        let stats = aggregate(&data, "business", None).unwrap();
        assert_eq!(stats.view_type, ViewTypeId::Business);
        assert_eq!(stats.totals.total_items, 10);
    }

    #[test]
    fn test_stream_items_carry_efficiency() {
        let sales = StreamRef::new("s-1", "Sales").with_efficiency(25.0);
        let items = vec![WorkItem::builder("call").stream(sales).build()];
        let data = classify_at(ViewTypeId::Stream, &items, Utc::now());
        let stats = aggregate_selected(&data, "stream", "stream-s-1").unwrap();
        assert!(stats
            .recommendation
            .unwrap()
            .action
            .contains("Review stream configuration"));
    }
}
