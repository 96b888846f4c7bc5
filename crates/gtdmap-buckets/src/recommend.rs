//! Recommended next action for a bucket.
//!
//! Recommendations come from a rule table keyed by view type, bucket id and
//! a predicate over the bucket. The first matching rule wins; adding a
//! dimension means adding rows, not branches.

use serde::{Deserialize, Serialize};

use crate::bucket::{BucketGroup, BucketMetadata};
use crate::registry::ViewTypeId;

/// Streams below this efficiency (percent) are flagged for review.
pub const LOW_EFFICIENCY_THRESHOLD: f64 = 30.0;

/// A recommended action for one bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub bucket_id: String,
    pub action: String,
}

/// Which buckets of a view a rule applies to.
enum BucketMatch {
    Any,
    Id(&'static str),
}

impl BucketMatch {
    fn matches(&self, bucket: &BucketGroup) -> bool {
        match self {
            BucketMatch::Any => true,
            BucketMatch::Id(id) => bucket.id == *id,
        }
    }
}

struct Rule {
    view: Option<ViewTypeId>,
    bucket: BucketMatch,
    when: fn(&BucketGroup) -> bool,
    template: &'static str,
}

const FALLBACK_TEMPLATE: &str = "Review the {count} items in {name}";

static RULES: &[Rule] = &[
    // Empty buckets, any view.
    Rule {
        view: None,
        bucket: BucketMatch::Any,
        when: BucketGroup::is_empty,
        template: "{name} is clear, nothing to act on",
    },
    // Urgency
    Rule {
        view: Some(ViewTypeId::Urgency),
        bucket: BucketMatch::Id("overdue"),
        when: always,
        template: "Address {count} overdue items immediately",
    },
    Rule {
        view: Some(ViewTypeId::Urgency),
        bucket: BucketMatch::Id("urgent"),
        when: always,
        template: "Schedule time today for {count} items due within 48 hours",
    },
    Rule {
        view: Some(ViewTypeId::Urgency),
        bucket: BucketMatch::Id("important"),
        when: always,
        template: "Block focus time for {count} high-priority items before they become urgent",
    },
    Rule {
        view: Some(ViewTypeId::Urgency),
        bucket: BucketMatch::Id("normal"),
        when: always,
        template: "Revisit {count} items during the weekly review",
    },
    // Energy
    Rule {
        view: Some(ViewTypeId::Energy),
        bucket: BucketMatch::Id("high-energy"),
        when: always,
        template: "Tackle {count} high-energy items during your morning peak",
    },
    Rule {
        view: Some(ViewTypeId::Energy),
        bucket: BucketMatch::Id("medium-energy"),
        when: always,
        template: "Batch {count} medium-energy items into the afternoon",
    },
    Rule {
        view: Some(ViewTypeId::Energy),
        bucket: BucketMatch::Id("low-energy"),
        when: always,
        template: "Use {count} low-energy items to fill gaps late in the day",
    },
    Rule {
        view: Some(ViewTypeId::Energy),
        bucket: BucketMatch::Id("creative-energy"),
        when: always,
        template: "Protect an uninterrupted block for {count} creative items",
    },
    Rule {
        view: Some(ViewTypeId::Energy),
        bucket: BucketMatch::Id("administrative-energy"),
        when: always,
        template: "Clear {count} administrative items in a single session",
    },
    // Horizon
    Rule {
        view: Some(ViewTypeId::Horizon),
        bucket: BucketMatch::Any,
        when: is_runway,
        template: "Work through {count} runway actions today",
    },
    Rule {
        view: Some(ViewTypeId::Horizon),
        bucket: BucketMatch::Any,
        when: is_project_level,
        template: "Check each of {count} projects has a next action in the weekly review",
    },
    Rule {
        view: Some(ViewTypeId::Horizon),
        bucket: BucketMatch::Any,
        when: is_area_level,
        template: "Review {count} areas of responsibility this month",
    },
    Rule {
        view: Some(ViewTypeId::Horizon),
        bucket: BucketMatch::Any,
        when: always,
        template: "Revisit {count} items at {name} in the quarterly review",
    },
    // Business
    Rule {
        view: Some(ViewTypeId::Business),
        bucket: BucketMatch::Id("ungrouped"),
        when: always,
        template: "Assign {count} ungrouped items to a company or project",
    },
    Rule {
        view: Some(ViewTypeId::Business),
        bucket: BucketMatch::Any,
        when: has_revenue_impact,
        template: "Prioritise {impact} high-priority items for {name}",
    },
    Rule {
        view: Some(ViewTypeId::Business),
        bucket: BucketMatch::Any,
        when: always,
        template: "Review open work for {name}",
    },
    // Stream
    Rule {
        view: Some(ViewTypeId::Stream),
        bucket: BucketMatch::Id("stream-unassigned"),
        when: always,
        template: "Route {count} unassigned items into a stream",
    },
    Rule {
        view: Some(ViewTypeId::Stream),
        bucket: BucketMatch::Any,
        when: has_low_efficiency,
        template: "Review stream configuration for {name}: efficiency is {efficiency}%",
    },
    Rule {
        view: Some(ViewTypeId::Stream),
        bucket: BucketMatch::Any,
        when: always,
        template: "Keep {name} flowing: {count} items in progress",
    },
];

fn always(_bucket: &BucketGroup) -> bool {
    true
}

fn horizon_level(bucket: &BucketGroup) -> Option<u8> {
    match bucket.metadata {
        BucketMetadata::Horizon { horizon_level, .. } => Some(horizon_level),
        _ => None,
    }
}

fn is_runway(bucket: &BucketGroup) -> bool {
    horizon_level(bucket) == Some(0)
}

fn is_project_level(bucket: &BucketGroup) -> bool {
    horizon_level(bucket) == Some(1)
}

fn is_area_level(bucket: &BucketGroup) -> bool {
    horizon_level(bucket) == Some(2)
}

fn revenue_impact(bucket: &BucketGroup) -> usize {
    match bucket.metadata {
        BucketMetadata::Business { revenue_impact, .. } => revenue_impact,
        _ => 0,
    }
}

fn has_revenue_impact(bucket: &BucketGroup) -> bool {
    revenue_impact(bucket) > 0
}

fn efficiency(bucket: &BucketGroup) -> Option<f64> {
    match bucket.metadata {
        BucketMetadata::Stream { efficiency, .. } => efficiency,
        _ => None,
    }
}

fn has_low_efficiency(bucket: &BucketGroup) -> bool {
    efficiency(bucket).is_some_and(|e| e < LOW_EFFICIENCY_THRESHOLD)
}

/// Fills the template's placeholders in one pass, so substituted values
/// are never scanned again.
fn render(template: &str, bucket: &BucketGroup) -> String {
    let mut out = String::with_capacity(template.len() + bucket.name.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            rest = tail;
            break;
        };

        match &tail[1..end] {
            "count" => out.push_str(&bucket.count.to_string()),
            "name" => out.push_str(&bucket.name),
            "impact" => out.push_str(&revenue_impact(bucket).to_string()),
            "efficiency" => match efficiency(bucket) {
                Some(e) => out.push_str(&format!("{}", e.round())),
                None => out.push_str("n/a"),
            },
            _ => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }

    out.push_str(rest);
    out
}

/// Returns the recommended action for `bucket` under `view`.
pub fn recommended_action(view: ViewTypeId, bucket: &BucketGroup) -> Recommendation {
    let template = RULES
        .iter()
        .find(|rule| {
            rule.view.map_or(true, |v| v == view)
                && rule.bucket.matches(bucket)
                && (rule.when)(bucket)
        })
        .map(|rule| rule.template)
        .unwrap_or(FALLBACK_TEMPLATE);

    Recommendation {
        bucket_id: bucket.id.clone(),
        action: render(template, bucket),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::{GroupKey, ReviewFrequency, UrgencyLevel};
    use gtdmap_models::{CompanyId, ItemId, StreamId};

    fn bucket(id: &str, name: &str, count: usize, metadata: BucketMetadata) -> BucketGroup {
        BucketGroup {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            icon: String::new(),
            color: String::new(),
            count,
            item_ids: (0..count).map(|i| ItemId::from(format!("i-{}", i))).collect(),
            metadata,
        }
    }

    fn urgency(id: &str, count: usize) -> BucketGroup {
        bucket(
            id,
            id,
            count,
            BucketMetadata::Urgency {
                urgency_level: UrgencyLevel::Critical,
                rank: 1,
            },
        )
    }

    fn stream(name: &str, count: usize, efficiency: Option<f64>) -> BucketGroup {
        bucket(
            "stream-s-1",
            name,
            count,
            BucketMetadata::Stream {
                stream_id: Some(StreamId::from("s-1")),
                gtd_role: None,
                efficiency,
            },
        )
    }

    #[test]
    fn test_overdue_addresses_immediately() {
        let rec = recommended_action(ViewTypeId::Urgency, &urgency("overdue", 3));
        assert_eq!(rec.bucket_id, "overdue");
        assert_eq!(rec.action, "Address 3 overdue items immediately");
    }

    #[test]
    fn test_empty_bucket_is_clear() {
        let rec = recommended_action(ViewTypeId::Urgency, &urgency("overdue", 0));
        assert_eq!(rec.action, "overdue is clear, nothing to act on");
    }

    #[test]
    fn test_low_efficiency_stream_needs_review() {
        let rec = recommended_action(ViewTypeId::Stream, &stream("Sales", 4, Some(12.4)));
        assert_eq!(
            rec.action,
            "Review stream configuration for Sales: efficiency is 12%"
        );
    }

    #[test]
    fn test_healthy_stream_keeps_flowing() {
        let rec = recommended_action(ViewTypeId::Stream, &stream("Sales", 4, Some(75.0)));
        assert_eq!(rec.action, "Keep Sales flowing: 4 items in progress");

        let unknown = recommended_action(ViewTypeId::Stream, &stream("Ops", 2, None));
        assert_eq!(unknown.action, "Keep Ops flowing: 2 items in progress");
    }

    #[test]
    fn test_bucket_names_are_not_expanded() {
        let rec = recommended_action(
            ViewTypeId::Stream,
            &stream("Ops {efficiency}{impact}", 1, Some(80.0)),
        );
        assert_eq!(
            rec.action,
            "Keep Ops {efficiency}{impact} flowing: 1 items in progress"
        );

        let low = recommended_action(ViewTypeId::Stream, &stream("{count}", 3, Some(10.0)));
        assert_eq!(
            low.action,
            "Review stream configuration for {count}: efficiency is 10%"
        );
    }

    #[test]
    fn test_horizon_levels() {
        let level = |n: u8| {
            bucket(
                &format!("horizon-{}", n),
                "50,000ft (Purpose)",
                1,
                BucketMetadata::Horizon {
                    horizon_level: n,
                    review_frequency: ReviewFrequency::for_level(n),
                },
            )
        };
        assert!(recommended_action(ViewTypeId::Horizon, &level(0))
            .action
            .contains("runway"));
        assert!(recommended_action(ViewTypeId::Horizon, &level(1))
            .action
            .contains("next action"));
        assert!(recommended_action(ViewTypeId::Horizon, &level(2))
            .action
            .contains("this month"));
        assert!(recommended_action(ViewTypeId::Horizon, &level(5))
            .action
            .contains("quarterly"));
    }

    #[test]
    fn test_business_revenue_impact() {
        let acme = bucket(
            "company-c-1",
            "Acme",
            5,
            BucketMetadata::Business {
                group: GroupKey::Company(CompanyId::from("c-1")),
                industry: None,
                revenue_impact: 2,
            },
        );
        let rec = recommended_action(ViewTypeId::Business, &acme);
        assert_eq!(rec.action, "Prioritise 2 high-priority items for Acme");
    }

    #[test]
    fn test_rules_are_scoped_to_view() {
        // An "overdue" id under another view must not pick the urgency rule.
        let rec = recommended_action(ViewTypeId::Energy, &urgency("overdue", 2));
        assert_eq!(rec.action, "Review the 2 items in overdue");
    }
}
