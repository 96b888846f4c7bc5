//! Multi-dimensional bucketing engine for GTD Map.
//!
//! This crate classifies a snapshot of work items into buckets along one of
//! five view types and derives statistics from the result:
//! - Classification by urgency, energy, horizon, business group or stream
//! - Cross-bucket totals and per-view metrics
//! - Rule-based recommendations for a selected bucket
//! - A 3D scene layout of the buckets
//!
//! Everything here is a synchronous pure function over borrowed input.
//!
//! # Example
//!
//! ```
//! use gtdmap_buckets::{aggregate, classify};
//! use gtdmap_models::{Priority, WorkItem};
//!
//! let items = vec![WorkItem::with_priority("Ship release", Priority::High)];
//! let data = classify("urgency", &items).unwrap();
//! let stats = aggregate(&data, "urgency", data.bucket("important")).unwrap();
//!
//! assert_eq!(stats.totals.total_items, 1);
//! assert!(stats.recommendation.is_some());
//! ```

pub mod bucket;
pub mod classifier;
pub mod error;
pub mod recommend;
pub mod registry;
pub mod scene;
pub mod stats;

pub use bucket::{
    BucketGroup, BucketMetadata, BucketViewData, GroupKey, ReviewFrequency, TimeOfDay,
    UrgencyLevel, ViewMetadata,
};
pub use classifier::{classify, classify_at, infer_energy, URGENT_WINDOW_HOURS};
pub use error::{BucketError, Result};
pub use recommend::{recommended_action, Recommendation, LOW_EFFICIENCY_THRESHOLD};
pub use registry::{lookup, view_types, BucketDefinition, ViewCategory, ViewType, ViewTypeId};
pub use scene::{scene_for, SceneBucket, SceneView};
pub use stats::{
    aggregate, aggregate_for, aggregate_selected, average_per_non_empty_bucket,
    non_empty_buckets, total_items, view_specific_metrics, BucketStats, BucketTotals,
    ViewMetrics,
};
