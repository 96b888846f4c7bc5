//! Bucket output types.
//!
//! A `BucketViewData` is an immutable snapshot produced by one
//! classification pass. Every active item lands in exactly one bucket.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use gtdmap_models::{CompanyId, EnergyLevel, GtdRole, ItemId, ProjectId, StreamId};

use crate::registry::{BucketDefinition, ViewTypeId};

/// How pressing an urgency bucket is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Critical,
    High,
    Medium,
    Low,
}

/// Best time of day to schedule an energy bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

/// How often a horizon level should be reviewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewFrequency {
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

impl ReviewFrequency {
    /// Review cadence for a horizon level.
    pub fn for_level(level: u8) -> Self {
        match level {
            0 => ReviewFrequency::Daily,
            1 => ReviewFrequency::Weekly,
            2 => ReviewFrequency::Monthly,
            _ => ReviewFrequency::Quarterly,
        }
    }
}

/// Key an item is grouped under in the business view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum GroupKey {
    Company(CompanyId),
    Project(ProjectId),
    Ungrouped,
}

/// Dimension-specific data attached to a bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "dimension", rename_all = "lowercase")]
pub enum BucketMetadata {
    #[serde(rename_all = "camelCase")]
    Urgency {
        urgency_level: UrgencyLevel,
        /// 1 is the most pressing bucket.
        rank: u8,
    },
    #[serde(rename_all = "camelCase")]
    Energy {
        energy_level: EnergyLevel,
        best_time: TimeOfDay,
        focus_required: bool,
    },
    #[serde(rename_all = "camelCase")]
    Horizon {
        horizon_level: u8,
        review_frequency: ReviewFrequency,
    },
    #[serde(rename_all = "camelCase")]
    Business {
        group: GroupKey,
        industry: Option<String>,
        /// Number of High or Urgent items in the group.
        revenue_impact: usize,
    },
    #[serde(rename_all = "camelCase")]
    Stream {
        stream_id: Option<StreamId>,
        gtd_role: Option<GtdRole>,
        efficiency: Option<f64>,
    },
}

/// One bucket of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketGroup {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub count: usize,
    pub item_ids: Vec<ItemId>,
    pub metadata: BucketMetadata,
}

impl BucketGroup {
    /// Builds a bucket from a static definition.
    pub fn from_definition(
        definition: &BucketDefinition,
        item_ids: Vec<ItemId>,
        metadata: BucketMetadata,
    ) -> Self {
        Self {
            id: definition.id.to_string(),
            name: definition.name.to_string(),
            description: definition.description.to_string(),
            icon: definition.icon.to_string(),
            color: definition.color.to_string(),
            count: item_ids.len(),
            item_ids,
            metadata,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Metadata describing a classification pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewMetadata {
    pub generated_at: DateTime<Utc>,
    pub view_type: ViewTypeId,
    /// Number of active items classified.
    pub total_items: usize,
    /// Number of completed or canceled items left out.
    pub excluded_items: usize,
}

/// Full result of a classification pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketViewData {
    pub buckets: Vec<BucketGroup>,
    pub metadata: ViewMetadata,
}

impl BucketViewData {
    pub fn view_type(&self) -> ViewTypeId {
        self.metadata.view_type
    }

    /// Finds a bucket by id.
    pub fn bucket(&self, id: &str) -> Option<&BucketGroup> {
        self.buckets.iter().find(|b| b.id == id)
    }

    /// Compares two classifications, ignoring when they were generated.
    pub fn same_classification(&self, other: &BucketViewData) -> bool {
        self.buckets == other.buckets
            && self.metadata.view_type == other.metadata.view_type
            && self.metadata.total_items == other.metadata.total_items
            && self.metadata.excluded_items == other.metadata.excluded_items
    }
}
