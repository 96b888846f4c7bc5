//! Work item types.
//!
//! A work item is the unit the bucketing engine classifies: a task, next
//! action or deal step with its scheduling attributes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CompanyId, ItemId, ProjectId, StreamId};
use crate::refs::{CompanyRef, ProjectRef, StreamRef};

/// Priority of a work item.
///
/// Variants are declared in ascending order so `Ord` compares by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    /// Returns true for High and Urgent.
    pub fn is_elevated(self) -> bool {
        self >= Priority::High
    }
}

/// Energy an item demands from whoever does it.
///
/// High/Medium/Low are a scale; Creative and Administrative are separate
/// kinds of work rather than points on that scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnergyLevel {
    High,
    Medium,
    Low,
    Creative,
    Administrative,
}

impl EnergyLevel {
    /// Returns the lowercase name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::High => "high",
            EnergyLevel::Medium => "medium",
            EnergyLevel::Low => "low",
            EnergyLevel::Creative => "creative",
            EnergyLevel::Administrative => "administrative",
        }
    }
}

/// Lifecycle status of a work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    NotStarted,
    InProgress,
    Waiting,
    Completed,
    Canceled,
}

impl ItemStatus {
    /// Completed and canceled items take no part in active bucketing.
    pub fn is_active(self) -> bool {
        !matches!(self, ItemStatus::Completed | ItemStatus::Canceled)
    }
}

/// A unit of work as delivered by the data store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItem {
    /// Unique identifier.
    pub id: ItemId,

    pub title: String,

    /// Deadline. `None` means no deadline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub priority: Priority,

    /// Explicit energy requirement. When absent the energy view infers one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_required: Option<EnergyLevel>,

    /// GTD horizon, 0 = runway. Higher is more strategic.
    ///
    /// Stored levels range over 0-255; anything larger fails to deserialize.
    /// Levels above 5 get a bucket of their own.
    #[serde(default)]
    pub horizon_level: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<StreamRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyRef>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,

    #[serde(default)]
    pub status: ItemStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f32>,

    /// GTD context, e.g. `@calls` or `@computer`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl WorkItem {
    /// Creates a new active item with medium priority and no deadline.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            due_date: None,
            priority: Priority::Medium,
            energy_required: None,
            horizon_level: 0,
            stream: None,
            company: None,
            project: None,
            status: ItemStatus::NotStarted,
            estimated_hours: None,
            context: None,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Creates a new item with the given priority.
    pub fn with_priority(title: impl Into<String>, priority: Priority) -> Self {
        let mut item = Self::new(title);
        item.priority = priority;
        item
    }

    /// Returns true unless the item is completed or canceled.
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn stream_id(&self) -> Option<&StreamId> {
        self.stream.as_ref().map(|s| &s.id)
    }

    pub fn company_id(&self) -> Option<&CompanyId> {
        self.company.as_ref().map(|c| &c.id)
    }

    pub fn project_id(&self) -> Option<&ProjectId> {
        self.project.as_ref().map(|p| &p.id)
    }

    /// Marks the item completed now.
    pub fn complete(&mut self) {
        self.status = ItemStatus::Completed;
        self.completed_at = Some(Utc::now());
    }
}
