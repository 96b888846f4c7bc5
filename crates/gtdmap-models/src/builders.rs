//! Builder patterns for complex types.

use chrono::{DateTime, Utc};

use crate::ids::ItemId;
use crate::refs::{CompanyRef, ProjectRef, StreamRef};
use crate::work::{EnergyLevel, ItemStatus, Priority, WorkItem};

/// Builder for creating WorkItem instances with a fluent API.
#[derive(Debug, Clone)]
pub struct WorkItemBuilder {
    id: Option<ItemId>,
    title: String,
    due_date: Option<DateTime<Utc>>,
    priority: Priority,
    energy_required: Option<EnergyLevel>,
    horizon_level: u8,
    stream: Option<StreamRef>,
    company: Option<CompanyRef>,
    project: Option<ProjectRef>,
    status: ItemStatus,
    estimated_hours: Option<f32>,
    context: Option<String>,
    created_at: Option<DateTime<Utc>>,
}

impl WorkItemBuilder {
    /// Creates a new WorkItemBuilder with required fields.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
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
            created_at: None,
        }
    }

    /// Sets an explicit ID (a random one is generated otherwise).
    pub fn id(mut self, id: impl Into<ItemId>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn due(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn energy(mut self, energy: EnergyLevel) -> Self {
        self.energy_required = Some(energy);
        self
    }

    pub fn horizon(mut self, level: u8) -> Self {
        self.horizon_level = level;
        self
    }

    pub fn stream(mut self, stream: StreamRef) -> Self {
        self.stream = Some(stream);
        self
    }

    pub fn company(mut self, company: CompanyRef) -> Self {
        self.company = Some(company);
        self
    }

    pub fn project(mut self, project: ProjectRef) -> Self {
        self.project = Some(project);
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = status;
        self
    }

    pub fn estimated_hours(mut self, hours: f32) -> Self {
        self.estimated_hours = Some(hours);
        self
    }

    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Sets the creation time (defaults to now).
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Builds the WorkItem.
    pub fn build(self) -> WorkItem {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        let completed_at = match self.status {
            ItemStatus::Completed => Some(created_at),
            _ => None,
        };

        WorkItem {
            id: self.id.unwrap_or_default(),
            title: self.title,
            due_date: self.due_date,
            priority: self.priority,
            energy_required: self.energy_required,
            horizon_level: self.horizon_level,
            stream: self.stream,
            company: self.company,
            project: self.project,
            status: self.status,
            estimated_hours: self.estimated_hours,
            context: self.context,
            created_at,
            completed_at,
        }
    }
}

/// Convenience methods on WorkItem for creating builders.
impl WorkItem {
    /// Creates a builder for a new work item.
    pub fn builder(title: impl Into<String>) -> WorkItemBuilder {
        WorkItemBuilder::new(title)
    }
}
