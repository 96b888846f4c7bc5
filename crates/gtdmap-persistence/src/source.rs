//! The collaborator that supplies work items to the engine.

use gtdmap_models::{OrganizationId, WorkItem};

use crate::error::Result;

/// Supplies the active work items of an organization.
///
/// Implementations return only items that are neither completed nor
/// canceled, with any stream efficiency already filled in.
pub trait WorkItemSource: Send + Sync {
    fn fetch_active_work_items(&self, organization_id: &OrganizationId) -> Result<Vec<WorkItem>>;
}
