//! Core data models for GTD Map.
//!
//! This crate provides the work item types consumed by the bucketing
//! engine, together with the lightweight references to the streams,
//! companies and projects an item is filed under.

pub mod builders;
pub mod ids;
pub mod refs;
pub mod work;

// Re-export main types
pub use builders::WorkItemBuilder;
pub use ids::{CompanyId, ItemId, OrganizationId, ProjectId, StreamId};
pub use refs::{CompanyRef, GtdRole, ProjectRef, StreamRef};
pub use work::{EnergyLevel, ItemStatus, Priority, WorkItem};
