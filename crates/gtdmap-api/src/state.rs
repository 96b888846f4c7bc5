//! Application state shared across handlers.

use std::sync::Arc;

use gtdmap_models::{OrganizationId, WorkItem};
use gtdmap_persistence::{path_segment, ItemStore, WorkItemSource};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Where work items come from.
    pub source: Arc<dyn WorkItemSource>,
}

impl AppState {
    /// Creates a new AppState over an arbitrary item source.
    pub fn new(config: ApiConfig, source: Arc<dyn WorkItemSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }

    /// Creates an AppState backed by an `ItemStore` in the configured data dir.
    pub fn with_item_store(config: ApiConfig) -> Self {
        let store = ItemStore::new(&config.data_dir);
        Self::new(config, Arc::new(store))
    }

    /// Resolves the organization a request targets.
    ///
    /// Ids that could not name a single directory are rejected.
    pub fn organization(&self, requested: Option<String>) -> Result<OrganizationId> {
        match requested.filter(|id| !id.is_empty()) {
            Some(id) => {
                path_segment("organization", &id)
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                Ok(OrganizationId::from(id))
            }
            None => Ok(self.config.default_organization.clone()),
        }
    }

    /// Fetches active items off the async runtime; the source may block.
    pub async fn active_items(&self, organization_id: OrganizationId) -> Result<Vec<WorkItem>> {
        let source = Arc::clone(&self.source);
        let items = tokio::task::spawn_blocking(move || {
            source.fetch_active_work_items(&organization_id)
        })
        .await??;
        Ok(items)
    }
}
