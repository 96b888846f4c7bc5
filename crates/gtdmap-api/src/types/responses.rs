//! Response DTOs for the API.

use serde::Serialize;

use gtdmap_buckets::ViewType;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// View catalog response.
#[derive(Debug, Serialize)]
pub struct ViewListResponse {
    /// Registered view types in catalog order.
    pub views: &'static [ViewType],
    /// Total count.
    pub total: usize,
}
