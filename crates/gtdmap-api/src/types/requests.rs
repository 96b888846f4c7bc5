//! Request DTOs for the API.

use serde::Deserialize;

/// Query parameters for view and scene requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    /// Organization to classify; the configured default when absent.
    pub organization_id: Option<String>,
}

/// Query parameters for stats requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsQuery {
    /// Organization to classify; the configured default when absent.
    pub organization_id: Option<String>,
    /// Bucket to recommend an action for.
    pub bucket: Option<String>,
}
