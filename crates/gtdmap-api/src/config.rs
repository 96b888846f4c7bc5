//! API configuration.

use std::path::PathBuf;
use std::time::Instant;

use tracing::warn;

use gtdmap_models::OrganizationId;

pub const ENV_HOST: &str = "GTDMAP_HOST";
pub const ENV_PORT: &str = "GTDMAP_PORT";
pub const ENV_DATA_DIR: &str = "GTDMAP_DATA_DIR";
pub const ENV_DEFAULT_ORG: &str = "GTDMAP_DEFAULT_ORG";
pub const ENV_CORS_ORIGINS: &str = "GTDMAP_CORS_ORIGINS";

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
    /// Root of the item store.
    pub data_dir: PathBuf,
    /// Organization used when a request names none.
    pub default_organization: OrganizationId,
    /// Allowed CORS origins. `*` allows any.
    pub cors_origins: Vec<String>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

/// `~/.gtd-map`, or `.gtd-map` when there is no home directory.
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".gtd-map"))
        .unwrap_or_else(|| PathBuf::from(".gtd-map"))
}

impl ApiConfig {
    /// Creates a new API configuration with the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Reads overrides from the `GTDMAP_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from a variable lookup, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!(value = %port, "Ignoring invalid {}", ENV_PORT),
            }
        }
        if let Some(dir) = lookup(ENV_DATA_DIR) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(org) = lookup(ENV_DEFAULT_ORG) {
            config.default_organization = OrganizationId::from(org);
        }
        if let Some(origins) = lookup(ENV_CORS_ORIGINS) {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        config
    }

    /// Sets the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Sets the default organization.
    pub fn with_default_organization(mut self, org: impl Into<OrganizationId>) -> Self {
        self.default_organization = org.into();
        self
    }

    /// Sets the CORS origins.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Returns the bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            data_dir: default_data_dir(),
            default_organization: OrganizationId::from("default"),
            cors_origins: vec!["*".to_string()],
            start_time: Instant::now(),
        }
    }
}
