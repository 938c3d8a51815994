//! Configuration for seeding runs.

use flocknet_client::http::DEFAULT_REQUEST_TIMEOUT;
use flocknet_client::ServiceEndpoints;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Configuration for a seeding run.
#[derive(Debug, Clone)]
pub struct SeederConfig {
    /// Base URLs of the account, follow, and tweet services.
    pub endpoints: ServiceEndpoints,

    /// Seed for the run's RNG. A fixed seed fixes the generated content
    /// and the deletion sample for a given set of collaborator outcomes.
    pub seed: u64,

    /// Concurrent collaborator calls per step. 1 reproduces the strictly
    /// sequential reference behavior.
    pub concurrency: usize,

    /// Per-request timeout for the HTTP client.
    pub request_timeout: Duration,
}

impl SeederConfig {
    /// Create a configuration for the given endpoints.
    pub fn new(endpoints: ServiceEndpoints) -> Self {
        Self {
            endpoints,
            seed: 12345,
            concurrency: 1,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Set the service endpoints.
    pub fn with_endpoints(mut self, endpoints: ServiceEndpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of concurrent collaborator calls per step.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Set the per-request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl Default for SeederConfig {
    fn default() -> Self {
        Self::new(ServiceEndpoints::default())
    }
}

/// Optional values loaded from a TOML config file.
///
/// Unset fields keep their current values when applied, so CLI flags and
/// defaults fill whatever the file leaves out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeederConfigFile {
    pub endpoints: Option<ServiceEndpoints>,
    pub seed: Option<u64>,
    pub concurrency: Option<usize>,
    pub request_timeout_ms: Option<u64>,
}

impl SeederConfigFile {
    /// Load and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Overlay the file's values onto `config`.
    pub fn apply(self, mut config: SeederConfig) -> SeederConfig {
        if let Some(endpoints) = self.endpoints {
            config.endpoints = endpoints;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency.max(1);
        }
        if let Some(ms) = self.request_timeout_ms {
            config.request_timeout = Duration::from_millis(ms);
        }
        config
    }
}

/// Errors while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
