//! Search-layer configuration.
//!
//! Settings can come from a TOML file, from environment variables, or
//! fall back to defaults. Environment variables win over the file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::repository::{RepositoryError, RepositoryResult};

/// Ceiling on the coarse fetch feeding the availability search.
///
/// The upstream booking API cannot filter by availability server-side, so
/// the service layer fetches up to this many venues and filters exactly
/// in memory. This mirrors the remote API's own page-size ceiling and is
/// a known scalability limit: venues beyond the cap are invisible to
/// availability search.
pub const DEFAULT_COARSE_FETCH_CAP: usize = 100;

/// Configuration for the venue search service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum venues fetched per coarse pass.
    #[serde(default = "default_coarse_fetch_cap")]
    pub coarse_fetch_cap: usize,
}

fn default_coarse_fetch_cap() -> usize {
    DEFAULT_COARSE_FETCH_CAP
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            coarse_fetch_cap: DEFAULT_COARSE_FETCH_CAP,
        }
    }
}

impl SearchConfig {
    /// Load from a TOML file, then apply environment overrides.
    pub fn from_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RepositoryError::Configuration(format!(
                "cannot read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config: SearchConfig = toml::from_str(&raw)
            .map_err(|e| RepositoryError::Configuration(format!("invalid config file: {}", e)))?;
        Ok(config.with_env_overrides())
    }

    /// Defaults plus environment overrides.
    ///
    /// # Environment Variables
    /// - `HOLIDAZE_FETCH_CAP` (optional): coarse fetch ceiling
    pub fn from_env() -> Self {
        SearchConfig::default().with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(cap) = std::env::var("HOLIDAZE_FETCH_CAP")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.coarse_fetch_cap = cap;
        }
        self
    }
}
