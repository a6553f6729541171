use super::RankAppError;
use crate::model::journey::TransitConfig;
use serde::Deserialize;
use std::path::Path;

/// application configuration for a rank run. every table is optional; an
/// unset path falls back to the built-in simulated data set, so the app
/// runs out of the box and swaps to real data sources file by file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RankAppConfig {
    /// JSON array of advisory zones
    pub advisory_zones_input_file: Option<String>,
    /// CSV of failure history records
    pub failure_history_input_file: Option<String>,
    /// CSV of congestion patterns
    pub congestion_patterns_input_file: Option<String>,
    /// JSON array of transport hubs
    pub transport_hubs_input_file: Option<String>,
    pub transit: TransitConfig,
}

impl RankAppConfig {
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<RankAppConfig, RankAppError> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RankAppError::ConfigError {
                path: path_str.clone(),
                message: e.to_string(),
            }
        })?;
        toml::from_str(&raw).map_err(|e| RankAppError::ConfigError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
