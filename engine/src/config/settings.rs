// Engine settings: embedded defaults, then an optional JSON file, then
// environment variables. CLI flags are applied by the binary on top.
use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use shared::models::PriceUnit;
use std::path::Path;

pub const ENV_FEED_URL: &str = "SPOT_PRICES_FEED_URL";
pub const ENV_REFRESH_SECS: &str = "SPOT_PRICES_REFRESH_SECS";
pub const ENV_UNIT: &str = "SPOT_PRICES_UNIT";

const DEFAULT_CONFIG: &str = include_str!("../../assets/config/default.json");

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    /// Day is appended as `/{YYYY-MM-DD}`.
    pub feed_base_url: String,
    pub refresh_interval_secs: u64,
    pub request_timeout_secs: u64,
    pub unit: PriceUnit,
    /// Used when RUST_LOG is not set.
    pub log_level: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            feed_base_url: "https://griddata.elia.be/eliabecontrols.prod/interface/Interconnections/daily/auctionresultsqh"
                .to_string(),
            refresh_interval_secs: 3600,
            request_timeout_secs: 10,
            unit: PriceUnit::MWh,
            log_level: "info".to_string(),
        }
    }
}

impl EngineSettings {
    pub fn load_default() -> Result<Self, EngineError> {
        Self::from_json(DEFAULT_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|e| EngineError::ConfigError(format!("Invalid settings JSON: {}", e)))
    }

    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
            .map_err(|e| EngineError::ConfigError(format!("{} ({})", e, path.display())))
    }

    /// Full load order used by the binary: file (or embedded defaults),
    /// process environment, validation.
    pub fn load(path: Option<&Path>) -> Result<Self, EngineError> {
        let mut settings = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::load_default()?,
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_FEED_URL) {
            self.feed_base_url = url;
        }
        if let Some(secs) = lookup(ENV_REFRESH_SECS) {
            self.refresh_interval_secs = secs
                .trim()
                .parse()
                .map_err(|e| EngineError::ConfigError(format!("{} must be a number of seconds: {}", ENV_REFRESH_SECS, e)))?;
        }
        if let Some(unit) = lookup(ENV_UNIT) {
            self.unit = unit
                .parse()
                .map_err(|e| EngineError::ConfigError(format!("{}: {}", ENV_UNIT, e)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.feed_base_url.trim().is_empty() {
            return Err(EngineError::ConfigError("feed_base_url cannot be empty".to_string()));
        }
        if self.refresh_interval_secs == 0 {
            return Err(EngineError::ConfigError("refresh_interval_secs must be greater than 0".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(EngineError::ConfigError("request_timeout_secs must be greater than 0".to_string()));
        }
        Ok(())
    }
}
