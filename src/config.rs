//! Page timing and storage configuration.
//!
//! Values ship in `assets/config.json` and are embedded at compile time.
//! A malformed or invalid file falls back to the built-in defaults so the
//! page still comes up.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_MIN_LIVE_QUERY_LEN: usize = 2;
pub const DEFAULT_SLIDE_INTERVAL_MS: u32 = 5_000;
pub const DEFAULT_NAV_COOLDOWN_MS: u32 = 3_000;
pub const DEFAULT_LOAD_DELAY_MS: u32 = 1_000;
pub const DEFAULT_GRID_REVEAL_MS: u32 = 100;
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.json");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
    #[error("theme storage key must not be empty")]
    EmptyStorageKey,
}

/// Tunables for the catalog page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub search_debounce_ms: u32,
    /// Live (debounced) input filters only once the trimmed query reaches this length.
    pub min_live_query_len: usize,
    pub slide_interval_ms: u32,
    pub nav_cooldown_ms: u32,
    pub load_delay_ms: u32,
    pub grid_reveal_ms: u32,
    pub theme_storage_key: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            min_live_query_len: DEFAULT_MIN_LIVE_QUERY_LEN,
            slide_interval_ms: DEFAULT_SLIDE_INTERVAL_MS,
            nav_cooldown_ms: DEFAULT_NAV_COOLDOWN_MS,
            load_delay_ms: DEFAULT_LOAD_DELAY_MS,
            grid_reveal_ms: DEFAULT_GRID_REVEAL_MS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a JSON config document. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config embedded in the binary, falling back to defaults.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config: using defaults: {e}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("slide_interval_ms", self.slide_interval_ms),
            ("nav_cooldown_ms", self.nav_cooldown_ms),
            ("search_debounce_ms", self.search_debounce_ms),
        ];
        for (field, value) in intervals {
            if value == 0 {
                return Err(ConfigError::ZeroInterval { field });
            }
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }
}
