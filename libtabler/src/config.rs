//! Tabler-specific configuration that extends the base `Config` from core.
//!
//! The base configuration fields (cache capacity, language allow-list,
//! decoration style) are flattened in via serde, so one TOML file configures
//! both layers.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TablerConfig {
    /// Base configuration fields (catalog, cache, languages, style).
    #[serde(flatten)]
    pub base: libicon_core::Config,

    /// Marker literal for the token grammar. Changing it from `ti` builds a
    /// dedicated pattern at engine construction.
    pub marker: String,

    /// Placeholder detail text shown on unresolved suggestions.
    pub suggestion_detail: String,
}

impl Default for TablerConfig {
    fn default() -> Self {
        Self {
            base: libicon_core::Config::default(),
            marker: crate::scanner::TABLER_MARKER.to_string(),
            suggestion_detail: "Tabler icon".to_string(),
        }
    }
}

impl TablerConfig {
    /// Convert into the base config for use with the core components.
    pub fn into_base(self) -> libicon_core::Config {
        self.base
    }

    /// Get a reference to the base config.
    pub fn base(&self) -> &libicon_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config.
    pub fn base_mut(&mut self) -> &mut libicon_core::Config {
        &mut self.base
    }
}
