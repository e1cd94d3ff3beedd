//! libicon-core
//!
//! Core catalog, preview cache, scanning seam, and decoration lifecycle
//! shared by icon-set frontends (libtabler).
//!
//! Public API:
//! - `IconCatalog` / `IconAsset` - the session's icon inventory
//! - `PreviewCache` - bounded LRU of inlineable icon payloads
//! - `MatchSpan` / `TokenScanner` - scan output and the grammar seam
//! - `DecorationRegistry` / `DecorationUpdater` - decoration lifecycle
//! - `SuggestionProvider` - completion list and on-demand enrichment
//! - `Config` - configuration and feature flags

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{IconError, Result};

pub mod catalog;
pub use catalog::{IconAsset, IconCatalog};

pub mod preview;
pub use preview::PreviewCache;

pub mod scan;
pub use scan::{scan_document, MatchSpan, TokenScanner};

pub mod host;
pub use host::{DecorationBackend, DecorationStyle, DocumentView};

pub mod registry;
pub use registry::DecorationRegistry;

pub mod updater;
pub use updater::{ChangeEvent, DecorationUpdater, UpdatePhase};

pub mod suggest;
pub use suggest::{ResolvedSuggestion, Suggestion, SuggestionProvider};

/// Generic configuration for the icon-assist core.
///
/// Dialect-specific options (marker overrides, snippet shape) belong in the
/// frontend's config, which flattens this one.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Asset file extension the catalog loader accepts.
    pub icon_extension: String,

    /// Maximum number of entries in the identifier -> preview payload cache.
    pub preview_cache_capacity: usize,

    /// Pixel sizes at which a resolved suggestion embeds its preview.
    pub preview_sizes: Vec<u32>,

    /// Language ids that receive decorations; all others are cleared.
    pub supported_languages: Vec<String>,

    /// Rendered inline glyph height in pixels.
    pub glyph_size: u32,

    /// CSS-style margin around the inline glyph.
    pub inline_margin: String,

    /// Whether decorations also place a gutter marker.
    pub gutter_icons: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Icon assets are single vector files, one per identifier.
            icon_extension: "svg".to_string(),
            // 32 previews covers a full suggestion-browsing session.
            preview_cache_capacity: 32,
            // Small, medium, large preview rows in resolve documentation.
            preview_sizes: vec![16, 32, 64],
            // The markup-like languages where icon tokens appear.
            supported_languages: vec![
                "html".to_string(),
                "erb".to_string(),
                "javascriptreact".to_string(),
                "typescriptreact".to_string(),
            ],
            glyph_size: 14,
            inline_margin: "0 0.2em 0 0.1em".to_string(),
            gutter_icons: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Whether a host language id is in the decoration allow-list.
    pub fn is_language_supported(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }

    /// Override the preview cache bound (clamped to at least 1).
    pub fn set_preview_cache_capacity(&mut self, capacity: usize) {
        self.preview_cache_capacity = capacity.max(1);
    }
}
