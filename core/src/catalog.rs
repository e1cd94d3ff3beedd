//! Icon catalog: the set of renderable icon identifiers for a session.
//!
//! The catalog is built once from a fixed asset directory (filename stem =
//! identifier, fixed extension) and treated as immutable afterwards. There is
//! no re-scan on filesystem change; a new session picks up new assets.
//!
//! Public API:
//! - `IconAsset` - (identifier, file location) pair
//! - `IconCatalog` - primary lookup API, built by `IconCatalog::load`

use std::path::{Path, PathBuf};
use std::sync::Arc;

use ahash::AHashMap;

use crate::error::{IconError, Result};

/// A single catalog entry: an icon identifier and the asset file backing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconAsset {
    pub identifier: String,
    pub path: PathBuf,
}

/// Immutable identifier -> asset table for one session.
///
/// Shared as `Arc<IconCatalog>` between the preview cache, the decoration
/// registry, and the suggestion provider.
#[derive(Debug, Default)]
pub struct IconCatalog {
    assets: AHashMap<String, IconAsset>,
    /// Identifiers in sorted order, for deterministic suggestion lists.
    ordered: Vec<String>,
}

impl IconCatalog {
    /// Load the catalog by enumerating `<stem>.<extension>` files in `dir`.
    ///
    /// Files with any other extension are ignored, as are subdirectories.
    /// A missing or unreadable directory fails with `CatalogUnavailable`;
    /// the caller is expected to catch this once and let suggestion and
    /// decoration features degrade silently for the session.
    pub fn load<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir).map_err(|source| IconError::CatalogUnavailable {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut assets = AHashMap::new();
        for entry in entries {
            let entry = entry.map_err(|source| IconError::CatalogUnavailable {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let identifier = stem.to_string();
            assets.insert(
                identifier.clone(),
                IconAsset {
                    identifier,
                    path,
                },
            );
        }

        let mut ordered: Vec<String> = assets.keys().cloned().collect();
        ordered.sort();

        tracing::info!(count = ordered.len(), dir = %dir.display(), "icon catalog loaded");
        Ok(Self { assets, ordered })
    }

    /// Load and wrap in `Arc` for sharing across components.
    pub fn load_shared<P: AsRef<Path>>(dir: P, extension: &str) -> Result<Arc<Self>> {
        Ok(Arc::new(Self::load(dir, extension)?))
    }

    /// Whether the identifier names a known asset.
    pub fn contains(&self, identifier: &str) -> bool {
        self.assets.contains_key(identifier)
    }

    /// Look up the asset for an identifier.
    pub fn get(&self, identifier: &str) -> Option<&IconAsset> {
        self.assets.get(identifier)
    }

    /// All identifiers in sorted order.
    pub fn identifiers(&self) -> &[String] {
        &self.ordered
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// True if no assets were found.
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}
