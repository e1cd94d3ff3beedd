//! Error types for catalog loading, asset access, and preview encoding.

use std::path::PathBuf;

/// Errors surfaced by the icon-assist core.
///
/// `CatalogUnavailable` is the only failure that disables features for the
/// session; everything else is scoped to a single icon and callers degrade
/// by skipping that icon.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// The asset directory is missing or unreadable at first load.
    #[error("icon catalog unavailable at {}: {source}", .path.display())]
    CatalogUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The identifier does not name any asset in the loaded catalog.
    #[error("icon not found: {identifier}")]
    AssetNotFound { identifier: String },

    /// The asset file exists in the catalog but could not be read.
    #[error("failed to read icon {identifier}: {source}")]
    AssetRead {
        identifier: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, IconError>;
