//! Decoration handle registry.
//!
//! One visual-decoration handle is created per icon identifier, on the first
//! occurrence of that identifier in any visible document, and reused for every
//! span of that icon afterwards. Unlike the preview cache the registry is
//! unbounded: the number of distinct identifiers in a codebase is bounded by
//! the catalog size, which is small. Handles are released exactly once, at
//! shutdown.

use std::sync::Arc;

use ahash::AHashMap;

use crate::catalog::IconCatalog;
use crate::error::{IconError, Result};
use crate::host::{DecorationBackend, DecorationStyle};

/// Identifier -> decoration handle table.
pub struct DecorationRegistry<B: DecorationBackend> {
    catalog: Arc<IconCatalog>,
    glyph_size: u32,
    inline_margin: String,
    gutter: bool,
    handles: AHashMap<String, B::Handle>,
}

impl<B: DecorationBackend> DecorationRegistry<B> {
    /// Create an empty registry using the style settings from `config`.
    pub fn new(catalog: Arc<IconCatalog>, config: &crate::Config) -> Self {
        Self {
            catalog,
            glyph_size: config.glyph_size,
            inline_margin: config.inline_margin.clone(),
            gutter: config.gutter_icons,
            handles: AHashMap::new(),
        }
    }

    /// Return the handle for an identifier, creating it on first use.
    ///
    /// An identifier with no catalog asset fails with `AssetNotFound`; the
    /// caller skips that one icon and keeps rendering the rest.
    pub fn get_or_create(&mut self, identifier: &str, backend: &mut B) -> Result<B::Handle> {
        if let Some(handle) = self.handles.get(identifier) {
            return Ok(handle.clone());
        }

        let asset = self
            .catalog
            .get(identifier)
            .ok_or_else(|| IconError::AssetNotFound {
                identifier: identifier.to_string(),
            })?;

        let style = DecorationStyle {
            icon_path: asset.path.clone(),
            glyph_size: self.glyph_size,
            inline_margin: self.inline_margin.clone(),
            gutter: self.gutter,
        };
        let handle = backend.create(&style);
        tracing::debug!(identifier, "created decoration handle");
        self.handles.insert(identifier.to_string(), handle.clone());
        Ok(handle)
    }

    /// Look up an existing handle without creating one.
    pub fn handle(&self, identifier: &str) -> Option<&B::Handle> {
        self.handles.get(identifier)
    }

    /// Iterate over every (identifier, handle) pair created so far.
    pub fn handles(&self) -> impl Iterator<Item = (&str, &B::Handle)> {
        self.handles.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of handles created so far.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True if no handle has been created yet.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Release every handle's host-side resources.
    ///
    /// Invoked once at process shutdown; calling it again is a no-op because
    /// the table is drained.
    pub fn dispose_all(&mut self, backend: &mut B) {
        for (identifier, handle) in self.handles.drain() {
            tracing::debug!(identifier = %identifier, "disposing decoration handle");
            backend.dispose(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::MatchSpan;
    use crate::Config;
    use std::fs;
    use std::path::PathBuf;

    /// Backend recording create/dispose calls, handing out integer handles.
    #[derive(Default)]
    struct MockBackend {
        created: Vec<DecorationStyle>,
        disposed: Vec<u32>,
    }

    impl DecorationBackend for MockBackend {
        type Handle = u32;

        fn create(&mut self, style: &DecorationStyle) -> u32 {
            self.created.push(style.clone());
            self.created.len() as u32
        }

        fn apply(&mut self, _handle: &u32, _spans: &[MatchSpan]) {}

        fn dispose(&mut self, handle: u32) {
            self.disposed.push(handle);
        }
    }

    fn catalog_with(tag: &str, names: &[&str]) -> (Arc<IconCatalog>, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "libicon_registry_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            fs::write(dir.join(format!("{name}.svg")), b"<svg/>").unwrap();
        }
        (IconCatalog::load_shared(&dir, "svg").unwrap(), dir)
    }

    #[test]
    fn one_handle_per_identifier() {
        let (catalog, dir) = catalog_with("dedup", &["search"]);
        let mut registry = DecorationRegistry::new(catalog, &Config::default());
        let mut backend = MockBackend::default();

        let first = registry.get_or_create("search", &mut backend).unwrap();
        let second = registry.get_or_create("search", &mut backend).unwrap();
        assert_eq!(first, second);
        assert_eq!(backend.created.len(), 1);
        assert_eq!(registry.len(), 1);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn style_binds_asset_path() {
        let (catalog, dir) = catalog_with("style", &["bell"]);
        let mut registry = DecorationRegistry::new(catalog, &Config::default());
        let mut backend = MockBackend::default();

        registry.get_or_create("bell", &mut backend).unwrap();
        assert!(backend.created[0].icon_path.ends_with("bell.svg"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn unknown_identifier_creates_nothing() {
        let (catalog, dir) = catalog_with("unknown", &["bell"]);
        let mut registry = DecorationRegistry::new(catalog, &Config::default());
        let mut backend = MockBackend::default();

        let err = registry.get_or_create("missing", &mut backend).unwrap_err();
        assert!(matches!(err, IconError::AssetNotFound { .. }));
        assert!(registry.is_empty());
        assert!(backend.created.is_empty());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn dispose_all_releases_every_handle_once() {
        let (catalog, dir) = catalog_with("dispose", &["a", "b"]);
        let mut registry = DecorationRegistry::new(catalog, &Config::default());
        let mut backend = MockBackend::default();

        registry.get_or_create("a", &mut backend).unwrap();
        registry.get_or_create("b", &mut backend).unwrap();
        registry.dispose_all(&mut backend);
        assert_eq!(backend.disposed.len(), 2);
        assert!(registry.is_empty());

        // Second call finds nothing left to release.
        registry.dispose_all(&mut backend);
        assert_eq!(backend.disposed.len(), 2);
        let _ = fs::remove_dir_all(dir);
    }
}
