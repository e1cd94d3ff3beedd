//! Tabler icon-assist engine.
//!
//! Composes the catalog, preview cache, suggestion provider, decoration
//! registry, and decoration updater into a single owned object with an
//! explicit construct/shutdown lifecycle. The host wires its document and
//! decoration surfaces in through the `DocumentView` and `DecorationBackend`
//! traits and forwards its events here.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use libicon_core::{
    ChangeEvent, DecorationBackend, DecorationRegistry, DecorationUpdater, DocumentView,
    IconCatalog, PreviewCache, ResolvedSuggestion, Suggestion, SuggestionProvider, UpdatePhase,
};

use crate::config::TablerConfig;
use crate::scanner::{TablerScanner, TABLER_MARKER};

/// High-level engine for Tabler icon assistance.
///
/// Generic over the host's decoration backend; everything else is owned.
/// One engine serves every document in the session: handles and cached
/// previews are shared across documents by construction.
pub struct Engine<B: DecorationBackend> {
    catalog: Arc<IconCatalog>,
    previews: PreviewCache,
    provider: SuggestionProvider<TablerScanner>,
    registry: DecorationRegistry<B>,
    updater: DecorationUpdater<TablerScanner>,
}

impl<B: DecorationBackend> Engine<B> {
    /// Build an engine over an already-loaded catalog.
    pub fn new(catalog: Arc<IconCatalog>, config: TablerConfig) -> Result<Self, Box<dyn Error>> {
        let scanner = if config.marker == TABLER_MARKER {
            TablerScanner::new()
        } else {
            TablerScanner::with_marker(&config.marker)?
        };
        let detail = config.suggestion_detail.clone();
        let base = config.into_base();

        let previews = PreviewCache::new(catalog.clone(), base.preview_cache_capacity);
        let provider = SuggestionProvider::new(
            catalog.clone(),
            scanner.clone(),
            detail,
            base.preview_sizes.clone(),
        );
        let registry = DecorationRegistry::new(catalog.clone(), &base);
        let updater = DecorationUpdater::new(scanner, &base);

        Ok(Self {
            catalog,
            previews,
            provider,
            registry,
            updater,
        })
    }

    /// Load the icon catalog from an asset directory and build the engine.
    ///
    /// A missing or unreadable directory fails here, once; embedders catch
    /// this and run without icon assistance for the session.
    pub fn from_asset_dir<P: AsRef<Path>>(
        dir: P,
        config: TablerConfig,
    ) -> Result<Self, Box<dyn Error>> {
        let catalog = IconCatalog::load_shared(dir, &config.base().icon_extension)?;
        Self::new(catalog, config)
    }

    /// The loaded catalog.
    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Suggestion list for the host's completion request, if the cursor
    /// context calls for icon completion.
    pub fn suggestions(&self, line: &str, cursor: usize) -> Option<Vec<Suggestion>> {
        self.provider.list(line, cursor)
    }

    /// Enrich one highlighted suggestion with preview markdown.
    pub fn resolve(&self, id: u64) -> Option<ResolvedSuggestion> {
        self.provider.resolve(id, &self.previews)
    }

    /// Drop one suggestion from the current session's side-table.
    pub fn discard(&self, id: u64) -> bool {
        self.provider.discard(id)
    }

    /// Run a decoration pass for a host change event.
    pub fn handle_event<D: DocumentView + ?Sized>(
        &mut self,
        event: ChangeEvent,
        doc: &D,
        backend: &mut B,
    ) -> usize {
        self.updater
            .handle_event(event, doc, &mut self.registry, backend)
    }

    /// Run a decoration pass directly (equivalent to a content edit event).
    pub fn refresh<D: DocumentView + ?Sized>(&mut self, doc: &D, backend: &mut B) -> usize {
        self.updater.refresh(doc, &mut self.registry, backend)
    }

    /// Current updater phase (`Idle` between events).
    pub fn phase(&self) -> UpdatePhase {
        self.updater.phase()
    }

    /// Release every decoration handle. Called once, at host shutdown.
    pub fn shutdown(&mut self, backend: &mut B) {
        self.registry.dispose_all(backend);
    }

    /// Preview cache statistics as a (hits, misses) tuple.
    pub fn cache_stats(&self) -> (usize, usize) {
        self.previews.cache_stats()
    }

    /// Preview cache hit rate as a percentage, if any access happened yet.
    pub fn hit_rate(&self) -> Option<f32> {
        self.previews.hit_rate()
    }
}
