//! Decoration update pass.
//!
//! On every document-change or focus-change event the updater rescans the
//! whole document, groups the spans by icon identifier, and applies a full
//! replacement span-set per handle. There is no old-vs-new diffing: clearing
//! and reapplying keeps the rendered state trivially consistent with the last
//! scan. Passes run to completion on the host's single event thread, so at
//! most one pass is ever in flight.

use ahash::AHashSet;

use crate::host::{DecorationBackend, DocumentView};
use crate::registry::DecorationRegistry;
use crate::scan::{scan_document, TokenScanner};

/// Host events that trigger an update pass.
///
/// Both kinds run the same full pass; the distinction only shows up in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// A different document became the active one.
    DocumentSwitched,
    /// The active document's content changed.
    ContentEdited,
}

/// Phase of the update state machine.
///
/// `Scanning` and `Applying` are only ever observable from within a pass;
/// between host events the updater always rests at `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePhase {
    Idle,
    Scanning,
    Applying,
}

/// Runs the scan-and-apply pass and tracks which identifiers are rendered.
pub struct DecorationUpdater<S: TokenScanner> {
    scanner: S,
    languages: AHashSet<String>,
    /// Identifiers with a non-empty span-set after the last pass.
    active: AHashSet<String>,
    phase: UpdatePhase,
}

impl<S: TokenScanner> DecorationUpdater<S> {
    /// Create an updater with the language allow-list from `config`.
    pub fn new(scanner: S, config: &crate::Config) -> Self {
        Self {
            scanner,
            languages: config.supported_languages.iter().cloned().collect(),
            active: AHashSet::new(),
            phase: UpdatePhase::Idle,
        }
    }

    /// Current phase (`Idle` whenever no pass is running).
    pub fn phase(&self) -> UpdatePhase {
        self.phase
    }

    /// Identifiers rendered by the most recent pass.
    pub fn active_identifiers(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(|s| s.as_str())
    }

    /// Handle one host event by running a full pass over `doc`.
    pub fn handle_event<B, D>(
        &mut self,
        event: ChangeEvent,
        doc: &D,
        registry: &mut DecorationRegistry<B>,
        backend: &mut B,
    ) -> usize
    where
        B: DecorationBackend,
        D: DocumentView + ?Sized,
    {
        tracing::debug!(?event, "decoration update pass");
        self.refresh(doc, registry, backend)
    }

    /// Rescan `doc` and make the rendered decorations match it exactly.
    ///
    /// Returns the number of identifiers with spans after the pass. A
    /// document outside the supported-language set gets every known handle
    /// cleared instead. A failure for one icon (asset missing or unreadable)
    /// is logged and skipped; the rest of the pass continues.
    pub fn refresh<B, D>(
        &mut self,
        doc: &D,
        registry: &mut DecorationRegistry<B>,
        backend: &mut B,
    ) -> usize
    where
        B: DecorationBackend,
        D: DocumentView + ?Sized,
    {
        self.phase = UpdatePhase::Scanning;

        if !self.languages.contains(doc.language()) {
            self.clear_all(registry, backend);
            self.phase = UpdatePhase::Idle;
            return 0;
        }

        let grouped = scan_document(&self.scanner, doc);

        self.phase = UpdatePhase::Applying;
        let mut applied: AHashSet<String> = AHashSet::new();
        for (identifier, spans) in &grouped {
            match registry.get_or_create(identifier, backend) {
                Ok(handle) => {
                    backend.apply(&handle, spans);
                    applied.insert(identifier.clone());
                }
                Err(err) => {
                    tracing::warn!(identifier = %identifier, error = %err, "skipping icon decoration");
                }
            }
        }

        // Identifiers rendered last pass but absent now get an explicit
        // empty set, so no stale span survives the rescan.
        for stale in self.active.difference(&applied) {
            if let Some(handle) = registry.handle(stale) {
                backend.apply(handle, &[]);
            }
        }

        let count = applied.len();
        self.active = applied;
        self.phase = UpdatePhase::Idle;
        tracing::debug!(identifiers = count, "decoration pass complete");
        count
    }

    /// Apply an empty span-set to every handle created so far.
    fn clear_all<B: DecorationBackend>(
        &mut self,
        registry: &DecorationRegistry<B>,
        backend: &mut B,
    ) {
        for (_, handle) in registry.handles() {
            backend.apply(handle, &[]);
        }
        self.active.clear();
    }
}
