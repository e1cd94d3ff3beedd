//! libtabler crate root
//!
//! This crate provides the Tabler-specific token scanner, configuration, and
//! a high-level `Engine` that composes the shared `libicon-core` components.
//!
//! Public API exported here:
//! - `TablerScanner` from `scanner`
//! - `Engine` from `engine`
//! - `TablerConfig` from `config`

pub mod config;
pub mod engine;
pub mod scanner;

// Re-export the core types callers need alongside the engine.
pub use libicon_core::{
    scan_document, ChangeEvent, Config, DecorationBackend, DecorationRegistry, DecorationStyle,
    DecorationUpdater, DocumentView, IconAsset, IconCatalog, IconError, MatchSpan, PreviewCache,
    ResolvedSuggestion, Suggestion, SuggestionProvider, TokenScanner, UpdatePhase,
};

// Convenience re-exports for common types used by callers.
pub use config::TablerConfig;
pub use engine::Engine;
pub use scanner::{TablerScanner, TABLER_MARKER};
