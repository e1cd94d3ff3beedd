//! Suggestion list and on-demand enrichment.
//!
//! Listing is cheap and eager-free: one lightweight suggestion per catalog
//! entry, no image payloads attached. Enrichment happens only when the host
//! asks for detail on a single highlighted suggestion, at which point the
//! preview cache supplies the payload.
//!
//! Suggestions are tied back to their icon through an explicit side-table
//! keyed by a stable `u64` id: `list` starts a fresh session (clearing the
//! table), `resolve` reads it, and `discard` removes one entry when the host
//! drops a suggestion.
//!
//! Hosts should register the separator character and whitespace as completion
//! trigger characters, so `list` runs right after `ti ` and after each `-`.

use std::cell::{Cell, RefCell};
use std::sync::Arc;

use ahash::AHashMap;

use crate::catalog::IconCatalog;
use crate::preview::PreviewCache;
use crate::scan::TokenScanner;

/// Lightweight completion entry, one per catalog identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Stable id for the lifetime of the current suggestion session.
    pub id: u64,
    pub identifier: String,
    /// Display label (the identifier itself).
    pub label: String,
    /// Placeholder description; the real preview arrives on resolve.
    pub detail: String,
}

/// A suggestion enriched with preview markdown and a usage snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSuggestion {
    pub identifier: String,
    /// Markdown embedding the icon at the configured display sizes, or a
    /// text-only notice when the payload could not be produced.
    pub documentation: String,
    /// Ready-to-insert usage snippet.
    pub snippet: String,
}

/// Produces suggestion lists from the catalog and enriches single entries.
pub struct SuggestionProvider<S: TokenScanner> {
    catalog: Arc<IconCatalog>,
    scanner: S,
    detail: String,
    preview_sizes: Vec<u32>,
    pending: RefCell<AHashMap<u64, String>>,
    next_id: Cell<u64>,
}

impl<S: TokenScanner> SuggestionProvider<S> {
    /// Create a provider; `detail` is the placeholder shown before resolve.
    pub fn new(
        catalog: Arc<IconCatalog>,
        scanner: S,
        detail: impl Into<String>,
        preview_sizes: Vec<u32>,
    ) -> Self {
        Self {
            catalog,
            scanner,
            detail: detail.into(),
            preview_sizes,
            pending: RefCell::new(AHashMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// Return one suggestion per catalog entry, or `None` when the cursor
    /// context does not call for icon completion.
    ///
    /// The gate: the line must contain the marker literal and the cursor
    /// (byte offset into `line`) must sit within a word drawn from the
    /// identifier-body character class. Starting a new list clears the
    /// previous session's side-table.
    pub fn list(&self, line: &str, cursor: usize) -> Option<Vec<Suggestion>> {
        if !line.contains(self.scanner.marker()) {
            return None;
        }
        if !self.cursor_in_body_word(line, cursor) {
            return None;
        }

        let mut pending = self.pending.borrow_mut();
        pending.clear();

        let suggestions: Vec<Suggestion> = self
            .catalog
            .identifiers()
            .iter()
            .map(|identifier| {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                pending.insert(id, identifier.clone());
                Suggestion {
                    id,
                    identifier: identifier.clone(),
                    label: identifier.clone(),
                    detail: self.detail.clone(),
                }
            })
            .collect();

        tracing::debug!(count = suggestions.len(), "suggestion session started");
        Some(suggestions)
    }

    /// Enrich one suggestion with preview markdown and a usage snippet.
    ///
    /// Returns `None` for an id that is not part of the current session.
    /// A preview failure degrades to a text-only notice instead of erroring:
    /// one unreadable icon must not abort the host's resolve request.
    pub fn resolve(&self, id: u64, previews: &PreviewCache) -> Option<ResolvedSuggestion> {
        let identifier = self.pending.borrow().get(&id).cloned()?;
        let marker = self.scanner.marker();
        let snippet = format!("<i class=\"{marker} {marker}-{identifier}\"></i>");

        let documentation = match previews.get(&identifier) {
            Ok(uri) => {
                let images: Vec<String> = self
                    .preview_sizes
                    .iter()
                    .map(|size| format!("![{identifier}]({uri}|width={size},height={size})"))
                    .collect();
                format!("{}\n\n```html\n{}\n```", images.join(" "), snippet)
            }
            Err(err) => {
                tracing::warn!(identifier = %identifier, error = %err, "preview unavailable");
                format!("Preview unavailable for `{identifier}`: {err}")
            }
        };

        Some(ResolvedSuggestion {
            identifier,
            documentation,
            snippet,
        })
    }

    /// Remove one suggestion from the session side-table.
    ///
    /// Returns whether the id was still pending.
    pub fn discard(&self, id: u64) -> bool {
        self.pending.borrow_mut().remove(&id).is_some()
    }

    /// Number of suggestions in the current session.
    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    fn cursor_in_body_word(&self, line: &str, cursor: usize) -> bool {
        if cursor > line.len() || !line.is_char_boundary(cursor) {
            return false;
        }
        let before = line[..cursor].chars().next_back();
        let at = line[cursor..].chars().next();
        matches!(before, Some(c) if self.scanner.is_body_char(c))
            || matches!(at, Some(c) if self.scanner.is_body_char(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::MatchSpan;
    use std::fs;
    use std::path::PathBuf;

    struct TiScanner;

    impl TokenScanner for TiScanner {
        fn scan_line(&self, _row: usize, _line: &str) -> Vec<MatchSpan> {
            Vec::new()
        }

        fn marker(&self) -> &str {
            "ti"
        }

        fn is_body_char(&self, c: char) -> bool {
            c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
        }
    }

    fn fixture(tag: &str, icons: &[&str]) -> (Arc<IconCatalog>, PathBuf) {
        let dir = std::env::temp_dir().join(format!(
            "libicon_suggest_{}_{}",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        for name in icons {
            fs::write(dir.join(format!("{name}.svg")), b"<svg/>").unwrap();
        }
        (IconCatalog::load_shared(&dir, "svg").unwrap(), dir)
    }

    fn provider(catalog: Arc<IconCatalog>) -> SuggestionProvider<TiScanner> {
        SuggestionProvider::new(catalog, TiScanner, "Tabler icon", vec![16, 32])
    }

    #[test]
    fn line_without_marker_yields_none() {
        let (catalog, dir) = fixture("nomarker", &["x"]);
        let p = provider(catalog);
        assert!(p.list("<div class=\"box\">", 12).is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn cursor_outside_body_word_yields_none() {
        let (catalog, dir) = fixture("gate", &["x"]);
        let p = provider(catalog);
        // Cursor between the closing quote and '>', not inside a word.
        let line = "<i class=\"ti ti-\">";
        assert!(p.list(line, line.len()).is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn one_suggestion_per_catalog_entry_without_payload() {
        let (catalog, dir) = fixture("list", &["search", "x", "alarm"]);
        let p = provider(catalog);
        let line = "<i class=\"ti ti-se\"></i>";
        let cursor = line.find("se\"").unwrap() + 2;
        let suggestions = p.list(line, cursor).unwrap();
        assert_eq!(suggestions.len(), 3);
        // Sorted catalog order, placeholder detail only.
        assert_eq!(suggestions[0].label, "alarm");
        assert!(suggestions.iter().all(|s| s.detail == "Tabler icon"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn resolve_is_lazy_and_embeds_sizes() {
        let (catalog, dir) = fixture("resolve", &["search"]);
        let previews = PreviewCache::new(catalog.clone(), 4);
        let p = provider(catalog);
        let suggestions = p.list("ti ti-sea", 9).unwrap();
        // Nothing cached until the host asks for detail.
        assert!(previews.is_empty());

        let resolved = p.resolve(suggestions[0].id, &previews).unwrap();
        assert_eq!(resolved.identifier, "search");
        assert!(resolved.documentation.contains("width=16"));
        assert!(resolved.documentation.contains("width=32"));
        assert!(resolved.snippet.contains("ti ti-search"));
        assert_eq!(previews.len(), 1);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn resolve_degrades_when_asset_unreadable() {
        let (catalog, dir) = fixture("degrade", &["ghost"]);
        fs::remove_file(dir.join("ghost.svg")).unwrap();
        let previews = PreviewCache::new(catalog.clone(), 4);
        let p = provider(catalog);
        let suggestions = p.list("ti ti-gh", 8).unwrap();

        let resolved = p.resolve(suggestions[0].id, &previews).unwrap();
        assert!(resolved.documentation.contains("Preview unavailable"));
        assert!(resolved.snippet.contains("ti ti-ghost"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn new_list_supersedes_previous_session() {
        let (catalog, dir) = fixture("session", &["a", "b"]);
        let previews = PreviewCache::new(catalog.clone(), 4);
        let p = provider(catalog);
        let old = p.list("ti ti-a", 7).unwrap();
        let _new = p.list("ti ti-b", 7).unwrap();
        assert_eq!(p.pending_len(), 2);
        assert!(p.resolve(old[0].id, &previews).is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn discard_removes_pending_entry() {
        let (catalog, dir) = fixture("discard", &["a"]);
        let previews = PreviewCache::new(catalog.clone(), 4);
        let p = provider(catalog);
        let suggestions = p.list("ti ti-a", 7).unwrap();
        assert!(p.discard(suggestions[0].id));
        assert!(!p.discard(suggestions[0].id));
        assert!(p.resolve(suggestions[0].id, &previews).is_none());
        let _ = fs::remove_dir_all(dir);
    }
}
