//! Host-facing traits.
//!
//! The hosting editor supplies the text buffer, the suggestion UI, and the
//! decoration renderer; this crate only reads documents and hands the host
//! style descriptors and span sets. Both seams are narrow traits so the same
//! engine drives a real editor and the mock hosts used in tests.

use std::path::PathBuf;

use crate::scan::MatchSpan;

/// Read-only view of the active document.
///
/// The host delivers change and focus events on a single sequential stream;
/// an update pass reads the document it was handed and nothing else.
pub trait DocumentView {
    /// Language classification tag (e.g. `html`, `typescriptreact`).
    fn language(&self) -> &str;

    /// Number of lines currently in the buffer.
    fn line_count(&self) -> usize;

    /// Text of one line, without the trailing newline.
    fn line(&self, row: usize) -> String;
}

/// Style descriptor for one icon's decoration.
///
/// Covers the compact inline glyph next to the token plus an optional gutter
/// marker, both rendered from the same asset file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecorationStyle {
    pub icon_path: PathBuf,
    /// Rendered glyph height in pixels.
    pub glyph_size: u32,
    /// CSS-style margin placed around the inline glyph.
    pub inline_margin: String,
    /// Whether to also show the icon in the gutter.
    pub gutter: bool,
}

/// Decoration rendering surface supplied by the host.
///
/// Handles are opaque and reusable: one handle per icon identifier serves
/// every span of that icon, in every document, for the process lifetime.
/// `apply` uses full-replacement semantics: the given span set entirely
/// replaces whatever was previously rendered for that handle, and an empty
/// set clears it.
pub trait DecorationBackend {
    type Handle: Clone;

    /// Register a decoration style with the host, returning its handle.
    fn create(&mut self, style: &DecorationStyle) -> Self::Handle;

    /// Render exactly `spans` for this handle on the active document view.
    fn apply(&mut self, handle: &Self::Handle, spans: &[MatchSpan]);

    /// Release the host-side resources behind a handle.
    fn dispose(&mut self, handle: Self::Handle);
}
