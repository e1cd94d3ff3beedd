//! Tabler token scanner.
//!
//! Recognizes the two-word class-name grammar: the marker literal `ti`
//! followed by `ti-<body>`, where the body is drawn from lowercase letters,
//! digits, and hyphens. Matching is purely lexical; whether the body names a
//! cataloged icon is decided later, at render time.

use libicon_core::{MatchSpan, TokenScanner};
use once_cell::sync::Lazy;
use regex::Regex;

/// The marker literal opening every Tabler icon token.
pub const TABLER_MARKER: &str = "ti";

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bti ti-[a-z0-9-]+").expect("token pattern compiles"));

/// Regex-backed scanner for Tabler icon tokens.
#[derive(Debug, Clone)]
pub struct TablerScanner {
    marker: String,
    pattern: Regex,
}

impl TablerScanner {
    /// Scanner for the standard `ti ti-<name>` grammar.
    pub fn new() -> Self {
        Self {
            marker: TABLER_MARKER.to_string(),
            pattern: TOKEN_PATTERN.clone(),
        }
    }

    /// Scanner for a non-standard marker literal, same grammar shape.
    pub fn with_marker(marker: &str) -> Result<Self, regex::Error> {
        let escaped = regex::escape(marker);
        let pattern = Regex::new(&format!(r"\b{escaped} {escaped}-[a-z0-9-]+"))?;
        Ok(Self {
            marker: marker.to_string(),
            pattern,
        })
    }

    /// Lazily iterate over the non-overlapping token occurrences in a line.
    pub fn matches<'a>(
        &'a self,
        row: usize,
        line: &'a str,
    ) -> impl Iterator<Item = MatchSpan> + 'a {
        // The token is "<marker> <marker>-<body>"; the body starts after
        // both marker words, the space, and the separator.
        let body_offset = self.marker.len() * 2 + 2;
        self.pattern.find_iter(line).map(move |m| MatchSpan {
            line: row,
            start: m.start(),
            end: m.end(),
            identifier: line[m.start() + body_offset..m.end()].to_string(),
        })
    }
}

impl Default for TablerScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenScanner for TablerScanner {
    fn scan_line(&self, row: usize, line: &str) -> Vec<MatchSpan> {
        self.matches(row, line).collect()
    }

    fn marker(&self) -> &str {
        &self.marker
    }

    fn is_body_char(&self, c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
    }
}
