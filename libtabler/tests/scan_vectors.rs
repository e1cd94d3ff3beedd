use libtabler::{scan_document, DocumentView, TablerScanner, TokenScanner};

/// Token grammar vectors for the Tabler scanner.
///
/// These exercise the lexical contract on its own: no catalog is involved,
/// because scanning never validates identifiers semantically.

struct Doc(Vec<&'static str>);

impl DocumentView for Doc {
    fn language(&self) -> &str {
        "html"
    }

    fn line_count(&self) -> usize {
        self.0.len()
    }

    fn line(&self, row: usize) -> String {
        self.0[row].to_string()
    }
}

#[test]
fn round_trip_token_scans_to_exactly_one_span() {
    let scanner = TablerScanner::new();
    let line = "ti ti-search";
    let spans = scanner.scan_line(0, line);
    assert_eq!(spans.len(), 1);
    assert_eq!(&line[spans[0].start..spans[0].end], "ti ti-search");
    assert_eq!(spans[0].identifier, "search");
}

#[test]
fn bare_prefix_without_body_yields_no_match() {
    let scanner = TablerScanner::new();
    assert!(scanner.scan_line(0, "ti ti-").is_empty());
    assert!(scanner.scan_line(0, "ti ti").is_empty());
    assert!(scanner.scan_line(0, "ti").is_empty());
}

#[test]
fn adjacent_tokens_yield_two_nonoverlapping_spans() {
    let scanner = TablerScanner::new();
    let line = "ti ti-a ti ti-b";
    let spans = scanner.scan_line(0, line);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].identifier, "a");
    assert_eq!(spans[1].identifier, "b");
    assert!(spans[0].end <= spans[1].start);
}

#[test]
fn markup_line_scans_to_single_search_span() {
    // The class attribute carries extra utility classes after the icon token.
    let scanner = TablerScanner::new();
    let line = "<i class=\"ti ti-search text-xl\"></i>";
    let spans = scanner.scan_line(0, line);
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].identifier, "search");
    assert_eq!(&line[spans[0].start..spans[0].end], "ti ti-search");
}

#[test]
fn body_is_restricted_to_lowercase_digits_hyphens() {
    let scanner = TablerScanner::new();
    assert!(scanner.scan_line(0, "ti ti-Search").is_empty());
    assert_eq!(scanner.scan_line(0, "ti ti-circle-2")[0].identifier, "circle-2");
}

#[test]
fn scanning_is_lexical_not_semantic() {
    // An identifier that no catalog will ever contain still scans; the
    // decoration pass degrades for it later.
    let scanner = TablerScanner::new();
    let spans = scanner.scan_line(0, "ti ti-definitely-not-a-real-icon");
    assert_eq!(spans.len(), 1);
}

#[test]
fn document_scan_covers_every_line() {
    let scanner = TablerScanner::new();
    let doc = Doc(vec![
        "<header>",
        "  <i class=\"ti ti-menu-2\"></i>",
        "  plain text",
        "  <i class=\"ti ti-x\"></i> <i class=\"ti ti-x\"></i>",
    ]);
    let grouped = scan_document(&scanner, &doc);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["menu-2"].len(), 1);
    assert_eq!(grouped["menu-2"][0].line, 1);
    assert_eq!(grouped["x"].len(), 2);
    assert_eq!(grouped["x"][1].line, 3);
}
