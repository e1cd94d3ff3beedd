//! Interactive demo for the Tabler icon-assist engine.
//!
//! Reads lines from stdin, treats each as a one-line document, and prints the
//! decoration pass plus the first few suggestions for a cursor at end-of-line.

use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;

use libtabler::{
    ChangeEvent, DecorationBackend, DecorationStyle, DocumentView, Engine, MatchSpan, TablerConfig,
};

#[derive(Parser)]
#[command(about = "Scan lines for Tabler icon tokens and preview suggestions")]
struct Args {
    /// Directory of icon SVG files (one file per identifier).
    #[arg(long, default_value = "icons")]
    icons_dir: PathBuf,

    /// Language id to present to the decoration updater.
    #[arg(long, default_value = "html")]
    language: String,
}

/// One typed line, presented as a document.
struct LineDoc {
    language: String,
    text: String,
}

impl DocumentView for LineDoc {
    fn language(&self) -> &str {
        &self.language
    }

    fn line_count(&self) -> usize {
        1
    }

    fn line(&self, _row: usize) -> String {
        self.text.clone()
    }
}

/// Backend that prints what a real editor would render.
struct ConsoleBackend {
    next: u32,
}

impl DecorationBackend for ConsoleBackend {
    type Handle = u32;

    fn create(&mut self, style: &DecorationStyle) -> u32 {
        self.next += 1;
        println!("  [decoration #{} bound to {}]", self.next, style.icon_path.display());
        self.next
    }

    fn apply(&mut self, handle: &u32, spans: &[MatchSpan]) {
        if spans.is_empty() {
            println!("  [decoration #{handle}: cleared]");
        } else {
            for span in spans {
                println!(
                    "  [decoration #{handle}: {} at {}..{}]",
                    span.identifier, span.start, span.end
                );
            }
        }
    }

    fn dispose(&mut self, handle: u32) {
        println!("  [decoration #{handle}: disposed]");
    }
}

fn main() {
    let args = Args::parse();

    let mut engine: Engine<ConsoleBackend> =
        match Engine::from_asset_dir(&args.icons_dir, TablerConfig::default()) {
            Ok(engine) => {
                println!("✓ Loaded {} icons from {:?}", engine.catalog().len(), args.icons_dir);
                engine
            }
            Err(e) => {
                eprintln!("⚠ Icon assistance disabled: {e}");
                return;
            }
        };

    let mut backend = ConsoleBackend { next: 0 };
    println!("Type a line of markup (Ctrl-D to exit):");

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(text) = line else { break };
        let doc = LineDoc {
            language: args.language.clone(),
            text: text.clone(),
        };

        engine.handle_event(ChangeEvent::ContentEdited, &doc, &mut backend);

        if let Some(suggestions) = engine.suggestions(&text, text.len()) {
            println!("  {} suggestions, first few:", suggestions.len());
            for suggestion in suggestions.iter().take(5) {
                println!("    {} ({})", suggestion.label, suggestion.detail);
            }
            if let Some(first) = suggestions.first() {
                if let Some(resolved) = engine.resolve(first.id) {
                    let preview = resolved.documentation.chars().take(60).collect::<String>();
                    println!("  resolved `{}`: {preview}…", resolved.identifier);
                }
            }
        }
    }

    engine.shutdown(&mut backend);
    let (hits, misses) = engine.cache_stats();
    println!("preview cache: {hits} hits, {misses} misses");
}
