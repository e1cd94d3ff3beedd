//! Scan files for icon tokens and print the located spans
//!
//! Usage:
//!   cargo run -p catalog_tools --bin scan_tokens -- templates/index.html
//!   cargo run -p catalog_tools --bin scan_tokens -- --marker fa src/*.jsx

use clap::Parser;
use libicon_core::TokenScanner;
use libtabler::TablerScanner;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scan_tokens")]
#[command(about = "Scan files for icon tokens and print the located spans")]
struct Args {
    /// Files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Marker literal of the token grammar
    #[arg(long, default_value = "ti")]
    marker: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let scanner = if args.marker == "ti" {
        TablerScanner::new()
    } else {
        TablerScanner::with_marker(&args.marker)
            .map_err(|e| anyhow::anyhow!("Invalid marker {:?}: {}", args.marker, e))?
    };

    for file in &args.files {
        let content = std::fs::read_to_string(file)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file.display(), e))?;

        let mut total = 0;
        for (row, line) in content.lines().enumerate() {
            for span in scanner.scan_line(row, line) {
                println!(
                    "{}:{}:{}: {}",
                    file.display(),
                    span.line + 1,
                    span.start + 1,
                    span.identifier
                );
                total += 1;
            }
        }
        eprintln!("{}: {} token(s)", file.display(), total);
    }

    Ok(())
}
