//! Print the inlineable data URI for one cataloged icon
//!
//! Usage:
//!   cargo run -p catalog_tools --bin icon_preview -- --icons-dir icons search

use clap::Parser;
use libicon_core::{IconCatalog, PreviewCache};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "icon_preview")]
#[command(about = "Print the inlineable data URI for one cataloged icon")]
struct Args {
    /// Icon identifier to render
    identifier: String,

    /// Directory of icon asset files
    #[arg(short, long)]
    icons_dir: PathBuf,

    /// Asset file extension to accept
    #[arg(long, default_value = "svg")]
    extension: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let catalog = IconCatalog::load_shared(&args.icons_dir, &args.extension)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {}", e))?;
    let cache = PreviewCache::new(catalog, 1);

    let uri = cache
        .get(&args.identifier)
        .map_err(|e| anyhow::anyhow!("Failed to render preview: {}", e))?;
    println!("{uri}");

    Ok(())
}
