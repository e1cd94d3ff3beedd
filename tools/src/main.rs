//! Export an icon catalog listing to JSON or CSV format
//!
//! Usage:
//!   cargo run -p catalog_tools -- --icons-dir icons --format json
//!   cargo run -p catalog_tools -- --icons-dir icons --format csv --output icons.csv

use clap::Parser;
use libicon_core::IconCatalog;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "export_catalog")]
#[command(about = "Export an icon catalog listing to JSON or CSV format")]
struct Args {
    /// Directory of icon asset files
    #[arg(short, long)]
    icons_dir: PathBuf,

    /// Asset file extension to accept
    #[arg(long, default_value = "svg")]
    extension: String,

    /// Output format: json or csv
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct CatalogRow {
    identifier: String,
    path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let catalog = IconCatalog::load(&args.icons_dir, &args.extension)
        .map_err(|e| anyhow::anyhow!("Failed to load catalog: {}", e))?;

    let rows: Vec<CatalogRow> = catalog
        .identifiers()
        .iter()
        .filter_map(|id| catalog.get(id))
        .map(|asset| CatalogRow {
            identifier: asset.identifier.clone(),
            path: asset.path.clone(),
        })
        .collect();

    let output = match args.format.as_str() {
        "json" => export_json(&rows)?,
        "csv" => export_csv(&rows),
        _ => anyhow::bail!("Unsupported format: {}. Use 'json' or 'csv'", args.format),
    };

    if let Some(path) = args.output {
        std::fs::write(path, output)?;
    } else {
        print!("{}", output);
    }

    Ok(())
}

fn export_json(rows: &[CatalogRow]) -> anyhow::Result<String> {
    let json = serde_json::to_string_pretty(rows)?;
    Ok(json)
}

fn export_csv(rows: &[CatalogRow]) -> String {
    let mut output = String::from("identifier,path\n");
    for row in rows {
        output.push_str(&format!("{},{}\n", row.identifier, row.path.display()));
    }
    output
}
