use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pdf_processing::extract_price_table;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let pdf_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("missing PDF path (usage: pdf_processing <fee-schedule.pdf>)")?;

    info!("Extracting prices from {}", pdf_path.display());
    let table = extract_price_table(&pdf_path)?;
    info!("Found {} priced codes", table.len());

    for (code, price) in &table {
        println!("{}\t{}", code, price);
    }

    Ok(())
}
