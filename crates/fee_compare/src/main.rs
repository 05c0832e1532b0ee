use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod comparator;
mod config;
mod fetcher;
mod reporter;
mod types;

use comparator::compare_prices;
use config::Config;
use fetcher::PdfFetcher;
use pdf_processing::extract_price_table;
use types::ComparisonSummary;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the comparison table
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    info!("=== FEE SCHEDULE COMPARISON STARTED ===");

    let config = Config::default();
    let labels = config.labels();
    info!(
        "Comparing {} ({}) against {} ({})",
        labels.a, config.source_a.url, labels.b, config.source_b.url
    );

    let fetcher = PdfFetcher::new()?;
    for source in [&config.source_a, &config.source_b] {
        fetcher.download(&source.url, &source.local_path).await?;
    }

    let table_a = extract_price_table(&config.source_a.local_path)?;
    info!("Extracted {} priced codes from {}", table_a.len(), labels.a);
    let table_b = extract_price_table(&config.source_b.local_path)?;
    info!("Extracted {} priced codes from {}", table_b.len(), labels.b);

    let rows = compare_prices(table_a, table_b);
    let summary = ComparisonSummary::from_rows(&rows);

    reporter::print_table(&rows, &labels);
    reporter::export_to_csv(&rows, &labels, &config.output_path)?;
    info!("Saved comparison to {}", config.output_path.display());

    info!("Summary: {}", serde_json::to_string(&summary)?);
    info!("=== FEE SCHEDULE COMPARISON COMPLETED ===");
    Ok(())
}
