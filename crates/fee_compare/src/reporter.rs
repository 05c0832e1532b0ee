use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use csv::Writer;
use std::fs::File;
use std::path::Path;

use crate::types::{ComparisonRow, SourceLabels};

const NOT_AVAILABLE: &str = "N/A";

/// Prices show at least two decimal places; extra precision is kept.
pub fn format_price(price: Option<&BigDecimal>) -> String {
    match price {
        Some(price) => {
            let (_, scale) = price.as_bigint_and_exponent();
            if scale < 2 {
                price.with_scale(2).to_string()
            } else {
                price.to_string()
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

fn header(labels: &SourceLabels) -> [String; 4] {
    [
        "Code".to_string(),
        format!("{} Price", labels.a),
        format!("{} Price", labels.b),
        "Cheaper".to_string(),
    ]
}

fn record(row: &ComparisonRow, labels: &SourceLabels) -> [String; 4] {
    [
        row.code.clone(),
        format_price(row.price_a.as_ref()),
        format_price(row.price_b.as_ref()),
        row.classification.describe(labels),
    ]
}

/// Column-aligned text table, header first
pub fn render_table(rows: &[ComparisonRow], labels: &SourceLabels) -> String {
    let header = header(labels);
    let records: Vec<[String; 4]> = rows.iter().map(|row| record(row, labels)).collect();

    let mut widths = header.each_ref().map(|h| h.len());
    for rec in &records {
        for (width, cell) in widths.iter_mut().zip(rec.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let format_line = |cells: &[String; 4]| {
        format!(
            "{:<w0$}  {:>w1$}  {:>w2$}  {:<w3$}",
            cells[0],
            cells[1],
            cells[2],
            cells[3],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
        )
        .trim_end()
        .to_string()
    };

    let mut out = format_line(&header);
    out.push('\n');
    for rec in &records {
        out.push_str(&format_line(rec));
        out.push('\n');
    }
    out
}

pub fn print_table(rows: &[ComparisonRow], labels: &SourceLabels) {
    print!("{}", render_table(rows, labels));
}

/// Writes the comparison as CSV with a header row, replacing `output_path`.
pub fn export_to_csv(
    rows: &[ComparisonRow],
    labels: &SourceLabels,
    output_path: &Path,
) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create {}", output_path.display()))?;
    let mut writer = Writer::from_writer(file);

    writer.write_record(&header(labels))?;
    for row in rows {
        writer.write_record(&record(row, labels))?;
    }

    writer.flush()?;
    Ok(())
}
