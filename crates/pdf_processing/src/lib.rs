use anyhow::{Context, Result};
use bigdecimal::BigDecimal;
use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Procedure code -> price for a single fee schedule.
pub type PriceTable = BTreeMap<String, BigDecimal>;

/// Extracts text page by page, in document order.
///
/// Image-only pages come back as empty strings.
pub fn extract_pages_from_pdf(pdf_bytes: &[u8]) -> Result<Vec<String>> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)
        .context("failed to extract page text from PDF bytes")?;
    Ok(pages)
}

/// Parses a price token such as `$1,234.56` or `60.00`.
///
/// Only `$` and `,` are stripped. Anything else that is not a plain decimal
/// (letters, exponents, other currency symbols, locale formats) is `None`.
pub fn parse_price(token: &str) -> Option<BigDecimal> {
    let cleaned = token.replace('$', "").replace(',', "");
    if !is_plain_decimal(&cleaned) {
        return None;
    }
    BigDecimal::from_str(&cleaned).ok()
}

/// Optional sign, digits, at most one `.`, at least one digit.
fn is_plain_decimal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    let mut seen_dot = false;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Splits a line into `(code, price)` when its second token is a price.
pub fn parse_price_line(line: &str) -> Option<(String, BigDecimal)> {
    let mut tokens = line.split_whitespace();
    let code = tokens.next()?;
    let price = parse_price(tokens.next()?)?;
    Some((code.to_string(), price))
}

/// Builds a price table from page texts. Later rows win on duplicate codes.
pub fn price_table_from_pages<I, S>(pages: I) -> PriceTable
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = PriceTable::new();
    let mut candidates = 0usize;
    let mut accepted = 0usize;

    for page in pages {
        for line in page.as_ref().lines() {
            if line.split_whitespace().nth(1).is_none() {
                continue;
            }
            candidates += 1;
            if let Some((code, price)) = parse_price_line(line) {
                accepted += 1;
                table.insert(code, price);
            }
        }
    }

    debug!(
        "Parsed {} price rows from {} candidate lines ({} unique codes)",
        accepted,
        candidates,
        table.len()
    );
    table
}

pub fn extract_price_table(pdf_path: &Path) -> Result<PriceTable> {
    let pdf_bytes = std::fs::read(pdf_path)
        .with_context(|| format!("failed to read {}", pdf_path.display()))?;
    let pages = extract_pages_from_pdf(&pdf_bytes)
        .with_context(|| format!("failed to parse {}", pdf_path.display()))?;
    debug!("{} has {} pages", pdf_path.display(), pages.len());
    Ok(price_table_from_pages(&pages))
}
