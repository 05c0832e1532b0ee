use bigdecimal::BigDecimal;
use pdf_processing::{extract_pages_from_pdf, extract_price_table, price_table_from_pages};
use std::path::{Path, PathBuf};
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

const SCHEDULE_PAGE: &str = "SmilePlus Fee Schedule
Code Fee Description
D0120 $50.00 Periodic oral evaluation
D0140 $75 Limited oral evaluation
Office Hours: Monday-Friday
Total $1,234.56
";

#[test]
fn test_table_from_single_page() {
    let table = price_table_from_pages([SCHEDULE_PAGE]);

    assert_eq!(table.len(), 3);
    assert_eq!(table.get("D0120"), Some(&dec("50.00")));
    assert_eq!(table.get("D0140"), Some(&dec("75")));
    assert_eq!(table.get("Total"), Some(&dec("1234.56")));
    assert!(!table.contains_key("Office"));
    assert!(!table.contains_key("Code"));
}

#[test]
fn test_later_occurrence_overwrites_earlier() {
    let pages = ["D0120 $50.00\nD0120 $55.00", "D0120 $58.00\nD0150 $20"];
    let table = price_table_from_pages(pages);

    assert_eq!(table.len(), 2);
    assert_eq!(table.get("D0120"), Some(&dec("58.00")));
    assert_eq!(table.get("D0150"), Some(&dec("20")));
}

#[test]
fn test_empty_pages_contribute_nothing() {
    let pages = ["", "\n\n", "D0140 $75", "   "];
    let table = price_table_from_pages(pages);

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("D0140"), Some(&dec("75")));
}

#[test]
fn test_extraction_is_repeatable() {
    let first = price_table_from_pages([SCHEDULE_PAGE, "D0120 $51"]);
    let second = price_table_from_pages([SCHEDULE_PAGE, "D0120 $51"]);
    assert_eq!(first, second);
}

#[test]
fn test_missing_file_is_an_error() {
    let result = extract_price_table(Path::new("does-not-exist-fee-schedule.pdf"));
    assert!(result.is_err());
}

#[test]
fn test_non_pdf_bytes_are_an_error() {
    let result = extract_pages_from_pdf(b"this is not a pdf document");
    assert!(result.is_err());
}

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/fee_schedule.pdf")
}

#[test]
fn test_pdf_pages_keep_one_record_per_line() -> Result<(), Box<dyn std::error::Error>> {
    let pdf_bytes = std::fs::read(fixture_path())?;
    let pages = extract_pages_from_pdf(&pdf_bytes)?;

    assert_eq!(pages.len(), 3, "Fixture has three pages");
    assert!(pages[1].trim().is_empty(), "Blank page should have no text");

    let first_page_records: Vec<&str> = pages[0]
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("D0"))
        .collect();
    assert_eq!(first_page_records.len(), 2, "Got lines: {:?}", pages[0]);
    assert!(first_page_records[0].starts_with("D0120 $50.00"));
    assert!(first_page_records[1].starts_with("D0140 $75"));

    Ok(())
}

#[test]
fn test_price_table_from_pdf_file() -> Result<(), Box<dyn std::error::Error>> {
    let table = extract_price_table(&fixture_path())?;

    assert_eq!(table.len(), 3, "Got table: {:?}", table);
    // D0120 appears again on the last page and that later price wins
    assert_eq!(table.get("D0120"), Some(&dec("55.00")));
    assert_eq!(table.get("D0140"), Some(&dec("75")));
    assert_eq!(table.get("D0150"), Some(&dec("20")));
    assert!(!table.contains_key("Office"));
    assert!(!table.contains_key("SmilePlus"));

    Ok(())
}
