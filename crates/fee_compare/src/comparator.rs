use pdf_processing::PriceTable;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::types::{Classification, ComparisonRow};

/// Merges two price tables into one row per code, sorted by code.
pub fn compare_prices(mut table_a: PriceTable, mut table_b: PriceTable) -> Vec<ComparisonRow> {
    let codes: BTreeSet<String> = table_a.keys().chain(table_b.keys()).cloned().collect();

    codes
        .into_iter()
        .map(|code| {
            let price_a = table_a.remove(&code);
            let price_b = table_b.remove(&code);
            let classification = match (&price_a, &price_b) {
                (Some(a), Some(b)) => match a.cmp(b) {
                    Ordering::Less => Classification::ACheaper,
                    Ordering::Greater => Classification::BCheaper,
                    Ordering::Equal => Classification::Equal,
                },
                (Some(_), None) => Classification::AOnly,
                (None, _) => Classification::BOnly,
            };
            ComparisonRow {
                code,
                price_a,
                price_b,
                classification,
            }
        })
        .collect()
}
