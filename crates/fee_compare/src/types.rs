use bigdecimal::BigDecimal;
use serde::Serialize;

/// Display names for the two fee schedules being compared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLabels {
    pub a: String,
    pub b: String,
}

/// Which side is cheaper for a code, or which side lists it at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    ACheaper,
    BCheaper,
    Equal,
    AOnly,
    BOnly,
}

impl Classification {
    pub fn describe(&self, labels: &SourceLabels) -> String {
        match self {
            Classification::ACheaper => format!("{} cheaper", labels.a),
            Classification::BCheaper => format!("{} cheaper", labels.b),
            Classification::Equal => "equal".to_string(),
            Classification::AOnly => format!("{}-only", labels.a),
            Classification::BOnly => format!("{}-only", labels.b),
        }
    }
}

/// One procedure code across both schedules. `None` means not listed.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub code: String,
    pub price_a: Option<BigDecimal>,
    pub price_b: Option<BigDecimal>,
    pub classification: Classification,
}

/// Row counts per classification, logged once the comparison is done
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub total_codes: usize,
    pub a_cheaper: usize,
    pub b_cheaper: usize,
    pub equal: usize,
    pub a_only: usize,
    pub b_only: usize,
}

impl ComparisonSummary {
    pub fn from_rows(rows: &[ComparisonRow]) -> Self {
        let mut summary = ComparisonSummary {
            total_codes: rows.len(),
            ..Default::default()
        };
        for row in rows {
            match row.classification {
                Classification::ACheaper => summary.a_cheaper += 1,
                Classification::BCheaper => summary.b_cheaper += 1,
                Classification::Equal => summary.equal += 1,
                Classification::AOnly => summary.a_only += 1,
                Classification::BOnly => summary.b_only += 1,
            }
        }
        summary
    }
}
