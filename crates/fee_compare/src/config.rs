use std::path::PathBuf;

use crate::types::SourceLabels;

const SOURCE_A_URL: &str = "https://www.coastdental.com/wp-content/uploads/smileplusfeeschedule.pdf";
const SOURCE_B_URL: &str = "https://ebusiness.ada.org/Assets/docs/85994.pdf";
const SOURCE_A_PATH: &str = "smileplusfeeschedule.pdf";
const SOURCE_B_PATH: &str = "ada_feeschedule.pdf";
const OUTPUT_PATH: &str = "price_comparison.csv";

/// One fee schedule: where to fetch it and where to keep the local copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub label: String,
    pub url: String,
    pub local_path: PathBuf,
}

/// Fixed run configuration. Nothing is read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source_a: SourceConfig,
    pub source_b: SourceConfig,
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_a: SourceConfig {
                label: "PDF1".to_string(),
                url: SOURCE_A_URL.to_string(),
                local_path: PathBuf::from(SOURCE_A_PATH),
            },
            source_b: SourceConfig {
                label: "PDF2".to_string(),
                url: SOURCE_B_URL.to_string(),
                local_path: PathBuf::from(SOURCE_B_PATH),
            },
            output_path: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl Config {
    pub fn labels(&self) -> SourceLabels {
        SourceLabels {
            a: self.source_a.label.clone(),
            b: self.source_b.label.clone(),
        }
    }
}
