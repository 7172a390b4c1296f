//! CLI argument definitions for the CSV populator.

use clap::Args;
use std::path::PathBuf;

/// Default number of records per file.
pub const DEFAULT_RECORD_COUNT: u64 = 150;

/// Arguments controlling what gets written where.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output directory for titles.csv and credits.csv
    #[arg(long, short = 'o', default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of title records to generate
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub title_count: u64,

    /// Number of credit records to generate
    #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
    pub credit_count: u64,

    /// Random seed for reproducible output (omit for a different data set every run)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for CSVPopulateArgs {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            title_count: DEFAULT_RECORD_COUNT,
            credit_count: DEFAULT_RECORD_COUNT,
            seed: None,
        }
    }
}
