//! Command-line interface for title-fixtures
//!
//! # Usage Examples
//!
//! ```bash
//! # Default run: titles.csv and credits.csv with 150 rows each
//! title-fixtures
//!
//! # Fixed seed, custom sizes, other directory
//! title-fixtures -o fixtures --seed 7 --title-count 20 --credit-count 500
//!
//! # More logging
//! RUST_LOG=debug title-fixtures
//! ```

use anyhow::Context;
use clap::Parser;
use title_fixtures::{run_fixtures, verify_fixtures, CSVPopulateArgs};

#[derive(Parser)]
#[command(name = "title-fixtures")]
#[command(about = "Generate synthetic titles.csv and credits.csv test fixtures")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    populate: CSVPopulateArgs,

    /// Read the written files back and check row counts, ids and value domains
    #[arg(long)]
    verify: bool,
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let report = run_fixtures(&cli.populate)?;

    if cli.verify {
        verify_fixtures(&report).context("Verification of written fixtures failed")?;
    }

    Ok(())
}
