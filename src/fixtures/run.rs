//! Fixture run: titles first, then credits.

use anyhow::Context;
use fixture_generator::{CreditFactory, DataGenerator, TitleFactory};
use fixture_populate_csv::{CSVPopulateArgs, CSVPopulator, PopulateMetrics};
use std::path::PathBuf;

/// File name for generated titles.
pub const TITLES_FILE: &str = "titles.csv";

/// File name for generated credits.
pub const CREDITS_FILE: &str = "credits.csv";

/// Paths and metrics for one completed run.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub titles_path: PathBuf,
    pub titles: PopulateMetrics,
    pub credits_path: PathBuf,
    pub credits: PopulateMetrics,
}

/// Generate and write titles, then credits.
///
/// A failure on titles stops the run before credits are generated. A failure
/// on credits leaves the titles file as written.
pub fn run_fixtures(args: &CSVPopulateArgs) -> anyhow::Result<FixtureReport> {
    let populator = CSVPopulator::new();

    tracing::info!(
        "Generating fixtures: {} titles, {} credits (seed={:?}) into {:?}",
        args.title_count,
        args.credit_count,
        args.seed,
        args.output_dir
    );

    let titles_path = args.output_dir.join(TITLES_FILE);
    let mut titles = DataGenerator::with_optional_seed(TitleFactory::new(), args.seed);
    let titles_metrics = populator
        .populate(&mut titles, &titles_path, args.title_count)
        .with_context(|| format!("Failed to write titles to {}", titles_path.display()))?;

    // Credits draw from their own stream, independent of the title count.
    let credits_path = args.output_dir.join(CREDITS_FILE);
    let credit_seed = args.seed.map(|seed| seed.wrapping_add(1));
    let mut credits = DataGenerator::with_optional_seed(CreditFactory::new(), credit_seed);
    let credits_metrics = populator
        .populate(&mut credits, &credits_path, args.credit_count)
        .with_context(|| format!("Failed to write credits to {}", credits_path.display()))?;

    tracing::info!(
        "Wrote {} titles and {} credits",
        titles_metrics.rows_written,
        credits_metrics.rows_written
    );

    Ok(FixtureReport {
        titles_path,
        titles: titles_metrics,
        credits_path,
        credits: credits_metrics,
    })
}
