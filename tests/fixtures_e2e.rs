//! End-to-end fixture generation tests.
//!
//! These run the full generate -> write -> read back workflow against a
//! temporary directory.

use fixture_core::domains::{AGE_CERTIFICATIONS, COUNTRY_CODES, ROLES};
use fixture_core::{Credit, Title};
use fixture_generator::{CreditFactory, DataGenerator, TitleFactory};
use fixture_populate_csv::{read_records, CSVPopulateArgs, CSVPopulator, CSVPopulatorError};
use tempfile::TempDir;
use title_fixtures::fixtures::{CREDITS_FILE, TITLES_FILE};
use title_fixtures::{run_fixtures, verify_fixtures};

const SEED: u64 = 42;

fn seeded_args(dir: &TempDir) -> CSVPopulateArgs {
    CSVPopulateArgs {
        output_dir: dir.path().to_path_buf(),
        seed: Some(SEED),
        ..CSVPopulateArgs::default()
    }
}

#[test]
fn test_default_run_writes_both_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let report = run_fixtures(&seeded_args(&temp_dir))?;

    let titles_csv = std::fs::read_to_string(temp_dir.path().join(TITLES_FILE))?;
    let title_lines: Vec<&str> = titles_csv.lines().collect();
    assert_eq!(
        title_lines[0],
        "Id,Name,Description,ReleaseYear,AgeCertification,Runtime,Genres,ProductionCountry,Seasons"
    );
    assert_eq!(report.titles.rows_written, 150);

    let credits_csv = std::fs::read_to_string(temp_dir.path().join(CREDITS_FILE))?;
    assert!(credits_csv.starts_with("Id,TitleId,RealName,CharacterName,Role\n"));
    assert_eq!(report.credits.rows_written, 150);

    verify_fixtures(&report)?;
    Ok(())
}

#[test]
fn test_written_titles_hold_domain_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    run_fixtures(&seeded_args(&temp_dir))?;

    let titles: Vec<Title> = read_records(temp_dir.path().join(TITLES_FILE))?;
    let max_year = *TitleFactory::new().release_year.end();

    assert_eq!(titles.len(), 150);
    for (i, title) in titles.iter().enumerate() {
        assert_eq!(title.id, i as u64);
        assert!((1900..=max_year).contains(&title.release_year));
        assert!((60..=180).contains(&title.runtime));
        assert!(AGE_CERTIFICATIONS.contains(&title.age_certification.as_str()));
        assert!(COUNTRY_CODES.contains(&title.production_country.as_str()));
        assert!(
            title.seasons.is_empty()
                || title
                    .seasons
                    .parse::<u32>()
                    .is_ok_and(|s| (1..=10).contains(&s)),
            "bad seasons {:?}",
            title.seasons
        );
    }
    Ok(())
}

#[test]
fn test_written_credits_hold_domain_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    run_fixtures(&seeded_args(&temp_dir))?;

    let credits: Vec<Credit> = read_records(temp_dir.path().join(CREDITS_FILE))?;

    assert_eq!(credits.len(), 150);
    for (i, credit) in credits.iter().enumerate() {
        assert_eq!(credit.id, i as u64);
        assert!(credit.title_id <= 99);
        assert!(ROLES.contains(&credit.role.as_str()));
    }
    Ok(())
}

#[test]
fn test_zero_counts_write_headers_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let args = CSVPopulateArgs {
        title_count: 0,
        credit_count: 0,
        ..seeded_args(&temp_dir)
    };

    let report = run_fixtures(&args)?;
    verify_fixtures(&report)?;

    let titles_csv = std::fs::read_to_string(temp_dir.path().join(TITLES_FILE))?;
    assert_eq!(titles_csv.lines().count(), 1);
    let credits_csv = std::fs::read_to_string(temp_dir.path().join(CREDITS_FILE))?;
    assert_eq!(credits_csv, "Id,TitleId,RealName,CharacterName,Role\n");
    Ok(())
}

#[test]
fn test_three_seeded_titles() {
    let mut gen1 = DataGenerator::new(TitleFactory::new(), SEED);
    let mut gen2 = DataGenerator::new(TitleFactory::new(), SEED);

    let titles = gen1.generate(3);

    assert_eq!(titles.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(titles, gen2.generate(3));
}

#[test]
fn test_credit_failure_leaves_titles_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let populator = CSVPopulator::new();

    let titles_path = temp_dir.path().join(TITLES_FILE);
    let mut titles = DataGenerator::new(TitleFactory::new(), SEED);
    populator.populate(&mut titles, &titles_path, 150)?;
    let before = std::fs::read(&titles_path)?;

    let credits_path = temp_dir.path().join("no-such-dir").join(CREDITS_FILE);
    let mut credits = DataGenerator::new(CreditFactory::new(), SEED);
    let result = populator.populate(&mut credits, &credits_path, 150);

    assert!(matches!(result, Err(CSVPopulatorError::Io(_))));
    assert!(!credits_path.exists());
    assert_eq!(std::fs::read(&titles_path)?, before);
    Ok(())
}
