//! Read written fixture files back and check them.

use fixture_core::{Credit, FixtureRecord, Title};
use fixture_generator::{CreditFactory, TitleFactory};
use fixture_populate_csv::{read_records, CSVPopulatorError};
use std::path::Path;
use thiserror::Error;

use super::FixtureReport;

/// A written file that does not hold what was generated.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// File could not be read or parsed.
    #[error("Failed to read {kind}: {source}")]
    Read {
        kind: &'static str,
        #[source]
        source: CSVPopulatorError,
    },

    /// Row count differs from what was requested.
    #[error("{kind}: expected {expected} rows, found {actual}")]
    RowCount {
        kind: &'static str,
        expected: u64,
        actual: u64,
    },

    /// Ids are not `0..N` in order.
    #[error("{kind}: row {position} has id {id}")]
    IdSequence {
        kind: &'static str,
        position: u64,
        id: u64,
    },

    /// A field value is outside its range or domain.
    #[error("{kind}: record {id} has {field} = {value:?}")]
    OutOfDomain {
        kind: &'static str,
        id: u64,
        field: &'static str,
        value: String,
    },
}

/// Read `path` and check row count, id sequence and per-record fields.
///
/// `violation` returns the first offending field of a record, if any.
pub fn verify_file<T, P, V>(path: P, expected: u64, violation: V) -> Result<u64, VerifyError>
where
    T: FixtureRecord,
    P: AsRef<Path>,
    V: Fn(&T) -> Option<(&'static str, String)>,
{
    let records: Vec<T> = read_records(path).map_err(|source| VerifyError::Read {
        kind: T::KIND,
        source,
    })?;

    let actual = records.len() as u64;
    if actual != expected {
        return Err(VerifyError::RowCount {
            kind: T::KIND,
            expected,
            actual,
        });
    }

    for (position, record) in (0u64..).zip(&records) {
        if record.id() != position {
            return Err(VerifyError::IdSequence {
                kind: T::KIND,
                position,
                id: record.id(),
            });
        }
        if let Some((field, value)) = violation(record) {
            return Err(VerifyError::OutOfDomain {
                kind: T::KIND,
                id: record.id(),
                field,
                value,
            });
        }
    }

    Ok(actual)
}

/// First field of `title` that breaks the factory's rules.
pub fn title_violation(factory: &TitleFactory, title: &Title) -> Option<(&'static str, String)> {
    if !factory.release_year.contains(&title.release_year) {
        return Some(("ReleaseYear", title.release_year.to_string()));
    }
    if !factory
        .age_certifications
        .contains(&title.age_certification.as_str())
    {
        return Some(("AgeCertification", title.age_certification.clone()));
    }
    if !factory.runtime.contains(&title.runtime) {
        return Some(("Runtime", title.runtime.to_string()));
    }
    let genres = title.genres.split(factory.genre_separator).count();
    if title.genres.is_empty() || !factory.genre_count.contains(&genres) {
        return Some(("Genres", title.genres.clone()));
    }
    if !factory
        .countries
        .contains(&title.production_country.as_str())
    {
        return Some(("ProductionCountry", title.production_country.clone()));
    }
    if !title.seasons.is_empty() {
        let in_range = title
            .seasons
            .parse::<u32>()
            .is_ok_and(|s| factory.seasons.contains(&s));
        if !in_range {
            return Some(("Seasons", title.seasons.clone()));
        }
    }
    None
}

/// First field of `credit` that breaks the factory's rules.
pub fn credit_violation(factory: &CreditFactory, credit: &Credit) -> Option<(&'static str, String)> {
    if !factory.title_id.contains(&credit.title_id) {
        return Some(("TitleId", credit.title_id.to_string()));
    }
    if !factory.roles.contains(&credit.role.as_str()) {
        return Some(("Role", credit.role.clone()));
    }
    None
}

/// Check both files of a completed run.
pub fn verify_fixtures(report: &FixtureReport) -> Result<(), VerifyError> {
    let title_rules = TitleFactory::new();
    let titles = verify_file(&report.titles_path, report.titles.rows_written, |t: &Title| {
        title_violation(&title_rules, t)
    })?;

    let credit_rules = CreditFactory::new();
    let credits = verify_file(&report.credits_path, report.credits.rows_written, |c: &Credit| {
        credit_violation(&credit_rules, c)
    })?;

    tracing::info!("Verified {} titles and {} credits", titles, credits);
    Ok(())
}
