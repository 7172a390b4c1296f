//! Read fixture CSV files back into records.

use crate::error::CSVPopulatorError;
use fixture_core::FixtureRecord;
use std::path::Path;

/// Parse a CSV file written by [`CSVPopulator`](crate::CSVPopulator).
///
/// Columns are matched by header name, so the file must have a header row.
pub fn read_records<T, P>(path: P) -> Result<Vec<T>, CSVPopulatorError>
where
    T: FixtureRecord,
    P: AsRef<Path>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}
