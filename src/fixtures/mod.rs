//! Fixture generation pipelines and read-back checks.

mod run;
mod verify;

pub use run::{run_fixtures, FixtureReport, CREDITS_FILE, TITLES_FILE};
pub use verify::{
    credit_violation, title_violation, verify_file, verify_fixtures, VerifyError,
};
