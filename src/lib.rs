//! Title Fixtures Library
//!
//! Generates synthetic film/show "titles" and "credits" and writes each set
//! to its own CSV file.
//!
//! # Crates
//!
//! - `fixture_core` - record shapes and value domains
//! - `fixture_generator` - per-field generators and the seeded batch producer
//! - `fixture_populate_csv` - CSV writer and reader
//!
//! # CLI Usage
//!
//! ```bash
//! # 150 titles and 150 credits in the current directory
//! title-fixtures
//!
//! # Reproducible output in ./out, checked after writing
//! title-fixtures --output-dir out --seed 42 --verify
//! ```

pub mod fixtures;

pub use fixture_populate_csv::CSVPopulateArgs;
pub use fixtures::{run_fixtures, verify_fixtures, FixtureReport};
