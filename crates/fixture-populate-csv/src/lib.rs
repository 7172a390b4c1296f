//! CSV writer for fixture records.
//!
//! # Example
//!
//! ```ignore
//! use fixture_generator::{DataGenerator, TitleFactory};
//! use fixture_populate_csv::CSVPopulator;
//!
//! let mut generator = DataGenerator::new(TitleFactory::new(), 42);
//! let metrics = CSVPopulator::new().populate(&mut generator, "titles.csv", 150)?;
//! ```

pub mod args;
mod error;
mod populator;
mod reader;

pub use args::{CSVPopulateArgs, DEFAULT_RECORD_COUNT};
pub use error::CSVPopulatorError;
pub use populator::{CSVPopulator, PopulateMetrics, DEFAULT_BUFFER_SIZE};
pub use reader::read_records;
