//! Record shapes and value domains shared by the fixture crates.
//!
//! This crate has no generation or I/O logic. It defines:
//!
//! - [`Title`] and [`Credit`], the two record shapes written to CSV
//! - [`FixtureRecord`], the trait the writer and generator are generic over
//! - [`domains`], the fixed value lists enumerated fields are drawn from

pub mod domains;
pub mod records;

pub use records::{Credit, FixtureRecord, Title};
