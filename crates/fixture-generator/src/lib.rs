//! Record generator for title-fixtures.
//!
//! A [`DataGenerator`] drives a [`RecordFactory`] with a single RNG and a
//! running index. Factories hold the per-field rules (ranges, domains,
//! probabilities); the functions in [`generators`] do the actual drawing.
//!
//! ```text
//! TitleFactory / CreditFactory
//!        │
//!        ▼
//! ┌─────────────────┐
//! │  DataGenerator  │
//! │                 │
//! │  - rng (StdRng) │
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Vec<Title> / Vec<Credit>
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_generator::{DataGenerator, TitleFactory};
//!
//! let mut generator = DataGenerator::new(TitleFactory::new(), 42);
//! let titles = generator.generate(3);
//! assert_eq!(titles.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1, 2]);
//! ```

pub mod factory;
pub mod generator;
pub mod generators;

pub use factory::{CreditFactory, RecordFactory, TitleFactory};
pub use generator::{DataGenerator, RecordIterator};
