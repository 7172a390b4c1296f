//! Batch producer for fixture records.

use crate::factory::RecordFactory;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Produces records from a factory with sequential zero-based ids.
///
/// With [`DataGenerator::new`] the output is fully determined by the seed
/// and the factory rules. [`DataGenerator::from_entropy`] gives a different
/// batch every run.
pub struct DataGenerator<F: RecordFactory> {
    /// Field rules for each record
    factory: F,
    /// Random number generator shared by all fields
    rng: StdRng,
    /// Index of the next record
    index: u64,
}

impl<F: RecordFactory> DataGenerator<F> {
    /// Create a generator with a fixed seed.
    pub fn new(factory: F, seed: u64) -> Self {
        Self {
            factory,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy(factory: F) -> Self {
        Self {
            factory,
            rng: StdRng::from_entropy(),
            index: 0,
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn with_optional_seed(factory: F, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(factory, seed),
            None => Self::from_entropy(factory),
        }
    }

    /// Set the index the next record will get.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        self
    }

    /// Get the index the next record will get.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Get a reference to the factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Generate the next record.
    pub fn next_record(&mut self) -> F::Record {
        let record = self.factory.make(&mut self.rng, self.index);
        self.index += 1;
        record
    }

    /// Lazily generate `count` records.
    pub fn records(&mut self, count: u64) -> RecordIterator<'_, F> {
        RecordIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Generate a batch of `count` records.
    ///
    /// Ids continue from [`current_index`](Self::current_index), so a fresh
    /// generator yields ids `0..count`.
    pub fn generate(&mut self, count: u64) -> Vec<F::Record> {
        let start = self.index;
        let batch: Vec<_> = self.records(count).collect();
        debug!(
            "Generated {} {} records (ids {}..{})",
            batch.len(),
            <F::Record as fixture_core::FixtureRecord>::KIND,
            start,
            self.index
        );
        batch
    }
}

/// Iterator that lazily generates records.
pub struct RecordIterator<'a, F: RecordFactory> {
    generator: &'a mut DataGenerator<F>,
    remaining: u64,
}

impl<F: RecordFactory> Iterator for RecordIterator<'_, F> {
    type Item = F::Record;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_record())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl<F: RecordFactory> ExactSizeIterator for RecordIterator<'_, F> {}
