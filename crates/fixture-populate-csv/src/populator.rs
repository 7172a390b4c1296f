//! CSV writer for fixture records.

use crate::error::CSVPopulatorError;
use csv::{QuoteStyle, WriterBuilder};
use fixture_core::FixtureRecord;
use fixture_generator::{DataGenerator, RecordFactory};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written, excluding the header.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes homogeneous record batches to CSV files.
///
/// Each call truncates the target file. Quoting follows RFC 4180: a field is
/// quoted only when it contains the delimiter, a quote or a line break.
#[derive(Debug, Clone)]
pub struct CSVPopulator {
    include_header: bool,
    buffer_size: usize,
}

impl CSVPopulator {
    pub fn new() -> Self {
        Self {
            include_header: true,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set whether to include a header row in the CSV output.
    pub fn with_header(mut self, include_header: bool) -> Self {
        self.include_header = include_header;
        self
    }

    /// Set the write buffer capacity.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Write `records` to `output_path`, replacing any existing file.
    ///
    /// The header row is written even when `records` is empty. On error the
    /// file is closed but may hold a partial write.
    pub fn write_records<T, P>(
        &self,
        records: &[T],
        output_path: P,
    ) -> Result<PopulateMetrics, CSVPopulatorError>
    where
        T: FixtureRecord,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();

        info!(
            "Writing {} {} rows to '{}'",
            records.len(),
            T::KIND,
            output_path.display()
        );

        // Headers come from T::HEADERS so an empty batch still gets one.
        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(self.buffer_size, file);
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .from_writer(buf_writer);

        if self.include_header {
            writer.write_record(T::HEADERS)?;
        }

        let mut metrics = PopulateMetrics::default();
        for record in records {
            writer.serialize(record)?;
            metrics.rows_written += 1;

            if metrics.rows_written % 10000 == 0 {
                debug!("Written {} rows", metrics.rows_written);
            }
        }

        writer.flush()?;
        let inner = writer
            .into_inner()
            .map_err(|e| CSVPopulatorError::Io(std::io::Error::other(e.to_string())))?;
        drop(inner);

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();
        metrics.write_duration = metrics.total_duration;

        Ok(metrics)
    }

    /// Generate `count` records and write them to `output_path`.
    pub fn populate<F, P>(
        &self,
        generator: &mut DataGenerator<F>,
        output_path: P,
        count: u64,
    ) -> Result<PopulateMetrics, CSVPopulatorError>
    where
        F: RecordFactory,
        P: AsRef<Path>,
    {
        let start_time = Instant::now();
        let output_path = output_path.as_ref();

        let gen_start = Instant::now();
        let records = generator.generate(count);
        let generation_duration = gen_start.elapsed();

        let mut metrics = self.write_records(&records, output_path)?;
        metrics.generation_duration = generation_duration;
        metrics.total_duration = start_time.elapsed();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

impl Default for CSVPopulator {
    fn default() -> Self {
        Self::new()
    }
}
