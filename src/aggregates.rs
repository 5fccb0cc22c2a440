use std::{collections::HashSet, io::BufRead};

use crate::{
    dataset::{Dataset, Record},
    error::StatsError,
    report::Report,
    stats::SampleStats,
};

const PROGRESS_INTERVAL: usize = 100_000;

/// Running totals over the records scanned so far.
#[derive(Debug, Default)]
pub struct Aggregates {
    collection_size: usize,
    universe_size: i64,
    distinct_tokens: HashSet<i64>,
    set_size_sum: usize,
    set_size_max: usize,
    set_sizes: Vec<usize>,
}

impl Aggregates {
    /// Scans the whole dataset, stopping at the first bad line.
    pub fn from_dataset<R: BufRead>(dataset: Dataset<R>) -> Result<Aggregates, StatsError> {
        let path = dataset.path().to_owned();
        let mut aggregates = Aggregates::default();
        for record in dataset {
            aggregates.add(&record?);
            if aggregates.collection_size % PROGRESS_INTERVAL == 0 {
                log::debug!("scanned {} records", aggregates.collection_size);
            }
        }
        log::info!(
            "scanned {}: {} records, {} distinct tokens",
            path.display(),
            aggregates.collection_size,
            aggregates.distinct_tokens.len()
        );
        Ok(aggregates)
    }

    pub fn add(&mut self, record: &Record) {
        let size = record.len();
        self.collection_size += 1;
        self.universe_size = self.universe_size.max(record.max());
        self.distinct_tokens.extend(record.tokens().iter().copied());
        self.set_size_max = self.set_size_max.max(size);
        self.set_size_sum += size;
        self.set_sizes.push(size);
    }

    pub fn finish(&self) -> Result<Report, StatsError> {
        if self.collection_size == 0 {
            return Err(StatsError::EmptyDataset);
        }
        let sample = SampleStats::compute(&self.set_sizes).ok_or(StatsError::InsufficientData {
            records: self.collection_size,
        })?;

        Ok(Report {
            collection_size: self.collection_size,
            universe_size: self.universe_size,
            different_tokens: self.distinct_tokens.len(),
            set_size_avg: self.set_size_sum as f64 / self.collection_size as f64,
            set_size_max: self.set_size_max,
            set_size_stddev: sample.std_dev(),
        })
    }
}
