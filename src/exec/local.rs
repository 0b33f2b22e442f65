// src/exec/local.rs
use std::collections::BTreeMap;

use rayon::prelude::{IntoParallelIterator, IntoParallelRefIterator, ParallelIterator};

use super::{KeyedJob, PartitionJob};
use crate::error::Result;

/// Runs jobs over in-memory partitions on the rayon thread pool.
#[derive(Debug, Clone, Copy)]
pub struct LocalExecutor {
    partitions: usize,
}

impl LocalExecutor {
    /// `partitions == 0` uses one partition per rayon worker thread.
    #[must_use]
    pub fn new(partitions: usize) -> Self {
        let partitions = if partitions == 0 {
            rayon::current_num_threads()
        } else {
            partitions
        };
        Self {
            partitions: partitions.max(1),
        }
    }

    #[must_use]
    pub const fn partitions(&self) -> usize {
        self.partitions
    }

    /// Splits records into at most `partitions` contiguous slices.
    #[must_use]
    pub fn split<'a, T>(&self, records: &'a [T]) -> Vec<&'a [T]> {
        if records.is_empty() {
            return Vec::new();
        }
        let chunk = records.len().div_ceil(self.partitions);
        records.chunks(chunk).collect()
    }

    /// Map in parallel, shuffle by key, reduce in parallel.
    ///
    /// Output is ordered by key.
    ///
    /// # Errors
    /// Returns the first error raised by `map` or `reduce`.
    pub fn run_keyed<J: KeyedJob>(&self, job: &J, records: &[J::Input]) -> Result<Vec<J::Output>> {
        let parts = self.split(records);
        tracing::debug!(
            records = records.len(),
            partitions = parts.len(),
            "map phase"
        );

        let emitted = parts
            .par_iter()
            .map(|part| map_partition(job, part))
            .collect::<Result<Vec<_>>>()?;

        let groups = shuffle(emitted);
        tracing::debug!(keys = groups.len(), "reduce phase");

        let reduced = groups
            .into_par_iter()
            .map(|(key, values)| job.reduce(key, values))
            .collect::<Result<Vec<_>>>()?;

        Ok(reduced.into_iter().flatten().collect())
    }

    /// Local aggregation per partition in parallel, then one merge.
    ///
    /// # Errors
    /// Returns the first error raised by `local` or `merge`.
    pub fn run_partitioned<J: PartitionJob>(&self, job: &J, records: &[J::Input]) -> Result<J::Output> {
        let parts = self.split(records);
        tracing::debug!(
            records = records.len(),
            partitions = parts.len(),
            "local phase"
        );

        let locals = parts
            .par_iter()
            .map(|part| job.local(part))
            .collect::<Result<Vec<_>>>()?;

        job.merge(locals)
    }
}

impl Default for LocalExecutor {
    fn default() -> Self {
        Self::new(0)
    }
}

fn map_partition<J: KeyedJob>(job: &J, part: &[J::Input]) -> Result<Vec<(J::Key, J::Value)>> {
    let mut emitted = Vec::new();
    for record in part {
        job.map(record, &mut emitted)?;
    }
    Ok(emitted)
}

// Partitions are drained in order, so the value order inside a group is stable
// across runs.
fn shuffle<K: Ord, V>(emitted: Vec<Vec<(K, V)>>) -> Vec<(K, Vec<V>)> {
    let mut groups: BTreeMap<K, Vec<V>> = BTreeMap::new();
    for (key, value) in emitted.into_iter().flatten() {
        groups.entry(key).or_default().push(value);
    }
    groups.into_iter().collect()
}
