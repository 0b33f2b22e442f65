// src/exec/mod.rs
//! In-process execution of map-reduce style jobs.
//!
//! Jobs describe only their per-record transform and their aggregation. The
//! executor owns partitioning, the grouping shuffle, and parallelism.

pub mod local;

pub use local::LocalExecutor;

use crate::error::Result;

/// A per-record transform followed by a grouped aggregation.
///
/// Every value emitted for a key reaches exactly one `reduce` call, fully
/// buffered. `map` must be deterministic so a retried partition produces the
/// same contributions.
pub trait KeyedJob: Sync {
    type Input: Sync;
    type Key: Ord + Send;
    type Value: Send;
    type Output: Send;

    /// Emits zero or more key/value contributions for one input record.
    ///
    /// # Errors
    /// Returns error if the record is malformed.
    fn map(&self, input: &Self::Input, emit: &mut Vec<(Self::Key, Self::Value)>) -> Result<()>;

    /// Aggregates every value emitted for `key`. `None` drops the key.
    ///
    /// # Errors
    /// Returns error if aggregation fails.
    fn reduce(&self, key: Self::Key, values: Vec<Self::Value>) -> Result<Option<Self::Output>>;
}

/// A local aggregation per partition followed by a single merge instance.
pub trait PartitionJob: Sync {
    type Input: Sync;
    type Local: Send;
    type Output;

    /// Aggregates one partition independently of all others.
    ///
    /// # Errors
    /// Returns error if a record is malformed.
    fn local(&self, partition: &[Self::Input]) -> Result<Self::Local>;

    /// Combines all local results. Runs once, after every partition finished.
    ///
    /// # Errors
    /// Returns error if the merged result violates the job's invariants.
    fn merge(&self, locals: Vec<Self::Local>) -> Result<Self::Output>;
}
