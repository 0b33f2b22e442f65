// src/pipeline/mod.rs
//! Orchestrates the counting stage and the downstream selection stages.
//!
//! Two-stage pipelines persist the counted pages under the work directory and
//! read them back, so the second stage consumes exactly what a later re-run
//! would see on disk.

pub mod league;
pub mod orphans;
pub mod popular;

use std::path::PathBuf;
use std::time::Instant;

use crate::error::Result;
use crate::exec::LocalExecutor;
use crate::flip::LinkFlipCounter;
use crate::parse::SourceLine;
use crate::store::{self, format};
use crate::types::{CountedPage, RunSummary, StageSummary};

/// Name of the persisted counted-pages file inside a scratch directory.
pub const COUNTS_FILE: &str = "counts";

/// Executes one pipeline run and records per-stage statistics.
pub struct Runner {
    executor: LocalExecutor,
    work_dir: PathBuf,
    summary: RunSummary,
}

impl Runner {
    #[must_use]
    pub fn new(pipeline: &str, executor: LocalExecutor, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            summary: RunSummary::new(pipeline, executor.partitions()),
            executor,
            work_dir: work_dir.into(),
        }
    }

    #[must_use]
    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    #[must_use]
    pub fn into_summary(self) -> RunSummary {
        self.summary
    }

    /// Scratch directory of this pipeline.
    #[must_use]
    pub fn scratch_dir(&self) -> PathBuf {
        self.work_dir.join(&self.summary.pipeline)
    }

    /// Counts inbound links for every page in the adjacency input.
    ///
    /// # Errors
    /// Returns error if input cannot be read or a line fails to parse.
    pub fn count(&mut self, inputs: &[PathBuf]) -> Result<Vec<CountedPage>> {
        let lines = load_input(inputs)?;
        self.stage("count", lines.len(), |exec| {
            exec.run_keyed(&LinkFlipCounter::counts(), &lines)
        })
    }

    /// Runs the counting stage, persists it, and returns the persisted records.
    fn count_to_disk(&mut self, inputs: &[PathBuf]) -> Result<Vec<SourceLine>> {
        let dir = self.scratch_dir();
        store::ensure_outside(inputs, &dir)?;
        let counts = self.count(inputs)?;
        store::prepare_scratch(&dir, &[COUNTS_FILE])?;

        let path = dir.join(COUNTS_FILE);
        store::write_atomic(&path, |w| format::write_counts(w, &counts))?;
        tracing::debug!(path = %path.display(), "persisted counted pages");
        store::read_lines(&[path])
    }

    fn stage<T, F>(&mut self, name: &'static str, records_in: usize, run: F) -> Result<Vec<T>>
    where
        F: FnOnce(&LocalExecutor) -> Result<Vec<T>>,
    {
        tracing::info!(stage = name, records_in, "stage started");
        let start = Instant::now();
        let out = run(&self.executor)?;

        let stage = StageSummary {
            stage: name,
            records_in,
            records_out: out.len(),
            duration_ms: start.elapsed().as_millis(),
        };
        tracing::info!(
            stage = name,
            records_out = stage.records_out,
            duration_ms = stage.duration_ms as u64,
            "stage finished"
        );
        self.summary.record(stage);
        Ok(out)
    }
}

/// Discovers and reads every input line.
///
/// # Errors
/// Returns `Io` if any input is missing or unreadable.
pub fn load_input(inputs: &[PathBuf]) -> Result<Vec<SourceLine>> {
    let files = store::discover(inputs)?;
    tracing::debug!(files = files.len(), "discovered input files");
    store::read_lines(&files)
}

