// src/pipeline/popular.rs
use std::num::NonZeroUsize;
use std::path::PathBuf;

use super::{load_input, Runner};
use crate::error::Result;
use crate::parse::SourceLine;
use crate::select::TopKSelector;
use crate::types::CountedPage;

impl Runner {
    /// The `n` most-linked pages: count, persist, then select.
    ///
    /// # Errors
    /// Returns error if any stage fails.
    pub fn top(&mut self, inputs: &[PathBuf], n: NonZeroUsize) -> Result<Vec<CountedPage>> {
        let counts = self.count_to_disk(inputs)?;
        self.select_lines(&counts, n)
    }

    /// Bounded top-K over existing count records or earlier top-N output.
    ///
    /// # Errors
    /// Returns error if a record fails to parse.
    pub fn select(&mut self, inputs: &[PathBuf], n: NonZeroUsize) -> Result<Vec<CountedPage>> {
        let lines = load_input(inputs)?;
        self.select_lines(&lines, n)
    }

    fn select_lines(&mut self, lines: &[SourceLine], n: NonZeroUsize) -> Result<Vec<CountedPage>> {
        let selector = TopKSelector::new(n);
        self.stage("select", lines.len(), |exec| {
            exec.run_partitioned(&selector, lines)
        })
    }
}
