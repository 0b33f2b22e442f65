// src/flip/mod.rs
//! The Link Flip Counter: turns outbound adjacency into inbound counts.
//!
//! Each adjacency record emits `(source, 0)` and one `(target, 1)` per
//! outbound link. Summing per page yields the inbound count, and the
//! zero-weight contribution keeps pages nobody links to in the output.

pub mod orphan;

pub use orphan::OrphanFilter;

use crate::error::{LinkFlipError, Result};
use crate::exec::KeyedJob;
use crate::parse::{self, SourceLine};
use crate::types::{AdjacencyRecord, CountedPage, LinkCount, PageId};

/// Receives each finished inbound count and decides what, if anything, to emit.
pub trait CountSink: Sync {
    type Output: Send;

    fn accept(&self, page: CountedPage) -> Option<Self::Output>;
}

/// Passes every counted page through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllCounts;

impl CountSink for AllCounts {
    type Output = CountedPage;

    fn accept(&self, page: CountedPage) -> Option<CountedPage> {
        Some(page)
    }
}

/// Counts inbound links and hands each total to a downstream [`CountSink`].
#[derive(Debug, Clone, Default)]
pub struct LinkFlipCounter<S> {
    sink: S,
}

impl<S: CountSink> LinkFlipCounter<S> {
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }
}

impl LinkFlipCounter<AllCounts> {
    #[must_use]
    pub const fn counts() -> Self {
        Self::new(AllCounts)
    }
}

/// Emits the flipped contributions of one adjacency record.
pub fn flip(record: &AdjacencyRecord, emit: &mut Vec<(PageId, LinkCount)>) {
    emit.push((record.source, 0));
    emit.extend(record.targets.iter().map(|&target| (target, 1)));
}

/// Sums contributions for one page.
///
/// # Errors
/// Returns `CountOverflow` instead of wrapping.
pub fn sum(page: PageId, weights: &[LinkCount]) -> Result<LinkCount> {
    weights
        .iter()
        .try_fold(0 as LinkCount, |acc, &w| acc.checked_add(w))
        .ok_or(LinkFlipError::CountOverflow(page))
}

impl<S: CountSink> KeyedJob for LinkFlipCounter<S> {
    type Input = SourceLine;
    type Key = PageId;
    type Value = LinkCount;
    type Output = S::Output;

    fn map(&self, line: &SourceLine, emit: &mut Vec<(PageId, LinkCount)>) -> Result<()> {
        if let Some(record) = parse::adjacency(line)? {
            flip(&record, emit);
        }
        Ok(())
    }

    fn reduce(&self, page: PageId, weights: Vec<LinkCount>) -> Result<Option<S::Output>> {
        let inbound = sum(page, &weights)?;
        Ok(self.sink.accept(CountedPage::new(page, inbound)))
    }
}
