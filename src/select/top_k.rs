// src/select/top_k.rs
//! Two-phase bounded top-K selection.
//!
//! Each partition keeps its own K best `(count, page)` keys; a single merge
//! instance folds the partition winners into a final list of K. A page in the
//! global top K is always in the top K of its own partition, so nothing that
//! matters is lost by the local cut.

use std::num::NonZeroUsize;

use super::rank_list::RankList;
use crate::error::Result;
use crate::exec::PartitionJob;
use crate::parse::{self, SourceLine};
use crate::types::CountedPage;

#[derive(Debug, Clone, Copy)]
pub struct TopKSelector {
    capacity: NonZeroUsize,
}

impl TopKSelector {
    #[must_use]
    pub const fn new(capacity: NonZeroUsize) -> Self {
        Self { capacity }
    }

    /// Local phase over already-parsed pages.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the list invariant breaks.
    pub fn local_pages<I>(&self, pages: I) -> Result<RankList>
    where
        I: IntoIterator<Item = CountedPage>,
    {
        let mut list = RankList::bounded(self.capacity);
        for page in pages {
            list.insert(page.key())?;
        }
        Ok(list)
    }

    /// Merge phase: final top K, descending by count then page id.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the list invariant breaks.
    pub fn merge_lists(&self, locals: Vec<RankList>) -> Result<Vec<CountedPage>> {
        let mut merged = RankList::bounded(self.capacity);
        for local in locals {
            merged.absorb(local)?;
        }
        Ok(merged
            .into_descending()
            .into_iter()
            .map(CountedPage::from)
            .collect())
    }
}

impl PartitionJob for TopKSelector {
    type Input = SourceLine;
    type Local = RankList;
    type Output = Vec<CountedPage>;

    fn local(&self, partition: &[SourceLine]) -> Result<RankList> {
        let mut list = RankList::bounded(self.capacity);
        for line in partition {
            if let Some(page) = parse::counted(line)? {
                list.insert(page.key())?;
            }
        }
        Ok(list)
    }

    fn merge(&self, locals: Vec<RankList>) -> Result<Vec<CountedPage>> {
        self.merge_lists(locals)
    }
}
