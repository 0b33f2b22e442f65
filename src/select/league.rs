// src/select/league.rs
//! League ranking by inbound-link count.
//!
//! The rank of a page is the number of league pages with a *strictly greater*
//! inbound count. Tied pages share a rank and the next distinct count skips
//! ahead, so counts `{5, 5, 3}` rank as `0, 0, 2`. This is not a sequential
//! position (`0, 1, 2`) and not a gap-free dense rank (`0, 0, 1`); consumers
//! depend on the strictly-greater reading.
//!
//! Ranking needs every league count at once, so the merge is a single
//! aggregation point. That is fine for small leagues and becomes the
//! bottleneck for large ones.

use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::rank_list::RankList;
use crate::error::{LinkFlipError, Result};
use crate::exec::PartitionJob;
use crate::parse::{self, SourceLine};
use crate::types::{CountKey, CountedPage, LinkCount, PageId, RankedPage};

/// The fixed set of pages ranked against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueSet {
    members: BTreeSet<PageId>,
}

impl LeagueSet {
    /// Reads a newline-delimited list of page ids.
    ///
    /// # Errors
    /// Returns `Config` if the file is missing or holds a non-numeric id.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                LinkFlipError::Config(format!("league file {} not found", path.display()))
            }
            _ => LinkFlipError::io(e, path),
        })?;
        Self::parse(&content, path)
    }

    /// Parses league ids, ignoring blank lines and surrounding whitespace.
    ///
    /// # Errors
    /// Returns `Config` naming the first bad line.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let mut members = BTreeSet::new();
        for (idx, line) in content.lines().enumerate() {
            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            let id = parse::page_id(token).map_err(|m| {
                LinkFlipError::Config(format!("{}:{}: {m}", origin.display(), idx + 1))
            })?;
            members.insert(id);
        }
        Ok(Self { members })
    }

    #[must_use]
    pub fn contains(&self, page: PageId) -> bool {
        self.members.contains(&page)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PageId> + '_ {
        self.members.iter().copied()
    }
}

impl FromIterator<PageId> for LeagueSet {
    fn from_iter<I: IntoIterator<Item = PageId>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

/// Ranks league members by inbound count.
#[derive(Debug, Clone)]
pub struct LeagueRankAssigner {
    league: LeagueSet,
}

impl LeagueRankAssigner {
    #[must_use]
    pub fn new(league: LeagueSet) -> Self {
        Self { league }
    }

    /// Keys of the pages that belong to the league.
    pub fn restrict<'a, I>(&self, pages: I) -> Vec<CountKey>
    where
        I: IntoIterator<Item = &'a CountedPage>,
    {
        pages
            .into_iter()
            .filter(|p| self.league.contains(p.page))
            .map(CountedPage::key)
            .collect()
    }

    /// Ranks a complete set of counted pages in one step.
    ///
    /// # Errors
    /// Returns `MissingLeaguePage` if a league member has no count.
    pub fn rank(&self, pages: &[CountedPage]) -> Result<Vec<RankedPage>> {
        self.merge_keys(vec![self.restrict(pages)])
    }

    fn merge_keys(&self, locals: Vec<Vec<CountKey>>) -> Result<Vec<RankedPage>> {
        let mut list = RankList::unbounded();
        for key in locals.into_iter().flatten() {
            list.insert(key)?;
        }

        let present: BTreeSet<PageId> = list.iter().map(|k| *k.second()).collect();
        if let Some(missing) = self.league.iter().find(|p| !present.contains(p)) {
            return Err(LinkFlipError::MissingLeaguePage(missing));
        }

        Ok(assign_ranks(&list))
    }
}

/// Assigns strictly-greater ranks, emitting from highest count to lowest.
///
/// Walking the list in descending order, the number of entries already passed
/// when a new count first appears is exactly the number of strictly greater
/// entries, and every later entry with the same count shares it.
#[must_use]
pub fn assign_ranks(list: &RankList) -> Vec<RankedPage> {
    let mut ranked = Vec::with_capacity(list.len());
    let mut rank = 0;
    let mut previous: Option<LinkCount> = None;

    for (seen, key) in list.iter().rev().enumerate() {
        let (count, page) = (*key.first(), *key.second());
        if previous != Some(count) {
            rank = seen;
            previous = Some(count);
        }
        ranked.push(RankedPage { page, rank, count });
    }
    ranked
}

impl PartitionJob for LeagueRankAssigner {
    type Input = SourceLine;
    type Local = Vec<CountKey>;
    type Output = Vec<RankedPage>;

    fn local(&self, partition: &[SourceLine]) -> Result<Vec<CountKey>> {
        let mut keys = Vec::new();
        for line in partition {
            if let Some(page) = parse::counted(line)? {
                if self.league.contains(page.page) {
                    keys.push(page.key());
                }
            }
        }
        Ok(keys)
    }

    fn merge(&self, locals: Vec<Vec<CountKey>>) -> Result<Vec<RankedPage>> {
        self.merge_keys(locals)
    }
}
