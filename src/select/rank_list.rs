// src/select/rank_list.rs
//! Ordered set of `(count, page)` keys with optional capacity.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use crate::error::{LinkFlipError, Result};
use crate::types::CountKey;

/// Ascending set of count keys that keeps at most `capacity` of the largest.
///
/// Inserting into a full list evicts the minimum, so after any number of
/// inserts the list holds the top entries seen so far. An unbounded list is
/// a plain ordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankList {
    entries: BTreeSet<CountKey>,
    capacity: Option<NonZeroUsize>,
}

impl RankList {
    #[must_use]
    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self {
            entries: BTreeSet::new(),
            capacity: Some(capacity),
        }
    }

    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn capacity(&self) -> Option<usize> {
        self.capacity.map(NonZeroUsize::get)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The smallest retained key; the next eviction candidate.
    #[must_use]
    pub fn min(&self) -> Option<&CountKey> {
        self.entries.first()
    }

    fn is_full(&self) -> bool {
        self.capacity().is_some_and(|cap| self.entries.len() >= cap)
    }

    /// Inserts `key`, evicting the minimum if the list grows past capacity.
    ///
    /// # Errors
    /// Returns `CapacityExceeded` if the list is still over capacity after
    /// eviction.
    pub fn insert(&mut self, key: CountKey) -> Result<()> {
        // A full list would evict this key straight away.
        if self.is_full() && self.min().is_some_and(|min| key < *min) {
            return Ok(());
        }

        self.entries.insert(key);
        if let Some(cap) = self.capacity() {
            if self.entries.len() > cap {
                self.entries.pop_first();
            }
            if self.entries.len() > cap {
                return Err(LinkFlipError::CapacityExceeded {
                    capacity: cap,
                    len: self.entries.len(),
                });
            }
        }
        Ok(())
    }

    /// Re-inserts every entry of `other` under this list's capacity.
    ///
    /// # Errors
    /// Propagates `CapacityExceeded` from [`RankList::insert`].
    pub fn absorb(&mut self, other: RankList) -> Result<()> {
        for key in other.entries {
            self.insert(key)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &CountKey> + '_ {
        self.entries.iter()
    }

    /// Entries from largest to smallest.
    #[must_use]
    pub fn into_descending(self) -> Vec<CountKey> {
        self.entries.into_iter().rev().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::Pair;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_bounded_evicts_minimum() {
        let mut list = RankList::bounded(cap(2));
        for key in [Pair::new(5, 1), Pair::new(1, 2), Pair::new(7, 3), Pair::new(5, 4)] {
            list.insert(key).unwrap();
        }
        assert_eq!(list.into_descending(), vec![Pair::new(7, 3), Pair::new(5, 4)]);
    }

    #[test]
    fn test_ties_evict_smaller_page() {
        let mut list = RankList::bounded(cap(1));
        list.insert(Pair::new(3, 9)).unwrap();
        list.insert(Pair::new(3, 2)).unwrap();
        assert_eq!(list.min(), Some(&Pair::new(3, 9)));
    }

    #[test]
    fn test_unbounded_keeps_everything() {
        let mut list = RankList::unbounded();
        for i in 0..100 {
            list.insert(Pair::new(i % 7, i)).unwrap();
        }
        assert_eq!(list.len(), 100);
        assert_eq!(list.capacity(), None);
    }

    #[test]
    fn test_absorb_respects_capacity() {
        let mut a = RankList::bounded(cap(3));
        let mut b = RankList::bounded(cap(3));
        for i in 0..3 {
            a.insert(Pair::new(i, i)).unwrap();
            b.insert(Pair::new(i + 10, i)).unwrap();
        }
        a.absorb(b).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.min(), Some(&Pair::new(10, 0)));
    }
}
