// src/flip/orphan.rs
use super::CountSink;
use crate::types::{CountedPage, PageId};

/// Keeps pages with no inbound links, emitting only their id.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrphanFilter;

impl CountSink for OrphanFilter {
    type Output = PageId;

    fn accept(&self, page: CountedPage) -> Option<PageId> {
        (page.inbound == 0).then_some(page.page)
    }
}
