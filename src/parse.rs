// src/parse.rs
//! Line parsers for adjacency input and counted-page records.

use std::path::Path;
use std::sync::Arc;

use crate::error::{LinkFlipError, Result};
use crate::types::{AdjacencyRecord, CountedPage, LinkCount, PageId};

/// A raw input line tagged with where it came from.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub origin: Arc<Path>,
    /// 1-based line number within `origin`.
    pub number: usize,
    pub text: String,
}

impl SourceLine {
    #[must_use]
    pub fn new(origin: Arc<Path>, number: usize, text: impl Into<String>) -> Self {
        Self {
            origin,
            number,
            text: text.into(),
        }
    }

    /// Builds a parse error pointing at this line.
    #[must_use]
    pub fn error(&self, message: impl Into<String>) -> LinkFlipError {
        LinkFlipError::Parse {
            path: self.origin.to_path_buf(),
            line: self.number,
            message: message.into(),
        }
    }

    fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Parses a base-10 page id.
///
/// # Errors
/// Returns a description of the bad token.
pub fn page_id(token: &str) -> std::result::Result<PageId, String> {
    token
        .parse::<PageId>()
        .map_err(|_| format!("invalid page id '{token}'"))
}

fn link_count(token: &str) -> std::result::Result<LinkCount, String> {
    token
        .parse::<LinkCount>()
        .map_err(|_| format!("invalid link count '{token}'"))
}

/// Parses `"<source>: <t1> <t2> ..."`. Blank lines yield `None`.
///
/// # Errors
/// Returns `LinkFlipError::Parse` when the colon is missing or any id is not a
/// non-negative integer.
pub fn adjacency(line: &SourceLine) -> Result<Option<AdjacencyRecord>> {
    if line.is_blank() {
        return Ok(None);
    }
    let Some((head, tail)) = line.text.split_once(':') else {
        return Err(line.error("missing ':' between source and targets"));
    };

    let source = page_id(head.trim()).map_err(|m| line.error(m))?;
    let targets = tail
        .split_whitespace()
        .map(page_id)
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|m| line.error(m))?;

    Ok(Some(AdjacencyRecord { source, targets }))
}

/// Parses a `<pageId> <count>` record separated by any whitespace.
///
/// Accepts both the tab-separated intermediate format and space-separated
/// top-N output. Blank lines yield `None`.
///
/// # Errors
/// Returns `LinkFlipError::Parse` unless the line has exactly two numeric fields.
pub fn counted(line: &SourceLine) -> Result<Option<CountedPage>> {
    let mut fields = line.text.split_whitespace();
    let (Some(page), count, extra) = (fields.next(), fields.next(), fields.next()) else {
        return Ok(None);
    };
    let (Some(count), None) = (count, extra) else {
        return Err(line.error("expected '<pageId> <count>'"));
    };

    let page = page_id(page).map_err(|m| line.error(m))?;
    let inbound = link_count(count).map_err(|m| line.error(m))?;
    Ok(Some(CountedPage { page, inbound }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> SourceLine {
        SourceLine::new(Arc::from(Path::new("part-0")), 7, text)
    }

    #[test]
    fn test_adjacency_with_targets() {
        let rec = adjacency(&line("  12: 3 4  4 ")).unwrap().unwrap();
        assert_eq!(rec.source, 12);
        assert_eq!(rec.targets, vec![3, 4, 4]);
    }

    #[test]
    fn test_adjacency_empty_targets() {
        let rec = adjacency(&line("3:")).unwrap().unwrap();
        assert_eq!(rec.source, 3);
        assert!(rec.targets.is_empty());
    }

    #[test]
    fn test_adjacency_rejects_bad_token() {
        let err = adjacency(&line("1: 2 x3")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("part-0:7"), "{msg}");
        assert!(msg.contains("x3"), "{msg}");
    }

    #[test]
    fn test_adjacency_rejects_missing_colon() {
        assert!(adjacency(&line("1 2 3")).is_err());
    }

    #[test]
    fn test_adjacency_rejects_negative_id() {
        assert!(adjacency(&line("-1: 2")).is_err());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert!(adjacency(&line("   ")).unwrap().is_none());
        assert!(counted(&line("")).unwrap().is_none());
    }

    #[test]
    fn test_counted_accepts_tab_and_space() {
        assert_eq!(counted(&line("5\t9")).unwrap(), Some(CountedPage::new(5, 9)));
        assert_eq!(counted(&line("5 9")).unwrap(), Some(CountedPage::new(5, 9)));
    }

    #[test]
    fn test_counted_rejects_wrong_arity() {
        assert!(counted(&line("5")).is_err());
        assert!(counted(&line("5 9 1")).is_err());
    }
}
