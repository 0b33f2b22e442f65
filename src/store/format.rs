// src/store/format.rs
//! Text encodings of pipeline results.

use std::io::{self, Write};

use crate::types::{CountedPage, PageId, RankedPage};

/// Intermediate counts: `<pageId>\t<inboundCount>`.
///
/// # Errors
/// Propagates write failures.
pub fn write_counts(out: &mut dyn Write, pages: &[CountedPage]) -> io::Result<()> {
    for p in pages {
        writeln!(out, "{}\t{}", p.page, p.inbound)?;
    }
    Ok(())
}

/// Orphan output: one `<pageId>` per line.
///
/// # Errors
/// Propagates write failures.
pub fn write_orphans(out: &mut dyn Write, pages: &[PageId]) -> io::Result<()> {
    for p in pages {
        writeln!(out, "{p}")?;
    }
    Ok(())
}

/// Top-N output: `<pageId> <count>`.
///
/// # Errors
/// Propagates write failures.
pub fn write_top(out: &mut dyn Write, pages: &[CountedPage]) -> io::Result<()> {
    for p in pages {
        writeln!(out, "{} {}", p.page, p.inbound)?;
    }
    Ok(())
}

/// League output: `<pageId> <rank>`.
///
/// # Errors
/// Propagates write failures.
pub fn write_ranks(out: &mut dyn Write, ranked: &[RankedPage]) -> io::Result<()> {
    for r in ranked {
        writeln!(out, "{} {}", r.page, r.rank)?;
    }
    Ok(())
}
