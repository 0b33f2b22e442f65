//! Inbound-link aggregation over web adjacency lists.
//!
//! One counting pass flips outbound links into inbound counts; a second pass
//! filters orphans, selects the top N pages, or ranks a league of pages.

pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod exit;
pub mod flip;
pub mod logging;
pub mod pair;
pub mod parse;
pub mod pipeline;
pub mod select;
pub mod store;
pub mod types;
