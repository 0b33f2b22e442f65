// src/select/mod.rs
//! Selection and ranking over counted pages.

pub mod league;
pub mod rank_list;
pub mod top_k;

pub use league::{LeagueRankAssigner, LeagueSet};
pub use rank_list::RankList;
pub use top_k::TopKSelector;
