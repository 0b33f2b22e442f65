// tests/unit_select.rs
//! Bounded top-K selection and league ranking.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use linkflip_core::error::LinkFlipError;
use linkflip_core::exec::PartitionJob;
use linkflip_core::parse::SourceLine;
use linkflip_core::select::league::assign_ranks;
use linkflip_core::select::{LeagueRankAssigner, LeagueSet, RankList, TopKSelector};
use linkflip_core::types::{CountedPage, RankedPage};

fn k(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn pages(pairs: &[(u64, u64)]) -> Vec<CountedPage> {
    pairs.iter().map(|&(p, c)| CountedPage::new(p, c)).collect()
}

fn rank_of(ranked: &[RankedPage], page: u64) -> usize {
    ranked.iter().find(|r| r.page == page).unwrap().rank
}

#[test]
fn test_top_two_of_small_graph() {
    let sel = TopKSelector::new(k(2));
    let local = sel.local_pages(pages(&[(1, 0), (2, 1), (3, 2)])).unwrap();
    let top = sel.merge_lists(vec![local]).unwrap();
    assert_eq!(top, pages(&[(3, 2), (2, 1)]));
}

#[test]
fn test_top_k_ties_descend_by_page() {
    let sel = TopKSelector::new(k(3));
    let local = sel
        .local_pages(pages(&[(4, 5), (9, 5), (1, 5), (7, 2)]))
        .unwrap();
    let top = sel.merge_lists(vec![local]).unwrap();
    assert_eq!(top, pages(&[(9, 5), (4, 5), (1, 5)]));
}

#[test]
fn test_top_k_fewer_pages_than_k() {
    let sel = TopKSelector::new(k(10));
    let local = sel.local_pages(pages(&[(1, 3), (2, 8)])).unwrap();
    let top = sel.merge_lists(vec![local]).unwrap();
    assert_eq!(top, pages(&[(2, 8), (1, 3)]));
}

#[test]
fn test_merge_across_partitions() {
    let sel = TopKSelector::new(k(2));
    let a = sel.local_pages(pages(&[(1, 10), (2, 1), (3, 4)])).unwrap();
    let b = sel.local_pages(pages(&[(4, 7), (5, 9)])).unwrap();
    assert!(a.len() <= 2 && b.len() <= 2);
    let top = sel.merge_lists(vec![a, b]).unwrap();
    assert_eq!(top, pages(&[(1, 10), (5, 9)]));
}

#[test]
fn test_league_small_graph() {
    let assigner = LeagueRankAssigner::new([1, 2, 3].into_iter().collect());
    let ranked = assigner.rank(&pages(&[(1, 0), (2, 1), (3, 2)])).unwrap();
    assert_eq!(rank_of(&ranked, 3), 0);
    assert_eq!(rank_of(&ranked, 2), 1);
    assert_eq!(rank_of(&ranked, 1), 2);
}

// Ranks count strictly-greater peers: a tie at the top is 0, 0 and the next
// page is 2, not 1.
#[test]
fn test_league_ties_share_rank_and_skip() {
    let assigner = LeagueRankAssigner::new([10, 11, 12].into_iter().collect());
    let ranked = assigner
        .rank(&pages(&[(10, 5), (11, 5), (12, 3)]))
        .unwrap();
    assert_eq!(rank_of(&ranked, 10), 0);
    assert_eq!(rank_of(&ranked, 11), 0);
    assert_eq!(rank_of(&ranked, 12), 2);
}

#[test]
fn test_league_is_not_a_sequential_position() {
    let assigner = LeagueRankAssigner::new([1, 2, 3, 4].into_iter().collect());
    let ranked = assigner
        .rank(&pages(&[(1, 9), (2, 4), (3, 4), (4, 4)]))
        .unwrap();
    let ranks: Vec<usize> = ranked.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![0, 1, 1, 1]);
}

#[test]
fn test_league_ignores_non_members() {
    let assigner = LeagueRankAssigner::new([2, 3].into_iter().collect());
    let ranked = assigner
        .rank(&pages(&[(1, 100), (2, 1), (3, 2)]))
        .unwrap();
    assert_eq!(ranked.len(), 2);
    assert_eq!(rank_of(&ranked, 3), 0);
    assert_eq!(rank_of(&ranked, 2), 1);
}

#[test]
fn test_league_member_missing_from_graph() {
    let assigner = LeagueRankAssigner::new([1, 99].into_iter().collect());
    let err = assigner.rank(&pages(&[(1, 0)])).unwrap_err();
    assert!(matches!(err, LinkFlipError::MissingLeaguePage(99)));
}

#[test]
fn test_assign_ranks_empty() {
    assert!(assign_ranks(&RankList::unbounded()).is_empty());
}

#[test]
fn test_league_parse_trims_and_skips_blanks() {
    let league = LeagueSet::parse(" 5\n\n7 \n5\n", Path::new("league.txt")).unwrap();
    assert_eq!(league.iter().collect::<Vec<_>>(), vec![5, 7]);
}

#[test]
fn test_league_parse_rejects_garbage() {
    let err = LeagueSet::parse("5\nabc\n", Path::new("league.txt")).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("league.txt:2"));
}

#[test]
fn test_league_load_missing_file_is_config_error() {
    let d = tempfile::tempdir().unwrap();
    let err = LeagueSet::load(&d.path().join("nope.txt")).unwrap_err();
    assert!(err.is_config());
}

#[test]
fn test_local_phase_keeps_at_most_k_per_partition() {
    let origin: Arc<Path> = Arc::from(Path::new("counts"));
    let partition: Vec<SourceLine> = (0..50)
        .map(|i| SourceLine::new(Arc::clone(&origin), i + 1, format!("{i}\t{}", i % 9)))
        .collect();

    let sel = TopKSelector::new(k(3));
    let local = sel.local(&partition).unwrap();
    assert_eq!(local.len(), 3);
    assert_eq!(local.capacity(), Some(3));

    let top = sel.merge(vec![local]).unwrap();
    assert_eq!(top, pages(&[(44, 8), (35, 8), (26, 8)]));
}
