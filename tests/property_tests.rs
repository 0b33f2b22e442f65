//! Property-based tests using proptest

use std::collections::{BTreeMap, BTreeSet};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::Arc;

use linkflip_core::exec::LocalExecutor;
use linkflip_core::flip::{LinkFlipCounter, OrphanFilter};
use linkflip_core::parse::SourceLine;
use linkflip_core::select::{LeagueRankAssigner, LeagueSet, TopKSelector};
use linkflip_core::types::CountedPage;
use proptest::prelude::*;

type Graph = Vec<(u64, Vec<u64>)>;

fn graph_strategy() -> impl Strategy<Value = Graph> {
    prop::collection::vec((0u64..40, prop::collection::vec(0u64..40, 0..6)), 0..30)
}

fn render(graph: &Graph) -> Vec<SourceLine> {
    let origin: Arc<Path> = Arc::from(Path::new("generated"));
    graph
        .iter()
        .enumerate()
        .map(|(i, (src, targets))| {
            let targets: Vec<String> = targets.iter().map(ToString::to_string).collect();
            SourceLine::new(Arc::clone(&origin), i + 1, format!("{src}: {}", targets.join(" ")))
        })
        .collect()
}

fn baseline(graph: &Graph) -> BTreeMap<u64, u64> {
    let mut counts = BTreeMap::new();
    for (src, targets) in graph {
        counts.entry(*src).or_insert(0);
        for t in targets {
            *counts.entry(*t).or_insert(0) += 1;
        }
    }
    counts
}

fn counted(graph: &Graph, partitions: usize) -> Vec<CountedPage> {
    LocalExecutor::new(partitions)
        .run_keyed(&LinkFlipCounter::counts(), &render(graph))
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_counts_match_baseline(graph in graph_strategy(), partitions in 1usize..6) {
        let expected = baseline(&graph);
        let counts = counted(&graph, partitions);

        prop_assert_eq!(counts.len(), expected.len());
        for page in &counts {
            prop_assert_eq!(Some(&page.inbound), expected.get(&page.page));
        }
    }

    #[test]
    fn test_orphans_are_exactly_zero_counts(graph in graph_strategy(), partitions in 1usize..6) {
        let expected: Vec<u64> = baseline(&graph)
            .into_iter()
            .filter(|&(_, c)| c == 0)
            .map(|(p, _)| p)
            .collect();
        let orphans = LocalExecutor::new(partitions)
            .run_keyed(&LinkFlipCounter::new(OrphanFilter), &render(&graph))
            .unwrap();
        prop_assert_eq!(orphans, expected);
    }

    #[test]
    fn test_top_k_matches_full_sort(
        graph in graph_strategy(),
        k in 1usize..8,
        partitions in 1usize..6,
    ) {
        let pages = counted(&graph, partitions);
        let sel = TopKSelector::new(NonZeroUsize::new(k).unwrap());
        let exec = LocalExecutor::new(partitions);
        let locals = exec
            .split(&pages)
            .into_iter()
            .map(|part| sel.local_pages(part.iter().copied()).unwrap())
            .collect();
        let top = sel.merge_lists(locals).unwrap();

        let mut sorted: Vec<(u64, u64)> = pages.iter().map(|p| (p.inbound, p.page)).collect();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.truncate(k);

        prop_assert_eq!(top.len(), k.min(pages.len()));
        for pair in top.windows(2) {
            prop_assert!((pair[0].inbound, pair[0].page) > (pair[1].inbound, pair[1].page));
        }
        let got: Vec<(u64, u64)> = top.iter().map(|p| (p.inbound, p.page)).collect();
        prop_assert_eq!(got, sorted);
    }

    #[test]
    fn test_league_ranks_follow_counts(graph in graph_strategy(), pick in 1usize..10) {
        let pages = counted(&graph, 2);
        prop_assume!(!pages.is_empty());
        let league: LeagueSet = pages.iter().step_by(pick).map(|p| p.page).collect();
        let ranked = LeagueRankAssigner::new(league.clone()).rank(&pages).unwrap();

        prop_assert_eq!(ranked.len(), league.len());
        prop_assert_eq!(ranked.iter().map(|r| r.rank).min(), Some(0));
        for a in &ranked {
            let greater = ranked.iter().filter(|b| b.count > a.count).count();
            prop_assert_eq!(a.rank, greater);
            for b in &ranked {
                if a.count > b.count {
                    prop_assert!(a.rank < b.rank);
                }
                if a.count == b.count {
                    prop_assert_eq!(a.rank, b.rank);
                }
            }
        }
        let members: BTreeSet<u64> = ranked.iter().map(|r| r.page).collect();
        prop_assert_eq!(members.len(), ranked.len());
    }
}
