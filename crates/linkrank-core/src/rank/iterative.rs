//! Fixed-point PageRank iteration

use super::transition::{validate_damping, validate_non_empty};
use super::RankMap;
use crate::corpus::Corpus;
use crate::error::Result;
use std::collections::HashMap;

/// Iteration stops once no page's rank moved by more than this between
/// successive rounds.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Compute PageRank as the fixed point of
/// `PR(p) = (1-d)/N + d * sum over i linking to p of PR(i)/L(i)`,
/// where dangling pages contribute `PR(i)/N` to every page.
///
/// Each round builds a completely new rank mapping from the previous one;
/// the synchronous update is required for order-independent convergence.
/// The result is re-normalized so the values sum to 1 despite
/// floating-point drift. Deterministic for a given corpus and damping.
///
/// Convergence is guaranteed for `damping < 1`; with `damping == 1.0`
/// on a periodic graph the iteration may oscillate indefinitely.
pub fn iterate_pagerank(corpus: &Corpus, damping: f64) -> Result<RankMap> {
    validate_damping(damping)?;
    validate_non_empty(corpus)?;

    let n = corpus.page_count() as f64;
    let teleport = (1.0 - damping) / n;

    let mut ranks: RankMap = corpus.pages().map(|p| (p.to_string(), 1.0 / n)).collect();
    let mut rounds = 0usize;

    loop {
        let mut next: RankMap = HashMap::with_capacity(corpus.page_count());
        let mut max_delta: f64 = 0.0;

        for page in corpus.pages() {
            let mut rank = teleport;

            // Each source page either spreads its rank across its links
            // or, when dangling, across the whole corpus.
            for source in corpus.pages() {
                let source_rank = ranks.get(source).copied().unwrap_or(0.0);
                let out = corpus.out_degree(source);

                if out == 0 {
                    rank += damping * source_rank / n;
                } else if corpus.links(source).is_some_and(|l| l.contains(page)) {
                    rank += damping * source_rank / out as f64;
                }
            }

            let old = ranks.get(page).copied().unwrap_or(0.0);
            max_delta = max_delta.max((rank - old).abs());
            next.insert(page.to_string(), rank);
        }

        ranks = next;
        rounds += 1;

        if max_delta < CONVERGENCE_THRESHOLD {
            break;
        }
    }

    tracing::debug!("PageRank converged after {} rounds", rounds);

    let total: f64 = ranks.values().sum();
    for rank in ranks.values_mut() {
        *rank /= total;
    }

    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::error::LinkRankError;
    use std::collections::{HashMap, HashSet};

    fn corpus_of(entries: &[(&str, &[&str])]) -> Corpus {
        let raw: HashMap<String, HashSet<String>> = entries
            .iter()
            .map(|(page, targets)| {
                (
                    page.to_string(),
                    targets.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        Corpus::from_links(raw)
    }

    #[test]
    fn test_two_page_cycle_splits_evenly() {
        let corpus = corpus_of(&[("x.html", &["y.html"]), ("y.html", &["x.html"])]);

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        assert!((ranks["x.html"] - 0.5).abs() < 0.01);
        assert!((ranks["y.html"] - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_mutually_dangling_pages_split_evenly() {
        let corpus = corpus_of(&[("x.html", &[]), ("y.html", &[])]);

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        assert!((ranks["x.html"] - 0.5).abs() < 0.01);
        assert!((ranks["y.html"] - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_hub_outranks_spokes() {
        let corpus = corpus_of(&[
            ("x.html", &["y.html", "z.html"]),
            ("y.html", &["x.html"]),
            ("z.html", &["x.html"]),
        ]);

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        assert!(ranks["x.html"] > ranks["y.html"]);
        assert!(ranks["x.html"] > ranks["z.html"]);
    }

    #[test]
    fn test_ranks_sum_to_one_and_are_non_negative() {
        let corpus = corpus_of(&[
            ("a.html", &["b.html", "c.html"]),
            ("b.html", &["c.html"]),
            ("c.html", &[]),
            ("d.html", &["a.html"]),
        ]);

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        let total: f64 = ranks.values().sum();
        assert!((total - 1.0).abs() < 1e-6);
        assert!(ranks.values().all(|&r| r >= 0.0));
        assert_eq!(ranks.len(), 4);
    }

    #[test]
    fn test_deterministic_across_runs() {
        let corpus = corpus_of(&[
            ("a.html", &["b.html"]),
            ("b.html", &["c.html"]),
            ("c.html", &["a.html", "b.html"]),
        ]);

        let first = iterate_pagerank(&corpus, 0.85).unwrap();
        let second = iterate_pagerank(&corpus, 0.85).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_page_corpus() {
        let corpus = corpus_of(&[("only.html", &[])]);

        let ranks = iterate_pagerank(&corpus, 0.85).unwrap();
        assert!((ranks["only.html"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_damping_is_uniform() {
        let corpus = corpus_of(&[
            ("a.html", &["b.html"]),
            ("b.html", &[]),
            ("c.html", &["a.html"]),
        ]);

        let ranks = iterate_pagerank(&corpus, 0.0).unwrap();
        for (_, rank) in ranks {
            assert!((rank - 1.0 / 3.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_empty_corpus_rejected() {
        let corpus = Corpus::from_links(HashMap::new());
        let err = iterate_pagerank(&corpus, 0.85).unwrap_err();
        assert!(matches!(err, LinkRankError::InvalidInput(_)));
    }

    #[test]
    fn test_out_of_range_damping_rejected() {
        let corpus = corpus_of(&[("a.html", &[])]);
        assert!(iterate_pagerank(&corpus, -0.5).is_err());
        assert!(iterate_pagerank(&corpus, 2.0).is_err());
    }
}
