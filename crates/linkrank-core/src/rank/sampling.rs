//! Monte-Carlo PageRank estimation

use super::transition::{transition_model, validate_damping, validate_non_empty};
use super::RankMap;
use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use rand::Rng;
use std::collections::HashMap;

/// Estimate PageRank by simulating a random surfer for `samples` steps.
///
/// Uses the thread-local RNG; see [`sample_pagerank_with_rng`] for a
/// seeded variant.
pub fn sample_pagerank(corpus: &Corpus, damping: f64, samples: usize) -> Result<RankMap> {
    sample_pagerank_with_rng(corpus, damping, samples, &mut rand::rng())
}

/// Estimate PageRank with a caller-supplied random source.
///
/// The first page is drawn uniformly; each subsequent page is drawn from
/// the transition model of the current page. Every visit increments the
/// page's counter, so the returned ranks are visit frequencies and sum
/// to exactly 1. Pages are walked in sorted order internally, so a
/// seeded RNG reproduces the same walk run to run.
pub fn sample_pagerank_with_rng<R: Rng>(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankMap> {
    validate_damping(damping)?;
    validate_non_empty(corpus)?;
    if samples == 0 {
        return Err(LinkRankError::InvalidInput(
            "sample count must be at least 1".to_string(),
        ));
    }

    let mut pages: Vec<&str> = corpus.pages().collect();
    pages.sort_unstable();

    let mut visits: HashMap<&str, usize> = pages.iter().map(|&p| (p, 0)).collect();

    let mut current = pages[rng.random_range(0..pages.len())];
    *visits.entry(current).or_insert(0) += 1;

    for _ in 1..samples {
        let dist = transition_model(corpus, current, damping)?;
        let weights: Vec<f64> = pages
            .iter()
            .map(|&p| dist.get(p).copied().unwrap_or(0.0))
            .collect();

        current = pages[weighted_choice(&weights, rng)];
        *visits.entry(current).or_insert(0) += 1;
    }

    let total = samples as f64;
    Ok(pages
        .iter()
        .map(|&p| (p.to_string(), visits[p] as f64 / total))
        .collect())
}

/// Pick an index with probability proportional to its weight.
fn weighted_choice(weights: &[f64], rng: &mut impl Rng) -> usize {
    let total: f64 = weights.iter().sum();
    let mut r = rng.random::<f64>() * total;
    for (i, &w) in weights.iter().enumerate() {
        r -= w;
        if r < 1e-10 {
            return i;
        }
    }
    weights.len() - 1
}
