//! LinkRank Core Library
//!
//! PageRank estimation over small, closed hyperlink graphs crawled from
//! local HTML corpora.
//!
//! # Features
//! - HTML corpus crawling with anchor-tag link extraction
//! - Random-surfer transition model with dangling-page normalization
//! - Monte-Carlo PageRank estimation with injectable random source
//! - Deterministic fixed-point PageRank iteration

pub mod corpus;
pub mod error;
pub mod rank;

pub use corpus::{crawl, crawl_with_options, Corpus, ScanOptions};
pub use error::{Error, LinkRankError, Result};
pub use rank::{
    iterate_pagerank, sample_pagerank, sample_pagerank_with_rng, transition_model, RankMap,
    CONVERGENCE_THRESHOLD,
};

/// Default probability of following an outbound link rather than
/// teleporting
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Default number of random-surfer samples
pub const DEFAULT_SAMPLES: usize = 10_000;
