//! PageRank estimators
//!
//! Two independent estimators over the same corpus and damping factor:
//! a Monte-Carlo random-surfer simulation and a deterministic
//! fixed-point iteration. They are expected to agree within a small
//! tolerance, not bit-for-bit.

mod iterative;
mod sampling;
mod transition;

pub use iterative::{iterate_pagerank, CONVERGENCE_THRESHOLD};
pub use sampling::{sample_pagerank, sample_pagerank_with_rng};
pub use transition::transition_model;

use std::collections::HashMap;

/// Page-to-rank mapping; values sum to 1.0 and every corpus page has an
/// entry. No key order is guaranteed.
pub type RankMap = HashMap<String, f64>;
