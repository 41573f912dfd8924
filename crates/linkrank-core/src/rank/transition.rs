//! Random-surfer transition model

use super::RankMap;
use crate::corpus::Corpus;
use crate::error::{LinkRankError, Result};
use std::collections::HashMap;

pub(super) fn validate_damping(damping: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&damping) {
        return Err(LinkRankError::InvalidInput(format!(
            "damping factor must be in [0, 1], got {damping}"
        )));
    }
    Ok(())
}

pub(super) fn validate_non_empty(corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(LinkRankError::InvalidInput("corpus is empty".to_string()));
    }
    Ok(())
}

/// Probability distribution over which page a random surfer visits next.
///
/// With probability `damping` the surfer follows one of the current
/// page's outbound links; with probability `1 - damping` it teleports to
/// a page chosen uniformly from the whole corpus. A page that is both a
/// link target and a teleport destination receives both shares. Dangling
/// pages are treated as linking to every page, which collapses to the
/// uniform distribution `1/N`.
///
/// Every corpus page appears in the returned map, zero-probability pages
/// included.
pub fn transition_model(corpus: &Corpus, page: &str, damping: f64) -> Result<RankMap> {
    validate_damping(damping)?;
    validate_non_empty(corpus)?;

    let links = corpus.links(page).ok_or_else(|| {
        LinkRankError::InvalidInput(format!("page not in corpus: {page}"))
    })?;

    let n = corpus.page_count() as f64;
    let mut dist: RankMap = HashMap::with_capacity(corpus.page_count());

    if links.is_empty() {
        let uniform = 1.0 / n;
        for p in corpus.pages() {
            dist.insert(p.to_string(), uniform);
        }
    } else {
        let teleport = (1.0 - damping) / n;
        let follow = damping / links.len() as f64;

        for p in corpus.pages() {
            dist.insert(p.to_string(), teleport);
        }
        for target in links {
            *dist.entry(target.clone()).or_insert(0.0) += follow;
        }
    }

    Ok(dist)
}
