//! Corpus model and construction
//!
//! A corpus is a closed hyperlink graph: every link target is itself a
//! page of the corpus, and pages never link to themselves. Both
//! invariants are enforced at construction; afterwards the corpus is
//! read-only.

mod link_extractor;
mod scanner;

pub use link_extractor::extract_hrefs;
pub use scanner::{scan_pages, ScanOptions, ScanResult};

use crate::error::Result;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Immutable page-to-outbound-links mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    links: HashMap<String, HashSet<String>>,
}

impl Corpus {
    /// Build a corpus from a raw link map.
    ///
    /// Link targets that are not themselves pages of the map are
    /// dropped, as are self-links.
    pub fn from_links(raw: HashMap<String, HashSet<String>>) -> Self {
        let pages: HashSet<String> = raw.keys().cloned().collect();

        let links = raw
            .into_iter()
            .map(|(page, targets)| {
                let targets = targets
                    .into_iter()
                    .filter(|t| *t != page && pages.contains(t))
                    .collect();
                (page, targets)
            })
            .collect();

        Self { links }
    }

    /// Number of pages in the corpus
    pub fn page_count(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Whether a page is part of the corpus
    pub fn contains(&self, page: &str) -> bool {
        self.links.contains_key(page)
    }

    /// Iterate over all page identifiers (no guaranteed order)
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.links.keys().map(String::as_str)
    }

    /// Outbound links of a page, or None if the page is unknown
    pub fn links(&self, page: &str) -> Option<&HashSet<String>> {
        self.links.get(page)
    }

    /// Outbound link count of a page (0 for unknown pages)
    pub fn out_degree(&self, page: &str) -> usize {
        self.links.get(page).map(HashSet::len).unwrap_or(0)
    }

    /// Total number of links across all pages
    pub fn link_count(&self) -> usize {
        self.links.values().map(HashSet::len).sum()
    }
}

/// Crawl a directory of HTML pages into a corpus.
///
/// Each page file becomes a page keyed by its corpus-relative path; its
/// anchor hrefs become outbound links, restricted to other pages of the
/// corpus.
pub fn crawl(root: &Path) -> Result<Corpus> {
    crawl_with_options(root, &ScanOptions::default())
}

/// Crawl with explicit scan options
pub fn crawl_with_options(root: &Path, options: &ScanOptions) -> Result<Corpus> {
    let mut raw: HashMap<String, HashSet<String>> = HashMap::new();

    for page in scan_pages(root, options)? {
        let content = fs::read_to_string(&page.path)?;
        let targets: HashSet<String> = extract_hrefs(&content).into_iter().collect();
        raw.insert(page.relative_path, targets);
    }

    let corpus = Corpus::from_links(raw);
    tracing::info!(
        "Crawled {} pages with {} in-corpus links from {}",
        corpus.page_count(),
        corpus.link_count(),
        root.display()
    );

    Ok(corpus)
}
