//! Output formatters

pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::RankMap;
use serde::Serialize;
use std::collections::BTreeMap;

/// One estimator's finished report.
///
/// Ranks live in a `BTreeMap` so both formatters emit pages in sorted
/// order; the core makes no ordering guarantee.
#[derive(Debug, Serialize)]
pub struct RankReport {
    pub estimator: &'static str,
    pub damping: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    pub ranks: BTreeMap<String, f64>,
}

impl RankReport {
    pub fn sampling(damping: f64, samples: usize, ranks: RankMap) -> Self {
        Self {
            estimator: "sampling",
            damping,
            samples: Some(samples),
            ranks: ranks.into_iter().collect(),
        }
    }

    pub fn iteration(damping: f64, ranks: RankMap) -> Self {
        Self {
            estimator: "iteration",
            damping,
            samples: None,
            ranks: ranks.into_iter().collect(),
        }
    }

    pub fn title(&self) -> String {
        match self.samples {
            Some(n) => format!("PageRank Results from Sampling (n = {n})"),
            None => "PageRank Results from Iteration".to_string(),
        }
    }
}

/// Format estimator reports
pub fn format_reports(reports: &[RankReport], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_reports(reports),
        OutputFormat::Cli => terminal::format_reports(reports),
    }
}
