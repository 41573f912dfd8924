//! Rank commands: crawl a corpus directory and run the estimators

use crate::app::{IterateArgs, OutputFormat, RankArgs, SampleArgs};
use crate::output::{self, RankReport};
use anyhow::Result;
use linkrank_core::{
    crawl, iterate_pagerank, sample_pagerank, sample_pagerank_with_rng, Corpus, RankMap,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Run both estimators and print both reports
pub fn run(args: RankArgs, format: OutputFormat) -> Result<()> {
    let corpus = crawl(&args.corpus)?;

    let sampled = run_sampler(&corpus, args.damping, args.samples, args.seed)?;
    let iterated = iterate_pagerank(&corpus, args.damping)?;

    let reports = vec![
        RankReport::sampling(args.damping, args.samples, sampled),
        RankReport::iteration(args.damping, iterated),
    ];
    print!("{}", output::format_reports(&reports, format));

    Ok(())
}

/// Monte-Carlo estimation only
pub fn run_sample(args: SampleArgs, format: OutputFormat) -> Result<()> {
    let corpus = crawl(&args.corpus)?;
    let sampled = run_sampler(&corpus, args.damping, args.samples, args.seed)?;

    let reports = vec![RankReport::sampling(args.damping, args.samples, sampled)];
    print!("{}", output::format_reports(&reports, format));

    Ok(())
}

/// Fixed-point iteration only
pub fn run_iterate(args: IterateArgs, format: OutputFormat) -> Result<()> {
    let corpus = crawl(&args.corpus)?;
    let iterated = iterate_pagerank(&corpus, args.damping)?;

    let reports = vec![RankReport::iteration(args.damping, iterated)];
    print!("{}", output::format_reports(&reports, format));

    Ok(())
}

fn run_sampler(
    corpus: &Corpus,
    damping: f64,
    samples: usize,
    seed: Option<u64>,
) -> linkrank_core::Result<RankMap> {
    match seed {
        Some(seed) => {
            let mut rng = SmallRng::seed_from_u64(seed);
            sample_pagerank_with_rng(corpus, damping, samples, &mut rng)
        }
        None => sample_pagerank(corpus, damping, samples),
    }
}
