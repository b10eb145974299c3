//! Rank report
//!
//! Pairs the two estimators' rank mappings for display.

use linkrank_algorithms::{IterationConfig, RankMapping, SamplingConfig};
use serde::Serialize;
use std::fmt;

/// Results of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct RankReport {
    /// Sampler settings the ranks were produced with, seed included
    pub sampling: SamplingConfig,
    pub iteration: IterationConfig,
    /// Ranks from random-surfer sampling
    pub sampled: RankMapping,
    /// Ranks from the iterative solver
    pub iterated: RankMapping,
    /// Solver rounds executed
    pub rounds: usize,
    /// Whether the solver settled within its round cap
    pub converged: bool,
}

/// One page's ranks from both estimators
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankRow {
    pub page: String,
    pub sampled: f64,
    pub iterated: f64,
}

impl RankReport {
    /// One row per page, sorted by page name
    pub fn rows(&self) -> Vec<RankRow> {
        self.sampled
            .iter()
            .map(|(page, &sampled)| RankRow {
                page: page.clone(),
                sampled,
                iterated: self.iterated.get(page).copied().unwrap_or(0.0),
            })
            .collect()
    }

    /// Pretty-printed JSON document of the whole report
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for RankReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PageRank Results from Sampling (n = {})", self.sampling.sample_count)?;
        for (page, rank) in &self.sampled {
            writeln!(f, "  {}: {:.4}", page, rank)?;
        }
        writeln!(f, "PageRank Results from Iteration")?;
        for (page, rank) in &self.iterated {
            writeln!(f, "  {}: {:.4}", page, rank)?;
        }
        Ok(())
    }
}
