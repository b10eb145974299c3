//! LinkRank
//!
//! Estimates the relative importance of pages in a small web-page corpus using the
//! PageRank model. Two independent estimators run on the same link graph:
//!
//! - a Monte-Carlo random surfer that counts page visits
//! - an iterative solver that repeats the PageRank recurrence until every rank settles
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{analyze, AnalysisConfig, LinkGraph};
//!
//! let graph = LinkGraph::try_from_links(vec![
//!     ("a.html", vec!["b.html"]),
//!     ("b.html", vec!["a.html"]),
//! ]).unwrap();
//!
//! let config = AnalysisConfig { seed: Some(7), ..Default::default() };
//! let report = analyze(&graph, &config).unwrap();
//!
//! assert_eq!(report.rows().len(), 2);
//! assert!(report.converged);
//! ```

pub mod analysis;
pub mod config;
pub mod corpus;
pub mod error;
pub mod report;

pub use analysis::analyze;
pub use config::AnalysisConfig;
pub use corpus::{crawl, extract_links};
pub use error::{LinkRankError, LinkRankResult};
pub use report::{RankReport, RankRow};

// Re-export the estimators
pub use linkrank_algorithms::{
    iterate_pagerank, run_iteration, run_sampler, sample_pagerank, sample_pagerank_with_rng,
    transition_model, IterationConfig, IterationOutcome, LinkGraph, PageId,
    ProbabilityDistribution, RankError, RankMapping, SamplingConfig, SamplingOutcome,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
