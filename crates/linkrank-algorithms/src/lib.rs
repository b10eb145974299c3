//! PageRank estimators for small, fully materialised link graphs.
//!
//! Two independent estimators are provided:
//! - [`sample_pagerank`]: a Monte-Carlo random surfer driven by [`transition_model`]
//! - [`iterate_pagerank`]: a synchronous fixed-point solver

pub mod common;
pub mod error;
pub mod pagerank;
pub mod sampling;
pub mod transition;

pub use common::{validate_damping, LinkGraph, PageId, ProbabilityDistribution, RankMapping};
pub use error::{RankError, RankResult};
pub use pagerank::{iterate_pagerank, run_iteration, IterationConfig, IterationOutcome};
pub use sampling::{run_sampler, sample_pagerank, sample_pagerank_with_rng, SamplingConfig, SamplingOutcome};
pub use transition::transition_model;
