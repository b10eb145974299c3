//! Error types for the PageRank estimators

use thiserror::Error;

/// Errors raised before or during a rank computation
#[derive(Error, Debug)]
pub enum RankError {
    /// Empty graph, out-of-range parameter, or unknown page
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An out-link references a page that is not part of the graph
    #[error("Malformed graph: page {page} links to unknown page {target}")]
    MalformedGraph { page: String, target: String },

    /// The solver hit its round cap before every page settled
    #[error("No convergence after {rounds} rounds (largest change {max_delta})")]
    NonConvergence { rounds: usize, max_delta: f64 },

    /// A transition distribution could not be sampled from
    #[error("Sampling error: {0}")]
    Sampling(#[from] rand::distributions::WeightedError),
}

pub type RankResult<T> = Result<T, RankError>;
