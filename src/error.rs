//! Error types for corpus loading and rank analysis

use linkrank_algorithms::RankError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a corpus or analysing it
#[derive(Error, Debug)]
pub enum LinkRankError {
    /// Rank computation rejected its input or failed to converge
    #[error(transparent)]
    Rank(#[from] RankError),

    /// Corpus path is unusable
    #[error("Corpus error: {path}: {reason}")]
    Corpus { path: PathBuf, reason: String },

    /// Configuration file could not be parsed
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LinkRankResult<T> = Result<T, LinkRankError>;
