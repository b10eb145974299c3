//! Analysis configuration
//!
//! Values come from defaults, optionally overlaid by a YAML file, then by
//! command-line flags.

use crate::error::{LinkRankError, LinkRankResult};
use linkrank_algorithms::{validate_damping, IterationConfig, RankError, SamplingConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings shared by both estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Probability of following a link rather than teleporting
    pub damping_factor: f64,
    /// Sample sequence length for the Monte-Carlo estimator
    pub samples: usize,
    /// Fixed seed for reproducible sampling
    pub seed: Option<u64>,
    /// Per-page change below which the iterative estimator stops
    pub tolerance: f64,
    /// Round cap for the iterative estimator
    pub max_rounds: usize,
    /// Fail the analysis instead of reporting best-effort ranks when the cap is hit
    pub require_convergence: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            damping_factor: 0.85,
            samples: 10_000,
            seed: None,
            tolerance: 0.001,
            max_rounds: 10_000,
            require_convergence: false,
        }
    }
}

impl AnalysisConfig {
    /// Parse a YAML document. Missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> LinkRankResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a YAML configuration file
    pub fn load(path: impl AsRef<Path>) -> LinkRankResult<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Reject settings the estimators would refuse, before any work starts
    pub fn validate(&self) -> LinkRankResult<()> {
        validate_damping(self.damping_factor)?;
        if self.samples == 0 {
            return invalid("samples must be at least 1".to_string());
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return invalid(format!("tolerance must be positive, got {}", self.tolerance));
        }
        if self.max_rounds == 0 {
            return invalid("max rounds must be at least 1".to_string());
        }
        Ok(())
    }

    /// Sampler settings
    pub fn sampling(&self) -> SamplingConfig {
        SamplingConfig {
            damping_factor: self.damping_factor,
            sample_count: self.samples,
            seed: self.seed,
        }
    }

    pub fn iteration(&self) -> IterationConfig {
        IterationConfig {
            damping_factor: self.damping_factor,
            tolerance: self.tolerance,
            max_rounds: self.max_rounds,
        }
    }
}

fn invalid(msg: String) -> LinkRankResult<()> {
    Err(LinkRankError::Rank(RankError::InvalidInput(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.damping_factor, 0.85);
        assert_eq!(config.samples, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AnalysisConfig::from_yaml_str("samples: 500\nseed: 7\n").unwrap();
        assert_eq!(config.samples, 500);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.damping_factor, 0.85);
        assert_eq!(config.max_rounds, 10_000);
    }

    #[test]
    fn test_bad_yaml() {
        let result = AnalysisConfig::from_yaml_str("samples: [not, a, number]");
        assert!(matches!(result, Err(LinkRankError::Config(_))));
    }

    #[test]
    fn test_validation() {
        let config = AnalysisConfig {
            damping_factor: 1.2,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AnalysisConfig {
            samples: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_damping_rejected_like_the_estimators() {
        let config = AnalysisConfig {
            damping_factor: f64::NAN,
            ..Default::default()
        };
        match config.validate() {
            Err(LinkRankError::Rank(RankError::InvalidInput(msg))) => {
                assert!(msg.contains("damping factor must lie in (0, 1)"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_projection() {
        let config = AnalysisConfig {
            damping_factor: 0.5,
            samples: 42,
            seed: Some(1),
            tolerance: 0.01,
            max_rounds: 9,
            require_convergence: true,
        };

        let sampling = config.sampling();
        assert_eq!(sampling.sample_count, 42);
        assert_eq!(sampling.seed, Some(1));

        let iteration = config.iteration();
        assert_eq!(iteration.max_rounds, 9);
        assert_eq!(iteration.tolerance, 0.01);
    }
}
