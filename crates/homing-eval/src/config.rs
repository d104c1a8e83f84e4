//! Evaluator configuration and validation.
//!
//! [`EvalConfig`] is the builder-input for [`DisplacementEvaluator`](crate::DisplacementEvaluator).
//! [`validate()`](EvalConfig::validate) checks its invariants once at
//! construction so evaluation itself never has to.

use homing_core::DirectivePolicy;
use thiserror::Error;

/// Upper bound on explicitly configured fold threads.
pub const MAX_WORKERS: usize = 64;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EvalConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `workers` was `Some(0)`.
    #[error("workers must be at least 1")]
    ZeroWorkers,
    /// `workers` exceeds [`MAX_WORKERS`].
    #[error("workers {configured} exceeds maximum of {max}")]
    TooManyWorkers {
        /// The configured worker count.
        configured: usize,
        /// The maximum allowed.
        max: usize,
    },
    /// `parallel_threshold` was zero.
    #[error("parallel_threshold must be at least 1")]
    ZeroParallelThreshold,
}

// ── EvalConfig ─────────────────────────────────────────────────────

/// Configuration for a [`DisplacementEvaluator`](crate::DisplacementEvaluator).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Treatment of characters outside the directive alphabet.
    /// Default: [`DirectivePolicy::Lenient`].
    pub policy: DirectivePolicy,
    /// Number of fold threads. `Some(1)` folds on the calling thread;
    /// `None` = auto-detect (`available_parallelism`, clamped to `[1, 16]`).
    /// Default: `Some(1)`.
    pub workers: Option<usize>,
    /// Sequences shorter than this many characters are always folded
    /// sequentially. Default: 4096.
    pub parallel_threshold: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            policy: DirectivePolicy::Lenient,
            workers: Some(1),
            parallel_threshold: 4096,
        }
    }
}

impl EvalConfig {
    /// A default configuration with [`DirectivePolicy::Strict`].
    pub fn strict() -> Self {
        Self {
            policy: DirectivePolicy::Strict,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.workers {
            Some(0) => return Err(ConfigError::ZeroWorkers),
            Some(n) if n > MAX_WORKERS => {
                return Err(ConfigError::TooManyWorkers {
                    configured: n,
                    max: MAX_WORKERS,
                })
            }
            _ => {}
        }
        if self.parallel_threshold == 0 {
            return Err(ConfigError::ZeroParallelThreshold);
        }
        Ok(())
    }

    /// Resolve the actual worker count, applying auto-detection if `None`.
    pub fn resolved_workers(&self) -> usize {
        match self.workers {
            Some(n) => n.clamp(1, MAX_WORKERS),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
                .clamp(1, 16),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = EvalConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.policy, DirectivePolicy::Lenient);
        assert_eq!(cfg.resolved_workers(), 1);
    }

    #[test]
    fn strict_preset() {
        let cfg = EvalConfig::strict();
        assert_eq!(cfg.policy, DirectivePolicy::Strict);
        assert_eq!(cfg.workers, Some(1));
    }

    #[test]
    fn zero_workers_rejected() {
        let cfg = EvalConfig {
            workers: Some(0),
            ..EvalConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroWorkers));
    }

    #[test]
    fn too_many_workers_rejected() {
        let cfg = EvalConfig {
            workers: Some(MAX_WORKERS + 1),
            ..EvalConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyWorkers {
                configured: MAX_WORKERS + 1,
                max: MAX_WORKERS,
            })
        );
    }

    #[test]
    fn zero_threshold_rejected() {
        let cfg = EvalConfig {
            parallel_threshold: 0,
            ..EvalConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroParallelThreshold));
    }

    #[test]
    fn auto_workers_in_range() {
        let cfg = EvalConfig {
            workers: None,
            ..EvalConfig::default()
        };
        assert!(cfg.validate().is_ok());
        let n = cfg.resolved_workers();
        assert!((1..=16).contains(&n));
    }
}
