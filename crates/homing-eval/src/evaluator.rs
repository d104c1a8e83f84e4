//! The configured displacement evaluator.

use homing_core::{DirectivePolicy, Displacement, InvalidDirectiveError};

use crate::config::{ConfigError, EvalConfig};
use crate::fold::{fold_sequence, net_displacement};
use crate::observer::{DisplacementObserver, NoopObserver};
use crate::parallel::displacement_parallel;

/// Decides whether a directive sequence returns to the origin.
///
/// Holds only validated, immutable configuration: every call builds its
/// own accumulator, so one evaluator can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use homing_core::Displacement;
/// use homing_eval::{DisplacementEvaluator, EvalConfig};
///
/// let lenient = DisplacementEvaluator::default();
/// assert_eq!(lenient.evaluate("LRUDRLDU"), Ok(true));
/// assert_eq!(lenient.displacement("LRUDRLD"), Ok(Displacement::new(0, -1)));
///
/// let strict = DisplacementEvaluator::new(EvalConfig::strict()).unwrap();
/// let err = strict.evaluate("X").unwrap_err();
/// assert_eq!((err.character, err.index), ('X', 0));
/// ```
#[derive(Clone, Debug)]
pub struct DisplacementEvaluator {
    config: EvalConfig,
    workers: usize,
}

impl DisplacementEvaluator {
    /// Validate `config` and build an evaluator from it.
    pub fn new(config: EvalConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let workers = config.resolved_workers();
        Ok(Self { config, workers })
    }

    /// The policy for unknown characters.
    pub fn policy(&self) -> DirectivePolicy {
        self.config.policy
    }

    /// Effective number of fold threads.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns `Ok(true)` iff `sequence` returns to the origin.
    pub fn evaluate(&self, sequence: &str) -> Result<bool, InvalidDirectiveError> {
        self.displacement(sequence).map(Displacement::is_origin)
    }

    /// Net displacement of `sequence` under the configured policy.
    ///
    /// Only sequences of at least `parallel_threshold` characters are
    /// buffered for the threaded fold; shorter ones stream.
    pub fn displacement(&self, sequence: &str) -> Result<Displacement, InvalidDirectiveError> {
        // Byte length bounds the char count from above.
        if self.wants_parallel(Some(sequence.len()))
            && sequence.chars().count() >= self.config.parallel_threshold
        {
            let buffered: Vec<char> = sequence.chars().collect();
            return displacement_parallel(&buffered, self.workers, self.config.policy);
        }
        self.fold(sequence.chars())
    }

    /// Like [`evaluate`](Self::evaluate), for any character sequence.
    pub fn evaluate_chars<I>(&self, chars: I) -> Result<bool, InvalidDirectiveError>
    where
        I: IntoIterator<Item = char>,
    {
        self.displacement_chars(chars).map(Displacement::is_origin)
    }

    /// Like [`displacement`](Self::displacement), for any character sequence.
    ///
    /// Iterators whose `size_hint` upper bound is below `parallel_threshold`
    /// stream; others are buffered and dispatched by their actual length.
    pub fn displacement_chars<I>(&self, chars: I) -> Result<Displacement, InvalidDirectiveError>
    where
        I: IntoIterator<Item = char>,
    {
        let chars = chars.into_iter();
        if !self.wants_parallel(chars.size_hint().1) {
            return self.fold(chars);
        }
        let buffered: Vec<char> = chars.collect();
        if buffered.len() >= self.config.parallel_threshold {
            return displacement_parallel(&buffered, self.workers, self.config.policy);
        }
        self.fold(buffered)
    }

    /// Whether an input of at most `upper_bound` characters may take the
    /// threaded fold. `None` means unbounded.
    fn wants_parallel(&self, upper_bound: Option<usize>) -> bool {
        self.workers > 1 && upper_bound.is_none_or(|n| n >= self.config.parallel_threshold)
    }

    /// Evaluate sequentially, reporting every step to `observer`.
    ///
    /// Always folds on the calling thread regardless of `workers`, so the
    /// observer sees directives in sequence order. `on_complete` is only
    /// called when the fold succeeds.
    pub fn evaluate_observed(
        &self,
        sequence: &str,
        observer: &mut dyn DisplacementObserver,
    ) -> Result<bool, InvalidDirectiveError> {
        self.displacement_observed(sequence, observer)
            .map(Displacement::is_origin)
    }

    /// Like [`evaluate_observed`](Self::evaluate_observed), returning the
    /// net displacement.
    pub fn displacement_observed(
        &self,
        sequence: &str,
        observer: &mut dyn DisplacementObserver,
    ) -> Result<Displacement, InvalidDirectiveError> {
        let total = fold_sequence(sequence.chars(), 0, self.config.policy, observer)?;
        observer.on_complete(total, total.is_origin());
        Ok(total)
    }

    fn fold<I>(&self, chars: I) -> Result<Displacement, InvalidDirectiveError>
    where
        I: IntoIterator<Item = char>,
    {
        match self.config.policy {
            DirectivePolicy::Lenient => Ok(net_displacement(chars)),
            DirectivePolicy::Strict => {
                fold_sequence(chars, 0, DirectivePolicy::Strict, &mut NoopObserver)
            }
        }
    }
}

impl Default for DisplacementEvaluator {
    fn default() -> Self {
        Self {
            config: EvalConfig::default(),
            workers: 1,
        }
    }
}
