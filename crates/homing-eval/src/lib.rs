//! Displacement evaluation for directive sequences.
//!
//! [`DisplacementEvaluator`] folds a sequence of `L`/`R`/`U`/`D` characters
//! into a net [`Displacement`](homing_core::Displacement) and reports whether
//! it is the origin. Because vector addition is associative and commutative,
//! the fold may also run as a chunked reduction across scoped threads; both
//! strategies produce identical results, including which error is reported
//! under [`DirectivePolicy::Strict`](homing_core::DirectivePolicy::Strict).
//!
//! For the common lenient case, the free functions [`evaluate`] and
//! [`displacement`] need no configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod evaluator;
pub mod fold;
pub mod observer;
pub mod parallel;

pub use config::{ConfigError, EvalConfig};
pub use evaluator::DisplacementEvaluator;
pub use fold::{displacement_chunked, fold_sequence, net_displacement};
pub use observer::{DisplacementObserver, NoopObserver, TracingObserver};
pub use parallel::displacement_parallel;

use homing_core::Displacement;

/// Returns `true` iff `sequence` returns to the origin.
///
/// Characters outside the directive alphabet are ignored.
///
/// # Examples
///
/// ```
/// assert!(homing_eval::evaluate("LRUDRLDU"));
/// assert!(!homing_eval::evaluate("LRUDRLD"));
/// assert!(homing_eval::evaluate(""));
/// ```
pub fn evaluate(sequence: &str) -> bool {
    displacement(sequence).is_origin()
}

/// Net displacement of `sequence`, ignoring unknown characters.
pub fn displacement(sequence: &str) -> Displacement {
    net_displacement(sequence.chars())
}
