//! Homing: decide whether a sequence of unit grid moves returns to the origin.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! homing sub-crates. For most users, adding `homing` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use homing::prelude::*;
//!
//! assert!(homing::evaluate("LRUDRLDU"));
//! assert!(!homing::evaluate("LRUDRLD"));
//!
//! let strict = DisplacementEvaluator::new(EvalConfig::strict()).unwrap();
//! assert_eq!(strict.displacement("LRUDRLD"), Ok(Displacement::new(0, -1)));
//! assert!(strict.evaluate("LRX").is_err());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `homing-core` | Directives, displacement, policy, errors |
//! | [`eval`] | `homing-eval` | Evaluator, config, folds, observers |
//! | [`cli`] | (binary) | Argument parsing and output for the `homing` binary |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;

/// Directives, displacement, policy, and error types (`homing-core`).
pub use homing_core as types;

/// Evaluator, configuration, folds, and observers (`homing-eval`).
pub use homing_eval as eval;

pub use homing_eval::{displacement, evaluate};

/// Common imports for typical usage.
pub mod prelude {
    pub use homing_core::{
        Directive, DirectivePolicy, Displacement, InvalidDirectiveError, UnknownDirective,
    };
    pub use homing_eval::{
        ConfigError, DisplacementEvaluator, DisplacementObserver, EvalConfig, NoopObserver,
        TracingObserver,
    };
}
