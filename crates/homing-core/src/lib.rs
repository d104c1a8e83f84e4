//! Core types for the homing displacement evaluator.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary used throughout the workspace: move directives,
//! the integer displacement they accumulate into, the policy for characters
//! outside the directive alphabet, and the associated error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod directive;
pub mod displacement;
pub mod error;
pub mod policy;

pub use directive::Directive;
pub use displacement::Displacement;
pub use error::{InvalidDirectiveError, UnknownDirective};
pub use policy::DirectivePolicy;
