//! Error types for directive parsing.

use thiserror::Error;

/// A character that does not name any [`Directive`](crate::Directive).
///
/// Returned by `Directive::try_from(char)`. Carries no position; see
/// [`InvalidDirectiveError`] for the sequence-level error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown directive {0:?}")]
pub struct UnknownDirective(pub char);

/// An unrecognized character encountered while folding a sequence under
/// [`DirectivePolicy::Strict`](crate::DirectivePolicy::Strict).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("invalid directive {character:?} at index {index}")]
pub struct InvalidDirectiveError {
    /// The offending character.
    pub character: char,
    /// Position of the character in the sequence, counted in `char`s from 0.
    pub index: usize,
}

impl InvalidDirectiveError {
    /// Attach a sequence position to an [`UnknownDirective`].
    pub fn at(unknown: UnknownDirective, index: usize) -> Self {
        Self {
            character: unknown.0,
            index,
        }
    }
}
