//! Handling of characters outside the directive alphabet.

use crate::directive::Directive;
use crate::error::InvalidDirectiveError;

/// What to do with a character that is not `L`, `R`, `U` or `D`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DirectivePolicy {
    /// Skip the character; it contributes zero displacement.
    #[default]
    Lenient,
    /// Fail the evaluation with [`InvalidDirectiveError`].
    Strict,
}

impl DirectivePolicy {
    /// Classify the character at `index` under this policy.
    ///
    /// Returns `Ok(Some(_))` for a directive, `Ok(None)` for a character
    /// that is skipped, and `Err(_)` when the policy rejects it.
    pub fn classify(
        self,
        index: usize,
        c: char,
    ) -> Result<Option<Directive>, InvalidDirectiveError> {
        match (Directive::try_from(c), self) {
            (Ok(d), _) => Ok(Some(d)),
            (Err(_), DirectivePolicy::Lenient) => Ok(None),
            (Err(unknown), DirectivePolicy::Strict) => {
                Err(InvalidDirectiveError::at(unknown, index))
            }
        }
    }
}
