//! Sequential and chunked directive folds.

use std::num::NonZeroUsize;

use homing_core::{Directive, DirectivePolicy, Displacement, InvalidDirectiveError};

use crate::observer::DisplacementObserver;

/// Lenient net displacement of any character sequence.
///
/// Unknown characters contribute nothing. Infallible.
pub fn net_displacement<I>(chars: I) -> Displacement
where
    I: IntoIterator<Item = char>,
{
    chars
        .into_iter()
        .filter_map(Directive::from_char)
        .map(Directive::offset)
        .sum()
}

/// Fold `chars` left to right under `policy`, reporting each step to
/// `observer`.
///
/// `start` is the sequence index of the first character, so folds over a
/// chunk report positions relative to the whole sequence. Under
/// [`DirectivePolicy::Strict`] the fold stops at the first unknown
/// character.
pub fn fold_sequence<I>(
    chars: I,
    start: usize,
    policy: DirectivePolicy,
    observer: &mut dyn DisplacementObserver,
) -> Result<Displacement, InvalidDirectiveError>
where
    I: IntoIterator<Item = char>,
{
    let mut acc = Displacement::ORIGIN;
    for (offset, c) in chars.into_iter().enumerate() {
        let index = start + offset;
        match policy.classify(index, c)? {
            Some(directive) => {
                acc.apply(directive);
                observer.on_directive(index, directive, acc);
            }
            None => observer.on_ignored(index, c),
        }
    }
    Ok(acc)
}

/// Fold one chunk without instrumentation.
pub(crate) fn fold_chunk(
    chunk: &[char],
    start: usize,
    policy: DirectivePolicy,
) -> Result<Displacement, InvalidDirectiveError> {
    match policy {
        DirectivePolicy::Lenient => Ok(net_displacement(chunk.iter().copied())),
        DirectivePolicy::Strict => {
            let mut acc = Displacement::ORIGIN;
            for (offset, &c) in chunk.iter().enumerate() {
                if let Some(directive) = policy.classify(start + offset, c)? {
                    acc.apply(directive);
                }
            }
            Ok(acc)
        }
    }
}

/// Fold `chars` in contiguous chunks of `chunk_len` and sum the partials.
///
/// Equivalent to a single sequential fold. Partials are combined in chunk
/// order, so under [`DirectivePolicy::Strict`] the reported error is the
/// one with the lowest index.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use homing_core::{DirectivePolicy, Displacement};
/// use homing_eval::displacement_chunked;
///
/// let chars: Vec<char> = "LRUDRLD".chars().collect();
/// let chunk = NonZeroUsize::new(3).unwrap();
/// let d = displacement_chunked(&chars, chunk, DirectivePolicy::Lenient).unwrap();
/// assert_eq!(d, Displacement::new(0, -1));
/// ```
pub fn displacement_chunked(
    chars: &[char],
    chunk_len: NonZeroUsize,
    policy: DirectivePolicy,
) -> Result<Displacement, InvalidDirectiveError> {
    let chunk_len = chunk_len.get();
    chars
        .chunks(chunk_len)
        .enumerate()
        .map(|(i, chunk)| fold_chunk(chunk, i * chunk_len, policy))
        .sum()
}
