//! Chunked reduction across scoped threads.
//!
//! The input is split into at most `workers` contiguous chunks. Each chunk
//! is folded on its own scoped thread; partials are joined and summed in
//! chunk order. All threads are joined before returning.

use std::thread;

use homing_core::{DirectivePolicy, Displacement, InvalidDirectiveError};

use crate::fold::fold_chunk;

/// Fold `chars` on up to `workers` threads and sum the partial displacements.
///
/// `workers <= 1` (or an input shorter than two characters) folds on the
/// calling thread. The result, and under [`DirectivePolicy::Strict`] the
/// reported error, is identical to a sequential fold.
pub fn displacement_parallel(
    chars: &[char],
    workers: usize,
    policy: DirectivePolicy,
) -> Result<Displacement, InvalidDirectiveError> {
    let workers = workers.min(chars.len());
    if workers <= 1 {
        return fold_chunk(chars, 0, policy);
    }

    let chunk_len = chars.len().div_ceil(workers);
    tracing::debug!(len = chars.len(), workers, chunk_len, "parallel fold");

    let partials: Vec<Result<Displacement, InvalidDirectiveError>> = thread::scope(|s| {
        let handles: Vec<_> = chars
            .chunks(chunk_len)
            .enumerate()
            .map(|(i, chunk)| s.spawn(move || fold_chunk(chunk, i * chunk_len, policy)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|payload| std::panic::resume_unwind(payload)))
            .collect()
    });

    partials.into_iter().sum()
}
