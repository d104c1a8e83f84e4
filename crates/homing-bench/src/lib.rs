//! Benchmark profiles for the homing evaluator.
//!
//! - [`random_sequence`]: deterministic pseudo-random directives via seed
//! - [`noisy_sequence`]: same, with a fraction of non-directive characters
//! - [`parallel_profile`]: an [`EvalConfig`] that takes the threaded path

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use homing_core::{Directive, DirectivePolicy};
use homing_eval::EvalConfig;

/// Generate `len` deterministic directive characters from `seed`.
pub fn random_sequence(len: usize, seed: u64) -> String {
    lcg(seed)
        .take(len)
        .map(|r| Directive::ALL[(r >> 33) as usize % 4].as_char())
        .collect()
}

/// Like [`random_sequence`], but roughly one character in `noise_every`
/// is replaced by `'.'`.
pub fn noisy_sequence(len: usize, seed: u64, noise_every: u64) -> String {
    let noise_every = noise_every.max(1);
    lcg(seed)
        .take(len)
        .map(|r| {
            let r = r >> 33;
            if r % noise_every == 0 {
                '.'
            } else {
                Directive::ALL[(r / noise_every) as usize % 4].as_char()
            }
        })
        .collect()
}

/// Config that folds inputs of at least 4096 characters on `workers` threads.
pub fn parallel_profile(workers: usize, policy: DirectivePolicy) -> EvalConfig {
    EvalConfig {
        policy,
        workers: Some(workers),
        parallel_threshold: 4096,
    }
}

fn lcg(seed: u64) -> impl Iterator<Item = u64> {
    let mut state = seed;
    std::iter::repeat_with(move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        state
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_sequence_deterministic() {
        assert_eq!(random_sequence(1000, 42), random_sequence(1000, 42));
        assert_ne!(random_sequence(1000, 42), random_sequence(1000, 43));
    }

    #[test]
    fn random_sequence_uses_alphabet_only() {
        let s = random_sequence(10_000, 7);
        assert_eq!(s.chars().count(), 10_000);
        assert!(s.chars().all(|c| Directive::from_char(c).is_some()));
    }

    #[test]
    fn noisy_sequence_contains_noise() {
        let s = noisy_sequence(10_000, 7, 8);
        assert!(s.contains('.'));
        assert!(s.chars().any(|c| Directive::from_char(c).is_some()));
    }

    #[test]
    fn parallel_profile_validates() {
        parallel_profile(4, DirectivePolicy::Strict).validate().unwrap();
    }
}
