//! Algebraic properties of the displacement fold.
//!
//! Every evaluation strategy (free function, sequential evaluator, chunked,
//! parallel) must agree with a plain count of `L`/`R`/`U`/`D`.

use std::num::NonZeroUsize;

use homing_core::{DirectivePolicy, Displacement};
use homing_eval::{
    displacement, displacement_chunked, displacement_parallel, evaluate, DisplacementEvaluator,
    EvalConfig,
};
use homing_test_utils::strategies::{arb_directive_sequence, arb_noisy_sequence};
use proptest::prelude::*;

fn counted(s: &str) -> Displacement {
    let count = |c: char| s.chars().filter(|&x| x == c).count() as i64;
    Displacement::new(count('R') - count('L'), count('U') - count('D'))
}

fn reference_strict(s: &str) -> Result<Displacement, (usize, char)> {
    match s
        .chars()
        .enumerate()
        .find(|(_, c)| !matches!(c, 'L' | 'R' | 'U' | 'D'))
    {
        Some(bad) => Err(bad),
        None => Ok(counted(s)),
    }
}

proptest! {
    #[test]
    fn returns_home_iff_counts_balance(s in arb_noisy_sequence(256)) {
        let count = |c: char| s.chars().filter(|&x| x == c).count();
        let balanced = count('L') == count('R') && count('U') == count('D');
        prop_assert_eq!(evaluate(&s), balanced);
    }

    #[test]
    fn displacement_matches_counts(s in arb_noisy_sequence(256)) {
        prop_assert_eq!(displacement(&s), counted(&s));
    }

    #[test]
    fn permutation_invariant(
        s in arb_directive_sequence(128),
        seed in any::<u64>(),
    ) {
        // Deterministic Fisher-Yates driven by an LCG.
        let mut chars: Vec<char> = s.chars().collect();
        let mut state = seed;
        for i in (1..chars.len()).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            chars.swap(i, j);
        }
        let shuffled: String = chars.into_iter().collect();
        prop_assert_eq!(evaluate(&s), evaluate(&shuffled));
        prop_assert_eq!(displacement(&s), displacement(&shuffled));
    }

    #[test]
    fn concatenation_is_additive(
        a in arb_noisy_sequence(128),
        b in arb_noisy_sequence(128),
    ) {
        let joined = format!("{a}{b}");
        prop_assert_eq!(displacement(&joined), displacement(&a) + displacement(&b));
    }

    #[test]
    fn chunked_agrees_with_sequential(
        s in arb_noisy_sequence(256),
        chunk in 1usize..64,
        strict in any::<bool>(),
    ) {
        let policy = if strict { DirectivePolicy::Strict } else { DirectivePolicy::Lenient };
        let chars: Vec<char> = s.chars().collect();
        let chunk = NonZeroUsize::new(chunk).unwrap();
        let chunked = displacement_chunked(&chars, chunk, policy);
        let sequential = DisplacementEvaluator::new(EvalConfig { policy, ..EvalConfig::default() })
            .unwrap()
            .displacement(&s);
        prop_assert_eq!(chunked, sequential);
    }

    #[test]
    fn parallel_agrees_with_sequential(
        s in arb_noisy_sequence(512),
        workers in 1usize..9,
        strict in any::<bool>(),
    ) {
        let policy = if strict { DirectivePolicy::Strict } else { DirectivePolicy::Lenient };
        let chars: Vec<char> = s.chars().collect();
        let parallel = displacement_parallel(&chars, workers, policy);
        match (parallel, policy) {
            (Ok(d), DirectivePolicy::Lenient) => prop_assert_eq!(d, counted(&s)),
            (result, DirectivePolicy::Strict) => {
                let result = result.map_err(|e| (e.index, e.character));
                prop_assert_eq!(result, reference_strict(&s));
            }
            (Err(e), DirectivePolicy::Lenient) => {
                prop_assert!(false, "lenient fold failed: {e}");
            }
        }
    }
}
