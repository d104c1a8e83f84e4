//! Proptest strategies for directive sequences.

use homing_core::Directive;
use proptest::prelude::*;

pub fn arb_directive() -> impl Strategy<Value = Directive> {
    prop::sample::select(Directive::ALL.to_vec())
}

/// Sequences drawn only from `L R U D`.
pub fn arb_directive_sequence(max_len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(arb_directive(), 0..max_len)
        .prop_map(|ds| ds.into_iter().map(Directive::as_char).collect())
}

/// Sequences mixing directives with arbitrary other characters.
pub fn arb_noisy_sequence(max_len: usize) -> impl Strategy<Value = String> {
    let ch = prop_oneof![
        3 => arb_directive().prop_map(Directive::as_char),
        1 => any::<char>(),
    ];
    prop::collection::vec(ch, 0..max_len).prop_map(|cs| cs.into_iter().collect())
}
