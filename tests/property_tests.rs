//! Property-based tests for sketch invariants.
//!
//! - Dense and sparse sketches ignore token order and duplicates
//! - Similarity is reflexive, symmetric and bounded
//! - Folding sets exactly the buckets of the token hashes

use mhfp::{bucket, hash_token, similarity, MinHashEncoder};
use proptest::prelude::*;

fn encoder() -> MinHashEncoder {
    MinHashEncoder::new(64, 42).unwrap()
}

prop_compose! {
    fn arb_tokens()(tokens in prop::collection::vec("[a-zA-Z0-9=#()]{0,8}", 1..40)) -> Vec<String> {
        tokens
    }
}

prop_compose! {
    fn arb_tokens_and_permutation()(tokens in arb_tokens())
        (shuffled in Just(tokens.clone()).prop_shuffle(), tokens in Just(tokens))
        -> (Vec<String>, Vec<String>) {
        (tokens, shuffled)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sketches_are_order_independent((tokens, shuffled) in arb_tokens_and_permutation()) {
        let enc = encoder();

        prop_assert_eq!(enc.encode_dense(&tokens).unwrap(), enc.encode_dense(&shuffled).unwrap());
        prop_assert_eq!(
            enc.encode_sparse(&tokens, 256).unwrap(),
            enc.encode_sparse(&shuffled, 256).unwrap()
        );
    }

    #[test]
    fn duplicates_do_not_change_sketches(tokens in arb_tokens()) {
        let enc = encoder();
        let mut doubled = tokens.clone();
        doubled.extend(tokens.iter().cloned());

        prop_assert_eq!(enc.encode_dense(&tokens).unwrap(), enc.encode_dense(&doubled).unwrap());
        prop_assert_eq!(
            enc.encode_sparse(&tokens, 256).unwrap(),
            enc.encode_sparse(&doubled, 256).unwrap()
        );
    }

    #[test]
    fn similarity_bounds(a in arb_tokens(), b in arb_tokens()) {
        let enc = encoder();
        let sa = enc.encode_dense(&a).unwrap();
        let sb = enc.encode_dense(&b).unwrap();

        let s_ab = similarity(&sa, &sb).unwrap();
        let s_ba = similarity(&sb, &sa).unwrap();
        prop_assert_eq!(similarity(&sa, &sa).unwrap(), 1.0);
        prop_assert_eq!(s_ab, s_ba);
        prop_assert!((0.0..=1.0).contains(&s_ab), "similarity {} out of range", s_ab);
    }

    #[test]
    fn fold_sets_exactly_token_buckets(tokens in arb_tokens(), length in 1usize..3000) {
        let sketch = encoder().encode_sparse(&tokens, length).unwrap();
        let mut expected: Vec<usize> = tokens.iter().map(|t| bucket(hash_token(t), length)).collect();
        expected.sort_unstable();
        expected.dedup();

        prop_assert_eq!(sketch.len(), length);
        prop_assert_eq!(sketch.ones(), expected);
    }
}
