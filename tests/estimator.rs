//! Statistical behaviour of the similarity estimator.
//!
//! Tolerances are several standard deviations wide (`sqrt(J(1-J)/n)`) so the
//! checks are stable while still shrinking as `n` grows.

use mhfp::{distance, MinHashEncoder};

fn range_tokens(start: usize, end: usize) -> Vec<String> {
    (start..end).map(|i| format!("tok{i}")).collect()
}

fn mean_estimate(a: &[String], b: &[String], n: usize, trials: u64) -> f64 {
    let total: f64 = (0..trials)
        .map(|seed| {
            let encoder = MinHashEncoder::new(n, seed).unwrap();
            let sa = encoder.encode_dense(a).unwrap();
            let sb = encoder.encode_dense(b).unwrap();
            encoder.similarity(&sa, &sb).unwrap()
        })
        .sum();
    total / trials as f64
}

#[test]
fn estimate_converges_to_jaccard() {
    // |A ∩ B| = 100, |A ∪ B| = 200.
    let a = range_tokens(0, 150);
    let b = range_tokens(50, 200);
    let jaccard = 0.5;

    for n in [64usize, 256, 1024, 4096] {
        let sd = (jaccard * (1.0 - jaccard) / n as f64).sqrt();
        let tolerance = 4.0 * sd + 0.02;
        let estimate = mean_estimate(&a, &b, n, 8);
        assert!(
            (estimate - jaccard).abs() < tolerance,
            "n={n}: estimate {estimate} outside {jaccard} ± {tolerance}"
        );
    }
}

#[test]
fn estimate_tracks_different_overlaps() {
    let base = range_tokens(0, 100);
    // Jaccard of base with range(k, 100 + k) is (100 - k) / (100 + k).
    for shift in [10usize, 50, 90] {
        let other = range_tokens(shift, 100 + shift);
        let jaccard = (100 - shift) as f64 / (100 + shift) as f64;
        let estimate = mean_estimate(&base, &other, 1024, 4);
        assert!(
            (estimate - jaccard).abs() < 0.08,
            "shift={shift}: estimate {estimate} vs {jaccard}"
        );
    }
}

#[test]
fn identical_sets_estimate_one() {
    let encoder = MinHashEncoder::new(512, 42).unwrap();
    let a = encoder.encode_dense(&range_tokens(0, 30)).unwrap();
    let b = encoder.encode_dense(&range_tokens(0, 30)).unwrap();
    assert_eq!(encoder.similarity(&a, &b).unwrap(), 1.0);
    assert_eq!(distance(&a, &b).unwrap(), 0.0);
}

#[test]
fn disjoint_sets_with_few_permutations_score_low() {
    let encoder = MinHashEncoder::new(4, 42).unwrap();
    let mut total_matches = 0.0;
    for round in 0..50 {
        let a: Vec<String> = (0..20).map(|i| format!("a{round}-{i}")).collect();
        let b: Vec<String> = (0..20).map(|i| format!("b{round}-{i}")).collect();
        let sa = encoder.encode_dense(&a).unwrap();
        let sb = encoder.encode_dense(&b).unwrap();
        total_matches += encoder.similarity(&sa, &sb).unwrap();
    }
    // Expected value is ~0; allow a handful of chance collisions.
    assert!(total_matches / 50.0 < 0.1);
}

#[test]
fn sparse_tanimoto_tracks_overlap() {
    let encoder = MinHashEncoder::default();
    let a = encoder.encode_sparse(&range_tokens(0, 150), 4096).unwrap();
    let b = encoder.encode_sparse(&range_tokens(50, 200), 4096).unwrap();
    let t = a.tanimoto(&b).unwrap();
    // Few collisions at this length, so the bit Jaccard sits near 0.5.
    assert!((t - 0.5).abs() < 0.1, "tanimoto {t}");
}
