//! MinHash reduction for dense sketches.
//!
//! Slot `i` holds the minimum of `h_i(t)` over every token `t`, where `h_i`
//! is the `i`-th function of a [`PermutationFamily`]. Taking a minimum makes
//! the result independent of token order and multiplicity.

use rayon::prelude::*;

use crate::permutation::{permute, PermutationFamily, MAX_HASH};

/// Compute a dense MinHash sketch (parallel over slots if `use_parallel`).
///
/// Callers reject empty token sets first; an empty slice would leave every
/// slot at `M = 2^32 - 1`.
pub(crate) fn minhash_signature(
    tokens: &[u32],
    family: &PermutationFamily,
    use_parallel: bool,
) -> Vec<u32> {
    let m = family.len();
    if m == 0 {
        return Vec::new();
    }

    if tokens.is_empty() {
        return vec![MAX_HASH as u32; m];
    }

    let a = family.coefficients_a();
    let b = family.coefficients_b();
    let mut result = Vec::with_capacity(m);

    if use_parallel {
        (0..m)
            .into_par_iter()
            .map(|j| compute_slot(tokens, a[j], b[j]))
            .collect_into_vec(&mut result);
    } else {
        for j in 0..m {
            result.push(compute_slot(tokens, a[j], b[j]));
        }
    }

    result
}

/// Computes a single slot of the sketch.
#[inline]
pub(crate) fn compute_slot(tokens: &[u32], a: u32, b: u32) -> u32 {
    let mut minv = MAX_HASH as u32;
    for &t in tokens {
        let h = permute(a, b, t);
        if h < minv {
            minv = h;
        }
    }
    minv
}
