//! Seeded universal-hash permutation family.
//!
//! Slot `i` of a dense sketch uses `h_i(t) = ((a_i * t + b_i) mod P) mod M`
//! with `P = 2^61 - 1` and `M = 2^32 - 1`. The coefficients are drawn once
//! per encoder and never mutated, so a family is freely shared across
//! threads.
//!
//! # Coefficient stream
//!
//! The stream is part of the fingerprint format and must not change without
//! bumping the config version:
//!
//! 1. `Xoshiro256PlusPlus::seed_from_u64(seed)` (state expanded by SplitMix64).
//! 2. Draws alternate `a_0, b_0, a_1, b_1, ...`, one `next_u64()` each.
//! 3. A draw `x` maps into `[0, span)` as `(x * span) >> 64` in 128-bit
//!    arithmetic; `a_i = 1 + map(x, M - 1)`, `b_i = map(x, M)`.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Mersenne prime `2^61 - 1` used for the inner reduction.
pub const MERSENNE_PRIME_61: u64 = (1 << 61) - 1;

/// Largest raw hash value, `2^32 - 1`. Also the outer modulus.
pub const MAX_HASH: u64 = u32::MAX as u64;

/// Coefficients of `n` universal hash functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationFamily {
    a: Vec<u32>,
    b: Vec<u32>,
}

impl PermutationFamily {
    /// Draw `n` coefficient pairs from `seed`.
    pub fn generate(seed: u64, n: usize) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut a = Vec::with_capacity(n);
        let mut b = Vec::with_capacity(n);
        for _ in 0..n {
            a.push(1 + bounded(rng.next_u64(), MAX_HASH - 1));
            b.push(bounded(rng.next_u64(), MAX_HASH));
        }
        Self { a, b }
    }

    /// Number of hash functions.
    #[inline]
    pub fn len(&self) -> usize {
        self.a.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Multiplicative coefficients, each in `[1, M-1]`.
    pub fn coefficients_a(&self) -> &[u32] {
        &self.a
    }

    /// Additive coefficients, each in `[0, M-1]`.
    pub fn coefficients_b(&self) -> &[u32] {
        &self.b
    }

    /// Apply hash function `slot` to a raw token hash.
    ///
    /// # Panics
    ///
    /// Panics if `slot >= self.len()`.
    #[inline]
    pub fn apply(&self, slot: usize, token: u32) -> u32 {
        permute(self.a[slot], self.b[slot], token)
    }
}

/// `((a * t + b) mod P) mod M`.
///
/// `a * t + b <= (2^32 - 1)^2 + 2^32 - 1 < 2^64`, so the sum cannot wrap.
#[inline]
pub(crate) fn permute(a: u32, b: u32, token: u32) -> u32 {
    let x = u64::from(a) * u64::from(token) + u64::from(b);
    let x = if x >= MERSENNE_PRIME_61 {
        x % MERSENNE_PRIME_61
    } else {
        x
    };
    // x % MAX_HASH < 2^32 - 1, so the cast is lossless.
    (x % MAX_HASH) as u32
}

/// Map a uniform 64-bit draw into `[0, span)`.
#[inline]
fn bounded(x: u64, span: u64) -> u32 {
    ((u128::from(x) * u128::from(span)) >> 64) as u32
}
