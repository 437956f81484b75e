//! Feature-hashing fold into a fixed-length binary sketch.
//!
//! Independent of the permutation family: each raw token hash `t` sets bit
//! `t mod L`. Distinct tokens landing in the same bucket are accepted noise,
//! and sketches folded to different lengths are not comparable.

use bitvec::prelude::*;

use crate::error::{Result, SketchError};
use crate::sketch::SparseSketch;

/// Fold raw token hashes into a sketch of `length` bits.
///
/// `length` must be non-zero and `tokens` must not be empty.
pub fn fold(tokens: &[u32], length: usize) -> Result<SparseSketch> {
    if length == 0 {
        return Err(SketchError::invalid("length", length));
    }
    if tokens.is_empty() {
        return Err(SketchError::EmptyInput);
    }
    let mut bits: BitVec<u64, Lsb0> = BitVec::repeat(false, length);
    for &t in tokens {
        bits.set(bucket(t, length), true);
    }
    Ok(SparseSketch::from_bits(bits))
}

/// Bucket of a token hash in a sketch of `length` bits.
#[inline]
pub fn bucket(token: u32, length: usize) -> usize {
    // Widen before the modulo so lengths beyond u32::MAX behave on 64-bit targets.
    (u64::from(token) % length as u64) as usize
}
