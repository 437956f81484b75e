//! # MinHash fingerprints for token sets
//!
//! This crate turns a set of tokens (typically shingles extracted from a
//! structured object) into compact sketches that can be compared without
//! looking at the original sets.
//!
//! ## Contract
//!
//! - Encoding is a pure function of `(tokens, config)`: no I/O, no clocks, no
//!   global state. The same tokens under the same [`EncoderConfig`] always
//!   give bit-identical sketches, on every platform.
//! - Token order and duplicates never change a sketch.
//! - Extracting tokens from domain objects is delegated to a [`Shingler`].
//!
//! ## Pipeline
//!
//! 1.  **Token hashing**: every string token is mapped to a `u32` with
//!     unseeded FNV-1a ([`hash`]).
//! 2.  **Dense path**: a seeded family of universal hash functions
//!     ([`PermutationFamily`]) is applied to every token hash and the minimum
//!     per function is kept. The fraction of equal slots between two dense
//!     sketches estimates the Jaccard similarity of the token sets
//!     ([`similarity`](fn@similarity)).
//! 3.  **Sparse path**: token hashes are folded modulo a caller-chosen length
//!     into a bit vector ([`SparseSketch`]) for bit-vector infrastructure.
//!
//! Batch variants encode many token sets at once, on the rayon pool when the
//! batch is large, always returning results in input order.
//!
//! ## Example
//!
//! ```
//! use mhfp::{MinHashEncoder, DEFAULT_SPARSE_LENGTH};
//!
//! let encoder = MinHashEncoder::new(256, 42).unwrap();
//!
//! let a = encoder.encode_dense(&["c1ccccc1", "CO", "C=O", "CC"]).unwrap();
//! let b = encoder.encode_dense(&["c1ccccc1", "CO", "C=O", "CN"]).unwrap();
//! let estimate = encoder.similarity(&a, &b).unwrap();
//! assert!(estimate > 0.2 && estimate < 1.0);
//!
//! let bits = encoder.encode_sparse(&["abc", "de"], DEFAULT_SPARSE_LENGTH).unwrap();
//! assert_eq!(bits.len(), 2048);
//! ```
//!
pub mod config;
pub mod error;
pub mod hash;
pub mod sketch;

mod encoder;
mod fold;
mod minhash;
mod permutation;
mod shingling;
mod similarity;

pub use crate::config::{
    EncoderConfig, ShinglingParams, DEFAULT_BATCH_PARALLEL_THRESHOLD, DEFAULT_PERMUTATION_COUNT,
    DEFAULT_RADIUS_MAX, DEFAULT_RADIUS_MIN, DEFAULT_SEED, DEFAULT_SPARSE_LENGTH,
};
pub use crate::encoder::MinHashEncoder;
pub use crate::error::{Result, SketchError};
pub use crate::fold::{bucket, fold};
pub use crate::hash::{fnv1a_32, hash_token, hash_tokens};
pub use crate::permutation::{PermutationFamily, MAX_HASH, MERSENNE_PRIME_61};
pub use crate::shingling::{NgramShingler, Shingler};
pub use crate::similarity::{distance, similarity};
pub use crate::sketch::{
    DenseFingerprint, SketchMeta, SparseSketch, SKETCH_ALGORITHM, SKETCH_VERSION,
};
