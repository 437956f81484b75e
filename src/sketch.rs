//! Sketch value types.
//!
//! Sketches hold no reference to the encoder that produced them and can be
//! copied, stored and compared freely. Slot and bit order are part of the
//! format: slot `i` of two dense sketches is only comparable because both
//! came from permutation `i` of the same family.

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};
use crate::similarity::similarity;

/// Current sketch algorithm version.
pub const SKETCH_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const SKETCH_ALGORITHM: &str = "fnv1a32_xoshiro256pp_minhash_v1";

/// Fixed-length binary sketch produced by folding token hashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SparseSketch {
    bits: BitVec<u64, Lsb0>,
}

impl SparseSketch {
    pub(crate) fn from_bits(bits: BitVec<u64, Lsb0>) -> Self {
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether bit `index` is set. Out-of-range indices read as unset.
    pub fn is_set(&self, index: usize) -> bool {
        self.bits.get(index).map(|bit| *bit).unwrap_or(false)
    }

    /// Positions of set bits, ascending.
    pub fn ones(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Backing words, least significant bit first.
    pub fn as_raw_words(&self) -> &[u64] {
        self.bits.as_raw_slice()
    }

    pub fn as_bitslice(&self) -> &BitSlice<u64, Lsb0> {
        &self.bits
    }

    /// Tanimoto (bit Jaccard) similarity `|A & B| / |A | B|`.
    ///
    /// Two all-zero sketches are identical and score `1.0`.
    pub fn tanimoto(&self, other: &SparseSketch) -> Result<f64> {
        if self.len() != other.len() {
            return Err(SketchError::length_mismatch(self.len(), other.len()));
        }
        let intersection = self
            .bits
            .iter_ones()
            .filter(|&i| other.bits[i])
            .count();
        let union = self.count_ones() + other.count_ones() - intersection;
        if union == 0 {
            return Ok(1.0);
        }
        Ok(intersection as f64 / union as f64)
    }
}

/// Metadata that makes a dense sketch self-describing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SketchMeta {
    /// Sketch algorithm version ([`SKETCH_VERSION`]).
    pub sketch_version: u16,
    /// Algorithm identifier ([`SKETCH_ALGORITHM`]).
    pub algorithm_name: String,
    /// Number of permutations, equal to the sketch length.
    pub permutation_count: usize,
    /// Seed of the permutation family.
    pub seed: u64,
    /// Encoder configuration version.
    pub config_version: u32,
}

impl SketchMeta {
    fn describe(&self) -> String {
        format!(
            "{}@v{} n={} seed={}",
            self.algorithm_name, self.sketch_version, self.permutation_count, self.seed
        )
    }

    /// Whether sketches carrying `self` and `other` are comparable.
    pub fn is_compatible(&self, other: &SketchMeta) -> bool {
        self.sketch_version == other.sketch_version
            && self.algorithm_name == other.algorithm_name
            && self.permutation_count == other.permutation_count
            && self.seed == other.seed
    }
}

/// Dense MinHash sketch together with the configuration that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DenseFingerprint {
    /// One minimum per permutation slot.
    pub minhash: Vec<u32>,
    pub meta: SketchMeta,
}

impl DenseFingerprint {
    /// Estimated Jaccard similarity, refusing incompatible fingerprints.
    pub fn similarity(&self, other: &DenseFingerprint) -> Result<f64> {
        if !self.meta.is_compatible(&other.meta) {
            return Err(SketchError::ConfigurationMismatch {
                left: self.meta.describe(),
                right: other.meta.describe(),
            });
        }
        similarity(&self.minhash, &other.minhash)
    }
}
