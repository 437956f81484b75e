//! Configuration for MinHash encoders and the shingling collaborator.
//!
//! Both structs are plain data: no I/O, no environment lookups. Every default
//! lives in a named constant so callers can see and override it.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};

/// Default dimensionality of dense sketches.
pub const DEFAULT_PERMUTATION_COUNT: usize = 2048;

/// Default seed for the permutation family.
pub const DEFAULT_SEED: u64 = 42;

/// Default number of bits in a folded sparse sketch.
pub const DEFAULT_SPARSE_LENGTH: usize = 2048;

/// Default batch size from which batch encoding runs on the rayon pool.
pub const DEFAULT_BATCH_PARALLEL_THRESHOLD: usize = 64;

/// Default smallest shingle radius.
pub const DEFAULT_RADIUS_MIN: u8 = 1;

/// Default largest shingle radius.
pub const DEFAULT_RADIUS_MAX: u8 = 3;

/// Configuration of a [`MinHashEncoder`](crate::MinHashEncoder).
///
/// Two encoders produce comparable dense sketches iff `permutation_count` and
/// `seed` are equal. `use_parallel` and `batch_parallel_threshold` only affect
/// scheduling, never the output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Configuration schema version.
    ///
    /// Any change that can alter a sketch must bump this version so stored
    /// sketches stay attributable to the algorithm that made them.
    pub version: u32,
    /// Number of permutations, i.e. the length of every dense sketch.
    pub permutation_count: usize,
    /// Seed of the permutation family.
    pub seed: u64,
    /// Compute the slots of a single dense sketch in parallel.
    pub use_parallel: bool,
    /// Batches with at least this many items are encoded on the rayon pool.
    pub batch_parallel_threshold: usize,
}

impl EncoderConfig {
    /// Create a new configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of permutations (sketch dimensionality).
    /// More permutations lower the estimator variance, roughly `J(1-J)/n`.
    pub fn with_permutation_count(mut self, permutation_count: usize) -> Self {
        self.permutation_count = permutation_count;
        self
    }

    /// Set the permutation seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable slot-level parallelism.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Set the batch size from which batches run on the rayon pool.
    pub fn with_batch_parallel_threshold(mut self, threshold: usize) -> Self {
        self.batch_parallel_threshold = threshold;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<()> {
        if self.version < 1 {
            return Err(SketchError::invalid("version", self.version));
        }
        if self.permutation_count < 1 {
            return Err(SketchError::invalid(
                "permutation_count",
                self.permutation_count,
            ));
        }
        Ok(())
    }

    /// Whether dense sketches from `self` and `other` can be compared.
    pub fn is_compatible(&self, other: &EncoderConfig) -> bool {
        self.permutation_count == other.permutation_count && self.seed == other.seed
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            version: 1,
            permutation_count: DEFAULT_PERMUTATION_COUNT,
            seed: DEFAULT_SEED,
            use_parallel: false,
            batch_parallel_threshold: DEFAULT_BATCH_PARALLEL_THRESHOLD,
        }
    }
}

/// Extraction parameters handed to a [`Shingler`](crate::Shingler).
///
/// The sketching core never interprets these; they are passed through
/// unchanged to the collaborator that turns an object into tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShinglingParams {
    /// Smallest radius of extracted substructures.
    pub radius_min: u8,
    /// Largest radius of extracted substructures (inclusive).
    pub radius_max: u8,
    /// Also emit ring systems as shingles.
    pub include_rings: bool,
    /// Keep stereo information in emitted shingles.
    pub isomeric: bool,
    /// Emit shingles in canonical form.
    pub canonical_form: bool,
}

impl ShinglingParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius_min: u8, radius_max: u8) -> Self {
        self.radius_min = radius_min;
        self.radius_max = radius_max;
        self
    }

    pub fn with_rings(mut self, include_rings: bool) -> Self {
        self.include_rings = include_rings;
        self
    }

    pub fn with_isomeric(mut self, isomeric: bool) -> Self {
        self.isomeric = isomeric;
        self
    }

    pub fn with_canonical_form(mut self, canonical_form: bool) -> Self {
        self.canonical_form = canonical_form;
        self
    }

    /// Reject an inverted radius range.
    pub fn validate(&self) -> Result<()> {
        if self.radius_min > self.radius_max {
            return Err(SketchError::invalid(
                "radius_min",
                format!("{} > radius_max {}", self.radius_min, self.radius_max),
            ));
        }
        Ok(())
    }
}

impl Default for ShinglingParams {
    fn default() -> Self {
        Self {
            radius_min: DEFAULT_RADIUS_MIN,
            radius_max: DEFAULT_RADIUS_MAX,
            include_rings: true,
            isomeric: false,
            canonical_form: true,
        }
    }
}
