//! Encoding orchestration: token hashing, MinHash reduction and folding.
//!
//! A [`MinHashEncoder`] owns its configuration and a permutation family that
//! is fully built in the constructor and never mutated afterwards. The
//! encoder is `Send + Sync`; any number of threads may encode through a
//! shared reference.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, warn, Level};

use crate::config::{EncoderConfig, ShinglingParams};
use crate::error::{Result, SketchError};
use crate::fold::fold;
use crate::hash::hash_tokens;
use crate::minhash::minhash_signature;
use crate::permutation::PermutationFamily;
use crate::shingling::Shingler;
use crate::similarity::similarity;
use crate::sketch::{
    DenseFingerprint, SketchMeta, SparseSketch, SKETCH_ALGORITHM, SKETCH_VERSION,
};

/// MinHash fingerprint encoder.
///
/// ```
/// use mhfp::MinHashEncoder;
///
/// let encoder = MinHashEncoder::new(128, 42).unwrap();
/// let a = encoder.encode_dense(&["CC", "CO", "C=O"]).unwrap();
/// let b = encoder.encode_dense(&["CC", "CO", "CN"]).unwrap();
///
/// assert_eq!(a.len(), 128);
/// let s = encoder.similarity(&a, &b).unwrap();
/// assert!((0.0..=1.0).contains(&s));
/// ```
#[derive(Debug, Clone)]
pub struct MinHashEncoder {
    config: EncoderConfig,
    family: PermutationFamily,
}

impl MinHashEncoder {
    /// Build an encoder with `permutation_count` permutations drawn from `seed`.
    pub fn new(permutation_count: usize, seed: u64) -> Result<Self> {
        Self::with_config(
            EncoderConfig::new()
                .with_permutation_count(permutation_count)
                .with_seed(seed),
        )
    }

    /// Build an encoder from a full configuration.
    pub fn with_config(config: EncoderConfig) -> Result<Self> {
        if let Err(err) = config.validate() {
            warn!(error = %err, "mhfp.encoder_rejected");
            return Err(err);
        }
        Ok(Self::build(config))
    }

    fn build(config: EncoderConfig) -> Self {
        let start = Instant::now();
        let family = PermutationFamily::generate(config.seed, config.permutation_count);
        debug!(
            permutation_count = config.permutation_count,
            seed = config.seed,
            elapsed_micros = start.elapsed().as_micros(),
            "mhfp.encoder_ready"
        );
        Self { config, family }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Dimensionality of dense sketches.
    pub fn permutation_count(&self) -> usize {
        self.config.permutation_count
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn permutations(&self) -> &PermutationFamily {
        &self.family
    }

    /// Whether dense sketches of `self` and `other` can be compared.
    pub fn is_compatible(&self, other: &MinHashEncoder) -> bool {
        self.config.is_compatible(&other.config)
    }

    /// Metadata attached to fingerprints from this encoder.
    pub fn meta(&self) -> SketchMeta {
        SketchMeta {
            sketch_version: SKETCH_VERSION,
            algorithm_name: SKETCH_ALGORITHM.to_string(),
            permutation_count: self.config.permutation_count,
            seed: self.config.seed,
            config_version: self.config.version,
        }
    }

    // ==================== Dense path ====================

    /// Dense MinHash sketch of a string token set.
    pub fn encode_dense<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<u32>> {
        if tokens.is_empty() {
            return Err(SketchError::EmptyInput);
        }
        Ok(self.reduce(&hash_tokens(tokens)))
    }

    /// Dense MinHash sketch of already-hashed tokens.
    pub fn encode_dense_hashed(&self, tokens: &[u32]) -> Result<Vec<u32>> {
        if tokens.is_empty() {
            return Err(SketchError::EmptyInput);
        }
        Ok(self.reduce(tokens))
    }

    /// Dense sketch wrapped with the metadata needed for checked comparison.
    pub fn fingerprint<S: AsRef<str>>(&self, tokens: &[S]) -> Result<DenseFingerprint> {
        Ok(DenseFingerprint {
            minhash: self.encode_dense(tokens)?,
            meta: self.meta(),
        })
    }

    fn reduce(&self, hashed: &[u32]) -> Vec<u32> {
        minhash_signature(hashed, &self.family, self.config.use_parallel)
    }

    // ==================== Sparse path ====================

    /// Binary sketch of `length` bits folded from a string token set.
    pub fn encode_sparse<S: AsRef<str>>(
        &self,
        tokens: &[S],
        length: usize,
    ) -> Result<SparseSketch> {
        check_length(length)?;
        if tokens.is_empty() {
            return Err(SketchError::EmptyInput);
        }
        fold(&hash_tokens(tokens), length)
    }

    /// Binary sketch of `length` bits folded from already-hashed tokens.
    pub fn encode_sparse_hashed(&self, tokens: &[u32], length: usize) -> Result<SparseSketch> {
        check_length(length)?;
        if tokens.is_empty() {
            return Err(SketchError::EmptyInput);
        }
        fold(tokens, length)
    }

    // ==================== Comparison ====================

    /// Estimated Jaccard similarity of two sketches from this encoder.
    ///
    /// Both sketches must have `permutation_count` slots. That they were
    /// produced with this encoder's seed is the caller's responsibility.
    pub fn similarity(&self, a: &[u32], b: &[u32]) -> Result<f64> {
        let n = self.config.permutation_count;
        if a.len() != n {
            return Err(SketchError::length_mismatch(a.len(), n));
        }
        similarity(a, b)
    }

    // ==================== Batches ====================

    /// Dense sketches for many token sets; output `i` belongs to input `i`.
    pub fn encode_dense_batch<T, S>(&self, batch: &[T]) -> Result<Vec<Vec<u32>>>
    where
        T: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        self.run_batch("dense", batch, |tokens| self.encode_dense(tokens.as_ref()))
    }

    /// Dense sketches for many already-hashed token sets.
    pub fn encode_dense_hashed_batch<T>(&self, batch: &[T]) -> Result<Vec<Vec<u32>>>
    where
        T: AsRef<[u32]> + Sync,
    {
        self.run_batch("dense_hashed", batch, |tokens| {
            self.encode_dense_hashed(tokens.as_ref())
        })
    }

    /// Sparse sketches for many token sets; output `i` belongs to input `i`.
    pub fn encode_sparse_batch<T, S>(
        &self,
        batch: &[T],
        length: usize,
    ) -> Result<Vec<SparseSketch>>
    where
        T: AsRef<[S]> + Sync,
        S: AsRef<str>,
    {
        check_length(length)?;
        self.run_batch("sparse", batch, |tokens| {
            self.encode_sparse(tokens.as_ref(), length)
        })
    }

    /// Shingle every object with `shingler`, then build dense sketches.
    pub fn encode_objects_dense<Sh: Shingler>(
        &self,
        shingler: &Sh,
        objects: &[Sh::Object],
        params: &ShinglingParams,
    ) -> Result<Vec<Vec<u32>>> {
        params.validate()?;
        self.run_batch("objects_dense", objects, |object| {
            self.encode_dense(&shingler.extract(object, params))
        })
    }

    /// Shingle every object with `shingler`, then fold into sparse sketches.
    pub fn encode_objects_sparse<Sh: Shingler>(
        &self,
        shingler: &Sh,
        objects: &[Sh::Object],
        params: &ShinglingParams,
        length: usize,
    ) -> Result<Vec<SparseSketch>> {
        params.validate()?;
        check_length(length)?;
        self.run_batch("objects_sparse", objects, |object| {
            self.encode_sparse(&shingler.extract(object, params), length)
        })
    }

    /// Apply `encode` to every item, on the rayon pool for large batches.
    ///
    /// Results are gathered by index, so ordering never depends on
    /// scheduling. The reported failure is the lowest failing index.
    fn run_batch<I, O, F>(&self, op: &'static str, items: &[I], encode: F) -> Result<Vec<O>>
    where
        I: Sync,
        O: Send,
        F: Fn(&I) -> Result<O> + Sync + Send,
    {
        let start = Instant::now();
        let parallel = items.len() >= self.config.batch_parallel_threshold;
        let span = tracing::span!(
            Level::DEBUG,
            "mhfp.batch",
            op,
            items = items.len(),
            parallel
        );
        let _guard = span.enter();

        let results: Vec<Result<O>> = if parallel {
            items.par_iter().map(&encode).collect()
        } else {
            items.iter().map(&encode).collect()
        };

        let mut out = Vec::with_capacity(results.len());
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(sketch) => out.push(sketch),
                Err(err) => {
                    warn!(
                        index,
                        error = %err,
                        elapsed_micros = start.elapsed().as_micros(),
                        "mhfp.batch_failed"
                    );
                    return Err(SketchError::Batch {
                        index,
                        source: Box::new(err),
                    });
                }
            }
        }

        debug!(
            items = out.len(),
            elapsed_micros = start.elapsed().as_micros(),
            "mhfp.batch_encoded"
        );
        Ok(out)
    }
}

impl Default for MinHashEncoder {
    /// 2048 permutations seeded with 42.
    fn default() -> Self {
        Self::build(EncoderConfig::default())
    }
}

fn check_length(length: usize) -> Result<()> {
    if length == 0 {
        return Err(SketchError::invalid("length", length));
    }
    Ok(())
}
