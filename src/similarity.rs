//! Similarity estimation over dense sketches.
//!
//! The fraction of slots on which two MinHash sketches agree is an unbiased
//! estimate of the Jaccard similarity of the underlying token sets. This is a
//! similarity, not a distance; [`distance`] returns `1 - similarity`.
//!
//! Raw sketches carry no configuration. Comparing sketches from encoders with
//! a different seed but the same length yields a meaningless number; that is
//! the caller's responsibility (or use [`DenseFingerprint`](crate::DenseFingerprint)).

use crate::error::{Result, SketchError};

/// Estimated Jaccard similarity, `matching slots / n`, in `[0, 1]`.
pub fn similarity(a: &[u32], b: &[u32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(SketchError::length_mismatch(a.len(), b.len()));
    }
    if a.is_empty() {
        return Err(SketchError::invalid("sketch_length", 0));
    }
    let matches = a.iter().zip(b).filter(|(x, y)| x == y).count();
    Ok(matches as f64 / a.len() as f64)
}

/// Estimated Jaccard distance, `1 - similarity(a, b)`.
pub fn distance(a: &[u32], b: &[u32]) -> Result<f64> {
    similarity(a, b).map(|s| 1.0 - s)
}
