//! Error types produced by the sketching core.
//!
//! Every failure is local and synchronous: parameters and inputs are checked
//! before any hashing happens, so there is no partial output and nothing to
//! retry. Errors are cloneable and comparable so tests can match on them.
//!
//! | Error | When |
//! |-------|------|
//! | [`ConfigurationMismatch`](SketchError::ConfigurationMismatch) | Sketches of different length, or fingerprints from encoders with a different `(seed, n)` |
//! | [`EmptyInput`](SketchError::EmptyInput) | A token set has no tokens |
//! | [`InvalidParameter`](SketchError::InvalidParameter) | A count, length or radius is out of range |
//! | [`Batch`](SketchError::Batch) | One item of a batch failed |
//!
//! Raw `Vec<u32>` sketches carry no configuration, so comparing sketches from
//! encoders with a different seed but equal length cannot be detected. Use
//! [`DenseFingerprint`](crate::DenseFingerprint) when that check matters.

use thiserror::Error;

/// Errors returned by encoders and comparators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SketchError {
    #[error("configuration mismatch: {left} vs {right}")]
    ConfigurationMismatch { left: String, right: String },

    #[error("token set is empty")]
    EmptyInput,

    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: String },

    #[error("batch item {index} failed: {source}")]
    Batch {
        index: usize,
        #[source]
        source: Box<SketchError>,
    },
}

impl SketchError {
    pub(crate) fn length_mismatch(left: usize, right: usize) -> Self {
        SketchError::ConfigurationMismatch {
            left: format!("len={left}"),
            right: format!("len={right}"),
        }
    }

    pub(crate) fn invalid(name: &'static str, value: impl ToString) -> Self {
        SketchError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }

    /// Unwrap a [`SketchError::Batch`] to the error of the failing item.
    pub fn root_cause(&self) -> &SketchError {
        match self {
            SketchError::Batch { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SketchError>;
