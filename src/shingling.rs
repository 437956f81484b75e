//! Shingling collaborator interface.
//!
//! Turning a domain object into tokens is not part of the sketching core.
//! The core only consumes a [`Shingler`]: something that, given an object
//! and [`ShinglingParams`], returns an ordered sequence of token strings.
//! Duplicates and empty outputs are allowed; an empty output surfaces as
//! [`SketchError::EmptyInput`](crate::SketchError::EmptyInput) when encoded.
//!
//! [`NgramShingler`] is a small implementation over whitespace-separated
//! text, useful for tests and for callers whose objects already are token
//! streams.

use crate::config::ShinglingParams;

/// Producer of token strings for a domain object.
///
/// Implementations must be deterministic: the same object and parameters
/// always yield the same tokens.
pub trait Shingler: Send + Sync {
    /// Object the shingler extracts tokens from.
    type Object: Sync;

    /// Extract the shingling of `object`.
    fn extract(&self, object: &Self::Object, params: &ShinglingParams) -> Vec<String>;
}

/// Contiguous word n-grams over whitespace-separated text.
///
/// Radius `r` emits every window of `r + 1` words, for each radius in
/// `radius_min..=radius_max`. With `canonical_form` words are lowercased.
/// `include_rings` and `isomeric` have no meaning for plain text and are
/// ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct NgramShingler;

impl NgramShingler {
    pub fn new() -> Self {
        Self
    }
}

impl Shingler for NgramShingler {
    type Object = String;

    fn extract(&self, object: &String, params: &ShinglingParams) -> Vec<String> {
        let words: Vec<String> = object
            .split_whitespace()
            .map(|w| {
                if params.canonical_form {
                    w.to_lowercase()
                } else {
                    w.to_string()
                }
            })
            .collect();

        let mut out = Vec::new();
        for radius in params.radius_min..=params.radius_max {
            let width = usize::from(radius) + 1;
            if width > words.len() {
                break;
            }
            out.extend(words.windows(width).map(|window| window.join(" ")));
        }
        out
    }
}
