//! Token hashing.
//!
//! String tokens are mapped into the 32-bit raw hash domain with FNV-1a:
//!
//! ```text
//! h = 0x811C9DC5
//! for byte in token: h = (h ^ byte) * 0x01000193   (mod 2^32)
//! ```
//!
//! The hash is unseeded. Encoders with different seeds still agree on the raw
//! hash of every token; only the permutation family differs between them.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Hash a byte string with 32-bit FNV-1a.
#[inline]
pub fn fnv1a_32(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |h, &byte| {
        (h ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Hash a single string token.
#[inline]
pub fn hash_token<S: AsRef<str>>(token: S) -> u32 {
    fnv1a_32(token.as_ref().as_bytes())
}

/// Hash every token, keeping order and duplicates.
pub fn hash_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<u32> {
    let mut out = Vec::with_capacity(tokens.len());
    out.extend(tokens.iter().map(hash_token));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fnv1a_known_vectors() {
        assert_eq!(fnv1a_32(b""), 0x811C_9DC5);
        assert_eq!(fnv1a_32(b"a"), 0xE40C_292C);
        assert_eq!(fnv1a_32(b"abc"), 0x1A47_E90B);
        assert_eq!(fnv1a_32(b"de"), 0x5C1C_CEA2);
        assert_eq!(fnv1a_32(b"foobar"), 0xBF9C_F968);
    }

    #[test]
    fn hash_token_matches_bytes() {
        assert_eq!(hash_token("abc"), fnv1a_32(b"abc"));
        assert_eq!(hash_token(String::from("abc")), fnv1a_32(b"abc"));
    }

    #[test]
    fn hash_is_order_sensitive() {
        assert_ne!(hash_token("ab"), hash_token("ba"));
    }

    #[test]
    fn hash_tokens_keeps_order_and_duplicates() {
        let hashes = hash_tokens(&["x", "y", "x"]);
        assert_eq!(hashes.len(), 3);
        assert_eq!(hashes[0], hashes[2]);
        assert_eq!(hashes[1], hash_token("y"));
    }

    #[test]
    fn hash_tokens_empty() {
        let tokens: [&str; 0] = [];
        assert!(hash_tokens(&tokens).is_empty());
    }

    #[test]
    fn hash_handles_non_ascii() {
        // Multi-byte UTF-8 is hashed byte by byte.
        assert_eq!(hash_token("é"), fnv1a_32(&[0xC3, 0xA9]));
    }
}
