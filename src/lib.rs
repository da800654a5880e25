//! 64-bit SimHash fingerprints for near-duplicate text detection.
//!
//! Text is split on space, `\n`, `\t` and `\r`, each token is hashed with
//! FNV-1a, and the per-bit votes collapse into a `u64`. Similar texts land a
//! small Hamming distance apart.
//!
//! ```
//! use simprint::{generate_fingerprint, hamming_distance, is_duplicate};
//!
//! let a = generate_fingerprint("the quick brown fox");
//! let b = generate_fingerprint("fox brown quick the");
//! assert_eq!(hamming_distance(a, b), 0);
//! assert!(is_duplicate("the quick brown fox", "the quick brown fox"));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod hamming;
pub mod simhash;
pub mod text;

// Re-export common types so users can `use simprint::prelude::*;`
pub mod prelude {
    pub use crate::fingerprint::{
        Deduplicator, Fingerprint, generate_fingerprint, is_duplicate, is_duplicate_with,
    };
    pub use crate::hamming::{batch_distance, hamming_distance};
    pub use crate::simhash::{
        Fnv1aHasher64, SimHash, SimHashBits, SimHasher, SimSipHasher64, TextSimHash,
        Xxh3Hasher128, Xxh3Hasher64,
    };
}

pub use config::Config;
pub use error::{Error, Result};
pub use fingerprint::{
    Deduplicator, Fingerprint, generate_fingerprint, is_duplicate, is_duplicate_with,
};
pub use hamming::{
    batch_distance, batch_distance_into, batch_distance_par, hamming_distance, log_simd_support,
    simd_level,
};
pub use simhash::{
    Fnv1aHasher64, SimHash, SimHashBits, SimHasher, SimSipHasher64, TextSimHash, Xxh3Hasher128,
    Xxh3Hasher64,
};
