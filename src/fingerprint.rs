//! Text-level entry points over the default FNV-1a SimHash.

use crate::config::{Config, DEFAULT_THRESHOLD};
use crate::error::Result;
use crate::hamming::{batch_distance_par, hamming_distance};
use crate::simhash::TextSimHash;
use crate::text::whitespace_split;

/// A 64-bit SimHash signature.
pub type Fingerprint = u64;

/// Fingerprint of `text`. Total: any byte sequence, including invalid
/// UTF-8, gives a defined value; empty or delimiter-only input gives 0.
pub fn generate_fingerprint(text: impl AsRef<[u8]>) -> Fingerprint {
    TextSimHash::default().fingerprint(text.as_ref())
}

/// Near-duplicate test with the default threshold of 3.
pub fn is_duplicate(text_a: impl AsRef<[u8]>, text_b: impl AsRef<[u8]>) -> bool {
    is_duplicate_with(text_a, text_b, DEFAULT_THRESHOLD)
}

/// True iff the two fingerprints differ in fewer than `threshold` bits.
pub fn is_duplicate_with(
    text_a: impl AsRef<[u8]>,
    text_b: impl AsRef<[u8]>,
    threshold: u32,
) -> bool {
    hamming_distance(generate_fingerprint(text_a), generate_fingerprint(text_b)) < threshold
}

/// Runs the same operations with a fixed [`Config`].
#[derive(Default)]
pub struct Deduplicator {
    config: Config,
    sim_hash: TextSimHash,
}

impl Deduplicator {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Deduplicator {
            config,
            sim_hash: TextSimHash::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Same value as [`generate_fingerprint`]; long texts are hashed on the
    /// rayon pool.
    pub fn fingerprint(&self, text: impl AsRef<[u8]>) -> Fingerprint {
        let text = text.as_ref();
        // cheap upper bound before collecting tokens
        if text.len().div_ceil(2) < self.config.parallel_token_min {
            return self.sim_hash.fingerprint(text);
        }
        let tokens: Vec<&[u8]> = whitespace_split(text).collect();
        if tokens.len() < self.config.parallel_token_min {
            return self.sim_hash.create_signature(tokens);
        }
        log::debug!("hashing {} tokens on the rayon pool", tokens.len());
        self.sim_hash.create_signature_par(&tokens)
    }

    pub fn distance(&self, a: Fingerprint, b: Fingerprint) -> u32 {
        hamming_distance(a, b)
    }

    pub fn is_duplicate(&self, text_a: impl AsRef<[u8]>, text_b: impl AsRef<[u8]>) -> bool {
        self.distance(self.fingerprint(text_a), self.fingerprint(text_b)) < self.config.threshold
    }

    pub fn batch_distance(&self, a: &[Fingerprint], b: &[Fingerprint]) -> Result<Vec<u32>> {
        batch_distance_par(a, b, self.config.parallel_batch_min)
    }
}
