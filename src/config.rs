use crate::error::{Error, Result};

/// Distance below which two texts count as near-duplicates.
pub const DEFAULT_THRESHOLD: u32 = 3;

/// Tuning knobs for [`crate::Deduplicator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// `is_duplicate` is true iff distance < threshold.
    pub threshold: u32,
    /// Batches with at least this many pairs are split across the rayon pool.
    pub parallel_batch_min: usize,
    /// Texts with at least this many tokens are hashed across the rayon pool.
    pub parallel_token_min: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            threshold: DEFAULT_THRESHOLD,
            parallel_batch_min: 1 << 16,
            parallel_token_min: 1 << 14,
        }
    }
}

impl Config {
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel_batch_min(mut self, n: usize) -> Self {
        self.parallel_batch_min = n;
        self
    }

    pub fn with_parallel_token_min(mut self, n: usize) -> Self {
        self.parallel_token_min = n;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.parallel_batch_min == 0 {
            return Err(Error::InvalidArgument(
                "parallel_batch_min must be >= 1".into(),
            ));
        }
        if self.parallel_token_min == 0 {
            return Err(Error::InvalidArgument(
                "parallel_token_min must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
