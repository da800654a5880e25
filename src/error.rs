/// Errors surfaced at the boundary of the fingerprinting API.
///
/// Generation and scalar distance are total and never produce one of these.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller passed a value of the wrong shape (mismatched batch
    /// lengths, bad config value).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A hex-encoded fingerprint did not parse as a 64-bit value.
    #[error("cannot decode fingerprint {input:?}: {reason}")]
    Decode {
        /// The offending input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
