use thiserror::Error;

/// Result alias for datagen operations.
pub type DatagenResult<T> = Result<T, DatagenError>;

/// Errors from the provider's own bookkeeping.
///
/// Per-output write failures are not here: those are logged and isolated
/// so the rest of the batch proceeds.
#[derive(Debug, Error)]
pub enum DatagenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid content digest {input:?}")]
    InvalidDigest { input: String },

    #[error("malformed cache line {number}: {line:?}")]
    InvalidCacheLine { number: usize, line: String },
}
