use thiserror::Error;

/// Errors reported by hash objects and sponge engines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// A squeeze was requested with a negative output length.
    #[error("negative digest length")]
    NegativeLength,

    /// A squeeze was requested with an output length of at least
    /// [`MAX_XOF_LENGTH`](crate::MAX_XOF_LENGTH) bytes.
    #[error("digest length is too large")]
    LengthOverflow,

    /// The output mode does not exist for this variant, e.g. a fixed
    /// `digest()` on a SHAKE object.
    #[error("{operation} is not supported by {name}")]
    WrongFamily {
        name: &'static str,
        operation: &'static str,
    },

    #[error("unsupported hash algorithm {0}")]
    UnsupportedAlgorithm(String),

    /// The engine state or an output buffer could not be allocated.
    #[error("out of memory")]
    OutOfMemory,

    /// The engine is in an inconsistent state. Not recoverable.
    #[error("sponge engine fault: {0}")]
    EngineFault(String),

    /// The engine state was already released.
    #[error("hash object has been released")]
    Released,
}

/// Result type for hash object operations.
pub type Result<T> = std::result::Result<T, HashError>;
