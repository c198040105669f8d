//! Error types for proof construction and verification

use thiserror::Error;

/// Main error type for proving, verifying and (de)serialization.
///
/// A *false statement* is not an error: verifiers return `Ok(false)` for a
/// proof that is well-formed but does not verify, and reserve `Err(_)` for
/// malformed inputs and aborted proof attempts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    /// Vector operation on operands of unequal length
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A Fiat-Shamir challenge landed on a forbidden value (zero)
    #[error("Fiat-Shamir challenge degenerated to zero; retry with fresh randomness")]
    DegenerateChallenge,

    /// Malformed point or scalar encoding, or a framing violation
    #[error("malformed encoding: {0}")]
    Decode(String),

    /// Structurally invalid proof object
    #[error("invalid proof structure: {0}")]
    InvalidProof(String),

    /// Invalid parameters provided by the caller
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// Value does not fit the requested bit width
    #[error("value {value} is not in range [0, 2^{bits})")]
    ValueOutOfRange { value: u64, bits: usize },
}

/// Result type for proof operations
pub type ProofResult<T> = Result<T, ProofError>;
