//! Error types for circuit construction.

use thiserror::Error;
use unravel_ir::IrError;

/// Errors raised while building algorithm circuits.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AlgoError {
    /// A constant oracle can only output 0 or 1.
    #[error("Invalid function output {0}: a constant oracle outputs 0 or 1")]
    InvalidOracleOutput(u8),

    /// A bit-string does not match the qubit count.
    #[error("Invalid length of {role} string: expected {expected} bits, got {got}")]
    BitStringLength {
        /// What the string is used for, e.g. "X gate".
        role: &'static str,
        /// Required length (the qubit count).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// A bit-string holds something other than `0` and `1`.
    #[error("Invalid character '{found}' at position {position}: bit-strings only contain 0 and 1")]
    NonBinary {
        /// Zero-based character position.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// A CX pattern without any set bit describes a constant function.
    #[error("A balanced oracle needs at least one CX gate")]
    EmptyCxPattern,

    /// Qubit count outside the range an algorithm supports.
    #[error("{algorithm} supports {min} to {max} qubits, got {got}")]
    QubitCountOutOfRange {
        /// Algorithm title.
        algorithm: &'static str,
        /// Requested qubit count.
        got: u32,
        /// Smallest supported count.
        min: u32,
        /// Largest supported count.
        max: u32,
    },

    /// A selector value that names nothing.
    #[error("Unknown {what} '{value}'")]
    UnknownSelection {
        /// Which selector, e.g. "algorithm".
        what: &'static str,
        /// The rejected value.
        value: String,
    },

    /// Error from the circuit IR.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for circuit construction.
pub type AlgoResult<T> = Result<T, AlgoError>;
