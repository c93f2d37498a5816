//! Error types for QASM emission.

use thiserror::Error;

/// Errors that can occur while emitting OpenQASM.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QasmError {
    /// Only OpenQASM 2.0 output is supported.
    #[error("Unsupported OpenQASM version '{0}', expected 2.0")]
    UnsupportedVersion(String),

    /// Angles are printed with 1 to [`crate::MAX_PRECISION`] significant digits.
    #[error("QASM precision must be between 1 and 17, got {0}")]
    InvalidPrecision(usize),

    /// An operation uses a qubit that is not part of the output ordering.
    #[error("Operation '{operation}' acts on qubit '{qubit}' which is not in the qubit ordering")]
    UnknownQubit {
        /// The offending operation.
        operation: String,
        /// Label of the missing qubit.
        qubit: String,
    },

    /// A symbolic parameter reached the emitter.
    #[error("Cannot output operation as QASM: '{operation}' has unbound parameter '{parameter}'")]
    UnboundParameter {
        /// The offending operation.
        operation: String,
        /// Name of the free parameter.
        parameter: String,
    },

    /// An angle, given or produced by decomposition, is NaN or infinite.
    #[error("Cannot output operation as QASM: '{operation}' has non-finite angle {value}")]
    NonFiniteAngle {
        /// The offending operation.
        operation: String,
        /// The angle in radians.
        value: f64,
    },

    /// No decomposition or fallback can express the operation.
    #[error("Cannot output operation as QASM: {operation}")]
    CannotExpress {
        /// The offending operation.
        operation: String,
    },

    /// An operation is malformed for its gate.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Moving the finished file into place failed.
    #[error("Failed to persist QASM file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

/// Result type for QASM emission.
pub type QasmResult<T> = Result<T, QasmError>;
