//! Error types for the Braket circuit model.

use qbridge_ir::{PackageError, Vendor};
use thiserror::Error;

/// Result type for Braket model operations.
pub type BraketResult<T> = Result<T, BraketError>;

/// Errors raised while building a Braket circuit.
#[derive(Debug, Error)]
pub enum BraketError {
    /// An instruction targets the same qubit twice.
    #[error("Duplicate target {qubit} in {gate}")]
    DuplicateTarget {
        /// Gate name.
        gate: String,
        /// The repeated qubit.
        qubit: u32,
    },

    /// Wrong number of targets.
    #[error("{gate} acts on {expected} qubits, got {got}")]
    QubitArity {
        /// Gate name.
        gate: String,
        /// Required qubit count.
        expected: usize,
        /// Supplied qubit count.
        got: usize,
    },

    /// Wrong number of angles.
    #[error("{gate} takes {expected} angles, got {got}")]
    ParamArity {
        /// Gate name.
        gate: String,
        /// Required angle count.
        expected: usize,
        /// Supplied angle count.
        got: usize,
    },

    /// A unitary matrix is missing or does not fit its targets.
    #[error("Invalid unitary matrix: {0}")]
    InvalidMatrix(String),

    /// An IR qubit index does not fit a Braket qubit.
    #[error("Qubit index {0} out of range")]
    QubitIndex(usize),

    /// A parameter value is not a real angle.
    #[error("Invalid parameter for {gate}: {reason}")]
    InvalidParameter {
        /// Gate name.
        gate: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<BraketError> for PackageError {
    fn from(e: BraketError) -> Self {
        PackageError::Native {
            vendor: Vendor::Braket,
            message: e.to_string(),
        }
    }
}
