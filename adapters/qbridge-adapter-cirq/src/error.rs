//! Error types for the Cirq circuit model.

use qbridge_ir::{PackageError, Vendor};
use thiserror::Error;

/// Result type for Cirq model operations.
pub type CirqResult<T> = Result<T, CirqError>;

/// Errors raised while building a Cirq circuit.
#[derive(Debug, Error)]
pub enum CirqError {
    /// An operation names the same qubit twice.
    #[error("Duplicate qubit {qubit} in {gate}")]
    DuplicateQubit {
        /// Gate name.
        gate: String,
        /// The repeated qubit.
        qubit: String,
    },

    /// Wrong number of qubit operands.
    #[error("{gate} acts on {expected} qubits, got {got}")]
    QubitArity {
        /// Gate name.
        gate: String,
        /// Required qubit count.
        expected: usize,
        /// Supplied qubit count.
        got: usize,
    },

    /// Wrong number of parameters.
    #[error("{gate} takes {expected} parameters, got {got}")]
    ParamArity {
        /// Gate name.
        gate: String,
        /// Required parameter count.
        expected: usize,
        /// Supplied parameter count.
        got: usize,
    },

    /// A measurement has no key.
    #[error("Measurement on {0} needs a non-empty key")]
    MissingKey(String),

    /// A parameter value does not fit the gate.
    #[error("Invalid parameter for {gate}: {reason}")]
    InvalidParameter {
        /// Gate name.
        gate: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An IR qubit index does not fit a line qubit.
    #[error("Qubit index {0} does not fit a LineQubit")]
    QubitIndex(usize),
}

impl From<CirqError> for PackageError {
    fn from(e: CirqError) -> Self {
        PackageError::Native {
            vendor: Vendor::Cirq,
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_qubit_display() {
        let err = CirqError::DuplicateQubit {
            gate: "CNOT".into(),
            qubit: "q(0)".into(),
        };
        assert_eq!(err.to_string(), "Duplicate qubit q(0) in CNOT");
    }

    #[test]
    fn test_to_package_error() {
        let err: PackageError = CirqError::MissingKey("q(1)".into()).into();
        assert!(matches!(err, PackageError::Native { vendor: Vendor::Cirq, .. }));
    }
}
