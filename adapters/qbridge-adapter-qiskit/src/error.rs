//! Error types for the Qiskit circuit model.

use qbridge_ir::{PackageError, Vendor};
use thiserror::Error;

/// Result type for Qiskit model operations.
pub type QiskitResult<T> = Result<T, QiskitError>;

/// Errors raised while building a Qiskit circuit.
#[derive(Debug, Error)]
pub enum QiskitError {
    /// A register name is already taken.
    #[error("Register name '{0}' already exists in circuit")]
    DuplicateRegister(String),

    /// A bit refers to a register the circuit does not have.
    #[error("Register '{0}' is not part of this circuit")]
    UnknownRegister(String),

    /// A bit index is past the end of its register or circuit.
    #[error("{kind} index {index} out of range for size {size}")]
    BitOutOfRange {
        /// "qubit" or "clbit".
        kind: &'static str,
        /// Requested index.
        index: usize,
        /// Number of available bits.
        size: usize,
    },

    /// Wrong number of qubit operands.
    #[error("{gate} acts on {expected} qubits, got {got}")]
    QubitArity {
        /// Gate class name.
        gate: String,
        /// Required qubit count.
        expected: usize,
        /// Supplied qubit count.
        got: usize,
    },

    /// Wrong number of parameters.
    #[error("{gate} takes {expected} parameters, got {got}")]
    ParamArity {
        /// Gate class name.
        gate: String,
        /// Required parameter count.
        expected: usize,
        /// Supplied parameter count.
        got: usize,
    },

    /// Measurement qubits and clbits do not pair up.
    #[error("Measure needs one clbit per qubit, got {qubits} qubits and {clbits} clbits")]
    MeasureShape {
        /// Qubit operand count.
        qubits: usize,
        /// Clbit operand count.
        clbits: usize,
    },

    /// A parameter value does not fit the gate.
    #[error("Invalid parameter for {gate}: {reason}")]
    InvalidParameter {
        /// Gate class name.
        gate: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl From<QiskitError> for PackageError {
    fn from(e: QiskitError) -> Self {
        PackageError::Native {
            vendor: Vendor::Qiskit,
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_out_of_range_display() {
        let err = QiskitError::BitOutOfRange {
            kind: "qubit",
            index: 5,
            size: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_to_package_error() {
        let err: PackageError = QiskitError::UnknownRegister("anc".into()).into();
        assert!(matches!(
            err,
            PackageError::Native { vendor: Vendor::Qiskit, ref message } if message.contains("anc")
        ));
    }
}
