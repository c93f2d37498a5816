//! Error types for the IR crate.

use crate::gate::GateName;
use crate::vendor::Vendor;
use thiserror::Error;

/// Structural errors raised while building or querying the IR.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A parameter value is neither a symbol, a number, nor a homogeneous list.
    #[error("Invalid parameter shape: {0}")]
    InvalidParameterShape(String),

    /// Gate requires a different number of qubits.
    #[error("Gate '{gate}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// The gate being constructed.
        gate: GateName,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// Gate requires a different number of parameters.
    #[error("Gate '{gate}' takes {expected} parameters, got {got}")]
    ParameterCountMismatch {
        /// The gate being constructed.
        gate: GateName,
        /// Expected number of parameters.
        expected: usize,
        /// Actual number of parameters provided.
        got: usize,
    },

    /// Gate was given the wrong number of classical bits.
    #[error("Gate '{gate}' expects {expected} classical bits, got {got}")]
    ClbitCountMismatch {
        /// The gate being constructed.
        gate: GateName,
        /// Expected number of classical bits.
        expected: usize,
        /// Actual number of classical bits provided.
        got: usize,
    },

    /// Unitary matrix is not `2^n x 2^n` for its operand count.
    #[error("Unitary on {qubits} qubits needs {expected} entries, got {len}")]
    MatrixShape {
        /// Number of qubit operands.
        qubits: usize,
        /// Number of entries a square matrix of that width has.
        expected: usize,
        /// Number of matrix entries supplied.
        len: usize,
    },

    /// The same qubit appears twice in one operation.
    #[error("Duplicate qubit {index} in gate '{gate}'")]
    DuplicateQubit {
        /// The gate being constructed.
        gate: GateName,
        /// Index of the repeated qubit.
        index: u32,
    },

    /// An atom was looked up in a set that did not create it.
    #[error("{kind} atom belongs to a different circuit")]
    ForeignAtom {
        /// Atom kind ("qubit", "clbit", "parameter").
        kind: &'static str,
    },
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;

/// Errors raised while moving a circuit between vendor frameworks.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PackageError {
    /// The requested target is not a known vendor.
    #[error("Cannot transpile {origin} circuit to unsupported target '{target}'")]
    UnsupportedTarget {
        /// Vendor of the source circuit.
        origin: Vendor,
        /// The name that was requested.
        target: String,
    },

    /// The target vendor has no native counterpart for a gate.
    #[error("Gate '{gate}' from {origin} circuit has no {target} equivalent")]
    UnsupportedGate {
        /// The offending canonical gate.
        gate: GateName,
        /// Vendor of the source circuit.
        origin: Vendor,
        /// Vendor being emitted.
        target: Vendor,
    },

    /// A native gate type has no canonical name.
    #[error("{vendor} gate '{gate_type}' has no canonical name")]
    UnmappedGate {
        /// Vendor the gate belongs to.
        vendor: Vendor,
        /// The native gate type.
        gate_type: String,
    },

    /// The target vendor lacks a circuit-level capability.
    #[error("{vendor} does not support {feature}")]
    UnsupportedFeature {
        /// Vendor lacking the capability.
        vendor: Vendor,
        /// Description of the missing capability.
        feature: &'static str,
    },

    /// The vendor object model rejected a construction.
    #[error("{vendor} circuit error: {message}")]
    Native {
        /// The vendor whose model failed.
        vendor: Vendor,
        /// Adapter-provided description.
        message: String,
    },

    /// IR construction failed.
    #[error(transparent)]
    Ir(#[from] IrError),
}

/// Result type for transpilation.
pub type PackageResult<T> = Result<T, PackageError>;
