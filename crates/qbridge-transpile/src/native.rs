//! Vendor-native circuits handled by the wrapper.

use qbridge_adapter_braket as braket;
use qbridge_adapter_cirq as cirq;
use qbridge_adapter_qiskit as qiskit;
use qbridge_ir::{CircuitIr, PackageResult, Vendor};
use serde::{Deserialize, Serialize};

/// A circuit in one vendor's object model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "vendor", content = "circuit", rename_all = "lowercase")]
pub enum NativeCircuit {
    /// `qiskit.QuantumCircuit`.
    Qiskit(qiskit::QuantumCircuit),
    /// `cirq.Circuit`.
    Cirq(cirq::Circuit),
    /// `braket.circuits.Circuit`.
    Braket(braket::Circuit),
}

impl NativeCircuit {
    /// The vendor whose model this is.
    pub fn vendor(&self) -> Vendor {
        match self {
            NativeCircuit::Qiskit(_) => Vendor::Qiskit,
            NativeCircuit::Cirq(_) => Vendor::Cirq,
            NativeCircuit::Braket(_) => Vendor::Braket,
        }
    }

    /// Build the circuit IR.
    pub fn to_ir(&self) -> PackageResult<CircuitIr> {
        match self {
            NativeCircuit::Qiskit(c) => qiskit::to_ir(c),
            NativeCircuit::Cirq(c) => cirq::to_ir(c),
            NativeCircuit::Braket(c) => braket::to_ir(c),
        }
    }

    /// Emit `ir` in the model of `target`.
    pub fn from_ir(ir: &CircuitIr, target: Vendor) -> PackageResult<Self> {
        Ok(match target {
            Vendor::Qiskit => NativeCircuit::Qiskit(qiskit::from_ir(ir)?),
            Vendor::Cirq => NativeCircuit::Cirq(cirq::from_ir(ir)?),
            Vendor::Braket => NativeCircuit::Braket(braket::from_ir(ir)?),
        })
    }

    /// Number of native operations.
    pub fn len(&self) -> usize {
        match self {
            NativeCircuit::Qiskit(c) => c.len(),
            NativeCircuit::Cirq(c) => c.len(),
            NativeCircuit::Braket(c) => c.len(),
        }
    }

    /// Whether the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The Qiskit circuit, if this is one.
    pub fn as_qiskit(&self) -> Option<&qiskit::QuantumCircuit> {
        match self {
            NativeCircuit::Qiskit(c) => Some(c),
            _ => None,
        }
    }

    /// The Cirq circuit, if this is one.
    pub fn as_cirq(&self) -> Option<&cirq::Circuit> {
        match self {
            NativeCircuit::Cirq(c) => Some(c),
            _ => None,
        }
    }

    /// The Braket circuit, if this is one.
    pub fn as_braket(&self) -> Option<&braket::Circuit> {
        match self {
            NativeCircuit::Braket(c) => Some(c),
            _ => None,
        }
    }
}

impl From<qiskit::QuantumCircuit> for NativeCircuit {
    fn from(c: qiskit::QuantumCircuit) -> Self {
        NativeCircuit::Qiskit(c)
    }
}

impl From<cirq::Circuit> for NativeCircuit {
    fn from(c: cirq::Circuit) -> Self {
        NativeCircuit::Cirq(c)
    }
}

impl From<braket::Circuit> for NativeCircuit {
    fn from(c: braket::Circuit) -> Self {
        NativeCircuit::Braket(c)
    }
}
