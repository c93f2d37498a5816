//! The vendor-neutral circuit IR.

use crate::idset::AtomSet;
use crate::instruction::Instruction;
use crate::parameter::Symbol;
use crate::qubit::{Clbit, Qubit};
use crate::vendor::Vendor;
use serde::Serialize;

/// A circuit lifted out of its vendor framework.
///
/// Built once by a [`CircuitBuilder`](crate::CircuitBuilder) and read-only
/// afterwards. Every atom an instruction references belongs to the
/// corresponding set.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitIr {
    source: Vendor,
    qubits: AtomSet<Qubit>,
    clbits: AtomSet<Clbit>,
    parameters: AtomSet<Symbol>,
    instructions: Vec<Instruction>,
}

impl CircuitIr {
    pub(crate) fn new(
        source: Vendor,
        qubits: AtomSet<Qubit>,
        clbits: AtomSet<Clbit>,
        parameters: AtomSet<Symbol>,
        instructions: Vec<Instruction>,
    ) -> Self {
        Self {
            source,
            qubits,
            clbits,
            parameters,
            instructions,
        }
    }

    /// Vendor the circuit was built from.
    pub fn source(&self) -> Vendor {
        self.source
    }

    /// Qubit set, in declaration order.
    pub fn qubits(&self) -> &AtomSet<Qubit> {
        &self.qubits
    }

    /// Classical bit set, in declaration order.
    pub fn clbits(&self) -> &AtomSet<Clbit> {
        &self.clbits
    }

    /// Free parameters, in first-use order.
    pub fn parameters(&self) -> &AtomSet<Symbol> {
        &self.parameters
    }

    /// Instructions in program order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.clbits.len()
    }

    /// Number of free parameters.
    pub fn num_parameters(&self) -> usize {
        self.parameters.len()
    }

    /// Whether the circuit has free parameters.
    pub fn is_parameterized(&self) -> bool {
        !self.parameters.is_empty()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Serialize the IR to JSON for inspection.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::CircuitBuilder;
    use crate::gate::GateName;
    use crate::idset::{Atom, NativeAtom};
    use crate::parameter::NativeValue;
    use crate::vendor::Vendor;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Key(&'static str);

    impl NativeAtom for Key {
        fn label(&self) -> String {
            self.0.to_string()
        }
    }

    type Builder = CircuitBuilder<Key, Key, Key>;

    #[test]
    fn test_empty_circuit() {
        let ir = Builder::new(Vendor::Braket).finish();
        assert_eq!(ir.source(), Vendor::Braket);
        assert!(ir.is_empty());
        assert_eq!(ir.len(), 0);
        assert_eq!(ir.num_qubits(), 0);
        assert_eq!(ir.num_clbits(), 0);
        assert!(!ir.is_parameterized());
    }

    #[test]
    fn test_counts_and_parameters() {
        let mut b = Builder::new(Vendor::Cirq);
        b.declare_qubits(&[Key("a"), Key("b"), Key("idle")]);
        b.push(GateName::RX, &[Key("a")], &[], &[NativeValue::Symbol(Key("theta"))])
            .unwrap();
        b.push(GateName::CX, &[Key("a"), Key("b")], &[], &[]).unwrap();
        b.push(GateName::Measure, &[Key("b")], &[Key("m")], &[]).unwrap();
        let ir = b.finish();

        assert!(!ir.is_empty());
        assert_eq!(ir.len(), 3);
        assert_eq!(ir.num_qubits(), 3);
        assert_eq!(ir.num_clbits(), 1);
        assert_eq!(ir.num_parameters(), 1);
        assert!(ir.is_parameterized());
        assert_eq!(ir.parameters().get(0).map(Atom::label), Some("theta"));
        for inst in ir.instructions() {
            assert!(inst.qubits().iter().all(|q| ir.qubits().contains(q)));
        }
    }

    #[test]
    fn test_to_json() {
        let mut b = Builder::new(Vendor::Qiskit);
        b.push(GateName::H, &[Key("q0")], &[], &[]).unwrap();
        b.push(GateName::RZ, &[Key("q0")], &[], &[NativeValue::Float(0.25)])
            .unwrap();
        let json = b.finish().to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["source"], "qiskit");
        assert_eq!(value["instructions"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["instructions"][0]["name"], "H");
        assert_eq!(value["qubits"]["atoms"][0]["label"], "q0");
    }
}
