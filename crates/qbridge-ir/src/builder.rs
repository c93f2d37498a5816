//! Incremental construction of a [`CircuitIr`] from native operations.

use crate::circuit::CircuitIr;
use crate::error::IrResult;
use crate::gate::GateName;
use crate::idset::{IdentifierSet, NativeAtom};
use crate::instruction::Instruction;
use crate::parameter::{NativeValue, ParameterSet};
use crate::qubit::{Clbit, Qubit};
use crate::vendor::Vendor;

/// Builds the IR of one native circuit.
///
/// `Kq`, `Kc` and `Kp` are the vendor's native qubit, classical bit and
/// symbol types. Adapters declare the circuit's atoms first so indices follow
/// declaration order, then push operations in program order.
#[derive(Debug)]
pub struct CircuitBuilder<Kq, Kc, Kp> {
    source: Vendor,
    qubits: IdentifierSet<Kq, Qubit>,
    clbits: IdentifierSet<Kc, Clbit>,
    parameters: ParameterSet<Kp>,
    instructions: Vec<Instruction>,
}

impl<Kq: NativeAtom, Kc: NativeAtom, Kp: NativeAtom> CircuitBuilder<Kq, Kc, Kp> {
    /// Start building a circuit that came from `source`.
    pub fn new(source: Vendor) -> Self {
        Self {
            source,
            qubits: IdentifierSet::new(),
            clbits: IdentifierSet::new(),
            parameters: ParameterSet::new(),
            instructions: Vec::new(),
        }
    }

    /// Register the circuit's declared qubits.
    pub fn declare_qubits(&mut self, natives: &[Kq]) -> &mut Self {
        self.qubits.get(natives);
        self
    }

    /// Register the circuit's declared classical bits.
    pub fn declare_clbits(&mut self, natives: &[Kc]) -> &mut Self {
        self.clbits.get(natives);
        self
    }

    /// Append one operation.
    ///
    /// A rejected operation leaves the builder unchanged: atoms it would have
    /// registered are forgotten again.
    pub fn push(
        &mut self,
        name: GateName,
        qubits: &[Kq],
        clbits: &[Kc],
        params: &[NativeValue<Kp>],
    ) -> IrResult<()> {
        let marks = (self.qubits.len(), self.clbits.len(), self.parameters.len());
        match self.build(name, qubits, clbits, params) {
            Ok(instruction) => {
                self.instructions.push(instruction);
                Ok(())
            }
            Err(e) => {
                self.qubits.truncate(marks.0);
                self.clbits.truncate(marks.1);
                self.parameters.truncate(marks.2);
                Err(e)
            }
        }
    }

    fn build(
        &mut self,
        name: GateName,
        qubits: &[Kq],
        clbits: &[Kc],
        params: &[NativeValue<Kp>],
    ) -> IrResult<Instruction> {
        let qubits = self.qubits.get(qubits);
        let clbits = self.clbits.get(clbits);
        let params = params
            .iter()
            .map(|p| self.parameters.resolve(p))
            .collect::<IrResult<Vec<_>>>()?;
        Instruction::new(name, qubits, clbits, params)
    }

    /// Number of operations pushed so far.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether no operation has been pushed.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Finish construction.
    pub fn finish(self) -> CircuitIr {
        CircuitIr::new(
            self.source,
            self.qubits.into_atoms(),
            self.clbits.into_atoms(),
            self.parameters.into_atoms(),
            self.instructions,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrError;
    use crate::idset::Atom;
    use num_complex::Complex64;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Key(String);

    impl NativeAtom for Key {
        fn label(&self) -> String {
            self.0.clone()
        }
    }

    fn key(s: &str) -> Key {
        Key(s.to_string())
    }

    type Builder = CircuitBuilder<Key, Key, Key>;

    #[test]
    fn test_bell_circuit() {
        let mut b = Builder::new(Vendor::Qiskit);
        b.declare_qubits(&[key("q0"), key("q1")])
            .declare_clbits(&[key("c0"), key("c1")]);
        b.push(GateName::H, &[key("q0")], &[], &[]).unwrap();
        b.push(GateName::CX, &[key("q0"), key("q1")], &[], &[]).unwrap();
        b.push(GateName::Measure, &[key("q0")], &[key("c0")], &[]).unwrap();
        b.push(GateName::Measure, &[key("q1")], &[key("c1")], &[]).unwrap();
        let ir = b.finish();

        assert_eq!(ir.source(), Vendor::Qiskit);
        assert_eq!(ir.num_qubits(), 2);
        assert_eq!(ir.num_clbits(), 2);
        assert_eq!(ir.len(), 4);
        let cx = &ir.instructions()[1];
        assert_eq!(cx.name(), GateName::CX);
        assert_eq!(cx.qubits()[0].label(), "q0");
        assert_eq!(cx.qubits()[1].index(), 1);
        assert_eq!(ir.instructions()[3].measurement_key(), Some("c1"));
        assert!(ir.qubits().contains(&cx.qubits()[0]));
    }

    #[test]
    fn test_declaration_order_wins() {
        let mut b = Builder::new(Vendor::Cirq);
        b.declare_qubits(&[key("a"), key("b")]);
        b.push(GateName::X, &[key("b")], &[], &[]).unwrap();
        b.push(GateName::X, &[key("z")], &[], &[]).unwrap();
        let ir = b.finish();

        let labels: Vec<_> = ir.qubits().iter().map(|q| q.label().to_string()).collect();
        assert_eq!(labels, ["a", "b", "z"]);
    }

    #[test]
    fn test_shared_parameter() {
        let mut b = Builder::new(Vendor::Qiskit);
        let theta = NativeValue::Symbol(key("theta"));
        b.push(GateName::RX, &[key("q0")], &[], &[theta.clone()]).unwrap();
        b.push(GateName::RZ, &[key("q0")], &[], &[theta]).unwrap();
        b.push(GateName::RY, &[key("q0")], &[], &[NativeValue::Float(0.1)]).unwrap();
        let ir = b.finish();

        assert_eq!(ir.num_parameters(), 1);
        assert!(ir.is_parameterized());
        assert_eq!(ir.instructions()[0].params(), ir.instructions()[1].params());
        assert!(!ir.instructions()[2].is_parameterized());
    }

    #[test]
    fn test_arity_errors() {
        let mut b = Builder::new(Vendor::Qiskit);
        let err = b.push(GateName::CX, &[key("q0")], &[], &[]).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch { expected: 2, got: 1, .. }
        ));

        let err = b.push(GateName::RX, &[key("q0")], &[], &[]).unwrap_err();
        assert!(matches!(err, IrError::ParameterCountMismatch { .. }));

        let err = b
            .push(GateName::CZ, &[key("q0"), key("q0")], &[], &[])
            .unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));

        let err = b
            .push(GateName::Measure, &[key("q0"), key("q1")], &[key("c")], &[])
            .unwrap_err();
        assert!(matches!(err, IrError::ClbitCountMismatch { .. }));
        assert!(b.is_empty());
    }

    #[test]
    fn test_rejected_push_registers_nothing() {
        let mut b = Builder::new(Vendor::Qiskit);
        b.declare_qubits(&[key("q0")]);
        b.push(GateName::H, &[key("q0")], &[], &[]).unwrap();

        b.push(GateName::CX, &[key("q1")], &[], &[]).unwrap_err();
        b.push(GateName::Measure, &[key("q2")], &[key("c0"), key("c1")], &[])
            .unwrap_err();
        b.push(
            GateName::CPhase,
            &[key("q3"), key("q3")],
            &[],
            &[NativeValue::Symbol(key("theta"))],
        )
        .unwrap_err();

        b.push(GateName::X, &[key("q4")], &[], &[]).unwrap();
        let ir = b.finish();
        assert_eq!(ir.len(), 2);
        assert_eq!(ir.num_qubits(), 2);
        assert_eq!(ir.num_clbits(), 0);
        assert_eq!(ir.num_parameters(), 0);
        assert_eq!(ir.instructions()[1].qubits()[0].index(), 1);
        assert_eq!(ir.qubits().get(1).map(|q| q.label()), Some("q4"));
    }

    #[test]
    fn test_unitary_shape() {
        let one = NativeValue::Complex(Complex64::new(1.0, 0.0));
        let zero = NativeValue::Complex(Complex64::new(0.0, 0.0));
        let identity = NativeValue::List(vec![one.clone(), zero.clone(), zero.clone(), one]);

        let mut b = Builder::new(Vendor::Cirq);
        b.push(GateName::Unitary, &[key("q")], &[], &[identity.clone()])
            .unwrap();
        let err = b
            .push(GateName::Unitary, &[key("q"), key("r")], &[], &[identity])
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::MatrixShape { qubits: 2, expected: 16, len: 4 }
        ));

        let ir = b.finish();
        assert_eq!(ir.instructions()[0].matrix().map(|m| m.len()), Some(4));
    }

    #[test]
    fn test_complex_angle_is_rejected() {
        let mut b = Builder::new(Vendor::Qiskit);
        let err = b
            .push(
                GateName::RZ,
                &[key("q")],
                &[],
                &[NativeValue::Complex(Complex64::new(0.0, 1.0))],
            )
            .unwrap_err();
        assert!(matches!(err, IrError::InvalidParameterShape(_)));
    }
}
