//! Instruction nodes of the circuit IR.

use crate::error::{IrError, IrResult};
use crate::gate::GateName;
use crate::idset::Atom;
use crate::matrix::matrix_width;
use crate::parameter::Parameter;
use crate::qubit::{Clbit, Qubit};
use num_complex::Complex64;
use serde::Serialize;
use std::fmt;

/// One IR operation: a canonical gate name and its ordered operands.
///
/// Instructions are validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    name: GateName,
    qubits: Vec<Qubit>,
    clbits: Vec<Clbit>,
    params: Vec<Parameter>,
}

impl Instruction {
    /// Build an instruction, checking operand counts and parameter shapes.
    pub fn new(
        name: GateName,
        qubits: Vec<Qubit>,
        clbits: Vec<Clbit>,
        params: Vec<Parameter>,
    ) -> IrResult<Self> {
        validate(name, &qubits, &clbits, &params)?;
        Ok(Self {
            name,
            qubits,
            clbits,
            params,
        })
    }

    /// Canonical gate name.
    pub fn name(&self) -> GateName {
        self.name
    }

    /// Qubit operands in order.
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Classical bit operands in order.
    pub fn clbits(&self) -> &[Clbit] {
        &self.clbits
    }

    /// Parameter operands in order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    /// Whether this is a measurement.
    pub fn is_measurement(&self) -> bool {
        self.name == GateName::Measure
    }

    /// Measurement key: the label of the first classical bit.
    pub fn measurement_key(&self) -> Option<&str> {
        if self.is_measurement() {
            self.clbits.first().map(Clbit::key)
        } else {
            None
        }
    }

    /// The unitary matrix of a `Unitary` instruction.
    pub fn matrix(&self) -> Option<Vec<Complex64>> {
        if self.name != GateName::Unitary {
            return None;
        }
        self.params
            .first()
            .and_then(Parameter::as_scalars)
            .map(|entries| entries.iter().map(|n| n.to_complex()).collect())
    }

    /// Whether any parameter depends on a free symbol.
    pub fn is_parameterized(&self) -> bool {
        self.params.iter().any(Parameter::is_symbolic)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.name.is_parameterized() {
            f.write_str("(")?;
            for (i, p) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{p}")?;
            }
            f.write_str(")")?;
        }
        for (i, q) in self.qubits.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{q}")?;
        }
        Ok(())
    }
}

fn validate(
    name: GateName,
    qubits: &[Qubit],
    clbits: &[Clbit],
    params: &[Parameter],
) -> IrResult<()> {
    let expected_qubits = name.num_qubits().unwrap_or_else(|| qubits.len().max(1));
    if qubits.len() != expected_qubits {
        return Err(IrError::QubitCountMismatch {
            gate: name,
            expected: expected_qubits,
            got: qubits.len(),
        });
    }

    for (i, q) in qubits.iter().enumerate() {
        if qubits[..i].contains(q) {
            return Err(IrError::DuplicateQubit {
                gate: name,
                index: u32::try_from(q.index()).unwrap_or(u32::MAX),
            });
        }
    }

    let expected_clbits = if name == GateName::Measure {
        qubits.len()
    } else {
        0
    };
    if clbits.len() != expected_clbits {
        return Err(IrError::ClbitCountMismatch {
            gate: name,
            expected: expected_clbits,
            got: clbits.len(),
        });
    }

    if params.len() != name.num_params() {
        return Err(IrError::ParameterCountMismatch {
            gate: name,
            expected: name.num_params(),
            got: params.len(),
        });
    }

    if name == GateName::Unitary {
        let entries = params[0].as_scalars().ok_or_else(|| {
            IrError::InvalidParameterShape("unitary matrix must be a list of numbers".to_string())
        })?;
        if matrix_width(entries.len()) != Some(qubits.len()) {
            return Err(IrError::MatrixShape {
                qubits: qubits.len(),
                expected: 4usize.saturating_pow(u32::try_from(qubits.len()).unwrap_or(u32::MAX)),
                len: entries.len(),
            });
        }
    } else if let Some(bad) = params.iter().find(|p| !p.is_angle()) {
        return Err(IrError::InvalidParameterShape(format!(
            "gate '{name}' expects an angle, got {bad}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::idset::{IdentifierSet, NativeAtom};
    use crate::parameter::{Number, Sequence, Symbol};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Wire(&'static str);

    impl NativeAtom for Wire {
        fn label(&self) -> String {
            self.0.to_string()
        }
    }

    fn wires<A: Atom>(names: &[&'static str]) -> Vec<A> {
        let mut set: IdentifierSet<Wire, A> = IdentifierSet::new();
        let natives: Vec<Wire> = names.iter().map(|&n| Wire(n)).collect();
        set.get(&natives)
    }

    fn matrix(len: usize) -> Parameter {
        let entries = (0..len)
            .map(|i| Number::Complex(Complex64::new(i as f64, 0.0)))
            .collect();
        Parameter::Sequence(Sequence::Scalars(entries))
    }

    #[test]
    fn test_display() {
        let rx = Instruction::new(GateName::RX, wires(&["a"]), vec![], vec![Parameter::from(0.5)]).unwrap();
        assert_eq!(rx.to_string(), "RX(0.5) a");

        let cx = Instruction::new(GateName::CX, wires(&["a", "b"]), vec![], vec![]).unwrap();
        assert_eq!(cx.to_string(), "CX a, b");

        let u = Instruction::new(GateName::Unitary, wires(&["a"]), vec![], vec![matrix(4)]).unwrap();
        assert_eq!(u.to_string(), "Unitary a");
    }

    #[test]
    fn test_qubit_count_mismatch() {
        let err = Instruction::new(GateName::CX, wires(&["a"]), vec![], vec![]).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch {
                gate: GateName::CX,
                expected: 2,
                got: 1
            }
        ));

        let err = Instruction::new(GateName::Unitary, vec![], vec![], vec![matrix(1)]).unwrap_err();
        assert!(matches!(
            err,
            IrError::QubitCountMismatch { expected: 1, got: 0, .. }
        ));
    }

    #[test]
    fn test_duplicate_qubit() {
        let err = Instruction::new(GateName::CZ, wires(&["b", "b"]), vec![], vec![]).unwrap_err();
        assert!(matches!(
            err,
            IrError::DuplicateQubit {
                gate: GateName::CZ,
                index: 0
            }
        ));
    }

    #[test]
    fn test_clbit_count_mismatch() {
        let err = Instruction::new(
            GateName::Measure,
            wires(&["a", "b"]),
            wires::<Clbit>(&["c"]),
            vec![],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            IrError::ClbitCountMismatch { expected: 2, got: 1, .. }
        ));

        let err = Instruction::new(GateName::H, wires(&["a"]), wires::<Clbit>(&["c"]), vec![])
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::ClbitCountMismatch { expected: 0, got: 1, .. }
        ));
    }

    #[test]
    fn test_parameter_count_mismatch() {
        let err = Instruction::new(GateName::U3, wires(&["a"]), vec![], vec![Parameter::from(0.1)]).unwrap_err();
        assert!(matches!(
            err,
            IrError::ParameterCountMismatch {
                gate: GateName::U3,
                expected: 3,
                got: 1
            }
        ));
    }

    #[test]
    fn test_parameter_shapes() {
        let err = Instruction::new(GateName::RZ, wires(&["a"]), vec![], vec![matrix(1)]).unwrap_err();
        assert!(matches!(err, IrError::InvalidParameterShape(_)));

        let err = Instruction::new(GateName::Unitary, wires(&["a"]), vec![], vec![Parameter::from(0.5)])
            .unwrap_err();
        assert!(matches!(err, IrError::InvalidParameterShape(_)));

        let err = Instruction::new(GateName::Unitary, wires(&["a", "b"]), vec![], vec![matrix(4)])
            .unwrap_err();
        assert!(matches!(
            err,
            IrError::MatrixShape {
                qubits: 2,
                expected: 16,
                len: 4
            }
        ));
    }

    #[test]
    fn test_accessors() {
        let m = Instruction::new(
            GateName::Measure,
            wires(&["a", "b"]),
            wires::<Clbit>(&["result", "other"]),
            vec![],
        )
        .unwrap();
        assert!(m.is_measurement());
        assert_eq!(m.measurement_key(), Some("result"));
        assert!(m.matrix().is_none());

        let u = Instruction::new(GateName::Unitary, wires(&["a", "b"]), vec![], vec![matrix(16)])
            .unwrap();
        assert!(!u.is_measurement());
        assert_eq!(u.measurement_key(), None);
        let entries = u.matrix().unwrap();
        assert_eq!(entries.len(), 16);
        assert_eq!(entries[5], Complex64::new(5.0, 0.0));
        assert!(!u.is_parameterized());

        let theta: Symbol = wires::<Symbol>(&["theta"]).remove(0);
        let rz = Instruction::new(GateName::RZ, wires(&["a"]), vec![], vec![theta.into()]).unwrap();
        assert!(rz.is_parameterized());
        assert_eq!(rz.to_string(), "RZ(theta) a");
    }
}
