//! Braket circuit object model.
//!
//! Braket addresses qubits by integer and has no classical bits or
//! measurement instructions; results are read from every qubit at the end.

use crate::error::{BraketError, BraketResult};
use crate::gates::GateType;
use num_complex::Complex64;
use qbridge_ir::NativeAtom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A qubit address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Qubit(pub u32);

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl NativeAtom for Qubit {
    fn label(&self) -> String {
        self.to_string()
    }
}

/// Stand-in for the classical bits and free parameters Braket lacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Never {}

impl NativeAtom for Never {
    fn label(&self) -> String {
        match *self {}
    }
}

/// One gate application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Gate type.
    pub gate: GateType,
    /// Target qubits.
    pub targets: Vec<Qubit>,
    /// Angles in radians.
    pub angles: Vec<f64>,
    /// Matrix of a `Unitary`, row-major, big-endian qubit order.
    pub matrix: Option<Vec<Complex64>>,
}

impl Instruction {
    /// A gate with angles.
    pub fn new(gate: GateType, targets: &[u32], angles: &[f64]) -> Self {
        Self {
            gate,
            targets: targets.iter().copied().map(Qubit).collect(),
            angles: angles.to_vec(),
            matrix: None,
        }
    }

    /// A unitary on `targets`.
    pub fn unitary(matrix: Vec<Complex64>, targets: &[u32]) -> Self {
        Self {
            matrix: Some(matrix),
            ..Self::new(GateType::Unitary, targets, &[])
        }
    }

    fn validate(&self) -> BraketResult<()> {
        let gate = self.gate.to_string();
        for (i, q) in self.targets.iter().enumerate() {
            if self.targets[..i].contains(q) {
                return Err(BraketError::DuplicateTarget { gate, qubit: q.0 });
            }
        }
        if let Some(expected) = self.gate.num_qubits() {
            if expected != self.targets.len() {
                return Err(BraketError::QubitArity {
                    gate,
                    expected,
                    got: self.targets.len(),
                });
            }
        }
        if self.angles.len() != self.gate.num_angles() {
            return Err(BraketError::ParamArity {
                gate,
                expected: self.gate.num_angles(),
                got: self.angles.len(),
            });
        }
        match (&self.matrix, self.gate) {
            (Some(matrix), GateType::Unitary) => {
                let entries = u32::try_from(self.targets.len())
                    .ok()
                    .and_then(|n| 1usize.checked_shl(n))
                    .and_then(|d| d.checked_mul(d));
                if self.targets.is_empty() || entries != Some(matrix.len()) {
                    return Err(BraketError::InvalidMatrix(format!(
                        "{} entries for {} targets",
                        matrix.len(),
                        self.targets.len()
                    )));
                }
            }
            (None, GateType::Unitary) => {
                return Err(BraketError::InvalidMatrix("missing matrix".to_string()));
            }
            (Some(_), _) => {
                return Err(BraketError::InvalidMatrix(format!("{gate} takes no matrix")));
            }
            (None, _) => {}
        }
        Ok(())
    }
}

/// A Braket circuit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Circuit {
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an instruction.
    pub fn add(&mut self, instruction: Instruction) -> BraketResult<&mut Self> {
        instruction.validate()?;
        self.instructions.push(instruction);
        Ok(self)
    }

    /// Apply a Hadamard.
    pub fn h(&mut self, target: u32) -> BraketResult<&mut Self> {
        self.add(Instruction::new(GateType::H, &[target], &[]))
    }

    /// Apply a controlled NOT.
    pub fn cnot(&mut self, control: u32, target: u32) -> BraketResult<&mut Self> {
        self.add(Instruction::new(GateType::CNot, &[control, target], &[]))
    }

    /// Apply an X rotation.
    pub fn rx(&mut self, target: u32, angle: f64) -> BraketResult<&mut Self> {
        self.add(Instruction::new(GateType::Rx, &[target], &[angle]))
    }

    /// Apply a Z rotation.
    pub fn rz(&mut self, target: u32, angle: f64) -> BraketResult<&mut Self> {
        self.add(Instruction::new(GateType::Rz, &[target], &[angle]))
    }

    /// Apply a controlled phase shift.
    pub fn cphaseshift(&mut self, control: u32, target: u32, angle: f64) -> BraketResult<&mut Self> {
        self.add(Instruction::new(GateType::CPhaseShift, &[control, target], &[angle]))
    }

    /// Apply an XY interaction.
    pub fn xy(&mut self, a: u32, b: u32, angle: f64) -> BraketResult<&mut Self> {
        self.add(Instruction::new(GateType::XY, &[a, b], &[angle]))
    }

    /// Apply a unitary.
    pub fn unitary(&mut self, matrix: Vec<Complex64>, targets: &[u32]) -> BraketResult<&mut Self> {
        self.add(Instruction::unitary(matrix, targets))
    }

    /// Instructions in order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Every qubit used, sorted.
    pub fn qubits(&self) -> BTreeSet<Qubit> {
        self.instructions
            .iter()
            .flat_map(|inst| inst.targets.iter().copied())
            .collect()
    }

    /// Number of qubits used.
    pub fn qubit_count(&self) -> usize {
        self.qubits().len()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit is empty.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_qubits() {
        let mut circuit = Circuit::new();
        circuit.h(4).unwrap().cnot(4, 1).unwrap().rz(1, 0.5).unwrap();

        assert_eq!(circuit.len(), 3);
        let qubits: Vec<_> = circuit.qubits().into_iter().collect();
        assert_eq!(qubits, vec![Qubit(1), Qubit(4)]);
        assert_eq!(circuit.qubit_count(), 2);
    }

    #[test]
    fn test_validation() {
        let mut circuit = Circuit::new();
        assert!(matches!(
            circuit.cnot(2, 2),
            Err(BraketError::DuplicateTarget { qubit: 2, .. })
        ));
        assert!(matches!(
            circuit.add(Instruction::new(GateType::Rx, &[0], &[])),
            Err(BraketError::ParamArity { expected: 1, got: 0, .. })
        ));
        assert!(matches!(
            circuit.add(Instruction::new(GateType::Unitary, &[0], &[])),
            Err(BraketError::InvalidMatrix(_))
        ));
        assert!(matches!(
            circuit.unitary(vec![Complex64::new(1.0, 0.0); 2], &[0]),
            Err(BraketError::InvalidMatrix(_))
        ));
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_serializes() {
        let mut circuit = Circuit::new();
        circuit.h(0).unwrap().rx(3, 0.25).unwrap();
        let json = serde_json::to_string(&circuit).unwrap();
        assert!(json.contains("\"targets\":[3]"));
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);
    }
}
