//! Qiskit circuit object model.
//!
//! Mirrors the parts of `qiskit.QuantumCircuit` that take part in
//! transpilation: named registers, register-relative bits, `Parameter`
//! objects with their own identity, and the instruction list.

use crate::error::{QiskitError, QiskitResult};
use crate::gates::GateType;
use num_complex::Complex64;
use qbridge_ir::NativeAtom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// A named quantum register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantumRegister {
    /// Register name.
    pub name: String,
    /// Number of qubits.
    pub size: usize,
}

impl QuantumRegister {
    /// Create a register.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A named classical register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicalRegister {
    /// Register name.
    pub name: String,
    /// Number of bits.
    pub size: usize,
}

impl ClassicalRegister {
    /// Create a register.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// A bit addressed as `register[index]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bit {
    /// Owning register name.
    pub register: String,
    /// Position inside the register.
    pub index: usize,
}

impl Bit {
    /// Address `register[index]`.
    pub fn new(register: impl Into<String>, index: usize) -> Self {
        Self {
            register: register.into(),
            index,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.register, self.index)
    }
}

impl NativeAtom for Bit {
    fn label(&self) -> String {
        self.to_string()
    }
}

/// A qubit.
pub type Qubit = Bit;
/// A classical bit.
pub type Clbit = Bit;

/// A free circuit parameter.
///
/// Two parameters with the same name are still distinct objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    uuid: Uuid,
}

impl Parameter {
    /// Create a fresh parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uuid: Uuid::new_v4(),
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity of this parameter object.
    pub fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for Parameter {}

impl Hash for Parameter {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl NativeAtom for Parameter {
    fn label(&self) -> String {
        self.name.clone()
    }
}

/// A gate parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Bound angle.
    Number(f64),
    /// Free parameter.
    Parameter(Parameter),
    /// Unitary matrix, row-major, little-endian qubit order.
    Matrix(Vec<Complex64>),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<Parameter> for ParamValue {
    fn from(value: Parameter) -> Self {
        ParamValue::Parameter(value)
    }
}

impl From<&Parameter> for ParamValue {
    fn from(value: &Parameter) -> Self {
        ParamValue::Parameter(value.clone())
    }
}

/// One entry of a circuit's instruction list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircuitInstruction {
    /// Instruction class.
    pub gate: GateType,
    /// Qubit operands.
    pub qubits: Vec<Qubit>,
    /// Classical bit operands.
    pub clbits: Vec<Clbit>,
    /// Parameters.
    pub params: Vec<ParamValue>,
}

/// A Qiskit quantum circuit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuantumCircuit {
    name: String,
    qregs: Vec<QuantumRegister>,
    cregs: Vec<ClassicalRegister>,
    data: Vec<CircuitInstruction>,
}

impl QuantumCircuit {
    /// Create an empty circuit without registers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Create a circuit with a `q` register and, if `num_clbits > 0`, a `c`
    /// register.
    pub fn with_size(num_qubits: usize, num_clbits: usize) -> Self {
        let mut circuit = Self::new("circuit");
        circuit.qregs.push(QuantumRegister::new("q", num_qubits));
        if num_clbits > 0 {
            circuit.cregs.push(ClassicalRegister::new("c", num_clbits));
        }
        circuit
    }

    /// Circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a quantum register.
    pub fn add_qreg(&mut self, reg: QuantumRegister) -> QiskitResult<&mut Self> {
        if self.has_register(&reg.name) {
            return Err(QiskitError::DuplicateRegister(reg.name));
        }
        self.qregs.push(reg);
        Ok(self)
    }

    /// Add a classical register.
    pub fn add_creg(&mut self, reg: ClassicalRegister) -> QiskitResult<&mut Self> {
        if self.has_register(&reg.name) {
            return Err(QiskitError::DuplicateRegister(reg.name));
        }
        self.cregs.push(reg);
        Ok(self)
    }

    fn has_register(&self, name: &str) -> bool {
        self.qregs.iter().any(|r| r.name == name) || self.cregs.iter().any(|r| r.name == name)
    }

    /// Quantum registers in declaration order.
    pub fn qregs(&self) -> &[QuantumRegister] {
        &self.qregs
    }

    /// Classical registers in declaration order.
    pub fn cregs(&self) -> &[ClassicalRegister] {
        &self.cregs
    }

    /// All qubits, register by register.
    pub fn qubits(&self) -> Vec<Qubit> {
        self.qregs
            .iter()
            .flat_map(|r| (0..r.size).map(|i| Bit::new(r.name.clone(), i)))
            .collect()
    }

    /// All classical bits, register by register.
    pub fn clbits(&self) -> Vec<Clbit> {
        self.cregs
            .iter()
            .flat_map(|r| (0..r.size).map(|i| Bit::new(r.name.clone(), i)))
            .collect()
    }

    /// Total number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qregs.iter().map(|r| r.size).sum()
    }

    /// Total number of classical bits.
    pub fn num_clbits(&self) -> usize {
        self.cregs.iter().map(|r| r.size).sum()
    }

    /// The qubit at flat position `index`.
    pub fn qubit(&self, index: usize) -> QiskitResult<Qubit> {
        flat_bit(self.qregs.iter().map(|r| (&r.name, r.size)), index, "qubit")
    }

    /// The classical bit at flat position `index`.
    pub fn clbit(&self, index: usize) -> QiskitResult<Clbit> {
        flat_bit(self.cregs.iter().map(|r| (&r.name, r.size)), index, "clbit")
    }

    /// Instructions in program order.
    pub fn data(&self) -> &[CircuitInstruction] {
        &self.data
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Distinct free parameters in first-use order.
    pub fn parameters(&self) -> Vec<Parameter> {
        let mut seen: Vec<Parameter> = Vec::new();
        for param in self.data.iter().flat_map(|inst| &inst.params) {
            if let ParamValue::Parameter(p) = param {
                if !seen.contains(p) {
                    seen.push(p.clone());
                }
            }
        }
        seen
    }

    /// Append an instruction after checking its operands.
    pub fn append(
        &mut self,
        gate: GateType,
        qubits: Vec<Qubit>,
        clbits: Vec<Clbit>,
        params: Vec<ParamValue>,
    ) -> QiskitResult<&mut Self> {
        for q in &qubits {
            check_bit(q, self.qregs.iter().map(|r| (&r.name, r.size)), "qubit")?;
        }
        for c in &clbits {
            check_bit(c, self.cregs.iter().map(|r| (&r.name, r.size)), "clbit")?;
        }
        if let Some(expected) = gate.num_qubits() {
            if expected != qubits.len() {
                return Err(QiskitError::QubitArity {
                    gate: gate.to_string(),
                    expected,
                    got: qubits.len(),
                });
            }
        }
        match gate {
            GateType::Measure if qubits.len() != clbits.len() || qubits.is_empty() => {
                return Err(QiskitError::MeasureShape {
                    qubits: qubits.len(),
                    clbits: clbits.len(),
                });
            }
            GateType::UnitaryGate => check_matrix(&qubits, &params)?,
            _ if gate.num_params() != params.len() => {
                return Err(QiskitError::ParamArity {
                    gate: gate.to_string(),
                    expected: gate.num_params(),
                    got: params.len(),
                });
            }
            _ => {}
        }
        self.data.push(CircuitInstruction {
            gate,
            qubits,
            clbits,
            params,
        });
        Ok(self)
    }

    /// Append a gate on flat qubit indices.
    pub fn apply(
        &mut self,
        gate: GateType,
        qubits: &[usize],
        params: Vec<ParamValue>,
    ) -> QiskitResult<&mut Self> {
        let qubits = qubits
            .iter()
            .map(|&i| self.qubit(i))
            .collect::<QiskitResult<Vec<_>>>()?;
        self.append(gate, qubits, Vec::new(), params)
    }

    /// Apply a Hadamard.
    pub fn h(&mut self, qubit: usize) -> QiskitResult<&mut Self> {
        self.apply(GateType::HGate, &[qubit], Vec::new())
    }

    /// Apply a Pauli X.
    pub fn x(&mut self, qubit: usize) -> QiskitResult<&mut Self> {
        self.apply(GateType::XGate, &[qubit], Vec::new())
    }

    /// Apply a controlled X.
    pub fn cx(&mut self, control: usize, target: usize) -> QiskitResult<&mut Self> {
        self.apply(GateType::CXGate, &[control, target], Vec::new())
    }

    /// Apply an X rotation.
    pub fn rx(&mut self, theta: impl Into<ParamValue>, qubit: usize) -> QiskitResult<&mut Self> {
        self.apply(GateType::RXGate, &[qubit], vec![theta.into()])
    }

    /// Apply a Z rotation.
    pub fn rz(&mut self, phi: impl Into<ParamValue>, qubit: usize) -> QiskitResult<&mut Self> {
        self.apply(GateType::RZGate, &[qubit], vec![phi.into()])
    }

    /// Apply a unitary given little-endian, as Qiskit's `UnitaryGate` does.
    pub fn unitary(&mut self, matrix: Vec<Complex64>, qubits: &[usize]) -> QiskitResult<&mut Self> {
        self.apply(GateType::UnitaryGate, qubits, vec![ParamValue::Matrix(matrix)])
    }

    /// Measure flat qubit `qubit` into flat clbit `clbit`.
    pub fn measure(&mut self, qubit: usize, clbit: usize) -> QiskitResult<&mut Self> {
        let q = self.qubit(qubit)?;
        let c = self.clbit(clbit)?;
        self.append(GateType::Measure, vec![q], vec![c], Vec::new())
    }

    /// Measure every qubit into the classical bit with the same index.
    pub fn measure_all(&mut self) -> QiskitResult<&mut Self> {
        for i in 0..self.num_qubits() {
            self.measure(i, i)?;
        }
        Ok(self)
    }
}

fn flat_bit<'a>(
    regs: impl Iterator<Item = (&'a String, usize)>,
    index: usize,
    kind: &'static str,
) -> QiskitResult<Bit> {
    let mut offset = index;
    let mut total = 0;
    for (name, size) in regs {
        if offset < size {
            return Ok(Bit::new(name.clone(), offset));
        }
        offset -= size;
        total += size;
    }
    Err(QiskitError::BitOutOfRange {
        kind,
        index,
        size: total,
    })
}

fn check_bit<'a>(
    bit: &Bit,
    mut regs: impl Iterator<Item = (&'a String, usize)>,
    kind: &'static str,
) -> QiskitResult<()> {
    let (_, size) = regs
        .find(|(name, _)| **name == bit.register)
        .ok_or_else(|| QiskitError::UnknownRegister(bit.register.clone()))?;
    if bit.index < size {
        Ok(())
    } else {
        Err(QiskitError::BitOutOfRange {
            kind,
            index: bit.index,
            size,
        })
    }
}

fn check_matrix(qubits: &[Qubit], params: &[ParamValue]) -> QiskitResult<()> {
    let invalid = |reason: String| QiskitError::InvalidParameter {
        gate: GateType::UnitaryGate.to_string(),
        reason,
    };
    let [ParamValue::Matrix(matrix)] = params else {
        return Err(invalid("expected a single matrix".to_string()));
    };
    let dim = u32::try_from(qubits.len())
        .ok()
        .and_then(|n| 1usize.checked_shl(n))
        .ok_or_else(|| invalid("too many qubits".to_string()))?;
    if qubits.is_empty() || dim.checked_mul(dim) != Some(matrix.len()) {
        return Err(invalid(format!(
            "{} entries do not fit {} qubits",
            matrix.len(),
            qubits.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registers_and_flat_bits() {
        let mut qc = QuantumCircuit::new("regs");
        qc.add_qreg(QuantumRegister::new("a", 2)).unwrap();
        qc.add_qreg(QuantumRegister::new("b", 1)).unwrap();
        qc.add_creg(ClassicalRegister::new("m", 3)).unwrap();

        assert_eq!(qc.num_qubits(), 3);
        assert_eq!(qc.qubit(2).unwrap(), Bit::new("b", 0));
        assert_eq!(qc.clbit(1).unwrap().to_string(), "m1");
        assert!(matches!(
            qc.qubit(3),
            Err(QiskitError::BitOutOfRange { index: 3, size: 3, .. })
        ));
        assert!(matches!(
            qc.add_creg(ClassicalRegister::new("a", 1)),
            Err(QiskitError::DuplicateRegister(_))
        ));
    }

    #[test]
    fn test_builder_methods() {
        let mut qc = QuantumCircuit::with_size(2, 2);
        qc.h(0).unwrap().cx(0, 1).unwrap().measure_all().unwrap();

        assert_eq!(qc.len(), 4);
        assert_eq!(qc.data()[1].gate, GateType::CXGate);
        assert_eq!(qc.data()[3].clbits, vec![Bit::new("c", 1)]);
    }

    #[test]
    fn test_append_checks_operands() {
        let mut qc = QuantumCircuit::with_size(2, 0);
        assert!(matches!(
            qc.apply(GateType::CXGate, &[0], Vec::new()),
            Err(QiskitError::QubitArity { expected: 2, got: 1, .. })
        ));
        assert!(matches!(
            qc.apply(GateType::RZGate, &[0], Vec::new()),
            Err(QiskitError::ParamArity { expected: 1, got: 0, .. })
        ));
        assert!(matches!(
            qc.append(GateType::XGate, vec![Bit::new("anc", 0)], Vec::new(), Vec::new()),
            Err(QiskitError::UnknownRegister(_))
        ));
        assert!(matches!(
            qc.unitary(vec![Complex64::new(1.0, 0.0); 3], &[0]),
            Err(QiskitError::InvalidParameter { .. })
        ));
        assert!(qc.is_empty());
    }

    #[test]
    fn test_parameter_identity() {
        let a = Parameter::new("theta");
        let b = Parameter::new("theta");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());

        let mut qc = QuantumCircuit::with_size(1, 0);
        qc.rz(&a, 0).unwrap().rx(&b, 0).unwrap().rz(&a, 0).unwrap();
        assert_eq!(qc.parameters(), vec![a, b]);
    }

    #[test]
    fn test_serializes() {
        let mut qc = QuantumCircuit::with_size(1, 1);
        qc.h(0).unwrap().measure(0, 0).unwrap();
        let json = serde_json::to_string(&qc).unwrap();
        assert!(json.contains("HGate"));
        let back: QuantumCircuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, qc);
    }
}
