//! Cirq circuit object model: qids, sympy-style symbols, operations and
//! moments.

use crate::error::{CirqError, CirqResult};
use crate::gates::GateType;
use num_complex::Complex64;
use qbridge_ir::NativeAtom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A qubit identifier.
///
/// Ordering follows Cirq: line qubits, then grid qubits, then named qubits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Qid {
    /// `cirq.LineQubit(x)`.
    Line(i64),
    /// `cirq.GridQubit(row, col)`.
    Grid {
        /// Row.
        row: i64,
        /// Column.
        col: i64,
    },
    /// `cirq.NamedQubit(name)`.
    Named(String),
}

impl fmt::Display for Qid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qid::Line(x) => write!(f, "q({x})"),
            Qid::Grid { row, col } => write!(f, "q({row}, {col})"),
            Qid::Named(name) => f.write_str(name),
        }
    }
}

impl NativeAtom for Qid {
    fn label(&self) -> String {
        self.to_string()
    }
}

/// A free parameter. Symbols with the same name are the same parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub String);

impl Symbol {
    /// Create a symbol.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Symbol name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl NativeAtom for Symbol {
    fn label(&self) -> String {
        self.0.clone()
    }
}

/// One classical result bit: position `index` of the measurement `key`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MeasurementBit {
    /// Measurement key.
    pub key: String,
    /// Position among the measured qubits.
    pub index: usize,
}

impl NativeAtom for MeasurementBit {
    fn label(&self) -> String {
        self.key.clone()
    }
}

/// A gate parameter value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// Bound angle.
    Number(f64),
    /// Free symbol.
    Symbol(Symbol),
    /// Unitary matrix, row-major, big-endian qubit order.
    Matrix(Vec<Complex64>),
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Number(value)
    }
}

impl From<Symbol> for ParamValue {
    fn from(value: Symbol) -> Self {
        ParamValue::Symbol(value)
    }
}

/// A gate applied to qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Gate type.
    pub gate: GateType,
    /// Qubit operands.
    pub qubits: Vec<Qid>,
    /// Parameters.
    pub params: Vec<ParamValue>,
    /// Measurement key, set for measurements only.
    pub key: Option<String>,
}

impl Operation {
    /// A gate operation.
    pub fn new(gate: GateType, qubits: Vec<Qid>, params: Vec<ParamValue>) -> Self {
        Self {
            gate,
            qubits,
            params,
            key: None,
        }
    }

    /// A parameterless gate operation.
    pub fn on(gate: GateType, qubits: &[Qid]) -> Self {
        Self::new(gate, qubits.to_vec(), Vec::new())
    }

    /// A measurement of `qubits` under `key`.
    pub fn measure(qubits: &[Qid], key: impl Into<String>) -> Self {
        Self {
            gate: GateType::MeasurementGate,
            qubits: qubits.to_vec(),
            params: Vec::new(),
            key: Some(key.into()),
        }
    }

    /// A matrix gate.
    pub fn matrix(matrix: Vec<Complex64>, qubits: &[Qid]) -> Self {
        Self::new(GateType::MatrixGate, qubits.to_vec(), vec![ParamValue::Matrix(matrix)])
    }

    /// Classical bits written by a measurement.
    pub fn measurement_bits(&self) -> Vec<MeasurementBit> {
        match &self.key {
            Some(key) if self.gate == GateType::MeasurementGate => (0..self.qubits.len())
                .map(|index| MeasurementBit {
                    key: key.clone(),
                    index,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn validate(&self) -> CirqResult<()> {
        let gate = self.gate.to_string();
        for (i, q) in self.qubits.iter().enumerate() {
            if self.qubits[..i].contains(q) {
                return Err(CirqError::DuplicateQubit {
                    gate,
                    qubit: q.to_string(),
                });
            }
        }
        if let Some(expected) = self.gate.num_qubits() {
            if expected != self.qubits.len() {
                return Err(CirqError::QubitArity {
                    gate,
                    expected,
                    got: self.qubits.len(),
                });
            }
        }
        match self.gate {
            GateType::MeasurementGate => {
                if self.key.as_deref().is_none_or(str::is_empty) || self.qubits.is_empty() {
                    return Err(CirqError::MissingKey(format!("{:?}", self.qubits)));
                }
            }
            GateType::MatrixGate => check_matrix(&self.qubits, &self.params)?,
            _ if self.params.len() != self.gate.num_params() => {
                return Err(CirqError::ParamArity {
                    gate,
                    expected: self.gate.num_params(),
                    got: self.params.len(),
                });
            }
            _ => {}
        }
        Ok(())
    }
}

fn check_matrix(qubits: &[Qid], params: &[ParamValue]) -> CirqResult<()> {
    let invalid = |reason: String| CirqError::InvalidParameter {
        gate: GateType::MatrixGate.to_string(),
        reason,
    };
    let [ParamValue::Matrix(matrix)] = params else {
        return Err(invalid("expected a single matrix".to_string()));
    };
    let dim = u32::try_from(qubits.len())
        .ok()
        .and_then(|n| 1usize.checked_shl(n));
    let entries = dim.and_then(|d| d.checked_mul(d));
    if qubits.is_empty() || entries != Some(matrix.len()) {
        return Err(invalid(format!(
            "{} entries do not fit {} qubits",
            matrix.len(),
            qubits.len()
        )));
    }
    Ok(())
}

/// Operations that happen at the same time, on disjoint qubits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Moment {
    operations: Vec<Operation>,
}

impl Moment {
    /// Operations in insertion order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Whether any operation touches one of `qubits`.
    pub fn operates_on(&self, qubits: &[Qid]) -> bool {
        self.operations
            .iter()
            .any(|op| op.qubits.iter().any(|q| qubits.contains(q)))
    }
}

/// A Cirq circuit: a sequence of moments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Circuit {
    moments: Vec<Moment>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an operation.
    ///
    /// The operation joins the last moment when that moment leaves its
    /// qubits free, otherwise it opens a new moment. Program order is always
    /// append order.
    pub fn append(&mut self, op: Operation) -> CirqResult<&mut Self> {
        op.validate()?;
        match self.moments.last_mut() {
            Some(last) if !last.operates_on(&op.qubits) => last.operations.push(op),
            _ => self.moments.push(Moment {
                operations: vec![op],
            }),
        }
        Ok(self)
    }

    /// Append several operations in order.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = Operation>) -> CirqResult<&mut Self> {
        for op in ops {
            self.append(op)?;
        }
        Ok(self)
    }

    /// Moments in order.
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// All operations, moment by moment.
    pub fn all_operations(&self) -> impl Iterator<Item = &Operation> {
        self.moments.iter().flat_map(|m| m.operations.iter())
    }

    /// Every qubit used, sorted.
    pub fn all_qubits(&self) -> BTreeSet<Qid> {
        self.all_operations()
            .flat_map(|op| op.qubits.iter().cloned())
            .collect()
    }

    /// Measurement keys in first-use order.
    pub fn measurement_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = Vec::new();
        for key in self.all_operations().filter_map(|op| op.key.as_deref()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.moments.iter().map(|m| m.operations.len()).sum()
    }

    /// Whether the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }
}

/// `n` line qubits `q(0)..q(n-1)`.
pub fn line_qubits(n: i64) -> Vec<Qid> {
    (0..n).map(Qid::Line).collect()
}
