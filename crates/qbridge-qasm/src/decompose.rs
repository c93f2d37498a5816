//! Recursive decomposition into gates QASM 2.0 can express.
//!
//! An operation whose gate is in the `qelib1.inc` set renders directly.
//! Everything else is rewritten by a fixed rule into simpler operations,
//! recursively, until every leaf renders. A leaf with no rule but a known 1-
//! or 2-qubit matrix falls back to the generic `u3` / two-level sequence.

use crate::error::{QasmError, QasmResult};
use crate::unitary::{TwoQubitStep, Unitary2x2, Unitary4x4};
use num_complex::Complex64;
use qbridge_ir::GateName;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::fmt;

/// An operation lowered for QASM output.
///
/// Qubits are positions in the output ordering (`q[i]`); parameters are bound
/// angles in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Canonical gate.
    pub gate: GateName,
    /// Output qubit positions.
    pub qubits: Vec<usize>,
    /// Bound angles.
    pub params: Vec<f64>,
    /// Matrix of a `Unitary` operation.
    pub matrix: Option<Vec<Complex64>>,
    /// Measurement key of a `Measure` operation.
    pub key: Option<String>,
}

impl Operation {
    /// A gate on `qubits` with angles `params`.
    pub fn gate(gate: GateName, qubits: &[usize], params: &[f64]) -> Self {
        Self {
            gate,
            qubits: qubits.to_vec(),
            params: params.to_vec(),
            matrix: None,
            key: None,
        }
    }

    /// An arbitrary unitary on `qubits`.
    pub fn unitary(qubits: &[usize], matrix: Vec<Complex64>) -> Self {
        Self {
            matrix: Some(matrix),
            ..Self::gate(GateName::Unitary, qubits, &[])
        }
    }

    /// A measurement of `qubits` under `key`.
    pub fn measure(qubits: &[usize], key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::gate(GateName::Measure, qubits, &[])
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gate)?;
        if !self.params.is_empty() {
            let params: Vec<_> = self.params.iter().map(f64::to_string).collect();
            write!(f, "({})", params.join(", "))?;
        }
        let qubits: Vec<_> = self.qubits.iter().map(|q| format!("q[{q}]")).collect();
        write!(f, " {}", qubits.join(", "))
    }
}

/// Whether `gate` has a direct `qelib1.inc` rendering.
pub fn is_native(gate: GateName) -> bool {
    matches!(
        gate,
        GateName::I
            | GateName::X
            | GateName::Y
            | GateName::Z
            | GateName::H
            | GateName::S
            | GateName::Sdg
            | GateName::T
            | GateName::Tdg
            | GateName::SX
            | GateName::SXdg
            | GateName::RX
            | GateName::RY
            | GateName::RZ
            | GateName::Phase
            | GateName::U1
            | GateName::U2
            | GateName::U
            | GateName::U3
            | GateName::CX
            | GateName::CY
            | GateName::CZ
            | GateName::CH
            | GateName::Swap
            | GateName::CRZ
            | GateName::CPhase
            | GateName::CU1
            | GateName::CCX
            | GateName::Measure
    )
}

/// Decompose `op` into natively renderable operations.
///
/// Returns `[op]` unchanged when it already renders.
pub fn decompose(op: &Operation) -> QasmResult<Vec<Operation>> {
    let mut out = Vec::new();
    expand(op, &mut out)?;
    Ok(out)
}

fn expand(op: &Operation, out: &mut Vec<Operation>) -> QasmResult<()> {
    if is_native(op.gate) {
        out.push(op.clone());
        return Ok(());
    }
    if let Some(parts) = rule(op) {
        for part in &parts {
            expand(part, out)?;
        }
        return Ok(());
    }
    match fallback(op) {
        Some(parts) => {
            out.extend(parts);
            Ok(())
        }
        None => Err(QasmError::CannotExpress {
            operation: op.to_string(),
        }),
    }
}

/// Exact rewrite rules for gates outside `qelib1.inc`.
fn rule(op: &Operation) -> Option<Vec<Operation>> {
    use GateName as G;
    let g = Operation::gate;
    let q = &op.qubits;
    let theta = op.params.first().copied().unwrap_or(0.0);

    let parts = match (op.gate, q.as_slice()) {
        (G::R, &[a]) => {
            let phi = op.params.get(1).copied().unwrap_or(0.0);
            vec![g(G::U3, &[a], &[theta, phi - FRAC_PI_2, FRAC_PI_2 - phi])]
        }
        (G::ISwap, &[a, b]) => vec![
            g(G::S, &[a], &[]),
            g(G::S, &[b], &[]),
            g(G::H, &[a], &[]),
            g(G::CX, &[a, b], &[]),
            g(G::CX, &[b, a], &[]),
            g(G::H, &[b], &[]),
        ],
        (G::DCX, &[a, b]) => vec![g(G::CX, &[a, b], &[]), g(G::CX, &[b, a], &[])],
        (G::CSX, &[c, t]) => vec![
            g(G::H, &[t], &[]),
            g(G::CU1, &[c, t], &[FRAC_PI_2]),
            g(G::H, &[t], &[]),
        ],
        (G::CRX, &[c, t]) => vec![
            g(G::U1, &[t], &[FRAC_PI_2]),
            g(G::CX, &[c, t], &[]),
            g(G::U3, &[t], &[-theta / 2.0, 0.0, 0.0]),
            g(G::CX, &[c, t], &[]),
            g(G::U3, &[t], &[theta / 2.0, -FRAC_PI_2, 0.0]),
        ],
        (G::CRY, &[c, t]) => vec![
            g(G::RY, &[t], &[theta / 2.0]),
            g(G::CX, &[c, t], &[]),
            g(G::RY, &[t], &[-theta / 2.0]),
            g(G::CX, &[c, t], &[]),
        ],
        (G::RXX, &[a, b]) => vec![
            g(G::H, &[a], &[]),
            g(G::H, &[b], &[]),
            g(G::CX, &[a, b], &[]),
            g(G::RZ, &[b], &[theta]),
            g(G::CX, &[a, b], &[]),
            g(G::H, &[a], &[]),
            g(G::H, &[b], &[]),
        ],
        (G::RYY, &[a, b]) => vec![
            g(G::RX, &[a], &[FRAC_PI_2]),
            g(G::RX, &[b], &[FRAC_PI_2]),
            g(G::CX, &[a, b], &[]),
            g(G::RZ, &[b], &[theta]),
            g(G::CX, &[a, b], &[]),
            g(G::RX, &[a], &[-FRAC_PI_2]),
            g(G::RX, &[b], &[-FRAC_PI_2]),
        ],
        (G::RZZ, &[a, b]) => vec![
            g(G::CX, &[a, b], &[]),
            g(G::RZ, &[b], &[theta]),
            g(G::CX, &[a, b], &[]),
        ],
        (G::RZX, &[a, b]) => vec![
            g(G::H, &[b], &[]),
            g(G::CX, &[a, b], &[]),
            g(G::RZ, &[b], &[theta]),
            g(G::CX, &[a, b], &[]),
            g(G::H, &[b], &[]),
        ],
        // XX and YY commute, so XY(θ) = RXX(-θ/2) RYY(-θ/2)
        (G::RXY, &[a, b]) => vec![
            g(G::RXX, &[a, b], &[-theta / 2.0]),
            g(G::RYY, &[a, b], &[-theta / 2.0]),
        ],
        (G::PSwap, &[a, b]) => vec![
            g(G::CX, &[a, b], &[]),
            g(G::U1, &[b], &[theta]),
            g(G::CX, &[a, b], &[]),
            g(G::Swap, &[a, b], &[]),
        ],
        (G::RCCX, &[a, b, t]) => vec![
            g(G::U2, &[t], &[0.0, PI]),
            g(G::U1, &[t], &[FRAC_PI_4]),
            g(G::CX, &[b, t], &[]),
            g(G::U1, &[t], &[-FRAC_PI_4]),
            g(G::CX, &[a, t], &[]),
            g(G::U1, &[t], &[FRAC_PI_4]),
            g(G::CX, &[b, t], &[]),
            g(G::U1, &[t], &[-FRAC_PI_4]),
            g(G::U2, &[t], &[0.0, PI]),
        ],
        (G::RC3X, &[a, b, c, t]) => vec![
            g(G::U2, &[t], &[0.0, PI]),
            g(G::U1, &[t], &[FRAC_PI_4]),
            g(G::CX, &[c, t], &[]),
            g(G::U1, &[t], &[-FRAC_PI_4]),
            g(G::U2, &[t], &[0.0, PI]),
            g(G::CX, &[a, t], &[]),
            g(G::U1, &[t], &[FRAC_PI_4]),
            g(G::CX, &[b, t], &[]),
            g(G::U1, &[t], &[-FRAC_PI_4]),
            g(G::CX, &[a, t], &[]),
            g(G::U1, &[t], &[FRAC_PI_4]),
            g(G::CX, &[b, t], &[]),
            g(G::U1, &[t], &[-FRAC_PI_4]),
            g(G::U2, &[t], &[0.0, PI]),
            g(G::U1, &[t], &[FRAC_PI_4]),
            g(G::CX, &[c, t], &[]),
            g(G::U1, &[t], &[-FRAC_PI_4]),
            g(G::U2, &[t], &[0.0, PI]),
        ],
        _ => return None,
    };
    Some(parts)
}

/// Generic gates for a 1- or 2-qubit operation with a known matrix.
fn fallback(op: &Operation) -> Option<Vec<Operation>> {
    let matrix = op.matrix.as_deref()?;
    match op.qubits.as_slice() {
        &[q] => {
            let (theta, phi, lambda) = Unitary2x2::from_slice(matrix)?.u3_angles();
            Some(vec![Operation::gate(GateName::U3, &[q], &[theta, phi, lambda])])
        }
        &[a, b] => {
            let steps = Unitary4x4::from_slice(matrix)?.two_level_decomposition();
            let wire = |local: usize| if local == 0 { a } else { b };
            Some(
                steps
                    .iter()
                    .map(|step| match *step {
                        TwoQubitStep::U3 {
                            qubit,
                            theta,
                            phi,
                            lambda,
                        } => Operation::gate(GateName::U3, &[wire(qubit)], &[theta, phi, lambda]),
                        TwoQubitStep::U1 { qubit, lambda } => {
                            Operation::gate(GateName::U1, &[wire(qubit)], &[lambda])
                        }
                        TwoQubitStep::X { qubit } => {
                            Operation::gate(GateName::X, &[wire(qubit)], &[])
                        }
                        TwoQubitStep::Cx { control, target } => {
                            Operation::gate(GateName::CX, &[wire(control), wire(target)], &[])
                        }
                        TwoQubitStep::Cu1 {
                            control,
                            target,
                            lambda,
                        } => Operation::gate(
                            GateName::CU1,
                            &[wire(control), wire(target)],
                            &[lambda],
                        ),
                    })
                    .collect(),
            )
        }
        _ => None,
    }
}
