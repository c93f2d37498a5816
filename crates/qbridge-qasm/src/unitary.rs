//! Unitary matrix utilities for the generic fallback gates.
//!
//! A one-qubit unitary is expressed as a single `u3` via its ZYZ Euler
//! angles. A two-qubit unitary is reduced to a product of two-level
//! unitaries (Givens rotations on pairs of basis states) and a diagonal
//! phase, each of which maps onto `u3`, `u1`, `x`, `cx` and `cu1`.
//!
//! Two-qubit matrices are big-endian: basis index `2 * b0 + b1`, where `b0`
//! is the state of the first operand.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Tolerance for treating a matrix entry as zero.
const EPSILON: f64 = 1e-12;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// A 2x2 unitary matrix in row-major order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary2x2 {
    /// The matrix elements in row-major order: [[a, b], [c, d]].
    pub data: [Complex64; 4],
}

impl Unitary2x2 {
    /// Create a new 2x2 matrix.
    pub fn new(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Self {
        Self { data: [a, b, c, d] }
    }

    /// Build from a flattened row-major slice of four entries.
    pub fn from_slice(entries: &[Complex64]) -> Option<Self> {
        match entries {
            [a, b, c, d] => Some(Self::new(*a, *b, *c, *d)),
            _ => None,
        }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::new(ONE, ZERO, ZERO, ONE)
    }

    /// Pauli-X.
    pub fn x() -> Self {
        Self::new(ZERO, ONE, ONE, ZERO)
    }

    /// RY rotation.
    pub fn ry(theta: f64) -> Self {
        let c = Complex64::new((theta / 2.0).cos(), 0.0);
        let s = Complex64::new((theta / 2.0).sin(), 0.0);
        Self::new(c, -s, s, c)
    }

    /// RZ rotation.
    pub fn rz(theta: f64) -> Self {
        Self::new(
            Complex64::from_polar(1.0, -theta / 2.0),
            ZERO,
            ZERO,
            Complex64::from_polar(1.0, theta / 2.0),
        )
    }

    /// Phase gate `u1(lambda)`.
    pub fn u1(lambda: f64) -> Self {
        Self::new(ONE, ZERO, ZERO, Complex64::from_polar(1.0, lambda))
    }

    /// The `u3(theta, phi, lambda)` gate.
    pub fn u3(theta: f64, phi: f64, lambda: f64) -> Self {
        let c = (theta / 2.0).cos();
        let s = (theta / 2.0).sin();
        Self::new(
            Complex64::new(c, 0.0),
            -Complex64::from_polar(s, lambda),
            Complex64::from_polar(s, phi),
            Complex64::from_polar(c, phi + lambda),
        )
    }

    /// Matrix product `self * other`.
    #[allow(clippy::many_single_char_names)]
    pub fn mul(&self, other: &Self) -> Self {
        let [a, b, c, d] = self.data;
        let [e, f, g, h] = other.data;
        Self::new(a * e + b * g, a * f + b * h, c * e + d * g, c * f + d * h)
    }

    /// Conjugate transpose.
    pub fn dagger(&self) -> Self {
        Self::new(
            self.data[0].conj(),
            self.data[2].conj(),
            self.data[1].conj(),
            self.data[3].conj(),
        )
    }

    /// ZYZ Euler decomposition.
    ///
    /// Returns `(alpha, beta, gamma, phase)` with
    /// `U = e^{i phase} Rz(alpha) Ry(beta) Rz(gamma)`.
    pub fn zyz_decomposition(&self) -> (f64, f64, f64, f64) {
        let [a, b, c, d] = self.data;
        let phase = (a * d - b * c).arg() / 2.0;

        // Remove the global phase to land in SU(2):
        // a = cos(beta/2) e^{-i(alpha+gamma)/2}, c = sin(beta/2) e^{i(alpha-gamma)/2}
        let unphase = Complex64::from_polar(1.0, -phase);
        let a = a * unphase;
        let c = c * unphase;

        let beta = 2.0 * c.norm().atan2(a.norm());
        let sum = if a.norm() > EPSILON { -2.0 * a.arg() } else { 0.0 };
        let diff = if c.norm() > EPSILON { 2.0 * c.arg() } else { 0.0 };

        (f64::midpoint(sum, diff), beta, (sum - diff) / 2.0, phase)
    }

    /// Angles `(theta, phi, lambda)` of the `u3` gate equal to this matrix up
    /// to global phase.
    pub fn u3_angles(&self) -> (f64, f64, f64) {
        let (alpha, beta, gamma, _) = self.zyz_decomposition();
        (beta, normalize_angle(alpha), normalize_angle(gamma))
    }

    /// Whether `self` equals `other` up to a global phase.
    pub fn approx_eq_up_to_phase(&self, other: &Self, tolerance: f64) -> bool {
        approx_eq_up_to_phase(&self.data, &other.data, tolerance)
    }
}

/// Normalize an angle to `[-pi, pi]`.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let mut a = angle.rem_euclid(2.0 * PI);
    if a > PI {
        a -= 2.0 * PI;
    }
    a
}

/// One gate of a two-qubit fallback sequence. Qubits are operand positions
/// (0 or 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TwoQubitStep {
    /// `u3(theta, phi, lambda)` on one qubit.
    U3 {
        qubit: usize,
        theta: f64,
        phi: f64,
        lambda: f64,
    },
    /// `u1(lambda)` on one qubit.
    U1 { qubit: usize, lambda: f64 },
    /// Pauli-X on one qubit.
    X { qubit: usize },
    /// CNOT.
    Cx { control: usize, target: usize },
    /// Controlled phase.
    Cu1 {
        control: usize,
        target: usize,
        lambda: f64,
    },
}

/// A 4x4 unitary matrix in row-major, big-endian order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unitary4x4 {
    /// The matrix rows.
    pub data: [[Complex64; 4]; 4],
}

impl Unitary4x4 {
    /// Build from a flattened row-major slice of sixteen entries.
    pub fn from_slice(entries: &[Complex64]) -> Option<Self> {
        if entries.len() != 16 {
            return None;
        }
        let mut data = [[ZERO; 4]; 4];
        for (i, value) in entries.iter().enumerate() {
            data[i / 4][i % 4] = *value;
        }
        Some(Self { data })
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        let mut data = [[ZERO; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            row[i] = ONE;
        }
        Self { data }
    }

    /// Flattened row-major entries.
    pub fn to_vec(&self) -> Vec<Complex64> {
        self.data.iter().flatten().copied().collect()
    }

    /// Matrix product `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        let mut data = [[ZERO; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                *entry = (0..4).map(|k| self.data[i][k] * other.data[k][j]).sum();
            }
        }
        Self { data }
    }

    /// Matrix of a single-qubit gate on operand `qubit`.
    pub fn on_qubit(gate: &Unitary2x2, qubit: usize) -> Self {
        let mut data = [[ZERO; 4]; 4];
        for (row, entries) in data.iter_mut().enumerate() {
            for (col, entry) in entries.iter_mut().enumerate() {
                let (r_bit, c_bit, r_rest, c_rest) = split(row, col, qubit);
                if r_rest == c_rest {
                    *entry = gate.data[r_bit * 2 + c_bit];
                }
            }
        }
        Self { data }
    }

    /// Matrix of `gate` on `target`, applied when `control` is `|1>`.
    pub fn controlled(gate: &Unitary2x2, control: usize, target: usize) -> Self {
        let mut data = Self::identity().data;
        let c_shift = 1 - control;
        for (row, entries) in data.iter_mut().enumerate() {
            if (row >> c_shift) & 1 == 0 {
                continue;
            }
            for (col, entry) in entries.iter_mut().enumerate() {
                if (col >> c_shift) & 1 == 0 {
                    continue;
                }
                let (r_bit, c_bit, r_rest, c_rest) = split(row, col, target);
                *entry = if r_rest == c_rest {
                    gate.data[r_bit * 2 + c_bit]
                } else {
                    ZERO
                };
            }
        }
        Self { data }
    }

    /// Matrix of one fallback step.
    pub fn from_step(step: &TwoQubitStep) -> Self {
        match *step {
            TwoQubitStep::U3 {
                qubit,
                theta,
                phi,
                lambda,
            } => Self::on_qubit(&Unitary2x2::u3(theta, phi, lambda), qubit),
            TwoQubitStep::U1 { qubit, lambda } => Self::on_qubit(&Unitary2x2::u1(lambda), qubit),
            TwoQubitStep::X { qubit } => Self::on_qubit(&Unitary2x2::x(), qubit),
            TwoQubitStep::Cx { control, target } => {
                Self::controlled(&Unitary2x2::x(), control, target)
            }
            TwoQubitStep::Cu1 {
                control,
                target,
                lambda,
            } => Self::controlled(&Unitary2x2::u1(lambda), control, target),
        }
    }

    /// Whether `self` equals `other` up to a global phase.
    pub fn approx_eq_up_to_phase(&self, other: &Self, tolerance: f64) -> bool {
        approx_eq_up_to_phase(&self.to_vec(), &other.to_vec(), tolerance)
    }

    /// Two-level decomposition into [`TwoQubitStep`]s, in application order.
    ///
    /// Column by column, each sub-diagonal entry is zeroed by a two-level
    /// rotation `G` on rows `(col, row)`. What remains is a diagonal `D`, so
    /// `U = G1^† ... Gk^† D` and the circuit applies `D` first.
    pub fn two_level_decomposition(&self) -> Vec<TwoQubitStep> {
        let mut m = self.data;
        let mut rotations = Vec::new();

        for col in 0..3 {
            for row in col + 1..4 {
                let b = m[row][col];
                if b.norm() < EPSILON {
                    continue;
                }
                let a = m[col][col];
                let n = a.norm().hypot(b.norm());
                let g = Unitary2x2::new(a.conj() / n, b.conj() / n, -b / n, a / n);
                for k in 0..4 {
                    let upper = m[col][k];
                    let lower = m[row][k];
                    m[col][k] = g.data[0] * upper + g.data[1] * lower;
                    m[row][k] = g.data[2] * upper + g.data[3] * lower;
                }
                rotations.push((col, row, g));
            }
        }

        let p: Vec<f64> = (0..4).map(|i| m[i][i].arg()).collect();
        let mut steps = vec![
            TwoQubitStep::U1 {
                qubit: 1,
                lambda: p[1] - p[0],
            },
            TwoQubitStep::U1 {
                qubit: 0,
                lambda: p[2] - p[0],
            },
            TwoQubitStep::Cu1 {
                control: 0,
                target: 1,
                lambda: p[3] - p[1] - p[2] + p[0],
            },
        ];
        for (low, high, g) in rotations.into_iter().rev() {
            push_two_level(&mut steps, low, high, &g.dagger());
        }
        steps
    }
}

/// Split basis indices into the bit of `qubit` and the bit of the other qubit.
fn split(row: usize, col: usize, qubit: usize) -> (usize, usize, usize, usize) {
    let shift = 1 - qubit;
    let other = qubit;
    (
        (row >> shift) & 1,
        (col >> shift) & 1,
        (row >> other) & 1,
        (col >> other) & 1,
    )
}

/// Append the steps of a two-level unitary `v` acting on basis states
/// `low < high`.
fn push_two_level(steps: &mut Vec<TwoQubitStep>, low: usize, high: usize, v: &Unitary2x2) {
    let (low_b0, low_b1) = (low >> 1, low & 1);
    let (high_b0, high_b1) = (high >> 1, high & 1);

    // Pairs that differ in both bits are first mapped onto a pair differing in
    // b0 only, by a CX from qubit 0 to qubit 1.
    let (control, target, control_value, conjugate) = if low_b0 == high_b0 {
        (0, 1, low_b0, false)
    } else if low_b1 == high_b1 {
        (1, 0, low_b1, false)
    } else {
        (1, 0, low_b1, true)
    };

    let entangle = TwoQubitStep::Cx {
        control: 0,
        target: 1,
    };
    if conjugate {
        steps.push(entangle);
    }
    if control_value == 0 {
        steps.push(TwoQubitStep::X { qubit: control });
    }
    push_controlled(steps, control, target, v);
    if control_value == 0 {
        steps.push(TwoQubitStep::X { qubit: control });
    }
    if conjugate {
        steps.push(entangle);
    }
}

/// Append an exact controlled-`v`.
///
/// With `v = e^{i phase} Rz(alpha) Ry(beta) Rz(gamma)` the target sees
/// `C`, `X`, `B`, `X`, `A` where `ABC = I`, and the phase moves to the control.
fn push_controlled(steps: &mut Vec<TwoQubitStep>, control: usize, target: usize, v: &Unitary2x2) {
    let (alpha, beta, gamma, phase) = v.zyz_decomposition();
    steps.extend([
        TwoQubitStep::U1 {
            qubit: target,
            lambda: (gamma - alpha) / 2.0,
        },
        TwoQubitStep::Cx { control, target },
        TwoQubitStep::U3 {
            qubit: target,
            theta: -beta / 2.0,
            phi: 0.0,
            lambda: -(gamma + alpha) / 2.0,
        },
        TwoQubitStep::Cx { control, target },
        TwoQubitStep::U3 {
            qubit: target,
            theta: beta / 2.0,
            phi: alpha,
            lambda: 0.0,
        },
        TwoQubitStep::U1 {
            qubit: control,
            lambda: phase,
        },
    ]);
}

fn approx_eq_up_to_phase(a: &[Complex64], b: &[Complex64], tolerance: f64) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let Some((x, y)) = a.iter().zip(b).find(|(_, y)| y.norm() > tolerance) else {
        return a.iter().all(|x| x.norm() <= tolerance);
    };
    let phase = x / y;
    if (phase.norm() - 1.0).abs() > tolerance {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| (x - phase * y).norm() <= tolerance)
}
