//! Canonical gate names shared by every vendor table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vendor-neutral name of a gate.
///
/// Each vendor table maps a subset of these names to a native gate type.
/// A name missing from a table is a deliberate gap, reported as an error at
/// emission time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GateName {
    // Single-qubit, fixed
    H,
    X,
    Y,
    Z,
    S,
    Sdg,
    T,
    Tdg,
    I,
    SX,
    SXdg,

    // Single-qubit, parameterized
    Phase,
    RX,
    RY,
    RZ,
    U1,
    /// Rotation by θ about the axis cos(φ)X + sin(φ)Y.
    R,
    U2,
    U,
    U3,

    // Two-qubit
    CH,
    CX,
    Swap,
    ISwap,
    CSX,
    DCX,
    CY,
    CZ,
    CPhase,
    CRX,
    RXX,
    CRY,
    RYY,
    CRZ,
    RZX,
    RZZ,
    CU1,
    RXY,
    PSwap,

    // Multi-qubit
    /// Simplified Toffoli, equal to CCX up to a relative phase.
    RCCX,
    /// Simplified 3-controlled X.
    RC3X,
    CCX,

    // Non-standard
    /// Arbitrary unitary carried as a matrix parameter.
    Unitary,
    Measure,
}

impl GateName {
    /// Every canonical name.
    pub const ALL: [GateName; 44] = [
        GateName::H,
        GateName::X,
        GateName::Y,
        GateName::Z,
        GateName::S,
        GateName::Sdg,
        GateName::T,
        GateName::Tdg,
        GateName::I,
        GateName::SX,
        GateName::SXdg,
        GateName::Phase,
        GateName::RX,
        GateName::RY,
        GateName::RZ,
        GateName::U1,
        GateName::R,
        GateName::U2,
        GateName::U,
        GateName::U3,
        GateName::CH,
        GateName::CX,
        GateName::Swap,
        GateName::ISwap,
        GateName::CSX,
        GateName::DCX,
        GateName::CY,
        GateName::CZ,
        GateName::CPhase,
        GateName::CRX,
        GateName::RXX,
        GateName::CRY,
        GateName::RYY,
        GateName::CRZ,
        GateName::RZX,
        GateName::RZZ,
        GateName::CU1,
        GateName::RXY,
        GateName::PSwap,
        GateName::RCCX,
        GateName::RC3X,
        GateName::CCX,
        GateName::Unitary,
        GateName::Measure,
    ];

    /// Canonical spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            GateName::H => "H",
            GateName::X => "X",
            GateName::Y => "Y",
            GateName::Z => "Z",
            GateName::S => "S",
            GateName::Sdg => "Sdg",
            GateName::T => "T",
            GateName::Tdg => "Tdg",
            GateName::I => "I",
            GateName::SX => "SX",
            GateName::SXdg => "SXdg",
            GateName::Phase => "Phase",
            GateName::RX => "RX",
            GateName::RY => "RY",
            GateName::RZ => "RZ",
            GateName::U1 => "U1",
            GateName::R => "R",
            GateName::U2 => "U2",
            GateName::U => "U",
            GateName::U3 => "U3",
            GateName::CH => "CH",
            GateName::CX => "CX",
            GateName::Swap => "Swap",
            GateName::ISwap => "iSwap",
            GateName::CSX => "CSX",
            GateName::DCX => "DCX",
            GateName::CY => "CY",
            GateName::CZ => "CZ",
            GateName::CPhase => "CPhase",
            GateName::CRX => "CRX",
            GateName::RXX => "RXX",
            GateName::CRY => "CRY",
            GateName::RYY => "RYY",
            GateName::CRZ => "CRZ",
            GateName::RZX => "RZX",
            GateName::RZZ => "RZZ",
            GateName::CU1 => "CU1",
            GateName::RXY => "RXY",
            GateName::PSwap => "pSwap",
            GateName::RCCX => "RCCX",
            GateName::RC3X => "RC3X",
            GateName::CCX => "CCX",
            GateName::Unitary => "Unitary",
            GateName::Measure => "MEASURE",
        }
    }

    /// Number of qubit operands, or `None` when the width is carried by the
    /// operation itself (`Unitary`, `Measure`).
    pub fn num_qubits(self) -> Option<usize> {
        match self {
            GateName::H
            | GateName::X
            | GateName::Y
            | GateName::Z
            | GateName::S
            | GateName::Sdg
            | GateName::T
            | GateName::Tdg
            | GateName::I
            | GateName::SX
            | GateName::SXdg
            | GateName::Phase
            | GateName::RX
            | GateName::RY
            | GateName::RZ
            | GateName::U1
            | GateName::R
            | GateName::U2
            | GateName::U
            | GateName::U3 => Some(1),
            GateName::CH
            | GateName::CX
            | GateName::Swap
            | GateName::ISwap
            | GateName::CSX
            | GateName::DCX
            | GateName::CY
            | GateName::CZ
            | GateName::CPhase
            | GateName::CRX
            | GateName::RXX
            | GateName::CRY
            | GateName::RYY
            | GateName::CRZ
            | GateName::RZX
            | GateName::RZZ
            | GateName::CU1
            | GateName::RXY
            | GateName::PSwap => Some(2),
            GateName::RCCX | GateName::CCX => Some(3),
            GateName::RC3X => Some(4),
            GateName::Unitary | GateName::Measure => None,
        }
    }

    /// Number of parameters the gate takes.
    pub fn num_params(self) -> usize {
        match self {
            GateName::Phase
            | GateName::RX
            | GateName::RY
            | GateName::RZ
            | GateName::U1
            | GateName::CPhase
            | GateName::CRX
            | GateName::RXX
            | GateName::CRY
            | GateName::RYY
            | GateName::CRZ
            | GateName::RZX
            | GateName::RZZ
            | GateName::CU1
            | GateName::RXY
            | GateName::PSwap
            | GateName::Unitary => 1,
            GateName::R | GateName::U2 => 2,
            GateName::U | GateName::U3 => 3,
            _ => 0,
        }
    }

    /// Whether the gate takes a continuous angle.
    pub fn is_parameterized(self) -> bool {
        self.num_params() > 0 && self != GateName::Unitary
    }
}

impl fmt::Display for GateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a canonical gate name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gate '{0}'")]
pub struct UnknownGate(pub String);

impl FromStr for GateName {
    type Err = UnknownGate;

    /// Parses a canonical name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateName::ALL
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownGate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("iswap".parse::<GateName>(), Ok(GateName::ISwap));
        assert_eq!("PSWAP".parse::<GateName>(), Ok(GateName::PSwap));
        assert_eq!("measure".parse::<GateName>(), Ok(GateName::Measure));
        assert_eq!(
            "ecr".parse::<GateName>().unwrap_err().to_string(),
            "unknown gate 'ecr'"
        );
    }

    #[test]
    fn test_names_are_distinct() {
        let names: FxHashSet<_> = GateName::ALL.iter().map(|g| g.as_str()).collect();
        assert_eq!(names.len(), 44);
    }

    #[test]
    fn test_arity() {
        assert_eq!(GateName::H.num_qubits(), Some(1));
        assert_eq!(GateName::RXY.num_qubits(), Some(2));
        assert_eq!(GateName::RC3X.num_qubits(), Some(4));
        assert_eq!(GateName::Unitary.num_qubits(), None);
        assert_eq!(GateName::U3.num_params(), 3);
        assert_eq!(GateName::R.num_params(), 2);
        assert!(!GateName::Unitary.is_parameterized());
        assert!(GateName::CPhase.is_parameterized());
    }
}
