//! Braket gate types and the Braket gate name table.

use qbridge_ir::GateName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Braket gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateType {
    H,
    X,
    Y,
    Z,
    S,
    Si,
    T,
    Ti,
    I,
    V,
    Vi,
    PhaseShift,
    Rx,
    Ry,
    Rz,
    CNot,
    CY,
    CZ,
    Swap,
    ISwap,
    CPhaseShift,
    XX,
    YY,
    ZZ,
    CCNot,
    XY,
    PSwap,
    Unitary,
    CSwap,
    Ecr,
}

impl GateType {
    /// Name as Braket prints it.
    pub fn braket_name(self) -> &'static str {
        match self {
            GateType::H => "H",
            GateType::X => "X",
            GateType::Y => "Y",
            GateType::Z => "Z",
            GateType::S => "S",
            GateType::Si => "Si",
            GateType::T => "T",
            GateType::Ti => "Ti",
            GateType::I => "I",
            GateType::V => "V",
            GateType::Vi => "Vi",
            GateType::PhaseShift => "PhaseShift",
            GateType::Rx => "Rx",
            GateType::Ry => "Ry",
            GateType::Rz => "Rz",
            GateType::CNot => "CNot",
            GateType::CY => "CY",
            GateType::CZ => "CZ",
            GateType::Swap => "Swap",
            GateType::ISwap => "ISwap",
            GateType::CPhaseShift => "CPhaseShift",
            GateType::XX => "XX",
            GateType::YY => "YY",
            GateType::ZZ => "ZZ",
            GateType::CCNot => "CCNot",
            GateType::XY => "XY",
            GateType::PSwap => "PSwap",
            GateType::Unitary => "Unitary",
            GateType::CSwap => "CSwap",
            GateType::Ecr => "ECR",
        }
    }

    /// Fixed qubit count, `None` for `Unitary`.
    pub fn num_qubits(self) -> Option<usize> {
        match self {
            GateType::CSwap => Some(3),
            GateType::Ecr => Some(2),
            other => to_canonical(other).and_then(GateName::num_qubits),
        }
    }

    /// Number of angles.
    pub fn num_angles(self) -> usize {
        match self {
            GateType::Unitary => 0,
            other => to_canonical(other).map_or(0, GateName::num_params),
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.braket_name())
    }
}

/// The Braket gate for a canonical name, or `None` where Braket has no
/// counterpart.
pub fn from_canonical(name: GateName) -> Option<GateType> {
    let gate = match name {
        GateName::H => GateType::H,
        GateName::X => GateType::X,
        GateName::Y => GateType::Y,
        GateName::Z => GateType::Z,
        GateName::S => GateType::S,
        GateName::Sdg => GateType::Si,
        GateName::T => GateType::T,
        GateName::Tdg => GateType::Ti,
        GateName::I => GateType::I,
        GateName::SX => GateType::V,
        GateName::SXdg => GateType::Vi,
        GateName::Phase | GateName::U1 => GateType::PhaseShift,
        GateName::RX => GateType::Rx,
        GateName::RY => GateType::Ry,
        GateName::RZ => GateType::Rz,
        GateName::CX => GateType::CNot,
        GateName::CY => GateType::CY,
        GateName::CZ => GateType::CZ,
        GateName::Swap => GateType::Swap,
        GateName::ISwap => GateType::ISwap,
        GateName::CPhase => GateType::CPhaseShift,
        GateName::RXX => GateType::XX,
        GateName::RYY => GateType::YY,
        GateName::RZZ => GateType::ZZ,
        GateName::CCX => GateType::CCNot,
        GateName::RXY => GateType::XY,
        GateName::PSwap => GateType::PSwap,
        GateName::Unitary => GateType::Unitary,
        GateName::R
        | GateName::U2
        | GateName::U
        | GateName::U3
        | GateName::CH
        | GateName::CSX
        | GateName::DCX
        | GateName::CRX
        | GateName::CRY
        | GateName::CRZ
        | GateName::RZX
        | GateName::CU1
        | GateName::RCCX
        | GateName::RC3X
        | GateName::Measure => return None,
    };
    Some(gate)
}

/// The canonical name of a Braket gate.
///
/// `PhaseShift` reads back as `Phase`.
pub fn to_canonical(gate: GateType) -> Option<GateName> {
    let name = match gate {
        GateType::H => GateName::H,
        GateType::X => GateName::X,
        GateType::Y => GateName::Y,
        GateType::Z => GateName::Z,
        GateType::S => GateName::S,
        GateType::Si => GateName::Sdg,
        GateType::T => GateName::T,
        GateType::Ti => GateName::Tdg,
        GateType::I => GateName::I,
        GateType::V => GateName::SX,
        GateType::Vi => GateName::SXdg,
        GateType::PhaseShift => GateName::Phase,
        GateType::Rx => GateName::RX,
        GateType::Ry => GateName::RY,
        GateType::Rz => GateName::RZ,
        GateType::CNot => GateName::CX,
        GateType::CY => GateName::CY,
        GateType::CZ => GateName::CZ,
        GateType::Swap => GateName::Swap,
        GateType::ISwap => GateName::ISwap,
        GateType::CPhaseShift => GateName::CPhase,
        GateType::XX => GateName::RXX,
        GateType::YY => GateName::RYY,
        GateType::ZZ => GateName::RZZ,
        GateType::CCNot => GateName::CCX,
        GateType::XY => GateName::RXY,
        GateType::PSwap => GateName::PSwap,
        GateType::Unitary => GateName::Unitary,
        GateType::CSwap | GateType::Ecr => return None,
    };
    Some(name)
}
