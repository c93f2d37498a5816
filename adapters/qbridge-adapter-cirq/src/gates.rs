//! Cirq gate types and the Cirq gate name table.

use qbridge_ir::GateName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Cirq gate type.
///
/// Rotation-like types take their angle in radians; exponent conventions
/// are left to the Cirq side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateType {
    H,
    X,
    Y,
    Z,
    S,
    SDagger,
    T,
    TDagger,
    Identity,
    SqrtX,
    SqrtXDagger,
    ZPow,
    Rx,
    Ry,
    Rz,
    ControlledH,
    CNot,
    CY,
    CZ,
    Swap,
    ISwap,
    CZPow,
    XX,
    YY,
    ZZ,
    Toffoli,
    MatrixGate,
    MeasurementGate,
    Reset,
    Fredkin,
    PhasedXPow,
}

impl GateType {
    /// Name as Cirq prints it.
    pub fn cirq_name(self) -> &'static str {
        match self {
            GateType::H => "H",
            GateType::X => "X",
            GateType::Y => "Y",
            GateType::Z => "Z",
            GateType::S => "S",
            GateType::SDagger => "S**-1",
            GateType::T => "T",
            GateType::TDagger => "T**-1",
            GateType::Identity => "I",
            GateType::SqrtX => "X**0.5",
            GateType::SqrtXDagger => "X**-0.5",
            GateType::ZPow => "ZPowGate",
            GateType::Rx => "Rx",
            GateType::Ry => "Ry",
            GateType::Rz => "Rz",
            GateType::ControlledH => "ControlledH",
            GateType::CNot => "CNOT",
            GateType::CY => "CY",
            GateType::CZ => "CZ",
            GateType::Swap => "SWAP",
            GateType::ISwap => "ISWAP",
            GateType::CZPow => "CZPowGate",
            GateType::XX => "XXPowGate",
            GateType::YY => "YYPowGate",
            GateType::ZZ => "ZZPowGate",
            GateType::Toffoli => "TOFFOLI",
            GateType::MatrixGate => "MatrixGate",
            GateType::MeasurementGate => "MeasurementGate",
            GateType::Reset => "ResetChannel",
            GateType::Fredkin => "FREDKIN",
            GateType::PhasedXPow => "PhasedXPowGate",
        }
    }

    /// Fixed qubit count, `None` for variable-width gates.
    pub fn num_qubits(self) -> Option<usize> {
        match self {
            GateType::MatrixGate | GateType::MeasurementGate => None,
            GateType::Reset | GateType::PhasedXPow => Some(1),
            GateType::Fredkin => Some(3),
            other => to_canonical(other).and_then(GateName::num_qubits),
        }
    }

    /// Number of parameters.
    pub fn num_params(self) -> usize {
        match self {
            GateType::PhasedXPow => 2,
            other => to_canonical(other).map_or(0, GateName::num_params),
        }
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cirq_name())
    }
}

/// The Cirq gate type for a canonical name, or `None` where Cirq has no
/// counterpart.
pub fn from_canonical(name: GateName) -> Option<GateType> {
    let gate = match name {
        GateName::H => GateType::H,
        GateName::X => GateType::X,
        GateName::Y => GateType::Y,
        GateName::Z => GateType::Z,
        GateName::S => GateType::S,
        GateName::Sdg => GateType::SDagger,
        GateName::T => GateType::T,
        GateName::Tdg => GateType::TDagger,
        GateName::I => GateType::Identity,
        GateName::SX => GateType::SqrtX,
        GateName::SXdg => GateType::SqrtXDagger,
        GateName::Phase | GateName::U1 => GateType::ZPow,
        GateName::RX => GateType::Rx,
        GateName::RY => GateType::Ry,
        GateName::RZ => GateType::Rz,
        GateName::CH => GateType::ControlledH,
        GateName::CX => GateType::CNot,
        GateName::CY => GateType::CY,
        GateName::CZ => GateType::CZ,
        GateName::Swap => GateType::Swap,
        GateName::ISwap => GateType::ISwap,
        GateName::CPhase | GateName::CU1 => GateType::CZPow,
        GateName::RXX => GateType::XX,
        GateName::RYY => GateType::YY,
        GateName::RZZ => GateType::ZZ,
        GateName::CCX => GateType::Toffoli,
        GateName::Unitary => GateType::MatrixGate,
        GateName::Measure => GateType::MeasurementGate,
        GateName::R
        | GateName::U2
        | GateName::U
        | GateName::U3
        | GateName::CSX
        | GateName::DCX
        | GateName::CRX
        | GateName::CRY
        | GateName::CRZ
        | GateName::RZX
        | GateName::RCCX
        | GateName::RC3X
        | GateName::RXY
        | GateName::PSwap => return None,
    };
    Some(gate)
}

/// The canonical name of a Cirq gate type.
///
/// `ZPow` and `CZPow` read back as `Phase` and `CPhase`.
pub fn to_canonical(gate: GateType) -> Option<GateName> {
    let name = match gate {
        GateType::H => GateName::H,
        GateType::X => GateName::X,
        GateType::Y => GateName::Y,
        GateType::Z => GateName::Z,
        GateType::S => GateName::S,
        GateType::SDagger => GateName::Sdg,
        GateType::T => GateName::T,
        GateType::TDagger => GateName::Tdg,
        GateType::Identity => GateName::I,
        GateType::SqrtX => GateName::SX,
        GateType::SqrtXDagger => GateName::SXdg,
        GateType::ZPow => GateName::Phase,
        GateType::Rx => GateName::RX,
        GateType::Ry => GateName::RY,
        GateType::Rz => GateName::RZ,
        GateType::ControlledH => GateName::CH,
        GateType::CNot => GateName::CX,
        GateType::CY => GateName::CY,
        GateType::CZ => GateName::CZ,
        GateType::Swap => GateName::Swap,
        GateType::ISwap => GateName::ISwap,
        GateType::CZPow => GateName::CPhase,
        GateType::XX => GateName::RXX,
        GateType::YY => GateName::RYY,
        GateType::ZZ => GateName::RZZ,
        GateType::Toffoli => GateName::CCX,
        GateType::MatrixGate => GateName::Unitary,
        GateType::MeasurementGate => GateName::Measure,
        GateType::Reset | GateType::Fredkin | GateType::PhasedXPow => return None,
    };
    Some(name)
}
