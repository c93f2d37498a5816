//! Qiskit gate classes and the Qiskit gate name table.

use qbridge_ir::GateName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A Qiskit instruction class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateType {
    HGate,
    XGate,
    YGate,
    ZGate,
    SGate,
    SdgGate,
    TGate,
    TdgGate,
    IGate,
    SXGate,
    SXdgGate,
    PhaseGate,
    RXGate,
    RYGate,
    RZGate,
    U1Gate,
    RGate,
    U2Gate,
    UGate,
    U3Gate,
    CHGate,
    CXGate,
    SwapGate,
    ISwapGate,
    CSXGate,
    DCXGate,
    CYGate,
    CZGate,
    CPhaseGate,
    CRXGate,
    RXXGate,
    CRYGate,
    RYYGate,
    CRZGate,
    RZXGate,
    RZZGate,
    CU1Gate,
    RCCXGate,
    RC3XGate,
    CCXGate,
    CSwapGate,
    UnitaryGate,
    Measure,
    Barrier,
    Reset,
}

impl GateType {
    /// Qiskit class name.
    pub fn class_name(self) -> &'static str {
        match self {
            GateType::HGate => "HGate",
            GateType::XGate => "XGate",
            GateType::YGate => "YGate",
            GateType::ZGate => "ZGate",
            GateType::SGate => "SGate",
            GateType::SdgGate => "SdgGate",
            GateType::TGate => "TGate",
            GateType::TdgGate => "TdgGate",
            GateType::IGate => "IGate",
            GateType::SXGate => "SXGate",
            GateType::SXdgGate => "SXdgGate",
            GateType::PhaseGate => "PhaseGate",
            GateType::RXGate => "RXGate",
            GateType::RYGate => "RYGate",
            GateType::RZGate => "RZGate",
            GateType::U1Gate => "U1Gate",
            GateType::RGate => "RGate",
            GateType::U2Gate => "U2Gate",
            GateType::UGate => "UGate",
            GateType::U3Gate => "U3Gate",
            GateType::CHGate => "CHGate",
            GateType::CXGate => "CXGate",
            GateType::SwapGate => "SwapGate",
            GateType::ISwapGate => "iSwapGate",
            GateType::CSXGate => "CSXGate",
            GateType::DCXGate => "DCXGate",
            GateType::CYGate => "CYGate",
            GateType::CZGate => "CZGate",
            GateType::CPhaseGate => "CPhaseGate",
            GateType::CRXGate => "CRXGate",
            GateType::RXXGate => "RXXGate",
            GateType::CRYGate => "CRYGate",
            GateType::RYYGate => "RYYGate",
            GateType::CRZGate => "CRZGate",
            GateType::RZXGate => "RZXGate",
            GateType::RZZGate => "RZZGate",
            GateType::CU1Gate => "CU1Gate",
            GateType::RCCXGate => "RCCXGate",
            GateType::RC3XGate => "RC3XGate",
            GateType::CCXGate => "CCXGate",
            GateType::CSwapGate => "CSwapGate",
            GateType::UnitaryGate => "UnitaryGate",
            GateType::Measure => "Measure",
            GateType::Barrier => "Barrier",
            GateType::Reset => "Reset",
        }
    }

    /// Fixed qubit count, `None` for variable-width instructions.
    pub fn num_qubits(self) -> Option<usize> {
        match self {
            GateType::UnitaryGate | GateType::Measure | GateType::Barrier => None,
            GateType::Reset => Some(1),
            GateType::CSwapGate => Some(3),
            other => to_canonical(other).and_then(GateName::num_qubits),
        }
    }

    /// Number of parameters.
    pub fn num_params(self) -> usize {
        to_canonical(self).map_or(0, GateName::num_params)
    }
}

impl fmt::Display for GateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The Qiskit class for a canonical name, or `None` where Qiskit has no
/// counterpart.
pub fn from_canonical(name: GateName) -> Option<GateType> {
    let gate = match name {
        GateName::H => GateType::HGate,
        GateName::X => GateType::XGate,
        GateName::Y => GateType::YGate,
        GateName::Z => GateType::ZGate,
        GateName::S => GateType::SGate,
        GateName::Sdg => GateType::SdgGate,
        GateName::T => GateType::TGate,
        GateName::Tdg => GateType::TdgGate,
        GateName::I => GateType::IGate,
        GateName::SX => GateType::SXGate,
        GateName::SXdg => GateType::SXdgGate,
        GateName::Phase => GateType::PhaseGate,
        GateName::RX => GateType::RXGate,
        GateName::RY => GateType::RYGate,
        GateName::RZ => GateType::RZGate,
        GateName::U1 => GateType::U1Gate,
        GateName::R => GateType::RGate,
        GateName::U2 => GateType::U2Gate,
        GateName::U => GateType::UGate,
        GateName::U3 => GateType::U3Gate,
        GateName::CH => GateType::CHGate,
        GateName::CX => GateType::CXGate,
        GateName::Swap => GateType::SwapGate,
        GateName::ISwap => GateType::ISwapGate,
        GateName::CSX => GateType::CSXGate,
        GateName::DCX => GateType::DCXGate,
        GateName::CY => GateType::CYGate,
        GateName::CZ => GateType::CZGate,
        GateName::CPhase => GateType::CPhaseGate,
        GateName::CRX => GateType::CRXGate,
        GateName::RXX => GateType::RXXGate,
        GateName::CRY => GateType::CRYGate,
        GateName::RYY => GateType::RYYGate,
        GateName::CRZ => GateType::CRZGate,
        GateName::RZX => GateType::RZXGate,
        GateName::RZZ => GateType::RZZGate,
        GateName::CU1 => GateType::CU1Gate,
        GateName::RCCX => GateType::RCCXGate,
        GateName::RC3X => GateType::RC3XGate,
        GateName::CCX => GateType::CCXGate,
        GateName::Unitary => GateType::UnitaryGate,
        GateName::Measure => GateType::Measure,
        GateName::RXY | GateName::PSwap => return None,
    };
    Some(gate)
}

/// The canonical name of a Qiskit class, or `None` for classes outside the
/// canonical set.
pub fn to_canonical(gate: GateType) -> Option<GateName> {
    let name = match gate {
        GateType::HGate => GateName::H,
        GateType::XGate => GateName::X,
        GateType::YGate => GateName::Y,
        GateType::ZGate => GateName::Z,
        GateType::SGate => GateName::S,
        GateType::SdgGate => GateName::Sdg,
        GateType::TGate => GateName::T,
        GateType::TdgGate => GateName::Tdg,
        GateType::IGate => GateName::I,
        GateType::SXGate => GateName::SX,
        GateType::SXdgGate => GateName::SXdg,
        GateType::PhaseGate => GateName::Phase,
        GateType::RXGate => GateName::RX,
        GateType::RYGate => GateName::RY,
        GateType::RZGate => GateName::RZ,
        GateType::U1Gate => GateName::U1,
        GateType::RGate => GateName::R,
        GateType::U2Gate => GateName::U2,
        GateType::UGate => GateName::U,
        GateType::U3Gate => GateName::U3,
        GateType::CHGate => GateName::CH,
        GateType::CXGate => GateName::CX,
        GateType::SwapGate => GateName::Swap,
        GateType::ISwapGate => GateName::ISwap,
        GateType::CSXGate => GateName::CSX,
        GateType::DCXGate => GateName::DCX,
        GateType::CYGate => GateName::CY,
        GateType::CZGate => GateName::CZ,
        GateType::CPhaseGate => GateName::CPhase,
        GateType::CRXGate => GateName::CRX,
        GateType::RXXGate => GateName::RXX,
        GateType::CRYGate => GateName::CRY,
        GateType::RYYGate => GateName::RYY,
        GateType::CRZGate => GateName::CRZ,
        GateType::RZXGate => GateName::RZX,
        GateType::RZZGate => GateName::RZZ,
        GateType::CU1Gate => GateName::CU1,
        GateType::RCCXGate => GateName::RCCX,
        GateType::RC3XGate => GateName::RC3X,
        GateType::CCXGate => GateName::CCX,
        GateType::UnitaryGate => GateName::Unitary,
        GateType::Measure => GateName::Measure,
        GateType::CSwapGate | GateType::Barrier | GateType::Reset => return None,
    };
    Some(name)
}
