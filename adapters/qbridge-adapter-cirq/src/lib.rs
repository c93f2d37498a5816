//! qbridge Adapter for Cirq
//!
//! Models Cirq circuits (qids, moments, symbols and keyed measurements) and
//! converts them to and from the circuit IR.
//!
//! # Gate Coverage
//!
//! | Canonical | Cirq |
//! |-----------|------|
//! | H X Y Z S Sdg T Tdg I SX SXdg | same |
//! | Phase, U1 | ZPowGate |
//! | RX RY RZ | Rx Ry Rz |
//! | CH | ControlledH |
//! | CX CY CZ Swap ISwap | CNOT CY CZ SWAP ISWAP |
//! | CPhase, CU1 | CZPowGate |
//! | RXX RYY RZZ | XXPowGate YYPowGate ZZPowGate |
//! | CCX | TOFFOLI |
//! | Unitary | MatrixGate |
//! | Measure | MeasurementGate |
//!
//! `ResetChannel`, `FREDKIN` and `PhasedXPowGate` have no canonical name.
//!
//! # Example
//!
//! ```rust
//! use qbridge_adapter_cirq::{Circuit, GateType, Operation, line_qubits, to_ir};
//!
//! let q = line_qubits(2);
//! let mut circuit = Circuit::new();
//! circuit
//!     .append(Operation::on(GateType::H, &q[..1]))?
//!     .append(Operation::on(GateType::CNot, &q))?
//!     .append(Operation::measure(&q, "result"))?;
//!
//! let ir = to_ir(&circuit)?;
//! assert_eq!(ir.num_clbits(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod circuit;
pub mod convert;
mod error;
pub mod gates;

pub use circuit::{Circuit, MeasurementBit, Moment, Operation, ParamValue, Qid, Symbol, line_qubits};
pub use convert::{from_ir, to_ir};
pub use error::{CirqError, CirqResult};
pub use gates::GateType;
