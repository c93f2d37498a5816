//! OpenQASM 2.0 output for qbridge circuits.
//!
//! This crate renders a [`qbridge_ir::CircuitIr`] (or any instruction
//! sequence over a fixed qubit ordering) as OpenQASM 2.0 text. Gates outside
//! `qelib1.inc` are decomposed recursively by exact rules; arbitrary 1- and
//! 2-qubit unitaries fall back to generic `u3` / `cx` sequences.
//!
//! # Example
//!
//! ```ignore
//! use qbridge_qasm::{QasmOptions, QasmOutput};
//!
//! let output = QasmOutput::from_circuit(&ir, &QasmOptions::default())?;
//! println!("{output}");
//! output.save("bell.qasm")?;
//! ```

pub mod decompose;
pub mod emitter;
pub mod error;
pub mod format;
pub mod unitary;

pub use decompose::{Operation, decompose, is_native};
pub use emitter::{
    MAX_PRECISION, MeasurementRegister, QASM_VERSION, QasmOptions, QasmOutput, circuit_to_qasm,
};
pub use error::{QasmError, QasmResult};
pub use format::{format_angle, format_float, is_valid_qasm_id};
pub use unitary::{TwoQubitStep, Unitary2x2, Unitary4x4};
