//! qbridge Adapter for Qiskit
//!
//! This crate models the Qiskit circuit objects qbridge transpiles from and
//! to, and converts them to and from the vendor-neutral circuit IR.
//!
//! # Gate Coverage
//!
//! Every canonical gate except `RXY` and `PSwap` has a Qiskit class. The
//! classes `Barrier`, `Reset` and `CSwapGate` have no canonical name and are
//! rejected when building the IR.
//!
//! # Conventions
//!
//! - Qubits and clbits are labelled `<register><index>` (e.g. `q0`, `c1`);
//!   a clbit's label is its measurement key.
//! - `UnitaryGate` matrices are little-endian, as in Qiskit, and are
//!   reordered on the way into and out of the IR.
//!
//! # Example
//!
//! ```rust
//! use qbridge_adapter_qiskit::{QuantumCircuit, to_ir};
//!
//! let mut qc = QuantumCircuit::with_size(2, 2);
//! qc.h(0)?.cx(0, 1)?.measure_all()?;
//!
//! let ir = to_ir(&qc)?;
//! assert_eq!(ir.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod circuit;
pub mod convert;
mod error;
pub mod gates;

pub use circuit::{
    Bit, CircuitInstruction, ClassicalRegister, Clbit, ParamValue, Parameter, QuantumCircuit,
    QuantumRegister, Qubit,
};
pub use convert::{from_ir, to_ir};
pub use error::{QiskitError, QiskitResult};
pub use gates::GateType;
