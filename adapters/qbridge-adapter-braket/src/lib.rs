//! qbridge Adapter for Amazon Braket
//!
//! Models Braket circuits and converts them to and from the circuit IR.
//!
//! # Capabilities
//!
//! | Feature | Supported |
//! |---------|-----------|
//! | Free parameters | No |
//! | Measurement instructions | No |
//! | Classical bits | No |
//! | Unitary matrices | Yes, big-endian |
//!
//! Emitting an IR with free parameters fails with
//! [`PackageError::UnsupportedFeature`](qbridge_ir::PackageError); a
//! measurement fails like any other gate Braket lacks. `CSwap` and `ECR`
//! have no canonical name.
//!
//! # Example
//!
//! ```rust
//! use qbridge_adapter_braket::{Circuit, to_ir};
//!
//! let mut circuit = Circuit::new();
//! circuit.h(0)?.cnot(0, 1)?;
//!
//! let ir = to_ir(&circuit)?;
//! assert_eq!(ir.num_qubits(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod circuit;
pub mod convert;
mod error;
pub mod gates;

pub use circuit::{Circuit, Instruction, Never, Qubit};
pub use convert::{from_ir, to_ir};
pub use error::{BraketError, BraketResult};
pub use gates::GateType;
