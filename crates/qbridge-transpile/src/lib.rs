//! qbridge Cross-Vendor Transpilation
//!
//! This crate ties the vendor adapters together. A [`CircuitWrapper`] takes
//! a circuit in any supported framework, builds its IR once, and hands out
//! the same circuit in any other framework or as OpenQASM 2.0.
//!
//! # Supported Vendors
//!
//! | Vendor | Model | Free parameters | Measurements |
//! |--------|-------|-----------------|--------------|
//! | Qiskit | `QuantumCircuit` | Yes | Yes |
//! | Cirq | `Circuit` of moments | Yes | Yes, keyed |
//! | Braket | `Circuit` | No | No |
//!
//! Gates a target cannot express fail with
//! [`PackageError::UnsupportedGate`]; see [`capability`] for the full matrix.
//!
//! # Example
//!
//! ```rust
//! use qbridge_adapter_qiskit::QuantumCircuit;
//! use qbridge_transpile::{CircuitWrapper, QasmOptions, Vendor};
//!
//! let mut qc = QuantumCircuit::with_size(2, 2);
//! qc.h(0)?.cx(0, 1)?.measure_all()?;
//!
//! let wrapper = CircuitWrapper::new(qc)?;
//! let cirq = wrapper.transpile(Vendor::Cirq)?;
//! assert_eq!(cirq.len(), 4);
//!
//! let qasm = wrapper.to_qasm(&QasmOptions::default())?;
//! assert!(qasm.as_str().contains("creg m_c0[1];"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod capability;
pub mod config;
pub mod logging;
pub mod native;
pub mod wrapper;

pub use config::{Config, ConfigError, LoggingConfig};
pub use logging::{LogError, LogFormat};
pub use native::NativeCircuit;
pub use wrapper::CircuitWrapper;

// Re-export common types
pub use qbridge_ir::{GateName, PackageError, PackageResult, Vendor};
pub use qbridge_qasm::{QasmError, QasmOptions, QasmOutput};
