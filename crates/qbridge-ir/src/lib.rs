//! qbridge Circuit Intermediate Representation
//!
//! This crate holds the vendor-neutral model every transpilation goes
//! through. A vendor adapter walks its native circuit once, feeding each
//! operation to a [`CircuitBuilder`]; the resulting [`CircuitIr`] can then be
//! re-emitted to another vendor or rendered as OpenQASM.
//!
//! # Core Components
//!
//! - **Atoms**: [`Qubit`], [`Clbit`] and [`Symbol`], identity-compared and
//!   indexed by their owning set
//! - **Identifier sets**: [`IdentifierSet`] maps native atoms to IR atoms;
//!   [`AtomSet::materialize`] maps them back out for a target vendor
//! - **Parameters**: [`Parameter`] is a symbol, a number, or a homogeneous
//!   [`Sequence`]
//! - **Instructions**: [`Instruction`] pairs a [`GateName`] with its operands
//! - **Errors**: [`IrError`] for structural problems, [`PackageError`] for
//!   cross-vendor failures
//!
//! # Example
//!
//! ```rust
//! use qbridge_ir::{CircuitBuilder, GateName, NativeAtom, NativeValue, Vendor};
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Wire(u32);
//!
//! impl NativeAtom for Wire {
//!     fn label(&self) -> String {
//!         format!("w{}", self.0)
//!     }
//! }
//!
//! let mut builder: CircuitBuilder<Wire, Wire, Wire> = CircuitBuilder::new(Vendor::Braket);
//! builder.declare_qubits(&[Wire(0), Wire(1)]);
//! builder.push(GateName::H, &[Wire(0)], &[], &[]).unwrap();
//! builder.push(GateName::CPhase, &[Wire(0), Wire(1)], &[], &[NativeValue::Float(0.5)]).unwrap();
//!
//! let ir = builder.finish();
//! assert_eq!(ir.num_qubits(), 2);
//! assert_eq!(ir.instructions()[1].name(), GateName::CPhase);
//! ```

pub mod builder;
pub mod circuit;
pub mod error;
pub mod gate;
pub mod idset;
pub mod instruction;
pub mod matrix;
pub mod parameter;
pub mod qubit;
pub mod vendor;

pub use builder::CircuitBuilder;
pub use circuit::CircuitIr;
pub use error::{IrError, IrResult, PackageError, PackageResult};
pub use gate::{GateName, UnknownGate};
pub use idset::{Atom, AtomSet, IdentifierSet, Materialized, NativeAtom, SetId};
pub use instruction::Instruction;
pub use matrix::{matrix_width, reverse_qubit_order};
pub use parameter::{NativeValue, Number, Parameter, ParameterSet, Sequence, Symbol};
pub use qubit::{Clbit, Qubit};
pub use vendor::{UnknownVendor, Vendor};
