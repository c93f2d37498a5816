//! Capability matrix derived from the adapters' gate name tables.

use qbridge_adapter_braket as braket;
use qbridge_adapter_cirq as cirq;
use qbridge_adapter_qiskit as qiskit;
use qbridge_ir::{GateName, Vendor};

/// Native name of `gate` in `vendor`'s model.
pub fn native_name(vendor: Vendor, gate: GateName) -> Option<&'static str> {
    match vendor {
        Vendor::Qiskit => qiskit::gates::from_canonical(gate).map(qiskit::GateType::class_name),
        Vendor::Cirq => cirq::gates::from_canonical(gate).map(cirq::GateType::cirq_name),
        Vendor::Braket => braket::gates::from_canonical(gate).map(braket::GateType::braket_name),
    }
}

/// Whether `vendor` can express `gate`.
pub fn supports(vendor: Vendor, gate: GateName) -> bool {
    native_name(vendor, gate).is_some()
}

/// Canonical names `vendor` cannot express, in canonical order.
pub fn gaps(vendor: Vendor) -> Vec<GateName> {
    GateName::ALL
        .into_iter()
        .filter(|g| !supports(vendor, *g))
        .collect()
}

/// Whether `vendor` accepts circuits with free parameters.
pub fn supports_parameters(vendor: Vendor) -> bool {
    !matches!(vendor, Vendor::Braket)
}
