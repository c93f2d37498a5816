//! Conversion between Braket circuits and the circuit IR.

use crate::circuit::{Circuit, Instruction, Never, Qubit};
use crate::error::BraketError;
use crate::gates::{self, GateType};
use qbridge_ir::{
    Atom, CircuitBuilder, CircuitIr, NativeValue, PackageError, PackageResult, Vendor,
};
use tracing::debug;

/// Build the IR of a Braket circuit.
///
/// Qubits are indexed in ascending address order.
pub fn to_ir(circuit: &Circuit) -> PackageResult<CircuitIr> {
    let mut builder: CircuitBuilder<Qubit, Never, Never> = CircuitBuilder::new(Vendor::Braket);
    let qubits: Vec<Qubit> = circuit.qubits().into_iter().collect();
    builder.declare_qubits(&qubits);

    for inst in circuit.instructions() {
        let name = gates::to_canonical(inst.gate).ok_or_else(|| PackageError::UnmappedGate {
            vendor: Vendor::Braket,
            gate_type: inst.gate.to_string(),
        })?;
        let params: Vec<NativeValue<Never>> = match &inst.matrix {
            Some(matrix) => vec![NativeValue::List(
                matrix.iter().copied().map(NativeValue::Complex).collect(),
            )],
            None => inst.angles.iter().copied().map(NativeValue::Float).collect(),
        };
        builder.push(name, &inst.targets, &[], &params)?;
    }

    let ir = builder.finish();
    debug!(
        instructions = ir.len(),
        qubits = ir.num_qubits(),
        "Built IR from Braket circuit"
    );
    Ok(ir)
}

/// Emit the IR as a Braket circuit.
///
/// IR qubit `i` becomes qubit address `i`. Circuits with free parameters are
/// rejected before any instruction is looked at.
pub fn from_ir(ir: &CircuitIr) -> PackageResult<Circuit> {
    if ir.is_parameterized() {
        return Err(PackageError::UnsupportedFeature {
            vendor: Vendor::Braket,
            feature: "parameterized circuits",
        });
    }

    let qubits = ir.qubits().try_materialize(|q| {
        u32::try_from(q.index())
            .map(Qubit)
            .map_err(|_| BraketError::QubitIndex(q.index()))
    })?;

    let mut circuit = Circuit::new();
    for inst in ir.instructions() {
        let gate = gates::from_canonical(inst.name()).ok_or_else(|| PackageError::UnsupportedGate {
            gate: inst.name(),
            origin: ir.source(),
            target: Vendor::Braket,
        })?;
        let targets = qubits.resolve(inst.qubits())?;

        let native = if gate == GateType::Unitary {
            let matrix = inst
                .matrix()
                .ok_or_else(|| BraketError::InvalidMatrix("entries must be numbers".to_string()))?;
            Instruction {
                gate,
                targets,
                angles: Vec::new(),
                matrix: Some(matrix),
            }
        } else {
            let angles = inst
                .params()
                .iter()
                .map(|p| {
                    p.as_f64().ok_or_else(|| BraketError::InvalidParameter {
                        gate: gate.to_string(),
                        reason: format!("'{p}' is not an angle"),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Instruction {
                gate,
                targets,
                angles,
                matrix: None,
            }
        };
        circuit.add(native)?;
    }

    debug!(
        instructions = circuit.len(),
        source = %ir.source(),
        "Emitted Braket circuit"
    );
    Ok(circuit)
}
