//! Conversion between Qiskit circuits and the circuit IR.

use crate::circuit::{Bit, ClassicalRegister, ParamValue, Parameter, QuantumCircuit, QuantumRegister};
use crate::error::QiskitError;
use crate::gates::{self, GateType};
use qbridge_ir::{
    Atom, CircuitBuilder, CircuitIr, Instruction, Materialized, NativeValue, PackageError,
    PackageResult, Vendor, reverse_qubit_order,
};
use tracing::debug;

/// Register names used for circuits emitted from the IR.
const QREG: &str = "q";
const CREG: &str = "c";

/// Build the IR of a Qiskit circuit.
///
/// Qubits and clbits are indexed in register declaration order. Unitary
/// matrices are converted from little-endian to the IR's big-endian order.
pub fn to_ir(circuit: &QuantumCircuit) -> PackageResult<CircuitIr> {
    let mut builder: CircuitBuilder<Bit, Bit, Parameter> = CircuitBuilder::new(Vendor::Qiskit);
    builder
        .declare_qubits(&circuit.qubits())
        .declare_clbits(&circuit.clbits());

    for inst in circuit.data() {
        let name = gates::to_canonical(inst.gate).ok_or_else(|| PackageError::UnmappedGate {
            vendor: Vendor::Qiskit,
            gate_type: inst.gate.to_string(),
        })?;
        let params: Vec<NativeValue<Parameter>> = inst
            .params
            .iter()
            .map(|p| match p {
                ParamValue::Number(v) => NativeValue::Float(*v),
                ParamValue::Parameter(p) => NativeValue::Symbol(p.clone()),
                ParamValue::Matrix(m) => NativeValue::List(
                    reverse_qubit_order(m, inst.qubits.len())
                        .into_iter()
                        .map(NativeValue::Complex)
                        .collect(),
                ),
            })
            .collect();
        builder.push(name, &inst.qubits, &inst.clbits, &params)?;
    }

    let ir = builder.finish();
    debug!(
        instructions = ir.len(),
        qubits = ir.num_qubits(),
        clbits = ir.num_clbits(),
        "Built IR from Qiskit circuit"
    );
    Ok(ir)
}

/// Emit the IR as a Qiskit circuit.
///
/// The result has one `q` register over all IR qubits and, when there are
/// classical bits, one `c` register. Each IR symbol becomes one fresh
/// [`Parameter`] shared by all its uses.
pub fn from_ir(ir: &CircuitIr) -> PackageResult<QuantumCircuit> {
    let mut circuit = QuantumCircuit::new(format!("{}_circuit", ir.source()));
    circuit.add_qreg(QuantumRegister::new(QREG, ir.num_qubits()))?;
    if ir.num_clbits() > 0 {
        circuit.add_creg(ClassicalRegister::new(CREG, ir.num_clbits()))?;
    }

    let qubits = ir.qubits().materialize(|q| Bit::new(QREG, q.index()));
    let clbits = ir.clbits().materialize(|c| Bit::new(CREG, c.index()));
    let params = ir.parameters().materialize(|s| Parameter::new(s.name()));

    for inst in ir.instructions() {
        let gate = gates::from_canonical(inst.name()).ok_or_else(|| PackageError::UnsupportedGate {
            gate: inst.name(),
            origin: ir.source(),
            target: Vendor::Qiskit,
        })?;
        let values = param_values(gate, inst, &params)?;
        circuit.append(
            gate,
            qubits.resolve(inst.qubits())?,
            clbits.resolve(inst.clbits())?,
            values,
        )?;
    }

    debug!(
        instructions = circuit.len(),
        source = %ir.source(),
        "Emitted Qiskit circuit"
    );
    Ok(circuit)
}

fn param_values(
    gate: GateType,
    inst: &Instruction,
    params: &Materialized<Parameter>,
) -> PackageResult<Vec<ParamValue>> {
    if gate == GateType::UnitaryGate {
        let matrix = inst.matrix().ok_or_else(|| QiskitError::InvalidParameter {
            gate: gate.to_string(),
            reason: "matrix entries must be numbers".to_string(),
        })?;
        let little_endian = reverse_qubit_order(&matrix, inst.qubits().len());
        return Ok(vec![ParamValue::Matrix(little_endian)]);
    }

    inst.params()
        .iter()
        .map(|p| -> PackageResult<ParamValue> {
            if let Some(symbol) = p.as_symbol() {
                return Ok(ParamValue::Parameter(params.get(symbol)?.clone()));
            }
            let value = p.as_f64().ok_or_else(|| QiskitError::InvalidParameter {
                gate: gate.to_string(),
                reason: format!("'{p}' is not an angle"),
            })?;
            Ok(ParamValue::Number(value))
        })
        .collect()
}
