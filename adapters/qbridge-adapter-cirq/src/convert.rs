//! Conversion between Cirq circuits and the circuit IR.

use crate::circuit::{Circuit, MeasurementBit, Operation, ParamValue, Qid, Symbol};
use crate::error::CirqError;
use crate::gates::{self, GateType};
use qbridge_ir::{
    Atom, CircuitBuilder, CircuitIr, GateName, Instruction, Materialized, NativeValue,
    PackageError, PackageResult, Vendor,
};
use tracing::debug;

/// Build the IR of a Cirq circuit.
///
/// Qubits are indexed in sorted `all_qubits` order. Each measurement
/// contributes one classical bit per measured qubit, labelled with its key.
pub fn to_ir(circuit: &Circuit) -> PackageResult<CircuitIr> {
    let mut builder: CircuitBuilder<Qid, MeasurementBit, Symbol> =
        CircuitBuilder::new(Vendor::Cirq);
    let qubits: Vec<Qid> = circuit.all_qubits().into_iter().collect();
    builder.declare_qubits(&qubits);

    for op in circuit.all_operations() {
        let name = gates::to_canonical(op.gate).ok_or_else(|| PackageError::UnmappedGate {
            vendor: Vendor::Cirq,
            gate_type: op.gate.to_string(),
        })?;
        let params: Vec<NativeValue<Symbol>> = op
            .params
            .iter()
            .map(|p| match p {
                ParamValue::Number(v) => NativeValue::Float(*v),
                ParamValue::Symbol(s) => NativeValue::Symbol(s.clone()),
                ParamValue::Matrix(m) => {
                    NativeValue::List(m.iter().copied().map(NativeValue::Complex).collect())
                }
            })
            .collect();
        builder.push(name, &op.qubits, &op.measurement_bits(), &params)?;
    }

    let ir = builder.finish();
    debug!(
        instructions = ir.len(),
        qubits = ir.num_qubits(),
        clbits = ir.num_clbits(),
        "Built IR from Cirq circuit"
    );
    Ok(ir)
}

/// Emit the IR as a Cirq circuit over line qubits.
///
/// IR qubit `i` becomes `LineQubit(i)`. A measurement keeps the key of its
/// first classical bit. Symbols are matched by name.
pub fn from_ir(ir: &CircuitIr) -> PackageResult<Circuit> {
    let qubits = ir.qubits().try_materialize(|q| {
        i64::try_from(q.index())
            .map(Qid::Line)
            .map_err(|_| CirqError::QubitIndex(q.index()))
    })?;
    let symbols = ir.parameters().materialize(|s| Symbol::new(s.name()));

    let mut circuit = Circuit::new();
    for inst in ir.instructions() {
        let gate = gates::from_canonical(inst.name()).ok_or_else(|| PackageError::UnsupportedGate {
            gate: inst.name(),
            origin: ir.source(),
            target: Vendor::Cirq,
        })?;
        let targets = qubits.resolve(inst.qubits())?;
        let op = match inst.name() {
            GateName::Measure => {
                let key = inst.measurement_key().ok_or_else(|| {
                    CirqError::MissingKey(format!("{targets:?}"))
                })?;
                Operation::measure(&targets, key)
            }
            _ => Operation::new(gate, targets, param_values(gate, inst, &symbols)?),
        };
        circuit.append(op)?;
    }

    debug!(
        instructions = circuit.len(),
        moments = circuit.moments().len(),
        source = %ir.source(),
        "Emitted Cirq circuit"
    );
    Ok(circuit)
}

fn param_values(
    gate: GateType,
    inst: &Instruction,
    symbols: &Materialized<Symbol>,
) -> PackageResult<Vec<ParamValue>> {
    if gate == GateType::MatrixGate {
        let matrix = inst.matrix().ok_or_else(|| CirqError::InvalidParameter {
            gate: gate.to_string(),
            reason: "matrix entries must be numbers".to_string(),
        })?;
        return Ok(vec![ParamValue::Matrix(matrix)]);
    }

    inst.params()
        .iter()
        .map(|p| -> PackageResult<ParamValue> {
            if let Some(symbol) = p.as_symbol() {
                return Ok(ParamValue::Symbol(symbols.get(symbol)?.clone()));
            }
            let value = p.as_f64().ok_or_else(|| CirqError::InvalidParameter {
                gate: gate.to_string(),
                reason: format!("'{p}' is not an angle"),
            })?;
            Ok(ParamValue::Number(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::line_qubits;

    #[test]
    fn test_qubits_follow_sorted_order() {
        let mut circuit = Circuit::new();
        circuit
            .append(Operation::on(GateType::H, &[Qid::Line(3)]))
            .unwrap()
            .append(Operation::on(GateType::CNot, &[Qid::Line(3), Qid::Line(1)]))
            .unwrap();
        let ir = to_ir(&circuit).unwrap();

        assert_eq!(ir.num_qubits(), 2);
        assert_eq!(ir.qubits().get(0).map(|q| q.label()), Some("q(1)"));
        let cx = &ir.instructions()[1];
        assert_eq!(cx.qubits()[0].index(), 1);
        assert_eq!(cx.qubits()[1].index(), 0);
    }

    #[test]
    fn test_measurement_key_becomes_clbits() {
        let q = line_qubits(3);
        let mut circuit = Circuit::new();
        circuit.append(Operation::measure(&q, "m")).unwrap();
        let ir = to_ir(&circuit).unwrap();

        assert_eq!(ir.num_clbits(), 3);
        assert_eq!(ir.instructions()[0].measurement_key(), Some("m"));

        let back = from_ir(&ir).unwrap();
        let op = back.all_operations().next().unwrap();
        assert_eq!(op.key.as_deref(), Some("m"));
        assert_eq!(op.qubits, q);
    }

    #[test]
    fn test_unmapped_gate() {
        let mut circuit = Circuit::new();
        circuit
            .append(Operation::new(
                GateType::PhasedXPow,
                vec![Qid::Line(0)],
                vec![0.25.into(), 0.5.into()],
            ))
            .unwrap();
        assert!(matches!(
            to_ir(&circuit),
            Err(PackageError::UnmappedGate { vendor: Vendor::Cirq, .. })
        ));
    }

    #[test]
    fn test_symbols_shared_by_name() {
        let q = line_qubits(2);
        let mut circuit = Circuit::new();
        circuit
            .append(Operation::new(GateType::Rz, q[..1].to_vec(), vec![Symbol::new("t").into()]))
            .unwrap()
            .append(Operation::new(GateType::ZZ, q.clone(), vec![Symbol::new("t").into()]))
            .unwrap();
        let ir = to_ir(&circuit).unwrap();
        assert_eq!(ir.num_parameters(), 1);

        let back = from_ir(&ir).unwrap();
        let params: Vec<_> = back.all_operations().map(|op| op.params.clone()).collect();
        assert_eq!(params[0], params[1]);
        assert_eq!(params[0], vec![ParamValue::Symbol(Symbol::new("t"))]);
    }

    #[test]
    fn test_zpow_reads_as_phase() {
        let mut circuit = Circuit::new();
        circuit
            .append(Operation::new(GateType::ZPow, vec![Qid::Line(0)], vec![0.3.into()]))
            .unwrap();
        let ir = to_ir(&circuit).unwrap();
        assert_eq!(ir.instructions()[0].name(), GateName::Phase);
    }
}
