//! Property-based tests: emission preserves instruction order.

use proptest::prelude::*;
use qbridge_adapter_braket as braket;
use qbridge_adapter_cirq::{self as cirq, Qid};
use qbridge_adapter_qiskit::{self as qiskit, ParamValue, QuantumCircuit};
use qbridge_transpile::{CircuitWrapper, GateName, Vendor};

/// Gates every vendor can express.
const COMMON: [GateName; 17] = [
    GateName::H,
    GateName::X,
    GateName::Y,
    GateName::Z,
    GateName::S,
    GateName::T,
    GateName::SX,
    GateName::RX,
    GateName::RY,
    GateName::RZ,
    GateName::CX,
    GateName::CZ,
    GateName::Swap,
    GateName::ISwap,
    GateName::RXX,
    GateName::RZZ,
    GateName::CCX,
];

#[derive(Debug, Clone)]
struct Op {
    gate: GateName,
    qubits: Vec<usize>,
    angle: f64,
}

fn arb_op(num_qubits: usize) -> impl Strategy<Value = Op> {
    (
        prop::sample::select(COMMON.to_vec()),
        Just((0..num_qubits).collect::<Vec<_>>()).prop_shuffle(),
        -3.0_f64..3.0,
    )
        .prop_map(|(gate, order, angle)| {
            let arity = gate.num_qubits().unwrap_or(1);
            Op {
                gate,
                qubits: order[..arity].to_vec(),
                angle,
            }
        })
}

fn arb_circuit() -> impl Strategy<Value = (usize, Vec<Op>)> {
    (3_usize..=5).prop_flat_map(|n| (Just(n), prop::collection::vec(arb_op(n), 0..30)))
}

fn build(num_qubits: usize, ops: &[Op]) -> QuantumCircuit {
    let mut qc = QuantumCircuit::with_size(num_qubits, 0);
    for op in ops {
        let gate = qiskit::gates::from_canonical(op.gate).unwrap();
        let params = if op.gate.num_params() == 1 {
            vec![ParamValue::Number(op.angle)]
        } else {
            Vec::new()
        };
        qc.apply(gate, &op.qubits, params).unwrap();
    }
    qc
}

proptest! {
    #[test]
    fn cirq_emission_keeps_order((num_qubits, ops) in arb_circuit()) {
        let wrapper = CircuitWrapper::new(build(num_qubits, &ops)).unwrap();
        let out = wrapper.transpile(Vendor::Cirq).unwrap();
        let emitted: Vec<_> = out.as_cirq().unwrap().all_operations().collect();

        prop_assert_eq!(emitted.len(), ops.len());
        for (native, op) in emitted.iter().zip(&ops) {
            prop_assert_eq!(cirq::gates::to_canonical(native.gate), Some(op.gate));
            let expected: Vec<Qid> = op.qubits.iter().map(|&q| Qid::Line(q as i64)).collect();
            prop_assert_eq!(&native.qubits, &expected);
        }
    }

    #[test]
    fn braket_emission_keeps_order((num_qubits, ops) in arb_circuit()) {
        let wrapper = CircuitWrapper::new(build(num_qubits, &ops)).unwrap();
        let out = wrapper.transpile(Vendor::Braket).unwrap();
        let emitted = out.as_braket().unwrap().instructions();

        prop_assert_eq!(emitted.len(), ops.len());
        for (native, op) in emitted.iter().zip(&ops) {
            prop_assert_eq!(braket::gates::to_canonical(native.gate), Some(op.gate));
            let expected: Vec<braket::Qubit> =
                op.qubits.iter().map(|&q| braket::Qubit(q as u32)).collect();
            prop_assert_eq!(&native.targets, &expected);
        }
    }

    #[test]
    fn round_trip_through_ir_is_stable((num_qubits, ops) in arb_circuit()) {
        let source = build(num_qubits, &ops);
        let wrapper = CircuitWrapper::new(source.clone()).unwrap();
        let cirq = CircuitWrapper::from_arc(wrapper.transpile(Vendor::Cirq).unwrap()).unwrap();
        let back = cirq.transpile(Vendor::Qiskit).unwrap();
        let gates: Vec<_> = back.as_qiskit().unwrap().data().iter().map(|i| i.gate).collect();
        let expected: Vec<_> = source.data().iter().map(|i| i.gate).collect();
        prop_assert_eq!(gates, expected);
    }
}
