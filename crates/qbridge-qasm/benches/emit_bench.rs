//! Benchmarks for QASM rendering
//!
//! Run with: cargo bench -p qbridge-qasm

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qbridge_ir::{CircuitBuilder, CircuitIr, GateName, NativeAtom, NativeValue, Vendor};
use qbridge_qasm::{QasmOptions, circuit_to_qasm};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Wire(usize);

impl NativeAtom for Wire {
    fn label(&self) -> String {
        format!("q{}", self.0)
    }
}

fn layered(num_qubits: usize, decompose: bool) -> CircuitIr {
    let wires: Vec<_> = (0..num_qubits).map(Wire).collect();
    let mut b: CircuitBuilder<Wire, Wire, Wire> = CircuitBuilder::new(Vendor::Qiskit);
    b.declare_qubits(&wires);
    for layer in 0..10 {
        for w in &wires {
            b.push(GateName::H, &[w.clone()], &[], &[]).unwrap();
        }
        for pair in wires.windows(2) {
            let angle = NativeValue::Float(0.1 * f64::from(layer));
            if decompose {
                b.push(GateName::RZZ, pair, &[], &[angle]).unwrap();
            } else {
                b.push(GateName::CX, pair, &[], &[]).unwrap();
            }
        }
    }
    b.finish()
}

/// Benchmark rendering native and decomposed circuits
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_qasm");
    let options = QasmOptions::default();

    for num_qubits in &[5, 20, 50] {
        let native = layered(*num_qubits, false);
        group.bench_with_input(BenchmarkId::new("native", num_qubits), &native, |b, ir| {
            b.iter(|| black_box(circuit_to_qasm(ir, &options).unwrap()));
        });

        let rzz = layered(*num_qubits, true);
        group.bench_with_input(BenchmarkId::new("decomposed", num_qubits), &rzz, |b, ir| {
            b.iter(|| black_box(circuit_to_qasm(ir, &options).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render);

criterion_main!(benches);
