//! Benchmarks for cross-vendor emission
//!
//! Run with: cargo bench -p qbridge-transpile

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qbridge_adapter_qiskit::QuantumCircuit;
use qbridge_transpile::{CircuitWrapper, Vendor};

fn layered(num_qubits: usize) -> QuantumCircuit {
    let mut qc = QuantumCircuit::with_size(num_qubits, 0);
    for layer in 0..10_u32 {
        for q in 0..num_qubits {
            qc.h(q).unwrap();
            qc.rz(0.1 * f64::from(layer), q).unwrap();
        }
        for q in 1..num_qubits {
            qc.cx(q - 1, q).unwrap();
        }
    }
    qc
}

/// Benchmark building the IR and emitting each target once
fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");

    for num_qubits in &[5, 20, 50] {
        let qc = layered(*num_qubits);
        for target in [Vendor::Cirq, Vendor::Braket] {
            group.bench_with_input(
                BenchmarkId::new(target.as_str(), num_qubits),
                &qc,
                |b, qc| {
                    b.iter(|| {
                        let wrapper = CircuitWrapper::new(qc.clone()).unwrap();
                        black_box(wrapper.transpile(target).unwrap())
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark cached lookups
fn bench_cache_hit(c: &mut Criterion) {
    let wrapper = CircuitWrapper::new(layered(20)).unwrap();
    wrapper.transpile(Vendor::Cirq).unwrap();
    c.bench_function("cache_hit", |b| {
        b.iter(|| black_box(wrapper.transpile(Vendor::Cirq).unwrap()));
    });
}

criterion_group!(benches, bench_emit, bench_cache_hit);

criterion_main!(benches);
