//! Benchmarks for IR construction
//!
//! Run with: cargo bench -p qbridge-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use qbridge_ir::{CircuitBuilder, GateName, IdentifierSet, NativeAtom, NativeValue, Qubit, Vendor};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Wire(usize);

impl NativeAtom for Wire {
    fn label(&self) -> String {
        format!("q{}", self.0)
    }
}

/// Benchmark building a layered circuit
fn bench_build_layers(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_layers");

    for num_qubits in &[5, 20, 50] {
        group.bench_with_input(
            BenchmarkId::new("h_cx_rz", num_qubits),
            num_qubits,
            |b, &n| {
                let wires: Vec<_> = (0..n).map(Wire).collect();
                b.iter(|| {
                    let mut builder: CircuitBuilder<Wire, Wire, Wire> =
                        CircuitBuilder::new(Vendor::Qiskit);
                    builder.declare_qubits(&wires);
                    for _layer in 0..5 {
                        for w in &wires {
                            builder.push(GateName::H, &[w.clone()], &[], &[]).unwrap();
                            builder
                                .push(GateName::RZ, &[w.clone()], &[], &[NativeValue::Float(0.3)])
                                .unwrap();
                        }
                        for pair in wires.windows(2).step_by(2) {
                            builder.push(GateName::CX, pair, &[], &[]).unwrap();
                        }
                    }
                    black_box(builder.finish())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark repeated identifier lookups
fn bench_identifier_lookup(c: &mut Criterion) {
    let wires: Vec<_> = (0..100).map(Wire).collect();
    c.bench_function("identifier_lookup_100", |b| {
        let mut set: IdentifierSet<Wire, Qubit> = IdentifierSet::new();
        set.get(&wires);
        b.iter(|| black_box(set.get(black_box(&wires))));
    });
}

criterion_group!(benches, bench_build_layers, bench_identifier_lookup);

criterion_main!(benches);
