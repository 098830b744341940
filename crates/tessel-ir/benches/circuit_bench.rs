//! Benchmarks for Tessel circuit operations
//!
//! Run with: cargo bench -p tessel-ir

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tessel_ir::Circuit;

/// Repetition-code memory experiment over `distance` data qubits.
fn repetition_code(distance: u32, rounds: u64) -> Circuit {
    let data: Vec<u32> = (0..distance).map(|k| 2 * k).collect();
    let ancillas: Vec<u32> = (0..distance - 1).map(|k| 2 * k + 1).collect();
    let pairs: Vec<u32> = ancillas.iter().flat_map(|&a| [a - 1, a]).collect();

    let mut round = Circuit::new();
    round.gate("CX", &pairs).unwrap();
    round.gate("MR", &ancillas).unwrap();
    let n = i64::from(distance - 1);
    for k in 0..n {
        round.detector(&[-1 - k, -1 - k - n], &[]).unwrap();
    }
    round.tick();

    let mut circuit = Circuit::new();
    circuit.gate("R", &data).unwrap();
    circuit.gate("MR", &ancillas).unwrap();
    circuit.tick();
    circuit.repeat(rounds, round).unwrap();
    circuit.gate("M", &data).unwrap();
    circuit
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flattened");

    for rounds in &[10_u64, 100, 1000] {
        let circuit = repetition_code(9, *rounds);
        group.bench_with_input(BenchmarkId::new("rounds", rounds), &circuit, |b, circuit| {
            b.iter(|| black_box(circuit).flattened());
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let circuit = repetition_code(25, 1000);

    c.bench_function("num_measurements", |b| {
        b.iter(|| black_box(&circuit).num_measurements());
    });
    c.bench_function("detector_coordinates", |b| {
        b.iter(|| black_box(&circuit).detector_coordinates());
    });
}

criterion_group!(benches, bench_flatten, bench_queries);
criterion_main!(benches);
