//! Benchmarks for circuit rendering
//!
//! Run with: cargo bench -p tessel-viewer

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tessel_ir::{Circuit, Pauli};
use tessel_viewer::{Viewer, ViewerConfig};

/// Repetition-code memory experiment with a final product measurement.
fn repetition_code(distance: u32, rounds: u64) -> Circuit {
    let data: Vec<u32> = (0..distance).map(|k| 2 * k).collect();
    let ancillas: Vec<u32> = (0..distance - 1).map(|k| 2 * k + 1).collect();
    let pairs: Vec<u32> = ancillas.iter().flat_map(|&a| [a - 1, a]).collect();

    let mut round = Circuit::new();
    round.gate("CX", &pairs).unwrap();
    round.tick();
    round.gate("MR", &ancillas).unwrap();
    let n = i64::from(distance - 1);
    for k in 0..n {
        round.detector(&[-1 - k, -1 - k - n], &[]).unwrap();
    }
    round.tick();

    let mut circuit = Circuit::new();
    for (k, &q) in data.iter().chain(&ancillas).enumerate() {
        circuit.qubit_coords(q, &[k as f64, 0.0]).unwrap();
    }
    circuit.gate("R", &data).unwrap();
    circuit.gate("MR", &ancillas).unwrap();
    circuit.tick();
    circuit.repeat(rounds, round).unwrap();
    let product: Vec<(Pauli, u32)> = data.iter().map(|&q| (Pauli::Z, q)).collect();
    circuit.mpp(&[&product]).unwrap();
    circuit.observable_include(0, &[-1]).unwrap();
    circuit
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let viewer = Viewer::new(ViewerConfig::default());

    for rounds in &[10_u64, 100] {
        let circuit = repetition_code(9, *rounds);
        group.bench_with_input(BenchmarkId::new("rounds", rounds), &circuit, |b, circuit| {
            b.iter(|| viewer.render(black_box(circuit), None).unwrap());
        });
    }

    group.finish();
}

fn bench_html(c: &mut Criterion) {
    let viewer = Viewer::new(ViewerConfig::default());
    let diagram = viewer.render(&repetition_code(9, 50), None).unwrap();

    c.bench_function("to_html", |b| {
        b.iter(|| black_box(&diagram).to_html(viewer.config()));
    });
}

criterion_group!(benches, bench_render, bench_html);
criterion_main!(benches);
