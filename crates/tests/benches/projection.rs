use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use projector::{FieldSelection, Projector};
use tests::synthetic_csv;

fn bench_passthrough(c: &mut Criterion) {
    let input = synthetic_csv(10_000, 10);

    let mut group = c.benchmark_group("passthrough");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("10k_rows_10_cols", |b| {
        b.iter(|| {
            let mut output = Vec::with_capacity(input.len());
            Projector::new(FieldSelection::All)
                .run(black_box(input.as_bytes()), &mut output)
                .unwrap();
            output
        })
    });
    group.finish();
}

fn bench_selection(c: &mut Criterion) {
    let input = synthetic_csv(10_000, 10);
    let selection = FieldSelection::parse("10,3,1").unwrap();

    let mut group = c.benchmark_group("selection");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("10k_rows_3_of_10_cols", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            Projector::new(selection.clone())
                .run(black_box(input.as_bytes()), &mut output)
                .unwrap();
            output
        })
    });
    group.finish();
}

criterion_group!(benches, bench_passthrough, bench_selection);
criterion_main!(benches);
