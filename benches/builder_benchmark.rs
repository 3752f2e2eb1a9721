use criterion::{criterion_group, criterion_main, Criterion};
use dignemi_admin::builder::{DayPreview, RouteBuilder};
use dignemi_admin::models::route::BlockType;
use std::hint::black_box;

fn large_day(blocks: usize) -> (RouteBuilder, Vec<String>) {
    let mut builder = RouteBuilder::new();
    let ids = (0..blocks)
        .map(|i| builder.add_block(BlockType::ALL[i % BlockType::ALL.len()]))
        .collect();
    (builder, ids)
}

fn benchmark_reorder(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_blocks");

    for size in [10usize, 100, 1000] {
        let (mut builder, ids) = large_day(size);
        let first = ids[0].clone();
        let last = ids[size - 1].clone();
        let second = ids[1].clone();

        // Alternate direction so the day returns to its original order
        group.bench_function(format!("first_to_last_{size}"), |b| {
            b.iter(|| {
                builder.reorder_blocks(black_box(&first), black_box(&last));
                builder.reorder_blocks(black_box(&first), black_box(&second));
            })
        });
    }

    group.finish();
}

fn benchmark_preview(c: &mut Criterion) {
    let (builder, _) = large_day(200);
    c.bench_function("day_preview_200_blocks", |b| {
        b.iter(|| DayPreview::from_builder(black_box(&builder)).to_string())
    });
}

criterion_group!(benches, benchmark_reorder, benchmark_preview);
criterion_main!(benches);
