use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use point_grouper::algorithms::group_and_sort;
use point_grouper::io::writer::{render_records, OutputOptions};
use point_grouper::parsing::parse_records_str;
use point_grouper::SortKey;
use std::hint::black_box;

const TYPES: [&str; 6] = ["Fruit", "Veg", "Tag", "Mineral", "Sea", "Rare"];
const PREFIXES: [&str; 5] = ["Alpha", "beta", "#tag", "_under", "7seas"];

fn synthetic_input(lines: usize) -> String {
    (0..lines)
        .map(|i| {
            format!(
                "{}{} {} {} {} {:02}.{:02}.{}\n",
                PREFIXES[i % PREFIXES.len()],
                i,
                (i * 7 % 101) as f64 * 0.5,
                (i * 13 % 97) as f64 * 0.25,
                TYPES[i % TYPES.len()],
                i % 28 + 1,
                i % 12 + 1,
                1990 + i % 35
            )
        })
        .collect()
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for lines in [100usize, 1_000, 10_000] {
        let input = synthetic_input(lines);
        group.bench_with_input(BenchmarkId::new("parse_records", lines), &input, |b, input| {
            b.iter(|| parse_records_str(black_box(input)));
        });
    }

    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");

    let records = parse_records_str(&synthetic_input(10_000));
    for key in [SortKey::Name, SortKey::Distance, SortKey::Time] {
        group.bench_with_input(BenchmarkId::new("group_and_sort", key), &records, |b, records| {
            b.iter(|| group_and_sort(black_box(records.clone()), key));
        });
    }

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");

    let sorted = group_and_sort(parse_records_str(&synthetic_input(10_000)), SortKey::Name);
    let options = OutputOptions::default();
    group.bench_function("render_records", |b| {
        b.iter(|| render_records(black_box(&sorted), &options));
    });

    group.finish();
}

criterion_group!(benches, bench_parsing, bench_grouping, bench_rendering);
criterion_main!(benches);
