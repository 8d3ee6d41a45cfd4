//! Generated `loads`/`dumps` against untyped `serde_json::Value`.

use abserde_bench::payloads::feed_json;
use abserde_fixtures::{feed, multiclass};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::Value;
use std::hint::black_box;

const SMALL: &str = r#"{"room": 4211, "floor": 4}"#;

fn benchmark_small_loads(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_loads");

    group.bench_function("record", |b| {
        b.iter(|| multiclass::Test::loads(black_box(SMALL)))
    });
    group.bench_function("module_dispatch", |b| {
        b.iter(|| multiclass::loads(black_box(SMALL)))
    });
    group.bench_function("value", |b| {
        b.iter(|| serde_json::from_str::<Value>(black_box(SMALL)))
    });

    group.finish();
}

fn benchmark_small_dumps(c: &mut Criterion) {
    let mut group = c.benchmark_group("small_dumps");
    let record = multiclass::Test::new(4211, 4);
    let value: Value = serde_json::from_str(SMALL).expect("Failed to parse");

    group.bench_function("record", |b| b.iter(|| black_box(&record).dumps()));
    group.bench_function("module_dispatch", |b| {
        b.iter(|| multiclass::dumps(black_box(&record)))
    });
    group.bench_function("value", |b| {
        b.iter(|| serde_json::to_string(black_box(&value)))
    });

    group.finish();
}

fn benchmark_feed(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed");

    for statuses in [1_usize, 20, 100] {
        let text = feed_json(statuses);
        let record = feed::Feed::loads(&text).expect("Failed to load");
        let value: Value = serde_json::from_str(&text).expect("Failed to parse");
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("loads_record", statuses), &text, |b, text| {
            b.iter(|| feed::Feed::loads(black_box(text.as_str())))
        });
        group.bench_with_input(BenchmarkId::new("loads_value", statuses), &text, |b, text| {
            b.iter(|| serde_json::from_str::<Value>(black_box(text)))
        });
        group.bench_function(BenchmarkId::new("dumps_record", statuses), |b| {
            b.iter(|| black_box(&record).dumps())
        });
        group.bench_function(BenchmarkId::new("dumps_value", statuses), |b| {
            b.iter(|| serde_json::to_string(black_box(&value)))
        });
    }

    group.finish();
}

fn benchmark_accessors(c: &mut Criterion) {
    use abserde_core::Record;

    let mut record = multiclass::Test2::new("Will".to_string(), 30, multiclass::Test::new(5, 2));

    c.bench_function("record_get", |b| {
        b.iter(|| black_box(&record).get(black_box("foo")))
    });
    c.bench_function("record_set", |b| {
        b.iter(|| record.set(black_box("age"), black_box(Value::from(31))))
    });
}

criterion_group!(
    benches,
    benchmark_small_loads,
    benchmark_small_dumps,
    benchmark_feed,
    benchmark_accessors,
);
criterion_main!(benches);
