// Criterion benchmarks for jobboard-match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use jobboard_match::models::{listing_ids, Engine, MatchRequest};
use serde_json::{json, Value};
use validator::Validate;

fn create_listing(size: usize) -> Value {
    let jobs: Vec<Value> = (0..size)
        .map(|i| json!({"_id": format!("job-{}", i), "title": format!("Job {}", i)}))
        .collect();
    json!({ "jobs": jobs })
}

fn bench_match_request_serialization(c: &mut Criterion) {
    c.bench_function("match_request_serialize", |b| {
        b.iter(|| {
            let req = MatchRequest::new(black_box("user-123"), black_box("job-456"))
                .with_engine(Engine::Fallback)
                .with_debug(true);
            serde_json::to_vec(&req).unwrap()
        });
    });
}

fn bench_match_request_validation(c: &mut Criterion) {
    let req = MatchRequest::new("user-123", "job-456");
    c.bench_function("match_request_validate", |b| {
        b.iter(|| black_box(&req).validate().is_ok());
    });
}

fn bench_listing_ids(c: &mut Criterion) {
    let mut group = c.benchmark_group("listing_ids");

    for size in [10, 100, 1000].iter() {
        let payload = create_listing(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &payload, |b, payload| {
            b.iter(|| listing_ids(black_box(payload)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_match_request_serialization,
    bench_match_request_validation,
    bench_listing_ids
);
criterion_main!(benches);
