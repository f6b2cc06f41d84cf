use axum_hello::core::greeting::greeting_service::GreetingService;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn get_hello_benchmark(c: &mut Criterion) {
    let service = GreetingService::new();
    c.bench_function("get_hello", |b| b.iter(|| service.get_hello(black_box("World"))));
}

criterion_group!(benches, get_hello_benchmark);
criterion_main!(benches);
