use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wallet_ledger::engine::Ledger;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("load_basic", |b| {
        b.iter(|| {
            let mut ledger = Ledger::new();
            ledger.load(black_box("data/transactions_basic.txt"))
        })
    });

    c.bench_function("load_year", |b| {
        b.iter(|| {
            let mut ledger = Ledger::new();
            ledger.load(black_box("data/transactions_year.txt"))
        })
    });

    let mut year = Ledger::new();
    year.load("data/transactions_year.txt")
        .expect("fixture data/transactions_year.txt");

    c.bench_function("totals_year", |b| b.iter(|| black_box(&year).totals()));

    c.bench_function("stats_year_q1", |b| {
        b.iter(|| black_box(&year).stats_in_range("2024/01/01", "2024/03/31"))
    });

    c.bench_function("save_year", |b| {
        b.iter(|| {
            let mut buf = Vec::new();
            black_box(&year).write_to(&mut buf)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
