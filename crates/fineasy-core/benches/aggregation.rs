use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fineasy_core::SummaryService;
use fineasy_domain::{DefaultCategory, Transaction, TransactionKind};

fn sample_transactions(count: usize) -> Vec<Transaction> {
    let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|idx| {
            let kind = if idx % 5 == 0 {
                TransactionKind::Inflow
            } else {
                TransactionKind::Outflow
            };
            let category = DefaultCategory::ALL[idx % DefaultCategory::ALL.len()].label();
            Transaction::new(format!("txn-{idx}"), (idx % 97 + 1) as f64, kind, category, date)
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let transactions = sample_transactions(10_000);
    c.bench_function("overview_10k", |b| {
        b.iter(|| SummaryService::overview(black_box(&transactions)))
    });
    c.bench_function("outflow_by_category_10k", |b| {
        b.iter(|| SummaryService::outflow_by_category(black_box(&transactions)))
    });
}

criterion_group!(benches, bench_aggregation);
criterion_main!(benches);
