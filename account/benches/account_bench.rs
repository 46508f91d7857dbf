// Account operation benchmarks.
//
// Covers the accepted and refused paths of each operation, plus the
// case-insensitive currency comparison that guards conversions and
// transfers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bank_account::{check_currency, Account, CurrencyCode};

fn bench_withdraw_deposit(c: &mut Criterion) {
    let mut group = c.benchmark_group("account/balance");

    group.bench_function("deposit_then_withdraw", |b| {
        let mut account = Account::new("EUR", 1_000.0);
        b.iter(|| {
            account.deposit(black_box(25.0));
            account.withdraw(black_box(25.0));
        });
    });

    group.bench_function("withdraw_rejected", |b| {
        let mut account = Account::new("EUR", 10.0);
        b.iter(|| account.withdraw(black_box(1_000.0)));
    });

    group.bench_function("deposit_overflow_rejected", |b| {
        let mut account = Account::new("EUR", 100.0);
        b.iter(|| account.deposit(black_box(f64::MAX)));
    });

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    c.bench_function("account/convert_round_trip", |b| {
        let mut account = Account::new("EUR", 200.0);
        b.iter(|| {
            account.convert_to_currency(black_box("SEK"), 10.0);
            account.convert_to_currency(black_box("EUR"), 0.1);
        });
    });
}

fn bench_transfer(c: &mut Criterion) {
    c.bench_function("account/transfer_sweep", |b| {
        let mut left = Account::new("EUR", 500.0);
        let mut right = Account::new("eur", 500.0);
        b.iter(|| {
            left.transfer_to_account(&mut right);
            right.transfer_to_account(&mut left);
        });
    });
}

fn bench_currency_compare(c: &mut Criterion) {
    let upper = CurrencyCode::from("USDC");
    let lower = CurrencyCode::from("usdc");
    let a = Account::new("USDC", 1.0);
    let b_account = Account::new("usdc", 1.0);

    c.bench_function("currency/eq_ignore_case", |b| {
        b.iter(|| black_box(&upper) == black_box(&lower));
    });

    c.bench_function("currency/check_currency", |b| {
        b.iter(|| check_currency(black_box(Some(&a)), black_box(Some(&b_account))));
    });
}

criterion_group!(
    benches,
    bench_withdraw_deposit,
    bench_convert,
    bench_transfer,
    bench_currency_compare
);
criterion_main!(benches);
