//! Benchmarks for the rule engine.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quill_rules::prelude::*;

fn bench_single_rule(c: &mut Criterion) {
    let engine = RuleEngine::default();

    c.bench_function("evaluate/not_empty", |b| {
        b.iter(|| engine.evaluate(black_box("hello"), &[RuleId::NotEmpty]));
    });

    c.bench_function("evaluate/email", |b| {
        b.iter(|| engine.evaluate(black_box("user@example.com"), &[RuleId::Email]));
    });
}

fn bench_typical_field(c: &mut Criterion) {
    let engine = RuleEngine::default();
    let username_rules = [
        RuleId::NotEmpty,
        RuleId::Alphanumeric,
        RuleId::MaxLength,
        RuleId::MinLength,
    ];

    c.bench_function("evaluate/username_passing", |b| {
        b.iter(|| engine.evaluate(black_box("user42"), &username_rules));
    });

    c.bench_function("evaluate/username_failing_last", |b| {
        b.iter(|| engine.evaluate(black_box("u4"), &username_rules));
    });
}

fn bench_all_rules(c: &mut Criterion) {
    let mut engine = RuleEngine::default();
    engine
        .config_mut()
        .set_postal_code_pattern(r"\d{5}")
        .unwrap();

    c.bench_function("evaluate/all_rules_short_circuit", |b| {
        b.iter(|| engine.evaluate(black_box(""), &RuleId::ALL));
    });
}

criterion_group!(benches, bench_single_rule, bench_typical_field, bench_all_rules);
criterion_main!(benches);
