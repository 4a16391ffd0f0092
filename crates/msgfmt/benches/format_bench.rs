//! Benchmarks for message processing and the format cache.
//!
//! Run with: cargo bench -p msgfmt --bench format_bench
//!
//! Workloads:
//! - **flat**: many simple `{key}` substitutions in one message.
//! - **nested**: a `select` case body nested N levels deep.
//! - **cached**: repeated `format` of the same message and values.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use msgfmt::{HandlerCall, MessageFormatter, Segment, Values, parse_cases};
use std::hint::black_box;

fn select(call: HandlerCall<'_>) -> msgfmt::Result<Segment> {
    let cases = parse_cases(call.format)?;
    match cases.case(&call.value.to_string()).or(cases.other()) {
        Some(body) => call.recurse.process(body, call.values),
        None => Ok(Segment::empty()),
    }
}

fn flat_message(placeholders: usize) -> (String, Values) {
    let mut message = String::new();
    let mut values = Values::new();
    for i in 0..placeholders {
        message.push_str(&format!("item {i}: {{k{i}}}; "));
        values.insert(format!("k{i}"), i);
    }
    (message, values)
}

fn nested_message(depth: usize) -> String {
    let mut message = String::from("{name}");
    for _ in 0..depth {
        message = format!("[{{flag, select, yes{{{message}}} other{{-}}}}]");
    }
    message
}

fn bench_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("process/flat");
    let formatter = MessageFormatter::builder("en").cache_capacity(0).build();

    for size in [1usize, 16, 256] {
        let (message, values) = flat_message(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| formatter.process(black_box(message), black_box(&values)));
        });
    }
    group.finish();
}

fn bench_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("process/nested");
    let formatter = MessageFormatter::builder("en")
        .handler_fn("select", select)
        .cache_capacity(0)
        .build();
    let values = Values::new().with("flag", "yes").with("name", "Sam");

    for depth in [1usize, 8, 32] {
        let message = nested_message(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &message, |b, message| {
            b.iter(|| formatter.process(black_box(message), black_box(&values)));
        });
    }
    group.finish();
}

fn bench_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("format/cache");
    let (message, values) = flat_message(16);

    let uncached = MessageFormatter::builder("en").cache_capacity(0).build();
    group.bench_function("disabled", |b| {
        b.iter(|| uncached.format(black_box(&message), black_box(&values)));
    });

    let cached = MessageFormatter::builder("en").build();
    group.bench_function("hit", |b| {
        b.iter(|| cached.format(black_box(&message), black_box(&values)));
    });
    group.finish();
}

criterion_group!(benches, bench_flat, bench_nested, bench_cached);
criterion_main!(benches);
