//! Benchmarks for the conversion pipeline.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use retrohue::{Deserializer, MiniMessage, RetroHue, SECTION_SIGN, to_mini_message};

/// A scoreboard-style block of text with frequent code changes.
fn sample_text() -> String {
    let line = "\u{00a7}6\u{00a7}lStats \u{00a7}7| \u{00a7}aKills: \u{00a7}f42 \u{00a7}cDeaths: \u{00a7}f7\u{00a7}r\n";
    line.repeat(200)
}

fn bench_transliterate(c: &mut Criterion) {
    let text = sample_text();
    c.bench_function("to_mini_message", |b| {
        b.iter(|| to_mini_message(black_box(&text), SECTION_SIGN));
    });
}

fn bench_transliterate_plain(c: &mut Criterion) {
    let text = "No formatting codes in this line at all.\n".repeat(200);
    c.bench_function("to_mini_message_plain", |b| {
        b.iter(|| to_mini_message(black_box(&text), SECTION_SIGN));
    });
}

fn bench_deserialize(c: &mut Criterion) {
    let markup = to_mini_message(&sample_text(), SECTION_SIGN);
    let mm = MiniMessage::new();
    c.bench_function("deserialize", |b| {
        b.iter(|| mm.deserialize(black_box(&markup)).unwrap());
    });
}

fn bench_convert_to_component(c: &mut Criterion) {
    let text = sample_text();
    let rh = RetroHue::new();
    c.bench_function("convert_to_component", |b| {
        b.iter(|| rh.convert_to_component(black_box(&text)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_transliterate,
    bench_transliterate_plain,
    bench_deserialize,
    bench_convert_to_component
);
criterion_main!(benches);
