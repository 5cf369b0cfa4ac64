use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use plagscan::{Checker, NoSearch, ProbeConfig, generate_probes, tokenize};

const PARAGRAPH: &str = "Researchers have long argued that the spread of printing presses \
    accelerated the circulation of ideas across early modern Europe, allowing pamphlets, \
    sermons and scientific treatises to reach readers who had never before owned a book. ";

fn big_text() -> String {
    PARAGRAPH.repeat(400)
}

fn probe_bench(c: &mut Criterion) {
    let text = big_text();
    let words = tokenize(&text);
    let cfg = ProbeConfig::file_check();

    c.bench_function("tokenize_big_text", |b| {
        b.iter(|| black_box(tokenize(black_box(&text))));
    });
    c.bench_function("generate_probes_big_text", |b| {
        b.iter(|| {
            black_box(generate_probes(
                black_box(&words),
                cfg.ngram_size,
                cfg.step,
                cfg.max_queries,
            ))
        });
    });
}

fn lexical_bench(c: &mut Criterion) {
    let a = big_text();
    let b_text = a.replace("printing", "movable type");

    c.bench_function("lexical_similarity_big_text", |b| {
        b.iter(|| black_box(matcher::lexical_similarity(black_box(&a), black_box(&b_text), 100_000)));
    });
}

fn check_bench(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
    let checker = Checker::new(Arc::new(NoSearch));
    let text = big_text();
    let cfg = ProbeConfig::file_check();

    c.bench_function("check_document_no_search", |b| {
        b.iter(|| {
            let result = rt
                .block_on(checker.check_document(black_box(&text), &cfg))
                .expect("check");
            black_box(result);
        });
    });
}

criterion_group!(benches, probe_bench, lexical_bench, check_bench);
criterion_main!(benches);
