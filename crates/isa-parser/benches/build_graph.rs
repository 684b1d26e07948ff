//! Graph construction throughput over wide assay header rows
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isa_parser::{GraphBuilder, HeaderClassifier};

const BLOCK: &[&str] = &[
    "Sample Name",
    "Characteristics[organism part]",
    "Factor Value[dose]",
    "Unit",
    "Term Source REF",
    "Protocol REF",
    "Extract Name",
    "Protocol REF",
    "Labeled Extract Name",
    "Label",
    "Hybridization Assay Name",
    "Performer",
    "Date",
    "Parameter Value[scan time]",
    "Scan Name",
    "Protocol REF",
    "Array Data File",
    "Comment[notes]",
];

fn header_row(blocks: usize) -> Vec<&'static str> {
    BLOCK.iter().copied().cycle().take(BLOCK.len() * blocks).collect()
}

fn bench_classify(c: &mut Criterion) {
    let classifier = HeaderClassifier::default();
    let headers = header_row(1);

    c.bench_function("classify_block", |b| {
        b.iter(|| classifier.classify_all(black_box(&headers)).flatten().count());
    });
}

fn bench_build(c: &mut Criterion) {
    let builder = GraphBuilder::new();
    let mut group = c.benchmark_group("build_graph");

    for blocks in [1, 10, 100] {
        let headers = header_row(blocks);
        group.bench_with_input(BenchmarkId::from_parameter(headers.len()), &headers, |b, h| {
            b.iter(|| builder.build(black_box(h)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_build);
criterion_main!(benches);
