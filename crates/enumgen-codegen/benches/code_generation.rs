//! Performance benchmarks for enumgen-codegen.
//!
//! Measures generation throughput across different:
//! - Declaration counts (1, 10, 100)
//! - Value counts per declaration (3, 30)
//! - Operations (full pipeline, scanning only)
//!
//! Run with: cargo bench --package enumgen-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use enumgen_codegen::{DeclarationScanner, EnumGenerator};
use enumgen_core::GeneratorConfig;
use std::fmt::Write as _;
use std::hint::black_box;

/// Builds a Go source with `enums` declarations of `values` members each.
fn create_source(enums: usize, values: usize) -> String {
    let mut source = String::from("package bench\n\n");
    for e in 0..enums {
        let labels: Vec<String> = (0..values).map(|v| format!("value-{v}")).collect();
        let _ = writeln!(source, "// ENUM Kind{e} ({})", labels.join(", "));
        let _ = writeln!(source, "type holder{e} struct {{ k Kind{e} }}\n");
    }
    source
}

fn bench_generate(c: &mut Criterion) {
    let generator = EnumGenerator::new().unwrap();
    let config = GeneratorConfig::new("bench.go").with_yaml(true);
    let mut group = c.benchmark_group("generate");

    for enums in [1, 10, 100] {
        for values in [3, 30] {
            let source = create_source(enums, values);
            group.throughput(Throughput::Elements(enums as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{values}_values"), enums),
                &source,
                |b, source| b.iter(|| generator.generate(black_box(source), &config).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let scanner = DeclarationScanner::new(false);
    let source = create_source(100, 10);

    c.bench_function("scan_100_declarations", |b| {
        b.iter(|| {
            scanner
                .scan(black_box(source.as_bytes()), "bench.go")
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_generate, bench_scan);
criterion_main!(benches);
