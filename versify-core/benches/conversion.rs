//! Conversion throughput for both frontends

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fmt::Write;
use std::hint::black_box;
use versify_core::{Converter, SourceFormat};

/// Synthetic USFM book with `chapters` chapters of mixed prose and poetry
fn generate_usfm(chapters: usize) -> String {
    let mut source = String::from("\\id TST\n\\h Test\n\\mt1 Test\n");
    for chapter in 1..=chapters {
        let _ = writeln!(source, "\\c {chapter}\n\\s1 Section {chapter}\n\\p");
        for verse in 1..=10 {
            let _ = writeln!(
                source,
                "\\v {verse} Grace and peace\\f + \\fr {chapter}:{verse} \\ft a note\\f* to \\nd you\\nd* all."
            );
        }
        let _ = writeln!(source, "\\q1 \\v 11 Sing for joy\n\\q2 all the earth\n\\q1 \\v 12 Shout aloud");
    }
    source
}

/// The same book as USX
fn generate_usx(chapters: usize) -> String {
    let mut source = String::from("<usx version=\"3.0\"><book code=\"TST\" style=\"id\"/>");
    for chapter in 1..=chapters {
        let _ = write!(
            source,
            "<chapter number=\"{chapter}\" style=\"c\"/><para style=\"s1\">Section {chapter}</para><para style=\"p\">"
        );
        for verse in 1..=10 {
            let _ = write!(
                source,
                "<verse number=\"{verse}\" style=\"v\"/>Grace and peace<note caller=\"+\" style=\"f\"><char style=\"ft\">a note</char></note> to <char style=\"nd\">you</char> all."
            );
        }
        let _ = write!(
            source,
            "</para><para style=\"q1\"><verse number=\"11\" style=\"v\"/>Sing for joy</para><para style=\"q2\">all the earth</para><para style=\"q1\"><verse number=\"12\" style=\"v\"/>Shout aloud</para>"
        );
    }
    source.push_str("</usx>");
    source
}

fn bench_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");

    for chapters in [1, 10, 100] {
        let usfm = generate_usfm(chapters);
        let usx = generate_usx(chapters);

        group.throughput(Throughput::Bytes(usfm.len() as u64));
        group.bench_with_input(BenchmarkId::new("usfm", chapters), &usfm, |b, source| {
            let converter = Converter::new(SourceFormat::Usfm).unwrap();
            b.iter(|| converter.convert(black_box(source)).unwrap());
        });

        group.throughput(Throughput::Bytes(usx.len() as u64));
        group.bench_with_input(BenchmarkId::new("usx", chapters), &usx, |b, source| {
            let converter = Converter::new(SourceFormat::Usx).unwrap();
            b.iter(|| converter.convert(black_box(source)).unwrap());
        });
    }

    group.finish();
}

fn bench_converter_setup(c: &mut Criterion) {
    c.bench_function("converter_new_usfm", |b| {
        b.iter(|| Converter::new(black_box(SourceFormat::Usfm)).unwrap());
    });
}

criterion_group!(benches, bench_conversion, bench_converter_setup);
criterion_main!(benches);
