#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zxml::XmlParser;

fn wide_document(items: usize) -> String {
    let mut doc = String::from("<?xml version=\"1.0\"?><catalog>");
    for i in 0..items {
        doc.push_str(&format!(
            "<book id=\"bk{0}\"><author>Author {0}</author><title>Title {0}</title><available/></book>",
            i
        ));
    }
    doc.push_str("</catalog>");
    doc
}

fn deep_document(depth: usize) -> String {
    format!("{}leaf{}", "<n>".repeat(depth), "</n>".repeat(depth))
}

fn bench_fixture(c: &mut Criterion) {
    let input = include_str!("../tests/input/catalog.xml");

    c.bench_function("parse_fixture", |b| {
        b.iter(|| XmlParser::new(black_box(input)).parse().unwrap())
    });
}

fn bench_wide(c: &mut Criterion) {
    let input = wide_document(5_000);

    c.bench_function("parse_wide", |b| {
        b.iter(|| XmlParser::new(black_box(&input)).parse().unwrap())
    });
}

fn bench_deep(c: &mut Criterion) {
    let input = deep_document(200);

    c.bench_function("parse_deep", |b| {
        b.iter(|| XmlParser::new(black_box(&input)).parse().unwrap())
    });
}

fn bench_search(c: &mut Criterion) {
    let tree = XmlParser::new(&wide_document(5_000)).parse().unwrap();

    c.bench_function("find_by_tag", |b| {
        b.iter(|| tree.find_by_tag(black_box("title")).unwrap().len())
    });
}

criterion_group!(benches, bench_fixture, bench_wide, bench_deep, bench_search);
criterion_main!(benches);
