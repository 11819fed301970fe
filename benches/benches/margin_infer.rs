// Copyright 2026 the Sightline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Affine;
use sightline_margin::{StyleSource, declared_offsets, infer_margins, parse_transform_matrix};

struct Style {
    classes: String,
    distance: Option<&'static str>,
    transform: Option<Affine>,
}

impl StyleSource<u32> for Style {
    fn classes(&self, _element: u32) -> Option<&str> {
        Some(&self.classes)
    }

    fn custom_property(&self, _element: u32, _name: &str) -> Option<String> {
        self.distance.map(str::to_owned)
    }

    fn transform(&self, _element: u32) -> Option<Affine> {
        self.transform
    }
}

fn gen_class_list(cards: usize) -> String {
    let mut out = String::new();
    for i in 0..cards {
        out.push_str("flex items-center gap-4 rounded-lg p-6 shadow-md opacity-0 ");
        out.push_str(&format!("below:translate-y-[{}px] ", 16 + (i % 5) * 4));
    }
    out
}

fn bench_declared_offsets(c: &mut Criterion) {
    let mut group = c.benchmark_group("declared_offsets");
    for &cards in &[1usize, 16, 64] {
        let classes = gen_class_list(cards);
        group.throughput(Throughput::Elements(cards as u64));
        group.bench_function(format!("utility_soup_x{}", cards), |b| {
            b.iter(|| black_box(declared_offsets(black_box(&classes))))
        });
    }
    group.finish();
}

fn bench_waterfall(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_margins");

    let declared = Style {
        classes: gen_class_list(1),
        distance: Some("2rem"),
        transform: Some(Affine::translate((0.0, -32.0))),
    };
    group.bench_function("stops_at_declared", |b| {
        b.iter(|| black_box(infer_margins(&declared, 0, Some("slide-up"))))
    });

    let heuristic = Style {
        classes: String::from("flex items-center gap-4 rounded-lg p-6 shadow-md opacity-0"),
        distance: Some("2rem"),
        transform: Some(Affine::translate((0.0, -32.0))),
    };
    group.bench_function("stops_at_distance_property", |b| {
        b.iter(|| black_box(infer_margins(&heuristic, 0, Some("slide-up"))))
    });

    let fallback = Style {
        classes: String::from("flex items-center gap-4 rounded-lg p-6 shadow-md opacity-0"),
        distance: None,
        transform: Some(Affine::translate((0.0, -32.0))),
    };
    group.bench_function("falls_to_transform", |b| {
        b.iter(|| black_box(infer_margins(&fallback, 0, Some("slide-up"))))
    });

    group.finish();
}

fn bench_matrix_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_transform_matrix");
    group.bench_function("css_matrix", |b| {
        b.iter(|| black_box(parse_transform_matrix(black_box("matrix(1, 0, 0, 1, 0, -32.5)"))))
    });
    group.bench_function("rejects_matrix3d", |b| {
        b.iter(|| {
            black_box(parse_transform_matrix(black_box(
                "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)",
            )))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_declared_offsets,
    bench_waterfall,
    bench_matrix_parse
);
criterion_main!(benches);
