// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use boxvis_index::{Aabb2D, HitIndex};
use boxvis_layout::{
    Entry, Frame, Layout, MonospaceMetrics, RecordingPainter, Style, VisObject, redraw,
};
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Size;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1_u64 << 53) as f64)
    }
}

fn gen_object(rng: &mut Rng, depth: u32) -> VisObject {
    let label = format!("n{}", rng.below(1000));
    match rng.below(if depth == 0 { 3 } else { 4 }) {
        0 => VisObject::text(label),
        1 => VisObject::link(label),
        2 => VisObject::function(label),
        _ => {
            let n = 1 + rng.below(4) as usize;
            let children = (0..n).map(|_| gen_object(rng, depth - 1)).collect();
            VisObject::named(label, children)
        }
    }
}

fn gen_forest(rows: usize, per_row: usize, depth: u32, seed: u64) -> Vec<Entry> {
    let mut rng = Rng::new(seed);
    (0..rows)
        .map(|i| {
            let objects = (0..per_row).map(|_| gen_object(&mut rng, depth)).collect();
            Entry::new(format!("root{i}"), objects)
        })
        .collect()
}

fn gen_queries(count: usize, canvas: Size, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| (rng.next_f64() * canvas.width, rng.next_f64() * canvas.height))
        .collect()
}

fn bench_layout(c: &mut Criterion) {
    let metrics = MonospaceMetrics::default();
    let style = Style::default();
    let mut group = c.benchmark_group("layout");
    for &rows in &[8_usize, 64] {
        let forest = gen_forest(rows, 6, 3, 0x9E37_79B9_7F4A_7C15);
        let pickable: usize = forest.iter().map(Entry::pickable_count).sum();
        group.throughput(Throughput::Elements(pickable as u64));
        group.bench_function(format!("build_{rows}_rows"), |b| {
            b.iter(|| black_box(Layout::build(&metrics, &style, black_box(&forest))));
        });
        group.bench_function(format!("redraw_{rows}_rows"), |b| {
            b.iter_batched(
                || (RecordingPainter::new(), HitIndex::new()),
                |(mut painter, mut hits)| {
                    redraw(
                        &metrics,
                        &style,
                        &forest,
                        Size::new(1920.0, 1080.0),
                        &mut painter,
                        Some("n7"),
                        &mut hits,
                    );
                    black_box(hits.len())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_hits(c: &mut Criterion) {
    let metrics = MonospaceMetrics::default();
    let style = Style::default();
    let canvas = Size::new(1920.0, 1080.0);
    let mut group = c.benchmark_group("hits");
    for &rows in &[8_usize, 64] {
        let forest = gen_forest(rows, 6, 3, 0xD1B5_4A32_D192_ED03);
        let frame = Frame::build(&metrics, &style, &forest, canvas);
        let mut idx: HitIndex<f64, String> = HitIndex::new();
        idx.replace(frame.hit_entries());
        let queries = gen_queries(1024, canvas, 42);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("first_hit_{rows}_rows"), |b| {
            b.iter(|| {
                let mut found = 0_usize;
                for &(x, y) in &queries {
                    if idx.first_hit(x, y).is_some() {
                        found += 1;
                    }
                }
                black_box(found)
            });
        });
        let damage = Aabb2D::from_xywh(0.0, 0.0, canvas.width / 4.0, canvas.height / 4.0);
        group.bench_function(format!("query_rect_{rows}_rows"), |b| {
            b.iter(|| black_box(idx.query_rect(black_box(damage)).count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout, bench_hits);
criterion_main!(benches);
