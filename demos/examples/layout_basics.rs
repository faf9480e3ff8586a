// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out a small forest, fit it into a canvas, and list the hit boxes.
//!
//! Run:
//! - `cargo run -p boxvis_demos --example layout_basics`
//! - `RUST_LOG=trace cargo run -p boxvis_demos --example layout_basics`

use boxvis_index::HitIndex;
use boxvis_layout::{
    Entry, Frame, MonospaceMetrics, PaintOp, RecordingPainter, Shape, Style, VisObject, redraw,
};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // xs = Cons 1 ys, ys = Cons 2 Nil, f = <function>
    let forest = vec![
        Entry::new(
            "xs",
            vec![VisObject::named(
                "Cons",
                vec![VisObject::text("1"), VisObject::link("ys")],
            )],
        ),
        Entry::new(
            "ys",
            vec![VisObject::named(
                "Cons",
                vec![VisObject::text("2"), VisObject::named("Nil", vec![])],
            )],
        ),
        Entry::new("f", vec![VisObject::function("map")]),
    ];

    let metrics = MonospaceMetrics::default();
    let style = Style::default();
    let canvas = Size::new(640.0, 360.0);

    let frame = Frame::build(&metrics, &style, &forest, canvas);
    println!(
        "natural size {:?}, label column {}, scale {:.3}",
        frame.layout.size, frame.layout.label_width, frame.fit.scale
    );
    for (i, row) in frame.layout.rows.iter().enumerate() {
        println!(
            "  row {i}: baseline {}, width {}, height {}",
            row.baseline, row.width, row.height
        );
    }

    println!("shapes in paint order:");
    for shape in &frame.layout.shapes {
        match shape {
            Shape::Text { origin, text } => println!("  text {text:?} at {origin:?}"),
            Shape::Pill { rect, kind, target, .. } => {
                println!("  {kind:?} pill {target:?} {rect:?}");
            }
            Shape::Container { rect, label, .. } => println!("  container {label:?} {rect:?}"),
        }
    }

    let mut hits = HitIndex::new();
    let mut painter = RecordingPainter::new();
    let id = redraw(&metrics, &style, &forest, canvas, &mut painter, None, &mut hits);
    println!("frame {} hit boxes (canvas pixels):", id.get());
    for (aabb, label) in hits.iter() {
        println!(
            "  {label:?} x={:.1} y={:.1} w={:.1} h={:.1}",
            aabb.min_x,
            aabb.min_y,
            aabb.width(),
            aabb.height()
        );
    }

    let fills = painter
        .ops()
        .iter()
        .filter(|op| matches!(op, PaintOp::FillPreserve))
        .count();
    println!(
        "recorded {} drawing calls, {fills} fills, max save depth {}",
        painter.ops().len(),
        painter.max_depth()
    );

    let probe = Point::new(150.0, 40.0);
    println!("probe {probe:?} -> {:?}", frame.hit(probe));
}
