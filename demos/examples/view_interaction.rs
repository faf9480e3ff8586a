// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a view through motion, click, and data updates.
//!
//! A fake heap stands in for the live data source: clicking a link
//! "evaluates" it, which expands the referenced thunk on the next update.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p boxvis_demos --example view_interaction`

use std::collections::BTreeSet;
use std::fmt;

use boxvis_layout::{Entry, MonospaceMetrics, RecordingPainter, Style, VisObject};
use boxvis_view::{Canvas, Evaluator, ObjectSource, Response, SharedView, View};
use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct HeapError(String);

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no such closure: {}", self.0)
    }
}

impl std::error::Error for HeapError {}

/// Thunks that have been forced so far.
#[derive(Default)]
struct Heap {
    forced: BTreeSet<String>,
    pending_update: bool,
}

impl Evaluator for Heap {
    type Error = HeapError;

    fn evaluate(&mut self, label: &str) -> Result<(), HeapError> {
        if !label.starts_with("thunk") {
            return Err(HeapError(label.to_owned()));
        }
        self.forced.insert(label.to_owned());
        Ok(())
    }

    fn signal_update(&mut self) -> Result<(), HeapError> {
        self.pending_update = true;
        Ok(())
    }
}

impl ObjectSource for Heap {
    type Ref = usize;
    type Error = HeapError;

    fn parse(&mut self, boxes: &[(usize, String)]) -> Result<Vec<Entry>, HeapError> {
        Ok(boxes
            .iter()
            .map(|(id, name)| {
                let thunk = format!("thunk{id}");
                let tail = if self.forced.contains(&thunk) {
                    VisObject::named("Nil", vec![])
                } else {
                    VisObject::link(thunk)
                };
                Entry::new(
                    name.as_str(),
                    vec![VisObject::named(
                        "Cons",
                        vec![VisObject::text(id.to_string()), tail],
                    )],
                )
            })
            .collect())
    }
}

struct Window {
    painter: RecordingPainter,
    pointer: Option<Point>,
    dirty: bool,
}

impl Canvas for Window {
    type Painter = RecordingPainter;

    fn size(&self) -> Size {
        Size::new(480.0, 240.0)
    }

    fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    fn painter(&mut self) -> &mut RecordingPainter {
        &mut self.painter
    }

    fn request_repaint(&mut self) {
        self.dirty = true;
    }
}

fn first_box_center(view: &SharedView<MonospaceMetrics>, label: &str) -> Option<Point> {
    view.with(|v| {
        v.hits()
            .iter()
            .find(|(_, l)| l.as_str() == label)
            .map(|(a, _)| Point::new((a.min_x + a.max_x) / 2.0, (a.min_y + a.max_y) / 2.0))
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let view = SharedView::new(View::new(MonospaceMetrics::default(), Style::default()));
    let mut heap = Heap::default();
    let mut window = Window {
        painter: RecordingPainter::new(),
        pointer: None,
        dirty: false,
    };
    let boxes = vec![(1, "xs".to_owned()), (2, "ys".to_owned())];

    view.update_objects(&mut heap, &boxes)?;
    view.redraw_canvas(&mut window);

    let Some(target) = first_box_center(&view, "thunk1") else {
        println!("nothing to click");
        return Ok(());
    };

    window.pointer = Some(target);
    let r = view.motion(&mut window);
    println!("moved onto {:?}: {r:?}, repaint requested: {}", view.hover(), window.dirty);

    let r = view.motion(&mut window);
    println!("moved within the same box: {r:?}");

    let r = view.click(&mut heap)?;
    println!("clicked: {r:?}");
    if r.contains(Response::REFRESH) && heap.pending_update {
        heap.pending_update = false;
        let r = view.update_objects(&mut heap, &boxes)?;
        println!("objects refreshed: {r:?}, hover now {:?}", view.hover());
        view.redraw_canvas(&mut window);
    }

    let labels: Vec<String> = view.with(|v| v.hits().iter().map(|(_, l)| l.clone()).collect());
    println!("boxes after refresh: {labels:?}");

    // Clicking a container whose label is not a thunk reports the evaluator's error.
    if let Some(p) = first_box_center(&view, "Nil") {
        view.pointer_moved(Some(p));
        if let Err(err) = view.click(&mut heap) {
            println!("click failed: {err} ({})", err.inner());
        }
    }
    Ok(())
}
