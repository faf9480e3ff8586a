// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view context: objects, the last frame's hit boxes, and the hover.
//!
//! ## Event flow
//!
//! - Repaint: [`View::redraw`] lays out the current objects, paints them with
//!   the hovered label highlighted, and replaces every hit box.
//! - Motion: [`View::pointer_moved`] resolves the pointer against the last
//!   frame and asks for a repaint only when the hovered label changed.
//! - Click: [`View::click`] evaluates the hovered label and signals an update.
//! - Data change: [`View::update_objects`] re-derives the objects and drops
//!   hit boxes from the old forest.
//!
//! Hit boxes are in canvas pixels and belong to the frame that produced them.
//! A pointer lookup between an object change and the next repaint finds nothing.

use alloc::string::String;
use alloc::vec::Vec;

use boxvis_index::{FrameId, HitIndex};
use boxvis_layout::{Entry, Painter, Style, TextMetrics, redraw};
use kurbo::{Point, Size};

use crate::error::ViewError;
use crate::hover::{HoverEvent, HoverState};
use crate::types::{Canvas, Evaluator, ObjectSource, Response};

/// Interaction state for one visualization canvas.
#[derive(Clone, Debug)]
pub struct View<M> {
    metrics: M,
    style: Style,
    objects: Vec<Entry>,
    hits: HitIndex<f64, String>,
    hover: HoverState<String>,
}

impl<M: TextMetrics> View<M> {
    /// A view with no objects.
    pub fn new(metrics: M, style: Style) -> Self {
        Self {
            metrics,
            style,
            objects: Vec::new(),
            hits: HitIndex::new(),
            hover: HoverState::new(),
        }
    }

    /// Current rows, in drawing order.
    pub fn objects(&self) -> &[Entry] {
        &self.objects
    }

    /// Layout and paint configuration.
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Text metrics oracle.
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Hovered label, if any.
    pub fn hover(&self) -> Option<&str> {
        self.hover.current().map(String::as_str)
    }

    /// Hit boxes of the last repaint, in canvas pixels.
    pub fn hits(&self) -> &HitIndex<f64, String> {
        &self.hits
    }

    /// Paint the objects fitted into `canvas` and replace the hit boxes.
    pub fn redraw<P: Painter + ?Sized>(&mut self, painter: &mut P, canvas: Size) -> FrameId {
        let hover = self.hover.current().map(String::as_str);
        redraw(
            &self.metrics,
            &self.style,
            &self.objects,
            canvas,
            painter,
            hover,
            &mut self.hits,
        )
    }

    /// [`redraw`](Self::redraw) against a host canvas.
    pub fn redraw_canvas<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> FrameId {
        let size = canvas.size();
        self.redraw(canvas.painter(), size)
    }

    /// Resolve `pointer` (canvas pixels) against the last frame.
    ///
    /// The first box in paint order wins. Returns [`Response::REPAINT`]
    /// when the hovered label changed, including to or from no hover.
    pub fn pointer_moved(&mut self, pointer: Option<Point>) -> Response {
        let next = pointer.and_then(|p| self.hits.first_hit(p.x, p.y).cloned());
        let events = self.hover.update(next);
        if events.is_empty() {
            return Response::empty();
        }
        log_transitions(&events);
        Response::REPAINT
    }

    /// [`pointer_moved`](Self::pointer_moved) with the canvas' pointer.
    ///
    /// Requests the repaint from the canvas as well as returning it.
    pub fn motion<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Response {
        let response = self.pointer_moved(canvas.pointer());
        if response.contains(Response::REPAINT) {
            canvas.request_repaint();
        }
        response
    }

    /// Evaluate the hovered label and signal an update.
    ///
    /// Does nothing without a hover. The hover is kept either way; fresh
    /// objects arrive later through [`update_objects`](Self::update_objects).
    pub fn click<E: Evaluator + ?Sized>(
        &mut self,
        evaluator: &mut E,
    ) -> Result<Response, ViewError<E::Error>> {
        let Some(label) = self.hover.current() else {
            return Ok(Response::empty());
        };

        #[cfg(feature = "tracing")]
        tracing::info!(label = label.as_str(), "evaluating clicked box");

        evaluator
            .evaluate(label)
            .map_err(|source| ViewError::Evaluate {
                label: label.clone(),
                source,
            })?;
        evaluator
            .signal_update()
            .map_err(|source| ViewError::Signal { source })?;
        Ok(Response::REFRESH)
    }

    /// Re-derive the objects from the host's boxes.
    ///
    /// On failure the current objects are left untouched.
    pub fn update_objects<S: ObjectSource + ?Sized>(
        &mut self,
        source: &mut S,
        boxes: &[(S::Ref, String)],
    ) -> Result<Response, ViewError<S::Error>> {
        let objects = source
            .parse(boxes)
            .map_err(|source| ViewError::Parse { source })?;
        Ok(self.set_objects(objects))
    }

    /// Replace the objects wholesale.
    ///
    /// Hit boxes from the old forest are dropped. The hover survives only if
    /// some node in the new forest still carries its label.
    pub fn set_objects(&mut self, objects: Vec<Entry>) -> Response {
        self.objects = objects;
        self.hits.clear();
        let keep = self
            .hover
            .current()
            .is_some_and(|label| self.objects.iter().any(|e| e.contains_label(label)));
        if !keep {
            let events = self.hover.clear();
            log_transitions(&events);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = self.objects.len(),
            hover = self.hover(),
            "objects replaced"
        );
        Response::REPAINT
    }
}

#[cfg_attr(
    not(feature = "tracing"),
    expect(unused_variables, reason = "only read when tracing")
)]
fn log_transitions(events: &[HoverEvent<String>]) {
    #[cfg(feature = "tracing")]
    for event in events {
        tracing::debug!(?event, "hover");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;
    use boxvis_layout::{
        FontMetrics, InkExtent, MonospaceMetrics, PaintOp, RecordingPainter, VisObject,
    };
    use core::fmt;

    /// Pins the widths the sample row is measured with; 5 per char otherwise.
    #[derive(Debug)]
    struct Pinned;

    impl TextMetrics for Pinned {
        fn advance_width(&self, text: &str) -> f64 {
            match text {
                "1 # " => 40.0,
                "y" => 10.0,
                _ => 5.0 * text.chars().count() as f64,
            }
        }

        fn ink_extent(&self, text: &str) -> InkExtent {
            InkExtent {
                bearing: 0.0,
                advance: self.advance_width(text),
            }
        }

        fn font_metrics(&self) -> FontMetrics {
            FontMetrics {
                ascent: 10.0,
                descent: 5.0,
                line_height: 15.0,
            }
        }
    }

    struct TestCanvas {
        painter: RecordingPainter,
        size: Size,
        pointer: Option<Point>,
        repaints: usize,
    }

    impl TestCanvas {
        fn new(w: f64, h: f64) -> Self {
            Self {
                painter: RecordingPainter::new(),
                size: Size::new(w, h),
                pointer: None,
                repaints: 0,
            }
        }
    }

    impl Canvas for TestCanvas {
        type Painter = RecordingPainter;

        fn size(&self) -> Size {
            self.size
        }

        fn pointer(&self) -> Option<Point> {
            self.pointer
        }

        fn painter(&mut self) -> &mut RecordingPainter {
            &mut self.painter
        }

        fn request_repaint(&mut self) {
            self.repaints += 1;
        }
    }

    #[derive(Debug, PartialEq)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl core::error::Error for Refused {}

    #[derive(Default)]
    struct Recorder {
        evaluated: Vec<String>,
        signals: usize,
        fail_evaluate: bool,
        fail_signal: bool,
    }

    impl Evaluator for Recorder {
        type Error = Refused;

        fn evaluate(&mut self, label: &str) -> Result<(), Refused> {
            if self.fail_evaluate {
                return Err(Refused);
            }
            self.evaluated.push(label.into());
            Ok(())
        }

        fn signal_update(&mut self) -> Result<(), Refused> {
            if self.fail_signal {
                return Err(Refused);
            }
            self.signals += 1;
            Ok(())
        }
    }

    /// Each box becomes a row holding one link to `#<ref>`.
    struct Links {
        fail: bool,
    }

    impl ObjectSource for Links {
        type Ref = u32;
        type Error = Refused;

        fn parse(&mut self, boxes: &[(u32, String)]) -> Result<Vec<Entry>, Refused> {
            if self.fail {
                return Err(Refused);
            }
            Ok(boxes
                .iter()
                .map(|(r, name)| Entry::new(name.as_str(), vec![VisObject::link(format!("#{r}"))]))
                .collect())
        }
    }

    fn sample() -> Vec<Entry> {
        vec![Entry::new(
            "x",
            vec![VisObject::text("1 # "), VisObject::link("y")],
        )]
    }

    /// A view showing the sample row, painted once into a 1000x1000 canvas.
    fn painted() -> (View<Pinned>, TestCanvas) {
        let mut view = View::new(Pinned, Style::default());
        let _ = view.set_objects(sample());
        let mut canvas = TestCanvas::new(1000.0, 1000.0);
        view.redraw_canvas(&mut canvas);
        (view, canvas)
    }

    /// Center of the "y" pill, natural (75, 15)-(95, 40), in canvas pixels.
    fn inside_y(view: &View<Pinned>) -> Point {
        let (aabb, label) = view.hits().iter().next().expect("one hit box");
        assert_eq!(label, "y");
        Point::new(
            (aabb.min_x + aabb.max_x) / 2.0,
            (aabb.min_y + aabb.max_y) / 2.0,
        )
    }

    #[test]
    fn sample_row_has_only_the_link_box() {
        let (view, _) = painted();
        assert_eq!(view.hits().len(), 1);
        let (aabb, _) = view.hits().iter().next().unwrap();
        let s = 970.0 / 95.0;
        let close = |a: f64, b: f64| (a - b) < 1e-6 && (b - a) < 1e-6;
        assert!(close(aabb.min_x, 75.0 * s));
        assert!(close(aabb.min_y, 15.0 * s));
        assert!(close(aabb.max_x, 95.0 * s));
        assert!(close(aabb.max_y, 40.0 * s));
    }

    #[test]
    fn clicking_the_link_evaluates_its_target() {
        let (mut view, _) = painted();
        let p = inside_y(&view);
        assert_eq!(view.pointer_moved(Some(p)), Response::REPAINT);
        assert_eq!(view.hover(), Some("y"));

        let mut eval = Recorder::default();
        assert_eq!(view.click(&mut eval).unwrap(), Response::REFRESH);
        assert_eq!(eval.evaluated, vec!["y"]);
        assert_eq!(eval.signals, 1);
        assert_eq!(view.hover(), Some("y"));
    }

    #[test]
    fn hover_toggles_without_redundant_repaints() {
        let (mut view, mut canvas) = painted();
        let p = inside_y(&view);

        canvas.pointer = Some(p);
        assert_eq!(view.motion(&mut canvas), Response::REPAINT);
        assert_eq!(canvas.repaints, 1);

        canvas.pointer = Some(Point::new(p.x + 1.0, p.y + 1.0));
        assert_eq!(view.motion(&mut canvas), Response::empty());
        assert_eq!(canvas.repaints, 1);

        canvas.pointer = Some(Point::new(1.0, 1.0));
        assert_eq!(view.motion(&mut canvas), Response::REPAINT);
        assert_eq!(view.hover(), None);
        assert_eq!(canvas.repaints, 2);

        canvas.pointer = None;
        assert_eq!(view.motion(&mut canvas), Response::empty());
        assert_eq!(canvas.repaints, 2);
    }

    #[test]
    fn hovered_link_is_painted_highlighted() {
        let (mut view, mut canvas) = painted();
        let p = inside_y(&view);
        let _ = view.pointer_moved(Some(p));
        canvas.painter.clear();
        view.redraw_canvas(&mut canvas);
        let highlighted = PaintOp::SetSourceColor(view.style().link.highlighted);
        assert!(canvas.painter.ops().contains(&highlighted));
    }

    #[test]
    fn click_without_hover_does_nothing() {
        let (mut view, _) = painted();
        let mut eval = Recorder::default();
        assert!(matches!(view.click(&mut eval), Ok(r) if r.is_empty()));
        assert!(eval.evaluated.is_empty());
        assert_eq!(eval.signals, 0);
    }

    #[test]
    fn collaborator_failures_propagate() {
        let (mut view, _) = painted();
        let _ = view.pointer_moved(Some(inside_y(&view)));

        let mut eval = Recorder {
            fail_evaluate: true,
            ..Recorder::default()
        };
        let err = view.click(&mut eval).unwrap_err();
        assert!(matches!(&err, ViewError::Evaluate { label, .. } if label == "y"));
        assert_eq!(format!("{err}"), "evaluating `y` failed");
        assert_eq!(eval.signals, 0);

        let mut eval = Recorder {
            fail_signal: true,
            ..Recorder::default()
        };
        let err = view.click(&mut eval).unwrap_err();
        assert!(matches!(err, ViewError::Signal { .. }));
        assert_eq!(eval.evaluated, vec!["y"]);

        let before = view.objects().to_vec();
        let err = view
            .update_objects(&mut Links { fail: true }, &[(1, "a".into())])
            .unwrap_err();
        assert_eq!(err.inner(), &Refused);
        assert_eq!(view.objects(), before.as_slice());
    }

    #[test]
    fn new_objects_drop_stale_boxes() {
        let (mut view, mut canvas) = painted();
        let p = inside_y(&view);
        let _ = view.pointer_moved(Some(p));

        let r = view
            .update_objects(&mut Links { fail: false }, &[(7, "z".into())])
            .unwrap();
        assert_eq!(r, Response::REPAINT);
        assert!(view.hits().is_empty());
        // "y" no longer exists anywhere.
        assert_eq!(view.hover(), None);
        assert_eq!(view.pointer_moved(Some(p)), Response::empty());

        view.redraw_canvas(&mut canvas);
        let labels: Vec<_> = view.hits().iter().map(|(_, l)| l.as_str()).collect();
        assert_eq!(labels, vec!["#7"]);
    }

    #[test]
    fn hover_survives_when_label_remains() {
        let (mut view, _) = painted();
        let _ = view.pointer_moved(Some(inside_y(&view)));
        let mut next = sample();
        next.push(Entry::new("w", vec![VisObject::function("f")]));
        let _ = view.set_objects(next);
        assert_eq!(view.hover(), Some("y"));
        assert!(view.hits().is_empty());
    }

    #[test]
    fn monospace_view_round_trips_pointer() {
        let mut view = View::new(MonospaceMetrics::default(), Style::default());
        let _ = view.set_objects(vec![Entry::new(
            "xs",
            vec![VisObject::named("Cons", vec![VisObject::link("ys")])],
        )]);
        let mut p = RecordingPainter::new();
        let frame = view.redraw(&mut p, Size::new(400.0, 300.0));
        assert_eq!(view.hits().frame(), frame);
        // The link sits inside the container and wins the overlap.
        let (link, _) = view.hits().iter().next().unwrap();
        let inside = Point::new(link.min_x + 1.0, link.min_y + 1.0);
        let _ = view.pointer_moved(Some(inside));
        assert_eq!(view.hover(), Some("ys"));
    }
}
