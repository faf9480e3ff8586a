// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Painter`] that records every call as a [`PaintOp`].

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use peniko::Color;

use crate::paint::Painter;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    /// [`Painter::save`].
    Save,
    /// [`Painter::restore`].
    Restore,
    /// [`Painter::translate`].
    Translate(Vec2),
    /// [`Painter::scale`].
    Scale(f64),
    /// [`Painter::move_to`].
    MoveTo(Point),
    /// [`Painter::line_to`].
    LineTo(Point),
    /// [`Painter::arc`].
    Arc {
        /// Arc center.
        center: Point,
        /// Arc radius.
        radius: f64,
        /// Start angle in radians.
        start: f64,
        /// End angle in radians.
        end: f64,
    },
    /// [`Painter::close_path`].
    ClosePath,
    /// [`Painter::fill_preserve`].
    FillPreserve,
    /// [`Painter::stroke`].
    Stroke,
    /// [`Painter::show_text`].
    ShowText(String),
    /// [`Painter::set_source_color`].
    SetSourceColor(Color),
}

/// Records drawing calls and tracks the save/restore nesting depth.
#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
    depth: usize,
    max_depth: usize,
}

impl RecordingPainter {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls in order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Current number of unmatched `save` calls.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Deepest save nesting seen so far.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Strings passed to `show_text`, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::ShowText(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Drop the recording, keeping nothing.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.depth = 0;
        self.max_depth = 0;
    }

    /// Take the recorded calls, leaving the painter empty.
    pub fn take(&mut self) -> Vec<PaintOp> {
        self.depth = 0;
        self.max_depth = 0;
        core::mem::take(&mut self.ops)
    }
}

impl Painter for RecordingPainter {
    fn save(&mut self) {
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
        self.ops.push(PaintOp::Save);
    }

    fn restore(&mut self) {
        // An unmatched restore is recorded but does not underflow.
        self.depth = self.depth.saturating_sub(1);
        self.ops.push(PaintOp::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.ops.push(PaintOp::Translate(offset));
    }

    fn scale(&mut self, factor: f64) {
        self.ops.push(PaintOp::Scale(factor));
    }

    fn move_to(&mut self, point: Point) {
        self.ops.push(PaintOp::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.ops.push(PaintOp::LineTo(point));
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64) {
        self.ops.push(PaintOp::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn close_path(&mut self) {
        self.ops.push(PaintOp::ClosePath);
    }

    fn fill_preserve(&mut self) {
        self.ops.push(PaintOp::FillPreserve);
    }

    fn stroke(&mut self) {
        self.ops.push(PaintOp::Stroke);
    }

    fn show_text(&mut self, text: &str) {
        self.ops.push(PaintOp::ShowText(text.into()));
    }

    fn set_source_color(&mut self, color: Color) {
        self.ops.push(PaintOp::SetSourceColor(color));
    }
}
