// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One repaint: layout, fit, paint, and the hit boxes it leaves behind.

use alloc::string::String;
use alloc::vec::Vec;

use boxvis_index::{Aabb2D, FrameId, HitIndex};
use kurbo::{Point, Size};

use crate::fit::Fit;
use crate::layout::{Bound, Layout};
use crate::metrics::TextMetrics;
use crate::object::Entry;
use crate::paint::{Painter, paint};
use crate::style::Style;
use crate::util::rect_to_aabb;

/// A laid-out forest fitted to a canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Natural-space layout.
    pub layout: Layout,
    /// Mapping from natural space to canvas pixels.
    pub fit: Fit,
}

impl Frame {
    /// Lay out `entries` and fit the result into `canvas`.
    pub fn build<M: TextMetrics + ?Sized>(
        metrics: &M,
        style: &Style,
        entries: &[Entry],
        canvas: Size,
    ) -> Self {
        let layout = Layout::build(metrics, style, entries);
        let fit = Fit::compute(layout.size, canvas, style);
        Self { layout, fit }
    }

    /// Bounds in canvas pixels, in lookup order.
    pub fn bounds(&self) -> impl Iterator<Item = Bound> + '_ {
        self.layout.bounds.iter().map(|b| Bound {
            label: b.label.clone(),
            rect: self.fit.to_canvas(b.rect),
        })
    }

    /// Canvas-space entries ready for [`HitIndex::replace`].
    pub fn hit_entries(&self) -> impl Iterator<Item = (Aabb2D<f64>, String)> + '_ {
        self.bounds().map(|b| (rect_to_aabb(b.rect), b.label))
    }

    /// First label whose canvas-space box contains `point`.
    ///
    /// Scans the layout directly; use a [`HitIndex`] when querying often.
    pub fn hit(&self, point: Point) -> Option<&str> {
        self.layout
            .bounds
            .iter()
            .find(|b| rect_to_aabb(self.fit.to_canvas(b.rect)).contains_point(point.x, point.y))
            .map(|b| b.label.as_str())
    }

    /// Paint this frame, highlighting `hover`.
    pub fn paint<P: Painter + ?Sized>(&self, painter: &mut P, style: &Style, hover: Option<&str>) {
        paint(painter, &self.layout, &self.fit, style, hover);
    }
}

/// Repaint `entries` onto `painter` and install the resulting boxes in `hits`.
///
/// The previous frame's boxes are discarded even when the new frame has none.
pub fn redraw<M, P>(
    metrics: &M,
    style: &Style,
    entries: &[Entry],
    canvas: Size,
    painter: &mut P,
    hover: Option<&str>,
    hits: &mut HitIndex<f64, String>,
) -> FrameId
where
    M: TextMetrics + ?Sized,
    P: Painter + ?Sized,
{
    let frame = Frame::build(metrics, style, entries, canvas);
    frame.paint(painter, style, hover);
    let id = hits.replace(frame.hit_entries().collect::<Vec<_>>());

    #[cfg(feature = "tracing")]
    tracing::debug!(
        frame = id.get(),
        bounds = hits.len(),
        scale = frame.fit.scale,
        "repaint"
    );
    id
}
