// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Painting: replay a [`Layout`] against a path/fill/stroke/text canvas.
//!
//! ## Drawing interface
//!
//! [`Painter`] is the small, cairo-shaped surface this crate draws through:
//! a current point, path construction, fill/stroke, text at the current
//! point, a source color, and a save/restore transform stack. Adapters for
//! real canvases implement it; [`RecordingPainter`](crate::RecordingPainter)
//! records calls for tests.
//!
//! Transform state is always pushed through [`Saved`], which restores on drop,
//! so every exit path leaves the painter's stack balanced.

use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;
use core::ops::{Deref, DerefMut};

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

use crate::fit::Fit;
use crate::layout::{Layout, PillKind, Shape};
use crate::style::Style;

/// Drawing primitives consumed by [`paint`].
pub trait Painter {
    /// Push the current transform and source state.
    fn save(&mut self);
    /// Pop the state pushed by the matching [`save`](Self::save).
    fn restore(&mut self);
    /// Translate user space.
    fn translate(&mut self, offset: Vec2);
    /// Scale user space uniformly.
    fn scale(&mut self, factor: f64);
    /// Start a new sub-path at `point`.
    fn move_to(&mut self, point: Point);
    /// Add a straight segment to `point`.
    fn line_to(&mut self, point: Point);
    /// Add a clockwise arc, joined to the current point by a line.
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    /// Close the current sub-path.
    fn close_path(&mut self);
    /// Fill the current path with the source color and keep the path.
    fn fill_preserve(&mut self);
    /// Stroke the current path with the source color and clear it.
    fn stroke(&mut self);
    /// Show `text` with its baseline starting at the current point.
    fn show_text(&mut self, text: &str);
    /// Set the color used by subsequent fills, strokes, and text.
    fn set_source_color(&mut self, color: Color);
}

/// A saved painter state, restored when dropped.
pub struct Saved<'a, P: Painter + ?Sized> {
    painter: &'a mut P,
}

impl<'a, P: Painter + ?Sized> Saved<'a, P> {
    /// Save `painter`'s state until the guard is dropped.
    pub fn new(painter: &'a mut P) -> Self {
        painter.save();
        Self { painter }
    }
}

impl<P: Painter + ?Sized> fmt::Debug for Saved<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Saved").finish_non_exhaustive()
    }
}

impl<P: Painter + ?Sized> Deref for Saved<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.painter
    }
}

impl<P: Painter + ?Sized> DerefMut for Saved<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.painter
    }
}

impl<P: Painter + ?Sized> Drop for Saved<'_, P> {
    fn drop(&mut self) {
        self.painter.restore();
    }
}

/// Paint `layout` inside `fit`, highlighting boxes whose label equals `hover`.
///
/// Every box with a matching label is highlighted, not only the one a
/// pointer lookup would resolve to.
pub fn paint<P: Painter + ?Sized>(
    painter: &mut P,
    layout: &Layout,
    fit: &Fit,
    style: &Style,
    hover: Option<&str>,
) {
    let mut scoped = Saved::new(painter);
    scoped.translate(fit.offset);
    scoped.scale(fit.scale);
    for shape in &layout.shapes {
        paint_shape(&mut *scoped, shape, style, hover);
    }
}

fn paint_shape<P: Painter + ?Sized>(p: &mut P, shape: &Shape, style: &Style, hover: Option<&str>) {
    let highlighted = shape.hover_key().is_some() && shape.hover_key() == hover;
    match shape {
        Shape::Text { origin, text } => {
            p.set_source_color(style.text);
            p.move_to(*origin);
            p.show_text(text);
        }
        Shape::Pill {
            rect,
            kind,
            target,
            text_origin,
        } => {
            let pair = match kind {
                PillKind::Link => style.link,
                PillKind::Function => style.function,
            };
            rounded_rect(p, *rect, style.corner_radius);
            fill_and_outline(p, pair.select(highlighted), style.outline);
            p.set_source_color(style.text);
            p.move_to(*text_origin);
            p.show_text(target);
        }
        Shape::Container {
            rect,
            divider_y,
            label,
            label_origin,
        } => {
            rounded_rect(p, *rect, style.corner_radius);
            fill_and_outline(p, style.named.select(highlighted), style.outline);
            p.move_to(Point::new(rect.x0, *divider_y));
            p.line_to(Point::new(rect.x1, *divider_y));
            p.stroke();
            p.set_source_color(style.text);
            p.move_to(*label_origin);
            p.show_text(label);
        }
    }
}

fn fill_and_outline<P: Painter + ?Sized>(p: &mut P, fill: Color, outline: Color) {
    p.set_source_color(fill);
    p.fill_preserve();
    p.set_source_color(outline);
    p.stroke();
}

/// Trace a rounded rectangle as a closed path. The radius is clamped to fit.
pub fn rounded_rect<P: Painter + ?Sized>(p: &mut P, rect: Rect, radius: f64) {
    let r = radius
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
        .max(0.0);
    p.move_to(Point::new(rect.x0 + r, rect.y0));
    p.arc(Point::new(rect.x1 - r, rect.y0 + r), r, -FRAC_PI_2, 0.0);
    p.arc(Point::new(rect.x1 - r, rect.y1 - r), r, 0.0, FRAC_PI_2);
    p.arc(Point::new(rect.x0 + r, rect.y1 - r), r, FRAC_PI_2, PI);
    p.arc(Point::new(rect.x0 + r, rect.y0 + r), r, PI, PI + FRAC_PI_2);
    p.close_path();
}
