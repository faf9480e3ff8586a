// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout: place every row and nested object in natural coordinates.
//!
//! ## Geometry
//!
//! Rows are stacked vertically. Row `i` has its text baseline at
//! `row_gap + sum(height_j + row_gap for j < i)`. Each row starts with its
//! name (drawn as `name: `) in a left column whose width is shared by all
//! rows, followed by its objects laid out left to right.
//!
//! Inside a row every object shares the row's baseline. Boxes start one
//! padding above the font ascent. A container's children start one padding
//! in from its left edge, and its label is centered in a band below the
//! children, separated by a divider.
//!
//! ## Output
//!
//! [`Layout::build`] is pure: it returns a display list ([`Shape`]s in paint
//! order) and the hit boxes ([`Bound`]s) without touching a canvas. Within a
//! container the children's bounds come first and the container's own bound
//! last, so a first-match lookup prefers the innermost box.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::metrics::{FontMetrics, TextMetrics};
use crate::object::{Entry, VisObject};
use crate::size;
use crate::style::Style;
use crate::util::transform_rect_bbox;

/// Which color pair a pill uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PillKind {
    /// A [`VisObject::Link`].
    Link,
    /// A [`VisObject::Function`].
    Function,
}

/// One drawable item of a [`Layout`], in natural coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Bare text with its baseline origin.
    Text {
        /// Left end of the baseline.
        origin: Point,
        /// Text to show.
        text: String,
    },
    /// A rounded pill showing a link or function target.
    Pill {
        /// Outline of the pill.
        rect: Rect,
        /// Color pair selector.
        kind: PillKind,
        /// Target label, also the hover key.
        target: String,
        /// Baseline origin of the target text.
        text_origin: Point,
    },
    /// A rounded container box with a divider above its label band.
    Container {
        /// Outline of the container.
        rect: Rect,
        /// Vertical position of the divider line, spanning the full width.
        divider_y: f64,
        /// Container label, also the hover key.
        label: String,
        /// Baseline origin of the centered label.
        label_origin: Point,
    },
}

impl Shape {
    /// The hover key of this shape, if it is highlightable.
    pub fn hover_key(&self) -> Option<&str> {
        match self {
            Self::Text { .. } => None,
            Self::Pill { target, .. } => Some(target.as_str()),
            Self::Container { label, .. } => Some(label.as_str()),
        }
    }

    fn transformed(self, affine: Affine) -> Self {
        match self {
            Self::Text { origin, text } => Self::Text {
                origin: affine * origin,
                text,
            },
            Self::Pill {
                rect,
                kind,
                target,
                text_origin,
            } => Self::Pill {
                rect: transform_rect_bbox(affine, rect),
                kind,
                target,
                text_origin: affine * text_origin,
            },
            Self::Container {
                rect,
                divider_y,
                label,
                label_origin,
            } => Self::Container {
                rect: transform_rect_bbox(affine, rect),
                divider_y: (affine * Point::new(0.0, divider_y)).y,
                label,
                label_origin: affine * label_origin,
            },
        }
    }
}

/// A pickable box: the label it resolves to and where it sits.
#[derive(Clone, Debug, PartialEq)]
pub struct Bound {
    /// Label or target of the node that produced the box.
    pub label: String,
    /// Box extent.
    pub rect: Rect,
}

/// Placement of one row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowMetrics {
    /// Baseline of the row in natural coordinates.
    pub baseline: f64,
    /// Label column width plus the summed widths of the row's objects.
    pub width: f64,
    /// Height of the row's tallest object.
    pub height: f64,
}

/// The laid-out forest in natural coordinates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    /// Natural extent used for scale-to-fit. Width is at least 1.
    pub size: Size,
    /// Shared width of the row-name column.
    pub label_width: f64,
    /// Per-row placement, in input order.
    pub rows: Vec<RowMetrics>,
    /// Drawable items in paint order.
    pub shapes: Vec<Shape>,
    /// Hit boxes in lookup order.
    pub bounds: Vec<Bound>,
}

impl Layout {
    /// Lay out `entries`.
    ///
    /// Empty input yields a layout with width 1, height 0, and no shapes.
    pub fn build<M: TextMetrics + ?Sized>(metrics: &M, style: &Style, entries: &[Entry]) -> Self {
        let placer = Placer {
            metrics,
            style,
            font: metrics.font_metrics(),
        };

        let label_width = entries
            .iter()
            .map(|e| size::width(metrics, style, &VisObject::Unnamed(row_title(&e.name))))
            .fold(0.0, f64::max);

        let mut layout = Self {
            label_width,
            ..Self::default()
        };
        let mut baseline = style.row_gap;
        let mut total_height = 0.0;
        let mut total_width: f64 = 1.0;
        for entry in entries {
            let height = size::height(metrics, style, &entry.objects);
            let placed = placer.place_row(entry, label_width);
            let width = label_width + placed.width;
            let placed = placed.translate(Vec2::new(0.0, baseline));
            layout.shapes.extend(placed.shapes);
            layout.bounds.extend(placed.bounds);
            layout.rows.push(RowMetrics {
                baseline,
                width,
                height,
            });
            total_width = total_width.max(width);
            total_height += height + style.row_gap;
            baseline += height + style.row_gap;
        }
        // The last row only needs half a gap below it.
        let natural_height = (total_height - style.row_gap / 2.0).max(0.0);
        layout.size = Size::new(total_width, natural_height);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows = layout.rows.len(),
            width = layout.size.width,
            height = layout.size.height,
            bounds = layout.bounds.len(),
            "layout built"
        );
        layout
    }
}

fn row_title(name: &str) -> String {
    format!("{name}: ")
}

/// Shapes and bounds produced by one subtree, plus the width it consumed.
#[derive(Default)]
struct Placed {
    shapes: Vec<Shape>,
    bounds: Vec<Bound>,
    width: f64,
}

impl Placed {
    fn translate(self, offset: Vec2) -> Self {
        let affine = Affine::translate(offset);
        Self {
            shapes: self
                .shapes
                .into_iter()
                .map(|s| s.transformed(affine))
                .collect(),
            bounds: self
                .bounds
                .into_iter()
                .map(|b| Bound {
                    label: b.label,
                    rect: transform_rect_bbox(affine, b.rect),
                })
                .collect(),
            width: self.width,
        }
    }

    /// Append `child` after the current contents and advance the width.
    fn append(&mut self, child: Self) {
        self.shapes.extend(child.shapes);
        self.bounds.extend(child.bounds);
        self.width += child.width;
    }
}

struct Placer<'a, M: ?Sized> {
    metrics: &'a M,
    style: &'a Style,
    font: FontMetrics,
}

impl<M: TextMetrics + ?Sized> Placer<'_, M> {
    /// Place a row with its baseline at y = 0.
    fn place_row(&self, entry: &Entry, label_width: f64) -> Placed {
        let mut placed = Placed {
            shapes: alloc::vec![Shape::Text {
                origin: Point::ORIGIN,
                text: row_title(&entry.name),
            }],
            ..Placed::default()
        };
        let mut row = self.place_sequence(&entry.objects, label_width);
        row.width -= label_width;
        placed.append(row);
        placed
    }

    /// Place siblings left to right starting at `x`. The returned width
    /// includes the starting offset.
    fn place_sequence(&self, objects: &[VisObject], x: f64) -> Placed {
        let mut placed = Placed {
            width: x,
            ..Placed::default()
        };
        for object in objects {
            let child = self.place(object, placed.width);
            placed.append(child);
        }
        placed
    }

    /// Place one object with its left edge at `x` on the baseline.
    fn place(&self, object: &VisObject, x: f64) -> Placed {
        let style = self.style;
        let width = size::width(self.metrics, style, object);
        let top = -self.font.ascent - style.padding;
        match object {
            VisObject::Unnamed(text) => Placed {
                shapes: alloc::vec![Shape::Text {
                    origin: Point::new(x, 0.0),
                    text: text.clone(),
                }],
                bounds: Vec::new(),
                width,
            },
            VisObject::Link(target) | VisObject::Function(target) => {
                let kind = if matches!(object, VisObject::Link(_)) {
                    PillKind::Link
                } else {
                    PillKind::Function
                };
                let rect = Rect::new(
                    x,
                    top,
                    x + width,
                    top + self.font.line_height + style.margin(),
                );
                Placed {
                    shapes: alloc::vec![Shape::Pill {
                        rect,
                        kind,
                        target: target.clone(),
                        text_origin: Point::new(x + style.padding, 0.0),
                    }],
                    bounds: alloc::vec![Bound {
                        label: target.clone(),
                        rect,
                    }],
                    width,
                }
            }
            VisObject::Named { label, children } => {
                let body = size::height(self.metrics, style, children);
                let rect = Rect::new(
                    x,
                    top,
                    x + width,
                    top + self.font.line_height + style.margin() + body,
                );
                let ink = self.metrics.ink_extent(label);
                let mut placed = Placed {
                    shapes: alloc::vec![Shape::Container {
                        rect,
                        divider_y: top + body + style.padding,
                        label: label.clone(),
                        label_origin: Point::new(
                            x + width / 2.0 - (ink.advance - ink.bearing) / 2.0,
                            body + 1.5 * style.padding - style.padding,
                        ),
                    }],
                    ..Placed::default()
                };
                let inner = self.place_sequence(children, x + style.padding);
                placed.shapes.extend(inner.shapes);
                placed.bounds.extend(inner.bounds);
                placed.bounds.push(Bound {
                    label: label.clone(),
                    rect,
                });
                placed.width = width;
                placed
            }
        }
    }
}
