// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale-to-fit: one uniform factor from natural layout space to canvas pixels.

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::style::Style;
use crate::util::transform_rect_bbox;

/// Uniform scale (plus offset) mapping natural coordinates onto the canvas.
///
/// Painting happens inside [`Fit::transform`]; layout bounds are mapped into
/// pixel space with [`Fit::to_canvas`] for hit testing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Fit {
    /// Uniform scale factor, never negative.
    pub scale: f64,
    /// Translation applied after scaling. Zero for the stock fit.
    pub offset: Vec2,
}

impl Default for Fit {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Fit {
    /// No scaling, no offset.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
    };

    /// Fit a layout of size `natural` into a canvas of size `canvas`.
    ///
    /// The usable canvas is shrunk by [`Style::fit_width`] and
    /// [`Style::fit_height`], and the scale is the smaller of the two axis
    /// ratios. An axis with zero natural extent does not constrain the scale.
    /// Negative canvas sizes are treated as zero.
    pub fn compute(natural: Size, canvas: Size, style: &Style) -> Self {
        let available_w = canvas.width.max(0.0) * style.fit_width;
        let available_h = canvas.height.max(0.0) * style.fit_height;
        let sx = axis_ratio(available_w, natural.width);
        let sy = axis_ratio(available_h, natural.height);
        let scale = match (sx, sy) {
            (Some(x), Some(y)) => x.min(y),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => 1.0,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(
            natural_w = natural.width,
            natural_h = natural.height,
            canvas_w = canvas.width,
            canvas_h = canvas.height,
            scale,
            "fit computed"
        );

        Self {
            scale,
            offset: Vec2::ZERO,
        }
    }

    /// Affine transform from natural to canvas coordinates.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.scale)
    }

    /// Map a natural-space rectangle into canvas pixels.
    pub fn to_canvas(&self, rect: Rect) -> Rect {
        transform_rect_bbox(self.transform(), rect)
    }

    /// Map a canvas-space rectangle back into natural coordinates.
    ///
    /// A zero scale has no inverse; every rectangle maps to [`Rect::ZERO`].
    pub fn to_natural(&self, rect: Rect) -> Rect {
        if self.scale <= 0.0 {
            return Rect::ZERO;
        }
        let inverse = Affine::scale(1.0 / self.scale) * Affine::translate(-self.offset);
        transform_rect_bbox(inverse, rect)
    }

    /// Map a canvas-space point back into natural coordinates.
    pub fn point_to_natural(&self, point: Point) -> Point {
        if self.scale <= 0.0 {
            return Point::ORIGIN;
        }
        ((point - self.offset).to_vec2() / self.scale).to_point()
    }
}

fn axis_ratio(available: f64, natural: f64) -> Option<f64> {
    (natural > 0.0).then(|| available / natural)
}
