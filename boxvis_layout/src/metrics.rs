// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement interface consumed by sizing and layout.
//!
//! Shaping and font resolution happen elsewhere; layout only needs a few
//! numbers per string in one fixed font.

/// Vertical metrics of the active font.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FontMetrics {
    /// Distance from the baseline to the top of the tallest glyph.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the lowest glyph.
    pub descent: f64,
    /// Recommended baseline-to-baseline distance.
    pub line_height: f64,
}

/// Ink extents of a string: where the glyphs actually put paint.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct InkExtent {
    /// Horizontal offset from the origin to the leftmost inked pixel.
    pub bearing: f64,
    /// Advance adjusted for the right side bearing of the last glyph.
    pub advance: f64,
}

/// Text metrics oracle for a single fixed font.
///
/// Implementations must accept the empty string. Zero metrics are allowed;
/// layout collapses instead of failing.
pub trait TextMetrics {
    /// Plain advance width of `text`.
    fn advance_width(&self, text: &str) -> f64;

    /// Ink extents of `text`.
    ///
    /// This is deliberately distinct from [`advance_width`](Self::advance_width):
    /// container widths measure their label by ink advance while every other
    /// width uses plain advance.
    fn ink_extent(&self, text: &str) -> InkExtent;

    /// Vertical metrics of the font.
    fn font_metrics(&self) -> FontMetrics;
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn advance_width(&self, text: &str) -> f64 {
        (**self).advance_width(text)
    }

    fn ink_extent(&self, text: &str) -> InkExtent {
        (**self).ink_extent(text)
    }

    fn font_metrics(&self) -> FontMetrics {
        (**self).font_metrics()
    }
}

/// Fixed-advance metrics: every `char` is `char_width` wide.
///
/// Handy for tests, benches, and headless hosts that only need stable numbers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of a single character.
    pub char_width: f64,
    /// Ink bearing reported for every non-empty string.
    pub bearing: f64,
    /// Vertical font metrics.
    pub font: FontMetrics,
}

impl MonospaceMetrics {
    /// Metrics for a font with the given character advance and line height.
    ///
    /// Ascent is 80% of the line height and descent the remaining 20%.
    pub fn new(char_width: f64, line_height: f64) -> Self {
        Self {
            char_width,
            bearing: 0.0,
            font: FontMetrics {
                ascent: line_height * 0.8,
                descent: line_height * 0.2,
                line_height,
            },
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(7.0, 15.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Character counts of displayable labels are far below 2^52."
    )]
    fn advance_width(&self, text: &str) -> f64 {
        text.chars().count() as f64 * self.char_width
    }

    fn ink_extent(&self, text: &str) -> InkExtent {
        if text.is_empty() {
            return InkExtent::default();
        }
        InkExtent {
            bearing: self.bearing,
            advance: self.advance_width(text),
        }
    }

    fn font_metrics(&self) -> FontMetrics {
        self.font
    }
}
