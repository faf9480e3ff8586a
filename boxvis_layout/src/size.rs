// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Size calculation: how much room each object needs, without drawing anything.
//!
//! Widths apply to a single object; heights apply to a row of siblings and
//! take the tallest. Both are pure functions of the metrics oracle and the
//! [`Style`] spacing. An empty row has height zero.

use crate::metrics::TextMetrics;
use crate::object::VisObject;
use crate::style::Style;

/// Horizontal room taken by `object`, margins included.
///
/// Containers take the larger of their label's ink advance and the summed
/// widths of their children. Everything else uses plain advance width.
pub fn width<M: TextMetrics + ?Sized>(metrics: &M, style: &Style, object: &VisObject) -> f64 {
    let content = match object {
        VisObject::Unnamed(text) | VisObject::Link(text) | VisObject::Function(text) => {
            metrics.advance_width(text)
        }
        VisObject::Named { label, children } => {
            let label = metrics.ink_extent(label).advance;
            label.max(row_width(metrics, style, children))
        }
    };
    content + style.margin()
}

/// Summed widths of a row of siblings.
pub fn row_width<M: TextMetrics + ?Sized>(metrics: &M, style: &Style, row: &[VisObject]) -> f64 {
    row.iter().map(|o| width(metrics, style, o)).sum()
}

/// Vertical room taken by a row of siblings: the tallest of them.
pub fn height<M: TextMetrics + ?Sized>(metrics: &M, style: &Style, row: &[VisObject]) -> f64 {
    let line = metrics.font_metrics().line_height;
    row.iter()
        .map(|o| object_height(line, style, o))
        .fold(0.0, f64::max)
}

fn object_height(line: f64, style: &Style, object: &VisObject) -> f64 {
    match object {
        VisObject::Unnamed(_) => line,
        VisObject::Link(_) | VisObject::Function(_) => line + style.margin(),
        VisObject::Named { children, .. } => {
            let inner = children
                .iter()
                .map(|c| object_height(line, style, c))
                .fold(0.0, f64::max);
            line + style.header() + inner
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{FontMetrics, InkExtent};
    use alloc::vec;

    /// Advance of 5 per char, ink advance 3 per char, line height 15.
    struct Skewed;

    impl TextMetrics for Skewed {
        #[allow(clippy::cast_precision_loss, reason = "test strings are short")]
        fn advance_width(&self, text: &str) -> f64 {
            5.0 * text.chars().count() as f64
        }

        #[allow(clippy::cast_precision_loss, reason = "test strings are short")]
        fn ink_extent(&self, text: &str) -> InkExtent {
            InkExtent {
                bearing: 1.0,
                advance: 3.0 * text.chars().count() as f64,
            }
        }

        fn font_metrics(&self) -> FontMetrics {
            FontMetrics {
                ascent: 12.0,
                descent: 3.0,
                line_height: 15.0,
            }
        }
    }

    #[test]
    fn leaf_widths_use_plain_advance() {
        let s = Style::default();
        assert_eq!(width(&Skewed, &s, &VisObject::text("abcd")), 30.0);
        assert_eq!(width(&Skewed, &s, &VisObject::link("ab")), 20.0);
        assert_eq!(width(&Skewed, &s, &VisObject::function("")), 10.0);
    }

    #[test]
    fn named_width_uses_ink_advance_of_label() {
        let s = Style::default();
        // Label ink advance 3*10 = 30 beats the empty body.
        let wide_label = VisObject::named("abcdefghij", vec![]);
        assert_eq!(width(&Skewed, &s, &wide_label), 40.0);
        // Body (20 + 15) beats the label ink advance (3).
        let wide_body = VisObject::named("a", vec![VisObject::link("ab"), VisObject::text("a")]);
        assert_eq!(width(&Skewed, &s, &wide_body), 45.0);
    }

    #[test]
    fn heights_take_tallest_sibling() {
        let s = Style::default();
        assert_eq!(height(&Skewed, &s, &[]), 0.0);
        assert_eq!(height(&Skewed, &s, &[VisObject::text("a")]), 15.0);
        assert_eq!(
            height(&Skewed, &s, &[VisObject::text("a"), VisObject::link("b")]),
            25.0
        );
    }

    #[test]
    fn named_height_nests() {
        let s = Style::default();
        let empty = VisObject::named("N", vec![]);
        assert_eq!(height(&Skewed, &s, core::slice::from_ref(&empty)), 30.0);
        let nested = VisObject::named("M", vec![empty, VisObject::link("x")]);
        // 15 + 15 + max(30, 25)
        assert_eq!(height(&Skewed, &s, &[nested]), 60.0);
    }
}
