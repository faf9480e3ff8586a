// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boxvis_layout --heading-base-level=0

//! Boxvis Layout: measure, place, fit, and paint trees of labeled boxes.
//!
//! The input is a forest of [`Entry`] rows, each holding a sequence of
//! [`VisObject`]s: plain text, titled containers, and link/function pills.
//! Sizes come from a [`TextMetrics`] oracle; nothing here shapes text or
//! owns a canvas.
//!
//! - [`size`]: pure width/height rules per object variant.
//! - [`Layout::build`]: a display list of [`Shape`]s plus the hit [`Bound`]s,
//!   in natural (unscaled) coordinates.
//! - [`Fit::compute`]: one uniform scale mapping the natural extent into a canvas.
//! - [`paint`]: replays the display list against a [`Painter`].
//! - [`redraw`]: the whole repaint, leaving canvas-space boxes in a
//!   [`boxvis_index::HitIndex`].
//!
//! ## Not a widget
//!
//! Pointer tracking, hover state, and click dispatch live in `boxvis_view`.
//! This crate stops at geometry and drawing calls.
//!
//! ## Minimal usage
//!
//! ```
//! use boxvis_index::HitIndex;
//! use boxvis_layout::{Entry, MonospaceMetrics, RecordingPainter, Style, VisObject, redraw};
//! use kurbo::Size;
//!
//! let entries = vec![Entry::new(
//!     "xs",
//!     vec![VisObject::named(
//!         "Cons",
//!         vec![VisObject::text("1"), VisObject::link("ys")],
//!     )],
//! )];
//!
//! let mut hits = HitIndex::new();
//! let mut painter = RecordingPainter::new();
//! redraw(
//!     &MonospaceMetrics::default(),
//!     &Style::default(),
//!     &entries,
//!     Size::new(400.0, 200.0),
//!     &mut painter,
//!     None,
//!     &mut hits,
//! );
//!
//! // The link is found ahead of the container that holds it.
//! let labels: Vec<_> = hits.iter().map(|(_, l)| l.as_str()).collect();
//! assert_eq!(labels, ["ys", "Cons"]);
//! assert_eq!(painter.depth(), 0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and Peniko.
//! - `libm`: `no_std` math for Kurbo and Peniko.
//! - `tracing`: emit layout, fit, and repaint events.

#![no_std]

extern crate alloc;

pub mod fit;
pub mod layout;
pub mod metrics;
pub mod object;
pub mod paint;
pub mod recording;
pub mod render;
pub mod size;
pub mod style;

mod util;

pub use fit::Fit;
pub use layout::{Bound, Layout, PillKind, RowMetrics, Shape};
pub use metrics::{FontMetrics, InkExtent, MonospaceMetrics, TextMetrics};
pub use object::{Entry, VisObject};
pub use paint::{Painter, Saved, paint};
pub use recording::{PaintOp, RecordingPainter};
pub use render::{Frame, redraw};
pub use style::{ColorPair, Style};
