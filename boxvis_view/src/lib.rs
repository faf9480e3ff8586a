// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boxvis_view --heading-base-level=0

//! Boxvis View: hover, click, and data-update handling for a box visualization.
//!
//! ## Overview
//!
//! A [`View`] is the explicit context object a hosting canvas widget owns.
//! It holds the current rows of visual objects, the hit boxes left by the
//! last repaint, and the hovered label. The host forwards its toolkit events
//! to the matching entrypoint and acts on the returned [`Response`]:
//!
//! - draw → [`View::redraw`] / [`View::redraw_canvas`]
//! - pointer motion → [`View::pointer_moved`] / [`View::motion`]
//! - click → [`View::click`]
//! - data changed → [`View::update_objects`] / [`View::set_objects`]
//!
//! Evaluation and parsing are delegated to the host through [`Evaluator`]
//! and [`ObjectSource`]; their failures come back as [`ViewError`].
//!
//! ## Picking
//!
//! A pointer resolves to the first hit box in paint order that contains it.
//! Inside a container the children are checked before the container itself.
//! Labels are not unique: two boxes with the same label are the same hover
//! target, and both are highlighted.
//!
//! ## Example
//!
//! ```
//! use boxvis_layout::{Entry, MonospaceMetrics, RecordingPainter, Style, VisObject};
//! use boxvis_view::{Response, View};
//! use kurbo::{Point, Size};
//!
//! let mut view = View::new(MonospaceMetrics::default(), Style::default());
//! view.set_objects(vec![Entry::new("xs", vec![VisObject::link("ys")])]);
//!
//! let mut painter = RecordingPainter::new();
//! view.redraw(&mut painter, Size::new(300.0, 100.0));
//!
//! let (pill, _) = view.hits().iter().next().unwrap();
//! let inside = Point::new(pill.min_x + 1.0, pill.min_y + 1.0);
//! assert_eq!(view.pointer_moved(Some(inside)), Response::REPAINT);
//! assert_eq!(view.hover(), Some("ys"));
//! // Same box again: nothing to repaint.
//! assert_eq!(view.pointer_moved(Some(inside)), Response::empty());
//! ```
//!
//! ## Threads
//!
//! With the `std` feature, [`SharedView`] wraps a view in a single mutex so
//! every entrypoint reads and writes the state as one unit.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod hover;
#[cfg(feature = "std")]
pub mod shared;
pub mod types;
pub mod view;

pub use error::ViewError;
#[cfg(feature = "std")]
pub use shared::SharedView;
pub use types::{Canvas, Evaluator, ObjectSource, Response};
pub use view::View;
