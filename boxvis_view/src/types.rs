// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the view: responses and the collaborator interfaces it drives.
//!
//! ## Overview
//!
//! The view owns no canvas, no evaluator, and no data source. Hosts implement
//! [`Canvas`], [`Evaluator`], and [`ObjectSource`] and pass them into the
//! [`View`](crate::View) entrypoints; each entrypoint reports what the host
//! should do next as a [`Response`].

use alloc::string::String;
use alloc::vec::Vec;

use boxvis_layout::{Entry, Painter};
use kurbo::{Point, Size};

bitflags::bitflags! {
    /// Follow-up work requested by a view entrypoint.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Response: u8 {
        /// The canvas content is stale and should be repainted.
        const REPAINT = 0b0000_0001;
        /// An update was signaled; fresh objects will arrive through
        /// [`View::update_objects`](crate::View::update_objects).
        const REFRESH = 0b0000_0010;
    }
}

/// The canvas widget owned by the host toolkit.
pub trait Canvas {
    /// Drawing surface used for repaints.
    type Painter: Painter + ?Sized;

    /// Allocated size in pixels.
    fn size(&self) -> Size;

    /// Pointer position in canvas pixels, or `None` when it is outside the widget.
    fn pointer(&self) -> Option<Point>;

    /// Borrow the drawing surface.
    fn painter(&mut self) -> &mut Self::Painter;

    /// Queue a repaint with the toolkit.
    fn request_repaint(&mut self);
}

/// Action run when a hovered box is clicked.
pub trait Evaluator {
    /// Failure reported by the evaluator.
    type Error: core::error::Error + 'static;

    /// Evaluate the structure identified by `label`.
    fn evaluate(&mut self, label: &str) -> Result<(), Self::Error>;

    /// Ask the data source to send a fresh set of boxes.
    fn signal_update(&mut self) -> Result<(), Self::Error>;
}

/// Converts the host's live boxes into rows of visual objects.
pub trait ObjectSource {
    /// Opaque reference to a live structure.
    type Ref;
    /// Failure reported while parsing.
    type Error: core::error::Error + 'static;

    /// Build one row per `(reference, display name)` pair.
    fn parse(&mut self, boxes: &[(Self::Ref, String)]) -> Result<Vec<Entry>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_response_is_empty() {
        assert!(Response::default().is_empty());
        let both = Response::REPAINT | Response::REFRESH;
        assert!(both.contains(Response::REPAINT));
        assert!(!Response::REFRESH.contains(Response::REPAINT));
    }
}
