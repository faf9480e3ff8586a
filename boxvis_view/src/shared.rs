// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`View`] behind one lock, for hosts that touch it from several threads.

use alloc::string::String;
use alloc::vec::Vec;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use boxvis_index::FrameId;
use boxvis_layout::{Entry, Painter, TextMetrics};
use kurbo::{Point, Size};

use crate::error::ViewError;
use crate::types::{Canvas, Evaluator, ObjectSource, Response};
use crate::view::View;

/// Cloneable handle to a mutex-guarded [`View`].
///
/// Each method takes the lock once, so the objects, hit boxes, and hover are
/// read and written together. A poisoned lock is recovered: every mutation
/// replaces state wholesale, so a panic mid-operation cannot leave it torn.
#[derive(Debug)]
pub struct SharedView<M> {
    inner: Arc<Mutex<View<M>>>,
}

impl<M> Clone for SharedView<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<M: TextMetrics> SharedView<M> {
    /// Wrap `view`.
    pub fn new(view: View<M>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(view)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, View<M>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with the lock held.
    pub fn with<R>(&self, f: impl FnOnce(&mut View<M>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Hovered label, if any.
    pub fn hover(&self) -> Option<String> {
        self.lock().hover().map(String::from)
    }

    /// See [`View::redraw`].
    pub fn redraw<P: Painter + ?Sized>(&self, painter: &mut P, canvas: Size) -> FrameId {
        self.lock().redraw(painter, canvas)
    }

    /// See [`View::redraw_canvas`].
    pub fn redraw_canvas<C: Canvas + ?Sized>(&self, canvas: &mut C) -> FrameId {
        self.lock().redraw_canvas(canvas)
    }

    /// See [`View::pointer_moved`].
    pub fn pointer_moved(&self, pointer: Option<Point>) -> Response {
        self.lock().pointer_moved(pointer)
    }

    /// See [`View::motion`].
    pub fn motion<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Response {
        self.lock().motion(canvas)
    }

    /// See [`View::click`].
    pub fn click<E: Evaluator + ?Sized>(
        &self,
        evaluator: &mut E,
    ) -> Result<Response, ViewError<E::Error>> {
        self.lock().click(evaluator)
    }

    /// See [`View::update_objects`].
    pub fn update_objects<S: ObjectSource + ?Sized>(
        &self,
        source: &mut S,
        boxes: &[(S::Ref, String)],
    ) -> Result<Response, ViewError<S::Error>> {
        self.lock().update_objects(source, boxes)
    }

    /// See [`View::set_objects`].
    pub fn set_objects(&self, objects: Vec<Entry>) -> Response {
        self.lock().set_objects(objects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use boxvis_layout::{MonospaceMetrics, RecordingPainter, Style, VisObject};
    use std::thread;

    fn shared() -> SharedView<MonospaceMetrics> {
        let view = SharedView::new(View::new(MonospaceMetrics::default(), Style::default()));
        let _ = view.set_objects(vec![Entry::new("a", vec![VisObject::link("b")])]);
        view
    }

    #[test]
    fn clones_share_state() {
        let a = shared();
        let b = a.clone();
        let mut p = RecordingPainter::new();
        let _ = a.redraw(&mut p, Size::new(200.0, 100.0));
        let corner = b.with(|v| {
            let (aabb, _) = v.hits().iter().next().map(|(a, l)| (*a, l.clone())).unwrap();
            Point::new(aabb.min_x, aabb.min_y)
        });
        assert_eq!(b.pointer_moved(Some(corner)), Response::REPAINT);
        assert_eq!(a.hover().as_deref(), Some("b"));
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let view = shared();
        let clone = view.clone();
        let res = thread::spawn(move || {
            clone.with(|_| panic!("poison the lock"));
        })
        .join();
        assert!(res.is_err());
        assert_eq!(view.set_objects(Vec::new()), Response::REPAINT);
        assert!(view.with(|v| v.objects().is_empty()));
    }
}
