// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `HitIndex` API: an ordered list of boxes replaced once per frame.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::types::Aabb2D;

/// Monotonic frame number assigned by [`HitIndex::replace`] and [`HitIndex::clear`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

impl FrameId {
    /// The frame number as a plain integer.
    pub const fn get(self) -> u64 {
        self.0
    }

    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Clone, Debug)]
struct Entry<T, P> {
    aabb: Aabb2D<T>,
    payload: P,
}

/// A flat list of `(box, payload)` pairs kept in insertion (paint) order.
///
/// The index is meant to be rebuilt wholesale after every repaint with
/// [`HitIndex::replace`]; it never merges entries from two frames.
/// Queries report matches in insertion order, so [`HitIndex::first_hit`]
/// resolves overlaps in favor of whichever entry was pushed first.
/// Payloads are not required to be unique: two entries may carry equal
/// payloads, and a query simply reports the first one it meets.
#[derive(Clone, Debug)]
pub struct HitIndex<T, P> {
    entries: Vec<Entry<T, P>>,
    frame: FrameId,
}

impl<T, P> Default for HitIndex<T, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            frame: FrameId::default(),
        }
    }
}

impl<T, P> HitIndex<T, P> {
    /// Create an empty index at frame zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the current frame.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the current frame holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The frame that produced the current entries.
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Drop every entry and start a new (empty) frame.
    pub fn clear(&mut self) -> FrameId {
        self.entries.clear();
        self.frame = self.frame.next();
        self.frame
    }

    /// Discard all entries and install `entries` as a new frame.
    ///
    /// Nothing from the previous frame survives, even if the new frame is empty.
    pub fn replace<I>(&mut self, entries: I) -> FrameId
    where
        I: IntoIterator<Item = (Aabb2D<T>, P)>,
    {
        self.entries.clear();
        self.entries.extend(
            entries
                .into_iter()
                .map(|(aabb, payload)| Entry { aabb, payload }),
        );
        self.frame = self.frame.next();
        self.frame
    }

    /// Append one entry to the current frame.
    pub fn push(&mut self, aabb: Aabb2D<T>, payload: P) {
        self.entries.push(Entry { aabb, payload });
    }

    /// Iterate every entry of the current frame in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Aabb2D<T>, &P)> + '_ {
        self.entries.iter().map(|e| (&e.aabb, &e.payload))
    }
}

impl<T: Copy + PartialOrd + Debug, P> HitIndex<T, P> {
    /// Entries whose box contains the point, in insertion order.
    pub fn query_point(&self, x: T, y: T) -> impl Iterator<Item = (&Aabb2D<T>, &P)> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.aabb.contains_point(x, y))
            .map(|e| (&e.aabb, &e.payload))
    }

    /// Entries whose box intersects `rect`, in insertion order.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> impl Iterator<Item = (&Aabb2D<T>, &P)> + '_ {
        self.entries
            .iter()
            .filter(move |e| !e.aabb.intersect(&rect).is_empty())
            .map(|e| (&e.aabb, &e.payload))
    }

    /// Payload of the first entry (in insertion order) containing the point.
    pub fn first_hit(&self, x: T, y: T) -> Option<&P> {
        self.query_point(x, y).map(|(_, p)| p).next()
    }
}
