// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions from pointer lookups.
//!
//! ## Usage
//!
//! 1) Resolve the pointer against the current frame's hit index.
//! 2) Call [`HoverState::update`] with the result to get `Leave(..)` / `Enter(..)` transitions.
//! 3) Repaint only when the returned list is non-empty.
//!
//! ## Minimal example
//!
//! ```
//! use boxvis_view::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<&str> = HoverState::new();
//! assert_eq!(h.update(Some("a")), vec![HoverEvent::Enter("a")]);
//! assert_eq!(h.update(Some("b")), vec![HoverEvent::Leave("a"), HoverEvent::Enter("b")]);
//! assert!(h.update(Some("b")).is_empty());
//! ```

use alloc::vec::Vec;

/// The single hovered key, if any.
///
/// Keys are compared by value. Two distinct boxes that share a key are
/// indistinguishable here: moving between them produces no transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverState<K> {
    current: Option<K>,
}

impl<K> Default for HoverState<K> {
    fn default() -> Self {
        Self { current: None }
    }
}

/// A hover transition event.
///
/// Returned by [`HoverState::update`] and [`HoverState::clear`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// Pointer enters the given key.
    Enter(K),
    /// Pointer leaves the given key.
    Leave(K),
}

impl<K: Clone + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hovered key, if any.
    pub fn current(&self) -> Option<&K> {
        self.current.as_ref()
    }

    /// Clear the hover, returning the leave event if something was hovered.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.current.take().map(HoverEvent::Leave).into_iter().collect()
    }

    /// Replace the hovered key and return the transitions.
    ///
    /// A leave is always emitted before an enter. An unchanged key yields no events.
    pub fn update(&mut self, next: Option<K>) -> Vec<HoverEvent<K>> {
        if self.current == next {
            return Vec::new();
        }
        let mut out = self.clear();
        if let Some(k) = next {
            out.push(HoverEvent::Enter(k.clone()));
            self.current = Some(k);
        }
        out
    }
}
