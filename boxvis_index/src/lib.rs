// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=boxvis_index --heading-base-level=0

//! Boxvis Index: a flat 2D AABB hit index rebuilt once per frame.
//!
//! - Install a frame's worth of `(box, payload)` pairs with [`HitIndex::replace`].
//! - Resolve a pointer with [`HitIndex::first_hit`], or list every match with
//!   [`HitIndex::query_point`] / [`HitIndex::query_rect`].
//! - Each replacement advances a [`FrameId`] counter so stale results can be recognized.
//!
//! Matches are reported in insertion order. The first entry pushed wins an
//! overlap; depth and nesting are not considered. Upstream code decides the
//! order in which it pushes entries (for example, paint order with children
//! ahead of their container).
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use boxvis_index::{Aabb2D, HitIndex};
//!
//! let mut idx: HitIndex<f64, &str> = HitIndex::new();
//! idx.replace([
//!     (Aabb2D::from_xywh(10.0, 10.0, 20.0, 10.0), "inner"),
//!     (Aabb2D::from_xywh(0.0, 0.0, 100.0, 50.0), "outer"),
//! ]);
//!
//! assert_eq!(idx.first_hit(15.0, 15.0), Some(&"inner"));
//! assert_eq!(idx.first_hit(80.0, 40.0), Some(&"outer"));
//! assert_eq!(idx.first_hit(200.0, 0.0), None);
//! ```
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs for floating-point coordinates; a NaN query point never matches.

#![no_std]

extern crate alloc;

pub mod index;
pub mod types;

pub use index::{FrameId, HitIndex};
pub use types::Aabb2D;
