// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The visual object tree: labeled, nested boxes and the rows that hold them.

use alloc::string::String;
use alloc::vec::Vec;

/// A node in the rendered tree.
///
/// Every [`Named`](Self::Named), [`Link`](Self::Link), and
/// [`Function`](Self::Function) node produces exactly one hit box keyed by its
/// label or target. [`Unnamed`](Self::Unnamed) text never produces one.
/// Labels are not identifiers; two nodes may share a label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisObject {
    /// Plain text with no box and no hit entry.
    Unnamed(String),
    /// A titled container. Children are laid out left to right inside it.
    Named {
        /// Title drawn in the container's label band.
        label: String,
        /// Nested objects, in drawing order.
        children: Vec<VisObject>,
    },
    /// A clickable pill that refers to another structure by label.
    Link(String),
    /// Drawn like [`Link`](Self::Link) with a different color pair.
    Function(String),
}

impl VisObject {
    /// Build an [`Unnamed`](Self::Unnamed) text leaf.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Unnamed(text.into())
    }

    /// Build a [`Named`](Self::Named) container.
    pub fn named(label: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Named {
            label: label.into(),
            children,
        }
    }

    /// Build a [`Link`](Self::Link) pill.
    pub fn link(target: impl Into<String>) -> Self {
        Self::Link(target.into())
    }

    /// Build a [`Function`](Self::Function) pill.
    pub fn function(target: impl Into<String>) -> Self {
        Self::Function(target.into())
    }

    /// The label this node is picked by, if it produces a hit box.
    pub fn pick_label(&self) -> Option<&str> {
        match self {
            Self::Unnamed(_) => None,
            Self::Named { label, .. } => Some(label.as_str()),
            Self::Link(target) | Self::Function(target) => Some(target.as_str()),
        }
    }

    /// Number of hit boxes this subtree produces when laid out.
    pub fn pickable_count(&self) -> usize {
        match self {
            Self::Unnamed(_) => 0,
            Self::Link(_) | Self::Function(_) => 1,
            Self::Named { children, .. } => {
                1 + children.iter().map(Self::pickable_count).sum::<usize>()
            }
        }
    }

    /// Whether any node in this subtree is picked by `label`.
    pub fn contains_label(&self, label: &str) -> bool {
        if self.pick_label() == Some(label) {
            return true;
        }
        match self {
            Self::Named { children, .. } => children.iter().any(|c| c.contains_label(label)),
            _ => false,
        }
    }
}

/// One top-level row: a named root structure and the objects it renders as.
///
/// The name is drawn as `name: ` in the aligned label column and is not
/// itself pickable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    /// Display name of the root structure.
    pub name: String,
    /// Objects laid out left to right after the name.
    pub objects: Vec<VisObject>,
}

impl Entry {
    /// Create a row.
    pub fn new(name: impl Into<String>, objects: Vec<VisObject>) -> Self {
        Self {
            name: name.into(),
            objects,
        }
    }

    /// Number of hit boxes this row produces when laid out.
    pub fn pickable_count(&self) -> usize {
        self.objects.iter().map(VisObject::pickable_count).sum()
    }

    /// Whether any object in this row is picked by `label`.
    pub fn contains_label(&self, label: &str) -> bool {
        self.objects.iter().any(|o| o.contains_label(label))
    }
}
