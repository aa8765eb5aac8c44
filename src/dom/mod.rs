// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The narrow document capability interface the engine runs against.
//!
//! The engine never assumes a browser: everything it needs from the page is
//! behind [`Document`], and "element absent" is an ordinary [`Option`], never
//! a fault. [`memory::MemoryDocument`] is the bundled implementation used by
//! embedders without a host page and by the test suite.

pub mod memory;

pub use memory::MemoryDocument;

/// Opaque handle to an element of a [`Document`].
///
/// Handles are only meaningful against the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) usize);

/// An element's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }
}

/// Current viewport dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Capability interface over the render tree.
///
/// Query results are ordered snapshots taken at call time; callers may mutate
/// the document while walking them without invalidation hazards. Mutating
/// methods accept handles to detached elements (a freshly cloned subtree is
/// detached until inserted).
pub trait Document {
    /// Looks up the element carrying `id`, if any. Detached subtrees are not
    /// searched.
    fn element_by_id(&self, id: &str) -> Option<NodeHandle>;

    /// All attached elements whose class list contains the whole token
    /// `class`, in document order.
    fn elements_by_class(&self, class: &str) -> Vec<NodeHandle>;

    /// Like [`Document::elements_by_class`], scoped to the descendants of
    /// `scope` (exclusive of `scope` itself).
    fn descendants_by_class(&self, scope: NodeHandle, class: &str) -> Vec<NodeHandle>;

    fn attribute(&self, node: NodeHandle, name: &str) -> Option<String>;

    fn set_attribute(&mut self, node: NodeHandle, name: &str, value: &str);

    /// Removing an attribute the element does not carry is a no-op.
    fn remove_attribute(&mut self, node: NodeHandle, name: &str);

    /// Deep-copies the subtree rooted at `node`. The copy is detached; it
    /// joins the tree via [`Document::insert_after`].
    fn clone_subtree(&mut self, node: NodeHandle) -> NodeHandle;

    /// Attaches `node` as the immediately-following sibling of `anchor`.
    fn insert_after(&mut self, anchor: NodeHandle, node: NodeHandle);

    /// Detaches `node` (and its subtree) from its parent.
    fn remove(&mut self, node: NodeHandle);

    fn bounding_rect(&self, node: NodeHandle) -> Rect;

    fn viewport(&self) -> Viewport;
}
