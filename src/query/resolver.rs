// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Quote-link resolution inside a post container.
//!
//! A reference matches when its `href` equals the literal `"#" + target`
//! (exact comparison, so `"#42"` never matches a link to `"#421"`). Candidates
//! are snapshotted in document order when the iterator is created; matching
//! itself is lazy.

use crate::dom::{Document, NodeHandle};
use crate::model::markers::{HREF_ATTR, REFERENCE_CLASS};
use crate::model::PostId;

/// Lazy iterator over the quote links in one container that target one post.
///
/// Finite and restartable: calling [`find_references`] again yields a fresh
/// pass over a fresh snapshot.
#[derive(Debug)]
pub struct References<'a, D: Document + ?Sized> {
    doc: &'a D,
    candidates: Vec<NodeHandle>,
    expected_href: String,
    next: usize,
}

impl<D: Document + ?Sized> Iterator for References<'_, D> {
    type Item = NodeHandle;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < self.candidates.len() {
            let candidate = self.candidates[self.next];
            self.next += 1;
            let href = self.doc.attribute(candidate, HREF_ATTR);
            if href.as_deref() == Some(self.expected_href.as_str()) {
                return Some(candidate);
            }
        }
        None
    }
}

/// All quote links under `container` whose target is `target`, in document
/// order. An empty yield is an ordinary outcome ("no matching reference to
/// update") and says nothing about whether the target post exists.
pub fn find_references<'a, D: Document + ?Sized>(
    doc: &'a D,
    container: NodeHandle,
    target: &PostId,
) -> References<'a, D> {
    References {
        doc,
        candidates: doc.descendants_by_class(container, REFERENCE_CLASS),
        expected_href: target.href_target(),
        next: 0,
    }
}

/// First matching quote link, which is the one the hover controller acts on.
/// Duplicate references to the same target in one container are left
/// untouched after the first, preserving the long-standing page behavior.
pub fn first_reference<D: Document + ?Sized>(
    doc: &D,
    container: NodeHandle,
    target: &PostId,
) -> Option<NodeHandle> {
    find_references(doc, container, target).next()
}
