// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The preview state controller.
//!
//! Each hover edge on a quote link runs [`hover`] to completion: resolve the
//! target post, resolve the link inside its container, then either mark the
//! link broken, highlight the target in place, materialize a preview clone,
//! or unwind whatever the matching hover-start produced. Nothing here is a
//! fault: absent elements are data and every call yields a [`HoverOutcome`].
//!
//! The caller serializes hover edges per link (hover-end arrives before the
//! next hover-start on the same link), mirroring how a page delivers mouse
//! events.

use crate::dom::{Document, NodeHandle};
use crate::model::class_list::attr_contains_token;
use crate::model::markers::{
    BROKEN_STYLE, CLASS_ATTR, CONTAINER_CLASS, HIGHLIGHT_CLASS, HOVER_END_ATTR, HOVER_START_ATTR,
    ID_ATTR, POPUP_CLASS, STYLE_ATTR,
};
use crate::model::{ClassList, CloneId, PostId};
use crate::query::{first_reference, is_fully_visible};

/// Session-scoped hover context.
///
/// Owns the single global "currently highlighted post" value. All highlight
/// mutation goes through [`PreviewSession::set_highlight`], which clears
/// before it sets, so at most one container ever carries the token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewSession {
    current_highlight: Option<PostId>,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_highlight(&self) -> Option<&PostId> {
        self.current_highlight.as_ref()
    }

    /// Atomically moves the highlight: strips the token from every container
    /// that carries it, then sets it on `target`'s container (if any).
    ///
    /// The clearing sweep walks an ordered snapshot of all containers and
    /// tolerates any number of current carriers, including zero. A `target`
    /// with no matching element clears and stops; the session then holds no
    /// highlight.
    pub fn set_highlight<D: Document + ?Sized>(&mut self, doc: &mut D, target: Option<&PostId>) {
        for node in doc.elements_by_class(CONTAINER_CLASS) {
            let Some(attr) = doc.attribute(node, CLASS_ATTR) else {
                continue;
            };
            if !attr_contains_token(&attr, HIGHLIGHT_CLASS) {
                continue;
            }
            let mut classes = ClassList::parse(&attr);
            classes.remove(HIGHLIGHT_CLASS);
            doc.set_attribute(node, CLASS_ATTR, &classes.to_attr());
        }
        self.current_highlight = None;

        let Some(target) = target else {
            return;
        };
        let Some(node) = doc.element_by_id(target.as_str()) else {
            return;
        };
        let mut classes =
            ClassList::parse(doc.attribute(node, CLASS_ATTR).as_deref().unwrap_or(""));
        classes.add(HIGHLIGHT_CLASS);
        doc.set_attribute(node, CLASS_ATTR, &classes.to_attr());
        self.current_highlight = Some(target.clone());
    }
}

/// What one hover edge did to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverOutcome {
    /// The container holds no quote link for this target (or is itself gone);
    /// nothing changed.
    NoMatchingReference,
    /// The target post does not exist. The link lost its hover affordances
    /// and was struck through; the state is terminal and re-marking an
    /// already-broken link changes nothing further.
    MarkedBroken,
    /// The target is fully visible; its container now carries the highlight
    /// token and every other container does not.
    Highlighted { post_id: PostId },
    /// The target is off-screen; a preview clone was inserted right after the
    /// hovered link.
    CloneInserted { clone_id: CloneId },
    /// Hover-end: highlight cleared unconditionally, and the preview clone
    /// removed if one was present.
    Unwound { removed_clone: Option<CloneId> },
}

/// Runs one hover edge for the quote link in `container_id` targeting
/// `target_id`. `hover` is true on hover-start, false on hover-end.
pub fn hover<D: Document + ?Sized>(
    doc: &mut D,
    session: &mut PreviewSession,
    container_id: &PostId,
    target_id: &PostId,
    hover: bool,
) -> HoverOutcome {
    let target = doc.element_by_id(target_id.as_str());
    // Recomputed on every edge; an absent target is never visible.
    let visible = target.is_some_and(|node| is_fully_visible(doc, node));

    let Some(container) = doc.element_by_id(container_id.as_str()) else {
        return HoverOutcome::NoMatchingReference;
    };
    let Some(reference) = first_reference(doc, container, target_id) else {
        return HoverOutcome::NoMatchingReference;
    };

    match target {
        // Existence trumps the hover flag: a dangling link is disabled on
        // whichever edge first observes it.
        None => {
            mark_broken(doc, reference);
            HoverOutcome::MarkedBroken
        }
        Some(_) if hover && visible => {
            session.set_highlight(doc, Some(target_id));
            HoverOutcome::Highlighted {
                post_id: target_id.clone(),
            }
        }
        Some(node) if hover => {
            let clone_id = insert_preview_clone(doc, reference, node, target_id);
            HoverOutcome::CloneInserted { clone_id }
        }
        Some(_) => {
            session.set_highlight(doc, None);
            let removed_clone = if visible {
                None
            } else {
                remove_preview_clone(doc, target_id)
            };
            HoverOutcome::Unwound { removed_clone }
        }
    }
}

/// Permanently disables a dangling quote link: the hover affordances go away
/// (so the page stops delivering events for it) and the text is struck
/// through.
fn mark_broken<D: Document + ?Sized>(doc: &mut D, reference: NodeHandle) {
    doc.remove_attribute(reference, HOVER_START_ATTR);
    doc.remove_attribute(reference, HOVER_END_ATTR);
    doc.set_attribute(reference, STYLE_ATTR, BROKEN_STYLE);
}

/// Deep-copies the target container, re-identifies the copy with the `prev`
/// suffix so it never collides with the original, tags it `popup`, and
/// attaches it right after the hovered link.
fn insert_preview_clone<D: Document + ?Sized>(
    doc: &mut D,
    reference: NodeHandle,
    target: NodeHandle,
    target_id: &PostId,
) -> CloneId {
    let clone_id = target_id.clone_id();
    let copy = doc.clone_subtree(target);
    doc.set_attribute(copy, ID_ATTR, clone_id.as_str());

    let mut classes = ClassList::parse(doc.attribute(copy, CLASS_ATTR).as_deref().unwrap_or(""));
    classes.add(POPUP_CLASS);
    doc.set_attribute(copy, CLASS_ATTR, &classes.to_attr());

    doc.insert_after(reference, copy);
    clone_id
}

/// Removes the preview clone for `target_id` if one is attached. A missing
/// clone is an ordinary outcome, not an error.
fn remove_preview_clone<D: Document + ?Sized>(doc: &mut D, target_id: &PostId) -> Option<CloneId> {
    let clone_id = target_id.clone_id();
    let node = doc.element_by_id(clone_id.as_str())?;
    doc.remove(node);
    Some(clone_id)
}
