// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::dom::{Document, NodeHandle};

/// True iff the element's bounding box lies strictly inside the viewport on
/// all four edges.
///
/// An element flush with a viewport edge counts as not fully visible, matching
/// the strict comparisons callers rely on to pick the preview-clone branch.
/// The element must be attached; callers resolve existence first.
pub fn is_fully_visible<D: Document + ?Sized>(doc: &D, node: NodeHandle) -> bool {
    let rect = doc.bounding_rect(node);
    let viewport = doc.viewport();
    rect.top > 0.0 && rect.left > 0.0 && rect.right < viewport.width && rect.bottom < viewport.height
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::is_fully_visible;
    use crate::dom::{MemoryDocument, Rect, Viewport};

    fn doc_with_rect(rect: Rect) -> (MemoryDocument, crate::dom::NodeHandle) {
        let mut doc = MemoryDocument::new(Viewport::new(800.0, 600.0));
        let root = doc.root();
        let node = doc.append_element(root);
        doc.set_rect(node, rect);
        (doc, node)
    }

    #[test]
    fn strictly_inside_is_visible() {
        let (doc, node) = doc_with_rect(Rect::new(10.0, 10.0, 790.0, 590.0));
        assert!(is_fully_visible(&doc, node));
    }

    #[rstest]
    #[case::top_at_edge(Rect::new(0.0, 10.0, 790.0, 590.0))]
    #[case::left_at_edge(Rect::new(10.0, 0.0, 790.0, 590.0))]
    #[case::right_at_edge(Rect::new(10.0, 10.0, 800.0, 590.0))]
    #[case::bottom_at_edge(Rect::new(10.0, 10.0, 790.0, 600.0))]
    #[case::above_viewport(Rect::new(-120.0, 10.0, 790.0, -20.0))]
    #[case::below_viewport(Rect::new(700.0, 10.0, 790.0, 900.0))]
    fn any_violated_bound_is_not_visible(#[case] rect: Rect) {
        let (doc, node) = doc_with_rect(rect);
        assert!(!is_fully_visible(&doc, node));
    }
}
