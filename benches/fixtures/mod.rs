// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use linkquote::dom::{MemoryDocument, NodeHandle, Rect, Viewport};
use linkquote::model::markers::{CLASS_ATTR, HREF_ATTR, ID_ATTR};
use linkquote::model::PostId;

pub const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 960.0,
};

pub fn post_id(number: u64) -> PostId {
    PostId::from_number(number)
}

/// A thread page with `posts` containers. Every third post sits above the
/// viewport; each post links to the `links_per_post` posts before it
/// (wrapping), so every container resolves against a realistic mix of
/// matching and non-matching quote links.
pub fn thread_page(posts: u64, links_per_post: u64) -> MemoryDocument {
    assert!(posts >= 2, "thread fixture needs at least 2 posts");

    let mut doc = MemoryDocument::new(VIEWPORT);
    let root = doc.root();

    for number in 1..=posts {
        let container = doc.append_element(root);
        doc.set_attribute(container, ID_ATTR, post_id(number).as_str());
        doc.set_attribute(container, CLASS_ATTR, "pContainer");
        doc.set_rect(container, rect_for(number));

        for offset in 1..=links_per_post.min(posts - 1) {
            let target = (number + posts - 1 - offset) % posts + 1;
            append_link(&mut doc, container, &post_id(target));
        }
    }

    doc
}

fn rect_for(number: u64) -> Rect {
    if number % 3 == 0 {
        Rect {
            top: -400.0,
            left: 10.0,
            right: 600.0,
            bottom: -280.0,
        }
    } else {
        let top = 10.0 + (number % 7) as f64 * 120.0;
        Rect {
            top,
            left: 10.0,
            right: 600.0,
            bottom: top + 100.0,
        }
    }
}

pub fn append_link(doc: &mut MemoryDocument, container: NodeHandle, target: &PostId) -> NodeHandle {
    let link = doc.append_element(container);
    doc.set_attribute(link, CLASS_ATTR, "linkquote");
    doc.set_attribute(link, HREF_ATTR, &target.href_target());
    link
}

/// Post numbers picked so `thread_page` gives them the wanted geometry.
pub fn visible_post() -> PostId {
    post_id(1)
}

pub fn offscreen_post() -> PostId {
    post_id(3)
}
