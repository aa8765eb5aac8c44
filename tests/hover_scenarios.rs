// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end hover scenarios over a snapshot-built page: the three outcomes
//! (highlight, preview clone, broken link) and their teardown, driven through
//! the public API only.

use std::path::{Path, PathBuf};

use linkquote::compose::insert_reference;
use linkquote::dom::{Document, MemoryDocument};
use linkquote::model::class_list::attr_contains_token;
use linkquote::model::markers::{CLASS_ATTR, HOVER_START_ATTR, STYLE_ATTR};
use linkquote::model::PostId;
use linkquote::ops::{hover, HoverOutcome, PreviewSession};
use linkquote::store::{build_document, load_snapshot};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("hover_scenarios")
}

fn thread_page() -> MemoryDocument {
    let path = fixtures_dir().join("thread.json");
    let snapshot = load_snapshot(&path).unwrap_or_else(|err| panic!("load {path:?}: {err}"));
    build_document(&snapshot).unwrap_or_else(|err| panic!("build document: {err}"))
}

fn post_id(id: &str) -> PostId {
    PostId::new(id).expect("post id")
}

fn class_attr(doc: &MemoryDocument, id: &str) -> String {
    let node = doc.element_by_id(id).expect("element");
    doc.attribute(node, CLASS_ATTR).unwrap_or_default()
}

#[test]
fn visible_target_is_highlighted_in_place_then_cleared() {
    let mut doc = thread_page();
    let mut session = PreviewSession::new();

    let outcome = hover(&mut doc, &mut session, &post_id("p1"), &post_id("p7"), true);
    assert_eq!(
        outcome,
        HoverOutcome::Highlighted {
            post_id: post_id("p7")
        }
    );
    assert!(attr_contains_token(&class_attr(&doc, "p7"), "highlight"));
    assert!(doc.element_by_id("p7prev").is_none());

    let outcome = hover(&mut doc, &mut session, &post_id("p1"), &post_id("p7"), false);
    assert_eq!(
        outcome,
        HoverOutcome::Unwound {
            removed_clone: None
        }
    );
    assert!(!attr_contains_token(&class_attr(&doc, "p7"), "highlight"));
}

#[test]
fn offscreen_target_is_cloned_then_removed() {
    let mut doc = thread_page();
    let mut session = PreviewSession::new();

    let outcome = hover(&mut doc, &mut session, &post_id("p1"), &post_id("p3"), true);
    assert_eq!(
        outcome,
        HoverOutcome::CloneInserted {
            clone_id: post_id("p3").clone_id()
        }
    );
    let clone = doc.element_by_id("p3prev").expect("preview clone");
    let classes = doc.attribute(clone, CLASS_ATTR).expect("clone classes");
    assert!(attr_contains_token(&classes, "popup"));
    assert!(attr_contains_token(&classes, "pContainer"));
    // Deep copy: p3's own quote link to p1 came along.
    assert_eq!(doc.descendants_by_class(clone, "linkquote").len(), 1);

    let outcome = hover(&mut doc, &mut session, &post_id("p1"), &post_id("p3"), false);
    assert_eq!(
        outcome,
        HoverOutcome::Unwound {
            removed_clone: Some(post_id("p3").clone_id())
        }
    );
    assert!(doc.element_by_id("p3prev").is_none());
}

#[test]
fn link_to_deleted_post_is_struck_through_and_disabled() {
    let mut doc = thread_page();
    let mut session = PreviewSession::new();

    let outcome = hover(&mut doc, &mut session, &post_id("p1"), &post_id("p9"), true);
    assert_eq!(outcome, HoverOutcome::MarkedBroken);

    let container = doc.element_by_id("p1").expect("container");
    let links = doc.descendants_by_class(container, "linkquote");
    let broken = links
        .iter()
        .find(|&&link| doc.attribute(link, STYLE_ATTR).is_some())
        .copied()
        .expect("broken link");
    assert_eq!(
        doc.attribute(broken, STYLE_ATTR).as_deref(),
        Some("text-decoration:line-through;")
    );
    assert_eq!(doc.attribute(broken, HOVER_START_ATTR), None);

    // The other links in the same container keep their affordances.
    let live = links
        .iter()
        .filter(|&&link| doc.attribute(link, HOVER_START_ATTR).is_some())
        .count();
    assert_eq!(live, 2);

    // Repeating the edges leaves the page untouched.
    let attached = doc.attached_len();
    hover(&mut doc, &mut session, &post_id("p1"), &post_id("p9"), false);
    hover(&mut doc, &mut session, &post_id("p1"), &post_id("p9"), true);
    assert_eq!(doc.attached_len(), attached);
}

#[test]
fn highlight_moves_between_targets_one_at_a_time() {
    let mut doc = thread_page();
    let mut session = PreviewSession::new();

    hover(&mut doc, &mut session, &post_id("p1"), &post_id("p7"), true);
    // p3 quotes p1, which is visible; hovering it moves the highlight.
    hover(&mut doc, &mut session, &post_id("p3"), &post_id("p1"), true);

    assert!(!attr_contains_token(&class_attr(&doc, "p7"), "highlight"));
    assert!(attr_contains_token(&class_attr(&doc, "p1"), "highlight"));
    assert_eq!(session.current_highlight(), Some(&post_id("p1")));
}

#[test]
fn compose_splice_matches_the_board_format() {
    let result = insert_reference("hello ", 6, "12");
    assert_eq!(result.buffer, "hello >>12\n");
    assert_eq!(result.cursor, 11);
}
