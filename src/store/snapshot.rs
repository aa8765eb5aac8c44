// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON page snapshots.
//!
//! A snapshot is the engine-relevant slice of a rendered page: viewport
//! dimensions, one entry per post with its bounding rect, and the quote links
//! each post contains. [`build_document`] materializes it as a
//! [`MemoryDocument`] with the production marker vocabulary, including the
//! `popup('<self>','<target>',…)` hover affordances the board emits.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dom::{Document, MemoryDocument, NodeHandle, Rect, Viewport};
use crate::model::markers::{
    CLASS_ATTR, CONTAINER_CLASS, HOVER_END_ATTR, HOVER_START_ATTR, HREF_ATTR, ID_ATTR,
    REFERENCE_CLASS,
};
use crate::model::{IdError, PostId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub viewport: ViewportSnapshot,
    #[serde(default)]
    pub posts: Vec<PostSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RectSnapshot {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSnapshot {
    pub id: String,
    pub rect: RectSnapshot,
    #[serde(default)]
    pub references: Vec<ReferenceSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSnapshot {
    pub target: String,
}

impl From<RectSnapshot> for Rect {
    fn from(rect: RectSnapshot) -> Self {
        Self {
            top: rect.top,
            left: rect.left,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

impl From<ViewportSnapshot> for Viewport {
    fn from(viewport: ViewportSnapshot) -> Self {
        Self {
            width: viewport.width,
            height: viewport.height,
        }
    }
}

#[derive(Debug)]
pub enum SnapshotError {
    Io(io::Error),
    Json(serde_json::Error),
    InvalidPostId { id: String, reason: IdError },
    InvalidTarget { post_id: String, target: String, reason: IdError },
    DuplicatePostId { id: String },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot io error: {err}"),
            Self::Json(err) => write!(f, "snapshot json error: {err}"),
            Self::InvalidPostId { id, reason } => {
                write!(f, "invalid post id '{id}': {reason}")
            }
            Self::InvalidTarget {
                post_id,
                target,
                reason,
            } => {
                write!(f, "invalid reference target '{target}' in post '{post_id}': {reason}")
            }
            Self::DuplicatePostId { id } => write!(f, "duplicate post id '{id}'"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidPostId { reason, .. } | Self::InvalidTarget { reason, .. } => Some(reason),
            Self::DuplicatePostId { .. } => None,
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

pub fn parse_snapshot(json: &str) -> Result<PageSnapshot, SnapshotError> {
    Ok(serde_json::from_str(json)?)
}

pub fn snapshot_to_json(snapshot: &PageSnapshot) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

pub fn load_snapshot(path: &Path) -> Result<PageSnapshot, SnapshotError> {
    parse_snapshot(&fs::read_to_string(path)?)
}

pub fn save_snapshot(path: &Path, snapshot: &PageSnapshot) -> Result<(), SnapshotError> {
    fs::write(path, snapshot_to_json(snapshot)?)?;
    Ok(())
}

/// Materializes a snapshot as an in-memory document.
///
/// Every post becomes a `pContainer` element carrying its id and rect; every
/// reference becomes a `linkquote` anchor with the `#<target>` href and the
/// `popup(...)` hover affordances. Ids are validated and must be unique;
/// targets are validated but may dangle (a dangling link is exactly what the
/// broken-reference path consumes).
pub fn build_document(snapshot: &PageSnapshot) -> Result<MemoryDocument, SnapshotError> {
    let mut doc = MemoryDocument::new(snapshot.viewport.into());
    let root = doc.root();

    let mut seen: Vec<&str> = Vec::with_capacity(snapshot.posts.len());
    for post in &snapshot.posts {
        let post_id = PostId::new(post.id.clone()).map_err(|reason| {
            SnapshotError::InvalidPostId {
                id: post.id.clone(),
                reason,
            }
        })?;
        if seen.contains(&post.id.as_str()) {
            return Err(SnapshotError::DuplicatePostId {
                id: post.id.clone(),
            });
        }
        seen.push(&post.id);

        let container = doc.append_element(root);
        doc.set_attribute(container, ID_ATTR, post_id.as_str());
        doc.set_attribute(container, CLASS_ATTR, CONTAINER_CLASS);
        doc.set_rect(container, post.rect.into());

        for reference in &post.references {
            let target = PostId::new(reference.target.clone()).map_err(|reason| {
                SnapshotError::InvalidTarget {
                    post_id: post.id.clone(),
                    target: reference.target.clone(),
                    reason,
                }
            })?;
            append_reference(&mut doc, container, &post_id, &target);
        }
    }

    Ok(doc)
}

fn append_reference(
    doc: &mut MemoryDocument,
    container: NodeHandle,
    container_id: &PostId,
    target: &PostId,
) {
    let link = doc.append_element(container);
    doc.set_attribute(link, CLASS_ATTR, REFERENCE_CLASS);
    doc.set_attribute(link, HREF_ATTR, &target.href_target());
    doc.set_attribute(
        link,
        HOVER_START_ATTR,
        &format!("popup('{container_id}','{target}',1)"),
    );
    doc.set_attribute(
        link,
        HOVER_END_ATTR,
        &format!("popup('{container_id}','{target}',0)"),
    );
}
