// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Page snapshots: a JSON description of a rendered page (viewport, post
//! rects, quote links) that can be persisted and rebuilt into an in-memory
//! document.

pub mod snapshot;

pub use snapshot::{
    build_document, load_snapshot, parse_snapshot, save_snapshot, snapshot_to_json, PageSnapshot,
    PostSnapshot, RectSnapshot, ReferenceSnapshot, SnapshotError, ViewportSnapshot,
};
