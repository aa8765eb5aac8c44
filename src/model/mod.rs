// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Posts are identified by stable string ids; quote links carry the target id
//! in an `#<id>` href fragment. Highlight and preview state live in class
//! tokens on the post containers, so the marker vocabulary in [`markers`] is
//! part of the external contract.

pub mod class_list;
pub mod ids;
pub mod markers;

pub use class_list::ClassList;
pub use ids::{CloneId, Id, IdError, PostId};
