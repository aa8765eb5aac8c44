// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linkquote — quote-link reference previews for threaded discussion boards.
//!
//! Hovering a quote link either highlights the referenced post in place (if it
//! is fully visible) or materializes a preview clone next to the link (if it
//! is off-screen); links to deleted posts are struck through and disabled.
//! The engine runs against the narrow document interface in [`dom`], so it
//! behaves identically over a host page and the bundled in-memory document.

pub mod compose;
pub mod dom;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
