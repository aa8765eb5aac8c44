// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a document: visibility and reference resolution.

pub mod geometry;
pub mod resolver;

pub use geometry::is_fully_visible;
pub use resolver::{find_references, first_reference, References};
