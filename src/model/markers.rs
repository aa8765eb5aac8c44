// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The marker vocabulary shared with external styling and selectors.
//!
//! These literals are part of the contract: stylesheets select on the class
//! tokens, and the `prev` id suffix keys the preview clone. None of them may
//! drift.

/// Class marking a post container.
pub const CONTAINER_CLASS: &str = "pContainer";

/// Class marking a quote-link anchor.
pub const REFERENCE_CLASS: &str = "linkquote";

/// Class token set on the currently highlighted post container.
pub const HIGHLIGHT_CLASS: &str = "highlight";

/// Class token added to a preview clone.
pub const POPUP_CLASS: &str = "popup";

/// Suffix appended to a post id to form its preview clone id.
pub const CLONE_ID_SUFFIX: &str = "prev";

/// Inline style applied to a quote link whose target post no longer exists.
pub const BROKEN_STYLE: &str = "text-decoration:line-through;";

/// Attribute carrying a quote link's target (`#<id>`).
pub const HREF_ATTR: &str = "href";

/// Attribute carrying inline styles.
pub const STYLE_ATTR: &str = "style";

pub const ID_ATTR: &str = "id";
pub const CLASS_ATTR: &str = "class";

/// Hover affordance attributes removed when a link is marked broken. With
/// them gone the host page stops delivering hover events for the link.
pub const HOVER_START_ATTR: &str = "onmouseover";
pub const HOVER_END_ATTR: &str = "onmouseout";
