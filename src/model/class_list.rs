// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Class attribute handling.
//!
//! Class attributes are space-joined token strings (`"pContainer highlight"`).
//! Mutation goes through an explicit parsed snapshot so a sweep over many
//! containers never iterates a string it is rewriting; the read-only
//! [`attr_contains_token`] scan stays on the raw attribute and does not
//! allocate.

use std::fmt;

use memchr::memmem;
use smallvec::SmallVec;
use smol_str::SmolStr;

/// An ordered snapshot of the tokens in a class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: SmallVec<[SmolStr; 4]>,
}

impl ClassList {
    /// Parses a raw class attribute. Runs of whitespace collapse; order is
    /// preserved.
    pub fn parse(attr: &str) -> Self {
        Self {
            tokens: attr.split_whitespace().map(SmolStr::new).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.as_str() == token)
    }

    /// Appends `token` unless it is already present.
    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(SmolStr::new(token));
        }
    }

    /// Strips every occurrence of `token`. A list that never held the token
    /// is left unchanged.
    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t.as_str() != token);
    }

    /// Serializes back to the space-joined attribute form.
    pub fn to_attr(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Whole-token membership test over a raw class attribute.
///
/// Substring hits that are not delimited by whitespace or the attribute ends
/// do not count (`"highlighted"` does not contain the token `"highlight"`).
pub fn attr_contains_token(attr: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let haystack = attr.as_bytes();
    let finder = memmem::Finder::new(token.as_bytes());
    let mut from = 0;

    while let Some(offset) = finder.find(&haystack[from..]) {
        let start = from + offset;
        let end = start + token.len();
        let left_bounded = start == 0 || haystack[start - 1].is_ascii_whitespace();
        let right_bounded = end == haystack.len() || haystack[end].is_ascii_whitespace();
        if left_bounded && right_bounded {
            return true;
        }
        from = start + 1;
    }

    false
}
