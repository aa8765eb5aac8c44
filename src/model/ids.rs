// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use super::markers::CLONE_ID_SUFFIX;

/// A stable identifier used across the model and the document boundary.
///
/// This is intentionally std-only and does not enforce a numeric format; it
/// only enforces that the id can appear verbatim inside an `#<id>` href
/// fragment and a space-joined class list (non-empty, no `#`, no whitespace).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        validate_id(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Internal constructor for values already known to satisfy the id
    /// rules, e.g. a run of ASCII digits.
    pub(crate) fn new_unchecked(value: String) -> Self {
        debug_assert!(validate_id(&value).is_ok(), "unchecked id must be valid");
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl<T> FromStr for Id<T> {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_owned())
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    Empty,
    ContainsHash,
    ContainsWhitespace,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("id must not be empty"),
            Self::ContainsHash => f.write_str("id must not contain '#'"),
            Self::ContainsWhitespace => f.write_str("id must not contain whitespace"),
        }
    }
}

impl std::error::Error for IdError {}

fn validate_id(value: &str) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty);
    }
    if value.contains('#') {
        return Err(IdError::ContainsHash);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(IdError::ContainsWhitespace);
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PostIdTag {}
pub type PostId = Id<PostIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CloneIdTag {}
pub type CloneId = Id<CloneIdTag>;

impl PostId {
    /// Builds an id from a numeric post number (`42` -> `"42"`).
    pub fn from_number(number: u64) -> Self {
        let mut buf = itoa::Buffer::new();
        Self::new_unchecked(buf.format(number).to_owned())
    }

    /// The href fragment a quote link to this post carries (`"#42"`).
    pub fn href_target(&self) -> String {
        format!("#{}", self.value)
    }

    /// Derives the preview clone identifier by appending the literal `prev`
    /// suffix. External selectors key on this exact form, so the suffix is
    /// preserved bit-for-bit.
    pub fn clone_id(&self) -> CloneId {
        CloneId::new_unchecked(format!("{}{CLONE_ID_SUFFIX}", self.value))
    }
}
