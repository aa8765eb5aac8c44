// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Compose-box text: inserting `>>id` references at the cursor and scanning
//! a comment for the references it already contains.
//!
//! Pure string work, no state machine. [`insert_reference`] takes the
//! reference text verbatim; validating it is the caller's business.
//! [`scan_quotes`] applies the board's recognition rules instead, because its
//! spans become rendered quote links.

use memchr::memmem;

use crate::model::PostId;

/// Longest post number `scan_quotes` recognizes, in digits.
const QUOTE_DIGITS_MAX: usize = 20;

/// Result of splicing a reference into an edit buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// The buffer with the reference spliced in.
    pub buffer: String,
    /// Cursor position immediately after the inserted text, as a byte offset.
    pub cursor: usize,
}

/// The text a quote of `reference` inserts: `">>" + reference + "\n"`.
pub fn reference_text(reference: &str) -> String {
    format!(">>{reference}\n")
}

/// Splices `">>" + reference + "\n"` into `buffer` at `cursor` (a byte
/// offset) and places the cursor right after the inserted text.
///
/// A cursor past the end of the buffer clamps to the end; one inside a
/// multi-byte character rounds down to the nearest character boundary.
pub fn insert_reference(buffer: &str, cursor: usize, reference: &str) -> Insertion {
    let mut at = cursor.min(buffer.len());
    while !buffer.is_char_boundary(at) {
        at -= 1;
    }

    let insert = reference_text(reference);
    let mut spliced = String::with_capacity(buffer.len() + insert.len());
    spliced.push_str(&buffer[..at]);
    spliced.push_str(&insert);
    spliced.push_str(&buffer[at..]);

    Insertion {
        buffer: spliced,
        cursor: at + insert.len(),
    }
}

/// Numeric convenience over [`insert_reference`]: quoting post number `42`
/// inserts `">>42\n"`.
pub fn insert_post_reference(buffer: &str, cursor: usize, post_number: u64) -> Insertion {
    insert_reference(buffer, cursor, PostId::from_number(post_number).as_str())
}

/// A `>>id` reference found in comment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSpan {
    /// Byte offset of the first `>`.
    pub start: usize,
    /// Byte offset just past the last digit.
    pub end: usize,
    pub target: PostId,
}

/// Finds the `>>id` references in a comment, left to right.
///
/// A reference is exactly two `>` followed by a post number: first digit
/// `1`–`9` (no leading zero), at most [`QUOTE_DIGITS_MAX`] digits. A longer
/// run of `>` swallows the pair, so `>>>42` is a quoted line and not a
/// reference, matching how the board renders comments.
pub fn scan_quotes(text: &str) -> Vec<QuoteSpan> {
    let bytes = text.as_bytes();
    let finder = memmem::Finder::new(b">>");
    let mut spans = Vec::new();
    let mut from = 0;

    while let Some(offset) = finder.find(&bytes[from..]) {
        let start = from + offset;
        let digits_at = start + 2;
        if bytes.get(digits_at).is_some_and(|&b| (b'1'..=b'9').contains(&b)) {
            let mut end = digits_at;
            while end < bytes.len() && bytes[end].is_ascii_digit() && end - digits_at < QUOTE_DIGITS_MAX
            {
                end += 1;
            }
            let target = PostId::new_unchecked(text[digits_at..end].to_owned());
            spans.push(QuoteSpan { start, end, target });
            from = end;
        } else {
            // Past the whole '>' run; a run longer than the pair never
            // yields a reference, however many '>' it holds.
            let mut past = digits_at;
            while past < bytes.len() && bytes[past] == b'>' {
                past += 1;
            }
            from = past;
        }
    }

    spans
}
