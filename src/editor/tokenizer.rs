// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use memchr::memrchr;

/// An in-progress reference at the cursor: `start` is the byte offset of the
/// `@`, `end` echoes the clamped cursor, `query` borrows the text between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenToken<'a> {
    pub start: usize,
    pub end: usize,
    pub query: &'a str,
}

/// Finds the open reference the cursor sits inside, if any.
///
/// Offsets are byte offsets; an out-of-range or mid-char `cursor` is clamped
/// before scanning. The nearest `@` left of the cursor opens a token only if
/// no whitespace (newlines included) sits between it and the cursor and the
/// character before the `@` is start-of-text or whitespace, which keeps
/// `user@example.com` from opening mid-word. `None` is the steady state of
/// prose without an open reference, not an error.
pub fn locate_open_token(text: &str, cursor: usize) -> Option<OpenToken<'_>> {
    let cursor = clamp_to_char_boundary(text, cursor);
    let start = memrchr(b'@', text[..cursor].as_bytes())?;

    let query = &text[start + 1..cursor];
    if query.chars().any(char::is_whitespace) {
        return None;
    }
    if !text[..start]
        .chars()
        .next_back()
        .map_or(true, char::is_whitespace)
    {
        return None;
    }

    Some(OpenToken {
        start,
        end: cursor,
        query,
    })
}

pub(crate) fn clamp_to_char_boundary(text: &str, cursor: usize) -> usize {
    let mut cursor = cursor.min(text.len());
    while !text.is_char_boundary(cursor) {
        cursor -= 1;
    }
    cursor
}
