// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::tokenizer::clamp_to_char_boundary;

/// Approximate placement for a suggestion surface, in monospace character
/// cells relative to the text origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaretAnchor {
    pub x: u32,
    pub y: u32,
}

/// Maps a byte offset to a cell anchor one line below the caret's line, the
/// usual spot for a dropdown. Columns count chars, so tabs and double-width
/// glyphs land a cell or two off; close enough for window placement.
pub fn anchor_for_offset(text: &str, offset: usize) -> CaretAnchor {
    let offset = clamp_to_char_boundary(text, offset);
    let before = &text[..offset];
    let line = before.matches('\n').count() as u32;
    let column = before
        .rsplit_once('\n')
        .map_or(before, |(_, tail)| tail)
        .chars()
        .count() as u32;

    CaretAnchor {
        x: column,
        y: line.saturating_add(1),
    }
}
