// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::filter::Candidate;
use super::tokenizer::OpenToken;

/// The rewritten buffer after a suggestion is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acceptance {
    pub new_text: String,
    pub new_cursor: usize,
}

/// Replaces the open token with `candidate`'s canonical form plus one
/// trailing space and parks the cursor after the space. Pure text surgery
/// with no catalogue access: accepting a row whose entity was removed
/// mid-flight still inserts the row's last-known form, and validity is a
/// render-time concern.
pub fn accept_candidate(text: &str, token: &OpenToken<'_>, candidate: &Candidate) -> Acceptance {
    let inserted = candidate.token().to_string();

    let mut new_text =
        String::with_capacity(text.len() - (token.end - token.start) + inserted.len() + 1);
    new_text.push_str(&text[..token.start]);
    new_text.push_str(&inserted);
    new_text.push(' ');
    new_text.push_str(&text[token.end..]);

    Acceptance {
        new_cursor: token.start + inserted.len() + 1,
        new_text,
    }
}
