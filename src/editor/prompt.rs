// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::accept::accept_candidate;
use super::filter::Candidate;
use super::tokenizer::{clamp_to_char_boundary, locate_open_token, OpenToken};

/// The live prompt buffer for one field.
///
/// There is no stored "reference mode" flag: whether a reference is open is
/// re-derived from text and cursor on every read, so the state can never
/// drift from the content. The one thing content cannot express is escape,
/// which is why a dismissed token's start offset is remembered until the
/// derived token moves or closes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptEditor {
    text: String,
    cursor: usize,
    dismissed_at: Option<usize>,
}

impl PromptEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The open reference at the cursor, unless it is the one the user
    /// dismissed.
    pub fn open_token(&self) -> Option<OpenToken<'_>> {
        let token = locate_open_token(&self.text, self.cursor)?;
        if self.dismissed_at == Some(token.start) {
            return None;
        }
        Some(token)
    }

    /// Replaces the whole buffer and parks the cursor at its end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
        self.dismissed_at = None;
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = clamp_to_char_boundary(&self.text, cursor);
        self.reconcile_dismissal();
    }

    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.reconcile_dismissal();
    }

    /// Deletes the char before the cursor, if any.
    pub fn delete_backward(&mut self) {
        let Some(ch) = self.text[..self.cursor].chars().next_back() else {
            return;
        };
        let at = self.cursor - ch.len_utf8();
        self.text.remove(at);
        self.cursor = at;
        self.reconcile_dismissal();
    }

    /// Deletes `start..end` (clamped to char boundaries), pulling the cursor
    /// along when it sat inside or behind the range.
    pub fn delete_range(&mut self, start: usize, end: usize) {
        let start = clamp_to_char_boundary(&self.text, start);
        let end = clamp_to_char_boundary(&self.text, end).max(start);

        self.text.replace_range(start..end, "");
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
        self.reconcile_dismissal();
    }

    /// Accepts `candidate` for the open token, rewriting the buffer to the
    /// canonical form plus a trailing space. Returns `false` when nothing is
    /// open, which is a no-op.
    pub fn accept(&mut self, candidate: &Candidate) -> bool {
        let Some(token) = self.open_token() else {
            return false;
        };
        let acceptance = accept_candidate(&self.text, &token, candidate);
        self.text = acceptance.new_text;
        self.cursor = acceptance.new_cursor;
        self.dismissed_at = None;
        true
    }

    /// Escape: closes the suggestion surface for the current token. The
    /// token text stays; it simply stops being treated as open until it
    /// changes or closes.
    pub fn dismiss(&mut self) {
        if let Some(token) = locate_open_token(&self.text, self.cursor) {
            self.dismissed_at = Some(token.start);
        }
    }

    /// Focus loss closes the surface the same way escape does.
    pub fn blur(&mut self) {
        self.dismiss();
    }

    fn reconcile_dismissal(&mut self) {
        let Some(dismissed) = self.dismissed_at else {
            return;
        };
        let still_there = locate_open_token(&self.text, self.cursor)
            .is_some_and(|token| token.start == dismissed);
        if !still_there {
            self.dismissed_at = None;
        }
    }
}
