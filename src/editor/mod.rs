// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reference-aware prompt editing.
//!
//! The pieces are pure and composable: [`tokenizer`] derives the open
//! reference from text and cursor, [`filter`] narrows the visible set to
//! suggestion rows, [`accept`] rewrites the buffer to the canonical token
//! form, and [`prompt`] owns a live buffer that re-derives its state after
//! every mutation. [`suggestions`] bundles the per-keystroke path hosts
//! call, with [`caret`] supplying the surface anchor.

pub mod accept;
pub mod caret;
pub mod filter;
pub mod prompt;
pub mod suggestions;
pub mod tokenizer;

pub use accept::{accept_candidate, Acceptance};
pub use caret::{anchor_for_offset, CaretAnchor};
pub use filter::{filter_candidates, Candidate};
pub use prompt::PromptEditor;
pub use suggestions::{draft_suggestions, suggestions, Suggestions};
pub use tokenizer::{locate_open_token, OpenToken};
