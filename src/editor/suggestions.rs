// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::caret::{anchor_for_offset, CaretAnchor};
use super::filter::{filter_candidates, Candidate};
use super::prompt::PromptEditor;
use super::tokenizer::OpenToken;
use crate::model::{Catalog, EntityId, EntityKind};
use crate::query::visibility::{visible_from, visible_to_draft, VisibilityError};

/// Everything a host needs to draw the suggestion surface after one
/// keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions<'a> {
    pub token: OpenToken<'a>,
    pub anchor: CaretAnchor,
    pub candidates: Vec<Candidate>,
}

/// The keystroke path for a committed entity's prompt: derive the open
/// token, resolve what `author_id` may cite, and filter by the typed query.
/// `Ok(None)` means no reference is open and the surface stays hidden.
pub fn suggestions<'a>(
    editor: &'a PromptEditor,
    catalog: &Catalog,
    author_id: &EntityId,
) -> Result<Option<Suggestions<'a>>, VisibilityError> {
    let Some(token) = editor.open_token() else {
        return Ok(None);
    };
    let visible = visible_from(catalog, author_id)?;
    Ok(Some(assemble(editor, token, filter_candidates(&visible, token.query))))
}

/// Same path for an entity still being created: it has no committed
/// position, so it sees everything currently in its scope.
pub fn draft_suggestions<'a>(
    editor: &'a PromptEditor,
    catalog: &Catalog,
    kind: EntityKind,
    container_id: Option<&EntityId>,
) -> Result<Option<Suggestions<'a>>, VisibilityError> {
    let Some(token) = editor.open_token() else {
        return Ok(None);
    };
    let visible = visible_to_draft(catalog, kind, container_id)?;
    Ok(Some(assemble(editor, token, filter_candidates(&visible, token.query))))
}

fn assemble<'a>(
    editor: &'a PromptEditor,
    token: OpenToken<'a>,
    candidates: Vec<Candidate>,
) -> Suggestions<'a> {
    Suggestions {
        anchor: anchor_for_offset(editor.text(), token.start),
        token,
        candidates,
    }
}
