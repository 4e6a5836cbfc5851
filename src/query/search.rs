// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use regex::RegexBuilder;

use crate::model::{Catalog, Entity, EntityId, EntityKind, RefCategory, RefToken};
use crate::resolve::scan_prompt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSearchMode {
    Substring,
    Regex,
}

/// Entities whose prompt matches `needle`, in id order. Regex mode surfaces
/// pattern errors to the caller instead of treating them as "no match".
pub fn prompt_search<'a>(
    catalog: &'a Catalog,
    needle: &str,
    mode: PromptSearchMode,
    case_insensitive: bool,
) -> Result<Vec<&'a Entity>, regex::Error> {
    match mode {
        PromptSearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Ok(catalog
                    .entities()
                    .values()
                    .filter(|entity| entity.prompt().to_lowercase().contains(&needle_lower))
                    .collect())
            } else {
                Ok(catalog
                    .entities()
                    .values()
                    .filter(|entity| entity.prompt().contains(needle))
                    .collect())
            }
        }
        PromptSearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()?;
            Ok(catalog
                .entities()
                .values()
                .filter(|entity| regex.is_match(entity.prompt()))
                .collect())
        }
    }
}

/// One prompt location citing a target; `start..end` is the token's byte
/// span inside the author's prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub author_id: EntityId,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CitationsError {
    UnknownTarget { entity_id: EntityId },
}

impl fmt::Display for CitationsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTarget { entity_id } => {
                write!(f, "citation target not found (id={entity_id})")
            }
        }
    }
}

impl std::error::Error for CitationsError {}

/// Every prompt location citing `target_id`, in (author id, span) order.
/// Structural tokens cite by category + id; mentions cite a participant by
/// display name + email. Hosts call this before a removal to warn about
/// tokens that would go dangling.
pub fn citations_of(
    catalog: &Catalog,
    target_id: &EntityId,
) -> Result<Vec<Citation>, CitationsError> {
    let Some(target) = catalog.entity(target_id) else {
        return Err(CitationsError::UnknownTarget {
            entity_id: target_id.clone(),
        });
    };
    let category = RefCategory::for_kind(target.kind());

    let mut citations = Vec::new();
    for (author_id, author) in catalog.entities() {
        for scanned in scan_prompt(author.prompt()) {
            let cites = match &scanned.token {
                RefToken::Structural {
                    category: claimed,
                    target_id: cited,
                } => Some(*claimed) == category && cited == target_id,
                RefToken::Mention { name, email } => {
                    target.kind() == EntityKind::Participant
                        && name == target.name()
                        && target.email().is_some_and(|known| known == email)
                }
            };
            if cites {
                citations.push(Citation {
                    author_id: author_id.clone(),
                    start: scanned.start,
                    end: scanned.end,
                });
            }
        }
    }

    Ok(citations)
}
