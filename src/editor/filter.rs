// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smol_str::SmolStr;

use crate::model::{Entity, EntityId, EntityKind, RefCategory, RefToken};

/// One suggestion row: the entity plus the category it would be cited
/// under. Name and email clone cheaply into UI rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub id: EntityId,
    pub kind: EntityKind,
    pub category: RefCategory,
    pub name: SmolStr,
    pub email: Option<SmolStr>,
}

impl Candidate {
    /// `None` for kinds that cannot be referenced (workflow steps).
    pub fn for_entity(entity: &Entity) -> Option<Self> {
        let category = RefCategory::for_kind(entity.kind())?;
        Some(Self {
            id: entity.id().clone(),
            kind: entity.kind(),
            category,
            name: SmolStr::new(entity.name()),
            email: entity.email().map(SmolStr::new),
        })
    }

    /// The canonical token this row inserts on acceptance. Snapshots the
    /// row's last-known name and email, so it stays printable even if the
    /// entity has since changed or gone away.
    pub fn token(&self) -> RefToken {
        if self.category == RefCategory::Participant {
            if let Some(email) = &self.email {
                return RefToken::Mention {
                    name: self.name.to_string(),
                    email: email.to_string(),
                };
            }
        }
        RefToken::Structural {
            category: self.category,
            target_id: self.id.clone(),
        }
    }
}

/// Narrows `visible` to rows whose display name or category label contains
/// `query` case-insensitively, preserving the incoming definition order.
/// Candidates are never relevance-ranked; equal inputs produce identical
/// output. The empty query keeps every row, the state right after `@`.
pub fn filter_candidates(visible: &[&Entity], query: &str) -> Vec<Candidate> {
    let query_lower = query.to_lowercase();
    visible
        .iter()
        .filter_map(|entity| Candidate::for_entity(entity))
        .filter(|candidate| {
            candidate.name.to_lowercase().contains(&query_lower)
                || candidate.category.label().to_lowercase().contains(&query_lower)
        })
        .collect()
}
