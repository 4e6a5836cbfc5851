// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use smallvec::SmallVec;

use super::scan::scan_prompt;
use crate::model::{Catalog, Entity, EntityId, EntityKind, RefCategory, RefToken};
use crate::query::visibility::{visible_from, VisibilityError};

/// Validity of one token against the current catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefStatus {
    Ok,
    /// No such target (or no such participant name/email pair).
    Dangling,
    /// The id exists, but under a different category than the token claims.
    WrongCategory,
    /// The target exists but the author may not cite it, e.g. a forward
    /// reference created by a later move.
    NotVisible,
}

impl RefStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Dangling => "dangling",
            Self::WrongCategory => "wrong-category",
            Self::NotVisible => "not-visible",
        }
    }
}

impl fmt::Display for RefStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefStatus {
    type Err = ParseRefStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ok" => Ok(Self::Ok),
            "dangling" => Ok(Self::Dangling),
            "wrong-category" => Ok(Self::WrongCategory),
            "not-visible" => Ok(Self::NotVisible),
            other => Err(ParseRefStatusError {
                raw: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRefStatusError {
    raw: String,
}

impl ParseRefStatusError {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseRefStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reference status: {:?}", self.raw)
    }
}

impl std::error::Error for ParseRefStatusError {}

/// Validity of a single token without author context, for renderers that
/// decorate tokens in place. The author-aware [`RefStatus::NotVisible`]
/// outcome needs [`audit_entity`].
pub fn resolve_token(catalog: &Catalog, token: &RefToken) -> RefStatus {
    match token {
        RefToken::Structural {
            category,
            target_id,
        } => match catalog.entity(target_id) {
            None => RefStatus::Dangling,
            Some(target) => {
                if RefCategory::for_kind(target.kind()) == Some(*category) {
                    RefStatus::Ok
                } else {
                    RefStatus::WrongCategory
                }
            }
        },
        RefToken::Mention { name, email } => {
            if mentioned_participant(catalog, name, email).is_some() {
                RefStatus::Ok
            } else {
                RefStatus::Dangling
            }
        }
    }
}

fn mentioned_participant<'a>(catalog: &'a Catalog, name: &str, email: &str) -> Option<&'a Entity> {
    catalog.entities().values().find(|entity| {
        entity.kind() == EntityKind::Participant
            && entity.name() == name
            && entity.email().is_some_and(|known| known == email)
    })
}

/// One problem token in one entity's prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub author_id: EntityId,
    pub start: usize,
    pub end: usize,
    pub token: RefToken,
    pub status: RefStatus,
    /// For dangling tokens: the closest same-category id (structural) or
    /// participant name (mention), when anything plausible exists.
    pub suggestion: Option<String>,
}

/// Scans and resolves one entity's prompt, author-aware: tokens whose target
/// exists but sits outside the author's visibility come back as
/// [`RefStatus::NotVisible`]. Clean tokens produce no findings.
pub fn audit_entity(
    catalog: &Catalog,
    entity_id: &EntityId,
) -> Result<Vec<Finding>, VisibilityError> {
    let Some(author) = catalog.entity(entity_id) else {
        return Err(VisibilityError::NotFound {
            entity_id: entity_id.clone(),
        });
    };
    let visible = visible_from(catalog, entity_id)?;
    Ok(prompt_findings(catalog, author, &visible).into_vec())
}

/// Audits every prompt in the catalogue. The fan-out is read-only, so it may
/// run across threads; findings come back in (author id, span start) order.
pub fn audit_catalog(catalog: &Catalog) -> Result<Vec<Finding>, VisibilityError> {
    let per_author = catalog
        .entities()
        .par_iter()
        .map(|(entity_id, _)| audit_entity(catalog, entity_id))
        .collect::<Result<Vec<_>, _>>()?;

    let mut findings: Vec<Finding> = per_author.into_iter().flatten().collect();
    findings.sort_by(|a, b| (&a.author_id, a.start).cmp(&(&b.author_id, b.start)));
    Ok(findings)
}

fn prompt_findings(
    catalog: &Catalog,
    author: &Entity,
    visible: &[&Entity],
) -> SmallVec<[Finding; 4]> {
    let visible_ids: HashSet<&EntityId> = visible.iter().map(|entity| entity.id()).collect();
    let mut findings = SmallVec::new();

    for scanned in scan_prompt(author.prompt()) {
        let status = token_status(catalog, &scanned.token, &visible_ids);
        if status == RefStatus::Ok {
            continue;
        }
        let suggestion = if status == RefStatus::Dangling {
            nearest_match(catalog, &scanned.token)
        } else {
            None
        };
        findings.push(Finding {
            author_id: author.id().clone(),
            start: scanned.start,
            end: scanned.end,
            token: scanned.token,
            status,
            suggestion,
        });
    }

    findings
}

fn token_status(
    catalog: &Catalog,
    token: &RefToken,
    visible_ids: &HashSet<&EntityId>,
) -> RefStatus {
    let resolved = resolve_token(catalog, token);
    if resolved != RefStatus::Ok {
        return resolved;
    }
    let target_visible = match token {
        RefToken::Structural { target_id, .. } => visible_ids.contains(target_id),
        RefToken::Mention { name, email } => mentioned_participant(catalog, name, email)
            .is_some_and(|participant| visible_ids.contains(participant.id())),
    };
    if target_visible {
        RefStatus::Ok
    } else {
        RefStatus::NotVisible
    }
}

/// Ratios below this read as noise rather than a likely typo.
const MIN_SUGGESTION_RATIO: f64 = 40.0;

fn nearest_match(catalog: &Catalog, token: &RefToken) -> Option<String> {
    match token {
        RefToken::Structural {
            category,
            target_id,
        } => closest(
            target_id.as_str(),
            catalog.entities().values().filter_map(|entity| {
                (RefCategory::for_kind(entity.kind()) == Some(*category))
                    .then(|| entity.id().as_str())
            }),
        ),
        RefToken::Mention { name, .. } => closest(
            name,
            catalog.entities().values().filter_map(|entity| {
                (entity.kind() == EntityKind::Participant).then(|| entity.name())
            }),
        ),
    }
}

fn closest<'a>(needle: &str, candidates: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut best: Option<(f64, &str)> = None;
    for candidate in candidates {
        let ratio = rapidfuzz::fuzz::ratio(needle.chars(), candidate.chars());
        if ratio < MIN_SUGGESTION_RATIO {
            continue;
        }
        if best.map_or(true, |(best_ratio, _)| ratio > best_ratio) {
            best = Some((ratio, candidate));
        }
    }
    best.map(|(_, candidate)| candidate.to_owned())
}
