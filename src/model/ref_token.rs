// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::entity::{Entity, EntityKind};
use super::ids::{EntityId, IdError};

/// Disjoint reference namespaces. The same display name under two categories
/// can never collide because the category travels inside the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefCategory {
    KnowledgeDocument,
    ReferencedField,
    ReferencedCollection,
    ExtractionRule,
    SuppliedDocument,
    Participant,
}

impl RefCategory {
    pub const ALL: [RefCategory; 6] = [
        RefCategory::KnowledgeDocument,
        RefCategory::ReferencedField,
        RefCategory::ReferencedCollection,
        RefCategory::ExtractionRule,
        RefCategory::SuppliedDocument,
        RefCategory::Participant,
    ];

    /// The wire name used inside `@<category>:<id>` tokens.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::KnowledgeDocument => "knowledge-document",
            Self::ReferencedField => "referenced-field",
            Self::ReferencedCollection => "referenced-collection",
            Self::ExtractionRule => "extraction-rule",
            Self::SuppliedDocument => "supplied-document",
            Self::Participant => "participant",
        }
    }

    /// Human label shown next to candidates; also matched by the candidate
    /// filter, so typing `@know` narrows to knowledge documents.
    pub fn label(self) -> &'static str {
        match self {
            Self::KnowledgeDocument => "Knowledge Document",
            Self::ReferencedField => "Field",
            Self::ReferencedCollection => "Collection",
            Self::ExtractionRule => "Extraction Rule",
            Self::SuppliedDocument => "Supplied Document",
            Self::Participant => "Participant",
        }
    }

    /// The category an entity of `kind` is cited under, or `None` for kinds
    /// that cannot be referenced (workflow steps).
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        match kind {
            EntityKind::SchemaField
            | EntityKind::CollectionProperty
            | EntityKind::WorkflowStepValue => Some(Self::ReferencedField),
            EntityKind::Collection => Some(Self::ReferencedCollection),
            EntityKind::Participant => Some(Self::Participant),
            EntityKind::KnowledgeDocument => Some(Self::KnowledgeDocument),
            EntityKind::ExtractionRule => Some(Self::ExtractionRule),
            EntityKind::SuppliedDocument => Some(Self::SuppliedDocument),
            EntityKind::WorkflowStep => None,
        }
    }
}

impl fmt::Display for RefCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RefCategory {
    type Err = ParseRefCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "knowledge-document" => Ok(Self::KnowledgeDocument),
            "referenced-field" => Ok(Self::ReferencedField),
            "referenced-collection" => Ok(Self::ReferencedCollection),
            "extraction-rule" => Ok(Self::ExtractionRule),
            "supplied-document" => Ok(Self::SuppliedDocument),
            "participant" => Ok(Self::Participant),
            other => Err(ParseRefCategoryError {
                raw: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRefCategoryError {
    raw: String,
}

impl ParseRefCategoryError {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseRefCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown reference category: {:?}", self.raw)
    }
}

impl std::error::Error for ParseRefCategoryError {}

/// A finalized reference as written into prompt text.
///
/// Canonical forms, reproduced verbatim on the wire:
/// - structural: `@<category>:<entityId>`
/// - participant mention: `@<DisplayName> (<email>)`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RefToken {
    Structural {
        category: RefCategory,
        target_id: EntityId,
    },
    Mention {
        name: String,
        email: String,
    },
}

impl RefToken {
    /// The canonical token for `entity`, or `None` when the kind cannot be
    /// referenced. Participants with a known email use the mention form;
    /// without one they fall back to `@participant:<id>`.
    pub fn for_entity(entity: &Entity) -> Option<Self> {
        let category = RefCategory::for_kind(entity.kind())?;
        if category == RefCategory::Participant {
            if let Some(email) = entity.email() {
                return Some(Self::Mention {
                    name: entity.name().to_owned(),
                    email: email.to_owned(),
                });
            }
        }
        Some(Self::Structural {
            category,
            target_id: entity.id().clone(),
        })
    }

    pub fn category(&self) -> RefCategory {
        match self {
            Self::Structural { category, .. } => *category,
            Self::Mention { .. } => RefCategory::Participant,
        }
    }

    pub fn target_id(&self) -> Option<&EntityId> {
        match self {
            Self::Structural { target_id, .. } => Some(target_id),
            Self::Mention { .. } => None,
        }
    }

    pub fn parse(input: &str) -> Result<Self, ParseRefTokenError> {
        let body = input
            .strip_prefix('@')
            .ok_or(ParseRefTokenError::MissingTrigger)?;
        if body.is_empty() {
            return Err(ParseRefTokenError::Empty);
        }

        if let Some((head, tail)) = body.split_once(':') {
            if let Ok(category) = head.parse::<RefCategory>() {
                let target_id = EntityId::new(tail.to_owned())
                    .map_err(ParseRefTokenError::InvalidTargetId)?;
                return Ok(Self::Structural {
                    category,
                    target_id,
                });
            }
        }

        let Some(trimmed) = body.strip_suffix(')') else {
            return Err(ParseRefTokenError::MentionMissingEmail);
        };
        let Some((name, email)) = trimmed.rsplit_once(" (") else {
            return Err(ParseRefTokenError::MentionMissingEmail);
        };
        if name.is_empty() {
            return Err(ParseRefTokenError::MentionEmptyName);
        }
        if email.is_empty() || !email.contains('@') || email.contains(char::is_whitespace) {
            return Err(ParseRefTokenError::MentionInvalidEmail {
                raw: email.to_owned(),
            });
        }

        Ok(Self::Mention {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }
}

impl fmt::Display for RefToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structural {
                category,
                target_id,
            } => write!(f, "@{category}:{target_id}"),
            Self::Mention { name, email } => write!(f, "@{name} ({email})"),
        }
    }
}

impl FromStr for RefToken {
    type Err = ParseRefTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseRefTokenError {
    MissingTrigger,
    Empty,
    InvalidTargetId(IdError),
    MentionMissingEmail,
    MentionEmptyName,
    MentionInvalidEmail { raw: String },
}

impl fmt::Display for ParseRefTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTrigger => f.write_str("reference token must start with '@'"),
            Self::Empty => f.write_str("reference token is empty after '@'"),
            Self::InvalidTargetId(err) => write!(f, "invalid target id: {err}"),
            Self::MentionMissingEmail => {
                f.write_str("participant mention must end with ' (<email>)'")
            }
            Self::MentionEmptyName => f.write_str("participant mention is missing a name"),
            Self::MentionInvalidEmail { raw } => {
                write!(f, "participant mention email is invalid: {raw:?}")
            }
        }
    }
}

impl std::error::Error for ParseRefTokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidTargetId(err) => Some(err),
            _ => None,
        }
    }
}
