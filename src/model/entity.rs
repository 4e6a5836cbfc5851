// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use super::ids::EntityId;

/// Every nameable thing a prompt can cite, plus the workflow steps that
/// organize values. See [`ScopeKey`] for how each kind is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    SchemaField,
    Collection,
    CollectionProperty,
    WorkflowStep,
    WorkflowStepValue,
    Participant,
    KnowledgeDocument,
    ExtractionRule,
    SuppliedDocument,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SchemaField => "schema-field",
            Self::Collection => "collection",
            Self::CollectionProperty => "collection-property",
            Self::WorkflowStep => "workflow-step",
            Self::WorkflowStepValue => "workflow-step-value",
            Self::Participant => "participant",
            Self::KnowledgeDocument => "knowledge-document",
            Self::ExtractionRule => "extraction-rule",
            Self::SuppliedDocument => "supplied-document",
        }
    }

    /// Kinds whose position carries visibility meaning (forward-only rule).
    /// Unordered kinds still hold dense positions, but only for stable
    /// listings.
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            Self::SchemaField
                | Self::Collection
                | Self::CollectionProperty
                | Self::WorkflowStep
                | Self::WorkflowStepValue
        )
    }

    /// The container kind this kind must be scoped under, if any.
    pub fn required_container(self) -> Option<EntityKind> {
        match self {
            Self::CollectionProperty => Some(Self::Collection),
            Self::WorkflowStepValue => Some(Self::WorkflowStep),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = ParseEntityKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "schema-field" => Ok(Self::SchemaField),
            "collection" => Ok(Self::Collection),
            "collection-property" => Ok(Self::CollectionProperty),
            "workflow-step" => Ok(Self::WorkflowStep),
            "workflow-step-value" => Ok(Self::WorkflowStepValue),
            "participant" => Ok(Self::Participant),
            "knowledge-document" => Ok(Self::KnowledgeDocument),
            "extraction-rule" => Ok(Self::ExtractionRule),
            "supplied-document" => Ok(Self::SuppliedDocument),
            other => Err(ParseEntityKindError {
                raw: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEntityKindError {
    raw: String,
}

impl ParseEntityKindError {
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for ParseEntityKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entity kind: {:?}", self.raw)
    }
}

impl std::error::Error for ParseEntityKindError {}

/// The ordering domain within which positions must stay dense (`0..len`).
///
/// Schema fields and collections interleave in one `Schema` scope; properties
/// and values are scoped per container; every unordered kind gets its own
/// listing scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeKey {
    Schema,
    Properties(EntityId),
    Steps,
    Values(EntityId),
    Participants,
    KnowledgeDocuments,
    ExtractionRules,
    SuppliedDocuments,
}

impl fmt::Display for ScopeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => f.write_str("schema"),
            Self::Properties(collection_id) => write!(f, "properties of {collection_id}"),
            Self::Steps => f.write_str("steps"),
            Self::Values(step_id) => write!(f, "values of {step_id}"),
            Self::Participants => f.write_str("participants"),
            Self::KnowledgeDocuments => f.write_str("knowledge documents"),
            Self::ExtractionRules => f.write_str("extraction rules"),
            Self::SuppliedDocuments => f.write_str("supplied documents"),
        }
    }
}

/// A nameable entity: `{ id, kind, name, email?, prompt, containerId?,
/// position }`.
///
/// `position` is owned by the catalog's insert/remove/move renumbering and is
/// deliberately not settable from outside the crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    kind: EntityKind,
    name: String,
    email: Option<String>,
    prompt: String,
    container_id: Option<EntityId>,
    position: u32,
}

impl Entity {
    pub fn new(id: EntityId, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            name: name.into(),
            email: None,
            prompt: String::new(),
            container_id: None,
            position: 0,
        }
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email<T: Into<String>>(&mut self, email: Option<T>) {
        self.email = email.map(Into::into);
    }

    /// The entity's free text (description/instructions) in which reference
    /// tokens live. Empty when the entity carries no prose.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn container_id(&self) -> Option<&EntityId> {
        self.container_id.as_ref()
    }

    /// Scopes a draft under a container before insertion. Consuming `self`
    /// keeps stored entities from being re-scoped without renumbering.
    pub fn in_container(mut self, container_id: EntityId) -> Self {
        self.container_id = Some(container_id);
        self
    }

    pub(crate) fn set_container_id(&mut self, container_id: Option<EntityId>) {
        self.container_id = container_id;
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: u32) {
        self.position = position;
    }

    /// The ordering scope this entity lives in, or `None` when a required
    /// container id is missing (an entity the catalog would reject).
    pub fn scope_key(&self) -> Option<ScopeKey> {
        match self.kind {
            EntityKind::SchemaField | EntityKind::Collection => Some(ScopeKey::Schema),
            EntityKind::WorkflowStep => Some(ScopeKey::Steps),
            EntityKind::CollectionProperty => {
                self.container_id.clone().map(ScopeKey::Properties)
            }
            EntityKind::WorkflowStepValue => self.container_id.clone().map(ScopeKey::Values),
            EntityKind::Participant => Some(ScopeKey::Participants),
            EntityKind::KnowledgeDocument => Some(ScopeKey::KnowledgeDocuments),
            EntityKind::ExtractionRule => Some(ScopeKey::ExtractionRules),
            EntityKind::SuppliedDocument => Some(ScopeKey::SuppliedDocuments),
        }
    }
}
