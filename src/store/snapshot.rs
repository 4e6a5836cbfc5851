// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::entity::{Entity, EntityKind, ParseEntityKindError, ScopeKey};
use crate::model::ids::{CatalogId, EntityId, IdError};
use crate::model::{Catalog, CatalogError};

/// Wire form of a full catalogue payload.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogJson {
    pub catalog_id: String,
    #[serde(default)]
    pub rev: u64,
    #[serde(default)]
    pub entities: Vec<EntityJson>,
}

/// Wire form of a single catalogue entity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EntityJson {
    pub id: String,
    /// Kebab-case kind tag: `schema-field`, `collection`, `collection-property`,
    /// `workflow-step`, `workflow-step-value`, `participant`,
    /// `knowledge-document`, `extraction-rule`, `supplied-document`.
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default)]
    pub position: u32,
}

#[derive(Debug)]
pub enum SnapshotError {
    Json {
        source: serde_json::Error,
    },
    InvalidId {
        field: &'static str,
        value: String,
        source: Box<IdError>,
    },
    UnknownKind {
        value: String,
        source: Box<ParseEntityKindError>,
    },
    Catalog {
        source: CatalogError,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "json error: {source}"),
            Self::InvalidId {
                field,
                value,
                source,
            } => write!(f, "invalid id for {field}: {value:?}: {source}"),
            Self::UnknownKind { value, source } => {
                write!(f, "unknown entity kind {value:?}: {source}")
            }
            Self::Catalog { source } => write!(f, "snapshot does not assemble: {source}"),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidId { source, .. } => Some(source),
            Self::UnknownKind { source, .. } => Some(source),
            Self::Catalog { source } => Some(source),
        }
    }
}

/// Parses and validates a catalogue payload.
///
/// Ids, kinds, container coherence, and per-scope position density are all
/// checked; a payload that decodes is safe to edit against.
pub fn decode_catalog(json: &str) -> Result<Catalog, SnapshotError> {
    let catalog_json: CatalogJson =
        serde_json::from_str(json).map_err(|source| SnapshotError::Json { source })?;
    catalog_from_json(catalog_json)
}

/// Serializes a catalogue to pretty JSON with entities in listing order
/// (schema scope with properties inlined, then steps with their values,
/// then the unordered pools), so equal catalogues encode byte-identically.
pub fn encode_catalog(catalog: &Catalog) -> Result<String, SnapshotError> {
    let catalog_json = catalog_to_json(catalog);
    serde_json::to_string_pretty(&catalog_json).map_err(|source| SnapshotError::Json { source })
}

/// JSON Schema for the payload `decode_catalog` accepts, for hosts that
/// validate what they serve.
pub fn catalog_schema() -> schemars::Schema {
    schemars::schema_for!(CatalogJson)
}

fn catalog_from_json(catalog_json: CatalogJson) -> Result<Catalog, SnapshotError> {
    let catalog_id = CatalogId::new(catalog_json.catalog_id.clone()).map_err(|source| {
        SnapshotError::InvalidId {
            field: "catalog_id",
            value: catalog_json.catalog_id,
            source: Box::new(source),
        }
    })?;

    let mut entities = Vec::with_capacity(catalog_json.entities.len());
    for entity_json in catalog_json.entities {
        entities.push(entity_from_json(entity_json)?);
    }

    Catalog::assemble(catalog_id, catalog_json.rev, entities)
        .map_err(|source| SnapshotError::Catalog { source })
}

fn entity_from_json(entity_json: EntityJson) -> Result<Entity, SnapshotError> {
    let id = EntityId::new(entity_json.id.clone()).map_err(|source| SnapshotError::InvalidId {
        field: "entities[].id",
        value: entity_json.id,
        source: Box::new(source),
    })?;

    let kind = entity_json
        .kind
        .parse::<EntityKind>()
        .map_err(|source| SnapshotError::UnknownKind {
            value: entity_json.kind,
            source: Box::new(source),
        })?;

    let mut entity = Entity::new(id, kind, entity_json.name);
    entity.set_email(entity_json.email);
    entity.set_prompt(entity_json.prompt);
    entity.set_position(entity_json.position);

    if let Some(raw) = entity_json.container_id {
        let container_id =
            EntityId::new(raw.clone()).map_err(|source| SnapshotError::InvalidId {
                field: "entities[].container_id",
                value: raw,
                source: Box::new(source),
            })?;
        entity = entity.in_container(container_id);
    }

    Ok(entity)
}

fn catalog_to_json(catalog: &Catalog) -> CatalogJson {
    CatalogJson {
        catalog_id: catalog.catalog_id().to_string(),
        rev: catalog.rev(),
        entities: entities_in_listing_order(catalog)
            .into_iter()
            .map(entity_to_json)
            .collect(),
    }
}

fn entity_to_json(entity: &Entity) -> EntityJson {
    EntityJson {
        id: entity.id().to_string(),
        kind: entity.kind().to_string(),
        name: entity.name().to_owned(),
        email: entity.email().map(ToOwned::to_owned),
        prompt: entity.prompt().to_owned(),
        container_id: entity.container_id().map(ToString::to_string),
        position: entity.position(),
    }
}

fn entities_in_listing_order(catalog: &Catalog) -> Vec<&Entity> {
    let mut out = Vec::with_capacity(catalog.len());

    for member in catalog.entities_in(&ScopeKey::Schema) {
        out.push(member);
        if member.kind() == EntityKind::Collection {
            out.extend(catalog.entities_in(&ScopeKey::Properties(member.id().clone())));
        }
    }

    for step in catalog.entities_in(&ScopeKey::Steps) {
        out.push(step);
        out.extend(catalog.entities_in(&ScopeKey::Values(step.id().clone())));
    }

    for scope in [
        ScopeKey::Participants,
        ScopeKey::KnowledgeDocuments,
        ScopeKey::ExtractionRules,
        ScopeKey::SuppliedDocuments,
    ] {
        out.extend(catalog.entities_in(&scope));
    }

    out
}
