// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{Catalog, Entity, EntityId, EntityKind, ScopeKey};

/// Position cutoffs a querent sees the catalogue through.
///
/// References are forward-only: an entity may cite what was defined before it,
/// never itself or anything later in its ordering scope.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Horizon {
    /// Schema-scope querent (field or collection) at `position`.
    Schema { position: u32 },
    /// Property querent inside `collection_id` (collection rank
    /// `collection_index` among collections) at `position`.
    Property {
        collection_id: EntityId,
        collection_index: u32,
        position: u32,
    },
    /// Workflow-side querent: a step at `step_position`, or a value inside
    /// `own_step` with its value-position cutoff.
    Workflow {
        step_position: u32,
        own_step: Option<(EntityId, u32)>,
    },
    /// Unordered querents hold no references, so they see nothing.
    Unordered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisibilityError {
    NotFound {
        entity_id: EntityId,
    },
    InvalidScope {
        kind: EntityKind,
        container_id: Option<EntityId>,
        detail: &'static str,
    },
}

impl fmt::Display for VisibilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { entity_id } => write!(f, "entity not found (id={entity_id})"),
            Self::InvalidScope {
                kind,
                container_id,
                detail,
            } => write!(
                f,
                "invalid scope for {kind} querent (container_id={container_id:?}): {detail}"
            ),
        }
    }
}

impl std::error::Error for VisibilityError {}

/// Entities the given entity's prompt may legally reference, in definition
/// order: the schema scope with each collection's visible properties inlined
/// after the collection's slot, then workflow values in (step, value) order,
/// then the unordered pools. Workflow steps never appear; they are not
/// referenceable.
pub fn visible_from<'a>(
    catalog: &'a Catalog,
    entity_id: &EntityId,
) -> Result<Vec<&'a Entity>, VisibilityError> {
    let Some(querent) = catalog.entity(entity_id) else {
        return Err(VisibilityError::NotFound {
            entity_id: entity_id.clone(),
        });
    };

    let horizon = horizon_for(
        catalog,
        querent.kind(),
        querent.container_id(),
        Some(querent.position()),
    )?;
    Ok(collect(catalog, &horizon))
}

/// Visibility for an entity that is still being created and has no committed
/// position yet: it is treated as sitting at the end of its scope, so it sees
/// everything currently committed there.
pub fn visible_to_draft<'a>(
    catalog: &'a Catalog,
    kind: EntityKind,
    container_id: Option<&EntityId>,
) -> Result<Vec<&'a Entity>, VisibilityError> {
    let horizon = horizon_for(catalog, kind, container_id, None)?;
    Ok(collect(catalog, &horizon))
}

fn horizon_for(
    catalog: &Catalog,
    kind: EntityKind,
    container_id: Option<&EntityId>,
    position: Option<u32>,
) -> Result<Horizon, VisibilityError> {
    let invalid = |detail: &'static str| VisibilityError::InvalidScope {
        kind,
        container_id: container_id.cloned(),
        detail,
    };

    match kind {
        EntityKind::SchemaField | EntityKind::Collection => {
            if container_id.is_some() {
                return Err(invalid("kind does not take a container"));
            }
            let position = position.unwrap_or_else(|| catalog.scope_len(&ScopeKey::Schema));
            Ok(Horizon::Schema { position })
        }
        EntityKind::CollectionProperty => {
            let Some(collection_id) = container_id else {
                return Err(invalid("kind requires a collection container"));
            };
            if !catalog.contains(collection_id) {
                return Err(VisibilityError::NotFound {
                    entity_id: collection_id.clone(),
                });
            }
            let Some(collection_index) = catalog.collection_index(collection_id) else {
                return Err(invalid("container is not a collection"));
            };
            let position = position.unwrap_or_else(|| {
                catalog.scope_len(&ScopeKey::Properties(collection_id.clone()))
            });
            Ok(Horizon::Property {
                collection_id: collection_id.clone(),
                collection_index,
                position,
            })
        }
        EntityKind::WorkflowStep => {
            if container_id.is_some() {
                return Err(invalid("kind does not take a container"));
            }
            let step_position = position.unwrap_or_else(|| catalog.scope_len(&ScopeKey::Steps));
            Ok(Horizon::Workflow {
                step_position,
                own_step: None,
            })
        }
        EntityKind::WorkflowStepValue => {
            let Some(step_id) = container_id else {
                return Err(invalid("kind requires a step container"));
            };
            let Some(step) = catalog.entity(step_id) else {
                return Err(VisibilityError::NotFound {
                    entity_id: step_id.clone(),
                });
            };
            if step.kind() != EntityKind::WorkflowStep {
                return Err(invalid("container is not a workflow step"));
            }
            let value_position = position
                .unwrap_or_else(|| catalog.scope_len(&ScopeKey::Values(step_id.clone())));
            Ok(Horizon::Workflow {
                step_position: step.position(),
                own_step: Some((step_id.clone(), value_position)),
            })
        }
        EntityKind::Participant
        | EntityKind::KnowledgeDocument
        | EntityKind::ExtractionRule
        | EntityKind::SuppliedDocument => {
            if container_id.is_some() {
                return Err(invalid("kind does not take a container"));
            }
            Ok(Horizon::Unordered)
        }
    }
}

fn collect<'a>(catalog: &'a Catalog, horizon: &Horizon) -> Vec<&'a Entity> {
    let mut out = Vec::new();

    match horizon {
        Horizon::Unordered => return out,
        Horizon::Schema { position } => {
            for member in catalog.entities_in(&ScopeKey::Schema) {
                if member.position() >= *position {
                    break;
                }
                out.push(member);
            }
        }
        Horizon::Property {
            collection_id,
            collection_index,
            position,
        } => {
            for member in catalog.entities_in(&ScopeKey::Schema) {
                match member.kind() {
                    EntityKind::SchemaField => out.push(member),
                    EntityKind::Collection => {
                        let Some(index) = catalog.collection_index(member.id()) else {
                            continue;
                        };
                        if index > *collection_index {
                            continue;
                        }
                        out.push(member);

                        let own = member.id() == collection_id;
                        for property in
                            catalog.entities_in(&ScopeKey::Properties(member.id().clone()))
                        {
                            if own && property.position() >= *position {
                                break;
                            }
                            out.push(property);
                        }
                    }
                    _ => {}
                }
            }
        }
        Horizon::Workflow {
            step_position,
            own_step,
        } => {
            for member in catalog.entities_in(&ScopeKey::Schema) {
                out.push(member);
                if member.kind() == EntityKind::Collection {
                    out.extend(catalog.entities_in(&ScopeKey::Properties(member.id().clone())));
                }
            }

            for step in catalog.entities_in(&ScopeKey::Steps) {
                if step.position() > *step_position {
                    break;
                }
                if step.position() < *step_position {
                    out.extend(catalog.entities_in(&ScopeKey::Values(step.id().clone())));
                    continue;
                }
                // Own step: only earlier values, and only for value querents.
                let Some((step_id, value_position)) = own_step else {
                    continue;
                };
                if step.id() != step_id {
                    continue;
                }
                for value in catalog.entities_in(&ScopeKey::Values(step_id.clone())) {
                    if value.position() >= *value_position {
                        break;
                    }
                    out.push(value);
                }
            }
        }
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
