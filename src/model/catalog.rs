// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use smallvec::SmallVec;

use super::entity::{Entity, EntityKind, ScopeKey};
use super::ids::{CatalogId, EntityId};

/// The ordered entity arena behind one editing session.
///
/// Entities are keyed by id; `position` is an indexed field on the entity, so
/// removals never invalidate ids held elsewhere. Within every [`ScopeKey`]
/// positions stay dense (`0..scope_len`) at the end of each mutator, and
/// [`Catalog::insert`], [`Catalog::remove`] and [`Catalog::move_entity`] are
/// the only code paths that write positions.
///
/// The revision counter is not touched here; batch application in
/// [`crate::ops`] owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    catalog_id: CatalogId,
    entities: BTreeMap<EntityId, Entity>,
    rev: u64,
}

impl Catalog {
    pub fn new(catalog_id: CatalogId) -> Self {
        Self {
            catalog_id,
            entities: BTreeMap::new(),
            rev: 0,
        }
    }

    /// Rebuilds a catalog from interchange parts, validating id uniqueness,
    /// container coherence, and per-scope density before accepting anything.
    pub fn assemble(
        catalog_id: CatalogId,
        rev: u64,
        entities: Vec<Entity>,
    ) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for entity in entities {
            match map.entry(entity.id().clone()) {
                Entry::Vacant(vacant) => {
                    vacant.insert(entity);
                }
                Entry::Occupied(occupied) => {
                    return Err(CatalogError::AlreadyExists {
                        entity_id: occupied.key().clone(),
                    });
                }
            }
        }

        let mut positions_by_scope: BTreeMap<ScopeKey, Vec<u32>> = BTreeMap::new();
        for entity in map.values() {
            let scope = validate_container(entity, &map)?;
            positions_by_scope
                .entry(scope)
                .or_default()
                .push(entity.position());
        }

        for (scope, mut positions) in positions_by_scope {
            positions.sort_unstable();
            let dense = positions
                .iter()
                .enumerate()
                .all(|(index, &position)| position as usize == index);
            if !dense {
                return Err(CatalogError::ScopeNotDense {
                    scope,
                    detail: format!(
                        "positions {positions:?} for {} entities",
                        positions.len()
                    ),
                });
            }
        }

        Ok(Self {
            catalog_id,
            entities: map,
            rev,
        })
    }

    pub fn catalog_id(&self) -> &CatalogId {
        &self.catalog_id
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub fn entities(&self) -> &BTreeMap<EntityId, Entity> {
        &self.entities
    }

    pub fn entity(&self, entity_id: &EntityId) -> Option<&Entity> {
        self.entities.get(entity_id)
    }

    /// Mutable access for name/email/prompt edits. Position and container
    /// setters are crate-private, so this cannot break ordering invariants.
    pub fn entity_mut(&mut self, entity_id: &EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(entity_id)
    }

    pub fn contains(&self, entity_id: &EntityId) -> bool {
        self.entities.contains_key(entity_id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Members of `scope` in position order.
    pub fn entities_in(&self, scope: &ScopeKey) -> Vec<&Entity> {
        let mut members = self
            .entities
            .values()
            .filter(|entity| entity.scope_key().as_ref() == Some(scope))
            .collect::<Vec<_>>();
        members.sort_by_key(|entity| entity.position());
        members
    }

    pub fn scope_len(&self, scope: &ScopeKey) -> u32 {
        self.entities
            .values()
            .filter(|entity| entity.scope_key().as_ref() == Some(scope))
            .count() as u32
    }

    /// Collections in schema order.
    pub fn collections(&self) -> Vec<&Entity> {
        let mut collections = self
            .entities
            .values()
            .filter(|entity| entity.kind() == EntityKind::Collection)
            .collect::<Vec<_>>();
        collections.sort_by_key(|entity| entity.position());
        collections
    }

    /// Workflow steps in step order.
    pub fn steps(&self) -> Vec<&Entity> {
        self.entities_in(&ScopeKey::Steps)
    }

    /// Rank of a collection among collections only, ignoring the schema
    /// fields interleaved with it. `None` when the id is unknown or not a
    /// collection.
    pub fn collection_index(&self, collection_id: &EntityId) -> Option<u32> {
        let collection = self.entities.get(collection_id)?;
        if collection.kind() != EntityKind::Collection {
            return None;
        }
        let earlier = self
            .entities
            .values()
            .filter(|entity| {
                entity.kind() == EntityKind::Collection
                    && entity.position() < collection.position()
            })
            .count() as u32;
        Some(earlier)
    }

    /// Inserts a draft entity. With `at_position` omitted the draft appends
    /// at the end of its scope; otherwise every member at or after
    /// `at_position` shifts by +1 first.
    pub fn insert(
        &mut self,
        entity: Entity,
        at_position: Option<u32>,
    ) -> Result<&Entity, CatalogError> {
        if let Some(existing) = self.entities.get(entity.id()) {
            return Err(CatalogError::AlreadyExists {
                entity_id: existing.id().clone(),
            });
        }
        let scope = validate_container(&entity, &self.entities)?;

        let scope_len = self.scope_len(&scope);
        let position = match at_position {
            None => scope_len,
            Some(position) if position > scope_len => {
                return Err(CatalogError::PositionOutOfRange {
                    entity_id: entity.id().clone(),
                    position,
                    scope_len,
                });
            }
            Some(position) => position,
        };

        if position < scope_len {
            for other in self.entities.values_mut() {
                if other.scope_key().as_ref() == Some(&scope) && other.position() >= position {
                    other.set_position(other.position().saturating_add(1));
                }
            }
        }

        let mut draft = entity;
        draft.set_position(position);
        match self.entities.entry(draft.id().clone()) {
            Entry::Vacant(vacant) => Ok(vacant.insert(draft)),
            Entry::Occupied(occupied) => Err(CatalogError::AlreadyExists {
                entity_id: occupied.key().clone(),
            }),
        }
    }

    /// Removes an entity and closes the gap in its scope. Removing a
    /// collection or step also removes its contained entities (their scope
    /// ceases to exist). Returns the removed ids, requested id first, then
    /// cascaded children in position order.
    pub fn remove(&mut self, entity_id: &EntityId) -> Result<Vec<EntityId>, CatalogError> {
        let Some(entity) = self.entities.get(entity_id) else {
            return Err(CatalogError::NotFound {
                entity_id: entity_id.clone(),
            });
        };
        let scope = validate_container(entity, &self.entities)?;
        let position = entity.position();

        let mut doomed: SmallVec<[EntityId; 8]> = SmallVec::new();
        doomed.push(entity_id.clone());
        let child_scope = match entity.kind() {
            EntityKind::Collection => Some(ScopeKey::Properties(entity_id.clone())),
            EntityKind::WorkflowStep => Some(ScopeKey::Values(entity_id.clone())),
            _ => None,
        };
        if let Some(child_scope) = child_scope {
            for child in self.entities_in(&child_scope) {
                doomed.push(child.id().clone());
            }
        }

        for id in &doomed {
            self.entities.remove(id);
        }

        for other in self.entities.values_mut() {
            if other.scope_key().as_ref() == Some(&scope) && other.position() > position {
                other.set_position(other.position().saturating_sub(1));
            }
        }

        Ok(doomed.into_vec())
    }

    /// Reorders an entity within its scope, shifting only the members
    /// between the old and new position.
    pub fn move_entity(
        &mut self,
        entity_id: &EntityId,
        to_position: u32,
    ) -> Result<(), CatalogError> {
        let Some(entity) = self.entities.get(entity_id) else {
            return Err(CatalogError::NotFound {
                entity_id: entity_id.clone(),
            });
        };
        let scope = validate_container(entity, &self.entities)?;
        let from = entity.position();
        let scope_len = self.scope_len(&scope);
        if to_position >= scope_len {
            return Err(CatalogError::PositionOutOfRange {
                entity_id: entity_id.clone(),
                position: to_position,
                scope_len,
            });
        }
        if to_position == from {
            return Ok(());
        }

        for other in self.entities.values_mut() {
            if other.scope_key().as_ref() != Some(&scope) {
                continue;
            }
            let position = other.position();
            if to_position > from {
                if position > from && position <= to_position {
                    other.set_position(position.saturating_sub(1));
                }
            } else if position >= to_position && position < from {
                other.set_position(position.saturating_add(1));
            }
        }

        let Some(moving) = self.entities.get_mut(entity_id) else {
            return Err(CatalogError::NotFound {
                entity_id: entity_id.clone(),
            });
        };
        moving.set_position(to_position);
        Ok(())
    }
}

/// Checks the kind/container contract against `entities` and returns the
/// entity's scope. Total for stored entities; rejects incoherent drafts.
fn validate_container(
    entity: &Entity,
    entities: &BTreeMap<EntityId, Entity>,
) -> Result<ScopeKey, CatalogError> {
    let invalid = |detail: &'static str| CatalogError::InvalidScope {
        entity_id: entity.id().clone(),
        container_id: entity.container_id().cloned(),
        detail,
    };

    match (entity.kind().required_container(), entity.container_id()) {
        (None, None) => {}
        (None, Some(_)) => return Err(invalid("kind does not take a container")),
        (Some(_), None) => return Err(invalid("kind requires a container")),
        (Some(required), Some(container_id)) => {
            let Some(container) = entities.get(container_id) else {
                return Err(invalid("container does not exist"));
            };
            if container.kind() != required {
                return Err(invalid("container has the wrong kind"));
            }
        }
    }

    entity
        .scope_key()
        .ok_or_else(|| invalid("kind requires a container"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    NotFound {
        entity_id: EntityId,
    },
    AlreadyExists {
        entity_id: EntityId,
    },
    InvalidScope {
        entity_id: EntityId,
        container_id: Option<EntityId>,
        detail: &'static str,
    },
    PositionOutOfRange {
        entity_id: EntityId,
        position: u32,
        scope_len: u32,
    },
    ScopeNotDense {
        scope: ScopeKey,
        detail: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { entity_id } => write!(f, "entity not found: {entity_id}"),
            Self::AlreadyExists { entity_id } => {
                write!(f, "entity already exists: {entity_id}")
            }
            Self::InvalidScope {
                entity_id,
                container_id,
                detail,
            } => match container_id {
                Some(container_id) => write!(
                    f,
                    "invalid scope for {entity_id} (container {container_id}): {detail}"
                ),
                None => write!(f, "invalid scope for {entity_id}: {detail}"),
            },
            Self::PositionOutOfRange {
                entity_id,
                position,
                scope_len,
            } => write!(
                f,
                "position {position} out of range for {entity_id} (scope holds {scope_len})"
            ),
            Self::ScopeNotDense { scope, detail } => {
                write!(f, "scope {scope} is not densely numbered: {detail}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}
