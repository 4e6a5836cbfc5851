// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Op-application helpers used by `apply_ops`. Keeps `ops::mod` focused on
/// public op types and orchestration. Neighbour shifts are captured before
/// each mutation so the delta reports every entity whose position changed.
fn apply_op(catalog: &mut Catalog, op: &Op, delta: &mut DeltaBuilder) -> Result<(), ApplyError> {
    match op {
        Op::Add {
            id,
            kind,
            name,
            email,
            prompt,
            container_id,
            at_position,
        } => {
            let mut entity = Entity::new(id.clone(), *kind, name.clone());
            entity.set_email(email.clone());
            entity.set_prompt(prompt.clone());
            if let Some(container_id) = container_id {
                entity = entity.in_container(container_id.clone());
            }

            let shifted = match (entity.scope_key(), at_position) {
                (Some(scope), Some(position)) => ids_at_or_after(catalog, &scope, *position),
                _ => Vec::new(),
            };

            catalog
                .insert(entity, *at_position)
                .map_err(|source| ApplyError::Catalog { source })?;

            delta.record_added(id.clone());
            for neighbour in shifted {
                delta.record_updated(neighbour);
            }
            Ok(())
        }
        Op::Remove { entity_id } => {
            let shifted = catalog
                .entity(entity_id)
                .and_then(|existing| {
                    let scope = existing.scope_key()?;
                    Some(ids_at_or_after(
                        catalog,
                        &scope,
                        existing.position().saturating_add(1),
                    ))
                })
                .unwrap_or_default();

            let removed = catalog
                .remove(entity_id)
                .map_err(|source| ApplyError::Catalog { source })?;

            for removed_id in removed {
                delta.record_removed(removed_id);
            }
            for neighbour in shifted {
                delta.record_updated(neighbour);
            }
            Ok(())
        }
        Op::Move {
            entity_id,
            to_position,
        } => {
            let affected = catalog
                .entity(entity_id)
                .and_then(|existing| {
                    let scope = existing.scope_key()?;
                    let from = existing.position();
                    if from == *to_position {
                        return Some(Vec::new());
                    }
                    let (lo, hi) = if *to_position > from {
                        (from, *to_position)
                    } else {
                        (*to_position, from)
                    };
                    Some(
                        catalog
                            .entities_in(&scope)
                            .into_iter()
                            .filter(|member| member.position() >= lo && member.position() <= hi)
                            .map(|member| member.id().clone())
                            .collect(),
                    )
                })
                .unwrap_or_default();

            catalog
                .move_entity(entity_id, *to_position)
                .map_err(|source| ApplyError::Catalog { source })?;

            for member in affected {
                delta.record_updated(member);
            }
            Ok(())
        }
        Op::Update { entity_id, patch } => {
            let Some(entity) = catalog.entity_mut(entity_id) else {
                return Err(ApplyError::Catalog {
                    source: CatalogError::NotFound {
                        entity_id: entity_id.clone(),
                    },
                });
            };

            if let Some(name) = &patch.name {
                entity.set_name(name.clone());
            }
            if let Some(email) = &patch.email {
                entity.set_email(Some(email.clone()));
            }
            if let Some(prompt) = &patch.prompt {
                entity.set_prompt(prompt.clone());
            }

            delta.record_updated(entity_id.clone());
            Ok(())
        }
    }
}

fn ids_at_or_after(catalog: &Catalog, scope: &ScopeKey, position: u32) -> Vec<EntityId> {
    catalog
        .entities_in(scope)
        .into_iter()
        .filter(|member| member.position() >= position)
        .map(|member| member.id().clone())
        .collect()
}
