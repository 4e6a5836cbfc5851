// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Batch catalogue mutations.
//!
//! Hosts mutate the catalogue through op lists applied with optimistic
//! concurrency (revision checks). A batch either applies fully or not at all,
//! and produces a minimal delta the host can use to refresh derived state.

use std::collections::HashSet;
use std::fmt;

use crate::model::{Catalog, CatalogError, Entity, EntityId, EntityKind, ScopeKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Add {
        id: EntityId,
        kind: EntityKind,
        name: String,
        email: Option<String>,
        prompt: String,
        container_id: Option<EntityId>,
        at_position: Option<u32>,
    },
    Remove {
        entity_id: EntityId,
    },
    Move {
        entity_id: EntityId,
        to_position: u32,
    },
    Update {
        entity_id: EntityId,
        patch: EntityPatch,
    },
}

/// Partial update; absent fields are left untouched. Positions are never
/// patchable, only `Op::Move` may change them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing which entities changed as the result of a batch.
///
/// Lists are sorted and deduplicated. An id added and removed within one batch
/// cancels out; position shifts caused by a neighbouring insert/remove/move
/// are reported as updates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Delta {
    pub added: Vec<EntityId>,
    pub updated: Vec<EntityId>,
    pub removed: Vec<EntityId>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<EntityId>,
    updated: HashSet<EntityId>,
    removed: HashSet<EntityId>,
}

impl DeltaBuilder {
    fn record_added(&mut self, entity_id: EntityId) {
        // Removed earlier in the same batch means the entity existed at the
        // start and exists at the end: net effect is an update.
        if self.removed.remove(&entity_id) {
            self.updated.insert(entity_id);
            return;
        }
        self.updated.remove(&entity_id);
        self.added.insert(entity_id);
    }

    fn record_removed(&mut self, entity_id: EntityId) {
        self.updated.remove(&entity_id);
        if self.added.remove(&entity_id) {
            return;
        }
        self.removed.insert(entity_id);
    }

    fn record_updated(&mut self, entity_id: EntityId) {
        if self.added.contains(&entity_id) || self.removed.contains(&entity_id) {
            return;
        }
        self.updated.insert(entity_id);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();

        added.sort();
        updated.sort();
        removed.sort();

        Delta {
            added,
            updated,
            removed,
        }
    }
}

pub fn apply_ops(
    catalog: &mut Catalog,
    base_rev: u64,
    ops: &[Op],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = catalog.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict {
            base_rev,
            current_rev,
        });
    }

    if ops.is_empty() {
        return Ok(ApplyResult {
            new_rev: current_rev,
            applied: 0,
            delta: Delta::default(),
        });
    }

    // Ops run against a scratch copy so a failing op rolls the batch back.
    let mut scratch = catalog.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        apply_op(&mut scratch, op, &mut delta)?;
    }

    scratch.bump_rev();
    let new_rev = scratch.rev();
    *catalog = scratch;

    Ok(ApplyResult {
        new_rev,
        applied: ops.len(),
        delta: delta.finish(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    Catalog { source: CatalogError },
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict {
                base_rev,
                current_rev,
            } => {
                write!(
                    f,
                    "stale base_rev (base_rev={base_rev}, current_rev={current_rev})"
                )
            }
            Self::Catalog { source } => write!(f, "catalogue op failed: {source}"),
        }
    }
}

impl std::error::Error for ApplyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Conflict { .. } => None,
            Self::Catalog { source } => Some(source),
        }
    }
}

// Extracted op-application implementation for catalogue mutations.
include!("ops_impl.rs");
