// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Catalogues hold the ordered entities of an extraction setup (schema fields,
//! collections and their properties, workflow steps and their values) plus the
//! unordered context pools, and prompts refer to entities through `@` tokens.

pub mod catalog;
pub mod entity;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod ref_token;

pub use catalog::{Catalog, CatalogError};
pub use entity::{Entity, EntityKind, ParseEntityKindError, ScopeKey};
pub use ids::{CatalogId, EntityId, Id, IdError};
pub use ref_token::{ParseRefCategoryError, ParseRefTokenError, RefCategory, RefToken};
