// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Catalogue interchange.
//!
//! Hosts serve the catalogue as one JSON payload per editing session; this
//! module decodes that payload into a validated [`crate::model::Catalog`] and
//! encodes one back out deterministically.

pub mod snapshot;

pub use snapshot::{
    catalog_schema, decode_catalog, encode_catalog, CatalogJson, EntityJson, SnapshotError,
};
