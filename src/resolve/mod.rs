// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render-time reference checking.
//!
//! The editor inserts tokens without validating them (typing must never be
//! rejected), so validity is established here instead: scan prompt text for
//! canonical tokens, resolve each against the catalogue, and audit whole
//! catalogues for dangling or out-of-visibility references.

pub mod audit;
pub mod scan;

pub use audit::{
    audit_catalog, audit_entity, resolve_token, Finding, ParseRefStatusError, RefStatus,
};
pub use scan::{scan_prompt, ScannedRef};
