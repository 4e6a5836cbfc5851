// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over catalogues: the visibility sets behind reference
//! suggestions, plus prompt search and citation lookups for hosts.

pub mod search;
pub mod visibility;

pub use search::{citations_of, prompt_search, Citation, CitationsError, PromptSearchMode};
pub use visibility::{visible_from, visible_to_draft, VisibilityError};
