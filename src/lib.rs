// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Naiad — reference-aware prompt editing over an ordered entity catalogue.
//!
//! The catalogue ([`model`]) keeps extraction entities densely ordered per
//! scope; [`query`] derives what each entity may cite; [`editor`] turns
//! keystrokes into canonical `@` reference tokens; [`ops`] applies host
//! mutations atomically with revision checks; [`store`] decodes and encodes
//! the JSON interchange form; [`resolve`] re-checks tokens at render time.

pub mod editor;
pub mod model;
pub mod ops;
pub mod query;
pub mod resolve;
pub mod store;
