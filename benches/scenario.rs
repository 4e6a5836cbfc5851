// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use naiad::editor::{suggestions, PromptEditor};
use naiad::model::{Catalog, EntityId};
use naiad::ops::{apply_ops, EntityPatch, Op};
use naiad::resolve::audit_entity;
use naiad::store::encode_catalog;

mod fixtures;
mod profiler;

/// One full editing round on a committed value: seed the editor with its
/// prompt, type an open reference, accept the top suggestion, persist the
/// new prompt through an op batch, re-audit the author and encode the
/// catalogue for the host.
fn edit_cycle(catalog: &mut Catalog, author_id: &EntityId) -> u64 {
    let seeded = catalog
        .entity(author_id)
        .expect("author exists")
        .prompt()
        .to_owned();
    let mut editor = PromptEditor::new();
    editor.set_text(seeded);
    editor.insert_str(" Compare against @Val");

    let candidate = {
        let picks = suggestions(&editor, catalog, author_id)
            .expect("author resolves")
            .expect("token is open");
        picks
            .candidates
            .first()
            .expect("suggestions are non-empty")
            .clone()
    };
    let accepted = editor.accept(&candidate);
    assert!(accepted, "open token must accept");

    let base_rev = catalog.rev();
    let patch = EntityPatch {
        prompt: Some(editor.text().to_owned()),
        ..EntityPatch::default()
    };
    let result = apply_ops(
        catalog,
        base_rev,
        &[Op::Update {
            entity_id: author_id.clone(),
            patch,
        }],
    )
    .expect("apply_ops");

    let findings = audit_entity(catalog, author_id).expect("audit_entity");
    let json = encode_catalog(catalog).expect("encode_catalog");

    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(result.new_rev);
    acc = acc.wrapping_mul(131).wrapping_add(findings.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(json.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(editor.cursor() as u64);
    acc
}

// Benchmark identity (keep stable):
// - Group name in this file: `scenario.edit_cycle`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small_edit_1`, `large_cited_edit_1`).
// - If implementations move/deduplicate, update the wiring but do not rename
//   group or case IDs.
fn benches_scenario(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenario.edit_cycle");

    let catalog_small = fixtures::catalog::fixture(fixtures::catalog::Case::Small);
    let author_small = fixtures::last_value_id(&catalog_small);
    group.bench_function("small_edit_1", move |b| {
        b.iter_batched_ref(
            || catalog_small.clone(),
            |catalog| black_box(edit_cycle(catalog, &author_small)),
            BatchSize::SmallInput,
        )
    });

    let catalog_medium = fixtures::catalog::fixture(fixtures::catalog::Case::Medium);
    let author_medium = fixtures::last_value_id(&catalog_medium);
    group.bench_function("medium_edit_1", move |b| {
        b.iter_batched_ref(
            || catalog_medium.clone(),
            |catalog| black_box(edit_cycle(catalog, &author_medium)),
            BatchSize::SmallInput,
        )
    });

    let catalog_large = fixtures::catalog::fixture(fixtures::catalog::Case::LargeCited);
    let author_large = fixtures::last_value_id(&catalog_large);
    group.bench_function("large_cited_edit_1", move |b| {
        b.iter_batched_ref(
            || catalog_large.clone(),
            |catalog| black_box(edit_cycle(catalog, &author_large)),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_scenario
}
criterion_main!(benches);
