// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use naiad::editor::Candidate;
use naiad::model::{
    Catalog, CatalogId, Entity, EntityId, EntityKind, RefCategory, RefToken, ScopeKey,
};
use naiad::resolve::Finding;

fn pad_prose(mut text: String, target_len: usize) -> String {
    // Filler carries no '@', so woven tokens stay the only references.
    const FILLER: &str = " Keep the source wording verbatim.";
    while text.len() < target_len {
        text.push_str(FILLER);
    }
    text
}

/// The value at the deepest position of the last step: the querent with the
/// widest visibility horizon a fixture can offer.
pub fn last_value_id(catalog: &Catalog) -> EntityId {
    let step_id = catalog
        .entities_in(&ScopeKey::Steps)
        .last()
        .map(|step| step.id().clone())
        .expect("fixture has >= 1 step");
    catalog
        .entities_in(&ScopeKey::Values(step_id))
        .last()
        .map(|value| value.id().clone())
        .expect("fixture step has >= 1 value")
}

/// The property at the deepest position of the last collection.
pub fn last_property_id(catalog: &Catalog) -> EntityId {
    let collection_id = catalog
        .entities_in(&ScopeKey::Schema)
        .into_iter()
        .filter(|entity| entity.kind() == EntityKind::Collection)
        .next_back()
        .map(|collection| collection.id().clone())
        .expect("fixture has >= 1 collection");
    catalog
        .entities_in(&ScopeKey::Properties(collection_id))
        .last()
        .map(|property| property.id().clone())
        .expect("fixture collection has >= 1 property")
}

pub fn checksum_catalog(catalog: &Catalog) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(catalog.rev());
    for (entity_id, entity) in catalog.entities() {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(entity_id.as_str().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add((entity.kind() as u8) as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(entity.name().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(entity.prompt().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(entity.position() as u64);
        if let Some(email) = entity.email() {
            acc = acc.wrapping_mul(131).wrapping_add(email.len() as u64);
        }
    }
    acc
}

pub fn checksum_visible(entities: &[&Entity]) -> u64 {
    let mut acc = 0u64;
    for entity in entities {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(entity.id().as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(entity.position() as u64);
    }
    acc
}

pub fn checksum_findings(findings: &[Finding]) -> u64 {
    let mut acc = 0u64;
    for finding in findings {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(finding.author_id.as_str().len() as u64);
        acc = acc.wrapping_mul(131).wrapping_add(finding.start as u64);
        acc = acc.wrapping_mul(131).wrapping_add(finding.end as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add((finding.status as u8) as u64);
    }
    acc
}

pub fn checksum_candidates(candidates: &[Candidate]) -> u64 {
    let mut acc = 0u64;
    for candidate in candidates {
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(candidate.id.as_str().len() as u64);
        acc = acc
            .wrapping_mul(131)
            .wrapping_add(candidate.name.len() as u64);
    }
    acc
}

pub mod catalog {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub fields: usize,
        pub collections: usize,
        pub props_per_collection: usize,
        pub steps: usize,
        pub values_per_step: usize,
        pub prompt_len: usize,
        /// Every n-th property/value prompt weaves in a token citing an
        /// earlier entity (0 disables citations).
        pub cite_stride: usize,
    }

    impl Params {
        pub const fn new(
            fields: usize,
            collections: usize,
            props_per_collection: usize,
            steps: usize,
            values_per_step: usize,
            prompt_len: usize,
            cite_stride: usize,
        ) -> Self {
            Self {
                fields,
                collections,
                props_per_collection,
                steps,
                values_per_step,
                prompt_len,
                cite_stride,
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        Medium,
        LargeCited,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::Medium => "medium",
                Self::LargeCited => "large_cited",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(8, 1, 4, 2, 4, 48, 2),
                Self::Medium => Params::new(24, 3, 8, 4, 12, 96, 2),
                Self::LargeCited => Params::new(60, 6, 12, 8, 25, 160, 1),
            }
        }
    }

    fn entity_id(raw: String) -> EntityId {
        EntityId::new(raw).expect("valid entity id")
    }

    fn field_id(idx: usize) -> EntityId {
        entity_id(format!("f:{idx:04}"))
    }

    fn collection_id(idx: usize) -> EntityId {
        entity_id(format!("c:{idx:02}"))
    }

    fn prop_id(collection: usize, idx: usize) -> EntityId {
        entity_id(format!("cp:{collection:02}-{idx:03}"))
    }

    fn step_id(idx: usize) -> EntityId {
        entity_id(format!("s:{idx:02}"))
    }

    fn value_id(step: usize, idx: usize) -> EntityId {
        entity_id(format!("v:{step:02}-{idx:03}"))
    }

    fn field_token(target: EntityId) -> RefToken {
        RefToken::Structural {
            category: RefCategory::ReferencedField,
            target_id: target,
        }
    }

    fn insert(catalog: &mut Catalog, entity: Entity) {
        catalog.insert(entity, None).expect("insert fixture entity");
    }

    /// Deterministic invoice-shaped catalogue generator.
    ///
    /// Ordered scopes fill in definition order and every woven token cites
    /// an entity its author can already see, so fixtures audit clean.
    pub fn build(params: Params) -> Catalog {
        assert!(params.fields >= 1, "fields must be >= 1");
        assert!(params.steps >= 1, "steps must be >= 1");
        assert!(params.values_per_step >= 1, "values_per_step must be >= 1");

        let mut catalog = Catalog::new(CatalogId::new("cat:bench").expect("valid catalog id"));
        let mut seq = 0usize;

        for idx in 0..params.fields {
            let mut field = Entity::new(
                field_id(idx),
                EntityKind::SchemaField,
                format!("Field{idx:04}"),
            );
            field.set_prompt(pad_prose(
                format!("Extract Field{idx:04} from the document header."),
                params.prompt_len,
            ));
            insert(&mut catalog, field);
        }

        for ci in 0..params.collections {
            let cid = collection_id(ci);
            let mut collection =
                Entity::new(cid.clone(), EntityKind::Collection, format!("Table{ci:02}"));
            collection.set_prompt(pad_prose(
                format!("Rows of Table{ci:02} in reading order."),
                params.prompt_len,
            ));
            insert(&mut catalog, collection);

            for pi in 0..params.props_per_collection {
                let mut text = format!("Capture Prop{ci:02}_{pi:03} for each row");
                if params.cite_stride > 0 && seq % params.cite_stride == 0 {
                    let token = field_token(field_id(pi % params.fields));
                    text.push_str(&format!(", aligned with {token}"));
                }
                text.push('.');
                seq += 1;

                let mut prop = Entity::new(
                    prop_id(ci, pi),
                    EntityKind::CollectionProperty,
                    format!("Prop{ci:02}_{pi:03}"),
                )
                .in_container(cid.clone());
                prop.set_prompt(pad_prose(text, params.prompt_len));
                insert(&mut catalog, prop);
            }
        }

        for si in 0..params.steps {
            let sid = step_id(si);
            let mut step =
                Entity::new(sid.clone(), EntityKind::WorkflowStep, format!("Step{si:02}"));
            step.set_prompt(format!("Review stage {si:02}."));
            insert(&mut catalog, step);

            for vi in 0..params.values_per_step {
                let mut text = format!("Produce Value{si:02}_{vi:03}");
                if params.cite_stride > 0 && seq % params.cite_stride == 0 {
                    let target = if si > 0 && vi % 2 == 1 {
                        value_id(si - 1, vi % params.values_per_step)
                    } else {
                        field_id(vi % params.fields)
                    };
                    text.push_str(&format!(", derived from {}", field_token(target)));
                    if seq % 5 == 0 {
                        text.push_str(" as agreed with @Reviewer A (reviewer.a@example.com)");
                    }
                }
                text.push('.');
                seq += 1;

                let mut value = Entity::new(
                    value_id(si, vi),
                    EntityKind::WorkflowStepValue,
                    format!("Value{si:02}_{vi:03}"),
                )
                .in_container(sid.clone());
                value.set_prompt(pad_prose(text, params.prompt_len));
                insert(&mut catalog, value);
            }
        }

        for (idx, letter) in ["A", "B", "C"].into_iter().enumerate() {
            let mut participant = Entity::new(
                entity_id(format!("pa:{idx:02}")),
                EntityKind::Participant,
                format!("Reviewer {letter}"),
            );
            participant.set_email(Some(format!(
                "reviewer.{}@example.com",
                letter.to_ascii_lowercase()
            )));
            insert(&mut catalog, participant);
        }

        for idx in 0..2usize {
            let mut doc = Entity::new(
                entity_id(format!("kd:{idx:02}")),
                EntityKind::KnowledgeDocument,
                format!("Handbook{idx:02}"),
            );
            doc.set_prompt(format!("Background notes, part {idx:02}."));
            insert(&mut catalog, doc);

            let mut rule = Entity::new(
                entity_id(format!("er:{idx:02}")),
                EntityKind::ExtractionRule,
                format!("Rule{idx:02}"),
            );
            rule.set_prompt(format!("House rule {idx:02}."));
            insert(&mut catalog, rule);

            let sample = Entity::new(
                entity_id(format!("sd:{idx:02}")),
                EntityKind::SuppliedDocument,
                format!("Sample{idx:02}"),
            );
            insert(&mut catalog, sample);
        }

        catalog
    }

    pub fn fixture(case: Case) -> Catalog {
        build(case.params())
    }
}
