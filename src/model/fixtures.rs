// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Naiad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Naiad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::catalog::Catalog;
use super::entity::{Entity, EntityKind};
use super::ids::{CatalogId, EntityId};

pub(crate) fn eid(value: &str) -> EntityId {
    EntityId::new(value).expect("entity id")
}

fn push(catalog: &mut Catalog, entity: Entity) {
    catalog.insert(entity, None).expect("fixture insert");
}

/// Invoice-extraction catalogue shared across unit tests.
///
/// Schema: InvoiceNumber, LineItems {Description, UnitPrice, Total},
/// VendorName. Steps: Intake {InvoiceDate, GrandTotal}, Review {Flag}.
/// Plus one participant, knowledge document, extraction rule, and supplied
/// document each.
pub(crate) fn invoice_catalog() -> Catalog {
    let mut catalog = Catalog::new(CatalogId::new("cat:invoice").expect("catalog id"));

    push(
        &mut catalog,
        Entity::new(eid("f:number"), EntityKind::SchemaField, "InvoiceNumber"),
    );
    let mut items = Entity::new(eid("c:items"), EntityKind::Collection, "LineItems");
    items.set_prompt("Rows of the invoice table.");
    push(&mut catalog, items);
    push(
        &mut catalog,
        Entity::new(eid("f:vendor"), EntityKind::SchemaField, "VendorName"),
    );

    push(
        &mut catalog,
        Entity::new(eid("cp:desc"), EntityKind::CollectionProperty, "Description")
            .in_container(eid("c:items")),
    );
    push(
        &mut catalog,
        Entity::new(eid("cp:unit"), EntityKind::CollectionProperty, "UnitPrice")
            .in_container(eid("c:items")),
    );
    let mut total = Entity::new(eid("cp:total"), EntityKind::CollectionProperty, "Total")
        .in_container(eid("c:items"));
    total.set_prompt("Multiply @referenced-field:cp:unit by the row quantity.");
    push(&mut catalog, total);

    push(
        &mut catalog,
        Entity::new(eid("s:intake"), EntityKind::WorkflowStep, "Intake"),
    );
    push(
        &mut catalog,
        Entity::new(eid("s:review"), EntityKind::WorkflowStep, "Review"),
    );

    push(
        &mut catalog,
        Entity::new(eid("v:date"), EntityKind::WorkflowStepValue, "InvoiceDate")
            .in_container(eid("s:intake")),
    );
    let mut amount = Entity::new(eid("v:amount"), EntityKind::WorkflowStepValue, "GrandTotal")
        .in_container(eid("s:intake"));
    amount.set_prompt(
        "Sum @referenced-field:cp:total across @referenced-collection:c:items.",
    );
    push(&mut catalog, amount);
    push(
        &mut catalog,
        Entity::new(eid("v:flag"), EntityKind::WorkflowStepValue, "Flag")
            .in_container(eid("s:review")),
    );

    let mut rivka = Entity::new(eid("pa:rivka"), EntityKind::Participant, "Rivka Stein");
    rivka.set_email(Some("rivka@example.com"));
    push(&mut catalog, rivka);
    push(
        &mut catalog,
        Entity::new(eid("kd:policy"), EntityKind::KnowledgeDocument, "Billing Policy"),
    );
    push(
        &mut catalog,
        Entity::new(eid("xr:net30"), EntityKind::ExtractionRule, "Net 30 Terms"),
    );
    push(
        &mut catalog,
        Entity::new(eid("sd:sample"), EntityKind::SuppliedDocument, "Sample Invoice"),
    );

    catalog
}
