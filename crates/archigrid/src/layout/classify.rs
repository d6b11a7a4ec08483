//! Element type to matrix cell classification.

use log::{debug, trace};

use archigrid_core::semantic::{ElementType, Facet};

use super::{
    matrix::{CellAddress, Column, Row},
    session::LayoutSession,
};

/// Returns the cell an element of `element_type` belongs to.
///
/// Row and column are resolved independently from the type's facets, most
/// specific facet first. Types without a usable facet land in the behavior
/// column of the internal business row.
pub fn classify(element_type: ElementType) -> CellAddress {
    CellAddress::new(row_of(element_type), column_of(element_type))
}

fn row_of(element_type: ElementType) -> Row {
    if element_type.has(Facet::Strategy) {
        Row::Strategy
    } else if element_type.has(Facet::ImplementationMigration) {
        Row::ImplementationMigration
    } else if element_type.has(Facet::Physical) {
        Row::Physical
    } else if element_type.has(Facet::Motivation) {
        Row::Motivation
    } else if element_type.has(Facet::Business) {
        if is_external(element_type) {
            Row::BusinessExternal
        } else {
            Row::BusinessInternal
        }
    } else if element_type.has(Facet::Application) {
        if is_external(element_type) {
            Row::ApplicationExternal
        } else {
            Row::ApplicationInternal
        }
    } else if element_type.has(Facet::Technology) {
        if is_external(element_type) {
            Row::TechnologyExternal
        } else {
            Row::TechnologyInternal
        }
    } else {
        Row::BusinessInternal
    }
}

/// Services and interfaces face the layer above; so do business contracts
/// and representations.
fn is_external(element_type: ElementType) -> bool {
    element_type.has(Facet::Service)
        || element_type.has(Facet::Interface)
        || (element_type.has(Facet::Business) && element_type.has(Facet::Contractual))
}

fn column_of(element_type: ElementType) -> Column {
    if element_type.has(Facet::ActiveStructure) {
        return Column::Active;
    }
    if element_type.has(Facet::PassiveStructure) {
        return Column::Passive;
    }
    if element_type.has(Facet::Behavior) {
        return Column::Behavior;
    }

    match element_type {
        ElementType::Meaning | ElementType::Value => Column::Passive,
        ElementType::Goal
        | ElementType::Requirement
        | ElementType::Principle
        | ElementType::Constraint
        | ElementType::Driver
        | ElementType::Assessment
        | ElementType::Outcome => Column::Behavior,
        _ if element_type.has(Facet::Composite) => Column::Behavior,
        ElementType::Resource => Column::Active,
        _ => Column::Behavior,
    }
}

/// Assigns every element of the graph to its cell, in graph order.
pub fn classify_elements(session: &mut LayoutSession) {
    let graph = session.graph;

    for idx in graph.element_indices() {
        let element = graph.element(idx);
        let address = classify(element.element_type());
        trace!(
            id:% = element.id(),
            row:? = address.row(),
            column:? = address.column();
            "Classified element"
        );
        session.cell_mut(address).members.push(idx);
        session.cell_of.insert(idx, address);
    }

    debug!(elements = session.cell_of.len(); "Elements classified");
}
