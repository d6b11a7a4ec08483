//! Refinements applied once every element has its final cell position.
//!
//! Each refiner visits the singleton groups cell by cell and updates the
//! results in place, so an element visited later sees the changes made to
//! the ones before it.

use std::collections::HashMap;

use log::{debug, trace};
use petgraph::graph::NodeIndex;

use super::{matrix::CellAddress, session::LayoutSession};

/// Widens a singleton to the widest multi-member group it is connected to.
///
/// The element keeps its center. Elements already wider, e.g. spanning
/// elements of a staircase, are never shrunk.
pub fn stretch_to_sibling_groups(session: &mut LayoutSession) {
    let graph = session.graph;

    let mut group_width: HashMap<NodeIndex, f32> = HashMap::new();
    for address in CellAddress::all() {
        for group in &session.cell(address).groups {
            if group.is_singleton() {
                continue;
            }
            let width = session.group_size(group).width();
            group_width.extend(group.members().iter().map(|&member| (member, width)));
        }
    }

    let mut stretched = 0;
    for member in singletons(session) {
        let widest = graph
            .partners(member)
            .iter()
            .filter_map(|partner| group_width.get(partner))
            .fold(0.0f32, |widest, &width| widest.max(width));

        let Some(rect) = session.rect(member) else {
            continue;
        };
        if widest <= rect.width() as f32 {
            continue;
        }

        let width = widest.round() as i32;
        let x = (rect.center_x() - width as f32 / 2.0).round() as i32;
        session.results.insert(member, rect.with_horizontal(x, width));
        stretched += 1;
    }

    debug!(stretched = stretched; "Singletons stretched to sibling groups");
}

/// Re-centers a singleton horizontally on its partners in the same column
/// but other rows.
pub fn center_over_connected(session: &mut LayoutSession) {
    let graph = session.graph;

    for member in singletons(session) {
        if session.staircase.contains(&member) {
            continue;
        }
        let (Some(rect), Some(&address)) = (session.rect(member), session.cell_of.get(&member))
        else {
            continue;
        };

        let centers: Vec<f32> = graph
            .partners(member)
            .iter()
            .filter(|partner| {
                session.cell_of.get(partner).is_some_and(|other| {
                    other.column() == address.column() && other.row() != address.row()
                })
            })
            .filter_map(|&partner| session.rect(partner))
            .map(|partner| partner.center_x())
            .collect();

        if centers.is_empty() {
            continue;
        }

        let average = centers.iter().sum::<f32>() / centers.len() as f32;
        let x = (average - rect.width() as f32 / 2.0).round() as i32;
        trace!(id:% = graph.element(member).id(), x = x; "Centered over connected");
        session.results.insert(member, rect.with_x(x));
    }
}

/// Stretches a singleton vertically over two or more partners in the same
/// row but other columns when they span more than its own height.
///
/// The span is compared with the element's own height rather than the
/// configured element height, so an element that is already taller than its
/// partners' span is never shrunk.
pub fn stretch_height(session: &mut LayoutSession) {
    let graph = session.graph;
    let mut stretched = 0;

    for member in singletons(session) {
        let (Some(rect), Some(&address)) = (session.rect(member), session.cell_of.get(&member))
        else {
            continue;
        };

        let partners: Vec<_> = graph
            .partners(member)
            .iter()
            .filter(|partner| {
                session.cell_of.get(partner).is_some_and(|other| {
                    other.row() == address.row() && other.column() != address.column()
                })
            })
            .filter_map(|&partner| session.rect(partner))
            .collect();

        if partners.len() < 2 {
            continue;
        }

        let top = partners.iter().map(|p| p.y()).min().unwrap_or(rect.y());
        let bottom = partners.iter().map(|p| p.bottom()).max().unwrap_or(rect.bottom());
        if bottom - top <= rect.height() {
            continue;
        }

        session
            .results
            .insert(member, rect.with_vertical(top, bottom - top));
        stretched += 1;
    }

    debug!(stretched = stretched; "Heights stretched across columns");
}

/// Members of singleton groups, cell by cell.
fn singletons(session: &LayoutSession) -> Vec<NodeIndex> {
    CellAddress::all()
        .flat_map(|address| session.cell(address).groups.iter())
        .filter(|group| group.is_singleton())
        .map(|group| group.first())
        .collect()
}
