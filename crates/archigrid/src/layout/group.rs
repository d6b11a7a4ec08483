//! Sibling grouping inside cells.
//!
//! Members of a cell that are direct children of the same container are
//! placed side by side in one group. Every other member forms a group of
//! its own, so unrelated elements stack vertically and can be aligned with
//! their partners in neighboring columns.

use std::collections::HashMap;

use log::debug;
use petgraph::graph::NodeIndex;

use archigrid_core::identifier::Id;

use super::{
    matrix::CellAddress,
    session::{LayoutSession, SiblingGroup},
};
use crate::structure::DiagramGraph;

/// Builds the sibling groups of every cell from its sorted members.
pub fn group_siblings(session: &mut LayoutSession) {
    let graph = session.graph;
    let mut group_count = 0;

    for address in CellAddress::all() {
        let cell = session.cell_mut(address);
        cell.groups = sibling_groups(graph, &cell.members);
        group_count += cell.groups.len();
    }

    debug!(groups = group_count; "Sibling groups built");
}

fn sibling_groups(graph: &DiagramGraph, members: &[NodeIndex]) -> Vec<SiblingGroup> {
    let mut groups: Vec<SiblingGroup> = Vec::new();
    let mut by_parent: HashMap<Id, usize> = HashMap::new();

    for &member in members {
        let parent = graph.parent(member);
        match parent.and_then(|parent| by_parent.get(&parent)) {
            Some(&group) => groups[group].push(member),
            None => {
                groups.push(SiblingGroup::new(member));
                if let Some(parent) = parent {
                    by_parent.insert(parent, groups.len() - 1);
                }
            }
        }
    }

    groups
}
