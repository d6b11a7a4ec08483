//! Topological ordering of the members of each cell.
//!
//! A relationship `source → target` between two members of the same cell
//! puts the target above the source, so arrows point upward: a process sits
//! above the function composing it, a role above the actor assigned to it.

use std::collections::{HashMap, VecDeque};

use log::{debug, trace};
use petgraph::graph::NodeIndex;

use super::{matrix::CellAddress, session::LayoutSession};
use crate::structure::DiagramGraph;

/// Reorders every cell with more than one member.
pub fn sort_cells(session: &mut LayoutSession) {
    let graph = session.graph;

    for address in CellAddress::all() {
        let cell = session.cell_mut(address);
        if cell.members.len() <= 1 {
            continue;
        }
        cell.members = topological_order(graph, &cell.members);
    }

    debug!("Cells sorted");
}

/// Orders `members` so relationship targets come before their sources.
///
/// Uses Kahn's algorithm with a FIFO queue seeded in member order. Members
/// left over by a cycle are appended in their original order.
fn topological_order(graph: &DiagramGraph, members: &[NodeIndex]) -> Vec<NodeIndex> {
    let position: HashMap<NodeIndex, usize> = members
        .iter()
        .enumerate()
        .map(|(pos, &idx)| (idx, pos))
        .collect();

    // Reversed arcs: target -> sources depending on it.
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); members.len()];
    let mut in_degree = vec![0usize; members.len()];

    for (pos, &member) in members.iter().enumerate() {
        for target in graph.outgoing(member) {
            if target == member {
                continue;
            }
            if let Some(&target_pos) = position.get(&target) {
                dependents[target_pos].push(pos);
                in_degree[pos] += 1;
            }
        }
    }

    let mut queue: VecDeque<usize> = (0..members.len())
        .filter(|&pos| in_degree[pos] == 0)
        .collect();
    let mut placed = vec![false; members.len()];
    let mut sorted = Vec::with_capacity(members.len());

    while let Some(pos) = queue.pop_front() {
        placed[pos] = true;
        sorted.push(members[pos]);
        for &dependent in &dependents[pos] {
            in_degree[dependent] -= 1;
            if in_degree[dependent] == 0 {
                queue.push_back(dependent);
            }
        }
    }

    if sorted.len() < members.len() {
        trace!(
            cyclic = members.len() - sorted.len();
            "Cycle in cell, keeping original order for the rest"
        );
        sorted.extend(
            members
                .iter()
                .zip(&placed)
                .filter(|(_, placed)| !**placed)
                .map(|(&idx, _)| idx),
        );
    }

    sorted
}
